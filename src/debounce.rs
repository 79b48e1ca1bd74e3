// Debounced resize scheduling on top of the browser timeout API.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Quiet interval a resize burst must respect before the callback fires.
pub const DEFAULT_RESIZE_DEBOUNCE_MS: i32 = 200;

/// Collapses bursts of resize events into one callback invocation.
///
/// Each [`schedule`](Self::schedule) cancels the pending timeout and arms a
/// fresh one, so only the most recent request within the delay window
/// survives. Dropping the debouncer cancels any pending timeout; the callback
/// can never fire after teardown.
pub struct ResizeDebouncer {
    delay_ms: i32,
    callback: Closure<dyn FnMut()>,
    pending: Option<i32>,
}

impl ResizeDebouncer {
    pub fn new(callback: impl FnMut() + 'static) -> Self {
        Self::with_delay(callback, DEFAULT_RESIZE_DEBOUNCE_MS)
    }

    pub fn with_delay(callback: impl FnMut() + 'static, delay_ms: i32) -> Self {
        Self {
            delay_ms,
            callback: Closure::wrap(Box::new(callback) as Box<dyn FnMut()>),
            pending: None,
        }
    }

    /// Restart the quiet-interval timer. No-op outside a browsing context.
    pub fn schedule(&mut self) {
        if let Some(window) = web_sys::window() {
            if let Some(id) = self.pending.take() {
                window.clear_timeout_with_handle(id);
            }
            if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                self.delay_ms,
            ) {
                self.pending = Some(id);
            }
        }
    }

    /// Cancel the pending timeout, if any.
    pub fn cancel(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
        }
    }
}

impl Drop for ResizeDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn burst_fires_callback_once() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let mut debouncer = ResizeDebouncer::with_delay(move || c.set(c.get() + 1), 20);
        debouncer.schedule();
        debouncer.schedule();
        debouncer.schedule();
        TimeoutFuture::new(80).await;
        assert_eq!(count.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn cancel_suppresses_pending_callback() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let mut debouncer = ResizeDebouncer::with_delay(move || c.set(c.get() + 1), 20);
        debouncer.schedule();
        debouncer.cancel();
        TimeoutFuture::new(80).await;
        assert_eq!(count.get(), 0);
    }

    #[wasm_bindgen_test]
    async fn drop_releases_pending_timer() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        {
            let mut debouncer = ResizeDebouncer::with_delay(move || c.set(c.get() + 1), 20);
            debouncer.schedule();
        }
        TimeoutFuture::new(80).await;
        assert_eq!(count.get(), 0);
    }

    #[wasm_bindgen_test]
    async fn reschedule_extends_the_quiet_window() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let mut debouncer = ResizeDebouncer::with_delay(move || c.set(c.get() + 1), 40);
        debouncer.schedule();
        TimeoutFuture::new(20).await;
        debouncer.schedule();
        TimeoutFuture::new(20).await;
        assert_eq!(count.get(), 0);
        TimeoutFuture::new(60).await;
        assert_eq!(count.get(), 1);
    }
}
