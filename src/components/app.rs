use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::image_view::ImageView;
use crate::debounce::ResizeDebouncer;
use crate::state::detect_is_mobile;

#[function_component(App)]
pub fn app() -> Html {
    let is_mobile = use_state(detect_is_mobile);

    // Re-evaluate the breakpoint once per quiet interval after resize bursts
    {
        let is_mobile = is_mobile.clone();
        use_effect_with((), move |_| {
            let debouncer = Rc::new(RefCell::new(ResizeDebouncer::new(move || {
                let mobile = detect_is_mobile();
                log::debug!("breakpoint re-evaluated: is_mobile={mobile}");
                is_mobile.set(mobile);
            })));
            let resize_cb = {
                let debouncer = debouncer.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    debouncer.borrow_mut().schedule();
                }) as Box<dyn FnMut(_)>)
            };
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
            }
            move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        resize_cb.as_ref().unchecked_ref(),
                    );
                }
                debouncer.borrow_mut().cancel();
                let _keep_alive = &resize_cb;
            }
        });
    }

    html! {
        <div id="root">
            <ImageView src={"assets/sample.jpg"} is_mobile={*is_mobile} />
        </div>
    }
}
