// Mobile breakpoint detection: viewport width, touch capability, user agent.

#[cfg(test)]
#[path = "breakpoint_test.rs"]
mod breakpoint_test;

use wasm_bindgen::JsValue;

/// Viewports narrower than this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

const MOBILE_UA_KEYWORDS: [&str; 9] = [
    "android",
    "iphone",
    "ipad",
    "ipod",
    "windows phone",
    "mobi",
    "tablet",
    "webos",
    "blackberry",
];

/// Case-insensitive substring match against the fixed mobile keyword set.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    MOBILE_UA_KEYWORDS.iter().any(|kw| ua.contains(kw))
}

/// Pure predicate: narrow viewport, touch support, or a mobile user agent.
pub fn is_mobile_device(viewport_width: f64, touch_capable: bool, user_agent: &str) -> bool {
    viewport_width < MOBILE_BREAKPOINT_PX || touch_capable || is_mobile_user_agent(user_agent)
}

/// Evaluate [`is_mobile_device`] against the live browser environment.
///
/// Returns `false` when no browsing context is available (server-side or
/// non-browser execution) rather than failing.
pub fn detect_is_mobile() -> bool {
    if let Some(window) = web_sys::window() {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let touch_capable =
            js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
        let user_agent = window.navigator().user_agent().unwrap_or_default();
        is_mobile_device(width, touch_capable, &user_agent)
    } else {
        false
    }
}
