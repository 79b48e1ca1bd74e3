use super::*;

const DESKTOP_UA: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

#[test]
fn narrow_viewport_alone_is_mobile() {
    assert!(is_mobile_device(500.0, false, DESKTOP_UA));
}

#[test]
fn wide_desktop_is_not_mobile() {
    assert!(!is_mobile_device(1200.0, false, DESKTOP_UA));
}

#[test]
fn breakpoint_boundary_is_exclusive() {
    assert!(!is_mobile_device(MOBILE_BREAKPOINT_PX, false, DESKTOP_UA));
    assert!(is_mobile_device(MOBILE_BREAKPOINT_PX - 0.5, false, DESKTOP_UA));
}

#[test]
fn touch_capability_alone_is_mobile() {
    assert!(is_mobile_device(1200.0, true, DESKTOP_UA));
}

#[test]
fn mobile_user_agent_alone_is_mobile() {
    let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X) AppleWebKit/605.1.15";
    assert!(is_mobile_device(1200.0, false, ua));
}

#[test]
fn keyword_match_is_case_insensitive() {
    assert!(is_mobile_user_agent("Mozilla/5.0 (Linux; ANDROID 13; Pixel 7)"));
    assert!(is_mobile_user_agent("something BlackBerry something"));
}

#[test]
fn every_keyword_is_recognized() {
    let keywords = [
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
    for kw in keywords {
        assert!(is_mobile_user_agent(kw), "keyword not matched: {kw}");
    }
}

#[test]
fn keywords_match_as_substrings() {
    assert!(is_mobile_user_agent(
        "Mozilla/5.0 (Windows Phone 10.0; Android 6.0.1)"
    ));
    assert!(is_mobile_user_agent("Opera/9.80 (J2ME/MIDP; Opera Mobi/23.334)"));
}

#[test]
fn empty_user_agent_is_not_mobile() {
    assert!(!is_mobile_user_agent(""));
    assert!(!is_mobile_device(1200.0, false, ""));
}
