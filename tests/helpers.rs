use hal_browser::model::constants::FLOATING_MARGIN;
use hal_browser::{floating_origin, validate_name};

#[test]
fn validate_name_trims_whitespace() {
    assert_eq!(validate_name("  stm32 \t"), Ok("stm32"));
}

#[test]
fn validate_name_rejects_blank() {
    assert!(validate_name("").is_err());
    assert!(validate_name("   ").is_err());
}

#[test]
fn validate_name_rejects_path_like_names() {
    for name in [".", "..", "a/b", "a\\b", "/etc", " .. "] {
        assert!(validate_name(name).is_err(), "{name:?} should be rejected");
    }
}

#[test]
fn validate_name_accepts_dots_inside_names() {
    assert_eq!(validate_name("stm32.f4"), Ok("stm32.f4"));
    assert_eq!(validate_name("串口"), Ok("串口"));
}

#[test]
fn floating_origin_is_bottom_right() {
    assert_eq!(
        floating_origin(1920.0, 1080.0),
        (1920.0 - FLOATING_MARGIN, 1080.0 - FLOATING_MARGIN)
    );
}

#[test]
fn floating_origin_never_goes_negative() {
    assert_eq!(floating_origin(50.0, 10.0), (0.0, 0.0));
}
