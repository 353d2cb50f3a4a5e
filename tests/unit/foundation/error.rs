use super::*;

#[test]
fn error_messages_name_the_failure() {
    assert_eq!(
        PhotocalError::UnknownBoxType('q').to_string(),
        "unknown box type 'q'"
    );
    assert_eq!(
        PhotocalError::EmptyFormat.to_string(),
        "format specification contains no boxes"
    );
    assert_eq!(
        PhotocalError::invalid_rect("bad").to_string(),
        "invalid rectangle: bad"
    );
    assert_eq!(
        PhotocalError::config("x").to_string(),
        "configuration error: x"
    );
    assert_eq!(PhotocalError::font("x").to_string(), "font error: x");
    assert_eq!(PhotocalError::canvas("x").to_string(), "canvas error: x");
    assert_eq!(PhotocalError::events("x").to_string(), "event error: x");
}

#[test]
fn wrapped_errors_pass_through_transparently() {
    let err: PhotocalError = anyhow::anyhow!("underlying failure").into();
    assert_eq!(err.to_string(), "underlying failure");
}

#[test]
fn helpers_build_the_matching_variant() {
    assert!(matches!(
        PhotocalError::invalid_rect("r"),
        PhotocalError::InvalidRectangle(_)
    ));
    assert!(matches!(PhotocalError::config("c"), PhotocalError::Config(_)));
    assert!(matches!(PhotocalError::font("f"), PhotocalError::Font(_)));
    assert!(matches!(PhotocalError::canvas("c"), PhotocalError::Canvas(_)));
    assert!(matches!(PhotocalError::events("e"), PhotocalError::Events(_)));
}
