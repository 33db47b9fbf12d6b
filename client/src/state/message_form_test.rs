use super::*;
use crate::state::toast::ToastLevel;

fn text_of_len(n: usize) -> String {
    "a".repeat(n)
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_accepts_lower_bound() {
    assert!(validate(&text_of_len(10)).is_ok());
}

#[test]
fn validate_accepts_upper_bound() {
    assert!(validate(&text_of_len(160)).is_ok());
}

#[test]
fn validate_rejects_nine_chars_as_too_short() {
    assert_eq!(validate(&text_of_len(9)), Err(ValidationError::TooShort { min: 10, actual: 9 }));
}

#[test]
fn validate_rejects_161_chars_as_too_long() {
    assert_eq!(validate(&text_of_len(161)), Err(ValidationError::TooLong { max: 160, actual: 161 }));
}

#[test]
fn validate_rejects_empty() {
    assert!(matches!(validate(""), Err(ValidationError::TooShort { actual: 0, .. })));
}

#[test]
fn validate_covers_every_length_around_the_bounds() {
    for n in 0..=200 {
        let ok = validate(&text_of_len(n)).is_ok();
        assert_eq!(ok, (MIN_MESSAGE_LEN..=MAX_MESSAGE_LEN).contains(&n), "length {n}");
    }
}

#[test]
fn validate_counts_utf16_units_for_astral_chars() {
    // Each emoji is a surrogate pair: five of them reach the lower bound.
    assert!(validate(&"😀".repeat(5)).is_ok());
    assert_eq!(validate(&"😀".repeat(4)), Err(ValidationError::TooShort { min: 10, actual: 8 }));
}

#[test]
fn validate_rejects_81_emoji_as_too_long() {
    assert!(validate(&"😀".repeat(80)).is_ok());
    assert_eq!(validate(&"😀".repeat(81)), Err(ValidationError::TooLong { max: 160, actual: 162 }));
}

#[test]
fn validate_counts_bmp_accents_once() {
    // Multi-byte in UTF-8 but a single UTF-16 unit each.
    assert!(validate(&"é".repeat(10)).is_ok());
    assert!(validate(&"€".repeat(9)).is_err());
}

#[test]
fn validate_keeps_input_verbatim() {
    let input = "  spaced out message  ";
    assert_eq!(validate(input).unwrap().as_str(), input);
}

#[test]
fn validation_error_messages_are_user_facing() {
    assert_eq!(
        ValidationError::TooShort { min: 10, actual: 3 }.to_string(),
        "Message must be at least 10 characters."
    );
    assert_eq!(
        ValidationError::TooLong { max: 160, actual: 200 }.to_string(),
        "Message must not be longer than 160 characters."
    );
}

// =============================================================
// MessageForm lifecycle
// =============================================================

#[test]
fn message_form_starts_empty() {
    let form = MessageForm::new();
    assert_eq!(form.value(), "");
    assert_eq!(form.phase(), FieldPhase::Empty);
    assert!(form.error().is_none());
}

#[test]
fn edit_moves_to_editing_and_back_to_empty() {
    let mut form = MessageForm::new();
    form.edit("h");
    assert_eq!(form.phase(), FieldPhase::Editing);
    form.edit("");
    assert_eq!(form.phase(), FieldPhase::Empty);
}

#[test]
fn validate_field_invalid_sets_inline_error() {
    let mut form = MessageForm::new();
    form.edit("short");
    let err = form.validate_field().unwrap_err();
    assert_eq!(form.phase(), FieldPhase::Invalid);
    assert_eq!(form.error(), Some(err));
}

#[test]
fn edit_after_invalid_returns_to_editing_and_clears_error() {
    let mut form = MessageForm::new();
    form.edit("short");
    let _ = form.validate_field();
    form.edit("short but growing");
    assert_eq!(form.phase(), FieldPhase::Editing);
    assert!(form.error().is_none());
}

#[test]
fn validate_field_valid_then_submit() {
    let mut form = MessageForm::new();
    form.edit("hello there friend");
    let input = form.validate_field().unwrap();
    assert_eq!(form.phase(), FieldPhase::Valid);
    form.submit(input);
    assert_eq!(form.phase(), FieldPhase::Submitted);
}

#[test]
fn submit_does_not_reset_field() {
    let mut form = MessageForm::new();
    form.edit("hello there friend");
    let input = form.validate_field().unwrap();
    form.submit(input);
    assert_eq!(form.value(), "hello there friend");
    form.edit("hello there friend!");
    assert_eq!(form.phase(), FieldPhase::Editing);
}

#[test]
fn submit_toast_pretty_prints_payload() {
    let mut form = MessageForm::new();
    form.edit("hello there friend");
    let input = form.validate_field().unwrap();
    let toast = form.submit(input);
    assert_eq!(toast.level, ToastLevel::Info);
    assert_eq!(toast.title, "You submitted the following values:");
    assert_eq!(toast.code.as_deref(), Some("{\n  \"anonymousMessage\": \"hello there friend\"\n}"));
}

#[test]
fn repeated_submit_of_same_input_yields_equal_toasts() {
    let mut form = MessageForm::new();
    form.edit("the same message");
    let first = form.submit(form.clone().validate_field().unwrap());
    let second = form.submit(form.clone().validate_field().unwrap());
    assert_eq!(first, second);
    assert_eq!(form.phase(), FieldPhase::Submitted);
    assert_eq!(form.value(), "the same message");
}

#[test]
fn select_suggestion_overwrites_value_exactly() {
    let mut form = MessageForm::new();
    form.edit("something I was typing");
    form.select_suggestion("What's new?");
    assert_eq!(form.value(), "What's new?");
    assert_eq!(form.phase(), FieldPhase::Editing);
}

#[test]
fn select_suggestion_does_not_revalidate() {
    let mut form = MessageForm::new();
    form.edit("x");
    let _ = form.validate_field();
    form.select_suggestion("Hi");
    assert!(form.error().is_none());
    assert_eq!(form.phase(), FieldPhase::Editing);
    assert!(form.validate_field().is_err());
}

#[test]
fn submitted_message_serializes_camel_case_key() {
    let payload = SubmittedMessage { anonymous_message: "hi".to_owned() };
    assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"anonymousMessage":"hi"}"#);
}
