//! Anonymous message form state and validation.
//!
//! DESIGN
//! ======
//! The form owns a single text field. Validation is a pure function over the
//! field text; `MessageForm` layers the field phase and the inline error on
//! top so the component only renders what this module decides.
//!
//! LIFECYCLE
//! =========
//! `Empty -> Editing -> {Valid, Invalid} -> Submitted`. Any further input
//! returns the field to `Editing`; submitting never resets the text.

#[cfg(test)]
#[path = "message_form_test.rs"]
mod message_form_test;

use serde::Serialize;

use super::toast::Toast;

/// Minimum accepted message length, in UTF-16 code units.
pub const MIN_MESSAGE_LEN: usize = 10;
/// Maximum accepted message length, in UTF-16 code units.
pub const MAX_MESSAGE_LEN: usize = 160;

const SUBMITTED_TITLE: &str = "You submitted the following values:";

/// Field-level constraint violation. Rendered inline, never propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Message must be at least {min} characters.")]
    TooShort { min: usize, actual: usize },

    #[error("Message must not be longer than {max} characters.")]
    TooLong { max: usize, actual: usize },
}

/// Message text that has passed [`validate`]. Only constructible through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidInput(String);

impl ValidInput {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Check the message length bound.
///
/// Length is counted in UTF-16 code units, the same measure the browser
/// uses for a textarea value, so an emoji outside the BMP counts twice.
///
/// # Errors
///
/// Returns [`ValidationError::TooShort`] below [`MIN_MESSAGE_LEN`] and
/// [`ValidationError::TooLong`] above [`MAX_MESSAGE_LEN`].
pub fn validate(input: &str) -> Result<ValidInput, ValidationError> {
    let actual = input.encode_utf16().count();
    if actual < MIN_MESSAGE_LEN {
        return Err(ValidationError::TooShort { min: MIN_MESSAGE_LEN, actual });
    }
    if actual > MAX_MESSAGE_LEN {
        return Err(ValidationError::TooLong { max: MAX_MESSAGE_LEN, actual });
    }
    Ok(ValidInput(input.to_owned()))
}

/// Where the message field is in its edit/submit lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldPhase {
    #[default]
    Empty,
    Editing,
    Valid,
    Invalid,
    Submitted,
}

/// Payload shown back to the sender after a submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedMessage {
    #[serde(rename = "anonymousMessage")]
    pub anonymous_message: String,
}

impl SubmittedMessage {
    /// Two-space indented JSON, matching what the page displays.
    #[must_use]
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|_| format!("{{\n  \"anonymousMessage\": {:?}\n}}", self.anonymous_message))
    }
}

/// State for the public-profile message form.
#[derive(Clone, Debug, Default)]
pub struct MessageForm {
    anonymous_message: String,
    phase: FieldPhase,
    error: Option<ValidationError>,
}

impl MessageForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.anonymous_message
    }

    #[must_use]
    pub fn phase(&self) -> FieldPhase {
        self.phase
    }

    #[must_use]
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Apply a keystroke-level change to the field.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.anonymous_message = text.into();
        self.error = None;
        self.phase = if self.anonymous_message.is_empty() { FieldPhase::Empty } else { FieldPhase::Editing };
    }

    /// Replace the field with a picked suggestion. Not re-validated until the
    /// next submit attempt.
    pub fn select_suggestion(&mut self, text: &str) {
        text.clone_into(&mut self.anonymous_message);
        self.error = None;
        self.phase = FieldPhase::Editing;
    }

    /// Validate the current field value and record the outcome.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] that is now shown under the field.
    pub fn validate_field(&mut self) -> Result<ValidInput, ValidationError> {
        match validate(&self.anonymous_message) {
            Ok(input) => {
                self.error = None;
                self.phase = FieldPhase::Valid;
                Ok(input)
            }
            Err(e) => {
                self.error = Some(e);
                self.phase = FieldPhase::Invalid;
                Err(e)
            }
        }
    }

    /// Accept a validated message. Local only: nothing is sent anywhere, the
    /// sender just gets the submitted values echoed back as a toast.
    pub fn submit(&mut self, input: ValidInput) -> Toast {
        self.phase = FieldPhase::Submitted;
        let payload = SubmittedMessage { anonymous_message: input.0 };
        Toast::info(SUBMITTED_TITLE).with_code(payload.pretty())
    }
}
