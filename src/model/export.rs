//! Export outcome models
//!
//! One export attempt ends in either an artifact (bytes plus filename,
//! used once to trigger a local save) or a structured error response.
//! The classification rule for what the user sees lives here so both
//! the dispatcher and its tests share it.

use serde::Deserialize;

/// Error code resolvers use when they have nothing specific to say.
/// Messages carrying this code are not worth showing verbatim.
pub const GENERIC_ERROR_CODE: &str = "unknown_error";

/// Byte payload produced by an export attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Structured failure returned by an export resolver.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            code: Some(code.into()),
        }
    }

    /// The message to surface to the user.
    ///
    /// A provided message is shown verbatim unless it came with the
    /// generic fallback code (or no message at all), in which case the
    /// caller's localized generic message is used instead.
    pub fn display_message(&self, generic: &str) -> String {
        match (&self.message, self.code.as_deref()) {
            (Some(message), code) if code != Some(GENERIC_ERROR_CODE) => message.clone(),
            _ => generic.to_string(),
        }
    }
}

/// Result of one export attempt, delivered through the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Done(Artifact),
    Failed(ErrorResponse),
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERIC: &str = "An error occurred while attempting to export the theme.";

    #[test]
    fn test_specific_message_shown_verbatim() {
        let err = ErrorResponse::new("Quota exceeded", "quota");
        assert_eq!(err.display_message(GENERIC), "Quota exceeded");
    }

    #[test]
    fn test_generic_code_masks_message() {
        let err = ErrorResponse::new("ignored", GENERIC_ERROR_CODE);
        assert_eq!(err.display_message(GENERIC), GENERIC);
    }

    #[test]
    fn test_empty_response_falls_back() {
        let err = ErrorResponse::default();
        assert_eq!(err.display_message(GENERIC), GENERIC);
    }

    #[test]
    fn test_message_without_code_shown_verbatim() {
        let err = ErrorResponse {
            message: Some("Disk full".to_string()),
            code: None,
        };
        assert_eq!(err.display_message(GENERIC), "Disk full");
    }

    #[test]
    fn test_error_response_decodes_from_json() {
        let err: ErrorResponse =
            serde_json::from_str(r#"{"message":"Quota exceeded","code":"quota"}"#).unwrap();
        assert_eq!(err, ErrorResponse::new("Quota exceeded", "quota"));

        let empty: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ErrorResponse::default());
    }
}
