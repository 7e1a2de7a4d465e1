use thiserror::Error;

use crate::domain::model::{StimulusType, INTENSITY_MAX, INTENSITY_MIN};

#[derive(Error, Debug)]
pub enum ZapError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid arguments: {message}")]
    Usage { message: String },

    #[error("Invalid stimulus type '{given}'")]
    InvalidStimulusType { given: String },

    #[error("Intensity is not a number: '{given}'")]
    InvalidIntensity { given: String },

    #[error("Intensity out of range: {given}")]
    IntensityOutOfRange { given: String },

    #[error("HTTP {code}: {body}")]
    HttpStatus { code: u16, body: String },

    #[error("Connection failed: {reason}")]
    Connection { reason: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },
}

/// Coarse classification used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    HttpStatus,
    Connection,
}

impl ZapError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ZapError::Configuration { .. } => ErrorCategory::Configuration,
            ZapError::Usage { .. }
            | ZapError::InvalidStimulusType { .. }
            | ZapError::InvalidIntensity { .. }
            | ZapError::IntensityOutOfRange { .. } => ErrorCategory::Validation,
            ZapError::HttpStatus { .. } | ZapError::InvalidResponse { .. } => {
                ErrorCategory::HttpStatus
            }
            ZapError::Connection { .. } => ErrorCategory::Connection,
        }
    }

    /// Every failure is terminal for the invocation.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// The text printed to the user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ZapError::Configuration { message } => format!("Error: {}", message),
            ZapError::Usage { message } => message.clone(),
            ZapError::InvalidStimulusType { given } => format!(
                "Error: Invalid stimulus type '{}'. Valid types: {}",
                given,
                StimulusType::valid_names()
            ),
            ZapError::InvalidIntensity { given } => {
                format!("Error: Intensity must be a number, got '{}'", given)
            }
            ZapError::IntensityOutOfRange { given } => format!(
                "Error: Intensity must be between {} and {}, got {}",
                INTENSITY_MIN, INTENSITY_MAX, given
            ),
            ZapError::HttpStatus { code, body } => format!("Error: HTTP {}\n{}", code, body),
            ZapError::Connection { reason } => format!("Error: Connection failed: {}", reason),
            ZapError::InvalidResponse { message } => {
                format!("Error: Unexpected response from API: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ZapError::Configuration { .. } => "Check the PAVLOK_TOKEN variable and command options",
            ZapError::Usage { .. }
            | ZapError::InvalidStimulusType { .. }
            | ZapError::InvalidIntensity { .. }
            | ZapError::IntensityOutOfRange { .. } => "Usage: pavlok-zap [zap|vibe|beep] [1-100]",
            ZapError::HttpStatus { code: 401, .. } | ZapError::HttpStatus { code: 403, .. } => {
                "The token was rejected; log in again and export a fresh PAVLOK_TOKEN"
            }
            ZapError::HttpStatus { .. } | ZapError::InvalidResponse { .. } => {
                "The API rejected the request; check the response body above"
            }
            ZapError::Connection { .. } => "Check your network connection and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, ZapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_share_a_category() {
        let errors = [
            ZapError::InvalidStimulusType { given: "shock".to_string() },
            ZapError::InvalidIntensity { given: "abc".to_string() },
            ZapError::IntensityOutOfRange { given: "150".to_string() },
            ZapError::Usage { message: "error: unexpected argument".to_string() },
        ];
        for e in &errors {
            assert_eq!(e.category(), ErrorCategory::Validation);
            assert_eq!(e.exit_code(), 1);
        }
    }

    #[test]
    fn test_user_friendly_messages() {
        let e = ZapError::IntensityOutOfRange { given: "150".to_string() };
        assert_eq!(
            e.user_friendly_message(),
            "Error: Intensity must be between 1 and 100, got 150"
        );

        let e = ZapError::InvalidStimulusType { given: "shock".to_string() };
        assert_eq!(
            e.user_friendly_message(),
            "Error: Invalid stimulus type 'shock'. Valid types: zap, vibe, beep"
        );

        let e = ZapError::HttpStatus {
            code: 401,
            body: r#"{"error":"invalid token"}"#.to_string(),
        };
        assert_eq!(
            e.user_friendly_message(),
            "Error: HTTP 401\n{\"error\":\"invalid token\"}"
        );
    }
}
