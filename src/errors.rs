//! Error types for the songwriting engine
//!
//! Counting, statistics, planning and redaction are total functions and never
//! fail. Errors only come from request validation, prompt rendering, embedded
//! data tables, and the external gateways.

use thiserror::Error;

/// Failure reported by an external collaborator (generation or word lookup)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The generation gateway failed (quota, network, malformed response)
    #[error("generation failed{}", format_message(.message))]
    GenerationFailed { message: Option<String> },

    /// The word-lookup gateway failed
    #[error("lookup failed{}", format_message(.message))]
    LookupFailed { message: Option<String> },
}

impl GatewayError {
    pub fn generation(message: impl Into<String>) -> Self {
        GatewayError::GenerationFailed {
            message: Some(message.into()),
        }
    }

    pub fn lookup(message: impl Into<String>) -> Self {
        GatewayError::LookupFailed {
            message: Some(message.into()),
        }
    }
}

fn format_message(message: &Option<String>) -> String {
    match message {
        Some(m) if !m.is_empty() => format!(": {}", m),
        _ => String::new(),
    }
}

/// Top-level engine error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LyricError {
    /// Generation request rejected before reaching the gateway
    #[error("Invalid generation request: {0}")]
    InvalidRequest(String),

    /// Prompt template failed to compile or render
    #[error("Template rendering failed: {0}")]
    Template(String),

    /// Embedded data table could not be parsed
    #[error("Invalid data table: {0}")]
    Data(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl From<mustache::Error> for LyricError {
    fn from(e: mustache::Error) -> Self {
        LyricError::Template(e.to_string())
    }
}

impl From<serde_yaml::Error> for LyricError {
    fn from(e: serde_yaml::Error) -> Self {
        LyricError::Data(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_messages() {
        let err = GatewayError::GenerationFailed { message: None };
        assert_eq!(err.to_string(), "generation failed");

        let err = GatewayError::generation("quota exceeded");
        assert_eq!(err.to_string(), "generation failed: quota exceeded");

        let err = GatewayError::lookup("timeout");
        assert_eq!(err.to_string(), "lookup failed: timeout");
    }

    #[test]
    fn test_lyric_error_wraps_gateway() {
        let err: LyricError = GatewayError::generation("boom").into();
        assert_eq!(err.to_string(), "generation failed: boom");
    }
}
