use thiserror::Error;

/// Errors raised while parsing enumerated values or service configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown {kind} '{value}', expected one of {expected}")]
    UnknownValue {
        kind: &'static str,
        value: String,
        expected: String,
    },

    #[error("environment variable {name} is not set")]
    MissingEnv { name: &'static str },

    #[error("environment variable {name} has invalid value '{value}'")]
    InvalidEnv { name: &'static str, value: String },

    #[error("application id cannot be empty")]
    EmptyAppId,
}

/// Failure of a single request round trip.
///
/// Each variant corresponds to one stage of the fetch sequence: encoding the
/// request, sending it, checking the status line, and decoding the response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FindingError {
    #[error("encoding request: {0}")]
    Serialization(String),

    #[error("sending request: {message}")]
    Transport { message: String, retryable: bool },

    #[error("finding service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("parsing response: {0}")]
    Deserialization(String),
}

impl FindingError {
    /// Status code of a non-200 reply, if this error carries one.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the transport layer classified the failure as transient.
    ///
    /// The client never retries on its own; this is a hint for callers.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { retryable: true, .. })
    }
}
