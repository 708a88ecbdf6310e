use findkit_core::FindingError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] findkit_core::ValidationError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Finding(#[from] FindingError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Command(_) => 2,
            Self::Finding(FindingError::Status { .. }) => 3,
            Self::Finding(FindingError::Transport { .. }) => 4,
            Self::Finding(_) => 5,
            Self::Serialization(_) => 5,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_stages_have_distinct_exit_codes() {
        let status = CliError::from(FindingError::Status {
            status: 500,
            body: String::new(),
        });
        let transport = CliError::from(FindingError::Transport {
            message: String::from("connection refused"),
            retryable: true,
        });
        let parse = CliError::from(FindingError::Deserialization(String::from("eof")));

        assert_eq!(status.exit_code(), 3);
        assert_eq!(transport.exit_code(), 4);
        assert_eq!(parse.exit_code(), 5);
    }

    #[test]
    fn missing_app_id_is_a_usage_error() {
        let error = CliError::from(findkit_core::ValidationError::MissingEnv {
            name: "FINDKIT_APP_ID",
        });
        assert_eq!(error.exit_code(), 2);
        assert_eq!(error.to_string(), "environment variable FINDKIT_APP_ID is not set");
    }
}
