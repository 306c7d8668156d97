use thiserror::Error;

/// Failures raised by a transport before any HTTP status is available.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Could not build request: {0}")]
    Request(String),

    #[error("Browser API unavailable: {0}")]
    Browser(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not authenticated")]
    Unauthorized,

    #[error("{0}")]
    Transport(#[from] TransportError),

    #[error("{0}")]
    Backend(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Credentials rejected by the server")]
    CredentialsRejected,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport(_))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_converts() {
        let err: AppError = TransportError::Network("connection refused".into()).into();
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_json_error_converts() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::Serialization(_)));
    }

    #[test]
    fn test_backend_error_is_verbatim() {
        let err = AppError::Backend("Search service unavailable".into());
        assert_eq!(err.to_string(), "Search service unavailable");
        assert!(!err.is_unauthorized());
    }
}
