use notifications_domain::shared::{DomainError, ErrorCode, ErrorSeverity};
use serde::{Deserialize, Serialize};

/// Structured error handed to UI callers
///
/// Carries enough for the caller to show a generic load/save failure:
/// - Error code for programmatic handling
/// - Human-readable message
/// - Severity level for presentation
/// - Recoverability flag for retry logic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandError {
    /// Numeric error code (2xxx-6xxx range)
    pub code: u16,

    /// Human-readable error message
    pub message: String,

    /// Error severity level
    pub severity: ErrorSeverity,

    /// Whether the operation can be retried
    pub recoverable: bool,
}

impl CommandError {
    /// Create an error from an error code and message
    pub fn from_code(error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: error_code.code(),
            message: message.into(),
            severity: error_code.severity(),
            recoverable: error_code.is_recoverable(),
        }
    }

    /// Create a generic infrastructure error
    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::InfrastructureError, message)
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::ValidationError, message)
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::IntegrationNotFound, message)
    }
}

impl From<DomainError> for CommandError {
    fn from(err: DomainError) -> Self {
        Self {
            code: err.code().code(),
            message: err.message().to_string(),
            severity: err.severity(),
            recoverable: err.is_recoverable(),
        }
    }
}

impl From<anyhow::Error> for CommandError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<DomainError>() {
            Ok(domain) => domain.into(),
            Err(other) => Self::infrastructure(other.to_string()),
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for CommandError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unsupported_variant() {
        let err: CommandError =
            DomainError::UnsupportedVariant("Unexpected type: sms".to_string()).into();

        assert_eq!(err.code, 3001);
        assert_eq!(err.message, "Unexpected type: sms");
        assert_eq!(err.severity, ErrorSeverity::Error);
        assert!(!err.recoverable);
    }

    #[test]
    fn test_from_anyhow_keeps_domain_error() {
        let err: CommandError =
            anyhow::Error::new(DomainError::Network("reset".to_string())).into();
        assert_eq!(err.code, ErrorCode::NetworkError.code());
        assert!(err.recoverable);

        let other: CommandError = anyhow::anyhow!("boom").into();
        assert_eq!(other.code, ErrorCode::InfrastructureError.code());
    }

    #[test]
    fn test_serializes_for_callers() {
        let value = serde_json::to_value(CommandError::not_found("abc")).unwrap();
        assert_eq!(value["code"], 2001);
        assert_eq!(value["severity"], "Info");
        assert_eq!(value["recoverable"], false);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            CommandError::validation("bad").to_string(),
            "[6001] bad"
        );
    }
}
