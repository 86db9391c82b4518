//! Management API error types.
//!
//! Error definitions with transient/permanent classification so callers
//! can decide whether retrying is worthwhile.

use thiserror::Error;

/// Error surfaced by a management API transport.
#[derive(Debug, Error)]
pub enum ApiError {
    // Connection errors (usually transient)
    /// Failed to reach the management service.
    #[error("connection failed: {message}")]
    ConnectionFailed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Request timed out.
    #[error("request timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// The service rejected the request due to rate limiting.
    #[error("rate limited by the management service")]
    RateLimited {
        /// Seconds to wait before retrying, if the service said.
        retry_after_secs: Option<u64>,
    },

    /// The service is temporarily unavailable.
    #[error("service unavailable: {message}")]
    ServiceUnavailable { message: String },

    // Authentication errors (permanent)
    /// The access token was rejected.
    #[error("authentication failed: invalid or expired token")]
    Unauthorized,

    /// The token lacks permission for the operation.
    #[error("authorization failed: insufficient permissions for {operation}")]
    Forbidden { operation: String },

    // Request/entity errors (permanent)
    /// The requested entity does not exist.
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// An entity with the same identity already exists.
    #[error("{resource} already exists: {id}")]
    AlreadyExists { resource: &'static str, id: String },

    /// The service rejected the request as malformed or invalid.
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    /// The response could not be decoded into the expected model.
    #[error("failed to decode response: {message}")]
    Decode { message: String },

    /// Internal error in the transport implementation.
    #[error("internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ApiError {
    /// Check if this error is transient and the operation may be retried.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ApiError::ConnectionFailed { .. }
                | ApiError::Timeout { .. }
                | ApiError::RateLimited { .. }
                | ApiError::ServiceUnavailable { .. }
        )
    }

    /// Check if this error is permanent and retrying won't help.
    pub fn is_permanent(&self) -> bool {
        !self.is_transient()
    }

    /// Get an error code for classification.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::ConnectionFailed { .. } => "CONNECTION_FAILED",
            ApiError::Timeout { .. } => "TIMEOUT",
            ApiError::RateLimited { .. } => "RATE_LIMITED",
            ApiError::ServiceUnavailable { .. } => "SERVICE_UNAVAILABLE",
            ApiError::Unauthorized => "UNAUTHORIZED",
            ApiError::Forbidden { .. } => "FORBIDDEN",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::AlreadyExists { .. } => "ALREADY_EXISTS",
            ApiError::InvalidRequest { .. } => "INVALID_REQUEST",
            ApiError::Decode { .. } => "DECODE_ERROR",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    // Convenience constructors

    /// Create a connection failed error.
    pub fn connection_failed(message: impl Into<String>) -> Self {
        ApiError::ConnectionFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Create a connection failed error with source.
    pub fn connection_failed_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ApiError::ConnectionFailed {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not found error.
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        ApiError::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create an already exists error.
    pub fn already_exists(resource: &'static str, id: impl Into<String>) -> Self {
        ApiError::AlreadyExists {
            resource,
            id: id.into(),
        }
    }

    /// Create an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ApiError::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        ApiError::Decode {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error with source.
    pub fn internal_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ApiError::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type for management API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_errors() {
        let transient = vec![
            ApiError::connection_failed("refused"),
            ApiError::Timeout { timeout_secs: 30 },
            ApiError::RateLimited {
                retry_after_secs: Some(5),
            },
            ApiError::ServiceUnavailable {
                message: "maintenance".to_string(),
            },
        ];

        for err in transient {
            assert!(err.is_transient(), "expected {} transient", err.error_code());
            assert!(!err.is_permanent());
        }
    }

    #[test]
    fn test_permanent_errors() {
        let permanent = vec![
            ApiError::Unauthorized,
            ApiError::not_found("group", "g1"),
            ApiError::already_exists("setup key", "k1"),
            ApiError::invalid_request("bad payload"),
            ApiError::decode("unexpected field"),
        ];

        for err in permanent {
            assert!(err.is_permanent(), "expected {} permanent", err.error_code());
        }
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::not_found("policy", "pol-1");
        assert_eq!(err.to_string(), "policy not found: pol-1");

        let err = ApiError::Timeout { timeout_secs: 10 };
        assert_eq!(err.to_string(), "request timed out after 10 seconds");
    }

    #[test]
    fn test_error_with_source() {
        let io = std::io::Error::other("broken pipe");
        let err = ApiError::connection_failed_with_source("write failed", io);
        assert!(err.is_transient());
        if let ApiError::ConnectionFailed { source, .. } = &err {
            assert!(source.is_some());
        } else {
            panic!("expected ConnectionFailed variant");
        }
    }
}
