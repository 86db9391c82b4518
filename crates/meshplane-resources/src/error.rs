//! Resource handler error types.

use thiserror::Error;

use meshplane_client::ApiError;
use meshplane_core::ResolveError;

/// Errors surfaced by the resource handlers.
///
/// Handlers propagate every failure to the caller for translation into
/// its own diagnostic format; nothing is retried, logged-and-swallowed,
/// or masked at this layer.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The management API call failed.
    #[error("management API error: {0}")]
    Api(#[from] ApiError),

    /// Entity resolution failed.
    #[error("resolution error: {0}")]
    Resolve(#[from] ResolveError),

    /// A field the operation requires was left unset.
    #[error("required field '{field}' is not set")]
    MissingField { field: &'static str },

    /// A field that is fixed at creation was supplied on update.
    #[error("field '{field}' of a {resource} can only be set at creation")]
    CreateOnly {
        field: &'static str,
        resource: &'static str,
    },
}

impl ResourceError {
    /// Create a missing field error.
    pub fn missing_field(field: &'static str) -> Self {
        ResourceError::MissingField { field }
    }

    /// Create a create-only field error.
    pub fn create_only(field: &'static str, resource: &'static str) -> Self {
        ResourceError::CreateOnly { field, resource }
    }

    /// Check if the underlying failure is transient and worth retrying.
    pub fn is_transient(&self) -> bool {
        matches!(self, ResourceError::Api(api) if api.is_transient())
    }
}

/// Result type for resource handler operations.
pub type ResourceResult<T> = Result<T, ResourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ResourceError::missing_field("name");
        assert_eq!(err.to_string(), "required field 'name' is not set");

        let err = ResourceError::create_only("expires_in", "setup key");
        assert!(err.to_string().contains("expires_in"));
        assert!(err.to_string().contains("setup key"));
    }

    #[test]
    fn test_from_resolve_error() {
        let err: ResourceError = ResolveError::NotFound.into();
        assert!(matches!(err, ResourceError::Resolve(ResolveError::NotFound)));
        assert!(!err.is_transient());
    }

    #[test]
    fn test_transient_classification() {
        let err: ResourceError = ApiError::Timeout { timeout_secs: 5 }.into();
        assert!(err.is_transient());

        let err: ResourceError = ApiError::Unauthorized.into();
        assert!(!err.is_transient());
    }
}
