//! RPC Error Types
//!
//! Maps application errors to JSON-RPC errors. The error code is the HTTP
//! status a REST gateway would return, repeated in `data.status`.

use jobtrack_core::error::AppError;
use jsonrpsee::types::ErrorObjectOwned;
use serde::Serialize;
use tracing::error;

/// RPC Error Codes (HTTP statuses)
pub mod code {
    pub const BAD_REQUEST: i32 = 400;
    pub const NOT_FOUND: i32 = 404;
    pub const INTERNAL_ERROR: i32 = 500;
}

#[derive(Debug, Serialize)]
struct ErrorData {
    status: u16,
}

/// Convert AppError to JSON-RPC ErrorObject
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    let status = err.status_code();
    if i32::from(status) >= code::INTERNAL_ERROR {
        // Store failures are fatal to the request; log before surfacing
        error!(error = %err, "Request failed");
    }

    ErrorObjectOwned::owned(i32::from(status), err.to_string(), Some(ErrorData { status }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobtrack_core::domain::DomainError;

    #[test]
    fn test_validation_maps_to_400() {
        let err = to_rpc_error(AppError::from(DomainError::EmptyUpdateField));
        assert_eq!(err.code(), code::BAD_REQUEST);
        assert_eq!(err.message(), "Company or Position fields cannot be empty");

        let data: serde_json::Value = serde_json::from_str(err.data().unwrap().get()).unwrap();
        assert_eq!(data["status"], 400);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = to_rpc_error(AppError::job_not_found("abc"));
        assert_eq!(err.code(), code::NOT_FOUND);
        assert_eq!(err.message(), "No job with id abc");
    }

    #[test]
    fn test_store_failure_maps_to_500() {
        let err = to_rpc_error(AppError::Database("disk I/O error".to_string()));
        assert_eq!(err.code(), code::INTERNAL_ERROR);
    }
}
