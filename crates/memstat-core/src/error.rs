//! Shared error type across memstat crates.

use thiserror::Error;

use crate::protocol::MetricKind;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Wrong HTTP method for the endpoint.
    MethodNotAllowed,
    /// Path does not have the expected shape.
    NotFound,
    /// Invalid input (metric type, value, config).
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and response bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MemstatError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum MemstatError {
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),
    #[error("not found: {0}")]
    RouteShape(String),
    #[error("unknown metric type: {0}")]
    UnknownKind(String),
    #[error("invalid {kind} value: {value:?}")]
    ValueParse { kind: MetricKind, value: String },
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl MemstatError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MemstatError::MethodNotAllowed(_) => ClientCode::MethodNotAllowed,
            MemstatError::RouteShape(_) => ClientCode::NotFound,
            MemstatError::UnknownKind(_) => ClientCode::BadRequest,
            MemstatError::ValueParse { .. } => ClientCode::BadRequest,
            MemstatError::BadRequest(_) => ClientCode::BadRequest,
            MemstatError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            MemstatError::Internal(_) => ClientCode::Internal,
        }
    }
}
