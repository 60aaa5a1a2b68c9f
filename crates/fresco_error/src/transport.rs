//! Transport error types for replay requests.

/// Result type for request-sending operations.
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Kinds of transport errors a replay request can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TransportErrorKind {
    /// The request never reached the service or the connection dropped.
    #[display("Network failure: {}", _0)]
    Network(String),
    /// The service did not answer within the transport's own deadline.
    #[display("Request timed out after {}ms", _0)]
    Timeout(u64),
    /// The service answered with an API-level error.
    #[display("API error {}: {}", code, message)]
    Api {
        /// Numeric error code reported by the service.
        code: i32,
        /// Error text reported by the service.
        message: String,
    },
    /// The response arrived but could not be decoded into a known shape.
    #[display("Response decoding failed: {}", _0)]
    Decode(String),
}

/// Transport error with location tracking.
///
/// # Examples
///
/// ```
/// use fresco_error::{TransportError, TransportErrorKind};
///
/// let err = TransportError::new(TransportErrorKind::Timeout(5000));
/// assert!(format!("{}", err).contains("timed out"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", kind, line, file)]
pub struct TransportError {
    /// The kind of error that occurred.
    pub kind: TransportErrorKind,
    /// Line number where the error was created.
    pub line: u32,
    /// File where the error was created.
    pub file: &'static str,
}

impl TransportError {
    /// Create a new transport error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
