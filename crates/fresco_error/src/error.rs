//! Top-level error wrapper types.

use crate::{ConfigError, TransportError};

/// The foundation error enum. Every fresco crate's failure converts into one
/// of these variants.
///
/// # Examples
///
/// ```
/// use fresco_error::{FrescoError, TransportError, TransportErrorKind};
///
/// let transport = TransportError::new(TransportErrorKind::Network("reset".into()));
/// let err: FrescoError = transport.into();
/// assert!(format!("{}", err).contains("Transport Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FrescoErrorKind {
    /// Replay transport error
    #[from(TransportError)]
    Transport(TransportError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Fresco error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fresco_error::{ConfigError, FrescoResult};
///
/// fn might_fail() -> FrescoResult<()> {
///     Err(ConfigError::new("unparseable value"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("loaded"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fresco Error: {}", _0)]
pub struct FrescoError(Box<FrescoErrorKind>);

impl FrescoError {
    /// Create a new error from a kind.
    pub fn new(kind: FrescoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FrescoErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FrescoErrorKind
impl<T> From<T> for FrescoError
where
    T: Into<FrescoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for fresco operations.
///
/// # Examples
///
/// ```
/// use fresco_error::{FrescoResult, TransportError, TransportErrorKind};
///
/// fn replay() -> FrescoResult<Vec<u8>> {
///     Err(TransportError::new(TransportErrorKind::Decode("truncated".into())))?
/// }
/// ```
pub type FrescoResult<T> = std::result::Result<T, FrescoError>;
