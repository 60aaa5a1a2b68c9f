//! Error types for the fresco library.
//!
//! This crate provides the foundation error types used throughout the fresco
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fresco_error::{FrescoResult, TransportError, TransportErrorKind};
//!
//! fn send_replay() -> FrescoResult<()> {
//!     Err(TransportError::new(TransportErrorKind::Network(
//!         "connection reset".to_string(),
//!     )))?
//! }
//!
//! match send_replay() {
//!     Ok(()) => println!("sent"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod transport;

pub use config::ConfigError;
pub use error::{FrescoError, FrescoErrorKind, FrescoResult};
pub use transport::{TransportError, TransportErrorKind, TransportResult};
