//! Fresco - File Reference Refresh
//!
//! Fresco keeps the opaque download tokens ("file references") that a media
//! API attaches to its files fresh. Tokens expire at the server's whim; when
//! a download is rejected, fresco replays the request that originally
//! produced the file, harvests the new tokens from the response, and hands
//! the fresh token back to the caller.
//!
//! # Features
//!
//! - **Origin tracking**: `FileOrigin` records where a file was first seen
//! - **Extraction**: pure scanners pull every token out of a decoded response
//! - **Deduplication**: concurrent refreshes of one file share a single replay
//! - **Fan-out**: one response may settle several pending refreshes
//! - **Detached replays**: a caller that stops waiting never cancels a
//!   request that already went out
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fresco::{
//!     FileLocation, FileOrigin, RefreshConfig, RefreshCoordinator, RequestSender,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     // `session` implements RequestSender over the real transport.
//!     let coordinator = RefreshCoordinator::new(Arc::new(session), RefreshConfig::default());
//!
//!     // A download came back with "file reference expired":
//!     let outcome = coordinator.request(location, origin).await;
//!     if let Some(reference) = outcome.reference() {
//!         // retry the download with the fresh reference
//!     }
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - OpenTelemetry span export
//!
//! # Architecture
//!
//! Fresco is organized as a workspace with focused crates:
//!
//! - `fresco_core` - Core data types (origins, locations, references)
//! - `fresco_interface` - Replay requests, response shapes, the sender trait
//! - `fresco_error` - Error types
//! - `fresco_cache` - Reference extraction and the in-memory store
//! - `fresco_refresh` - The refresh coordinator and configuration
//!
//! This crate (`fresco`) re-exports everything for convenience.

#![forbid(unsafe_code)]

// Re-export the workspace crates
pub use fresco_cache::*;
pub use fresco_core::*;
pub use fresco_error::*;
pub use fresco_interface::*;
pub use fresco_refresh::*;

// Telemetry initialization helpers
pub mod telemetry;
