//! Refresh coordination for the fresco file-reference library.
//!
//! This crate decides when a stale download token is renewed by replaying
//! the API request that originally produced it, deduplicates concurrent
//! requests for the same file, and fans the result out to every waiter.

#![warn(missing_docs)]

mod config;
mod coordinator;

pub use config::{FrescoConfig, RefreshConfig, RefreshConfigBuilder};
pub use coordinator::RefreshCoordinator;
