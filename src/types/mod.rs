//! Core types for the bridge.
//!
//! This module provides foundational types used throughout the crate:
//! - **Config**: the host framework's settings surface, read-only after load
//! - **Errors**: application error types with thiserror derives

mod config;
mod errors;

pub use config::{EventFormat, Settings};
pub use errors::{Error, Result};
