//! Common utilities shared by the service and CLI crates.
//!
//! This crate provides:
//! - Unified application error type
//! - Configuration structures
//! - Logging setup

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::{AppError, AppResult};
