//! User directory CLI.
//!
//! A thin adapter over `user_service_lib`: parses arguments, runs one
//! command against the JSON storage and prints a short summary.
//!
//! # CLI Usage
//!
//! ```bash
//! users create-user Jorge jorge@google.com Password123
//! users create-vo email maria@example.com
//! users list emails
//! users clear
//! ```

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
