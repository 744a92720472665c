//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Manage users and standalone value objects stored in a JSON file
#[derive(Parser, Debug)]
#[command(name = "users")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Storage file path (defaults to DOMAIN_STORAGE_PATH or .domain-storage.json)
    #[arg(short, long, global = true)]
    pub storage: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create and store a user
    CreateUser(CreateUserArgs),

    /// Create and store a single value object
    #[command(name = "create-vo")]
    CreateValueObject(CreateValueObjectArgs),

    /// List stored items
    List(ListArgs),

    /// Remove everything from storage
    Clear,
}

/// Arguments for the create-user command
#[derive(Parser, Debug)]
pub struct CreateUserArgs {
    /// Display name (letters and spaces)
    pub name: String,

    /// Email address
    pub email: String,

    /// Password (8+ characters, at least one letter and one digit)
    pub password: String,
}

/// Value object kinds
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueObjectKind {
    Email,
    Name,
    Password,
}

/// Arguments for the create-vo command
#[derive(Parser, Debug)]
pub struct CreateValueObjectArgs {
    #[arg(value_enum)]
    pub kind: ValueObjectKind,

    pub value: String,
}

/// Categories that can be listed
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    All,
    Users,
    Emails,
    Names,
    Passwords,
}

impl ListKind {
    /// Whether this selection includes `other`
    pub fn includes(self, other: ListKind) -> bool {
        self == ListKind::All || self == other
    }
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    #[arg(value_enum, default_value = "all")]
    pub kind: ListKind,

    /// Fail instead of skipping stored records that no longer validate
    #[arg(long)]
    pub strict: bool,
}
