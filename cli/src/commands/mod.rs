//! CLI command implementations.
//!
//! Each command writes its summary to `out` and returns an [`AppResult`];
//! the binary maps failures to a message and an exit code.

pub mod clear;
pub mod create_user;
pub mod create_value_object;
pub mod list;

use std::io::Write;
use std::sync::Arc;

use common::AppResult;
use user_service_lib::JsonStorage;

use crate::args::Commands;

/// Dispatch a parsed command against the given storage.
pub fn run(command: Commands, storage: &Arc<JsonStorage>, out: &mut dyn Write) -> AppResult<()> {
    match command {
        Commands::CreateUser(args) => create_user::execute(args, storage, out),
        Commands::CreateValueObject(args) => create_value_object::execute(args, storage, out),
        Commands::List(args) => list::execute(args, storage, out),
        Commands::Clear => clear::execute(storage, out),
    }
}
