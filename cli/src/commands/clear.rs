//! `clear` command.

use std::io::Write;
use std::sync::Arc;

use common::AppResult;
use user_service_lib::JsonStorage;

pub fn execute(storage: &Arc<JsonStorage>, out: &mut dyn Write) -> AppResult<()> {
    storage.clear();
    writeln!(out, "storage cleared: {}", storage.path().display())?;
    Ok(())
}
