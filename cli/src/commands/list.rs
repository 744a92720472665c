//! `list` command.

use std::fmt::Display;
use std::io::Write;
use std::sync::Arc;

use common::AppResult;
use user_service_lib::{JsonStorage, ReadMode};

use crate::args::{ListArgs, ListKind};

pub fn execute(
    args: ListArgs,
    storage: &Arc<JsonStorage>,
    out: &mut dyn Write,
) -> AppResult<()> {
    let mode = if args.strict {
        ReadMode::Strict
    } else {
        ReadMode::Lenient
    };

    if args.kind.includes(ListKind::Users) {
        section(out, "USERS", &storage.users(mode)?)?;
    }

    if args.kind.includes(ListKind::Emails) {
        let emails: Vec<String> = storage
            .emails(mode)?
            .iter()
            .map(|email| format!("{} (domain: {})", email, email.domain()))
            .collect();
        section(out, "EMAILS", &emails)?;
    }

    if args.kind.includes(ListKind::Names) {
        section(out, "NAMES", &storage.names(mode)?)?;
    }

    if args.kind.includes(ListKind::Passwords) {
        // Display masks every password
        section(out, "PASSWORDS", &storage.passwords(mode)?)?;
    }

    Ok(())
}

fn section<T: Display>(out: &mut dyn Write, title: &str, items: &[T]) -> AppResult<()> {
    writeln!(out, "=== {} ===", title)?;
    if items.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for (index, item) in items.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, item)?;
    }
    Ok(())
}
