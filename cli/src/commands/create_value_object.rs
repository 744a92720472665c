//! `create-vo` command.

use std::io::Write;
use std::sync::Arc;

use common::AppResult;
use domain::{Email, Name, Password};
use user_service_lib::JsonStorage;

use crate::args::{CreateValueObjectArgs, ValueObjectKind};

pub fn execute(
    args: CreateValueObjectArgs,
    storage: &Arc<JsonStorage>,
    out: &mut dyn Write,
) -> AppResult<()> {
    match args.kind {
        ValueObjectKind::Email => {
            let email = Email::new(&args.value)?;
            storage.add_email(&email);
            writeln!(out, "email created: {} (domain: {})", email, email.domain())?;
        }
        ValueObjectKind::Name => {
            let name = Name::new(&args.value)?;
            storage.add_name(&name);
            writeln!(out, "name created: {}", name)?;
        }
        ValueObjectKind::Password => {
            let password = Password::new(&args.value)?;
            storage.add_password(&password);
            writeln!(out, "password created: {}", password)?;
        }
    }
    Ok(())
}
