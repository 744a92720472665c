//! `create-user` command.

use std::io::Write;
use std::sync::Arc;

use common::AppResult;
use user_service_lib::{storage_repository, AddUser, AddUserRequest, JsonStorage};

use crate::args::CreateUserArgs;

pub fn execute(
    args: CreateUserArgs,
    storage: &Arc<JsonStorage>,
    out: &mut dyn Write,
) -> AppResult<()> {
    let add_user = AddUser::new(storage_repository(storage));

    let user = add_user.execute(&AddUserRequest {
        email: args.email,
        name: args.name,
        password: args.password,
    })?;

    writeln!(
        out,
        "user created: id={} name={} email={} password={}",
        user.id(),
        user.name(),
        user.email(),
        user.password()
    )?;
    Ok(())
}
