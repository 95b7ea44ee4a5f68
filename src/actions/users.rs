use crate::{
    actions::print_rows,
    commands::params::{PARAMETER_DISPLAY_NAME, PARAMETER_NAME, PARAMETER_ORG, PARAMETER_ROLE},
    configuration::ProfileStore,
    context::ExecutionContext,
    error::CliError,
    model::UserEntry,
    param_utils::{get_optional_string, get_required_string, resolve_context},
};
use clap::ArgMatches;
use tracing::trace;

pub fn user_from_args(sub_matches: &ArgMatches) -> Result<UserEntry, CliError> {
    let name = get_required_string(sub_matches, PARAMETER_NAME)?;
    Ok(UserEntry::new(
        name,
        get_optional_string(sub_matches, PARAMETER_DISPLAY_NAME),
        get_optional_string(sub_matches, PARAMETER_ROLE),
        get_optional_string(sub_matches, PARAMETER_ORG),
    ))
}

pub async fn add_user(sub_matches: &ArgMatches, store: &ProfileStore) -> Result<(), CliError> {
    let context = resolve_context(sub_matches, store)?;
    let user = user_from_args(sub_matches)?;

    let execution = ExecutionContext::connect(context).await?;
    eprintln!(
        "Adding user {} to cluster {}...",
        user.username,
        execution.context().cluster
    );
    execution.users().add(&user).await?;
    eprintln!("User '{}' added.", user.username);
    Ok(())
}

pub async fn delete_user(sub_matches: &ArgMatches, store: &ProfileStore) -> Result<(), CliError> {
    let context = resolve_context(sub_matches, store)?;
    let name = get_required_string(sub_matches, PARAMETER_NAME)?;

    let execution = ExecutionContext::connect(context).await?;
    execution.users().delete(name).await?;
    eprintln!("User '{}' deleted.", name);
    Ok(())
}

pub async fn list_users(sub_matches: &ArgMatches, store: &ProfileStore) -> Result<(), CliError> {
    let context = resolve_context(sub_matches, store)?;
    let execution = ExecutionContext::connect(context).await?;

    let users = execution.users().list().await?;
    trace!("Received {} user(s)", users.len());
    print_rows(&users, sub_matches, "No users found.")
}
