use crate::{
    actions::print_rows,
    commands::params::{PARAMETER_EXTERNAL_ID, PARAMETER_ID, PARAMETER_NAME, PARAMETER_ROLE_ARN},
    configuration::ProfileStore,
    context::ExecutionContext,
    error::CliError,
    param_utils::{get_optional_string, get_required_string, resolve_context},
};
use clap::ArgMatches;

pub async fn add_assumed_role(
    sub_matches: &ArgMatches,
    store: &ProfileStore,
) -> Result<(), CliError> {
    let context = resolve_context(sub_matches, store)?;
    let name = get_required_string(sub_matches, PARAMETER_NAME)?;
    let role_arn = get_required_string(sub_matches, PARAMETER_ROLE_ARN)?;
    let external_id = get_optional_string(sub_matches, PARAMETER_EXTERNAL_ID);

    let execution = ExecutionContext::connect(context).await?;
    eprintln!("Adding AWS role to cluster {}...", execution.context().cluster);
    let id = execution
        .roles()
        .add_assumed_role(name, role_arn, external_id)
        .await?;

    eprintln!("Role added successfully: {}", id);
    println!("{}", id);
    Ok(())
}

pub async fn delete_assumed_role(
    sub_matches: &ArgMatches,
    store: &ProfileStore,
) -> Result<(), CliError> {
    let context = resolve_context(sub_matches, store)?;
    let id = get_required_string(sub_matches, PARAMETER_ID)?;

    let execution = ExecutionContext::connect(context).await?;
    execution.roles().delete_assumed_role(id).await?;
    eprintln!("Role '{}' deleted.", id);
    Ok(())
}

pub async fn list_assumed_roles(
    sub_matches: &ArgMatches,
    store: &ProfileStore,
) -> Result<(), CliError> {
    let context = resolve_context(sub_matches, store)?;
    let execution = ExecutionContext::connect(context).await?;

    let roles = execution.roles().list_assumed_roles().await?;
    print_rows(&roles, sub_matches, "No roles found.")
}
