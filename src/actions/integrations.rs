use crate::{
    actions::print_rows,
    assembler::{assemble, assemble_secrets},
    commands::params::{PARAMETER_DESCRIPTION, PARAMETER_ID, PARAMETER_INTEGRATION, PARAMETER_NAME},
    configuration::ProfileStore,
    context::ExecutionContext,
    error::CliError,
    model::Integration,
    param_utils::{get_optional_string, get_parameter_set, get_required_string, resolve_context},
};
use clap::ArgMatches;

/// Builds the integration entry, assembling its config and secret documents.
pub fn integration_from_args(sub_matches: &ArgMatches) -> Result<Integration, CliError> {
    let params = get_parameter_set(sub_matches);

    Ok(Integration {
        id: String::new(),
        name: get_required_string(sub_matches, PARAMETER_NAME)?.to_string(),
        integration: get_required_string(sub_matches, PARAMETER_INTEGRATION)?.to_string(),
        description: get_optional_string(sub_matches, PARAMETER_DESCRIPTION).to_string(),
        config: assemble(&params)?,
        secret: assemble_secrets(&params)?,
    })
}

pub async fn add_integration(
    sub_matches: &ArgMatches,
    store: &ProfileStore,
) -> Result<(), CliError> {
    let context = resolve_context(sub_matches, store)?;
    let entry = integration_from_args(sub_matches)?;

    let execution = ExecutionContext::connect(context).await?;
    eprintln!(
        "Adding integration {} to cluster {}...",
        entry.name,
        execution.context().cluster
    );
    let id = execution.integrations().add(&entry).await?;

    eprintln!("Integration added successfully: {}", id);
    println!("{}", id);
    Ok(())
}

pub async fn delete_integration(
    sub_matches: &ArgMatches,
    store: &ProfileStore,
) -> Result<(), CliError> {
    let context = resolve_context(sub_matches, store)?;
    let id = get_required_string(sub_matches, PARAMETER_ID)?;

    let execution = ExecutionContext::connect(context).await?;
    execution.integrations().delete(id).await?;
    eprintln!("Integration '{}' deleted.", id);
    Ok(())
}

pub async fn list_integrations(
    sub_matches: &ArgMatches,
    store: &ProfileStore,
) -> Result<(), CliError> {
    let context = resolve_context(sub_matches, store)?;
    let execution = ExecutionContext::connect(context).await?;

    let entries = execution.integrations().list().await?;
    print_rows(&entries, sub_matches, "No integrations found.")
}
