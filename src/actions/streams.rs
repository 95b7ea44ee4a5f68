use crate::{
    assembler::assemble,
    commands::params::{PARAMETER_DESCRIPTION, PARAMETER_INTEGRATION_ID, PARAMETER_NAME, PARAMETER_TYPE},
    configuration::ProfileStore,
    context::ExecutionContext,
    error::CliError,
    model::{DataSinkConfig, DataSourceConfig, RouterConfig},
    param_utils::{get_optional_string, get_parameter_set, get_required_string, resolve_context},
};
use clap::ArgMatches;

fn integration_id(sub_matches: &ArgMatches) -> Option<String> {
    sub_matches
        .get_one::<String>(PARAMETER_INTEGRATION_ID)
        .filter(|id| !id.is_empty())
        .cloned()
}

pub fn source_from_args(sub_matches: &ArgMatches) -> Result<DataSourceConfig, CliError> {
    Ok(DataSourceConfig {
        name: get_required_string(sub_matches, PARAMETER_NAME)?.to_string(),
        source_type: get_required_string(sub_matches, PARAMETER_TYPE)?.to_string(),
        integration_id: integration_id(sub_matches),
        config: assemble(&get_parameter_set(sub_matches))?,
    })
}

pub fn sink_from_args(sub_matches: &ArgMatches) -> Result<DataSinkConfig, CliError> {
    Ok(DataSinkConfig {
        name: get_required_string(sub_matches, PARAMETER_NAME)?.to_string(),
        sink_type: get_required_string(sub_matches, PARAMETER_TYPE)?.to_string(),
        integration_id: integration_id(sub_matches),
        config: assemble(&get_parameter_set(sub_matches))?,
    })
}

pub fn router_from_args(sub_matches: &ArgMatches) -> Result<RouterConfig, CliError> {
    Ok(RouterConfig {
        name: get_required_string(sub_matches, PARAMETER_NAME)?.to_string(),
        description: get_optional_string(sub_matches, PARAMETER_DESCRIPTION).to_string(),
        config: assemble(&get_parameter_set(sub_matches))?,
    })
}

pub async fn add_source(sub_matches: &ArgMatches, store: &ProfileStore) -> Result<(), CliError> {
    let context = resolve_context(sub_matches, store)?;
    let source = source_from_args(sub_matches)?;

    let execution = ExecutionContext::connect(context).await?;
    let id = execution.streams().add_source(&source).await?;
    eprintln!(
        "Data source '{}' added to cluster {}.",
        source.name,
        execution.context().cluster
    );
    println!("{}", id);
    Ok(())
}

pub async fn add_sink(sub_matches: &ArgMatches, store: &ProfileStore) -> Result<(), CliError> {
    let context = resolve_context(sub_matches, store)?;
    let sink = sink_from_args(sub_matches)?;

    let execution = ExecutionContext::connect(context).await?;
    let id = execution.streams().add_sink(&sink).await?;
    eprintln!(
        "Data sink '{}' added to cluster {}.",
        sink.name,
        execution.context().cluster
    );
    println!("{}", id);
    Ok(())
}

pub async fn add_router(sub_matches: &ArgMatches, store: &ProfileStore) -> Result<(), CliError> {
    let context = resolve_context(sub_matches, store)?;
    let router = router_from_args(sub_matches)?;

    let execution = ExecutionContext::connect(context).await?;
    let id = execution.streams().add_router(&router).await?;
    eprintln!(
        "Router '{}' added to cluster {}.",
        router.name,
        execution.context().cluster
    );
    println!("{}", id);
    Ok(())
}
