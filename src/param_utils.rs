use crate::{
    assembler::{Param, ParameterSet},
    commands::params::{
        PARAMETER_CLUSTER, PARAMETER_CONFIG, PARAMETER_CONFIG_INT, PARAMETER_CONFIG_JSON,
        PARAMETER_CONTEXT, PARAMETER_FORMAT, PARAMETER_HEADERS, PARAMETER_NAMESPACE,
        PARAMETER_PRETTY, PARAMETER_SECRET,
    },
    configuration::ProfileStore,
    context::{ContextResolver, EffectiveContext},
    error::CliError,
    format::{OutputFormat, OutputFormatOptions},
};
use clap::ArgMatches;
use tracing::trace;

pub fn get_format_parameter_value(sub_matches: &ArgMatches) -> Result<OutputFormat, CliError> {
    trace!("Resolving output format options...");

    let format = sub_matches
        .get_one::<String>(PARAMETER_FORMAT)
        .map(String::as_str)
        .unwrap_or(crate::format::TABLE);
    let with_headers = sub_matches.get_flag(PARAMETER_HEADERS);
    let pretty = sub_matches.get_flag(PARAMETER_PRETTY);

    trace!("Format: {}", format);
    trace!("With headers: {}", with_headers);
    trace!("Pretty: {}", pretty);

    let options = OutputFormatOptions {
        with_headers,
        pretty,
    };
    Ok(OutputFormat::from_string_with_options(format, options)?)
}

/// The `--cluster`, `--namespace` and `--context` values given on the command line.
pub fn get_context_flags(sub_matches: &ArgMatches) -> (Option<&str>, Option<&str>, Option<&str>) {
    let value = |name: &str| sub_matches.get_one::<String>(name).map(String::as_str);
    (
        value(PARAMETER_CLUSTER),
        value(PARAMETER_NAMESPACE),
        value(PARAMETER_CONTEXT),
    )
}

/// Resolves the effective context from the global flags and the profile store.
pub fn resolve_context(
    sub_matches: &ArgMatches,
    store: &ProfileStore,
) -> Result<EffectiveContext, CliError> {
    let (cluster, namespace, context) = get_context_flags(sub_matches);
    Ok(ContextResolver::new(store).resolve(cluster, namespace, context)?)
}

pub fn get_required_string<'a>(
    sub_matches: &'a ArgMatches,
    name: &str,
) -> Result<&'a str, CliError> {
    sub_matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| CliError::MissingRequiredArgument(name.to_string()))
}

pub fn get_optional_string<'a>(sub_matches: &'a ArgMatches, name: &str) -> &'a str {
    sub_matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

/// Collects the typed config and secret parameters of a resource command.
///
/// Flags a command does not define (`--secret` on stream commands) contribute nothing.
pub fn get_parameter_set(sub_matches: &ArgMatches) -> ParameterSet {
    let mut params = ParameterSet::new();

    if let Ok(Some(values)) = sub_matches.try_get_many::<(String, String)>(PARAMETER_CONFIG) {
        for (key, value) in values.cloned() {
            params.push(Param::String { key, value });
        }
    }
    if let Ok(Some(values)) = sub_matches.try_get_many::<(String, i64)>(PARAMETER_CONFIG_INT) {
        for (key, value) in values.cloned() {
            params.push(Param::Int { key, value });
        }
    }
    if let Ok(Some(values)) = sub_matches.try_get_many::<String>(PARAMETER_CONFIG_JSON) {
        for fragment in values.cloned() {
            params.push(Param::Json(fragment));
        }
    }
    if let Ok(Some(values)) = sub_matches.try_get_many::<(String, String)>(PARAMETER_SECRET) {
        for (key, value) in values.cloned() {
            params.push(Param::Secret { key, value });
        }
    }

    params
}
