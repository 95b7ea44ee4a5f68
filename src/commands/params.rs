//! Shared command parameters for all CLI commands.
//!
//! This module defines common parameters that are used across multiple command modules.
//! It provides a centralized place to define parameter names and common argument configurations.

use crate::format::OutputFormat;
use clap::{Arg, ArgAction};

// Resource commands
pub const COMMAND_CONFIG: &str = "config";
pub const COMMAND_AUTH: &str = "auth";
pub const COMMAND_EKS: &str = "eks";
pub const COMMAND_INTEGRATION: &str = "integration";
pub const COMMAND_STREAM: &str = "stream";

// Config commands
pub const COMMAND_LIST: &str = "list";
pub const COMMAND_DELETE: &str = "delete";
pub const COMMAND_VIEW: &str = "view";
pub const COMMAND_PATH: &str = "path";

// Auth commands
pub const COMMAND_ADD_USER: &str = "add-user";
pub const COMMAND_DEL_USER: &str = "del-user";
pub const COMMAND_LIST_USER: &str = "list-user";

// EKS commands
pub const COMMAND_ADD_ASSUMED_ROLE: &str = "add-assumed-role";
pub const COMMAND_DEL_ASSUMED_ROLE: &str = "del-assumed-role";
pub const COMMAND_LIST_ASSUMED_ROLE: &str = "list-assumed-role";

// Integration commands
pub const COMMAND_ADD: &str = "add";
pub const COMMAND_DEL: &str = "del";

// Stream commands
pub const COMMAND_ADD_SOURCE: &str = "add-source";
pub const COMMAND_ADD_SINK: &str = "add-sink";
pub const COMMAND_ADD_ROUTER: &str = "add-router";

// Global parameter names
pub const PARAMETER_CLUSTER: &str = "cluster";
pub const PARAMETER_NAMESPACE: &str = "namespace";
pub const PARAMETER_CONTEXT: &str = "context";
pub const PARAMETER_VERBOSE: &str = "verbose";

// Parameter names
pub const PARAMETER_FORMAT: &str = "format";
pub const PARAMETER_PRETTY: &str = "pretty";
pub const PARAMETER_HEADERS: &str = "headers";
pub const PARAMETER_PROVIDER: &str = "provider";
pub const PARAMETER_NAME: &str = "name";
pub const PARAMETER_ID: &str = "id";
pub const PARAMETER_DISPLAY_NAME: &str = "display-name";
pub const PARAMETER_ROLE: &str = "role";
pub const PARAMETER_ORG: &str = "org";
pub const PARAMETER_ROLE_ARN: &str = "role-arn";
pub const PARAMETER_EXTERNAL_ID: &str = "external-id";
pub const PARAMETER_INTEGRATION: &str = "integration";
pub const PARAMETER_INTEGRATION_ID: &str = "integration-id";
pub const PARAMETER_DESCRIPTION: &str = "description";
pub const PARAMETER_TYPE: &str = "type";

// Typed config parameters
pub const PARAMETER_CONFIG: &str = "config";
pub const PARAMETER_CONFIG_INT: &str = "config-int";
pub const PARAMETER_CONFIG_JSON: &str = "config-json";
pub const PARAMETER_SECRET: &str = "secret";

/// Splits `key=value` at the first `=`. The value may itself contain `=`.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("invalid format '{}', expected key=value", s)),
    }
}

pub fn parse_key_int(s: &str) -> Result<(String, i64), String> {
    let (key, value) = parse_key_value(s)?;
    let value = value
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid integer for key '{}': {}", key, e))?;
    Ok((key, value))
}

/// Create the format parameter.
///
/// This parameter is used by every listing or view command for output formatting.
pub fn format_parameter() -> Arg {
    Arg::new(PARAMETER_FORMAT)
        .short('f')
        .long(PARAMETER_FORMAT)
        .num_args(1)
        .required(false)
        .env("INGEXT_FORMAT")
        .default_value(crate::format::TABLE)
        .help("Output data format")
        .value_parser(OutputFormat::names())
}

/// This parameter flag is used across multiple commands for output formatting.
pub fn format_pretty_parameter() -> Arg {
    Arg::new(PARAMETER_PRETTY)
        .long(PARAMETER_PRETTY)
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Format the output pretty (JSON only)")
}

/// This parameter flag is used across multiple commands for output formatting.
pub fn format_with_headers_parameter() -> Arg {
    Arg::new(PARAMETER_HEADERS)
        .long(PARAMETER_HEADERS)
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Include a header row (CSV only)")
}

pub fn cluster_parameter() -> Arg {
    Arg::new(PARAMETER_CLUSTER)
        .long(PARAMETER_CLUSTER)
        .num_args(1)
        .global(true)
        .env("INGEXT_CLUSTER")
        .help("Cluster profile name (defaults to the active profile)")
}

pub fn namespace_parameter() -> Arg {
    Arg::new(PARAMETER_NAMESPACE)
        .short('n')
        .long(PARAMETER_NAMESPACE)
        .num_args(1)
        .global(true)
        .help("Kubernetes namespace of the platform")
}

pub fn context_parameter() -> Arg {
    Arg::new(PARAMETER_CONTEXT)
        .long(PARAMETER_CONTEXT)
        .num_args(1)
        .global(true)
        .help("Kubeconfig context to use")
}

pub fn verbose_parameter() -> Arg {
    Arg::new(PARAMETER_VERBOSE)
        .short('v')
        .long(PARAMETER_VERBOSE)
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Enable verbose output for debugging")
}

pub fn provider_parameter() -> Arg {
    Arg::new(PARAMETER_PROVIDER)
        .long(PARAMETER_PROVIDER)
        .num_args(1)
        .help("Cloud provider of the cluster (eks, aks, gke)")
}

pub fn name_parameter(help: &'static str) -> Arg {
    Arg::new(PARAMETER_NAME)
        .long(PARAMETER_NAME)
        .num_args(1)
        .required(true)
        .help(help)
}

pub fn id_parameter(help: &'static str) -> Arg {
    Arg::new(PARAMETER_ID)
        .long(PARAMETER_ID)
        .num_args(1)
        .required(true)
        .help(help)
}

pub fn description_parameter() -> Arg {
    Arg::new(PARAMETER_DESCRIPTION)
        .long(PARAMETER_DESCRIPTION)
        .num_args(1)
        .default_value("")
        .hide_default_value(true)
        .help("Free-form description")
}

pub fn integration_id_parameter() -> Arg {
    Arg::new(PARAMETER_INTEGRATION_ID)
        .long(PARAMETER_INTEGRATION_ID)
        .num_args(1)
        .help("ID of the integration providing credentials")
}

/// The repeatable `--config`, `--config-int` and `--config-json` flags.
pub fn config_parameters() -> [Arg; 3] {
    [
        Arg::new(PARAMETER_CONFIG)
            .long(PARAMETER_CONFIG)
            .num_args(1)
            .action(ArgAction::Append)
            .value_name("KEY=VALUE")
            .value_parser(parse_key_value)
            .help("String config value; a value of @path reads the file at path"),
        Arg::new(PARAMETER_CONFIG_INT)
            .long(PARAMETER_CONFIG_INT)
            .num_args(1)
            .action(ArgAction::Append)
            .value_name("KEY=INT")
            .value_parser(parse_key_int)
            .help("Integer config value"),
        Arg::new(PARAMETER_CONFIG_JSON)
            .long(PARAMETER_CONFIG_JSON)
            .num_args(1)
            .action(ArgAction::Append)
            .value_name("KEY=JSON")
            .help("Raw JSON config value, e.g. 'ports=[80,443]'"),
    ]
}

pub fn secret_parameter() -> Arg {
    Arg::new(PARAMETER_SECRET)
        .long(PARAMETER_SECRET)
        .num_args(1)
        .action(ArgAction::Append)
        .value_name("KEY=VALUE")
        .value_parser(parse_key_value)
        .help("Secret value; a value of @path reads the file at path")
}
