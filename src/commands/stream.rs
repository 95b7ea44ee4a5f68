//! Stream command definitions.
//!
//! Sources feed events into the platform, sinks receive them and routers
//! connect the two.

use crate::commands::params::{
    config_parameters, description_parameter, integration_id_parameter, name_parameter,
    COMMAND_ADD_ROUTER, COMMAND_ADD_SINK, COMMAND_ADD_SOURCE, COMMAND_STREAM, PARAMETER_TYPE,
};
use clap::{Arg, Command};

fn type_parameter(help: &'static str) -> Arg {
    Arg::new(PARAMETER_TYPE)
        .long(PARAMETER_TYPE)
        .num_args(1)
        .required(true)
        .help(help)
}

pub fn stream_command() -> Command {
    Command::new(COMMAND_STREAM)
        .about("Manage data sources, sinks and routers")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_ADD_SOURCE)
                .about("Add a data source")
                .arg(name_parameter("Name of the source"))
                .arg(type_parameter("Source type, e.g. s3"))
                .arg(integration_id_parameter())
                .args(config_parameters()),
        )
        .subcommand(
            Command::new(COMMAND_ADD_SINK)
                .about("Add a data sink")
                .arg(name_parameter("Name of the sink"))
                .arg(type_parameter("Sink type, e.g. datalake"))
                .arg(integration_id_parameter())
                .args(config_parameters()),
        )
        .subcommand(
            Command::new(COMMAND_ADD_ROUTER)
                .about("Add a router")
                .arg(name_parameter("Name of the router"))
                .arg(description_parameter())
                .args(config_parameters()),
        )
}
