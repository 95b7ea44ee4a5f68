//! Integration command definitions.

use crate::commands::params::{
    config_parameters, description_parameter, format_parameter, format_pretty_parameter,
    format_with_headers_parameter, id_parameter, name_parameter, secret_parameter, COMMAND_ADD,
    COMMAND_DEL, COMMAND_INTEGRATION, COMMAND_LIST, PARAMETER_INTEGRATION,
};
use clap::{Arg, Command};

pub fn integration_command() -> Command {
    Command::new(COMMAND_INTEGRATION)
        .about("Manage integrations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_ADD)
                .about("Add an integration")
                .arg(
                    Arg::new(PARAMETER_INTEGRATION)
                        .long(PARAMETER_INTEGRATION)
                        .num_args(1)
                        .required(true)
                        .help("Integration type, e.g. aws_s3"),
                )
                .arg(name_parameter("Name of the integration"))
                .arg(description_parameter())
                .args(config_parameters())
                .arg(secret_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DEL)
                .about("Delete an integration")
                .arg(id_parameter("ID of the integration")),
        )
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List integrations")
                .visible_alias("ls")
                .arg(format_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
}
