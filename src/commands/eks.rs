//! EKS command definitions.
//!
//! Assumed roles let the platform reach AWS resources through the EKS pod
//! identity agent.

use crate::commands::params::{
    format_parameter, format_pretty_parameter, format_with_headers_parameter, id_parameter,
    name_parameter, COMMAND_ADD_ASSUMED_ROLE, COMMAND_DEL_ASSUMED_ROLE, COMMAND_EKS,
    COMMAND_LIST_ASSUMED_ROLE, PARAMETER_EXTERNAL_ID, PARAMETER_ROLE_ARN,
};
use clap::{Arg, Command};

pub fn eks_command() -> Command {
    Command::new(COMMAND_EKS)
        .about("Manage EKS assumed roles")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_ADD_ASSUMED_ROLE)
                .about("Add an assumed role")
                .arg(name_parameter("Display name of the role"))
                .arg(
                    Arg::new(PARAMETER_ROLE_ARN)
                        .long(PARAMETER_ROLE_ARN)
                        .num_args(1)
                        .required(true)
                        .help("ARN of the AWS role to assume"),
                )
                .arg(
                    Arg::new(PARAMETER_EXTERNAL_ID)
                        .long(PARAMETER_EXTERNAL_ID)
                        .num_args(1)
                        .help("External ID required by the role's trust policy"),
                ),
        )
        .subcommand(
            Command::new(COMMAND_DEL_ASSUMED_ROLE)
                .about("Delete an assumed role")
                .arg(id_parameter("ID of the assumed role")),
        )
        .subcommand(
            Command::new(COMMAND_LIST_ASSUMED_ROLE)
                .about("List assumed roles")
                .arg(format_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
}
