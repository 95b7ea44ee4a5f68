//! Auth command definitions.
//!
//! This module defines the platform user management commands.

use crate::commands::params::{
    format_parameter, format_pretty_parameter, format_with_headers_parameter, name_parameter,
    COMMAND_ADD_USER, COMMAND_AUTH, COMMAND_DEL_USER, COMMAND_LIST_USER, PARAMETER_DISPLAY_NAME,
    PARAMETER_ORG, PARAMETER_ROLE,
};
use clap::{Arg, Command};

/// Create the auth command with all its subcommands.
pub fn auth_command() -> Command {
    Command::new(COMMAND_AUTH)
        .about("Manage platform users")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_ADD_USER)
                .about("Add a user")
                .arg(name_parameter("User name (email address)"))
                .arg(
                    Arg::new(PARAMETER_DISPLAY_NAME)
                        .long(PARAMETER_DISPLAY_NAME)
                        .num_args(1)
                        .help("Display name of the user"),
                )
                .arg(
                    Arg::new(PARAMETER_ROLE)
                        .long(PARAMETER_ROLE)
                        .num_args(1)
                        .help("Role granted to the user (admin, analyst)"),
                )
                .arg(
                    Arg::new(PARAMETER_ORG)
                        .long(PARAMETER_ORG)
                        .num_args(1)
                        .help("Organization of the user"),
                ),
        )
        .subcommand(
            Command::new(COMMAND_DEL_USER)
                .about("Delete a user")
                .arg(name_parameter("User name (email address)")),
        )
        .subcommand(
            Command::new(COMMAND_LIST_USER)
                .about("List users")
                .arg(format_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
}
