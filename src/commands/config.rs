//! Configuration command definitions.
//!
//! `config` on its own creates or updates a cluster profile and makes it
//! active. The subcommands inspect and maintain the profile document.

use crate::commands::params::{
    format_parameter, format_pretty_parameter, format_with_headers_parameter,
    provider_parameter, COMMAND_CONFIG, COMMAND_DELETE, COMMAND_LIST, COMMAND_PATH, COMMAND_VIEW,
    PARAMETER_NAME,
};
use clap::{Arg, Command};

/// Create the config command with all its subcommands.
pub fn config_command() -> Command {
    Command::new(COMMAND_CONFIG)
        .about("Manage cluster profiles")
        .long_about(
            "Manage cluster profiles.\n\n\
             Without a subcommand, saves the --cluster profile (or the active one) \
             with the given --provider, --namespace and --context and makes it active.",
        )
        .subcommand_required(false)
        .arg(provider_parameter())
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List all cluster profiles")
                .visible_alias("ls")
                .arg(format_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete a cluster profile")
                .visible_alias("rm")
                .arg(
                    Arg::new(PARAMETER_NAME)
                        .help("Name of the cluster profile to delete")
                        .required(true)
                        .num_args(1),
                ),
        )
        .subcommand(
            Command::new(COMMAND_VIEW)
                .about("Show the effective context")
                .arg(format_parameter())
                .arg(format_pretty_parameter())
                .arg(format_with_headers_parameter()),
        )
        .subcommand(Command::new(COMMAND_PATH).about("Show the configuration file path"))
}
