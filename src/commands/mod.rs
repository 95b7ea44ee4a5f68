//! CLI command definitions and argument parsing.
//!
//! This module defines all the CLI commands and their arguments using the clap crate.
//! Each command group lives in its own file; shared parameters are in [`params`].

use clap::{ArgMatches, Command};

pub mod auth;
pub mod config;
pub mod eks;
pub mod integration;
pub mod params;
pub mod stream;

use params::{context_parameter, cluster_parameter, namespace_parameter, verbose_parameter};

/// Builds the complete command tree without parsing anything.
pub fn build_cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Operator CLI for the ingext data platform")
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(cluster_parameter())
        .arg(namespace_parameter())
        .arg(context_parameter())
        .arg(verbose_parameter())
        .subcommand(config::config_command())
        .subcommand(auth::auth_command())
        .subcommand(eks::eks_command())
        .subcommand(integration::integration_command())
        .subcommand(stream::stream_command())
}

/// Parses the process arguments, exiting with usage help on invalid input.
pub fn create_cli_commands() -> ArgMatches {
    build_cli().get_matches()
}
