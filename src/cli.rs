use clap::ArgMatches;
use ingext::{
    actions::{config, integrations, roles, streams, users},
    commands::params::{
        COMMAND_ADD, COMMAND_ADD_ASSUMED_ROLE, COMMAND_ADD_ROUTER, COMMAND_ADD_SINK,
        COMMAND_ADD_SOURCE, COMMAND_ADD_USER, COMMAND_AUTH, COMMAND_CONFIG, COMMAND_DEL,
        COMMAND_DELETE, COMMAND_DEL_ASSUMED_ROLE, COMMAND_DEL_USER, COMMAND_EKS,
        COMMAND_INTEGRATION, COMMAND_LIST, COMMAND_LIST_ASSUMED_ROLE, COMMAND_LIST_USER,
        COMMAND_PATH, COMMAND_STREAM, COMMAND_VIEW,
    },
    configuration::ProfileStore,
    error::CliError,
};

fn extract_subcommand_name(sub_matches: &ArgMatches) -> String {
    let message = match sub_matches.subcommand() {
        Some(m) => m.0,
        None => "unknown",
    };

    message.to_string()
}

pub async fn execute_command(
    commands: &ArgMatches,
    mut store: ProfileStore,
) -> Result<(), CliError> {
    match commands.subcommand() {
        // Profiles
        Some((COMMAND_CONFIG, sub_matches)) => match sub_matches.subcommand() {
            None => config::configure_profile(sub_matches, &mut store),
            Some((COMMAND_LIST, sub_matches)) => config::list_profiles(sub_matches, &store),
            Some((COMMAND_DELETE, sub_matches)) => config::delete_profile(sub_matches, &mut store),
            Some((COMMAND_VIEW, sub_matches)) => config::view_context(sub_matches, &store),
            Some((COMMAND_PATH, _)) => config::print_configuration_path(),
            _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
        },
        // Users
        Some((COMMAND_AUTH, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_ADD_USER, sub_matches)) => users::add_user(sub_matches, &store).await,
            Some((COMMAND_DEL_USER, sub_matches)) => users::delete_user(sub_matches, &store).await,
            Some((COMMAND_LIST_USER, sub_matches)) => users::list_users(sub_matches, &store).await,
            _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
        },
        // Assumed roles
        Some((COMMAND_EKS, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_ADD_ASSUMED_ROLE, sub_matches)) => {
                roles::add_assumed_role(sub_matches, &store).await
            }
            Some((COMMAND_DEL_ASSUMED_ROLE, sub_matches)) => {
                roles::delete_assumed_role(sub_matches, &store).await
            }
            Some((COMMAND_LIST_ASSUMED_ROLE, sub_matches)) => {
                roles::list_assumed_roles(sub_matches, &store).await
            }
            _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
        },
        // Integrations
        Some((COMMAND_INTEGRATION, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_ADD, sub_matches)) => {
                integrations::add_integration(sub_matches, &store).await
            }
            Some((COMMAND_DEL, sub_matches)) => {
                integrations::delete_integration(sub_matches, &store).await
            }
            Some((COMMAND_LIST, sub_matches)) => {
                integrations::list_integrations(sub_matches, &store).await
            }
            _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
        },
        // Streams
        Some((COMMAND_STREAM, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_ADD_SOURCE, sub_matches)) => streams::add_source(sub_matches, &store).await,
            Some((COMMAND_ADD_SINK, sub_matches)) => streams::add_sink(sub_matches, &store).await,
            Some((COMMAND_ADD_ROUTER, sub_matches)) => streams::add_router(sub_matches, &store).await,
            _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
        },
        _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
            commands,
        ))),
    }
}
