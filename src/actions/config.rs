use crate::{
    actions::{print_formatted, print_rows},
    commands::params::{
        PARAMETER_CLUSTER, PARAMETER_CONTEXT, PARAMETER_NAME, PARAMETER_NAMESPACE,
        PARAMETER_PROVIDER,
    },
    configuration::{DeletedProfile, ProfileStore},
    context::{ContextError, ContextView, DEFAULT_PROVIDER},
    error::CliError,
    param_utils::{get_required_string, resolve_context},
};
use clap::ArgMatches;
use tracing::debug;

/// Values accepted by `ingext config`. `None` leaves the stored value alone.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProfileUpdate<'a> {
    pub cluster: Option<&'a str>,
    pub provider: Option<&'a str>,
    pub namespace: Option<&'a str>,
    pub context: Option<&'a str>,
}

impl<'a> ProfileUpdate<'a> {
    pub fn from_args(sub_matches: &'a ArgMatches) -> ProfileUpdate<'a> {
        let value = |name: &str| {
            sub_matches
                .get_one::<String>(name)
                .map(String::as_str)
                .filter(|v| !v.is_empty())
        };
        ProfileUpdate {
            cluster: value(PARAMETER_CLUSTER),
            provider: value(PARAMETER_PROVIDER),
            namespace: value(PARAMETER_NAMESPACE),
            context: value(PARAMETER_CONTEXT),
        }
    }
}

/// Applies `update` to the target profile and makes it active.
///
/// The target is the explicit cluster, else the active profile. Returns the
/// name of the profile that was written.
pub fn apply_profile_update(
    store: &mut ProfileStore,
    update: &ProfileUpdate,
) -> Result<String, CliError> {
    let name = update
        .cluster
        .or(store.active_profile_name())
        .map(str::to_string)
        .ok_or(ContextError::MissingCluster)?;

    let mut profile = store.profile(&name).cloned().unwrap_or_default();
    if let Some(provider) = update.provider {
        profile.provider = provider.to_string();
    } else if profile.provider.is_empty() {
        profile.provider = DEFAULT_PROVIDER.to_string();
    }
    if let Some(namespace) = update.namespace {
        profile.namespace = namespace.to_string();
    }
    if let Some(context) = update.context {
        profile.context = context.to_string();
    }

    debug!("Saving profile {}: {:?}", name, profile);
    store.set(&name, profile);
    store.set_active(&name)?;
    Ok(name)
}

pub fn configure_profile(
    sub_matches: &ArgMatches,
    store: &mut ProfileStore,
) -> Result<(), CliError> {
    let update = ProfileUpdate::from_args(sub_matches);
    let name = apply_profile_update(store, &update)?;
    store.save_to_default()?;

    eprintln!("Configuration saved for cluster '{}'.", name);
    Ok(())
}

pub fn list_profiles(sub_matches: &ArgMatches, store: &ProfileStore) -> Result<(), CliError> {
    print_rows(
        &store.list(),
        sub_matches,
        "No clusters configured. Run 'ingext config --cluster <name>' to add one.",
    )
}

pub fn delete_profile(sub_matches: &ArgMatches, store: &mut ProfileStore) -> Result<(), CliError> {
    let name = get_required_string(sub_matches, PARAMETER_NAME)?;
    let DeletedProfile { was_active, .. } = store.delete(name)?;
    store.save_to_default()?;

    if was_active {
        eprintln!("Warning: You deleted the currently active cluster context.");
    }
    eprintln!("Cluster '{}' deleted.", name);
    Ok(())
}

pub fn view_context(sub_matches: &ArgMatches, store: &ProfileStore) -> Result<(), CliError> {
    let context = resolve_context(sub_matches, store)?;
    let config_file = ProfileStore::get_default_configuration_file_path()?;

    let view = ContextView {
        context,
        config_file: config_file.display().to_string(),
    };
    print_formatted(&view, sub_matches)
}

pub fn print_configuration_path() -> Result<(), CliError> {
    let path = ProfileStore::get_default_configuration_file_path()?;
    println!("{}", path.display());
    Ok(())
}
