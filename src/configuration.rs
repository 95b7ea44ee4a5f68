//! Named cluster profiles persisted in the per-user configuration file.
//!
//! The store keeps one [`Profile`] per cluster and an optional pointer to the
//! active one. It is loaded once at startup and written back wholesale by the
//! `config` subcommands. There is no locking: two processes saving at the same
//! time race and the later write wins.

use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tabled::Tabled;
use tracing::{debug, trace, warn};

pub const DEFAULT_CONFIGURATION_DIRECTORY: &str = ".ingext";
pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "config.yaml";
pub const CONFIGURATION_DIRECTORY_ENV: &str = "INGEXT_CONFIG_DIR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to resolve the home directory")]
    FailedToFindConfigurationDirectory,
    #[error("failed to create configuration directory {path:?}: {cause}")]
    FailedToCreateConfigurationDirectory {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
    #[error("failed to load configuration data from {path:?}: {cause}")]
    FailedToLoadData {
        path: PathBuf,
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("failed to write configuration data to {path:?}: {cause}")]
    FailedToWriteData {
        path: PathBuf,
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("cluster '{name}' not found")]
    ProfileNotFound { name: String },
}

/// Settings stored for one cluster. The cluster name is the key in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub provider: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub context: String,
}

impl Profile {
    pub fn new(provider: &str, namespace: &str, context: &str) -> Profile {
        Profile {
            provider: provider.to_string(),
            namespace: namespace.to_string(),
            context: context.to_string(),
        }
    }
}

/// One line of `config list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct ProfileEntry {
    #[tabled(rename = "CURRENT", display_with = "display_active")]
    pub active: bool,
    #[tabled(rename = "CLUSTER")]
    pub name: String,
    #[tabled(rename = "PROVIDER")]
    pub provider: String,
    #[tabled(rename = "NAMESPACE")]
    pub namespace: String,
    #[tabled(rename = "CONTEXT")]
    pub context: String,
}

fn display_active(active: &bool) -> String {
    if *active {
        "*".to_string()
    } else {
        String::new()
    }
}

/// Result of removing a profile from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedProfile {
    pub name: String,
    pub profile: Profile,
    /// The removed profile was the active one; the active pointer is now cleared.
    pub was_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStore {
    #[serde(
        rename = "current-cluster",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    current_cluster: Option<String>,
    #[serde(default)]
    clusters: BTreeMap<String, Profile>,
}

impl ProfileStore {
    /// Location of the profile document: `~/.ingext/config.yaml`, or
    /// `$INGEXT_CONFIG_DIR/config.yaml` when the variable is set.
    pub fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationError> {
        if let Ok(config_dir) = std::env::var(CONFIGURATION_DIRECTORY_ENV) {
            if !config_dir.is_empty() {
                let mut config_path = PathBuf::from(config_dir);
                config_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
                return Ok(config_path);
            }
        }

        match home_dir() {
            Some(home) => {
                let mut default_config_file_path = home;
                default_config_file_path.push(DEFAULT_CONFIGURATION_DIRECTORY);
                default_config_file_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
                Ok(default_config_file_path)
            }
            None => Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }
    }

    /// Loads the store from the default location.
    ///
    /// A missing or unreadable document yields an empty store so the first run
    /// works without any setup.
    pub fn load_default() -> ProfileStore {
        match Self::get_default_configuration_file_path() {
            Ok(path) => Self::load(&path),
            Err(e) => {
                warn!("{}, starting with an empty profile store", e);
                ProfileStore::default()
            }
        }
    }

    /// Lenient load: any failure is logged and an empty store is returned.
    pub fn load(path: &Path) -> ProfileStore {
        debug!("Loading profiles from {}...", path.display());
        match Self::load_from_file(path) {
            Ok(store) => store,
            Err(ConfigurationError::FailedToLoadData { cause, .. })
                if cause
                    .downcast_ref::<std::io::Error>()
                    .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound) =>
            {
                debug!("No profile document at {}, using an empty store", path.display());
                ProfileStore::default()
            }
            Err(e) => {
                warn!("{}, using an empty profile store", e);
                ProfileStore::default()
            }
        }
    }

    /// Strict load, reporting why the document could not be read.
    pub fn load_from_file(path: &Path) -> Result<ProfileStore, ConfigurationError> {
        let content =
            fs::read_to_string(path).map_err(|cause| ConfigurationError::FailedToLoadData {
                path: path.to_path_buf(),
                cause: Box::new(cause),
            })?;

        // serde_yaml reads an empty document as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(ProfileStore::default());
        }

        let mut store: ProfileStore =
            serde_yaml::from_str(&content).map_err(|cause| ConfigurationError::FailedToLoadData {
                path: path.to_path_buf(),
                cause: Box::new(cause),
            })?;
        store.normalize();
        Ok(store)
    }

    // Hand-edited files may carry an empty or dangling current-cluster.
    fn normalize(&mut self) {
        match self.current_cluster.as_deref() {
            Some("") => self.current_cluster = None,
            Some(name) if !self.clusters.contains_key(name) => {
                warn!(
                    "Active cluster '{}' has no profile in the configuration file, ignoring it",
                    name
                );
                self.current_cluster = None;
            }
            _ => (),
        }
    }

    pub fn write<W: Write>(&self, writer: W) -> Result<(), serde_yaml::Error> {
        serde_yaml::to_writer(writer, self)
    }

    /// Overwrites `path` with the whole store, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigurationError> {
        let configuration_directory = path
            .parent()
            .ok_or(ConfigurationError::FailedToFindConfigurationDirectory)?;

        // this operation only does work if the directory does not exist
        fs::create_dir_all(configuration_directory).map_err(|cause| {
            ConfigurationError::FailedToCreateConfigurationDirectory {
                path: configuration_directory.to_path_buf(),
                cause,
            }
        })?;

        let file = File::create(path).map_err(|cause| ConfigurationError::FailedToWriteData {
            path: path.to_path_buf(),
            cause: Box::new(cause),
        })?;

        self.write(file)
            .map_err(|cause| ConfigurationError::FailedToWriteData {
                path: path.to_path_buf(),
                cause: Box::new(cause),
            })?;

        trace!("Saved {} profile(s) to {}", self.clusters.len(), path.display());
        Ok(())
    }

    pub fn save_to_default(&self) -> Result<(), ConfigurationError> {
        self.save(&Self::get_default_configuration_file_path()?)
    }

    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.clusters.get(name)
    }

    pub fn active_profile_name(&self) -> Option<&str> {
        self.current_cluster.as_deref()
    }

    pub fn active_profile(&self) -> Option<(&str, &Profile)> {
        let name = self.current_cluster.as_deref()?;
        self.clusters.get(name).map(|profile| (name, profile))
    }

    /// Inserts or replaces a profile. The active pointer is left alone.
    pub fn set(&mut self, name: &str, profile: Profile) {
        self.clusters.insert(name.to_string(), profile);
    }

    pub fn set_active(&mut self, name: &str) -> Result<(), ConfigurationError> {
        if !self.clusters.contains_key(name) {
            return Err(ConfigurationError::ProfileNotFound {
                name: name.to_string(),
            });
        }
        self.current_cluster = Some(name.to_string());
        Ok(())
    }

    pub fn delete(&mut self, name: &str) -> Result<DeletedProfile, ConfigurationError> {
        let profile =
            self.clusters
                .remove(name)
                .ok_or_else(|| ConfigurationError::ProfileNotFound {
                    name: name.to_string(),
                })?;

        let was_active = self.current_cluster.as_deref() == Some(name);
        if was_active {
            self.current_cluster = None;
        }

        Ok(DeletedProfile {
            name: name.to_string(),
            profile,
            was_active,
        })
    }

    /// All profiles sorted by name, flagging the active one.
    pub fn list(&self) -> Vec<ProfileEntry> {
        self.clusters
            .iter()
            .map(|(name, profile)| ProfileEntry {
                active: self.current_cluster.as_deref() == Some(name.as_str()),
                name: name.clone(),
                provider: profile.provider.clone(),
                namespace: profile.namespace.clone(),
                context: profile.context.clone(),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_store() -> ProfileStore {
        let mut store = ProfileStore::default();
        store.set("prod", Profile::new("eks", "ingext-prod", "arn:aws:eks:prod"));
        store.set("dev", Profile::new("aks", "", "dev-ctx"));
        store.set_active("prod").unwrap();
        store
    }

    #[test]
    fn test_save_then_load_reproduces_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(DEFAULT_CONFIGURATION_FILE_NAME);

        let store = sample_store();
        store.save(&path).unwrap();

        let loaded = ProfileStore::load_from_file(&path).unwrap();
        assert_eq!(store, loaded);
        assert_eq!(loaded.active_profile_name(), Some("prod"));
    }

    #[test]
    fn test_document_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIGURATION_FILE_NAME);
        sample_store().save(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("current-cluster: prod"));
        assert!(text.contains("clusters:"));
        assert!(text.contains("namespace: ingext-prod"));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::load(&dir.path().join("absent.yaml"));
        assert!(store.is_empty());
        assert_eq!(store.active_profile_name(), None);
    }

    #[test]
    fn test_load_garbage_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIGURATION_FILE_NAME);
        fs::write(&path, "clusters: [this is: not a mapping").unwrap();

        assert!(ProfileStore::load_from_file(&path).is_err());
        assert!(ProfileStore::load(&path).is_empty());
    }

    #[test]
    fn test_load_clears_empty_and_dangling_active() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIGURATION_FILE_NAME);

        fs::write(&path, "current-cluster: \"\"\nclusters:\n  a:\n    provider: eks\n").unwrap();
        assert_eq!(ProfileStore::load(&path).active_profile_name(), None);

        fs::write(&path, "current-cluster: gone\nclusters:\n  a:\n    provider: eks\n").unwrap();
        let store = ProfileStore::load(&path);
        assert_eq!(store.active_profile_name(), None);
        assert!(store.profile("a").is_some());
    }

    #[test]
    fn test_set_does_not_change_active() {
        let mut store = sample_store();
        store.set("staging", Profile::new("gke", "ns", ""));
        assert_eq!(store.active_profile_name(), Some("prod"));
    }

    #[test]
    fn test_set_active_unknown_profile() {
        let mut store = sample_store();
        let result = store.set_active("missing");
        assert!(matches!(
            result,
            Err(ConfigurationError::ProfileNotFound { ref name }) if name == "missing"
        ));
        assert_eq!(store.active_profile_name(), Some("prod"));
    }

    #[test]
    fn test_delete_active_clears_pointer() {
        let mut store = sample_store();
        let deleted = store.delete("prod").unwrap();

        assert!(deleted.was_active);
        assert_eq!(store.active_profile_name(), None);
        assert!(store.list().iter().all(|entry| !entry.active));
    }

    #[test]
    fn test_delete_inactive_keeps_pointer() {
        let mut store = sample_store();
        let deleted = store.delete("dev").unwrap();

        assert!(!deleted.was_active);
        assert_eq!(store.active_profile_name(), Some("prod"));
        assert!(store.delete("dev").is_err());
    }

    #[test]
    fn test_list_sorted_with_active_marker() {
        let store = sample_store();
        let entries = store.list();

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["dev", "prod"]);
        assert!(!entries[0].active);
        assert!(entries[1].active);
    }

    #[test]
    fn test_save_under_regular_file_fails_to_create_directory() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let path = blocker.join("nested").join(DEFAULT_CONFIGURATION_FILE_NAME);

        let result = sample_store().save(&path);
        assert!(matches!(
            result,
            Err(ConfigurationError::FailedToCreateConfigurationDirectory { ref path, .. })
                if path == &blocker.join("nested")
        ));
    }

    #[test]
    fn test_save_onto_directory_fails_to_write() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join(DEFAULT_CONFIGURATION_FILE_NAME);
        fs::create_dir(&target).unwrap();

        let result = sample_store().save(&target);
        assert!(matches!(
            result,
            Err(ConfigurationError::FailedToWriteData { ref path, .. }) if path == &target
        ));
    }
}
