//! Builds JSON payloads from the typed parameter flags of resource commands.
//!
//! Four categories of input are merged into one JSON object, later categories
//! overwriting earlier ones on key collisions:
//!
//! 1. string parameters (`--config k=v`), with `@path` file dereferencing
//! 2. integer parameters (`--config-int k=42`)
//! 3. raw JSON fragments (`--config-json 'k=[1,2]'`)
//!
//! Secret parameters (`--secret k=v`) are assembled separately into their own
//! document and are never merged with the configuration.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{collections::BTreeMap, fs, path::PathBuf};
use tracing::{debug, trace};

#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    #[error("invalid format '{fragment}', expected key=json_value")]
    InvalidFragment { fragment: String },
    #[error("failed to parse JSON for key '{key}': {cause}")]
    InvalidJson {
        key: String,
        #[source]
        cause: serde_json::Error,
    },
    #[error("failed to read file {path:?} for key '{key}': {cause}")]
    FileRead {
        key: String,
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
}

impl AssemblyError {
    /// The parameter key the failure belongs to. For a fragment without a
    /// separator this is the whole fragment.
    pub fn key(&self) -> &str {
        match self {
            AssemblyError::InvalidFragment { fragment } => fragment,
            AssemblyError::InvalidJson { key, .. } => key,
            AssemblyError::FileRead { key, .. } => key,
        }
    }
}

/// Reading a dereferenced file failed.
#[derive(Debug, thiserror::Error)]
#[error("failed to read file {path:?}: {cause}")]
pub struct FileReadError {
    pub path: PathBuf,
    #[source]
    pub cause: std::io::Error,
}

/// Replaces an `@path` value with the contents of the file at `path`.
///
/// A lone `@` is an ordinary value and is returned unchanged.
pub fn dereference(value: &str) -> Result<String, FileReadError> {
    match value.strip_prefix('@') {
        Some(path) if !path.is_empty() => {
            trace!("Reading parameter value from {}", path);
            fs::read_to_string(path).map_err(|cause| FileReadError {
                path: PathBuf::from(path),
                cause,
            })
        }
        _ => Ok(value.to_string()),
    }
}

/// One typed parameter taken from the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    String { key: String, value: String },
    Int { key: String, value: i64 },
    /// Unparsed `key=json_value` fragment.
    Json(String),
    Secret { key: String, value: String },
}

/// Every parameter supplied to one command invocation, grouped by category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    string_params: BTreeMap<String, String>,
    int_params: BTreeMap<String, i64>,
    json_fragments: Vec<String>,
    secret_params: BTreeMap<String, String>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, param: Param) {
        match param {
            Param::String { key, value } => {
                self.string_params.insert(key, value);
            }
            Param::Int { key, value } => {
                self.int_params.insert(key, value);
            }
            Param::Json(fragment) => self.json_fragments.push(fragment),
            Param::Secret { key, value } => {
                self.secret_params.insert(key, value);
            }
        }
    }

    pub fn with(mut self, param: Param) -> Self {
        self.push(param);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.string_params.is_empty()
            && self.int_params.is_empty()
            && self.json_fragments.is_empty()
            && self.secret_params.is_empty()
    }
}

impl FromIterator<Param> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = Param>>(iter: I) -> Self {
        let mut set = ParameterSet::new();
        for param in iter {
            set.push(param);
        }
        set
    }
}

/// JSON object sent to the platform as a resource's config or secret.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDocument(Map<String, Value>);

impl ConfigDocument {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

fn insert_dereferenced(
    document: &mut Map<String, Value>,
    params: &BTreeMap<String, String>,
) -> Result<(), AssemblyError> {
    for (key, value) in params {
        let value = dereference(value).map_err(|e| AssemblyError::FileRead {
            key: key.clone(),
            path: e.path,
            cause: e.cause,
        })?;
        document.insert(key.clone(), Value::String(value));
    }
    Ok(())
}

fn parse_fragment(fragment: &str) -> Result<(String, Value), AssemblyError> {
    let (key, raw_value) = match fragment.split_once('=') {
        Some((key, raw_value)) if !key.is_empty() => (key, raw_value),
        _ => {
            return Err(AssemblyError::InvalidFragment {
                fragment: fragment.to_string(),
            })
        }
    };

    let value = serde_json::from_str(raw_value).map_err(|cause| AssemblyError::InvalidJson {
        key: key.to_string(),
        cause,
    })?;
    Ok((key.to_string(), value))
}

/// Merges the string, integer and JSON parameters into the resource config.
///
/// Fails on the first bad parameter; no partial document is returned.
pub fn assemble(params: &ParameterSet) -> Result<ConfigDocument, AssemblyError> {
    let mut document = Map::new();

    insert_dereferenced(&mut document, &params.string_params)?;

    for (key, value) in &params.int_params {
        document.insert(key.clone(), Value::from(*value));
    }

    for fragment in &params.json_fragments {
        let (key, value) = parse_fragment(fragment)?;
        document.insert(key, value);
    }

    debug!(
        "Assembled config with keys: {:?}",
        document.keys().collect::<Vec<_>>()
    );
    Ok(ConfigDocument(document))
}

/// Builds the secret document from the secret parameters alone.
pub fn assemble_secrets(params: &ParameterSet) -> Result<ConfigDocument, AssemblyError> {
    let mut document = Map::new();
    insert_dereferenced(&mut document, &params.secret_params)?;

    // values are sensitive, only the keys go to the log
    debug!(
        "Assembled secret with keys: {:?}",
        document.keys().collect::<Vec<_>>()
    );
    Ok(ConfigDocument(document))
}
