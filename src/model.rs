//! Entities exchanged with the platform API.

use crate::assembler::ConfigDocument;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

fn display_list(values: &[String]) -> String {
    values.join(",")
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub struct UserEntry {
    #[tabled(rename = "USERNAME")]
    pub username: String,
    #[serde(default)]
    #[tabled(rename = "EMAIL")]
    pub email: String,
    #[serde(default)]
    #[tabled(rename = "DISPLAY_NAME")]
    pub first_name: String,
    #[serde(default)]
    #[tabled(rename = "ROLES", display_with = "display_list")]
    pub roles: Vec<String>,
    #[serde(default)]
    #[tabled(rename = "ORGANIZATION")]
    pub organization: String,
}

impl UserEntry {
    /// Users are keyed by their email address.
    pub fn new(name: &str, display_name: &str, role: &str, organization: &str) -> UserEntry {
        UserEntry {
            username: name.to_string(),
            email: name.to_string(),
            first_name: display_name.to_string(),
            roles: if role.is_empty() {
                vec![]
            } else {
                vec![role.to_string()]
            },
            organization: organization.to_string(),
        }
    }
}

/// AWS role assumed through the EKS pod identity agent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub struct InstanceRole {
    #[tabled(rename = "ID")]
    pub id: String,
    #[serde(default)]
    #[tabled(rename = "NAME")]
    pub display_name: String,
    #[serde(default, rename = "roleARN")]
    #[tabled(rename = "ROLE_ARN")]
    pub role_arn: String,
    #[serde(default, rename = "externalID")]
    #[tabled(rename = "EXTERNAL_ID")]
    pub external_id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "NAME")]
    pub name: String,
    #[tabled(rename = "INTEGRATION")]
    pub integration: String,
    #[serde(default)]
    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
    #[serde(default)]
    #[tabled(skip)]
    pub config: ConfigDocument,
    #[serde(default, skip_serializing_if = "ConfigDocument::is_empty")]
    #[tabled(skip)]
    pub secret: ConfigDocument,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_id: Option<String>,
    #[serde(default)]
    pub config: ConfigDocument,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSinkConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub sink_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_id: Option<String>,
    #[serde(default)]
    pub config: ConfigDocument,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub config: ConfigDocument,
}

/// Response of every `add` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedResource {
    pub id: String,
}
