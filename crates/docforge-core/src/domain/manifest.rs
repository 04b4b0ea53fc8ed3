//! The generated project's `package.json`.
//!
//! Only `name` is owned here. Every other key is kept in an ordered
//! passthrough map and written back exactly as it was read.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::error::DomainError;

/// File name of the manifest inside a project.
pub const MANIFEST_FILE: &str = "package.json";

/// Typed view over `package.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Manifest {
    name: String,
    fields: Map<String, Value>,
}

impl Manifest {
    /// Parse manifest text. The document must be an object with a string `name`.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        serde_json::from_str(text).map_err(|e| DomainError::InvalidManifest {
            reason: e.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace `name`, keeping its position among the other keys.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.fields
            .insert("name".to_string(), Value::String(self.name.clone()));
    }

    /// Two-space indented JSON with a trailing newline.
    pub fn to_pretty_string(&self) -> String {
        let mut out = serde_json::to_string_pretty(&self.fields)
            .unwrap_or_else(|_| String::from("{}"));
        out.push('\n');
        out
    }
}

impl TryFrom<Map<String, Value>> for Manifest {
    type Error = DomainError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let name = match fields.get("name") {
            Some(Value::String(name)) => name.clone(),
            Some(_) => {
                return Err(DomainError::InvalidManifest {
                    reason: "\"name\" must be a string".into(),
                });
            }
            None => return Err(DomainError::MissingRequiredField { field: "name" }),
        };
        Ok(Self { name, fields })
    }
}

impl From<Manifest> for Map<String, Value> {
    fn from(manifest: Manifest) -> Self {
        manifest.fields
    }
}
