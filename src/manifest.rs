//! Package manifest (`package.json`) loading

use crate::constants::MANIFEST_FILENAME;
use crate::error::{Error, Result};
use std::path::Path;

/// Fields every manifest must provide, in the order they are checked.
pub const REQUIRED_FIELDS: &[&str] = &["name", "version", "description", "author"];

/// The identity fields of a package manifest. Everything else in the file is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
}

impl Manifest {
    /// Reads `package.json` from `project_root`.
    ///
    /// # Errors
    /// * `ManifestNotFound` if the file does not exist
    /// * `ManifestMalformed` if it cannot be read as UTF-8 text (permission denied,
    ///   invalid encoding), is not a JSON object, or a required field is not a string
    /// * `ManifestMissingField` naming the first absent required field
    pub fn load<P: AsRef<Path>>(project_root: P) -> Result<Self> {
        let path = project_root.as_ref().join(MANIFEST_FILENAME);
        let display = path.display().to_string();

        if !path.is_file() {
            return Err(Error::ManifestNotFound { path: display });
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            Error::ManifestMalformed { path: display.clone(), reason: e.to_string() }
        })?;
        log::debug!("Loaded manifest from {display}");

        Self::from_json_str(&content, &display)
    }

    /// Parses manifest content. `origin` is only used in error messages.
    pub fn from_json_str(content: &str, origin: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content).map_err(|e| {
            Error::ManifestMalformed { path: origin.to_string(), reason: e.to_string() }
        })?;

        let serde_json::Value::Object(map) = value else {
            return Err(Error::ManifestMalformed {
                path: origin.to_string(),
                reason: "top-level value is not an object".into(),
            });
        };

        let field = |name: &str| -> Result<String> {
            let value = map
                .get(name)
                .ok_or_else(|| Error::ManifestMissingField { field: name.to_string() })?;
            value.as_str().map(str::to_string).ok_or_else(|| Error::ManifestMalformed {
                path: origin.to_string(),
                reason: format!("field '{name}' must be a string"),
            })
        };

        // Checked in REQUIRED_FIELDS order so the first absent one is reported.
        Ok(Self {
            name: field(REQUIRED_FIELDS[0])?,
            version: field(REQUIRED_FIELDS[1])?,
            description: field(REQUIRED_FIELDS[2])?,
            author: field(REQUIRED_FIELDS[3])?,
        })
    }
}
