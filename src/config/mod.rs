//! Package template configuration handed to the generator

pub mod types;


pub use types::{Bundles, Dependencies, DependencyTable, MainModule, PackageType};

use crate::constants::{
    DEV_ONLY_DEPENDENCIES, GENERATE_USER_GUIDE, MAIN_ENTRY_FILE, MAIN_LOAD_DEPENDENCIES,
    RUNTIME_EXTERNALS,
};
use crate::error::{Error, Result};
use crate::manifest::Manifest;
use serde::Serialize;
use types::dependency_table;

/// Description of the package to scaffold.
///
/// Identity fields come verbatim from the manifest, everything else from the
/// constant tables in [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageTemplateConfig {
    pub name: String,
    pub version: String,
    pub short_description: String,
    pub author: String,
    #[serde(rename = "type")]
    pub package_type: PackageType,
    pub dependencies: Dependencies,
    pub bundles: Bundles,
    pub generate_user_guide: bool,
}

impl PackageTemplateConfig {
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self {
            name: manifest.name.clone(),
            version: manifest.version.clone(),
            short_description: manifest.description.clone(),
            author: manifest.author.clone(),
            package_type: PackageType::Library,
            dependencies: Dependencies {
                runtime_externals: dependency_table(RUNTIME_EXTERNALS),
                dev_only: dependency_table(DEV_ONLY_DEPENDENCIES),
            },
            bundles: Bundles {
                main_module: MainModule {
                    entry_file: MAIN_ENTRY_FILE.to_string(),
                    load_dependencies: MAIN_LOAD_DEPENDENCIES
                        .iter()
                        .map(|d| d.to_string())
                        .collect(),
                },
            },
            generate_user_guide: GENERATE_USER_GUIDE,
        }
    }

    /// Runtime externals, in table order.
    pub fn runtime_externals(&self) -> &DependencyTable {
        &self.dependencies.runtime_externals
    }

    /// Checks that every dependency the main module loads is a declared runtime external.
    pub fn validate(&self) -> Result<()> {
        for dep in &self.bundles.main_module.load_dependencies {
            if !self.dependencies.runtime_externals.contains_key(dep) {
                return Err(Error::ConfigValidation(format!(
                    "main module loads '{dep}' which is not a runtime external"
                )));
            }
        }
        if self.bundles.main_module.entry_file.is_empty() {
            return Err(Error::ConfigValidation("entry file must not be empty".into()));
        }
        Ok(())
    }
}
