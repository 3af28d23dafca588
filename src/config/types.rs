//! Building blocks of the package template configuration

use indexmap::IndexMap;
use serde::Serialize;

/// Dependency name to version constraint, in declaration order.
pub type DependencyTable = IndexMap<String, String>;

/// Kind of package being scaffolded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    /// A library bundle loaded by a host application
    Library,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependencies {
    /// Provided by the host environment at runtime, never bundled
    pub runtime_externals: DependencyTable,
    /// Needed only to build or type-check
    pub dev_only: DependencyTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainModule {
    pub entry_file: String,
    pub load_dependencies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundles {
    pub main_module: MainModule,
}

/// Builds a [`DependencyTable`] from a constant table.
pub fn dependency_table(entries: &[(&str, &str)]) -> DependencyTable {
    entries
        .iter()
        .map(|(name, constraint)| (name.to_string(), constraint.to_string()))
        .collect()
}
