//! Derivation of webpack externals and API keys from the runtime dependency table

use crate::config::PackageTemplateConfig;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use semver::{Version, VersionReq};
use serde_json::{json, Map, Value};

/// Global symbols that differ from the package name.
const EXPORTED_SYMBOL_OVERRIDES: &[(&str, &str)] = &[("three", "THREE")];

/// Sub-modules imported by path that must also be declared as externals.
const SUBMODULE_ALIASES: &[(&str, &[&str])] = &[("rxjs", &["operators"])];

/// Computes the API key of a version or caret constraint.
///
/// Breaking changes follow semver: `0.x` versions are keyed on the minor
/// (`0.152.0` gives `"0152"`), later ones on the major (`6.5.5` gives `"6"`).
/// Pre-release tags are ignored.
pub fn api_key(version: &str) -> Result<String, String> {
    let (major, minor) = match Version::parse(version) {
        Ok(v) => (v.major, v.minor),
        Err(_) => {
            let req = VersionReq::parse(version)
                .map_err(|e| format!("invalid version '{version}': {e}"))?;
            let comparator = req
                .comparators
                .first()
                .ok_or_else(|| format!("version constraint '{version}' has no bound"))?;
            (comparator.major, comparator.minor.unwrap_or(0))
        }
    };
    Ok(if major == 0 { format!("0{minor}") } else { major.to_string() })
}

/// Name of the global a dependency is exposed under.
pub fn exported_symbol(name: &str) -> &str {
    EXPORTED_SYMBOL_OVERRIDES
        .iter()
        .find(|(package, _)| *package == name)
        .map(|(_, symbol)| *symbol)
        .unwrap_or(name)
}

/// Asset identifier of a package: the standard base64 encoding of its name.
pub fn asset_id(name: &str) -> String {
    BASE64.encode(name)
}

/// `exportedSymbols` record: dependency -> `{ apiKey, exportedSymbol }`.
pub fn exported_symbols(config: &PackageTemplateConfig) -> Result<Value, String> {
    let mut symbols = Map::new();
    for (name, constraint) in config.runtime_externals() {
        symbols.insert(
            name.clone(),
            json!({
                "apiKey": api_key(constraint)?,
                "exportedSymbol": exported_symbol(name),
            }),
        );
    }
    Ok(Value::Object(symbols))
}

/// webpack `externals` record, including the sub-module aliases of each dependency.
pub fn webpack_externals(config: &PackageTemplateConfig) -> Result<Value, String> {
    let mut externals = Map::new();
    let mut aliases = Vec::new();

    for (name, constraint) in config.runtime_externals() {
        let root = format!("{}_APIv{}", exported_symbol(name), api_key(constraint)?);
        externals.insert(
            name.clone(),
            json!({ "commonjs": name, "commonjs2": name, "root": &root }),
        );

        if let Some((_, subs)) = SUBMODULE_ALIASES.iter().find(|(p, _)| p == name) {
            for sub in subs.iter() {
                let path = format!("{name}/{sub}");
                aliases.push((
                    path.clone(),
                    json!({ "commonjs": path, "commonjs2": path, "root": [&root, sub] }),
                ));
            }
        }
    }
    // Aliases come after every top-level external.
    externals.extend(aliases);
    Ok(Value::Object(externals))
}
