use super::externals::{api_key, asset_id, exported_symbols, webpack_externals};
use crate::{
    config::PackageTemplateConfig,
    error::{Error, Result},
    generator::interface::TemplateGenerator,
    ioutils::write_file,
};
use minijinja::{AutoEscape, Environment};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Component, Path};

/// Skeleton files rendered from embedded templates: (target path, template source).
const SKELETON_TEMPLATES: &[(&str, &str)] = &[
    ("src/auto-generated.ts", include_str!("templates/auto-generated.ts.j2")),
    ("README.md", include_str!("templates/README.md.j2")),
    (".gitignore", include_str!("templates/gitignore.j2")),
    (".npmignore", include_str!("templates/npmignore.j2")),
    (".prettierignore", include_str!("templates/prettierignore.j2")),
    ("LICENSE", include_str!("templates/LICENSE.j2")),
    ("tsconfig.json", include_str!("templates/tsconfig.json.j2")),
    ("webpack.config.ts", include_str!("templates/webpack.config.ts.j2")),
];

const PACKAGE_JSON: &str = "package.json";

const USER_GUIDE: (&str, &str) =
    ("doc/user-guide.md", include_str!("templates/user-guide.md.j2"));

/// Build toolchain every generated package depends on; dev-only deps are merged after.
const TOOLCHAIN_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@types/jest", "^29.5.1"),
    ("jest", "^29.5.0"),
    ("prettier", "^2.8.8"),
    ("ts-jest", "^29.1.0"),
    ("ts-loader", "9.4.2"),
    ("ts-node", "10.9.1"),
    ("typedoc", "^0.24.7"),
    ("typescript", "5.0.4"),
    ("webpack", "^5.82.0"),
    ("webpack-cli", "5.1.1"),
];

const DEVELOPER_DOC_URL: &str =
    "https://platform.youwol.com/applications/@youwol/cdn-explorer/latest";
const NPM_URL: &str = "https://www.npmjs.com/package";
const GITHUB_URL: &str = "https://github.com/youwol";
const USER_GUIDE_URL: &str = "https://l.youwol.com/doc";

/// MiniJinja-based generator writing the standard library skeleton.
pub struct SkeletonGenerator {
    env: Environment<'static>,
}

impl SkeletonGenerator {
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Skeleton files are code and config, never HTML.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.add_filter("js_string", js_string);
        Self { env }
    }

    /// Renders every skeleton file in memory, in write order.
    ///
    /// # Returns
    /// * `Result<Vec<(String, String)>>` - Paths relative to the target dir with their content
    pub fn render_files(
        &self,
        config: &PackageTemplateConfig,
    ) -> Result<Vec<(String, String)>> {
        config.validate()?;
        let context = self.build_context(config)?;

        let mut files = Vec::with_capacity(SKELETON_TEMPLATES.len() + 2);
        for (target, source) in SKELETON_TEMPLATES {
            files.push((target.to_string(), self.render(*target, *source, &context)?));
        }
        files.push((PACKAGE_JSON.to_string(), package_json(config)?));

        if config.generate_user_guide {
            let (target, source) = USER_GUIDE;
            files.push((target.to_string(), self.render(target, source, &context)?));
        }
        Ok(files)
    }

    fn render(
        &self,
        name: &'static str,
        source: &'static str,
        context: &Value,
    ) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template(name, source)?;
        Ok(env.get_template(name)?.render(context)?)
    }

    fn build_context(&self, config: &PackageTemplateConfig) -> Result<Value> {
        let name = &config.name;
        let short_name = name.rsplit('/').next().unwrap_or(name);
        let main_module = &config.bundles.main_module;

        Ok(json!({
            "name": name,
            "version": config.version,
            "author": config.author,
            "short_description": config.short_description,
            "asset_id": asset_id(name),
            "api_version": generation_step(config, api_key(&config.version))?,
            "entry_file": main_module.entry_file,
            "load_dependencies": main_module.load_dependencies,
            "runtime_dependencies": to_pretty_json(&json!({
                "externals": config.runtime_externals(),
                "includedInBundle": {},
            }))?,
            "externals": to_pretty_json(&generation_step(config, webpack_externals(config))?)?,
            "exported_symbols": to_pretty_json(&generation_step(config, exported_symbols(config))?)?,
            "main_entry": to_pretty_json(main_module)?,
            "developer_documentation": format!("{DEVELOPER_DOC_URL}?package={name}&tab=doc"),
            "npm_package": format!("{NPM_URL}/{name}"),
            "source_github": format!("{GITHUB_URL}/{short_name}"),
            "user_guide": format!("{USER_GUIDE_URL}/{name}"),
        }))
    }
}

impl Default for SkeletonGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateGenerator for SkeletonGenerator {
    fn generate(&self, config: &PackageTemplateConfig, target_dir: &Path) -> Result<()> {
        let generation_failed = |e: Error| match e {
            Error::GenerationFailed { .. } => e,
            other => Error::GenerationFailed {
                package: config.name.clone(),
                reason: other.to_string(),
            },
        };

        let files = self.render_files(config).map_err(generation_failed)?;
        for (relative, content) in files {
            ensure_relative(&relative).map_err(generation_failed)?;
            let target = target_dir.join(&relative);
            log::debug!("Generating '{}'", target.display());
            write_file(&content, &target).map_err(generation_failed)?;
        }
        log::info!("Generated skeleton for '{}' in '{}'", config.name, target_dir.display());
        Ok(())
    }
}

fn generation_step<T>(
    config: &PackageTemplateConfig,
    step: std::result::Result<T, String>,
) -> Result<T> {
    step.map_err(|reason| Error::GenerationFailed { package: config.name.clone(), reason })
}

/// Rejects paths that could escape the target directory.
fn ensure_relative(path: &str) -> Result<()> {
    let escapes = Path::new(path)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("refusing to write '{path}' outside the target directory"),
        )));
    }
    Ok(())
}

/// Quotes a value as a JavaScript string literal.
fn js_string(value: String) -> std::result::Result<String, minijinja::Error> {
    serde_json::to_string(&value).map_err(|e| {
        minijinja::Error::new(minijinja::ErrorKind::InvalidOperation, e.to_string())
    })
}

/// Pretty JSON with four-space indentation.
fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn package_json(config: &PackageTemplateConfig) -> Result<String> {
    let name = &config.name;
    let api_version = generation_step(config, api_key(&config.version))?;

    let mut dev_dependencies = serde_json::Map::new();
    for (dep, constraint) in TOOLCHAIN_DEV_DEPENDENCIES {
        dev_dependencies.insert(dep.to_string(), json!(constraint));
    }
    for (dep, constraint) in &config.dependencies.dev_only {
        dev_dependencies.insert(dep.clone(), json!(constraint));
    }

    let manifest = json!({
        "name": name,
        "description": config.short_description,
        "version": config.version,
        "author": config.author,
        "homepage": format!("{NPM_URL}/{name}"),
        "main": format!("dist/{name}.js"),
        "types": "src/index.ts",
        "scripts": {
            "clean": "del-cli dist",
            "auto-gen": "toolbox-baker",
            "build": "yarn build:dev",
            "pre-build": "yarn clean",
            "build:dev": "yarn pre-build && webpack --mode development",
            "build:prod": "yarn pre-build && webpack --mode production",
            "lint-check": "yarn lint-prettier-check",
            "lint-prettier-check": "prettier --check ./src",
            "test": "jest -i",
            "test-coverage": "jest -i --collect-coverage",
            "doc": "typedoc",
        },
        "prettier": { "printWidth": 80, "tabWidth": 4, "semi": false, "singleQuote": true },
        "dependencies": config.runtime_externals(),
        "devDependencies": dev_dependencies,
        "webpack": {
            "root": format!("{name}_APIv{api_version}"),
            "rootAPIVersion": api_version,
        },
    });
    Ok(to_pretty_json(&manifest)? + "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;

    fn config() -> PackageTemplateConfig {
        PackageTemplateConfig::from_manifest(&Manifest {
            name: "@youwol/vsf-three".into(),
            version: "0.1.0-wip".into(),
            description: "Toolbox wrapping the library three.js".into(),
            author: "greinisch@youwol.com".into(),
        })
    }

    fn rendered(name: &str) -> String {
        SkeletonGenerator::new()
            .render_files(&config())
            .unwrap()
            .into_iter()
            .find(|(target, _)| target == name)
            .map(|(_, content)| content)
            .unwrap()
    }

    #[test]
    fn renders_every_copied_file() {
        let files = SkeletonGenerator::new().render_files(&config()).unwrap();
        let targets: Vec<_> = files.iter().map(|(t, _)| t.as_str()).collect();
        for expected in crate::constants::BOILERPLATE_FILES {
            assert!(targets.contains(expected), "missing {expected}");
        }
        assert!(targets.contains(&crate::constants::AUTO_GENERATED_STUB));
        assert!(!targets.contains(&"doc/user-guide.md"));
    }

    #[test]
    fn auto_generated_setup_carries_identity() {
        let content = rendered("src/auto-generated.ts");
        assert!(content.contains("name:\"@youwol/vsf-three\","));
        assert!(content.contains("assetId:\"QHlvdXdvbC92c2YtdGhyZWU=\","));
        assert!(content.contains("version:\"0.1.0-wip\","));
        assert!(content.contains("shortDescription:\"Toolbox wrapping the library three.js\""));
        assert!(content.contains("apiVersion:'01'"));
        assert!(content.contains("\"root\": \"THREE_APIv0152\""));
        assert!(content.contains("[\"@youwol/vsf-three\"]: \"./lib/toolbox.ts\""));
        assert!(content.contains("window[\"@youwol/vsf-three\" + '_APIv01']"));
        assert!(content.ends_with("}\n"));
    }

    #[test]
    fn quotes_in_identity_stay_inside_string_literals() {
        let mut config = config();
        config.name = "it's-a-`widget`".into();
        config.short_description = "say \"hi\"".into();
        let files = SkeletonGenerator::new().render_files(&config).unwrap();
        let (_, content) =
            files.iter().find(|(t, _)| t == "src/auto-generated.ts").unwrap();

        assert!(content.contains("name:\"it's-a-`widget`\","));
        assert!(content.contains("shortDescription:\"say \\\"hi\\\"\","));
        assert!(!content.contains("'it's"));
        assert!(!content.contains("`it's"));
    }

    #[test]
    fn package_json_merges_dependency_tables() {
        let content = rendered("package.json");
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["name"], "@youwol/vsf-three");
        assert_eq!(value["author"], "greinisch@youwol.com");
        assert_eq!(value["dependencies"]["three"], "^0.152.0");
        assert_eq!(value["devDependencies"]["@types/three"], "^0.152.0");
        assert_eq!(value["devDependencies"]["typescript"], "5.0.4");
        assert_eq!(value["webpack"]["rootAPIVersion"], "01");
    }

    #[test]
    fn license_names_the_author() {
        assert!(rendered("LICENSE").contains("Copyright (c) greinisch@youwol.com"));
    }

    #[test]
    fn user_guide_only_when_requested() {
        let mut config = config();
        config.generate_user_guide = true;
        let files = SkeletonGenerator::new().render_files(&config).unwrap();
        let guide = files.iter().find(|(t, _)| t == "doc/user-guide.md").unwrap();
        assert!(guide.1.contains("@youwol/vsf-core, rxjs, three"));
    }

    #[test]
    fn invalid_version_fails_generation() {
        let mut config = config();
        config.version = "latest".into();
        let tmp = tempfile::tempdir().unwrap();
        let err = SkeletonGenerator::new().generate(&config, tmp.path()).unwrap_err();
        assert!(matches!(err, Error::GenerationFailed { ref package, .. } if package == "@youwol/vsf-three"));
    }

    #[test]
    fn rejects_escaping_paths() {
        assert!(ensure_relative("src/auto-generated.ts").is_ok());
        assert!(ensure_relative("../package.json").is_err());
        assert!(ensure_relative("/etc/passwd").is_err());
    }
}
