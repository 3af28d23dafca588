use crate::{
    config::PackageTemplateConfig,
    constants::{AUTO_GENERATED_STUB, BOILERPLATE_FILES, TEMPLATE_DIR},
    error::Result,
    generator::{SkeletonGenerator, TemplateGenerator},
    ioutils::copy_file,
    manifest::Manifest,
    scaffold::operation::CopyOperation,
};
use std::path::Path;

/// Switches for a scaffolding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Log the planned operations without generating or copying anything
    pub dry_run: bool,
    /// Consume the existing template directory as is
    pub skip_generate: bool,
}

/// What a scaffolding run did, or would do on a dry run.
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    /// Configuration handed to the generator
    pub config: PackageTemplateConfig,
    /// Whether the generator was invoked
    pub generated: bool,
    /// Copies in execution order
    pub operations: Vec<CopyOperation>,
}

/// Populates a project directory from its manifest and the template directory.
pub struct Scaffolder<'a> {
    generator: &'a dyn TemplateGenerator,
    options: ScaffoldOptions,
}

impl<'a> Scaffolder<'a> {
    pub fn new(generator: &'a dyn TemplateGenerator, options: ScaffoldOptions) -> Self {
        Self { generator, options }
    }

    /// Runs the whole procedure against `project_root`.
    ///
    /// Every failure is fatal. Files copied before a failing copy stay on disk.
    pub fn scaffold(&self, project_root: &Path) -> Result<ScaffoldReport> {
        let manifest = Manifest::load(project_root)?;
        let config = PackageTemplateConfig::from_manifest(&manifest);
        log::debug!("Package template configuration: {config:?}");

        let template_root = project_root.join(TEMPLATE_DIR);
        let generated = self.generate(&config, &template_root)?;

        let operations = plan_copies(project_root, &template_root);
        for operation in &operations {
            if !self.options.dry_run {
                copy_file(&operation.source, &operation.target)?;
            }
            log::info!("{}", operation.get_message(self.options.dry_run));
        }

        Ok(ScaffoldReport { config, generated, operations })
    }

    fn generate(&self, config: &PackageTemplateConfig, template_root: &Path) -> Result<bool> {
        if self.options.skip_generate {
            log::debug!("Skipping generation, using '{}' as is", template_root.display());
            return Ok(false);
        }
        if self.options.dry_run {
            log::warn!(
                "[DRY RUN] Would generate the skeleton of '{}' in '{}'",
                config.name,
                template_root.display()
            );
            return Ok(false);
        }
        self.generator.generate(config, template_root)?;
        Ok(true)
    }
}

/// The auto-generated stub first, then the boilerplate files in declaration order.
pub fn plan_copies(project_root: &Path, template_root: &Path) -> Vec<CopyOperation> {
    std::iter::once(AUTO_GENERATED_STUB)
        .chain(BOILERPLATE_FILES.iter().copied())
        .map(|relative| {
            CopyOperation::new(template_root.join(relative), project_root.join(relative))
        })
        .collect()
}

/// Scaffolds `project_root` with the skeleton generator and default options.
pub fn scaffold<P: AsRef<Path>>(project_root: P) -> Result<ScaffoldReport> {
    let generator = SkeletonGenerator::new();
    Scaffolder::new(&generator, ScaffoldOptions::default()).scaffold(project_root.as_ref())
}
