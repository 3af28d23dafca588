use crate::config::PackageTemplateConfig;
use crate::error::Result;
use std::path::Path;

/// Materializes a project skeleton from a package template configuration.
pub trait TemplateGenerator {
    /// Writes the skeleton for `config` into `target_dir`.
    ///
    /// # Arguments
    /// * `config` - Package description to generate for
    /// * `target_dir` - Directory receiving the skeleton, created if missing
    ///
    /// # Returns
    /// * `Result<()>` - `GenerationFailed` on any failure
    ///
    /// Implementations must be deterministic and must not write outside `target_dir`.
    fn generate(&self, config: &PackageTemplateConfig, target_dir: &Path) -> Result<()>;
}
