use std::path::PathBuf;

/// One planned file copy from the template directory into the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOperation {
    pub source: PathBuf,
    pub target: PathBuf,
    pub target_exists: bool,
}

impl CopyOperation {
    pub fn new(source: PathBuf, target: PathBuf) -> Self {
        let target_exists = target.exists();
        Self { source, target, target_exists }
    }

    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };
        if self.target_exists {
            format!(
                "{}Copying '{}' to '{}' (overwriting existing file)",
                prefix,
                self.source.display(),
                self.target.display()
            )
        } else {
            format!(
                "{}Copying '{}' to '{}'",
                prefix,
                self.source.display(),
                self.target.display()
            )
        }
    }
}
