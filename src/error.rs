use crate::constants::exit_codes;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to serialize JSON. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Cannot proceed: manifest '{path}' does not exist.")]
    ManifestNotFound { path: String },

    #[error("Cannot parse manifest '{path}': {reason}.")]
    ManifestMalformed { path: String, reason: String },

    #[error("Manifest is missing the required field '{field}'.")]
    ManifestMissingField { field: String },

    /// The generator could not materialize the skeleton for `package`.
    #[error("Template generation failed for package '{package}': {reason}")]
    GenerationFailed { package: String, reason: String },

    /// A stub or boilerplate file could not be copied from `path` to `target`.
    #[error("Failed to copy '{path}' to '{target}'. Original error: {source}")]
    CopyFailed {
        path: String,
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration validation failed: {0}")]
    ConfigValidation(String),
}

/// Convenience type alias for Results with the crate error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
