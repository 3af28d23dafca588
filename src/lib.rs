/// Handles argument parsing and the CLI run.
pub mod cli;

/// Fixed dependency tables, file lists and exit codes.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Package template configuration built from the manifest.
pub mod config;

/// Skeleton generation into the template directory.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Package manifest loading.
pub mod manifest;

/// The scaffolding procedure.
pub mod scaffold;

pub use scaffold::scaffold;
