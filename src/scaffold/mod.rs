//! The scaffolding procedure
//!
//! - `operation`: file copies planned from the template directory
//! - `scaffolder`: manifest -> config -> generator -> copies

pub mod operation;
pub mod scaffolder;

pub use operation::CopyOperation;
pub use scaffolder::{scaffold, ScaffoldOptions, ScaffoldReport, Scaffolder};
