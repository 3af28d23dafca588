//! Skeleton generation for toolbox packages
//!
//! - `interface`: the `TemplateGenerator` contract consumed by the scaffolder
//! - `skeleton`: MiniJinja implementation writing the standard skeleton
//! - `externals`: webpack externals, API keys and asset ids derived from the config

pub mod externals;
pub mod interface;
pub mod skeleton;

pub use interface::TemplateGenerator;
pub use skeleton::SkeletonGenerator;

pub fn get_generator() -> Box<dyn TemplateGenerator> {
    Box::new(SkeletonGenerator::new())
}
