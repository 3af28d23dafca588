use crate::{
    cli::Args,
    error::Result,
    generator::get_generator,
    scaffold::{ScaffoldOptions, ScaffoldReport, Scaffolder},
};

/// Main CLI runner driving a scaffolding run from parsed arguments
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub fn run(self) -> Result<ScaffoldReport> {
        let generator = get_generator();
        let options = ScaffoldOptions {
            dry_run: self.args.dry_run,
            skip_generate: self.args.skip_generate,
        };

        let report =
            Scaffolder::new(generator.as_ref(), options).scaffold(&self.args.project_root)?;

        if self.args.dry_run {
            println!(
                "Dry run completed: {} file(s) would be copied into {}.",
                report.operations.len(),
                self.args.project_root.display()
            );
        } else {
            println!(
                "Scaffolding of '{}' completed successfully in {}.",
                report.config.name,
                self.args.project_root.display()
            );
        }
        Ok(report)
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<ScaffoldReport> {
    Runner::new(args).run()
}
