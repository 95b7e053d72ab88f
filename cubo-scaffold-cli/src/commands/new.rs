//! Module scaffolding command

use anyhow::{Context, Result};
use console::style;
use cubo_scaffold::{
    ModuleGenerator, ModuleSpec, RunReport, ScaffoldConfig, SpliceOutcome, WriteOutcome,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

/// Create a new core / autoconfigure / starter module
pub struct NewCommand {
    generator: ModuleGenerator,
    project_root: PathBuf,
}

impl NewCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `spec` - Validated module name and description
    /// * `project_root` - Directory holding the aggregator `pom.xml`
    /// * `config_file` - Explicit configuration file, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub fn new(
        spec: ModuleSpec,
        project_root: PathBuf,
        config_file: Option<&Path>,
    ) -> Result<Self> {
        let config = match config_file {
            Some(path) => ScaffoldConfig::load_from(path),
            None => ScaffoldConfig::load(&project_root),
        }
        .context("Failed to load configuration")?;
        tracing::debug!(?config, "configuration loaded");

        Self::with_config(spec, project_root, config)
    }

    /// Create a command instance from an already loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_config(
        spec: ModuleSpec,
        project_root: PathBuf,
        config: ScaffoldConfig,
    ) -> Result<Self> {
        let generator = ModuleGenerator::new(spec, config, project_root.clone())
            .context("Failed to prepare module generator")?;

        Ok(Self {
            generator,
            project_root,
        })
    }

    /// Override the date stamp written into generated sources
    #[must_use]
    pub fn with_date(mut self, date: &str) -> Self {
        self.generator = self.generator.with_date(date);
        self
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if any generation step fails. Files written before the
    /// failure are left in place.
    pub fn execute(&self) -> Result<RunReport> {
        println!(
            "{} {} {}",
            style("Creating").green().bold(),
            style("cubo module:").bold(),
            style(&self.generator.names().root_artifact).cyan().bold()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message("Generating module files...");

        let result = self.generator.generate();
        spinner.finish_and_clear();

        let report = result.context("Failed to scaffold module")?;
        self.print_report(&report);

        Ok(report)
    }

    fn relative<'a>(&self, path: &'a Path) -> std::path::Display<'a> {
        path.strip_prefix(&self.project_root)
            .unwrap_or(path)
            .display()
    }

    /// Print what happened and the next steps
    fn print_report(&self, report: &RunReport) {
        for file in &report.files {
            match file.outcome {
                WriteOutcome::Created => println!(
                    "  {} {}",
                    style("✓").green(),
                    style(self.relative(&file.path)).dim()
                ),
                WriteOutcome::Skipped => println!(
                    "  {} {} {}",
                    style("•").yellow(),
                    style(self.relative(&file.path)).dim(),
                    style("(exists, kept)").yellow()
                ),
            }
        }
        println!();

        self.print_splice(&self.generator.dependency_catalogue(), report.dependencies);
        self.print_splice(&self.generator.module_registry(), report.registry);
        println!();

        println!(
            "{} {}",
            style("✓ Module created:").green().bold(),
            style(self.relative(&report.root_dir)).cyan().bold()
        );
        println!(
            "  {} created, {} kept",
            style(report.created()).green(),
            style(report.skipped()).yellow()
        );
        println!();
        println!("{}", style("Next steps:").bold());
        println!("  {} Refresh the Maven project", style("1.").cyan());
        println!(
            "  {} Add code under {}",
            style("2.").cyan(),
            style(self.relative(&report.root_dir)).cyan()
        );
    }

    fn print_splice(&self, document: &Path, outcome: SpliceOutcome) {
        let document = self.relative(document);
        match outcome {
            SpliceOutcome::Inserted { ignored: 0, .. } => {
                println!("  {} updated {}", style("✓").green(), document);
            }
            SpliceOutcome::Inserted { ignored, .. } => println!(
                "  {} updated {} ({} later match(es) left untouched)",
                style("✓").green(),
                document,
                ignored
            ),
            SpliceOutcome::AlreadyPresent => println!(
                "  {} {} already references the module",
                style("•").yellow(),
                document
            ),
            SpliceOutcome::MarkerMissing => println!(
                "  {} {} has no insertion marker, left unchanged",
                style("!").red().bold(),
                document
            ),
            SpliceOutcome::RegionMissing | SpliceOutcome::RegionUnclosed => println!(
                "  {} {} has no complete module list, left unchanged",
                style("!").red().bold(),
                document
            ),
        }
    }
}
