//! Module generator orchestrator
//!
//! Runs one scaffolding pass:
//! 1. Derive every identifier from the module spec
//! 2. Render and materialize the module files and placeholder directories
//! 3. Splice the dependency block into the dependency catalogue
//! 4. Splice the module line into the module registry
//!
//! Steps are not transactional. A failure leaves whatever earlier steps wrote.

use chrono::Local;
use std::path::{Path, PathBuf};

use crate::config::ScaffoldConfig;
use crate::error::Result;
use crate::materialize::{self, WriteOutcome};
use crate::names::{DerivedNames, ModuleSpec};
use crate::splice::{Document, InsertionDirective, SpliceOutcome};
use crate::templates::{ModuleTemplate, TemplateKind, DATE_FORMAT};

/// Scaffolds one module into a project
#[derive(Debug)]
pub struct ModuleGenerator {
    spec: ModuleSpec,
    names: DerivedNames,
    config: ScaffoldConfig,
    project_root: PathBuf,
    date: String,
}

impl ModuleGenerator {
    /// Create a generator
    ///
    /// # Arguments
    ///
    /// * `spec` - Module name and description
    /// * `config` - Layout, Maven and Java settings
    /// * `project_root` - Directory holding the module registry
    ///
    /// # Errors
    ///
    /// Returns [`crate::ScaffoldError::InvalidInput`] if names cannot be
    /// derived or the configuration is unusable. Nothing is written.
    pub fn new(
        spec: ModuleSpec,
        config: ScaffoldConfig,
        project_root: impl Into<PathBuf>,
    ) -> Result<Self> {
        config.validate()?;
        let names = DerivedNames::derive(&spec, &config.java.base_package)?;

        Ok(Self {
            spec,
            names,
            config,
            project_root: project_root.into(),
            date: Local::now().format(DATE_FORMAT).to_string(),
        })
    }

    /// Override the date stamp written into generated sources
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Derived names of the module
    #[must_use]
    pub const fn names(&self) -> &DerivedNames {
        &self.names
    }

    /// Root directory of the new module
    #[must_use]
    pub fn root_dir(&self) -> PathBuf {
        self.project_root.join(&self.names.root_artifact)
    }

    /// Path of the dependency catalogue
    #[must_use]
    pub fn dependency_catalogue(&self) -> PathBuf {
        self.project_root.join(&self.config.layout.dependency_catalogue)
    }

    /// Path of the module registry
    #[must_use]
    pub fn module_registry(&self) -> PathBuf {
        self.project_root.join(&self.config.layout.module_registry)
    }

    /// Build the template renderer for this module
    #[must_use]
    pub fn template(&self) -> ModuleTemplate {
        ModuleTemplate::new(&self.spec, &self.names, &self.config, &self.date)
    }

    /// Run every step
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Template rendering fails
    /// - A file or directory cannot be written
    /// - The dependency catalogue or module registry does not exist
    pub fn generate(&self) -> Result<RunReport> {
        tracing::info!(
            module = %self.names.name,
            root = %self.project_root.display(),
            "scaffolding module"
        );

        let template = self.template();
        let files = self.materialize_files(&template)?;
        let directories = self.materialize_dirs(&template)?;
        let dependencies = self.splice_dependencies(&template)?;
        let registry = self.register_module(&template)?;

        tracing::info!(root_dir = %self.root_dir().display(), "module scaffolded");

        Ok(RunReport {
            root_dir: self.root_dir(),
            files,
            directories,
            dependencies,
            registry,
        })
    }

    fn materialize_files(&self, template: &ModuleTemplate) -> Result<Vec<MaterializedFile>> {
        template
            .render_files()?
            .into_iter()
            .map(|file| -> Result<MaterializedFile> {
                let path = self.project_root.join(&file.relative_path);
                let outcome = materialize::write_if_absent(&path, &file.content)?;
                if outcome == WriteOutcome::Skipped {
                    tracing::info!(path = %path.display(), "keeping existing file");
                }
                Ok(MaterializedFile {
                    kind: file.kind,
                    path,
                    outcome,
                })
            })
            .collect()
    }

    fn materialize_dirs(&self, template: &ModuleTemplate) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();
        for dir in template.placeholder_dirs()? {
            let path = self.project_root.join(dir);
            if materialize::ensure_dir(&path)? {
                created.push(path);
            }
        }
        Ok(created)
    }

    fn splice_dependencies(&self, template: &ModuleTemplate) -> Result<SpliceOutcome> {
        let directive = InsertionDirective::Marker {
            marker: self.config.layout.marker.clone(),
            block: template.dependency_block()?,
        };
        self.splice(&self.dependency_catalogue(), &directive)
    }

    fn register_module(&self, template: &ModuleTemplate) -> Result<SpliceOutcome> {
        let directive = InsertionDirective::Region {
            open_tag: self.config.layout.modules_open.clone(),
            close_tag: self.config.layout.modules_close.clone(),
            line: template.module_line()?,
        };
        self.splice(&self.module_registry(), &directive)
    }

    /// Load, mutate and rewrite one document
    ///
    /// A document that already mentions the module is left alone, and nothing
    /// is written unless lines were actually inserted.
    fn splice(&self, path: &Path, directive: &InsertionDirective) -> Result<SpliceOutcome> {
        let mut document = Document::load(path)?;

        if document.contains(&self.names.root_artifact) {
            tracing::info!(path = %path.display(), "module already referenced");
            return Ok(SpliceOutcome::AlreadyPresent);
        }

        let outcome = document.apply(directive);
        if outcome.is_inserted() {
            document.persist()?;
            tracing::info!(path = %path.display(), ?outcome, "document updated");
        } else {
            tracing::warn!(path = %path.display(), ?outcome, "document left unchanged");
        }

        Ok(outcome)
    }
}

/// One generated file and what happened to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedFile {
    /// Template the file came from
    pub kind: TemplateKind,
    /// Absolute or project-relative path
    pub path: PathBuf,
    /// Whether it was written
    pub outcome: WriteOutcome,
}

/// Summary of a scaffolding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Root directory of the module
    pub root_dir: PathBuf,
    /// Generated files
    pub files: Vec<MaterializedFile>,
    /// Placeholder directories that did not exist before
    pub directories: Vec<PathBuf>,
    /// Dependency catalogue splice
    pub dependencies: SpliceOutcome,
    /// Module registry splice
    pub registry: SpliceOutcome,
}

impl RunReport {
    /// Number of files written in this run
    #[must_use]
    pub fn created(&self) -> usize {
        self.files
            .iter()
            .filter(|file| file.outcome == WriteOutcome::Created)
            .count()
    }

    /// Number of files kept as they were
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.files.len() - self.created()
    }
}
