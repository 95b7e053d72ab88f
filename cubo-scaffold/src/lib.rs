//! Module scaffolding engine for the cubo multi-module build
//!
//! `cubo-scaffold` creates a three-tier module (core / autoconfigure / starter)
//! next to the existing `cubo-*-spring-boot` modules and registers it in the two
//! shared descriptors of the build:
//!
//! - **Names**: every identifier is derived once from a single raw name
//! - **Templates**: descriptor and source stubs rendered with Handlebars
//! - **Materializer**: first-write-wins file creation
//! - **Splicing**: line-oriented insertion into existing documents, no XML parse
//!
//! # Example
//!
//! ```rust,no_run
//! use cubo_scaffold::{ModuleGenerator, ModuleSpec, ScaffoldConfig};
//!
//! # fn example() -> cubo_scaffold::Result<()> {
//! let spec = ModuleSpec::new("launcher", "Launcher Spring Boot Starter")?;
//! let config = ScaffoldConfig::load(".")?;
//! let report = ModuleGenerator::new(spec, config, ".")?.generate()?;
//! println!("created {}", report.root_dir.display());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod generator;
pub mod materialize;
pub mod names;
pub mod observability;
pub mod splice;
pub mod templates;

pub use config::ScaffoldConfig;
pub use error::{Result, ScaffoldError};
pub use generator::{MaterializedFile, ModuleGenerator, RunReport};
pub use materialize::WriteOutcome;
pub use names::{DerivedNames, ModuleSpec, Tier};
pub use splice::{Document, InsertionDirective, SpliceOutcome};
pub use templates::{FileTemplate, ModuleTemplate, TemplateKind};
