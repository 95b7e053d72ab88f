//! Configuration management for cubo-scaffold
//!
//! The defaults describe the cubo build as it is laid out today, so most runs
//! need no configuration at all. Sources are merged with clear precedence:
//!
//! 1. Environment variables (highest priority, `CUBO_SCAFFOLD_` prefix, `__` for nesting)
//! 2. `<project_root>/cubo-scaffold.toml` (or an explicit file)
//! 3. `~/.config/cubo-scaffold/config.toml` (user config)
//! 4. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # cubo-scaffold.toml
//! [layout]
//! dependency_catalogue = "cubo-boot-dependencies/pom.xml"
//! module_registry = "pom.xml"
//! marker = "<!--mark-->"
//!
//! [maven]
//! group_id = "dev.dong4j"
//! parent_artifact = "cubo-starter"
//!
//! [java]
//! base_package = "dev.dong4j.zeka.starter"
//! property_prefix = "zeka-stack"
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};

/// Location of the shared documents and the markers used to splice them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Dependency catalogue, relative to the project root
    pub dependency_catalogue: PathBuf,

    /// Module registry (the aggregator descriptor), relative to the project root
    pub module_registry: PathBuf,

    /// Line marker after which dependency blocks are inserted
    pub marker: String,

    /// Opening tag of the module list
    pub modules_open: String,

    /// Closing tag of the module list
    pub modules_close: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            dependency_catalogue: PathBuf::from("cubo-boot-dependencies/pom.xml"),
            module_registry: PathBuf::from("pom.xml"),
            marker: "<!--mark-->".to_string(),
            modules_open: "<modules>".to_string(),
            modules_close: "</modules>".to_string(),
        }
    }
}

/// Maven coordinates used by the generated descriptors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MavenSettings {
    /// Group id of every generated artifact
    pub group_id: String,

    /// Parent artifact of the generated root descriptor
    pub parent_artifact: String,

    /// Version expression written into the dependency catalogue
    pub dependency_version: String,
}

impl Default for MavenSettings {
    fn default() -> Self {
        Self {
            group_id: "dev.dong4j".to_string(),
            parent_artifact: "cubo-starter".to_string(),
            dependency_version: "${cubo-boot-dependencies.version}".to_string(),
        }
    }
}

/// Java source settings for the generated stubs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JavaSettings {
    /// Package under which the module package is created
    pub base_package: String,

    /// Prefix of the generated configuration-properties key
    pub property_prefix: String,

    /// Author written into source headers
    pub author: String,
}

impl Default for JavaSettings {
    fn default() -> Self {
        Self {
            base_package: "dev.dong4j.zeka.starter".to_string(),
            property_prefix: "zeka-stack".to_string(),
            author: "dong4j".to_string(),
        }
    }
}

/// Complete cubo-scaffold configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Shared documents and markers
    #[serde(default)]
    pub layout: LayoutSettings,

    /// Maven coordinates
    #[serde(default)]
    pub maven: MavenSettings,

    /// Java source settings
    #[serde(default)]
    pub java: JavaSettings,
}

impl ScaffoldConfig {
    /// Project-local configuration file name
    pub const FILE_NAME: &'static str = "cubo-scaffold.toml";

    /// Environment variable prefix
    pub const ENV_PREFIX: &'static str = "CUBO_SCAFFOLD_";

    /// Load configuration for a project
    ///
    /// Merges the user config from [`ScaffoldConfig::user_config_path`] when
    /// it exists. See [`ScaffoldConfig::load_with`].
    ///
    /// # Errors
    ///
    /// Same as [`ScaffoldConfig::load_with`].
    pub fn load(project_root: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(project_root, Self::user_config_path().as_deref())
    }

    /// Load configuration for a project with an explicit user config file
    ///
    /// `None` skips the user layer entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file cannot be read or parsed
    /// - A marker or tag is configured as an empty string
    pub fn load_with(project_root: impl AsRef<Path>, user_config: Option<&Path>) -> Result<Self> {
        let mut figment = Self::defaults()?;

        if let Some(user_config) = user_config {
            if user_config.exists() {
                figment = figment.merge(Toml::file(user_config));
            }
        }

        let local_config = project_root.as_ref().join(Self::FILE_NAME);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        Self::finish(figment)
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::NotFound`] if `path` does not exist, otherwise
    /// the same errors as [`ScaffoldConfig::load`].
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScaffoldError::NotFound {
                path: path.to_path_buf(),
            });
        }

        Self::finish(Self::defaults()?.merge(Toml::file(path)))
    }

    /// User-level configuration file, if a config directory is known
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cubo-scaffold").join("config.toml"))
    }

    /// Reject settings the splicing engines cannot work with
    ///
    /// An empty marker or tag would match every line.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidInput`] naming the offending setting.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("layout.marker", &self.layout.marker),
            ("layout.modules_open", &self.layout.modules_open),
            ("layout.modules_close", &self.layout.modules_close),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ScaffoldError::InvalidInput(format!(
                    "{key} must not be empty"
                )));
            }
        }

        Ok(())
    }

    /// Serialize the effective configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::ConfigDefaults`] if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    fn defaults() -> Result<Figment> {
        Ok(Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?)))
    }

    fn finish(figment: Figment) -> Result<Self> {
        let config: Self = figment
            .merge(Env::prefixed(Self::ENV_PREFIX).split("__").lowercase(true))
            .extract()?;
        config.validate()?;
        Ok(config)
    }
}
