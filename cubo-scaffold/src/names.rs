//! Module naming
//!
//! One raw name (e.g. `launcher`) drives every identifier in a generated module:
//! directory and artifact names, the Java package and class-name prefixes. All of
//! them are computed here so templates never derive names on their own.

use serde::Serialize;

use crate::error::{Result, ScaffoldError};

/// User-supplied description of the module to create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSpec {
    raw_name: String,
    description: String,
}

impl ModuleSpec {
    /// Create a validated module spec
    ///
    /// Both values are trimmed. An empty description falls back to
    /// `Cubo <name> module`.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidInput`] if the name is empty or is not a
    /// valid module name (see [`is_valid_module_name`]).
    pub fn new(raw_name: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        let raw_name = raw_name.into().trim().to_string();
        if raw_name.is_empty() {
            return Err(ScaffoldError::InvalidInput(
                "module name must not be empty".to_string(),
            ));
        }
        if !is_valid_module_name(&raw_name) {
            return Err(ScaffoldError::InvalidInput(format!(
                "invalid module name: {raw_name}. Must start with a letter and contain only ASCII letters and digits"
            )));
        }

        let description = description.into().trim().to_string();
        let description = if description.is_empty() {
            format!("Cubo {raw_name} module")
        } else {
            description
        };

        Ok(Self {
            raw_name,
            description,
        })
    }

    /// Raw module name, used verbatim in paths and identifiers
    #[must_use]
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// Human-readable description
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Validate that a string can be used as a module name
///
/// The name ends up as a path segment, a Java package segment and a class-name
/// prefix, so only `[A-Za-z][A-Za-z0-9]*` is accepted.
#[must_use]
pub fn is_valid_module_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Upper-case the first character of `raw`, leaving the rest untouched
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidInput`] for an empty string.
///
/// # Examples
///
/// ```
/// # use cubo_scaffold::names::capitalize;
/// assert_eq!(capitalize("launcher").unwrap(), "Launcher");
/// assert_eq!(capitalize("logSystem").unwrap(), "LogSystem");
/// assert!(capitalize("").is_err());
/// ```
pub fn capitalize(raw: &str) -> Result<String> {
    let mut chars = raw.chars();
    let first = chars.next().ok_or_else(|| {
        ScaffoldError::InvalidInput("cannot capitalize an empty name".to_string())
    })?;

    Ok(first.to_uppercase().chain(chars).collect())
}

/// Submodule tier of a generated module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Plain library code
    Core,
    /// Spring Boot auto-configuration
    Autoconfigure,
    /// Dependency-only starter
    Starter,
}

impl Tier {
    /// All tiers, in build order
    pub const ALL: [Self; 3] = [Self::Core, Self::Autoconfigure, Self::Starter];

    /// Artifact suffix of the tier
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Autoconfigure => "autoconfigure",
            Self::Starter => "starter",
        }
    }
}

/// Every identifier derived from a [`ModuleSpec`]
///
/// Flattened as-is into the template context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedNames {
    /// Raw name (`launcher`)
    pub name: String,
    /// Capitalized name (`Launcher`)
    pub capitalized: String,
    /// Root directory and parent artifact (`cubo-launcher-spring-boot`)
    pub root_artifact: String,
    /// `cubo-launcher-spring-boot-core`
    pub core_artifact: String,
    /// `cubo-launcher-spring-boot-autoconfigure`
    pub autoconfigure_artifact: String,
    /// `cubo-launcher-spring-boot-starter`
    pub starter_artifact: String,
    /// Java package (`dev.dong4j.zeka.starter.launcher`)
    pub package: String,
    /// Java package as a relative path (`dev/dong4j/zeka/starter/launcher`)
    pub package_path: String,
}

impl DerivedNames {
    /// Derive all names for `spec`, rooted at `base_package`
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidInput`] if the raw name is empty.
    pub fn derive(spec: &ModuleSpec, base_package: &str) -> Result<Self> {
        let name = spec.raw_name().to_string();
        let capitalized = capitalize(&name)?;
        let root_artifact = format!("cubo-{name}-spring-boot");

        let package = if base_package.is_empty() {
            name.clone()
        } else {
            format!("{base_package}.{name}")
        };
        let package_path = package.replace('.', "/");

        Ok(Self {
            core_artifact: tier_artifact(&root_artifact, Tier::Core),
            autoconfigure_artifact: tier_artifact(&root_artifact, Tier::Autoconfigure),
            starter_artifact: tier_artifact(&root_artifact, Tier::Starter),
            name,
            capitalized,
            root_artifact,
            package,
            package_path,
        })
    }

    /// Artifact id of one tier
    #[must_use]
    pub fn artifact(&self, tier: Tier) -> &str {
        match tier {
            Tier::Core => &self.core_artifact,
            Tier::Autoconfigure => &self.autoconfigure_artifact,
            Tier::Starter => &self.starter_artifact,
        }
    }
}

fn tier_artifact(root_artifact: &str, tier: Tier) -> String {
    format!("{root_artifact}-{}", tier.suffix())
}
