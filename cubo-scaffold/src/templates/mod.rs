//! Module template rendering
//!
//! Every template, including the file paths, is rendered against one context
//! built from [`DerivedNames`] and the configuration, so a name can never be
//! spelled two different ways within a run.

use handlebars::Handlebars;
use serde::Serialize;
use std::path::PathBuf;

use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::names::{DerivedNames, ModuleSpec};

pub mod files;
pub use files::*;

/// Date format written into generated source headers
pub const DATE_FORMAT: &str = "%Y.%m.%d %H:%M";

/// Directories created empty inside a new module
pub const PLACEHOLDER_DIRS: &[&str] = &[
    "{{root_artifact}}/{{core_artifact}}/src/main/java/{{package_path}}",
    "{{root_artifact}}/{{core_artifact}}/src/main/resources",
    "{{root_artifact}}/{{core_artifact}}/src/test/resources",
];

/// Kind of generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Root descriptor aggregating the three tiers
    RootDescriptor,
    /// Core tier descriptor
    CoreDescriptor,
    /// Autoconfigure tier descriptor
    AutoconfigureDescriptor,
    /// Starter tier descriptor
    StarterDescriptor,
    /// Auto-configuration registration stub
    AutoConfiguration,
    /// Configuration-properties holder stub
    Properties,
    /// Auto-configuration smoke test
    AutoConfigurationTest,
}

impl TemplateKind {
    /// All kinds, in generation order
    pub const ALL: [Self; 7] = [
        Self::RootDescriptor,
        Self::CoreDescriptor,
        Self::AutoconfigureDescriptor,
        Self::StarterDescriptor,
        Self::AutoConfiguration,
        Self::Properties,
        Self::AutoConfigurationTest,
    ];

    /// Template of the path, relative to the project root
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::RootDescriptor => "{{root_artifact}}/pom.xml",
            Self::CoreDescriptor => "{{root_artifact}}/{{core_artifact}}/pom.xml",
            Self::AutoconfigureDescriptor => "{{root_artifact}}/{{autoconfigure_artifact}}/pom.xml",
            Self::StarterDescriptor => "{{root_artifact}}/{{starter_artifact}}/pom.xml",
            Self::AutoConfiguration => "{{root_artifact}}/{{autoconfigure_artifact}}/src/main/java/{{package_path}}/autoconfigure/{{capitalized}}AutoConfiguration.java",
            Self::Properties => "{{root_artifact}}/{{autoconfigure_artifact}}/src/main/java/{{package_path}}/autoconfigure/{{capitalized}}Properties.java",
            Self::AutoConfigurationTest => "{{root_artifact}}/{{autoconfigure_artifact}}/src/test/java/{{package_path}}/autoconfigure/{{capitalized}}AutoConfigurationTest.java",
        }
    }

    /// Template of the content
    #[must_use]
    pub const fn source(self) -> &'static str {
        match self {
            Self::RootDescriptor => ROOT_POM,
            Self::CoreDescriptor => CORE_POM,
            Self::AutoconfigureDescriptor => AUTOCONFIGURE_POM,
            Self::StarterDescriptor => STARTER_POM,
            Self::AutoConfiguration => AUTO_CONFIGURATION_JAVA,
            Self::Properties => PROPERTIES_JAVA,
            Self::AutoConfigurationTest => AUTO_CONFIGURATION_TEST_JAVA,
        }
    }

    /// Short description for user feedback
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::RootDescriptor => "root descriptor",
            Self::CoreDescriptor => "core descriptor",
            Self::AutoconfigureDescriptor => "autoconfigure descriptor",
            Self::StarterDescriptor => "starter descriptor",
            Self::AutoConfiguration => "auto-configuration class",
            Self::Properties => "properties class",
            Self::AutoConfigurationTest => "auto-configuration test",
        }
    }
}

/// A rendered file, not yet written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTemplate {
    /// What was rendered
    pub kind: TemplateKind,
    /// Path relative to the project root
    pub relative_path: PathBuf,
    /// Rendered content
    pub content: String,
}

/// Values every template can reference
///
/// The derived names are flattened in, so templates use `{{root_artifact}}`
/// rather than `{{names.root_artifact}}`.
#[derive(Debug, Clone, Serialize)]
struct RenderContext {
    #[serde(flatten)]
    names: DerivedNames,
    description: String,
    date: String,
    group_id: String,
    parent_artifact: String,
    dependency_version: String,
    base_package: String,
    property_prefix: String,
    author: String,
}

/// Renders every template of one module
pub struct ModuleTemplate {
    handlebars: Handlebars<'static>,
    context: RenderContext,
}

impl ModuleTemplate {
    /// Build the template context for a module
    ///
    /// `date` is written verbatim into source headers (see [`DATE_FORMAT`]).
    #[must_use]
    pub fn new(
        spec: &ModuleSpec,
        names: &DerivedNames,
        config: &ScaffoldConfig,
        date: &str,
    ) -> Self {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);
        // Unknown placeholders must fail instead of rendering as ""
        handlebars.set_strict_mode(true);

        let context = RenderContext {
            names: names.clone(),
            description: spec.description().to_string(),
            date: date.to_string(),
            group_id: config.maven.group_id.clone(),
            parent_artifact: config.maven.parent_artifact.clone(),
            dependency_version: config.maven.dependency_version.clone(),
            base_package: config.java.base_package.clone(),
            property_prefix: config.java.property_prefix.clone(),
            author: config.java.author.clone(),
        };

        Self {
            handlebars,
            context,
        }
    }

    /// Render one file
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Render`] if the path or content fails to render.
    pub fn render_file(&self, kind: TemplateKind) -> Result<FileTemplate> {
        let label = kind.description();
        Ok(FileTemplate {
            kind,
            relative_path: PathBuf::from(self.render(label, kind.path())?),
            content: self.render(label, kind.source())?,
        })
    }

    /// Render every file of the module
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Render`] on the first template that fails.
    pub fn render_files(&self) -> Result<Vec<FileTemplate>> {
        TemplateKind::ALL
            .iter()
            .map(|&kind| self.render_file(kind))
            .collect()
    }

    /// Placeholder directories, relative to the project root
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Render`] if a path fails to render.
    pub fn placeholder_dirs(&self) -> Result<Vec<PathBuf>> {
        PLACEHOLDER_DIRS
            .iter()
            .map(|dir| self.render("placeholder directory", dir).map(PathBuf::from))
            .collect()
    }

    /// Block inserted into the dependency catalogue
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Render`] if the block fails to render.
    pub fn dependency_block(&self) -> Result<String> {
        self.render("dependency block", DEPENDENCY_BLOCK)
    }

    /// Line inserted into the module registry
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Render`] if the line fails to render.
    pub fn module_line(&self) -> Result<String> {
        self.render("module line", MODULE_LINE)
    }

    fn render(&self, label: &str, template: &str) -> Result<String> {
        self.handlebars
            .render_template(template, &self.context)
            .map_err(|source| ScaffoldError::Render {
                template: label.to_string(),
                source: Box::new(source),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launcher() -> ModuleTemplate {
        let config = ScaffoldConfig::default();
        let spec = ModuleSpec::new("launcher", "Launcher Spring Boot Starter").unwrap();
        let names = DerivedNames::derive(&spec, &config.java.base_package).unwrap();
        ModuleTemplate::new(&spec, &names, &config, "2025.01.01 12:00")
    }

    fn rendered(kind: TemplateKind) -> FileTemplate {
        launcher().render_file(kind).unwrap()
    }

    #[test]
    fn test_root_descriptor() {
        let file = rendered(TemplateKind::RootDescriptor);
        assert_eq!(file.relative_path, PathBuf::from("cubo-launcher-spring-boot/pom.xml"));
        assert!(file.content.contains("<artifactId>cubo-starter</artifactId>"));
        assert!(file.content.contains("<artifactId>cubo-launcher-spring-boot</artifactId>"));
        assert!(file.content.contains("<name>Cubo Launcher Spring Boot</name>"));
        assert!(file.content.contains("<description>Launcher Spring Boot Starter</description>"));
        assert!(file.content.contains("<module>cubo-launcher-spring-boot-core</module>"));
        assert!(file.content.contains("<module>cubo-launcher-spring-boot-autoconfigure</module>"));
        assert!(file.content.contains("<module>cubo-launcher-spring-boot-starter</module>"));
        assert!(file.content.contains("<version>${revision}</version>"));
    }

    #[test]
    fn test_submodule_descriptors_point_at_root() {
        for kind in [
            TemplateKind::CoreDescriptor,
            TemplateKind::AutoconfigureDescriptor,
            TemplateKind::StarterDescriptor,
        ] {
            let file = rendered(kind);
            assert!(file.content.contains(
                "<groupId>dev.dong4j</groupId>\n        <artifactId>cubo-launcher-spring-boot</artifactId>"
            ));
            assert!(file.relative_path.ends_with("pom.xml"));
        }

        let autoconfigure = rendered(TemplateKind::AutoconfigureDescriptor);
        assert!(autoconfigure.content.contains("<optional>true</optional>"));
        assert!(autoconfigure
            .content
            .contains("<name>Cubo Launcher Spring Boot Autoconfigure</name>"));
    }

    #[test]
    fn test_java_sources() {
        let auto = rendered(TemplateKind::AutoConfiguration);
        assert_eq!(
            auto.relative_path,
            PathBuf::from(
                "cubo-launcher-spring-boot/cubo-launcher-spring-boot-autoconfigure/src/main/java/dev/dong4j/zeka/starter/launcher/autoconfigure/LauncherAutoConfiguration.java"
            )
        );
        assert!(auto
            .content
            .starts_with("package dev.dong4j.zeka.starter.launcher.autoconfigure;"));
        assert!(auto.content.contains("public class LauncherAutoConfiguration implements ZekaAutoConfiguration {"));
        assert!(auto.content.contains("@EnableConfigurationProperties(LauncherProperties.class)"));
        assert!(auto.content.contains("@date 2025.01.01 12:00"));

        let props = rendered(TemplateKind::Properties);
        assert!(props.relative_path.ends_with("LauncherProperties.java"));
        assert!(props.content.contains("public class LauncherProperties {"));
        assert!(props.content.contains("PREFIX = \"zeka-stack.launcher\";"));
    }

    #[test]
    fn test_auto_configuration_uses_enable_switch() {
        let auto = rendered(TemplateKind::AutoConfiguration);
        assert!(auto.content.contains("name = ZekaProperties.ENABLE,"));
        assert!(!auto.content.contains("ZekaProperties.ENABLED"));
    }

    #[test]
    fn test_auto_configuration_test_stub() {
        let file = rendered(TemplateKind::AutoConfigurationTest);
        assert_eq!(
            file.relative_path,
            PathBuf::from(
                "cubo-launcher-spring-boot/cubo-launcher-spring-boot-autoconfigure/src/test/java/dev/dong4j/zeka/starter/launcher/autoconfigure/LauncherAutoConfigurationTest.java"
            )
        );
        assert!(file
            .content
            .starts_with("package dev.dong4j.zeka.starter.launcher.autoconfigure;"));
        assert!(file.content.contains("@ZekaTest(classes = LauncherAutoConfiguration.class)"));
        assert!(file.content.contains("class LauncherAutoConfigurationTest {"));
        assert!(file.content.contains("@date 2025.01.01 12:00"));
    }

    #[test]
    fn test_no_placeholder_survives() {
        for file in launcher().render_files().unwrap() {
            assert!(!file.content.contains("{{"), "{:?}", file.kind);
            assert!(!file.relative_path.to_string_lossy().contains("{{"));
        }
    }

    #[test]
    fn test_dependency_block() {
        let block = launcher().dependency_block().unwrap();
        let lines: Vec<_> = block.lines().collect();

        assert_eq!(lines.first().unwrap().trim(), "<!--region launcher -->");
        assert_eq!(lines.last().unwrap().trim(), "<!--endregion-->");
        assert_eq!(block.matches("<dependency>").count(), 3);
        assert!(block.contains("<version>${cubo-boot-dependencies.version}</version>"));
    }

    #[test]
    fn test_module_line() {
        assert_eq!(
            launcher().module_line().unwrap(),
            "        <module>cubo-launcher-spring-boot</module>"
        );
    }

    #[test]
    fn test_placeholder_dirs() {
        let dirs = launcher().placeholder_dirs().unwrap();
        assert_eq!(dirs.len(), 3);
        assert_eq!(
            dirs[0],
            PathBuf::from(
                "cubo-launcher-spring-boot/cubo-launcher-spring-boot-core/src/main/java/dev/dong4j/zeka/starter/launcher"
            )
        );
    }

    #[test]
    fn test_context_flattens_derived_names() {
        let context = serde_json::to_value(&launcher().context).unwrap();
        assert_eq!(context["root_artifact"], "cubo-launcher-spring-boot");
        assert_eq!(context["package_path"], "dev/dong4j/zeka/starter/launcher");
        assert_eq!(context["base_package"], "dev.dong4j.zeka.starter");
        assert_eq!(context["date"], "2025.01.01 12:00");
        assert!(context.get("names").is_none());
    }

    #[test]
    fn test_strict_mode_rejects_unknown_placeholder() {
        let err = launcher().render("broken", "{{nope}}").unwrap_err();
        assert!(matches!(err, ScaffoldError::Render { ref template, .. } if template == "broken"));
    }
}
