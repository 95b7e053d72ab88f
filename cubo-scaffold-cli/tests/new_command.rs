//! Integration tests for the `new` command

use cubo_scaffold::{ModuleSpec, ScaffoldConfig, SpliceOutcome};
use cubo_scaffold_cli_lib::NewCommand;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let deps = temp_dir.path().join("cubo-boot-dependencies");
    fs::create_dir_all(&deps).unwrap();
    fs::write(
        deps.join("pom.xml"),
        "<dependencies>\n    <!--mark-->\n</dependencies>\n",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("pom.xml"),
        "<project>\n    <modules>\n    </modules>\n</project>\n",
    )
    .unwrap();
    temp_dir
}

/// Build the command from the project file only, ignoring any user config
fn command(root: &Path, spec: ModuleSpec) -> NewCommand {
    let config = ScaffoldConfig::load_with(root, None).unwrap();
    NewCommand::with_config(spec, root.to_path_buf(), config).unwrap()
}

/// Test that a full run creates the module and updates both documents
#[test]
fn test_new_module() {
    let project = project();
    let spec = ModuleSpec::new("launcher", "Launcher Spring Boot Starter").unwrap();

    let report = command(project.path(), spec)
        .with_date("2025.01.01 12:00")
        .execute()
        .unwrap();

    assert_eq!(report.created(), 7);
    assert!(report.dependencies.is_inserted());
    assert!(report.registry.is_inserted());

    let registry = fs::read_to_string(project.path().join("pom.xml")).unwrap();
    assert!(registry.contains(
        "    <modules>\n        <module>cubo-launcher-spring-boot</module>\n    </modules>"
    ));

    let properties = fs::read_to_string(project.path().join(
        "cubo-launcher-spring-boot/cubo-launcher-spring-boot-autoconfigure/src/main/java/dev/dong4j/zeka/starter/launcher/autoconfigure/LauncherProperties.java",
    ))
    .unwrap();
    assert!(properties.contains("@date 2025.01.01 12:00"));
    assert!(properties.contains("package dev.dong4j.zeka.starter.launcher.autoconfigure;"));
}

/// Test that a user config file outside the project is not consulted
#[test]
fn test_user_config_is_not_read_without_a_path() {
    let project = project();
    let user_dir = TempDir::new().unwrap();
    let user_config = user_dir.path().join("config.toml");
    fs::write(&user_config, "[java]\nbase_package = \"org.elsewhere\"\n").unwrap();

    let isolated = ScaffoldConfig::load_with(project.path(), None).unwrap();
    let layered =
        ScaffoldConfig::load_with(project.path(), Some(user_config.as_path())).unwrap();

    assert_eq!(isolated.java.base_package, "dev.dong4j.zeka.starter");
    assert_eq!(layered.java.base_package, "org.elsewhere");
}

/// Test that a project-local config file is honoured
#[test]
fn test_project_config_file() {
    let project = project();
    fs::write(
        project.path().join("cubo-scaffold.toml"),
        "[java]\nbase_package = \"com.example.starter\"\nproperty_prefix = \"example\"\n",
    )
    .unwrap();
    let spec = ModuleSpec::new("dict", "").unwrap();

    let report = command(project.path(), spec).execute().unwrap();

    let properties = report
        .files
        .iter()
        .find(|f| f.path.ends_with("DictProperties.java"))
        .unwrap();
    assert!(properties
        .path
        .to_string_lossy()
        .contains("com/example/starter/dict/autoconfigure"));
    let content = fs::read_to_string(&properties.path).unwrap();
    assert!(content.contains("PREFIX = \"example.dict\";"));
    assert!(content.contains("Cubo dict module"));
}

/// Test that running twice changes nothing the second time
#[test]
fn test_second_run_keeps_everything() {
    let project = project();
    let run = || {
        let spec = ModuleSpec::new("launcher", "").unwrap();
        command(project.path(), spec).execute().unwrap()
    };

    run();
    let registry = fs::read_to_string(project.path().join("pom.xml")).unwrap();
    let report = run();

    assert_eq!(report.created(), 0);
    assert_eq!(report.registry, SpliceOutcome::AlreadyPresent);
    assert_eq!(
        fs::read_to_string(project.path().join("pom.xml")).unwrap(),
        registry
    );
}
