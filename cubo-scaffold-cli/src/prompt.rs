//! Interactive collection of the module spec

use anyhow::{bail, Context, Result};
use cubo_scaffold::names::is_valid_module_name;
use cubo_scaffold::ModuleSpec;
use dialoguer::{theme::ColorfulTheme, Input};

/// Build a [`ModuleSpec`] from arguments, prompting for whatever is missing
///
/// Prompts only appear when a user is attached to the terminal. Without one a
/// missing name is an error and a missing description falls back to the
/// default.
///
/// # Errors
///
/// Returns an error if the name is missing in a non-interactive session, a
/// prompt fails, or the name is invalid.
pub fn module_spec(name: Option<String>, description: Option<String>) -> Result<ModuleSpec> {
    let interactive = console::user_attended();

    let name = match name {
        Some(name) => name,
        None if interactive => prompt_name()?,
        None => bail!("A module name is required when not running interactively"),
    };

    let description = match description {
        Some(description) => description,
        None if interactive => prompt_description(&name)?,
        None => String::new(),
    };

    Ok(ModuleSpec::new(name, description)?)
}

fn prompt_name() -> Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Module name (e.g. launcher)")
        .validate_with(|input: &String| -> Result<(), String> {
            if is_valid_module_name(input.trim()) {
                Ok(())
            } else {
                Err("Use letters and digits only, starting with a letter".to_string())
            }
        })
        .interact_text()
        .context("Failed to read module name")
}

fn prompt_description(name: &str) -> Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Module description")
        .default(format!("Cubo {name} module"))
        .interact_text()
        .context("Failed to read module description")
}
