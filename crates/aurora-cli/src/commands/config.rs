//! Configuration management commands.

use anyhow::{Context, Result};
use aurora_config::{AuroraConfig, ConfigLoader};
use std::path::Path;

use crate::style::{print_error, print_header, print_hint, print_labeled, print_success};

/// Output format of `config show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
    Toml,
}

/// Show current configuration.
pub fn show(project: &Path, format: Format) -> Result<()> {
    let loader = ConfigLoader::new().with_project_dir(project);
    let config = loader.load().context("Failed to load configuration")?;

    match format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        Format::Toml => {
            let toml_str = toml::to_string_pretty(&config)?;
            println!("{toml_str}");
        }
        Format::Text => print_text(project, &loader, &config),
    }

    Ok(())
}

fn print_text(project: &Path, loader: &ConfigLoader, config: &AuroraConfig) {
    print_header("Aurora Configuration");

    if !loader.has_project_config() {
        print_hint(&format!(
            "no aurora.toml in {}, showing defaults",
            project.display()
        ));
        println!();
    }

    println!("Sources:");
    for path in loader.sources() {
        print_labeled("file", &path.display().to_string());
    }
    print_labeled("env", "AURORA_<SECTION>__<KEY>");
    println!();

    println!("App:");
    print_labeled("Name", &config.app.name);
    print_labeled("Locale", &config.app.locale);
    println!();

    let demo = &config.session.demo_user;
    println!("Session:");
    print_labeled("Auto-login", &config.session.auto_login.to_string());
    print_labeled("Demo user", &format!("{} <{}>", demo.name, demo.email));
    print_labeled("Role", demo.role.as_str());
    print_labeled("Department", demo.department.as_deref().unwrap_or("-"));
    println!();

    println!("Permission overrides:");
    if config.permissions.overrides.is_empty() {
        print_labeled("(none)", "built-in roles");
    }
    for (role, permissions) in &config.permissions.overrides {
        print_labeled(role, &permissions.join(", "));
    }
    println!();

    println!("Logging:");
    print_labeled("Level", &config.logging.level);
    print_labeled("ANSI", &config.logging.ansi.to_string());
}

/// Validate configuration files.
pub fn validate(project: &Path) -> Result<()> {
    println!("Validating configuration in {}...", project.display());

    let result = ConfigLoader::new()
        .with_project_dir(project)
        .load()
        .and_then(|config| config.validate().map_err(anyhow::Error::from));

    match result {
        Ok(()) => {
            print_success("Configuration is valid");
            Ok(())
        }
        Err(e) => {
            print_error("Configuration validation failed:");
            eprintln!("  {e:#}");
            Err(e)
        }
    }
}
