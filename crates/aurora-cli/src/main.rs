//! Aurora operator CLI.
//!
//! Inspects the role model and configuration of an Aurora CRM Brasil
//! deployment.
//!
//! # Quick Start
//!
//! ```bash
//! # Which roles exist and how much can they do?
//! aurora roles
//!
//! # May a buyer approve purchase requests?
//! aurora check approve_purchase_requests --role comprador
//!
//! # What does the project configuration resolve to?
//! aurora --project ./deploy config show --format toml
//! ```

mod commands;
mod style;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use aurora_config::{ConfigLoader, LoggingConfig};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::check::Subject;
use commands::config::Format;

/// Aurora - role and permission tooling for the Aurora CRM Brasil dashboard.
#[derive(Parser)]
#[command(name = "aurora")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Directory holding aurora.toml.
    #[arg(short, long, global = true, default_value = ".")]
    project: PathBuf,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// List roles and how many permissions each holds.
    Roles,

    /// List the effective permissions of a role.
    Permissions {
        /// Role identifier (admin, gestor, supervisor, rh, operador, cliente, vendas, comprador).
        role: String,
    },

    /// Evaluate a permission. Exits 0 when granted, 1 when denied, 2 on error.
    Check {
        /// Permission identifier, e.g. view_financials.
        permission: String,

        /// Evaluate for this role instead of the configured session.
        #[arg(short, long, conflicts_with = "anonymous")]
        role: Option<String>,

        /// Evaluate with nobody logged in.
        #[arg(long)]
        anonymous: bool,
    },

    /// Configuration management.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the merged configuration.
    Show {
        /// Output format.
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Validate configuration files.
    Validate,
}

fn init_logging(logging: Option<&LoggingConfig>, no_color: bool) {
    let (level, ansi) = logging.map_or(("info", true), |l| (l.level.as_str(), l.ansi));

    // RUST_LOG wins over logging.level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi && !no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

/// Exit code for configuration and I/O failures, distinct from a denial.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    style::set_no_color(cli.no_color);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let loaded = ConfigLoader::new().with_project_dir(&cli.project).load();
    init_logging(loaded.as_ref().ok().map(|c| &c.logging), cli.no_color);
    debug!(project = %cli.project.display(), loaded = loaded.is_ok(), "Configuration resolved");

    match cli.command {
        Commands::Version => commands::version::run(),
        Commands::Roles => commands::roles::run(&loaded?)?,
        Commands::Permissions { role } => commands::permissions::run(&loaded?, &role)?,
        Commands::Check {
            permission,
            role,
            anonymous,
        } => {
            let subject = match (&role, anonymous) {
                (_, true) => Subject::Anonymous,
                (Some(role), false) => Subject::Role(role),
                (None, false) => Subject::Configured,
            };
            if !commands::check::run(&loaded?, &permission, &subject)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { format } => commands::config::show(&cli.project, format)?,
            ConfigCommands::Validate => commands::config::validate(&cli.project)?,
        },
    }

    Ok(ExitCode::SUCCESS)
}
