//! Command dispatch: one function per subcommand

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Command, CommandFactory};
use clap_complete::{generate, Generator};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, CatalogService, IoResultExt};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::{menu, output};
use crate::config::{global_config_path, Settings};
use crate::infrastructure::RealFileSystem;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::List) => _list(cli),
        Some(Commands::Show { course }) => _show(cli, course),
        Some(Commands::Menu) | None => _menu(cli),
        Some(Commands::Config { command }) => _config(command),
        Some(Commands::Completion { shell }) => _completion(*shell),
    }
}

/// Catalog path resolution: flag (or its env var) wins, then settings.
fn resolve_catalog(cli: &Cli) -> CliResult<PathBuf> {
    if let Some(path) = &cli.catalog {
        return Ok(path.clone());
    }
    let settings = Settings::load()?;
    Ok(settings.catalog_path)
}

#[instrument(skip(cli))]
fn _list(cli: &Cli) -> CliResult<()> {
    let path = resolve_catalog(cli)?;
    let service = CatalogService::new(Arc::new(RealFileSystem));
    let loaded = service.load(&path)?;
    debug!(
        "loaded {} courses from {}",
        loaded.report.inserted,
        path.display()
    );

    if loaded.report.duplicates > 0 {
        output::warning(&format!(
            "{} duplicate rows dropped (first entry wins)",
            loaded.report.duplicates
        ));
    }

    output::header("Course List:");
    for course in loaded.catalog.iter() {
        output::info(course);
    }
    Ok(())
}

#[instrument(skip(cli))]
fn _show(cli: &Cli, course: &str) -> CliResult<()> {
    let path = resolve_catalog(cli)?;
    let service = CatalogService::new(Arc::new(RealFileSystem));
    let loaded = service.load(&path)?;

    match loaded.catalog.find(course) {
        Some(found) => {
            output::info(found);
            output::detail(&format!("Prerequisites: {}", found.prerequisites_line()));
            Ok(())
        }
        None => Err(CliError::CourseNotFound(course.to_string())),
    }
}

#[instrument(skip(cli))]
fn _menu(cli: &Cli) -> CliResult<()> {
    let path = resolve_catalog(cli)?;
    let service = CatalogService::new(Arc::new(RealFileSystem));

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&service, &path, &mut stdin.lock(), &mut stdout.lock()).map_err(|e| {
        ApplicationError::OperationFailed {
            context: "interactive session".to_string(),
            source: Box::new(e),
        }
    })?;
    Ok(())
}

fn _config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Init => _config_init(),
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::info(&path.display()),
                None => output::warning("no config directory available"),
            }
            Ok(())
        }
    }
}

fn _config_init() -> CliResult<()> {
    let path = global_config_path().ok_or_else(|| ApplicationError::Config {
        message: "no config directory available".to_string(),
    })?;

    if path.exists() {
        return Err(ApplicationError::Config {
            message: format!("config already exists: {}", path.display()),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_path_context("create config dir", parent)?;
    }
    std::fs::write(&path, Settings::template()).with_path_context("write config", &path)?;

    output::action("Created", &path.display());
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    print_completions(shell, &mut cmd);
    Ok(())
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
