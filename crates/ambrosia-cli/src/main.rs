//! Ambrosia CLI - browse and edit a recipe collection from the terminal

mod cli;
mod commands;
mod error;
#[cfg(test)]
mod tests;

use std::env;
use std::path::PathBuf;

use ambrosia_core::storage::{
    JsonSettingsStore, SettingsStore, DEFAULT_RECIPE_FOLDER, DEFAULT_SETTINGS_FILE,
};
use ambrosia_core::util::normalize_text_option;
use ambrosia_core::Settings;
use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::appearance::run_appearance;
use crate::commands::check::run_check;
use crate::commands::completions::run_completions;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::export::run_export;
use crate::commands::list::run_list;
use crate::commands::search::run_search;
use crate::commands::show::run_show;
use crate::commands::tags::run_tags;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ambrosia=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let recipes_dir = resolve_recipes_dir(cli.recipes_dir);
    let settings_store = JsonSettingsStore::new(
        resolve_settings_path(cli.settings),
        Settings::default(),
    );
    tracing::debug!(
        recipes_dir = %recipes_dir.display(),
        settings = %settings_store.path().display(),
        "Resolved paths"
    );
    let loaded_settings = settings_store.load();
    let mut settings = loaded_settings.clone();

    match cli.command {
        Some(Commands::List { tags, json }) => run_list(&tags, json, &recipes_dir)?,
        Some(Commands::Search { query, tags, json }) => {
            run_search(&query, &tags, json, &recipes_dir)?;
        }
        Some(Commands::Show { recipe }) => run_show(&recipe, &recipes_dir)?,
        Some(Commands::Add { fields, force }) => {
            run_add(&fields, force, &settings, &recipes_dir)?;
        }
        Some(Commands::Edit { recipe, fields }) => run_edit(&recipe, &fields, &recipes_dir)?,
        Some(Commands::Delete { recipe }) => run_delete(&recipe, &recipes_dir)?,
        Some(Commands::Check) => run_check(&recipes_dir)?,
        Some(Commands::Tags) => run_tags(&settings, &recipes_dir)?,
        Some(Commands::Appearance { command }) => run_appearance(command, &mut settings),
        Some(Commands::Export { format, output }) => {
            run_export(format, output.as_deref(), &recipes_dir)?;
        }
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        None => {
            Cli::command().print_help().map_err(CliError::Io)?;
            println!();
        }
    }

    if settings != loaded_settings {
        settings_store.save(&settings);
    }

    Ok(())
}

fn resolve_recipes_dir(cli_recipes_dir: Option<PathBuf>) -> PathBuf {
    cli_recipes_dir
        .or_else(|| env_path("AMBROSIA_RECIPES_DIR"))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RECIPE_FOLDER))
}

fn resolve_settings_path(cli_settings: Option<PathBuf>) -> PathBuf {
    cli_settings
        .or_else(|| env_path("AMBROSIA_SETTINGS"))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
}

fn env_path(key: &str) -> Option<PathBuf> {
    normalize_text_option(env::var(key).ok()).map(PathBuf::from)
}
