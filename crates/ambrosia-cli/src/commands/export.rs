use std::path::Path;

use ambrosia_core::export::{render_recipes_export, suggested_export_file_name};
use chrono::Utc;

use crate::cli::ExportFormat;
use crate::commands::common::load_recipes;
use crate::error::CliError;

pub fn run_export(
    format: ExportFormat,
    output_path: Option<&Path>,
    recipes_dir: &Path,
) -> Result<(), CliError> {
    let recipes = load_recipes(recipes_dir)?;
    let format: ambrosia_core::export::ExportFormat = format.into();
    let rendered = render_recipes_export(&recipes, format)?;

    if let Some(path) = output_path {
        let path = if path.is_dir() {
            path.join(suggested_export_file_name(
                format,
                Utc::now().timestamp_millis(),
            ))
        } else {
            path.to_path_buf()
        };
        std::fs::write(&path, rendered)?;
        println!("{}", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}

impl From<ExportFormat> for ambrosia_core::export::ExportFormat {
    fn from(value: ExportFormat) -> Self {
        match value {
            ExportFormat::Json => Self::Json,
            ExportFormat::Markdown => Self::Markdown,
        }
    }
}
