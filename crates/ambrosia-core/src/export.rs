//! Recipe collection export for backups and sharing.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::Recipe;

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

/// Serializable recipe representation used in JSON and Markdown exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecipe {
    pub file: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub is_valid: bool,
}

/// Convert a recipe into an export record with stable tag ordering.
#[must_use]
pub fn recipe_to_export_item(recipe: &Recipe) -> ExportRecipe {
    let mut tags = recipe.tags.clone();
    tags.sort();
    tags.dedup();

    ExportRecipe {
        file: recipe.file_label(),
        title: recipe.title.clone(),
        description: recipe.description.clone(),
        tags,
        ingredients: recipe.ingredients.clone(),
        steps: recipe.steps.clone(),
        is_valid: recipe.is_valid,
    }
}

/// Render recipes as pretty-printed JSON.
pub fn render_json_export(recipes: &[Recipe]) -> serde_json::Result<String> {
    let items = recipes
        .iter()
        .map(recipe_to_export_item)
        .collect::<Vec<ExportRecipe>>();
    serde_json::to_string_pretty(&items)
}

/// Render recipes as Markdown, one section per recipe.
#[must_use]
pub fn render_markdown_export(recipes: &[Recipe]) -> String {
    let mut output = String::new();

    for (index, recipe) in recipes.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }

        let item = recipe_to_export_item(recipe);
        let _ = writeln!(output, "## {}", item.title);
        let _ = writeln!(output);
        let _ = writeln!(output, "{}", item.description);
        let _ = writeln!(output);
        if !item.tags.is_empty() {
            let _ = writeln!(output, "Tags: {}", item.tags.join(", "));
            let _ = writeln!(output);
        }
        let _ = writeln!(output, "### Ingredients");
        let _ = writeln!(output);
        for ingredient in &item.ingredients {
            let _ = writeln!(output, "- {}", ingredient.replace('_', " "));
        }
        let _ = writeln!(output);
        let _ = writeln!(output, "### Steps");
        let _ = writeln!(output);
        for step in &item.steps {
            let _ = writeln!(output, "{step}");
        }
    }

    output
}

/// Render recipes based on selected export format.
pub fn render_recipes_export(recipes: &[Recipe], format: ExportFormat) -> serde_json::Result<String> {
    match format {
        ExportFormat::Json => render_json_export(recipes),
        ExportFormat::Markdown => Ok(render_markdown_export(recipes)),
    }
}

/// Build a deterministic default file name for export flows.
#[must_use]
pub fn suggested_export_file_name(format: ExportFormat, timestamp_ms: i64) -> String {
    format!("ambrosia-export-{timestamp_ms}.{}", format.extension())
}
