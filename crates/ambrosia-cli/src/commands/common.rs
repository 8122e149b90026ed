use std::env;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use ambrosia_core::format::parse_recipe;
use ambrosia_core::models::{merge_tags, parse_tag_list};
use ambrosia_core::storage::{FsRecipeRepository, RecipeRepository};
use ambrosia_core::util::{normalize_text_option, preview_text};
use ambrosia_core::{Recipe, RecipeDraft};
use chrono::{Duration, Utc};
use serde::Serialize;

use crate::cli::RecipeFields;
use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct RecipeListItem {
    pub file: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub is_valid: bool,
    pub modified_at: Option<i64>,
    pub relative_time: Option<String>,
}

pub fn load_recipes(recipes_dir: &Path) -> Result<Vec<Recipe>, CliError> {
    Ok(FsRecipeRepository::new(recipes_dir).load_all()?)
}

/// Find a recipe by file stem, then by title, then by a unique prefix of
/// either. Comparisons ignore case.
pub fn resolve_recipe(query: &str, recipes: &[Recipe]) -> Result<Recipe, CliError> {
    let needle = query.trim().to_lowercase();
    let needle = needle
        .strip_suffix(".txt")
        .map_or(needle.as_str(), str::trim_end);

    let exact = recipes
        .iter()
        .filter(|recipe| file_stem(recipe) == needle || recipe.title.to_lowercase() == needle)
        .collect::<Vec<_>>();
    let candidates = if exact.is_empty() {
        recipes
            .iter()
            .filter(|recipe| {
                file_stem(recipe).starts_with(needle)
                    || recipe.title.to_lowercase().starts_with(needle)
            })
            .collect::<Vec<_>>()
    } else {
        exact
    };

    match candidates.as_slice() {
        [] => Err(CliError::RecipeNotFound(query.to_string())),
        [recipe] => Ok((*recipe).clone()),
        many => {
            let options = many
                .iter()
                .take(3)
                .map(|recipe| recipe.file_label())
                .collect::<Vec<_>>()
                .join(", ");

            Err(CliError::AmbiguousRecipe(format!(
                "Recipe name '{query}' is ambiguous; matches: {options}"
            )))
        }
    }
}

fn file_stem(recipe: &Recipe) -> String {
    recipe
        .origin_path
        .as_deref()
        .and_then(Path::file_stem)
        .map(|stem| stem.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Tags given as `--tag` plus the comma-separated `--tags` value
pub fn collect_tags(fields: &RecipeFields) -> Vec<String> {
    let extra = fields
        .tag_list
        .as_deref()
        .map(parse_tag_list)
        .unwrap_or_default();
    merge_tags(&fields.tags, &extra)
}

/// Trimmed, non-empty lines; the way multi-line form input becomes a list
pub fn clean_lines(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Turn text written in the recipe format into a draft.
///
/// Step ordinals are stripped since they are added back on save.
pub fn draft_from_text(text: &str) -> RecipeDraft {
    parse_recipe(text).to_draft()
}

pub fn warn_if_long_description(draft: &RecipeDraft) {
    if draft.has_long_description() {
        eprintln!(
            "Warning: description is over {} characters",
            ambrosia_core::models::LONG_DESCRIPTION_CHARS
        );
    }
}

pub fn format_recipe_lines(recipes: &[Recipe]) -> Vec<String> {
    let now_ms = Utc::now().timestamp_millis();
    recipes
        .iter()
        .map(|recipe| {
            let marker = if recipe.is_valid { ' ' } else { '!' };
            let file = recipe.file_label();
            let title = preview_text(&recipe.title, 32);
            let relative_time = recipe
                .modified_at
                .map(|modified| format_relative_time(modified, now_ms))
                .unwrap_or_default();
            let tags = render_tags(recipe);

            if tags.is_empty() {
                format!("{marker} {file:<28}  {title:<32}  {relative_time}")
            } else {
                format!("{marker} {file:<28}  {title:<32}  {relative_time:<10}  {tags}")
            }
        })
        .collect()
}

pub fn recipe_to_list_item(recipe: &Recipe) -> RecipeListItem {
    let now_ms = Utc::now().timestamp_millis();

    RecipeListItem {
        file: recipe.file_label(),
        title: recipe.title.clone(),
        description: recipe.description.clone(),
        tags: recipe.tags.clone(),
        ingredients: recipe.ingredients.clone(),
        steps: recipe.steps.clone(),
        is_valid: recipe.is_valid,
        modified_at: recipe.modified_at,
        relative_time: recipe
            .modified_at
            .map(|modified| format_relative_time(modified, now_ms)),
    }
}

pub fn print_recipes(recipes: &[Recipe], as_json: bool) -> Result<(), CliError> {
    if as_json {
        let json_items = recipes
            .iter()
            .map(recipe_to_list_item)
            .collect::<Vec<RecipeListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else {
        for line in format_recipe_lines(recipes) {
            println!("{line}");
        }
    }
    Ok(())
}

fn render_tags(recipe: &Recipe) -> String {
    recipe
        .tags
        .iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<String>>()
        .join(" ")
}

/// Short age label such as `5m ago` or `3w ago`
pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let age = Duration::milliseconds(now_ms.saturating_sub(timestamp_ms).max(0));
    let days = age.num_days();

    if age.num_minutes() == 0 {
        "just now".to_string()
    } else if age.num_hours() == 0 {
        format!("{}m ago", age.num_minutes())
    } else if days == 0 {
        format!("{}h ago", age.num_hours())
    } else if age.num_weeks() == 0 {
        format!("{days}d ago")
    } else if days < 30 {
        format!("{}w ago", age.num_weeks())
    } else if days < 365 {
        format!("{}mo ago", days / 30)
    } else {
        format!("{}y ago", days / 365)
    }
}

pub fn normalize_recipe_identifier(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyRecipeId)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Open `initial` in the user's editor and return the saved text, or `None`
/// when it comes back blank.
pub fn edit_in_editor(initial: &str) -> Result<Option<String>, CliError> {
    let mut buffer = tempfile::Builder::new()
        .prefix("ambrosia-")
        .suffix(".txt")
        .tempfile()?;
    buffer.write_all(initial.as_bytes())?;
    buffer.flush()?;

    let editor = editor_from_env(|key| env::var(key).ok());
    run_editor(&editor, buffer.path())?;

    let text = std::fs::read_to_string(buffer.path())?;
    Ok(normalize_text_option(Some(text)))
}

/// Run an editor command line such as `code --wait` on `file_path`
fn run_editor(editor: &str, file_path: &Path) -> Result<(), CliError> {
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| CliError::EditorFailed("empty editor command".into()))?;

    let status = Command::new(program).args(parts).arg(file_path).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(CliError::EditorFailed(format!("`{editor}` exited with {status}")))
    }
}

/// First non-blank of `AMBROSIA_EDITOR`, `VISUAL`, `EDITOR`, else the
/// platform editor
pub fn editor_from_env(lookup: impl Fn(&str) -> Option<String>) -> String {
    ["AMBROSIA_EDITOR", "VISUAL", "EDITOR"]
        .into_iter()
        .find_map(|key| normalize_text_option(lookup(key)))
        .unwrap_or_else(|| default_editor().to_string())
}

pub const fn default_editor() -> &'static str {
    if cfg!(windows) {
        "notepad"
    } else {
        "vi"
    }
}
