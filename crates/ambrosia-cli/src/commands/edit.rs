use std::path::Path;

use ambrosia_core::format::serialize_recipe;
use ambrosia_core::storage::{FsRecipeRepository, RecipeRepository};
use ambrosia_core::RecipeDraft;

use crate::cli::RecipeFields;
use crate::commands::common::{
    clean_lines, collect_tags, draft_from_text, edit_in_editor, load_recipes,
    normalize_recipe_identifier, resolve_recipe, warn_if_long_description,
};
use crate::error::CliError;

pub fn run_edit(query: &str, fields: &RecipeFields, recipes_dir: &Path) -> Result<(), CliError> {
    let query = normalize_recipe_identifier(query)?;
    let recipes = load_recipes(recipes_dir)?;
    let recipe = resolve_recipe(&query, &recipes)?;

    let draft = if fields.is_empty() {
        let initial = serialize_recipe(&recipe.to_draft());
        let Some(edited) = edit_in_editor(&initial)? else {
            return Err(CliError::EmptyEditedContent);
        };

        if edited == initial.trim() {
            println!("{}", recipe.file_label());
            return Ok(());
        }
        draft_from_text(&edited)
    } else {
        apply_fields(recipe.to_draft(), fields)
    };

    warn_if_long_description(&draft);
    FsRecipeRepository::new(recipes_dir).update(&recipe, &draft)?;
    println!("{}", recipe.file_label());
    Ok(())
}

/// Replace the fields given on the command line; keep the rest.
pub fn apply_fields(mut draft: RecipeDraft, fields: &RecipeFields) -> RecipeDraft {
    if let Some(title) = &fields.title {
        draft.title = title.trim().to_string();
    }
    if let Some(description) = &fields.description {
        draft.description = description.trim().to_string();
    }
    if !fields.ingredients.is_empty() {
        draft.ingredients = clean_lines(&fields.ingredients);
    }
    if !fields.steps.is_empty() {
        draft.steps = clean_lines(&fields.steps);
    }
    if fields.has_tags() {
        draft.tags = collect_tags(fields);
    }
    draft
}
