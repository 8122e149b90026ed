use std::path::{Path, PathBuf};

use ambrosia_core::format::serialize_recipe;
use ambrosia_core::search::known_tags;
use ambrosia_core::storage::{CollisionPolicy, FsRecipeRepository, RecipeRepository};
use ambrosia_core::{RecipeDraft, Settings};

use crate::cli::RecipeFields;
use crate::commands::common::{
    clean_lines, collect_tags, draft_from_text, edit_in_editor, load_recipes,
    warn_if_long_description,
};
use crate::error::CliError;

pub fn run_add(
    fields: &RecipeFields,
    force: bool,
    settings: &Settings,
    recipes_dir: &Path,
) -> Result<(), CliError> {
    let draft = if fields.title.is_some() {
        draft_from_fields(fields)
    } else {
        let tags = known_tags(&load_recipes(recipes_dir)?, &settings.default_tags);
        let template = editor_template(&draft_from_fields(fields), &tags);
        let Some(text) = edit_in_editor(&template)? else {
            return Err(CliError::EmptyContent);
        };
        draft_from_text(&text)
    };

    let path = create_recipe(&draft, force, recipes_dir)?;
    println!("{}", path.display());
    Ok(())
}

/// Validate and write a new recipe file. Existing files are only replaced
/// with `force`.
pub fn create_recipe(
    draft: &RecipeDraft,
    force: bool,
    recipes_dir: &Path,
) -> Result<PathBuf, CliError> {
    let policy = if force {
        CollisionPolicy::Overwrite
    } else {
        CollisionPolicy::Reject
    };
    let repo = FsRecipeRepository::new(recipes_dir).with_collision_policy(policy);

    warn_if_long_description(draft);
    Ok(repo.create(draft)?)
}

pub fn draft_from_fields(fields: &RecipeFields) -> RecipeDraft {
    RecipeDraft {
        title: fields.title.as_deref().unwrap_or_default().trim().to_string(),
        description: fields
            .description
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string(),
        ingredients: clean_lines(&fields.ingredients),
        steps: clean_lines(&fields.steps),
        tags: collect_tags(fields),
    }
}

/// Starting text for a recipe written in the editor.
///
/// The comment lines sit above every keyword line, where the parser drops
/// them.
pub fn editor_template(draft: &RecipeDraft, known_tags: &[String]) -> String {
    let mut template = String::from("# New recipe. Lines starting with '#' are ignored.\n");
    template.push_str("# Descriptions need at least 30 characters.\n");
    if !known_tags.is_empty() {
        template.push_str(&format!("# Known tags: {}\n", known_tags.join(", ")));
    }
    template.push_str(&serialize_recipe(draft));
    template
}
