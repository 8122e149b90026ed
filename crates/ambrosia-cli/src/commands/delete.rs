use std::path::Path;

use ambrosia_core::storage::{FsRecipeRepository, RecipeRepository};

use crate::commands::common::{load_recipes, normalize_recipe_identifier, resolve_recipe};
use crate::error::CliError;

pub fn run_delete(query: &str, recipes_dir: &Path) -> Result<(), CliError> {
    let query = normalize_recipe_identifier(query)?;
    let repo = FsRecipeRepository::new(recipes_dir);
    let recipes = load_recipes(recipes_dir)?;
    let recipe = resolve_recipe(&query, &recipes)?;

    repo.delete(&recipe)?;
    println!("{}", recipe.file_label());
    Ok(())
}
