use std::path::Path;

use ambrosia_core::search::search_recipes;
use ambrosia_core::Recipe;

use crate::commands::common::{load_recipes, print_recipes};
use crate::error::CliError;

pub fn run_search(
    query: &str,
    tags: &[String],
    as_json: bool,
    recipes_dir: &Path,
) -> Result<(), CliError> {
    let recipes = find_recipes(query, tags, recipes_dir)?;
    print_recipes(&recipes, as_json)
}

pub fn find_recipes(
    query: &str,
    tags: &[String],
    recipes_dir: &Path,
) -> Result<Vec<Recipe>, CliError> {
    let recipes = load_recipes(recipes_dir)?;
    Ok(search_recipes(&recipes, query, tags))
}
