use std::path::Path;

use ambrosia_core::search::search_recipes;

use crate::commands::common::{load_recipes, print_recipes};
use crate::error::CliError;

pub fn run_list(tags: &[String], as_json: bool, recipes_dir: &Path) -> Result<(), CliError> {
    let recipes = load_recipes(recipes_dir)?;
    let recipes = search_recipes(&recipes, "", tags);
    print_recipes(&recipes, as_json)
}
