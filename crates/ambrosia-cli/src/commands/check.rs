use std::path::Path;

use ambrosia_core::search::invalid_recipes;
use ambrosia_core::Recipe;

use crate::commands::common::load_recipes;
use crate::error::CliError;

pub fn run_check(recipes_dir: &Path) -> Result<(), CliError> {
    let recipes = load_recipes(recipes_dir)?;
    for line in check_report(&recipes) {
        println!("{line}");
    }
    Ok(())
}

pub fn check_report(recipes: &[Recipe]) -> Vec<String> {
    let invalid = invalid_recipes(recipes);
    if invalid.is_empty() {
        return vec!["All recipes are valid!".to_string()];
    }

    let mut lines = vec!["Some recipes appear malformed:".to_string()];
    lines.extend(
        invalid
            .iter()
            .map(|recipe| format!(" - {}", recipe.file_label())),
    );
    lines
}
