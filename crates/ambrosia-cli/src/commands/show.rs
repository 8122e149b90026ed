use std::path::Path;

use ambrosia_core::Recipe;

use crate::commands::common::{load_recipes, normalize_recipe_identifier, resolve_recipe};
use crate::error::CliError;

pub fn run_show(query: &str, recipes_dir: &Path) -> Result<(), CliError> {
    let query = normalize_recipe_identifier(query)?;
    let recipes = load_recipes(recipes_dir)?;
    let recipe = resolve_recipe(&query, &recipes)?;

    print!("{}", render_recipe_detail(&recipe));
    Ok(())
}

pub fn render_recipe_detail(recipe: &Recipe) -> String {
    let mut lines = vec![
        recipe.title.clone(),
        String::new(),
        format!("Description: {}", recipe.description),
        format!("Tags: {}", recipe.tags.join(", ")),
        String::new(),
        "Ingredients:".to_string(),
    ];
    lines.extend(
        recipe
            .ingredients
            .iter()
            .map(|ingredient| format!(" - {ingredient}")),
    );
    lines.push(String::new());
    lines.push("Steps:".to_string());
    lines.extend(recipe.steps.iter().cloned());
    lines.push(String::new());
    if let Some(path) = &recipe.origin_path {
        lines.push(format!("File: {}", path.display()));
    }
    if !recipe.is_valid {
        lines.push("This recipe appears malformed.".to_string());
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}
