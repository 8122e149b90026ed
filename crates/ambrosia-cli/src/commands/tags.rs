use std::path::Path;

use ambrosia_core::search::known_tags;
use ambrosia_core::Settings;

use crate::commands::common::load_recipes;
use crate::error::CliError;

pub fn run_tags(settings: &Settings, recipes_dir: &Path) -> Result<(), CliError> {
    let recipes = load_recipes(recipes_dir)?;
    for tag in known_tags(&recipes, &settings.default_tags) {
        let count = recipes.iter().filter(|recipe| recipe.has_tag(&tag)).count();
        println!("{tag:<20}  {count}");
    }
    Ok(())
}
