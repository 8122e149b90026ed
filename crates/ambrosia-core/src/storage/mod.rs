//! File-backed storage for recipes and settings

mod repository;
mod settings_store;

pub use repository::{
    read_recipe_file, CollisionPolicy, FsRecipeRepository, RecipeRepository, DEFAULT_RECIPE_FOLDER,
};
pub use settings_store::{JsonSettingsStore, SettingsStore, DEFAULT_SETTINGS_FILE};
