use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] ambrosia_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No recipe content provided")]
    EmptyContent,
    #[error("Edited recipe cannot be empty")]
    EmptyEditedContent,
    #[error("Recipe name cannot be empty")]
    EmptyRecipeId,
    #[error("Recipe not found for name/prefix: {0}")]
    RecipeNotFound(String),
    #[error("{0}")]
    AmbiguousRecipe(String),
    #[error("Editor command failed: {0}")]
    EditorFailed(String),
}
