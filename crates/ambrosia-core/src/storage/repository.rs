//! Recipe repository implementation

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::format::{file_name_for_title, parse_recipe, serialize_recipe, RECIPE_EXTENSION};
use crate::models::{Recipe, RecipeDraft};

/// Folder used when the caller does not choose one
pub const DEFAULT_RECIPE_FOLDER: &str = "recipes";

/// Trait for recipe storage operations
pub trait RecipeRepository {
    /// Parse every recipe file, including invalid ones
    fn load_all(&self) -> Result<Vec<Recipe>>;

    /// Write a new recipe file and return its path
    fn create(&self, draft: &RecipeDraft) -> Result<PathBuf>;

    /// Overwrite the file backing `recipe` with the draft's fields
    fn update(&self, recipe: &Recipe, draft: &RecipeDraft) -> Result<()>;

    /// Remove the file backing `recipe`
    fn delete(&self, recipe: &Recipe) -> Result<()>;
}

/// What `create` does when the derived file name is already taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Replace the existing file
    #[default]
    Overwrite,
    /// Fail with [`Error::Conflict`]
    Reject,
}

/// Recipe repository over a folder of `.txt` files, one recipe per file
#[derive(Debug, Clone)]
pub struct FsRecipeRepository {
    folder: PathBuf,
    collision_policy: CollisionPolicy,
}

impl FsRecipeRepository {
    /// Create a repository for `folder`. The folder is created on first use.
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            collision_policy: CollisionPolicy::default(),
        }
    }

    #[must_use]
    pub const fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Path a recipe with this title is written to
    pub fn path_for_title(&self, title: &str) -> PathBuf {
        self.folder.join(file_name_for_title(title))
    }

    fn ensure_folder(&self) -> Result<()> {
        if !self.folder.is_dir() {
            fs::create_dir_all(&self.folder).inspect_err(|error| {
                tracing::warn!(folder = %self.folder.display(), %error, "Failed to create recipe folder");
            })?;
        }
        Ok(())
    }

    fn write_draft(path: &Path, draft: &RecipeDraft) -> Result<()> {
        fs::write(path, serialize_recipe(draft)).map_err(|error| {
            tracing::warn!(path = %path.display(), %error, "Failed to write recipe file");
            Error::Io(error)
        })
    }
}

impl RecipeRepository for FsRecipeRepository {
    fn load_all(&self) -> Result<Vec<Recipe>> {
        self.ensure_folder()?;

        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.folder)? {
            let path = entry?.path();
            if path.is_file() && has_recipe_extension(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        let recipes = paths
            .iter()
            .map(|path| read_recipe_file(path))
            .collect::<Vec<_>>();
        tracing::debug!(
            folder = %self.folder.display(),
            count = recipes.len(),
            "Loaded recipes"
        );
        Ok(recipes)
    }

    fn create(&self, draft: &RecipeDraft) -> Result<PathBuf> {
        draft.validate()?;
        self.ensure_folder()?;

        let path = self.path_for_title(&draft.title);
        if path.exists() {
            match self.collision_policy {
                CollisionPolicy::Reject => return Err(Error::Conflict(path)),
                CollisionPolicy::Overwrite => {
                    tracing::info!(path = %path.display(), "Overwriting existing recipe file");
                }
            }
        }

        Self::write_draft(&path, draft)?;
        tracing::info!(path = %path.display(), "Recipe saved");
        Ok(path)
    }

    fn update(&self, recipe: &Recipe, draft: &RecipeDraft) -> Result<()> {
        let Some(path) = recipe.origin_path.as_deref() else {
            return Err(Error::MissingBackingFile(recipe.title.clone()));
        };
        draft.validate()?;

        Self::write_draft(path, draft)?;
        tracing::info!(path = %path.display(), "Recipe updated");
        Ok(())
    }

    fn delete(&self, recipe: &Recipe) -> Result<()> {
        let Some(path) = recipe.origin_path.as_deref() else {
            return Err(Error::MissingBackingFile(recipe.title.clone()));
        };
        if !path.exists() {
            return Err(Error::MissingBackingFile(path.display().to_string()));
        }

        fs::remove_file(path).map_err(|error| {
            tracing::warn!(path = %path.display(), %error, "Failed to delete recipe file");
            Error::Io(error)
        })?;
        tracing::info!(path = %path.display(), "Recipe deleted");
        Ok(())
    }
}

/// Read and parse one recipe file.
///
/// Never fails: a file that cannot be read or is not UTF-8 comes back as
/// [`Recipe::unreadable`].
pub fn read_recipe_file(path: &Path) -> Recipe {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let mut recipe = parse_recipe(&contents);
            recipe.origin_path = Some(path.to_path_buf());
            recipe.modified_at = modified_at(path);
            if !recipe.is_valid {
                tracing::debug!(path = %path.display(), "Recipe file is malformed");
            }
            recipe
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "Error parsing recipe file");
            Recipe::unreadable(path)
        }
    }
}

fn has_recipe_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(RECIPE_EXTENSION))
}

fn modified_at(path: &Path) -> Option<i64> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    Some(DateTime::<Utc>::from(modified).timestamp_millis())
}
