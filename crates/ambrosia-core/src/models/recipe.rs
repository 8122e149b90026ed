//! Recipe model

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::char_count;

/// Minimum description length (in characters) for a recipe to be valid
pub const MIN_DESCRIPTION_CHARS: usize = 30;

/// Descriptions longer than this are accepted but worth a warning
pub const LONG_DESCRIPTION_CHARS: usize = 300;

/// Description given to records whose file could not be read
pub const UNREADABLE_DESCRIPTION: &str = "Error reading file.";

/// A recipe loaded from, or about to be written to, a text file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display title
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Ingredients, one per line on disk
    pub ingredients: Vec<String>,
    /// Steps in order, as read (ordinal prefixes included)
    pub steps: Vec<String>,
    /// Lowercase tags, duplicates kept
    pub tags: Vec<String>,
    /// File backing this record; `None` until saved
    pub origin_path: Option<PathBuf>,
    /// Last modification of the backing file (Unix ms)
    pub modified_at: Option<i64>,
    /// Derived validity flag, see [`is_content_valid`]
    pub is_valid: bool,
}

impl Recipe {
    /// Create an unsaved recipe, deriving the validity flag from its content.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        ingredients: Vec<String>,
        steps: Vec<String>,
        tags: Vec<String>,
    ) -> Self {
        let title = title.into();
        let description = description.into();
        let is_valid = is_content_valid(&title, &description, &steps);
        Self {
            title,
            description,
            ingredients,
            steps,
            tags,
            origin_path: None,
            modified_at: None,
            is_valid,
        }
    }

    /// Placeholder for a file that exists but could not be read or decoded.
    #[must_use]
    pub fn unreadable(path: &Path) -> Self {
        let title = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            title,
            description: UNREADABLE_DESCRIPTION.to_string(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            tags: Vec::new(),
            origin_path: Some(path.to_path_buf()),
            modified_at: None,
            is_valid: false,
        }
    }

    /// Name to show when pointing at this recipe: the backing file name, or
    /// the title for unsaved records.
    #[must_use]
    pub fn file_label(&self) -> String {
        self.origin_path
            .as_deref()
            .and_then(Path::file_name)
            .map_or_else(
                || self.title.clone(),
                |name| name.to_string_lossy().into_owned(),
            )
    }

    /// Whether the recipe carries the given tag (case-insensitive)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        self.tags.iter().any(|own| own.to_lowercase() == tag)
    }
}

/// Field values for creating or overwriting a recipe file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    /// Steps without ordinals; they are numbered on write
    pub steps: Vec<String>,
    pub tags: Vec<String>,
}

impl RecipeDraft {
    /// Check the draft before anything is written.
    ///
    /// The title must not be blank and the description must be at least
    /// [`MIN_DESCRIPTION_CHARS`] characters long.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation("Title cannot be empty.".into()));
        }
        if char_count(&self.description) < MIN_DESCRIPTION_CHARS {
            return Err(Error::Validation(format!(
                "Description must be at least {MIN_DESCRIPTION_CHARS} characters."
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn has_long_description(&self) -> bool {
        char_count(&self.description) > LONG_DESCRIPTION_CHARS
    }
}

/// Validity rule applied after parsing.
///
/// Tags and ingredients do not take part.
#[must_use]
pub fn is_content_valid(title: &str, description: &str, steps: &[String]) -> bool {
    !title.is_empty()
        && !description.is_empty()
        && char_count(description) >= MIN_DESCRIPTION_CHARS
        && !steps.is_empty()
}

/// Split comma-separated tag input into trimmed, lowercase, non-empty tags.
///
/// # Examples
///
/// ```
/// use ambrosia_core::models::parse_tag_list;
///
/// assert_eq!(parse_tag_list("Dinner, , quick "), vec!["dinner", "quick"]);
/// ```
#[must_use]
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Append `extra` tags to `selected`, lowercased, skipping blanks and tags
/// already present.
#[must_use]
pub fn merge_tags(selected: &[String], extra: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(selected.len() + extra.len());
    for tag in selected.iter().chain(extra) {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !merged.contains(&tag) {
            merged.push(tag);
        }
    }
    merged
}
