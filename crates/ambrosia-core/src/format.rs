//! The line-oriented recipe text format.
//!
//! ```text
//! Title: Tomato Soup
//! Description: A bright, quick soup for cold evenings.
//! Tags: dinner, soup
//! Ingredients:
//! - 6_tomatoes
//! - 1_onion
//! Steps:
//! 1. Chop everything
//! 2. Simmer for 20 minutes
//! ```
//!
//! Reading is tolerant: unrecognised lines are dropped and the result carries
//! a validity flag instead of failing. Writing is the inverse, except that
//! steps gain a `N. ` ordinal which reads back as part of the step text.

use crate::models::{is_content_valid, parse_tag_list, Recipe, RecipeDraft};

/// Extension of recipe files, compared case-insensitively on read
pub const RECIPE_EXTENSION: &str = "txt";

const TITLE_KEY: &str = "Title:";
const DESCRIPTION_KEY: &str = "Description:";
const TAGS_KEY: &str = "Tags:";
const INGREDIENTS_KEY: &str = "Ingredients:";
const STEPS_KEY: &str = "Steps:";
const INGREDIENT_BULLET: &str = "- ";

/// Which list plain data lines belong to.
///
/// Only the `Ingredients:` and `Steps:` keyword lines change the mode, and it
/// stays in effect until the next one. Keyword lines are recognised in every
/// mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    #[default]
    None,
    Ingredients,
    Steps,
}

/// Parse the contents of one recipe file.
///
/// The returned record has no `origin_path`; the caller that read the file
/// attaches it.
#[must_use]
pub fn parse_recipe(contents: &str) -> Recipe {
    let mut title = String::new();
    let mut description = String::new();
    let mut tags = Vec::new();
    let mut ingredients = Vec::new();
    let mut steps = Vec::new();
    let mut mode = ParseMode::None;

    for line in contents.lines() {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix(TITLE_KEY) {
            title = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix(DESCRIPTION_KEY) {
            description = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix(TAGS_KEY) {
            tags = parse_tag_list(rest);
        } else if line.starts_with(INGREDIENTS_KEY) {
            mode = ParseMode::Ingredients;
        } else if line.starts_with(STEPS_KEY) {
            mode = ParseMode::Steps;
        } else {
            match mode {
                ParseMode::Ingredients => {
                    if let Some(rest) = line.strip_prefix(INGREDIENT_BULLET) {
                        let ingredient = rest.trim();
                        if !ingredient.is_empty() {
                            ingredients.push(ingredient.to_string());
                        }
                    }
                }
                ParseMode::Steps if !line.is_empty() => steps.push(line.to_string()),
                ParseMode::Steps | ParseMode::None => {}
            }
        }
    }

    let is_valid = is_content_valid(&title, &description, &steps);
    Recipe {
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

/// Render a draft in the recipe text format, one `\n`-terminated line each.
///
/// Spaces inside ingredients become underscores and steps are numbered from
/// one. Line breaks inside a field are flattened to spaces so the field stays
/// on its line.
#[must_use]
pub fn serialize_recipe(draft: &RecipeDraft) -> String {
    let mut lines = Vec::with_capacity(5 + draft.ingredients.len() + draft.steps.len());
    lines.push(format!("{TITLE_KEY} {}", single_line(&draft.title)));
    lines.push(format!("{DESCRIPTION_KEY} {}", single_line(&draft.description)));
    lines.push(format!("{TAGS_KEY} {}", single_line(&draft.tags.join(", "))));
    lines.push(INGREDIENTS_KEY.to_string());
    for ingredient in &draft.ingredients {
        lines.push(format!(
            "{INGREDIENT_BULLET}{}",
            single_line(ingredient.trim()).replace(' ', "_")
        ));
    }
    lines.push(STEPS_KEY.to_string());
    for (index, step) in draft.steps.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, single_line(step)));
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Drop a leading `N. ` ordinal from a step, as written by [`serialize_recipe`].
#[must_use]
pub fn strip_step_ordinal(step: &str) -> &str {
    let digits = step.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return step;
    }
    step[digits..].strip_prefix(". ").map_or(step, str::trim_start)
}

/// File name for a recipe title: lowercase, spaces to underscores.
///
/// Path separators are replaced too so the file always lands directly in the
/// recipe folder. Different titles can map to the same name.
#[must_use]
pub fn file_name_for_title(title: &str) -> String {
    let stem: String = title
        .trim()
        .to_lowercase()
        .chars()
        .map(|ch| match ch {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    format!("{stem}.{RECIPE_EXTENSION}")
}

impl Recipe {
    /// Draft carrying this recipe's fields, with step ordinals removed so a
    /// rewrite does not number them twice.
    #[must_use]
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            ingredients: self.ingredients.clone(),
            steps: self
                .steps
                .iter()
                .map(|step| strip_step_ordinal(step).to_string())
                .collect(),
            tags: self.tags.clone(),
        }
    }
}

fn single_line(value: &str) -> String {
    if value.contains(['\n', '\r']) {
        value.lines().map(str::trim).collect::<Vec<_>>().join(" ")
    } else {
        value.to_string()
    }
}
