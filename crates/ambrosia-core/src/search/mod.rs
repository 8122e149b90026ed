//! Search functionality for Ambrosia
//!
//! Recipes are filtered in memory: first by required tags, then by the text
//! query. The query's punctuation picks the matching mode:
//!
//! | Query           | Mode   | Keeps recipes containing |
//! |-----------------|--------|--------------------------|
//! | blank           | none   | everything               |
//! | `soup+pasta`    | and    | every term               |
//! | `soup,pasta`    | or     | any term                 |
//! | `chicken soup`  | phrase | the whole query          |
//!
//! Terms are matched as lowercase substrings of the title, description and
//! ingredients. Steps and tags are not searched.

use std::collections::BTreeSet;

use crate::models::Recipe;

/// A parsed text query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// No text filtering
    None,
    /// Every term must match
    And(Vec<String>),
    /// At least one term must match
    Or(Vec<String>),
    /// The whole query must match
    Phrase(String),
}

impl SearchQuery {
    /// Pick the mode from the raw input: `+` before `,` before phrase.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let query = input.trim();
        if query.is_empty() {
            Self::None
        } else if query.contains('+') {
            Self::And(split_terms(query, '+'))
        } else if query.contains(',') {
            Self::Or(split_terms(query, ','))
        } else {
            Self::Phrase(query.to_lowercase())
        }
    }

    /// Whether a lowercase haystack satisfies this query
    #[must_use]
    pub fn matches(&self, haystack: &str) -> bool {
        match self {
            Self::None => true,
            Self::And(terms) => terms.iter().all(|term| haystack.contains(term.as_str())),
            Self::Or(terms) => terms.iter().any(|term| haystack.contains(term.as_str())),
            Self::Phrase(phrase) => haystack.contains(phrase.as_str()),
        }
    }
}

fn split_terms(query: &str, separator: char) -> Vec<String> {
    query
        .split(separator)
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}

/// Text searched for a recipe: lowercase title, description, and ingredients
#[must_use]
pub fn search_haystack(recipe: &Recipe) -> String {
    format!(
        "{} {} {}",
        recipe.title,
        recipe.description,
        recipe.ingredients.join(" ")
    )
    .to_lowercase()
}

/// Whether the recipe carries every non-blank required tag
#[must_use]
pub fn has_all_tags(recipe: &Recipe, required_tags: &[String]) -> bool {
    required_tags
        .iter()
        .filter(|tag| !tag.trim().is_empty())
        .all(|tag| recipe.has_tag(tag))
}

/// Filter recipes by required tags, then by the text query.
///
/// Order is preserved. A blank query returns the tag-filtered set unchanged.
#[must_use]
pub fn search_recipes(recipes: &[Recipe], query: &str, required_tags: &[String]) -> Vec<Recipe> {
    let query = SearchQuery::parse(query);

    recipes
        .iter()
        .filter(|recipe| has_all_tags(recipe, required_tags))
        .filter(|recipe| query == SearchQuery::None || query.matches(&search_haystack(recipe)))
        .cloned()
        .collect()
}

/// Tags offered for selection: the defaults plus every tag in use, sorted and
/// without duplicates.
#[must_use]
pub fn known_tags(recipes: &[Recipe], default_tags: &[String]) -> Vec<String> {
    default_tags
        .iter()
        .chain(recipes.iter().flat_map(|recipe| recipe.tags.iter()))
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Recipes that failed the validity rule or could not be read
#[must_use]
pub fn invalid_recipes(recipes: &[Recipe]) -> Vec<&Recipe> {
    recipes.iter().filter(|recipe| !recipe.is_valid).collect()
}
