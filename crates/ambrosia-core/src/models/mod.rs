//! Data models for Ambrosia

mod recipe;
mod settings;

pub use recipe::{
    is_content_valid, merge_tags, parse_tag_list, Recipe, RecipeDraft,
    LONG_DESCRIPTION_CHARS, MIN_DESCRIPTION_CHARS, UNREADABLE_DESCRIPTION,
};
pub use settings::{FontPreset, FontScale, Settings};
