//! Application settings model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Text scale options offered by the appearance menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontScale {
    Small,
    Medium,
    Large,
}

impl FontScale {
    /// Point size for this scale
    #[must_use]
    pub const fn point_size(self) -> u32 {
        match self {
            Self::Small => 9,
            Self::Medium => 10,
            Self::Large => 12,
        }
    }

    /// The scale matching a point size, if any
    #[must_use]
    pub const fn from_point_size(size: u32) -> Option<Self> {
        match size {
            9 => Some(Self::Small),
            10 => Some(Self::Medium),
            12 => Some(Self::Large),
            _ => None,
        }
    }
}

/// Font family options offered by the appearance menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontPreset {
    Serif,
    Sans,
    Script,
}

impl FontPreset {
    #[must_use]
    pub const fn family(self) -> &'static str {
        match self {
            Self::Serif => "Times New Roman",
            Self::Sans => "Arial",
            Self::Script => "Comic Sans MS",
        }
    }

    #[must_use]
    pub fn from_family(family: &str) -> Option<Self> {
        [Self::Serif, Self::Sans, Self::Script]
            .into_iter()
            .find(|preset| preset.family() == family)
    }
}

/// Application settings
///
/// Keys not known to this version are kept in `extra` so they survive a
/// load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Dark color scheme
    pub is_dark_mode: bool,
    /// Font family for all text
    pub font_family: String,
    /// Font size in points
    pub font_size: u32,
    /// Bold text
    pub font_bold: bool,
    /// Tags always offered for selection
    pub default_tags: Vec<String>,
    /// Unrecognised keys from the settings file
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            is_dark_mode: false,
            font_family: FontPreset::Sans.family().to_string(),
            font_size: FontScale::Medium.point_size(),
            font_bold: false,
            default_tags: ["breakfast", "lunch", "dinner", "dessert", "appetizer", "cocktail"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            extra: Map::new(),
        }
    }
}

impl Settings {
    /// Set the font size to the preset's point size
    pub fn apply_scale(&mut self, scale: FontScale) {
        self.font_size = scale.point_size();
    }

    /// Set the font family to the preset's family
    pub fn apply_font(&mut self, preset: FontPreset) {
        self.font_family = preset.family().to_string();
    }

    /// Flip bold text on or off
    pub fn toggle_bold(&mut self) {
        self.font_bold = !self.font_bold;
    }

    /// Flip between the light and dark color scheme
    pub fn toggle_dark_mode(&mut self) {
        self.is_dark_mode = !self.is_dark_mode;
    }

    /// Current scale preset, `None` for a custom point size
    #[must_use]
    pub const fn scale(&self) -> Option<FontScale> {
        FontScale::from_point_size(self.font_size)
    }
}
