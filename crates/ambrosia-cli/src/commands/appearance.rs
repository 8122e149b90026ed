use ambrosia_core::models::{FontPreset, FontScale};
use ambrosia_core::Settings;

use crate::cli::{AppearanceCommands, FontArg, ScaleArg};

/// Apply an appearance change to the in-memory settings and print the result.
///
/// Persisting is left to the caller, which saves once on exit.
pub fn run_appearance(command: Option<AppearanceCommands>, settings: &mut Settings) {
    apply_appearance(command, settings);
    for line in describe_appearance(settings) {
        println!("{line}");
    }
}

pub fn apply_appearance(command: Option<AppearanceCommands>, settings: &mut Settings) {
    match command {
        None | Some(AppearanceCommands::Show) => {}
        Some(AppearanceCommands::Scale { scale }) => settings.apply_scale(scale.into()),
        Some(AppearanceCommands::Font { font }) => settings.apply_font(font.into()),
        Some(AppearanceCommands::Bold) => settings.toggle_bold(),
        Some(AppearanceCommands::DarkMode) => settings.toggle_dark_mode(),
    }
}

pub fn describe_appearance(settings: &Settings) -> Vec<String> {
    let scale = settings
        .scale()
        .map_or("custom", |scale| match scale {
            FontScale::Small => "small",
            FontScale::Medium => "medium",
            FontScale::Large => "large",
        });
    let font = FontPreset::from_family(&settings.font_family).map_or("custom", |preset| {
        match preset {
            FontPreset::Serif => "serif",
            FontPreset::Sans => "sans",
            FontPreset::Script => "script",
        }
    });

    vec![
        format!("Dark mode:    {}", on_off(settings.is_dark_mode)),
        format!("Font:         {} ({font})", settings.font_family),
        format!("Size:         {} pt ({scale})", settings.font_size),
        format!("Bold:         {}", on_off(settings.font_bold)),
        format!("Default tags: {}", settings.default_tags.join(", ")),
    ]
}

const fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

impl From<ScaleArg> for FontScale {
    fn from(value: ScaleArg) -> Self {
        match value {
            ScaleArg::Small => Self::Small,
            ScaleArg::Medium => Self::Medium,
            ScaleArg::Large => Self::Large,
        }
    }
}

impl From<FontArg> for FontPreset {
    fn from(value: FontArg) -> Self {
        match value {
            FontArg::Serif => Self::Serif,
            FontArg::Sans => Self::Sans,
            FontArg::Script => Self::Script,
        }
    }
}
