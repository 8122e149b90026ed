use std::path::{Path, PathBuf};

use ambrosia_core::storage::{FsRecipeRepository, RecipeRepository};
use ambrosia_core::{Error, RecipeDraft, Settings};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use crate::cli::{AppearanceCommands, CompletionShell, ExportFormat, FontArg, RecipeFields, ScaleArg};
use crate::commands::add::{create_recipe, draft_from_fields, editor_template};
use crate::commands::appearance::{apply_appearance, describe_appearance};
use crate::commands::check::check_report;
use crate::commands::common::{
    collect_tags, default_editor, draft_from_text, editor_from_env, format_relative_time,
    load_recipes, normalize_recipe_identifier, resolve_recipe,
};
use crate::commands::completions::run_completions;
use crate::commands::delete::run_delete;
use crate::commands::edit::{apply_fields, run_edit};
use crate::commands::export::run_export;
use crate::commands::search::find_recipes;
use crate::commands::show::render_recipe_detail;
use crate::error::CliError;

const DESCRIPTION: &str = "A dependable weeknight dish that feeds four people.";

fn draft(title: &str, tags: &[&str]) -> RecipeDraft {
    RecipeDraft {
        title: title.to_string(),
        description: DESCRIPTION.to_string(),
        ingredients: vec!["1 onion".to_string(), "2 cloves garlic".to_string()],
        steps: vec!["Chop".to_string(), "Cook".to_string()],
        tags: tags.iter().map(ToString::to_string).collect(),
    }
}

fn seeded_dir() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let recipes_dir = dir.path().join("recipes");
    let repo = FsRecipeRepository::new(&recipes_dir);
    repo.create(&draft("Chicken Soup", &["dinner", "soup"])).unwrap();
    repo.create(&draft("Chickpea Curry", &["dinner"])).unwrap();
    repo.create(&draft("Apple Pie", &["dessert"])).unwrap();
    (dir, recipes_dir)
}

fn titles(recipes_dir: &Path) -> Vec<String> {
    load_recipes(recipes_dir)
        .unwrap()
        .into_iter()
        .map(|recipe| recipe.title)
        .collect()
}

#[test]
fn normalize_recipe_identifier_rejects_empty() {
    assert!(matches!(
        normalize_recipe_identifier(" \n "),
        Err(CliError::EmptyRecipeId)
    ));
    assert_eq!(normalize_recipe_identifier("  soup  ").unwrap(), "soup");
}

#[test]
fn default_editor_is_defined() {
    assert!(!default_editor().is_empty());
}

#[test]
fn editor_lookup_prefers_app_variable_and_skips_blanks() {
    let env = |vars: &'static [(&'static str, &'static str)]| {
        move |key: &str| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_string())
        }
    };

    assert_eq!(
        editor_from_env(env(&[("AMBROSIA_EDITOR", "nano"), ("EDITOR", "vim")])),
        "nano"
    );
    assert_eq!(
        editor_from_env(env(&[("AMBROSIA_EDITOR", "  "), ("VISUAL", "code --wait")])),
        "code --wait"
    );
    assert_eq!(editor_from_env(env(&[])), default_editor());
}

#[test]
fn explicit_paths_take_precedence() {
    assert_eq!(
        crate::resolve_recipes_dir(Some(PathBuf::from("/tmp/cookbook"))),
        PathBuf::from("/tmp/cookbook")
    );
    assert_eq!(
        crate::resolve_settings_path(Some(PathBuf::from("prefs.json"))),
        PathBuf::from("prefs.json")
    );
}

#[test]
fn format_relative_time_units() {
    let now = 10_000_000;
    assert_eq!(format_relative_time(now - 30_000, now), "just now");
    assert_eq!(format_relative_time(now - 120_000, now), "2m ago");
    assert_eq!(format_relative_time(now - 2 * 60 * 60_000, now), "2h ago");

    let day = 24 * 60 * 60_000;
    let now = 1_000 * day;
    assert_eq!(format_relative_time(now - 3 * day, now), "3d ago");
    assert_eq!(format_relative_time(now - 15 * day, now), "2w ago");
    assert_eq!(format_relative_time(now - 65 * day, now), "2mo ago");
    assert_eq!(format_relative_time(now - 800 * day, now), "2y ago");
    assert_eq!(format_relative_time(now + 5_000, now), "just now");
}

#[test]
fn resolve_recipe_supports_file_title_and_prefix() {
    let (_dir, recipes_dir) = seeded_dir();
    let recipes = load_recipes(&recipes_dir).unwrap();

    let by_file = resolve_recipe("apple_pie.txt", &recipes).unwrap();
    assert_eq!(by_file.title, "Apple Pie");

    let by_title = resolve_recipe("chicken soup", &recipes).unwrap();
    assert_eq!(by_title.title, "Chicken Soup");

    let by_prefix = resolve_recipe("Chickp", &recipes).unwrap();
    assert_eq!(by_prefix.title, "Chickpea Curry");
}

#[test]
fn resolve_recipe_rejects_ambiguous_prefix() {
    let (_dir, recipes_dir) = seeded_dir();
    let recipes = load_recipes(&recipes_dir).unwrap();

    let error = resolve_recipe("chick", &recipes).unwrap_err();
    assert!(matches!(error, CliError::AmbiguousRecipe(_)));
}

#[test]
fn resolve_recipe_rejects_missing_recipe() {
    let (_dir, recipes_dir) = seeded_dir();
    let recipes = load_recipes(&recipes_dir).unwrap();

    let error = resolve_recipe("lasagna", &recipes).unwrap_err();
    assert!(matches!(error, CliError::RecipeNotFound(_)));
}

#[test]
fn find_recipes_applies_query_and_tags() {
    let (_dir, recipes_dir) = seeded_dir();

    let soups = find_recipes("chicken,apple", &["dinner".to_string()], &recipes_dir).unwrap();
    assert_eq!(soups.len(), 1);
    assert_eq!(soups[0].title, "Chicken Soup");

    let garlic = find_recipes("cloves garlic", &[], &recipes_dir).unwrap();
    assert!(garlic.is_empty(), "ingredients are stored with underscores");

    let garlic = find_recipes("cloves_garlic", &[], &recipes_dir).unwrap();
    assert_eq!(garlic.len(), 3);
}

#[test]
fn collect_tags_merges_flag_and_list() {
    let fields = RecipeFields {
        tags: vec!["Dinner".to_string()],
        tag_list: Some("quick, dinner, ".to_string()),
        ..RecipeFields::default()
    };
    assert_eq!(collect_tags(&fields), vec!["dinner", "quick"]);
}

#[test]
fn create_recipe_refuses_collision_unless_forced() {
    let (_dir, recipes_dir) = seeded_dir();

    let error = create_recipe(&draft("chicken soup", &[]), false, &recipes_dir).unwrap_err();
    assert!(matches!(error, CliError::Core(Error::Conflict(_))));

    let path = create_recipe(&draft("chicken soup", &[]), true, &recipes_dir).unwrap();
    assert!(path.ends_with("chicken_soup.txt"));
    assert!(titles(&recipes_dir).contains(&"chicken soup".to_string()));
    assert_eq!(titles(&recipes_dir).len(), 3);
}

#[test]
fn create_recipe_surfaces_validation_error() {
    let dir = TempDir::new().unwrap();
    let fields = RecipeFields {
        title: Some("Toast".to_string()),
        description: Some("Hot bread.".to_string()),
        ..RecipeFields::default()
    };

    let error = create_recipe(&draft_from_fields(&fields), false, dir.path()).unwrap_err();
    assert!(matches!(error, CliError::Core(ref core) if core.is_validation()));
}

#[test]
fn editor_template_parses_back_to_the_prefilled_draft() {
    let prefilled = draft_from_fields(&RecipeFields {
        description: Some(DESCRIPTION.to_string()),
        steps: vec!["Stir".to_string(), " ".to_string()],
        ..RecipeFields::default()
    });
    let template = editor_template(&prefilled, &["dinner".to_string()]);
    assert!(template.contains("# Known tags: dinner"));

    let parsed = draft_from_text(&template);
    assert_eq!(parsed, prefilled);
}

#[test]
fn apply_fields_keeps_unset_fields_without_doubling_ordinals() {
    let (_dir, recipes_dir) = seeded_dir();
    let recipes = load_recipes(&recipes_dir).unwrap();
    let recipe = resolve_recipe("apple pie", &recipes).unwrap();

    let fields = RecipeFields {
        title: Some("Dutch Apple Pie".to_string()),
        ..RecipeFields::default()
    };
    let updated = apply_fields(recipe.to_draft(), &fields);

    assert_eq!(updated.title, "Dutch Apple Pie");
    assert_eq!(updated.description, DESCRIPTION);
    assert_eq!(updated.steps, vec!["Chop", "Cook"]);
    assert_eq!(updated.tags, vec!["dessert"]);
}

#[test]
fn run_edit_with_flags_overwrites_same_file() {
    let (_dir, recipes_dir) = seeded_dir();
    let fields = RecipeFields {
        title: Some("Dutch Apple Pie".to_string()),
        tag_list: Some(String::new()),
        ..RecipeFields::default()
    };

    run_edit("apple_pie", &fields, &recipes_dir).unwrap();

    let recipes = load_recipes(&recipes_dir).unwrap();
    let edited = resolve_recipe("apple_pie.txt", &recipes).unwrap();
    assert_eq!(edited.title, "Dutch Apple Pie");
    assert!(edited.tags.is_empty());
    assert_eq!(edited.steps, vec!["1. Chop", "2. Cook"]);
    assert!(!recipes_dir.join("dutch_apple_pie.txt").exists());
}

#[test]
fn run_edit_rejects_short_description() {
    let (_dir, recipes_dir) = seeded_dir();
    let fields = RecipeFields {
        description: Some("Pie.".to_string()),
        ..RecipeFields::default()
    };

    let error = run_edit("apple", &fields, &recipes_dir).unwrap_err();
    assert!(matches!(error, CliError::Core(Error::Validation(_))));
}

#[test]
fn run_delete_removes_resolved_recipe() {
    let (_dir, recipes_dir) = seeded_dir();

    run_delete("apple", &recipes_dir).unwrap();

    assert!(!recipes_dir.join("apple_pie.txt").exists());
    assert_eq!(titles(&recipes_dir), vec!["Chicken Soup", "Chickpea Curry"]);
}

#[test]
fn check_report_lists_malformed_files() {
    let (_dir, recipes_dir) = seeded_dir();
    assert_eq!(
        check_report(&load_recipes(&recipes_dir).unwrap()),
        vec!["All recipes are valid!"]
    );

    std::fs::write(recipes_dir.join("scribble.txt"), "Title: Scribble\n").unwrap();
    let report = check_report(&load_recipes(&recipes_dir).unwrap());
    assert_eq!(
        report,
        vec!["Some recipes appear malformed:", " - scribble.txt"]
    );
}

#[test]
fn render_recipe_detail_shows_every_section() {
    let (_dir, recipes_dir) = seeded_dir();
    let recipes = load_recipes(&recipes_dir).unwrap();
    let recipe = resolve_recipe("chicken soup", &recipes).unwrap();

    let detail = render_recipe_detail(&recipe);
    assert!(detail.starts_with("Chicken Soup\n"));
    assert!(detail.contains("Tags: dinner, soup"));
    assert!(detail.contains(" - 1_onion\n"));
    assert!(detail.contains("Steps:\n1. Chop\n2. Cook\n"));
    assert!(!detail.contains("malformed"));
}

#[test]
fn appearance_commands_update_settings() {
    let mut settings = Settings::default();

    apply_appearance(Some(AppearanceCommands::Scale { scale: ScaleArg::Large }), &mut settings);
    apply_appearance(Some(AppearanceCommands::Font { font: FontArg::Serif }), &mut settings);
    apply_appearance(Some(AppearanceCommands::DarkMode), &mut settings);
    apply_appearance(Some(AppearanceCommands::Show), &mut settings);

    assert_eq!(settings.font_size, 12);
    assert_eq!(settings.font_family, "Times New Roman");
    assert!(settings.is_dark_mode);
    assert!(!settings.font_bold);

    let lines = describe_appearance(&settings);
    assert!(lines.contains(&"Size:         12 pt (large)".to_string()));
    assert!(lines.contains(&"Font:         Times New Roman (serif)".to_string()));
}

#[test]
fn run_export_writes_json_file() {
    let (dir, recipes_dir) = seeded_dir();
    let output_path = dir.path().join("export.json");

    run_export(ExportFormat::Json, Some(&output_path), &recipes_dir).unwrap();

    let exported = std::fs::read_to_string(&output_path).unwrap();
    assert!(exported.contains("\"title\": \"Apple Pie\""));
    assert!(exported.contains("\"file\": \"chicken_soup.txt\""));
}

#[test]
fn run_export_into_directory_uses_suggested_name() {
    let (dir, recipes_dir) = seeded_dir();
    let output_dir = dir.path().join("backups");
    std::fs::create_dir(&output_dir).unwrap();

    run_export(ExportFormat::Markdown, Some(&output_dir), &recipes_dir).unwrap();

    let entries = std::fs::read_dir(&output_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].starts_with("ambrosia-export-"));
    assert!(entries[0].ends_with(".md"));
}

#[test]
fn run_completions_writes_bash_script_file() {
    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("ambrosia.bash");

    run_completions(CompletionShell::Bash, Some(&output_path)).unwrap();

    let script = std::fs::read_to_string(&output_path).unwrap();
    assert!(script.contains("_ambrosia()"));
    assert!(script.contains("complete -F _ambrosia"));
}

#[test]
fn run_completions_into_directory_uses_shell_file_name() {
    let dir = TempDir::new().unwrap();

    run_completions(CompletionShell::Zsh, Some(dir.path())).unwrap();
    run_completions(CompletionShell::Fish, Some(dir.path())).unwrap();

    let zsh = std::fs::read_to_string(dir.path().join("_ambrosia")).unwrap();
    assert!(zsh.contains("#compdef ambrosia"));
    let fish = std::fs::read_to_string(dir.path().join("ambrosia.fish")).unwrap();
    assert!(fish.contains("complete -c ambrosia"));
}

#[test]
fn run_completions_creates_missing_parent_folders() {
    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("share").join("completions").join("ambrosia.bash");

    run_completions(CompletionShell::Bash, Some(&output_path)).unwrap();

    assert!(output_path.is_file());
}
