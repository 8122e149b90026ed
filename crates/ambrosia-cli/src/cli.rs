use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "ambrosia")]
#[command(about = "Browse, search, and edit a folder of plain-text recipes")]
#[command(version)]
#[command(after_help = "\
Recipes are plain-text files in the recipes folder, one per title.
Search queries: `soup+garlic` needs every term, `soup,stew` any term,
anything else is matched as one phrase.

Paths default to ./recipes and ./settings.json; override them with
--recipes-dir/--settings or AMBROSIA_RECIPES_DIR/AMBROSIA_SETTINGS.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Folder holding the recipe files
    #[arg(long, global = true, value_name = "PATH")]
    pub recipes_dir: Option<PathBuf>,

    /// Path to the settings file
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all recipes
    #[command(alias = "ls")]
    List {
        /// Only recipes carrying this tag (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search recipes: `a+b` matches all terms, `a,b` any term, otherwise the
    /// whole phrase
    Search {
        /// Search query
        query: String,
        /// Only recipes carrying this tag (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a recipe in full
    Show {
        /// File name, title, or unique prefix of either
        recipe: String,
    },
    /// Create a new recipe (opens $EDITOR when no --title is given)
    #[command(alias = "new")]
    Add {
        #[command(flatten)]
        fields: RecipeFields,
        /// Replace an existing recipe file with the same name
        #[arg(long)]
        force: bool,
    },
    /// Edit a recipe (opens $EDITOR when no field flags are given)
    Edit {
        /// File name, title, or unique prefix of either
        recipe: String,
        #[command(flatten)]
        fields: RecipeFields,
    },
    /// Delete a recipe file
    #[command(alias = "rm")]
    Delete {
        /// File name, title, or unique prefix of either
        recipe: String,
    },
    /// Report malformed recipe files
    Check,
    /// List known tags
    Tags,
    /// Show or change appearance settings
    Appearance {
        #[command(subcommand)]
        command: Option<AppearanceCommands>,
    },
    /// Export all recipes
    Export {
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Optional output file or directory (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// File or directory to write the script to (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

/// Recipe field values given on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct RecipeFields {
    /// Recipe title
    #[arg(long)]
    pub title: Option<String>,
    /// Description (at least 30 characters)
    #[arg(short, long)]
    pub description: Option<String>,
    /// Ingredient (repeatable, in order)
    #[arg(short, long = "ingredient", value_name = "INGREDIENT")]
    pub ingredients: Vec<String>,
    /// Step (repeatable, in order)
    #[arg(short, long = "step", value_name = "STEP")]
    pub steps: Vec<String>,
    /// Tag (repeatable)
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
    /// Additional comma-separated tags
    #[arg(long = "tags", value_name = "TAGS")]
    pub tag_list: Option<String>,
}

impl RecipeFields {
    /// Whether no field was given at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.ingredients.is_empty()
            && self.steps.is_empty()
            && self.tags.is_empty()
            && self.tag_list.is_none()
    }

    /// Whether any tag option was given
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty() || self.tag_list.is_some()
    }
}

#[derive(Subcommand)]
pub enum AppearanceCommands {
    /// Show current appearance settings
    Show,
    /// Set the text scale
    Scale {
        #[arg(value_enum)]
        scale: ScaleArg,
    },
    /// Set the font family
    Font {
        #[arg(value_enum)]
        font: FontArg,
    },
    /// Toggle bold text
    Bold,
    /// Toggle dark mode
    DarkMode,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ScaleArg {
    Small,
    Medium,
    Large,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum FontArg {
    Serif,
    Sans,
    Script,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Markdown,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

impl CompletionShell {
    /// File name the shell looks for when loading completions for `ambrosia`
    pub const fn script_file_name(self) -> &'static str {
        match self {
            Self::Bash => "ambrosia.bash",
            Self::Zsh => "_ambrosia",
            Self::Fish => "ambrosia.fish",
        }
    }
}
