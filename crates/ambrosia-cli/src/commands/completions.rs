use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::aot::Generator;
use clap_complete::{generate, shells};

use crate::cli::{Cli, CompletionShell};
use crate::error::CliError;

const BIN_NAME: &str = "ambrosia";

/// Print the completion script, or write it to `output_path`. A directory
/// receives the shell's conventional file name.
pub fn run_completions(shell: CompletionShell, output_path: Option<&Path>) -> Result<(), CliError> {
    let script = completion_script(shell);

    let Some(output_path) = output_path else {
        io::stdout().write_all(&script)?;
        return Ok(());
    };

    let target = script_target(shell, output_path);
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&target, &script)?;
    tracing::debug!(path = %target.display(), ?shell, "Completion script written");
    println!("{}", target.display());
    Ok(())
}

fn script_target(shell: CompletionShell, output_path: &Path) -> PathBuf {
    if output_path.is_dir() {
        output_path.join(shell.script_file_name())
    } else {
        output_path.to_path_buf()
    }
}

fn completion_script(shell: CompletionShell) -> Vec<u8> {
    match shell {
        CompletionShell::Bash => render(shells::Bash),
        CompletionShell::Zsh => render(shells::Zsh),
        CompletionShell::Fish => render(shells::Fish),
    }
}

fn render<G: Generator>(generator: G) -> Vec<u8> {
    let mut buffer = Vec::new();
    generate(generator, &mut Cli::command(), BIN_NAME, &mut buffer);
    buffer
}
