use crate::cli::Command;
use anyhow::{Context, Result};
use diffsift_core::Config;
use diffsift_diff::{
    is_only_line_ending_diff, normalize_line_endings, normalize_unified_diff, process_diff,
    CleanOptions,
};
use std::fs::{self, File};
use std::io::{self, BufReader, Read, Write};
use std::path::Path;
use tracing::debug;

/// Exit code for `check` when the diff carries real changes
pub const EXIT_HAS_CHANGES: i32 = 1;

pub fn execute(command: Command, config: &Config) -> Result<i32> {
    match command {
        Command::Clean {
            input,
            per_file,
            json,
        } => {
            let options = CleanOptions {
                per_file: per_file || config.clean_config().per_file,
                json,
            };
            cmd_clean(input.as_deref(), &options)
        }
        Command::Check { input } => cmd_check(input.as_deref()),
        Command::Normalize { input } => cmd_normalize(input.as_deref()),
        Command::Compare {
            original,
            modified,
            diff,
        } => cmd_compare(&original, &modified, diff.as_deref()),
    }
}

fn cmd_clean(input: Option<&Path>, options: &CleanOptions) -> Result<i32> {
    debug!(?options, "clean");
    let stdout = io::stdout();
    let result = match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open diff file: {}", path.display()))?;
            process_diff(BufReader::new(file), stdout.lock(), options)
        }
        None => process_diff(io::stdin().lock(), stdout.lock(), options),
    };
    result.context("Failed to clean diff")?;
    Ok(0)
}

fn cmd_check(input: Option<&Path>) -> Result<i32> {
    let diff = read_input(input)?;
    if is_only_line_ending_diff(&diff) {
        println!("line-ending-only");
        Ok(0)
    } else {
        println!("has-changes");
        Ok(EXIT_HAS_CHANGES)
    }
}

fn cmd_normalize(input: Option<&Path>) -> Result<i32> {
    let text = read_input(input)?;
    write_stdout(&normalize_line_endings(&text))?;
    Ok(0)
}

fn cmd_compare(original: &Path, modified: &Path, diff: Option<&Path>) -> Result<i32> {
    let original_content = fs::read_to_string(original)
        .with_context(|| format!("Failed to read original file: {}", original.display()))?;
    let modified_content = fs::read_to_string(modified)
        .with_context(|| format!("Failed to read modified file: {}", modified.display()))?;
    let diff = read_input(diff)?;

    write_stdout(&normalize_unified_diff(
        &diff,
        &original_content,
        &modified_content,
    ))?;
    Ok(0)
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
