//! Import, restore, export and reset of the stored library.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Args;
use vocab_core::{import_file, Library, ReviewSession};

use super::{App, CliResult};

#[derive(Args)]
pub struct ImportArgs {
    /// Text file with articles and word lists
    pub file: PathBuf,
    /// Drop existing progress instead of keeping it
    #[arg(long)]
    pub reset_progress: bool,
}

#[derive(Args)]
pub struct RestoreArgs {
    /// JSON snapshot (as exported by `export` or by the browser app)
    pub file: PathBuf,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

pub fn import(app: &App, args: ImportArgs) -> CliResult {
    let batch = import_file(&args.file)?;
    let preserve = app.config.import.preserve_progress && !args.reset_progress;

    let current = app.db.load_library()?.unwrap_or_default();
    let library = current.replace_catalog(batch, preserve);

    // The old queue may reference words that are gone.
    let mut session = app.session()?;
    let event = session.clear();
    tracing::debug!(?event, "session discarded after import");
    app.save(&library, &session)?;

    println!(
        "imported {} articles, {} words ({} progress records kept)",
        library.articles.len(),
        library.words.len(),
        library.progress.len()
    );
    Ok(())
}

pub fn restore(app: &App, args: RestoreArgs) -> CliResult {
    let content = std::fs::read_to_string(&args.file)?;
    let library: Library = serde_json::from_str(&content)?;
    app.save(&library, &ReviewSession::new())?;
    println!(
        "restored {} words, {} progress records",
        library.words.len(),
        library.progress.len()
    );
    Ok(())
}

pub fn export(app: &App, args: ExportArgs) -> CliResult {
    let library = app.library()?;
    let json = serde_json::to_string_pretty(&library)?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, json)?;
            eprintln!("snapshot written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn reset(app: &App, args: ResetArgs) -> CliResult {
    if !args.yes && !confirm("Delete all words and progress?")? {
        println!("aborted");
        return Ok(());
    }
    app.db.reset()?;
    println!("all data cleared");
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool, std::io::Error> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
