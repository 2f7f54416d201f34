use std::io::IsTerminal;

use clap::Args;
use vocab_core::{ArticleContext, Library, Segment, Word};

use super::{App, CliResult};

#[derive(Args)]
pub struct ContextArgs {
    /// Word to look up (defaults to the word under review)
    pub word: Option<String>,
    /// Print the context as JSON
    #[arg(long)]
    pub json: bool,
}

/// Print the article a word came from with the word marked.
pub fn print_context(library: &Library, word: &Word, hint: bool) {
    let Some(ctx) = ArticleContext::for_word(library, word) else {
        println!("(source article not found)");
        return;
    };

    let color = std::io::stdout().is_terminal();
    println!();
    println!("── {} ──", ctx.title);
    if !ctx.date.is_empty() {
        println!("{}", ctx.date);
    }
    println!();

    let mut body = String::new();
    for segment in &ctx.segments {
        match segment {
            Segment::Plain(text) => body.push_str(text),
            Segment::Match(text) if color => body.push_str(&format!("\x1b[1;30;43m{text}\x1b[0m")),
            Segment::Match(text) => body.push_str(&format!("[{text}]")),
        }
    }
    println!("{body}");

    if hint {
        println!();
        println!("上下文能帮助你更好地理解单词用法");
    }
}

pub fn run(app: &App, args: ContextArgs) -> CliResult {
    let library = app.library()?;

    let word = match args.word {
        Some(id) => library
            .word(&id)
            .cloned()
            .ok_or_else(|| format!("unknown word: {id}"))?,
        None => app
            .session()?
            .current()
            .cloned()
            .ok_or("no word under review; pass a word explicitly")?,
    };

    if args.json {
        let ctx = ArticleContext::for_word(&library, &word)
            .ok_or_else(|| format!("source article for '{}' not found", word.id))?;
        println!("{}", serde_json::to_string_pretty(&ctx)?);
    } else {
        print_context(&library, &word, app.config.session.show_context_hint);
    }
    Ok(())
}
