//! Review session commands.
//!
//! Every invocation loads the library and the in-flight session, performs
//! its transition, and saves both back. The session therefore survives
//! between `answer` calls just as it does inside the interactive loop.

use std::io::{BufRead, Write};

use clap::Args;
use vocab_core::{Library, Outcome, ReviewSession, SessionEvent, SessionState};

use super::context::print_context;
use super::{format_time, now_millis, App, CliResult};

#[derive(Args)]
pub struct QueueArgs {
    /// Print the remaining queue as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct AnswerArgs {
    /// known | unknown (also y / n)
    pub outcome: Outcome,
    /// Print the receipt as JSON
    #[arg(long)]
    pub json: bool,
}

fn print_event(event: &SessionEvent) {
    match event {
        SessionEvent::QueueBuilt { due, new, .. } => {
            println!("new session: {due} due, {new} new");
        }
        SessionEvent::NothingToReview { .. } => {
            println!("Nothing to review right now. Come back later or import more words.");
        }
        SessionEvent::QueueExhausted { reviewed, .. } => {
            println!("Session complete: {reviewed} words reviewed.");
        }
        SessionEvent::WordReviewed { .. } | SessionEvent::QueueCleared => {}
    }
}

/// Build a queue if the session is empty, printing what happened.
fn ensure(session: &mut ReviewSession, library: &Library, json: bool) {
    if let Some(event) = session.ensure_queue(&library.words, &library.progress, now_millis()) {
        if !json {
            print_event(&event);
        }
    }
}

pub fn queue(app: &App, args: QueueArgs) -> CliResult {
    let library = app.library()?;
    let mut session = app.session()?;
    ensure(&mut session, &library, args.json);
    app.db.save_session(&session)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(session.remaining())?);
        return Ok(());
    }

    if let Some((pos, len)) = session.position() {
        for (i, word) in session.remaining().iter().enumerate() {
            let marker = if i == 0 { ">" } else { " " };
            println!("{marker} {:>3}/{len}  {}", pos + i, word.id);
        }
    }
    Ok(())
}

pub fn refresh(app: &App) -> CliResult {
    let library = app.library()?;
    let mut session = app.session()?;
    let event = session.refresh(&library.words, &library.progress, now_millis());
    print_event(&event);
    app.db.save_session(&session)?;
    Ok(())
}

pub fn answer(app: &App, args: AnswerArgs) -> CliResult {
    let mut library = app.library()?;
    let mut session = app.session()?;
    ensure(&mut session, &library, args.json);

    if session.state() == SessionState::Empty {
        app.db.save_session(&session)?;
        return Err("nothing to review right now".into());
    }

    let receipt = session.review(&library.progress, args.outcome, now_millis())?;
    library = library.with_progress(receipt.store.clone());
    app.save(&library, &session)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    } else {
        println!(
            "{} -> level {} ({})",
            receipt.word.id,
            receipt.progress.level,
            describe_next(&receipt.progress.next_review)
        );
        if let Some(event) = &receipt.exhausted {
            print_event(event);
        }
    }
    Ok(())
}

fn describe_next(next: &vocab_core::NextReview) -> String {
    match next.due_at() {
        Some(at) => format!("next review {}", format_time(at)),
        None => "graduated".to_string(),
    }
}

enum Prompt {
    Known,
    Unknown,
    Show,
    Context,
    Quit,
    Unrecognized,
}

fn parse_prompt(line: &str) -> Prompt {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "k" | "known" => Prompt::Known,
        "n" | "u" | "unknown" => Prompt::Unknown,
        "s" | "" => Prompt::Show,
        "c" | "context" => Prompt::Context,
        "q" | "quit" | "exit" => Prompt::Quit,
        _ => Prompt::Unrecognized,
    }
}

/// Interactive loop on stdin.
pub fn interactive(app: &App) -> CliResult {
    let mut library = app.library()?;
    let mut session = app.session()?;
    let reveal = app.config.session.reveal_translation;

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = std::io::stdout();

    loop {
        ensure(&mut session, &library, false);
        let (Some(word), Some((pos, len))) = (session.current().cloned(), session.position()) else {
            if let Some(at) = vocab_core::ProgressSummary::compute(
                &library.words,
                &library.progress,
                now_millis(),
            )
            .next_due
            {
                println!("Next word is due at {}.", format_time(at));
            }
            break;
        };

        println!();
        println!("[{pos}/{len}]  {}", word.id);
        let mut shown = reveal;
        if shown {
            println!("        {}", word.translation);
        }

        let outcome = loop {
            if shown {
                print!("known? (y)es / (n)o / (c)ontext / (q)uit > ");
            } else {
                print!("(s)how meaning / (c)ontext / (y)es / (n)o / (q)uit > ");
            }
            stdout.flush()?;

            let Some(line) = lines.next() else {
                break None;
            };
            match parse_prompt(&line?) {
                Prompt::Known => break Some(Outcome::Known),
                Prompt::Unknown => break Some(Outcome::Unknown),
                Prompt::Show => {
                    shown = true;
                    println!("        {}", word.translation);
                }
                Prompt::Context => {
                    print_context(&library, &word, app.config.session.show_context_hint)
                }
                Prompt::Quit => break None,
                Prompt::Unrecognized => println!("?"),
            }
        };

        let Some(outcome) = outcome else {
            break;
        };

        let receipt = session.review(&library.progress, outcome, now_millis())?;
        library = library.with_progress(receipt.store);
        app.save(&library, &session)?;
        println!(
            "  -> level {} ({})",
            receipt.progress.level,
            describe_next(&receipt.progress.next_review)
        );
        if let Some(event) = &receipt.exhausted {
            print_event(event);
        }
    }

    app.db.save_session(&session)?;
    Ok(())
}
