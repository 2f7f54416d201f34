use clap::Args;
use vocab_core::{MasteryLevel, ProgressSummary};

use super::{format_time, now_millis, App, CliResult};

#[derive(Args)]
pub struct StatsArgs {
    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(app: &App, args: StatsArgs) -> CliResult {
    let library = app.library()?;
    let summary = ProgressSummary::compute(&library.words, &library.progress, now_millis());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("words:      {}", summary.total);
    println!("due now:    {}", summary.due);
    println!("new:        {}", summary.new);
    println!("waiting:    {}", summary.scheduled);
    println!(
        "graduated:  {} ({:.1}%)",
        summary.graduated,
        summary.graduated_pct()
    );
    for level in MasteryLevel::ALL {
        println!("  level {level}: {}", summary.by_level[level.as_u8() as usize]);
    }
    if let Some(at) = summary.next_due {
        println!("next due:   {}", format_time(at));
    }
    Ok(())
}
