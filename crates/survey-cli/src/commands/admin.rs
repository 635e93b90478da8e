//! Stats and clear commands

use clap::Args;
use std::io::{self, BufRead, Write};
use survey_core::export::format_submitted_on;
use survey_engine::{clear_all, Confirmation};

use super::{CommandResult, Context};

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

pub fn execute_stats(ctx: &Context) -> CommandResult {
    let stats = ctx.store.stats()?;
    println!("Total responses: {}", stats.total);
    match stats.latest {
        Some(ts) => println!("Latest response: {}", format_submitted_on(&ts)),
        None => println!("Latest response: none"),
    }
    Ok(())
}

pub fn execute_clear(args: ClearArgs, ctx: &mut Context) -> CommandResult {
    let confirmation = if args.yes {
        Confirmation::Confirmed
    } else {
        let count = ctx.store.len()?;
        prompt(&format!(
            "This will permanently delete all {} survey response(s). Continue? [y/N] ",
            count
        ))?
    };

    let removed = clear_all(&mut ctx.store, confirmation)?;
    println!("Cleared {} response(s)", removed);
    Ok(())
}

/// Ask on stdin; anything but y/yes (including EOF) declines
fn prompt(question: &str) -> io::Result<Confirmation> {
    eprint!("{}", question);
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(Confirmation::from(answer == "y" || answer == "yes"))
}
