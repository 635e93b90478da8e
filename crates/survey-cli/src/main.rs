//! School Life Survey CLI
//!
//! Command-line interface for collecting and administering survey responses

use clap::{Parser, Subcommand};

mod commands;
mod outbox;

use commands::GlobalArgs;

#[derive(Debug, Parser)]
#[command(name = "survey")]
#[command(about = "School Life Survey - response collection and export", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Record one survey response
    Submit(commands::submit::SubmitArgs),
    /// Export one stored response as a Question/Answer workbook
    Export(commands::export::ExportArgs),
    /// Export every stored response as one workbook
    ExportAll,
    /// Show response count and latest submission time
    Stats,
    /// Permanently delete every stored response
    Clear(commands::admin::ClearArgs),
}

fn main() {
    let cli = Cli::parse();
    survey_core::logging_facility::init(cli.global.log_profile);

    let result = commands::Context::open(&cli.global).and_then(|mut ctx| match cli.command {
        Commands::Submit(args) => commands::submit::execute(args, &mut ctx),
        Commands::Export(args) => commands::export::execute(args, &ctx),
        Commands::ExportAll => commands::export::execute_all(&ctx),
        Commands::Stats => commands::admin::execute_stats(&ctx),
        Commands::Clear(args) => commands::admin::execute_clear(args, &mut ctx),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
