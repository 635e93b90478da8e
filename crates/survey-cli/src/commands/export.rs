//! Export commands
//!
//! Usage: survey export --id <ID> | survey export-all

use clap::Args;
use survey_engine::{export_all, export_by_id};

use super::{CommandResult, Context};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Id of the stored response
    #[arg(long)]
    pub id: String,
}

pub fn execute(args: ExportArgs, ctx: &Context) -> CommandResult {
    let mut writer = ctx.writer.clone();
    let report = export_by_id(&ctx.store, &args.id, &mut writer, chrono::Utc::now())?;
    println!("Exported {}", report.path.display());
    Ok(())
}

pub fn execute_all(ctx: &Context) -> CommandResult {
    let mut writer = ctx.writer.clone();
    let report = export_all(&ctx.store, &mut writer, chrono::Utc::now())?;
    println!(
        "Exported {} response(s) to {}",
        report.record_count,
        report.path.display()
    );
    Ok(())
}
