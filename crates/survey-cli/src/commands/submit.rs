//! Submit command
//!
//! Usage: survey submit --field age=15-17 --field favoriteSubjects=Math --field favoriteSubjects=Art

use clap::Args;
use survey_core::export::to_rows;
use survey_core::intake::progress;
use survey_core::model::FormFields;
use survey_engine::commands::admin::export_record;
use survey_engine::{submit, DispatchOutcome, NotifyTarget};

use super::{CommandResult, Context};
use crate::outbox::OutboxNotifier;

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Answer as KEY=VALUE; repeat a key for multi-select questions
    #[arg(long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Also export the response as a Question/Answer workbook
    #[arg(long)]
    pub export: bool,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

pub fn execute(args: SubmitArgs, ctx: &mut Context) -> CommandResult {
    let fields = FormFields::from_pairs(args.fields);
    let required = ctx.config.required_keys();

    let completion = progress(&fields, &required);
    if completion < 100.0 {
        eprintln!("Survey {:.0}% complete", completion);
    }

    let outbox = OutboxNotifier::new(
        ctx.config.data_dir.join("outbox"),
        ctx.config.notifier.clone(),
    );
    let target = ctx
        .config
        .admin_email
        .as_deref()
        .map(|recipient| NotifyTarget {
            notifier: &outbox,
            recipient,
        });

    let submission = match submit(&mut ctx.store, fields, &required, target) {
        Ok(submission) => submission,
        Err(e) => {
            for field in e.missing().unwrap_or_default() {
                eprintln!("  {}: {}", field.key, field.message);
            }
            return Err(e.into());
        }
    };

    println!("Response recorded:");
    println!("  id: {}", submission.record.id);
    for (label, value) in to_rows(&submission.record) {
        println!("  {}: {}", label, value);
    }

    if let Some(e) = &submission.persist_error {
        eprintln!("Warning: response was not saved: {}", e);
    }
    match &submission.dispatch {
        DispatchOutcome::Sent => println!("Notification queued for the administrator"),
        DispatchOutcome::Failed(reason) => eprintln!("Warning: notification failed: {}", reason),
        DispatchOutcome::Skipped => {}
    }

    if args.export {
        let report = export_record(&submission.record, &mut ctx.writer, chrono::Utc::now())?;
        println!("Exported {}", report.path.display());
    }

    Ok(())
}
