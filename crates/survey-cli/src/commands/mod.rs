//! Subcommand implementations and the state they share

pub mod admin;
pub mod export;
pub mod submit;

use clap::Args;
use std::path::PathBuf;
use survey_core::logging_facility::Profile;
use survey_core::SurveyConfig;
use survey_engine::XlsxSheetWriter;
use survey_store::{FsSlots, ResponseStore};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Directory holding stored responses (overrides the config file)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory exported workbooks are written to
    #[arg(long, global = true, default_value = ".")]
    pub out_dir: PathBuf,

    /// Log output: dev, prod or test
    #[arg(long, global = true, default_value = "dev")]
    pub log_profile: Profile,
}

/// Resolved configuration plus the store and writer built from it
pub struct Context {
    pub config: SurveyConfig,
    pub store: ResponseStore<FsSlots>,
    pub writer: XlsxSheetWriter,
}

impl Context {
    pub fn open(global: &GlobalArgs) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = match &global.config {
            Some(path) => SurveyConfig::load(path)?,
            None => SurveyConfig::default(),
        };
        if let Some(dir) = &global.data_dir {
            config.data_dir = dir.clone();
        }

        let store = ResponseStore::with_key(
            FsSlots::new(config.data_dir.clone()),
            config.storage_key.clone(),
        );
        let writer = XlsxSheetWriter::new(global.out_dir.clone());

        Ok(Self {
            config,
            store,
            writer,
        })
    }
}
