use std::path::PathBuf;

use clap::Parser;

/// File name of the IBM HR Analytics attrition dataset.
pub const DEFAULT_DATA_FILE: &str = "WA_Fn-UseC_-HR-Employee-Attrition.csv";

/// Startup configuration, from the command line or environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "attrition-dash")]
#[command(about = "Interactive HR attrition dashboard")]
#[command(version)]
pub struct Config {
    /// CSV file with the employee records
    #[arg(env = "ATTRITION_DATA", default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Directory the export dialogs open in
    #[arg(long, env = "ATTRITION_EXPORT_DIR")]
    pub export_dir: Option<PathBuf>,
}
