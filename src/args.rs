use clap::Parser;
use std::path::PathBuf;

/// Record sales at the terminal, import sales from CSV files and save the
/// list of imported files.
#[derive(Parser, Debug)]
pub struct Args {
    /// Directory that holds the import files and the saved registry
    #[clap(long, default_value = "sales_files")]
    pub data_dir: PathBuf,
}

pub fn parse() -> Args {
    Args::parse()
}
