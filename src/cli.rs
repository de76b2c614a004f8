use clap::Parser;
use std::path::PathBuf;

/// Source directory used when none is given on the command line.
pub const DEFAULT_SOURCE_DIR: &str = "/data/bie-index/import/backbone";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the backbone export; input files are read from it
    /// and the rewritten files are placed next to them.
    #[arg(value_name = "SOURCE_DIR", default_value = DEFAULT_SOURCE_DIR)]
    pub source_dir: PathBuf,
}
