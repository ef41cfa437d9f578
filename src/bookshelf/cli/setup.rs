use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookshelf", bin_name = "bookshelf", version)]
#[command(about = "Interactive catalog for your home library", long_about = None)]
pub struct Cli {
    /// Data file to use instead of the configured one
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory holding config.json and the default data file
    #[arg(long, value_name = "DIR", env = "BOOKSHELF_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Books per page in lists
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,

    /// Only write the data file when the program exits
    #[arg(long)]
    pub save_on_exit: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
