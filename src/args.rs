use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "clickstats",
    about = "Analyze URL shortener click logs for per-link clicks and top referrers",
    version,
    long_about = None
)]
pub struct Args {
    /// Path to the click log CSV file
    #[arg(default_value = "logs.csv")]
    pub log_file: PathBuf,

    /// Number of top referrers to display
    #[arg(short, long, default_value_t = 5)]
    pub top: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
