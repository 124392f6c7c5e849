use anyhow::Result;
use clap::Parser;
use tracing::error;

use clickstats::utils::{setup_logging, validate_args};
use clickstats::{analyze_click_log, print_analysis_results, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    validate_args(&args)?;

    match analyze_click_log(&args) {
        Ok(result) => {
            print_analysis_results(&result, &args);
            Ok(())
        }
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
