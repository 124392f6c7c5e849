pub mod analysis;
pub mod args;
pub mod errors;
pub mod loader;
pub mod stats;
pub mod utils;

pub use analysis::{analyze_click_log, print_analysis_results, render_report};
pub use args::Args;
pub use errors::InputError;
pub use loader::{load_click_log, ClickRecord};
pub use stats::{count_by, date_range, ranked, top_k, AnalysisResult, ClickStats, Field};
