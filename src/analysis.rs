use anyhow::Result;
use std::time::Instant;
use tracing::info;

use crate::stats::{self, AnalysisResult, ClickStats, Field};
use crate::{loader, utils, Args};

pub fn analyze_click_log(args: &Args) -> Result<AnalysisResult> {
    let total_start_time = Instant::now();
    info!("Starting click log analysis");

    let records = loader::load_click_log(&args.log_file)?;

    let date_range = stats::date_range(&records);
    let link_counts = stats::count_by(&records, Field::ShortCode);
    let referrer_counts = stats::count_by(&records, Field::Referrer);

    let total_time = total_start_time.elapsed();
    info!(
        total_clicks = records.len(),
        unique_links = link_counts.len(),
        unique_referrers = referrer_counts.len(),
        duration_ms = total_time.as_millis(),
        "Analysis completed successfully"
    );

    Ok(AnalysisResult {
        date_range,
        stats: ClickStats {
            total_clicks: records.len(),
            link_counts,
            referrer_counts,
        },
    })
}

/// Renders (value, count) pairs as report lines, one per pair, in the order
/// given.
pub fn render_report(entries: &[(String, u32)]) -> String {
    let mut out = String::new();
    for (value, count) in entries {
        out.push_str(&format!("- {}: {}\n", value, utils::format_number(*count)));
    }
    out
}

pub fn print_analysis_results(result: &AnalysisResult, args: &Args) {
    let link_report = render_report(&stats::ranked(&result.stats.link_counts));
    let referrer_report = render_report(&stats::top_k(&result.stats.referrer_counts, args.top));

    println!("Clicks per link:");
    print!("{}", link_report);
    println!();
    println!("Top referrers:");
    print!("{}", referrer_report);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_line_per_entry_in_given_order() {
        let entries = vec![("google.com".to_string(), 2u32), ("bing.com".to_string(), 1)];
        assert_eq!(render_report(&entries), "- google.com: 2\n- bing.com: 1\n");
    }

    #[test]
    fn renders_empty_input_as_empty_text() {
        assert_eq!(render_report(&[]), "");
    }

    #[test]
    fn groups_thousands_in_counts() {
        let entries = vec![("google.com".to_string(), 1234567u32)];
        assert_eq!(render_report(&entries), "- google.com: 1,234,567\n");
    }
}
