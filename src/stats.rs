use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{info, warn};

use crate::loader::ClickRecord;

/// Which column of the click log an aggregation groups on. Columns are fixed
/// at compile time; there is no access by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Timestamp,
    ShortCode,
    Ip,
    Referrer,
    UserAgent,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Timestamp => "timestamp",
            Field::ShortCode => "short_code",
            Field::Ip => "ip",
            Field::Referrer => "referrer",
            Field::UserAgent => "user_agent",
        }
    }

    fn value<'a>(self, record: &'a ClickRecord) -> &'a str {
        match self {
            Field::Timestamp => &record.timestamp,
            Field::ShortCode => &record.short_code,
            Field::Ip => &record.ip,
            Field::Referrer => &record.referrer,
            Field::UserAgent => &record.user_agent,
        }
    }
}

#[derive(Debug)]
pub struct ClickStats {
    pub total_clicks: usize,
    pub link_counts: HashMap<String, u32>,
    pub referrer_counts: HashMap<String, u32>,
}

#[derive(Debug)]
pub struct AnalysisResult {
    pub date_range: (String, String, i64),
    pub stats: ClickStats,
}

/// Counts how often each distinct value of `field` occurs. Every record
/// contributes exactly one count, so the counts sum to the record total.
pub fn count_by(records: &[ClickRecord], field: Field) -> HashMap<String, u32> {
    let start_time = Instant::now();

    let mut counts: HashMap<String, u32> = HashMap::new();
    for record in records {
        *counts.entry(field.value(record).to_string()).or_insert(0) += 1;
    }

    info!(
        action = "complete",
        component = "frequency_count",
        field = field.name(),
        distinct_values = counts.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Frequency count completed"
    );
    counts
}

/// All entries sorted by descending count. Ties fall back to the value so
/// repeated runs print identically.
pub fn ranked(counts: &HashMap<String, u32>) -> Vec<(String, u32)> {
    let mut entries: Vec<(String, u32)> = counts
        .iter()
        .map(|(value, count)| (value.clone(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

/// The k highest-count entries, descending. Asking for more entries than the
/// table holds returns all of them; an empty table returns nothing.
pub fn top_k(counts: &HashMap<String, u32>, k: usize) -> Vec<(String, u32)> {
    let mut entries = ranked(counts);
    entries.truncate(k);
    entries
}

/// Earliest and latest click date plus the span in days. The backend writes
/// timestamps as RFC 3339; anything else is skipped and counted.
pub fn date_range(records: &[ClickRecord]) -> (String, String, i64) {
    let start_time = Instant::now();

    let mut earliest: Option<DateTime<FixedOffset>> = None;
    let mut latest: Option<DateTime<FixedOffset>> = None;
    let mut unparsed = 0u32;

    for record in records {
        match DateTime::parse_from_rfc3339(&record.timestamp) {
            Ok(ts) => {
                if earliest.map_or(true, |e| ts < e) {
                    earliest = Some(ts);
                }
                if latest.map_or(true, |l| ts > l) {
                    latest = Some(ts);
                }
            }
            Err(_) => unparsed += 1,
        }
    }

    if unparsed > 0 {
        warn!(
            component = "date_range",
            unparsed_timestamps = unparsed,
            "Skipped timestamps that are not RFC 3339"
        );
    }

    if let (Some(earliest), Some(latest)) = (earliest, latest) {
        let earliest_date = earliest.format("%B %-d, %Y").to_string();
        let latest_date = latest.format("%B %-d, %Y").to_string();
        let days_between = (latest - earliest).num_days();

        info!(
            action = "complete",
            component = "date_range",
            earliest_date = %earliest_date,
            latest_date = %latest_date,
            days_between,
            duration_ms = start_time.elapsed().as_millis(),
            "Click date range computed"
        );
        (earliest_date, latest_date, days_between)
    } else {
        warn!(
            component = "date_range",
            duration_ms = start_time.elapsed().as_millis(),
            "No click date data found"
        );
        (
            "No data available".to_string(),
            "No data available".to_string(),
            0,
        )
    }
}
