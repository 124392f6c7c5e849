use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::errors::InputError;

/// Column names the click log header must carry, in order.
pub const EXPECTED_HEADER: [&str; 5] = ["timestamp", "short_code", "ip", "referrer", "user_agent"];

/// One click event as written by the shortener backend. Every field is plain
/// text; nothing beyond CSV well-formedness is validated here.
#[derive(Debug, Clone, Deserialize)]
pub struct ClickRecord {
    pub timestamp: String,
    pub short_code: String,
    pub ip: String,
    pub referrer: String,
    pub user_agent: String,
}

/// Reads the whole click log into memory. Strict on structure: the header
/// must match [`EXPECTED_HEADER`] exactly and every data row must be a
/// well-formed five-column record, otherwise the load fails with the
/// offending row number.
pub fn load_click_log(path: &Path) -> Result<Vec<ClickRecord>, InputError> {
    let start_time = Instant::now();
    info!(action = "start", component = "log_loading", path = ?path, "Loading click log");

    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(BufReader::new(file));

    let headers = reader.headers().map_err(|e| InputError::Malformed {
        row: 1,
        message: e.to_string(),
    })?;
    if !headers.iter().eq(EXPECTED_HEADER) {
        return Err(InputError::HeaderMismatch {
            found: headers.iter().map(String::from).collect(),
        });
    }

    let mut records = Vec::new();
    for (row_idx, result) in reader.deserialize::<ClickRecord>().enumerate() {
        // Row numbers are 1-based and row 1 is the header
        let row_num = row_idx + 2;
        let record = result.map_err(|e| InputError::Malformed {
            row: row_num,
            message: e.to_string(),
        })?;
        records.push(record);
    }

    let load_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "log_loading",
        record_count = records.len(),
        duration_ms = load_time.as_millis(),
        "Click log loaded"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_log(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_well_formed_log() {
        let file = write_log(
            "timestamp,short_code,ip,referrer,user_agent\n\
             2024-05-01T10:00:00.000Z,abc,1.2.3.4,google.com,Mozilla/5.0\n\
             2024-05-01T10:05:00.000Z,xyz,5.6.7.8,bing.com,curl/8.0\n",
        );
        let records = load_click_log(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].short_code, "abc");
        assert_eq!(records[0].timestamp, "2024-05-01T10:00:00.000Z");
        assert_eq!(records[1].referrer, "bing.com");
    }

    #[test]
    fn keeps_quoted_delimiters_intact() {
        let file = write_log(
            "timestamp,short_code,ip,referrer,user_agent\n\
             t1,abc,1.2.3.4,google.com,\"Mozilla/5.0 (Windows NT 10.0, Win64)\"\n",
        );
        let records = load_click_log(file.path()).unwrap();
        assert_eq!(records[0].user_agent, "Mozilla/5.0 (Windows NT 10.0, Win64)");
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_click_log(Path::new("no_such_logs.csv")).unwrap_err();
        assert!(matches!(err, InputError::NotFound(_)));
    }

    #[test]
    fn rejects_unexpected_header() {
        let file =
            write_log("timestamp,code,ip,referrer,user_agent\nt1,abc,1.2.3.4,google.com,ua\n");
        let err = load_click_log(file.path()).unwrap_err();
        assert!(matches!(err, InputError::HeaderMismatch { .. }));
    }

    #[test]
    fn rejects_reordered_header() {
        let file =
            write_log("short_code,timestamp,ip,referrer,user_agent\nabc,t1,1.2.3.4,google.com,ua\n");
        let err = load_click_log(file.path()).unwrap_err();
        assert!(matches!(err, InputError::HeaderMismatch { .. }));
    }

    #[test]
    fn header_only_log_is_empty() {
        let file = write_log("timestamp,short_code,ip,referrer,user_agent\n");
        let records = load_click_log(file.path()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn rejects_short_row_with_row_number() {
        let file = write_log(
            "timestamp,short_code,ip,referrer,user_agent\n\
             t1,abc,1.2.3.4,google.com,ua\n\
             t2,xyz,5.6.7.8\n",
        );
        let err = load_click_log(file.path()).unwrap_err();
        match err {
            InputError::Malformed { row, .. } => assert_eq!(row, 3),
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn empty_fields_are_loaded_as_is() {
        let file = write_log(
            "timestamp,short_code,ip,referrer,user_agent\n\
             t1,abc,1.2.3.4,,ua\n",
        );
        let records = load_click_log(file.path()).unwrap();
        assert_eq!(records[0].referrer, "");
    }
}
