//! Tree CSV loader
//!
//! Loads the tree dataset from a local path or an HTTP URL and parses
//! it into validated records. Parsing runs on a blocking worker so the
//! UI thread never stalls on I/O.

use std::io::Read;
use std::path::Path;
use std::time::Duration;

use tokio::task;

use super::record::{RawTreeRow, TreeRecord};

/// Errors that can occur while loading the tree CSV
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("failed to read CSV: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to fetch {url}: {reason}")]
    Http { url: String, reason: String },
    #[error("background task failed: {0}")]
    Join(String),
}

/// Result of a completed CSV load
#[derive(Debug, Clone)]
pub struct CsvLoadResult {
    pub records: Vec<TreeRecord>,
    /// Rows dropped for missing/non-numeric coordinates or parse errors
    pub skipped: usize,
}

/// Load and parse the tree CSV from a local path or http(s) URL.
pub async fn load_tree_csv(source: String) -> Result<CsvLoadResult, LoadError> {
    // Spawn blocking because file I/O, network fetch and parsing are all synchronous
    task::spawn_blocking(move || load_blocking(&source))
        .await
        .map_err(|e| LoadError::Join(e.to_string()))?
}

fn load_blocking(source: &str) -> Result<CsvLoadResult, LoadError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let response = ureq::get(source)
            .set("User-Agent", "campus-tree-map/0.1")
            .timeout(Duration::from_secs(30))
            .call()
            .map_err(|e| LoadError::Http {
                url: source.to_string(),
                reason: e.to_string(),
            })?;
        let mut body = String::new();
        response.into_reader().read_to_string(&mut body)?;
        return Ok(parse_records(reader_from(body.as_bytes())));
    }

    let path = Path::new(source);
    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }

    let file = std::fs::File::open(path)?;
    Ok(parse_records(reader_from(file)))
}

fn reader_from<R: Read>(input: R) -> csv::Reader<R> {
    // flexible: survey exports sometimes carry ragged rows; those rows
    // simply fail row deserialization and count as skipped
    csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

/// Parse all rows, keeping only records with usable coordinates.
fn parse_records<R: Read>(mut reader: csv::Reader<R>) -> CsvLoadResult {
    let mut records = Vec::new();
    let mut skipped = 0;

    for row in reader.deserialize::<RawTreeRow>() {
        match row {
            Ok(raw) => match TreeRecord::from_row(raw) {
                Some(record) => records.push(record),
                None => skipped += 1,
            },
            Err(e) => {
                log::debug!("skipping malformed CSV row: {e}");
                skipped += 1;
            }
        }
    }

    log::info!("parsed {} tree records ({} rows skipped)", records.len(), skipped);
    CsvLoadResult { records, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Latitude,Longitude,TreeName,BotanicalName,Image,Link
13.0461,80.2533,Neem,Azadirachta indica,neem.jpg,https://example.org/neem
13.0472,80.2541,Coconut Palm,Cocos nucifera,,
,80.2541,Ghost Tree,,,
13.0463,not-a-number,Mango,Mangifera indica,,
13.0450,80.2520,Gulmohar,Delonix regia,gulmohar.jpg,
";

    #[test]
    fn test_parse_keeps_only_valid_rows() {
        let result = parse_records(reader_from(SAMPLE.as_bytes()));
        assert_eq!(result.records.len(), 3);
        assert_eq!(result.skipped, 2);

        let names: Vec<&str> = result.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Neem", "Coconut Palm", "Gulmohar"]);
    }

    #[test]
    fn test_parse_empty_input() {
        let result = parse_records(reader_from("".as_bytes()));
        assert!(result.records.is_empty());
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn test_parse_header_only() {
        let input = "Latitude,Longitude,TreeName,BotanicalName,Image,Link\n";
        let result = parse_records(reader_from(input.as_bytes()));
        assert!(result.records.is_empty());
        assert_eq!(result.skipped, 0);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = load_tree_csv("/nonexistent/trees.csv".to_string()).await;
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }
}
