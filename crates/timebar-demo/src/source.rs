// File: crates/timebar-demo/src/source.rs
// Summary: Dataset sources for the demo: the remote JSON feed, a local JSON file, or a local CSV.

use std::fmt;
use std::path::{Path, PathBuf};

use timebar_core::{normalize, ChartError, RawDataset, Record};
use tracing::{debug, info};

/// Default GDP feed.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/GDP-data.json";

pub enum Source {
    Remote(String),
    JsonFile(PathBuf),
    CsvFile(PathBuf),
}

impl Source {
    /// Interpret an optional CLI argument: URL, `.csv` path, or anything else as a JSON path.
    pub fn from_arg(arg: Option<String>) -> Self {
        match arg {
            None => Source::Remote(DATASET_URL.to_string()),
            Some(a) if a.starts_with("http://") || a.starts_with("https://") => Source::Remote(a),
            Some(a) => {
                let path = PathBuf::from(a);
                let is_csv = path
                    .extension()
                    .map(|e| e.eq_ignore_ascii_case("csv"))
                    .unwrap_or(false);
                if is_csv { Source::CsvFile(path) } else { Source::JsonFile(path) }
            }
        }
    }

    /// Retrieve and normalize the dataset. Any failure aborts; there is no retry.
    pub fn load(&self) -> Result<Vec<Record>, ChartError> {
        match self {
            Source::Remote(url) => fetch_json(url)?.normalize(),
            Source::JsonFile(path) => {
                let bytes = std::fs::read(path)?;
                RawDataset::from_slice(&bytes)?.normalize()
            }
            Source::CsvFile(path) => load_csv(path),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Remote(url) => write!(f, "{url}"),
            Source::JsonFile(p) | Source::CsvFile(p) => write!(f, "{}", p.display()),
        }
    }
}

fn fetch_json(url: &str) -> Result<RawDataset, ChartError> {
    info!(url, "fetching dataset");
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| ChartError::Fetch(e.to_string()))?;
    let body = response.bytes().map_err(|e| ChartError::Fetch(e.to_string()))?;
    debug!(bytes = body.len(), "fetched dataset");
    RawDataset::from_slice(&body)
}

/// Load a `date,value` CSV. Header names are matched case-insensitively.
fn load_csv(path: &Path) -> Result<Vec<Record>, ChartError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(csv_error)?;

    let headers = rdr
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_date = idx(&["date", "time", "quarter", "period"]).unwrap_or(0);
    let i_value = idx(&["value", "gdp", "amount", "magnitude"]).unwrap_or(1);

    let mut pairs = Vec::new();
    for (index, rec) in rdr.records().enumerate() {
        let rec = rec.map_err(csv_error)?;
        let label = rec.get(i_date).unwrap_or("").trim().to_string();
        let raw_value = rec.get(i_value).unwrap_or("").trim();
        let value = raw_value.parse::<f64>().map_err(|_| ChartError::MalformedRecord {
            index,
            label: label.clone(),
            reason: format!("value {raw_value:?} is not a number"),
        })?;
        pairs.push((label, value));
    }
    normalize(pairs)
}

fn csv_error(e: csv::Error) -> ChartError {
    let message = e.to_string();
    match e.into_kind() {
        csv::ErrorKind::Io(io) => ChartError::Io(io),
        _ => ChartError::Fetch(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arg_selects_source_kind() {
        assert!(matches!(Source::from_arg(None), Source::Remote(u) if u == DATASET_URL));
        assert!(matches!(Source::from_arg(Some("https://example.org/d.json".into())), Source::Remote(_)));
        assert!(matches!(Source::from_arg(Some("gdp.CSV".into())), Source::CsvFile(_)));
        assert!(matches!(Source::from_arg(Some("gdp.json".into())), Source::JsonFile(_)));
    }

    #[test]
    fn csv_rows_are_normalized_in_order() {
        let path = PathBuf::from("target/test_out/gdp.csv");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "Date,GDP\n1947-01-01,243.1\n1947-04-01,246.3\n").unwrap();

        let records = Source::CsvFile(path).load().expect("load csv");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].magnitude, 246.3);
    }

    #[test]
    fn non_numeric_csv_value_is_malformed() {
        let path = PathBuf::from("target/test_out/gdp_bad.csv");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "date,value\n1947-01-01,n/a\n").unwrap();

        let err = Source::CsvFile(path).load().unwrap_err();
        assert!(matches!(err, ChartError::MalformedRecord { index: 0, .. }));
    }

    #[test]
    fn csv_syntax_error_reads_as_display_text() {
        let path = PathBuf::from("target/test_out/gdp_ragged.csv");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "date,value\n1947-01-01,243.1,extra\n").unwrap();

        let err = Source::CsvFile(path).load().unwrap_err();
        let ChartError::Fetch(message) = &err else { panic!("expected fetch error, got {err:?}") };
        assert!(message.contains("found record with 3 fields"), "{message}");
        assert!(!message.contains("UnequalLengths"), "{message}");
    }
}
