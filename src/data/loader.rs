use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;

use super::model::{RiverDataset, Sample};

/// Header names accepted for the independent column (distance downstream).
const DISTANCE_HEADERS: &[&str] = &["distance_km", "distance"];

/// Header names accepted for the dependent column (pollutant concentration).
const CONCENTRATION_HEADERS: &[&str] = &["concentration_mg_l", "concentration"];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a pollutant dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row naming a distance and a concentration column
/// * `.json` – records-oriented array, the pandas `to_json(orient='records')`
///   layout: `[{ "distance_km": 0.0, "concentration_mg_l": 12.4 }, ...]`
///
/// Rows must parse cleanly as numbers; there is no cleaning pass, a malformed
/// cell fails the whole load.
pub fn load_file(path: &Path) -> Result<RiverDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("dataset")
        .to_string();

    let samples = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    Ok(RiverDataset::new(samples, name))
}

/// Case-insensitive lookup of a column among its accepted header spellings.
fn find_column(headers: &[String], accepted: &[&str]) -> Option<usize> {
    headers.iter().position(|h| {
        let h = h.trim().to_ascii_lowercase();
        accepted.iter().any(|a| h == *a)
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let dist_idx = find_column(&headers, DISTANCE_HEADERS)
        .with_context(|| format!("CSV missing a distance column ({DISTANCE_HEADERS:?})"))?;
    let conc_idx = find_column(&headers, CONCENTRATION_HEADERS)
        .with_context(|| format!("CSV missing a concentration column ({CONCENTRATION_HEADERS:?})"))?;

    let mut samples = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let distance_km = parse_float(record.get(dist_idx).unwrap_or(""), row_no, "distance")?;
        let concentration_mg_l =
            parse_float(record.get(conc_idx).unwrap_or(""), row_no, "concentration")?;

        samples.push(Sample {
            distance_km,
            concentration_mg_l,
        });
    }

    Ok(samples)
}

fn parse_float(s: &str, row: usize, col: &str) -> Result<f64> {
    s.trim()
        .parse::<f64>()
        .with_context(|| format!("Row {row}, {col}: '{s}' is not a number"))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "distance_km": 0.0, "concentration_mg_l": 12.4 },
///   { "distance_km": 0.5, "concentration_mg_l": 11.9 }
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<Sample>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut samples = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let distance_km = json_field_to_f64(obj, DISTANCE_HEADERS, i, "distance")?;
        let concentration_mg_l = json_field_to_f64(obj, CONCENTRATION_HEADERS, i, "concentration")?;

        samples.push(Sample {
            distance_km,
            concentration_mg_l,
        });
    }

    Ok(samples)
}

fn json_field_to_f64(
    obj: &serde_json::Map<String, JsonValue>,
    accepted: &[&str],
    row: usize,
    col: &str,
) -> Result<f64> {
    let val = accepted
        .iter()
        .find_map(|key| obj.get(*key))
        .with_context(|| format!("Row {row}: missing '{col}' field ({accepted:?})"))?;

    val.as_f64()
        .with_context(|| format!("Row {row}, {col}: not a number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Write a fixture to the OS temp dir and hand its path to the test body.
    fn with_fixture(name: &str, contents: &str, f: impl FnOnce(&Path)) {
        let path: PathBuf = std::env::temp_dir().join(format!("riverstat_test_{name}"));
        std::fs::write(&path, contents).expect("writing fixture");
        f(&path);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn csv_with_canonical_headers_loads() {
        let csv = "distance_km,concentration_mg_l\n0.0,12.4\n0.5,11.9\n1.0,11.1\n";
        with_fixture("canonical.csv", csv, |path| {
            let ds = load_file(path).expect("load");
            assert_eq!(ds.len(), 3);
            assert_eq!(ds.samples[0].distance_km, 0.0);
            assert_eq!(ds.samples[2].concentration_mg_l, 11.1);
            assert_eq!(ds.source_name, "riverstat_test_canonical.csv");
        });
    }

    #[test]
    fn csv_header_aliases_are_case_insensitive() {
        let csv = "Distance,Concentration,site\n1.0,9.5,A\n2.0,8.2,B\n";
        with_fixture("alias.csv", csv, |path| {
            let ds = load_file(path).expect("load");
            assert_eq!(ds.len(), 2);
            assert_eq!(ds.samples[1].distance_km, 2.0);
            assert_eq!(ds.samples[1].concentration_mg_l, 8.2);
        });
    }

    #[test]
    fn csv_missing_column_is_an_error() {
        let csv = "distance_km,ph\n0.0,7.1\n";
        with_fixture("missing_col.csv", csv, |path| {
            let err = load_file(path).unwrap_err();
            assert!(format!("{err:#}").contains("concentration"));
        });
    }

    #[test]
    fn csv_malformed_number_is_an_error() {
        let csv = "distance_km,concentration_mg_l\n0.0,twelve\n";
        with_fixture("malformed.csv", csv, |path| {
            let err = load_file(path).unwrap_err();
            assert!(format!("{err:#}").contains("not a number"));
        });
    }

    #[test]
    fn json_records_load() {
        let json = r#"[
            { "distance_km": 0.0, "concentration_mg_l": 12.4 },
            { "distance_km": 0.5, "concentration_mg_l": 11.9 }
        ]"#;
        with_fixture("records.json", json, |path| {
            let ds = load_file(path).expect("load");
            assert_eq!(ds.len(), 2);
            assert_eq!(ds.samples[0].concentration_mg_l, 12.4);
        });
    }

    #[test]
    fn csv_and_json_agree_on_the_same_records() {
        let csv = "distance,concentration\n1.0,5.0\n2.0,4.0\n";
        let json = r#"[
            { "distance": 1.0, "concentration": 5.0 },
            { "distance": 2.0, "concentration": 4.0 }
        ]"#;
        with_fixture("agree.csv", csv, |csv_path| {
            let from_csv = load_file(csv_path).expect("csv load");
            with_fixture("agree.json", json, |json_path| {
                let from_json = load_file(json_path).expect("json load");
                assert_eq!(from_csv.samples, from_json.samples);
            });
        });
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        with_fixture("data.parquet", "", |path| {
            let err = load_file(path).unwrap_err();
            assert!(err.to_string().contains("Unsupported file extension"));
        });
    }
}
