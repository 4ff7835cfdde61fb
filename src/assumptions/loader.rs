//! CSV-based assumption override loader
//!
//! Loads sparse key/value overrides for the CLI from a two-column CSV
//! (header row `key,value`).

use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Load assumption overrides from a key/value CSV file
pub fn load_overrides(path: &Path) -> Result<HashMap<String, f64>, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut overrides = HashMap::new();

    for result in reader.records() {
        let record = result?;
        let key = record[0].trim().to_string();
        let value: f64 = record[1].trim().parse()?;
        overrides.insert(key, value);
    }

    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_overrides() {
        let dir = std::env::temp_dir();
        let path = dir.join("fm_overrides_test.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "key,value").unwrap();
        writeln!(file, "revenue,12000000").unwrap();
        writeln!(file, "revenue_growth_rate,0").unwrap();
        drop(file);

        let overrides = load_overrides(&path).unwrap();
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides["revenue"], 12_000_000.0);
        assert_eq!(overrides["revenue_growth_rate"], 0.0);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_errors() {
        let result = load_overrides(Path::new("/nonexistent/overrides.csv"));
        assert!(result.is_err());
    }
}
