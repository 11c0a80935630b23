//! Output document: `{count, products}` written as pretty JSON.

use crate::error::Result;
use crate::harvest::Record;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The harvested result as written to disk. `count` always equals
/// `products.len()` by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestReport {
    pub count: usize,
    pub products: Vec<Record>,
}

impl HarvestReport {
    pub fn new(products: Vec<Record>) -> Self {
        Self { count: products.len(), products }
    }
}

/// Write the report to `path`, creating parent directories as needed.
/// The write is not atomic; a crash mid-write leaves a truncated file.
pub fn write_report(path: &Path, report: &HarvestReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)?;

    log::info!("Wrote {} records to {}", report.count, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harvest::Record;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_count_matches_products() {
        let report = HarvestReport::new(vec![
            record(&[("Name", "A"), ("Price", "1")]),
            record(&[("Name", "B"), ("Price", "2")]),
        ]);
        assert_eq!(report.count, report.products.len());
        assert_eq!(report.count, 2);
    }

    #[test]
    fn test_empty_report() {
        let report = HarvestReport::new(Vec::new());
        assert_eq!(report.count, 0);
        assert!(report.products.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let report = HarvestReport::new(vec![record(&[("Name", "A"), ("_row_id", "p-1")])]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["count"], 1);
        assert_eq!(json["products"][0]["Name"], "A");
        assert_eq!(json["products"][0]["_row_id"], "p-1");
    }

    #[test]
    fn test_record_key_order_survives_serialization() {
        let report = HarvestReport::new(vec![record(&[("Name", "A"), ("Price", "1"), ("Stock", "3")])]);
        let json = serde_json::to_string(&report).unwrap();

        let name = json.find("\"Name\"").unwrap();
        let price = json.find("\"Price\"").unwrap();
        let stock = json.find("\"Stock\"").unwrap();
        assert!(name < price && price < stock);
    }

    #[test]
    fn test_write_report_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out").join("products.json");

        let report = HarvestReport::new(vec![record(&[("Name", "A")])]);
        write_report(&path, &report).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: HarvestReport = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.count, 1);
        assert_eq!(parsed.products[0].get("Name"), Some(&"A".to_string()));
    }
}
