use crate::catalog;
use crate::types::report::ScoreReport;

pub fn to_json(report: &ScoreReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn catalog_to_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(catalog::CATALOG)
}
