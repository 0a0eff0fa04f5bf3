pub mod json;
pub mod md;

use crate::error::PackfitError;
use crate::types::report::ScoreReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, PackfitError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(PackfitError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_catalog(format: OutputFormat) -> Result<String, PackfitError> {
    match format {
        OutputFormat::Json => json::catalog_to_json().map_err(PackfitError::Json),
        OutputFormat::Md => Ok(md::catalog_to_markdown()),
    }
}
