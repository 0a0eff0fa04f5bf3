use crate::error::{PackfitError, Result};
use crate::types::answers::AnswerSet;
use std::path::Path;
use tracing::debug;

/// Load an answer set from disk. JSON is the default interchange format;
/// `.toml` files are accepted for hand-authored answer sets.
pub fn load_answers(path: &Path) -> Result<AnswerSet> {
    let content = std::fs::read_to_string(path)?;
    let answers: AnswerSet = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content)?,
        Some("json") | None => serde_json::from_str(&content)?,
        Some(other) => {
            return Err(PackfitError::UnsupportedFormat(other.to_string()));
        }
    };
    debug!(count = answers.len(), path = %path.display(), "loaded answer set");
    Ok(answers)
}
