use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single recorded response. Ordinal-scale and continuous-range questions
/// carry numbers; single-choice and boolean questions carry option strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Choice(String),
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<i64> for AnswerValue {
    fn from(value: i64) -> Self {
        AnswerValue::Number(value as f64)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Choice(value.to_string())
    }
}

/// The respondent's answers, keyed by question id. Built incrementally by the
/// hosting UI (one key per interaction, overwrite on revisit); the scoring
/// engine only ever reads it.
///
/// All accessors gate on key presence, not truthiness: a recorded 0 counts
/// as answered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, AnswerValue>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or overwrite a single answer.
    pub fn record(&mut self, question: impl Into<String>, value: impl Into<AnswerValue>) {
        self.0.insert(question.into(), value.into());
    }

    pub fn is_answered(&self, question: &str) -> bool {
        self.0.contains_key(question)
    }

    pub fn number(&self, question: &str) -> Option<f64> {
        match self.0.get(question) {
            Some(AnswerValue::Number(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn choice(&self, question: &str) -> Option<&str> {
        match self.0.get(question) {
            Some(AnswerValue::Choice(option)) => Some(option.as_str()),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
