pub mod answers;
pub mod report;
