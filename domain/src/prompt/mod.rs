//! Prompt templates for video analysis

mod analysis;

pub use analysis::AnalysisPromptTemplate;
