// Response analysis pipeline: rubric scoring via the model, local filler-word
// analysis, and follow-up question generation.

pub mod analyzer;
pub mod filler;
pub mod followup;
pub mod models;
pub mod prompts;
pub mod rubric;
pub mod score;

pub use analyzer::ResponseAnalyzer;
pub use filler::{FillerWordAnalyzer, FILLER_TERMS};
pub use followup::{FollowUpGenerator, FALLBACK_FOLLOW_UP};
pub use models::{
    AnalysisResult, Category, DetailedFeedback, DimensionFeedback, FillerAnalysis, RubricDimension,
    RubricFeedback,
};

use thiserror::Error;

use crate::generation::GenerationError;

/// Errors surfaced by the analysis pipeline. Parse problems never appear
/// here; they degrade to the fallback rubric inside the analyzer.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Analysis generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl AnalysisError {
    /// Whether retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AnalysisError::Generation(_))
    }
}
