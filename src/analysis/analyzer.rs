use std::sync::Arc;

use log::{debug, info};

use crate::generation::{GenerationRequest, TextGenerator};

use super::filler::FillerWordAnalyzer;
use super::models::{AnalysisResult, Category, DetailedFeedback};
use super::{prompts, rubric, score, AnalysisError};

/// Sampling temperature for rubric analysis, kept low so scoring stays
/// stable across resubmissions.
pub const ANALYSIS_TEMPERATURE: f64 = 0.3;
/// Token ceiling for the rubric reply.
pub const ANALYSIS_MAX_TOKENS: u32 = 1500;

/// Scores one interview answer against the five-dimension rubric and the
/// local filler-word scan.
///
/// Failure policy: a generation failure propagates as [`AnalysisError`];
/// an unparseable rubric reply degrades to the default rubric and is not
/// an error.
pub struct ResponseAnalyzer {
    generator: Arc<dyn TextGenerator>,
    filler: FillerWordAnalyzer,
}

impl ResponseAnalyzer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            filler: FillerWordAnalyzer::new(),
        }
    }

    pub async fn analyze(
        &self,
        text: &str,
        question: &str,
        category: Category,
    ) -> Result<AnalysisResult, AnalysisError> {
        info!(
            "🧠 Analyzing {} response ({} chars)",
            category.as_str(),
            text.len()
        );

        let request = GenerationRequest {
            system: prompts::rubric_system_prompt(),
            user: prompts::analysis_prompt(text, question, category),
            temperature: ANALYSIS_TEMPERATURE,
            max_tokens: ANALYSIS_MAX_TOKENS,
        };

        let reply = self.generator.generate(request).await?;
        debug!("Rubric reply received ({} chars)", reply.len());

        let rubric_feedback = rubric::parse_rubric_reply(&reply);
        let filler_analysis = self.filler.analyze(text);

        let detailed_feedback = DetailedFeedback::from_parts(rubric_feedback, filler_analysis);
        let overall_score = score::overall_score(&detailed_feedback);

        info!("✅ Analysis complete, overall score {:.1}", overall_score);

        Ok(AnalysisResult {
            detailed_feedback,
            overall_score,
        })
    }
}
