use std::sync::Arc;

use log::{info, warn};

use crate::generation::{GenerationRequest, TextGenerator};

use super::models::Category;
use super::prompts;

/// Sampling temperature for follow-up questions, higher than analysis so
/// repeated rounds stay varied.
pub const FOLLOW_UP_TEMPERATURE: f64 = 0.7;
/// Token ceiling for a single follow-up question.
pub const FOLLOW_UP_MAX_TOKENS: u32 = 200;

/// Question used whenever generation cannot produce one.
pub const FALLBACK_FOLLOW_UP: &str =
    "Can you provide a specific example from your experience that demonstrates this skill?";

/// Produces one follow-up question per practice round. Every failure
/// mode, including an empty reply, yields the fixed fallback question
/// instead of an error.
pub struct FollowUpGenerator {
    generator: Arc<dyn TextGenerator>,
}

impl FollowUpGenerator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn generate(
        &self,
        original_question: &str,
        user_response: &str,
        category: Category,
    ) -> String {
        let request = GenerationRequest {
            system: prompts::follow_up_system_prompt().to_string(),
            user: prompts::follow_up_prompt(original_question, user_response, category),
            temperature: FOLLOW_UP_TEMPERATURE,
            max_tokens: FOLLOW_UP_MAX_TOKENS,
        };

        match self.generator.generate(request).await {
            Ok(reply) => {
                let question = strip_wrapping_quotes(reply.trim());
                if question.is_empty() {
                    warn!("Empty follow-up reply, using fallback question");
                    return FALLBACK_FOLLOW_UP.to_string();
                }
                info!("✅ Generated follow-up question ({} chars)", question.len());
                question.to_string()
            }
            Err(e) => {
                warn!("Follow-up generation failed, using fallback question: {}", e);
                FALLBACK_FOLLOW_UP.to_string()
            }
        }
    }
}

/// Models often wrap the question in quotes; drop any leading or trailing
/// run of `"` and `'`.
fn strip_wrapping_quotes(text: &str) -> &str {
    text.trim_matches(|c| c == '"' || c == '\'')
}
