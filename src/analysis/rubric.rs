use log::warn;

use super::models::{DimensionFeedback, RubricDimension, RubricFeedback};

/// Highest score a dimension can carry; anything above marks the reply as
/// malformed.
const MAX_DIMENSION_SCORE: u8 = 10;

/// Extract the JSON candidate from a model reply: the substring from the
/// first `{` to the last `}`. This tolerates prose around the payload and
/// nested braces inside feedback strings. Known limitation: a stray `}` in
/// trailing prose widens the candidate and the decode fails, which routes
/// to the default rubric.
pub fn extract_json_candidate(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&reply[start..=end])
}

/// Decode a model reply into rubric feedback. Any missing, mistyped, or
/// out-of-range field rejects the whole payload and the fixed default
/// rubric is returned instead. The default has the same shape as a
/// successful parse, so consumers never need to care which one they got.
pub fn parse_rubric_reply(reply: &str) -> RubricFeedback {
    let candidate = match extract_json_candidate(reply) {
        Some(candidate) => candidate,
        None => {
            warn!("No JSON object found in rubric reply, using default feedback");
            return default_rubric();
        }
    };

    let feedback: RubricFeedback = match serde_json::from_str(candidate) {
        Ok(feedback) => feedback,
        Err(e) => {
            warn!("Failed to decode rubric reply: {}", e);
            return default_rubric();
        }
    };

    for dimension in RubricDimension::ALL {
        let score = feedback.dimension(dimension).score;
        if score > MAX_DIMENSION_SCORE {
            warn!(
                "Rubric score {} out of range for {}, using default feedback",
                score,
                dimension.as_str()
            );
            return default_rubric();
        }
    }

    feedback
}

/// The rubric used when the model reply cannot be trusted.
pub fn default_rubric() -> RubricFeedback {
    RubricFeedback {
        content_quality: DimensionFeedback {
            score: 7,
            feedback: "Analysis parsing failed, using default scores".to_string(),
        },
        communication_clarity: DimensionFeedback {
            score: 7,
            feedback: "Please try again".to_string(),
        },
        confidence_level: DimensionFeedback {
            score: 7,
            feedback: "Analysis temporarily unavailable".to_string(),
        },
        structure_organization: DimensionFeedback {
            score: 7,
            feedback: "Default feedback".to_string(),
        },
        professionalism: DimensionFeedback {
            score: 7,
            feedback: "Default feedback".to_string(),
        },
        strengths: vec!["Response provided".to_string()],
        areas_for_improvement: vec!["Try speaking more clearly".to_string()],
        suggestions: vec![
            "Practice your response structure".to_string(),
            "Provide specific examples".to_string(),
        ],
    }
}
