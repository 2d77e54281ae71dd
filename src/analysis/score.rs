use super::models::DetailedFeedback;

/// Score reported when nothing scorable is present.
pub const NEUTRAL_SCORE: f64 = 7.0;

/// Round to the single decimal place used everywhere scores are reported.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean of the given scores, rounded to one decimal. An empty list yields
/// the neutral 7.0 rather than an error.
pub fn mean_score(scores: &[u8]) -> f64 {
    if scores.is_empty() {
        return NEUTRAL_SCORE;
    }

    let sum: u32 = scores.iter().map(|score| u32::from(*score)).sum();
    round_one_decimal(sum as f64 / scores.len() as f64)
}

/// Overall score for a feedback payload: the mean of every scored
/// sub-structure it carries (five rubric dimensions plus the filler scan).
pub fn overall_score(feedback: &DetailedFeedback) -> f64 {
    mean_score(&feedback.scores())
}
