/// Substrings that suggest the transcriber struggled with the audio.
pub const UNCLEAR_MARKERS: [&str; 5] = ["[inaudible]", "[unclear]", "...", "um", "uh"];

/// Estimates how trustworthy a transcript is, in `[0.0, 0.95]`.
///
/// Starts from 0.95 and deducts 0.1 for very short text plus 0.05 per
/// unclear marker, capped at 0.3. Markers are counted as substrings of the
/// lowercased text, matching how transcribers emit them mid-word.
pub fn estimate_confidence(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    let mut confidence = 0.95;

    if text.chars().count() < 10 {
        confidence -= 0.1;
    }

    let lowered = text.to_lowercase();
    let unclear_count: usize = UNCLEAR_MARKERS
        .iter()
        .map(|marker| lowered.matches(marker).count())
        .sum();
    confidence -= (unclear_count as f64 * 0.05).min(0.3);

    confidence.max(0.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_empty_transcript_has_zero_confidence() {
        assert_eq!(estimate_confidence(""), 0.0);
        assert_eq!(estimate_confidence("   \n  "), 0.0);
    }

    #[test]
    fn test_clean_transcript_scores_base_confidence() {
        let confidence = estimate_confidence("I led the migration and it finished on time.");
        assert_eq!(confidence, 0.95);
    }

    #[test]
    fn test_short_transcript_is_penalized() {
        assert_close(estimate_confidence("Yes."), 0.85);
    }

    #[test]
    fn test_unclear_markers_are_penalized() {
        // Two "..." plus one "um".
        assert_close(estimate_confidence("I was... um... not quite sure"), 0.8);
    }

    #[test]
    fn test_marker_penalty_is_capped() {
        // Seven markers would deduct 0.35; the cap holds it at 0.3.
        assert_close(estimate_confidence("um uh um uh um uh um"), 0.65);
    }

    #[test]
    fn test_markers_count_as_substrings() {
        // "column" and "sums" each hide an "um" alongside the real one.
        assert_close(
            estimate_confidence("The column sums looked fine to um me"),
            0.8,
        );
    }
}
