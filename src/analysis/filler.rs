use indexmap::IndexMap;
use regex::Regex;

use super::models::FillerAnalysis;
use super::score::round_one_decimal;

/// Filler terms scanned for, in reporting order.
pub const FILLER_TERMS: [&str; 9] = [
    "um",
    "uh",
    "like",
    "you know",
    "so",
    "well",
    "actually",
    "basically",
    "literally",
];

/// Deterministic filler-word scanner. Runs locally on every submission; no
/// model calls involved, so the result is always available even when the
/// rubric analysis degrades.
#[derive(Debug)]
pub struct FillerWordAnalyzer {
    patterns: Vec<(&'static str, Regex)>,
}

impl FillerWordAnalyzer {
    pub fn new() -> Self {
        let patterns = FILLER_TERMS
            .iter()
            .map(|term| {
                let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(term))).unwrap();
                (*term, pattern)
            })
            .collect();

        Self { patterns }
    }

    /// Count filler terms with word-boundary matching over the lowercased
    /// text and score the result on the 1-10 scale (10 = clean).
    pub fn analyze(&self, text: &str) -> FillerAnalysis {
        let text_lower = text.to_lowercase();
        let word_count = text.split_whitespace().count();

        let mut breakdown = IndexMap::new();
        let mut total_count = 0usize;

        for (term, pattern) in &self.patterns {
            let count = pattern.find_iter(&text_lower).count();
            if count > 0 {
                breakdown.insert((*term).to_string(), count);
                total_count += count;
            }
        }

        // Banding uses the raw percentage; rounding is for reporting only.
        let percentage = if word_count > 0 {
            total_count as f64 / word_count as f64 * 100.0
        } else {
            0.0
        };

        FillerAnalysis {
            score: score_for_percentage(percentage),
            total_count,
            percentage: round_one_decimal(percentage),
            breakdown,
            feedback: feedback_for_percentage(percentage).to_string(),
        }
    }
}

impl Default for FillerWordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn score_for_percentage(percentage: f64) -> u8 {
    if percentage == 0.0 {
        10
    } else if percentage < 2.0 {
        9
    } else if percentage < 5.0 {
        7
    } else if percentage < 10.0 {
        5
    } else {
        (10 - percentage as i64).max(1) as u8
    }
}

fn feedback_for_percentage(percentage: f64) -> &'static str {
    if percentage == 0.0 {
        "Excellent! No filler words detected. Your speech is clear and confident."
    } else if percentage < 2.0 {
        "Very good! Minimal use of filler words. Your communication is quite polished."
    } else if percentage < 5.0 {
        "Good control of filler words, but there's room for improvement."
    } else if percentage < 10.0 {
        "Moderate use of filler words detected. Focus on slowing down and thinking before speaking."
    } else {
        "High usage of filler words may distract from your message. Practice speaking more deliberately."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_response_scores_ten() {
        let analyzer = FillerWordAnalyzer::new();
        let result = analyzer.analyze("I led the migration project and delivered it two weeks early.");

        assert_eq!(result.total_count, 0);
        assert_eq!(result.percentage, 0.0);
        assert_eq!(result.score, 10);
        assert!(result.breakdown.is_empty());
        assert!(result.feedback.starts_with("Excellent!"));
    }

    #[test]
    fn test_word_boundaries_ignore_substrings() {
        let analyzer = FillerWordAnalyzer::new();
        // "Sophia" must not count as "so", "Wellington" not as "well",
        // "unlikely" not as "like".
        let result = analyzer.analyze("Sophia visited Wellington, which seemed unlikely.");

        assert_eq!(result.total_count, 0);
        assert_eq!(result.score, 10);
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn test_heavy_filler_sample() {
        let analyzer = FillerWordAnalyzer::new();
        // 10 words, 3 of them fillers.
        let result = analyzer.analyze("So, um, we basically shipped the final beta build today");

        assert_eq!(result.total_count, 3);
        assert_eq!(result.percentage, 30.0);
        assert_eq!(result.score, 1);
        assert_eq!(result.breakdown.get("um"), Some(&1));
        assert_eq!(result.breakdown.get("so"), Some(&1));
        assert_eq!(result.breakdown.get("basically"), Some(&1));
        assert!(result.feedback.starts_with("High usage"));
    }

    #[test]
    fn test_multi_word_term_counts() {
        let analyzer = FillerWordAnalyzer::new();
        let result = analyzer.analyze("You know the drill, you know the rules, and I know nothing");

        assert_eq!(result.breakdown.get("you know"), Some(&2));
        assert_eq!(result.total_count, 2);
    }

    #[test]
    fn test_breakdown_preserves_scan_order() {
        let analyzer = FillerWordAnalyzer::new();
        let result = analyzer.analyze("Well um, so this actually worked um fine");

        let keys: Vec<&String> = result.breakdown.keys().collect();
        assert_eq!(keys, ["um", "so", "well", "actually"]);
        assert_eq!(result.breakdown.get("um"), Some(&2));
    }

    #[test]
    fn test_empty_text() {
        let analyzer = FillerWordAnalyzer::new();
        for text in ["", "   "] {
            let result = analyzer.analyze(text);
            assert_eq!(result.total_count, 0);
            assert_eq!(result.percentage, 0.0);
            assert_eq!(result.score, 10);
        }
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(score_for_percentage(0.0), 10);
        assert_eq!(score_for_percentage(1.9), 9);
        assert_eq!(score_for_percentage(2.0), 7);
        assert_eq!(score_for_percentage(4.9), 7);
        assert_eq!(score_for_percentage(5.0), 5);
        assert_eq!(score_for_percentage(9.9), 5);
        assert_eq!(score_for_percentage(10.0), 1);
        assert_eq!(score_for_percentage(12.7), 1);
        assert_eq!(score_for_percentage(100.0), 1);
    }

    #[test]
    fn test_banding_uses_raw_percentage() {
        let analyzer = FillerWordAnalyzer::new();
        // 1 filler in 51 words = 1.96%, which reports as 2.0 but still
        // falls in the under-2 band.
        let mut words = vec!["word"; 50];
        words.push("um");
        let result = analyzer.analyze(&words.join(" "));

        assert_eq!(result.percentage, 2.0);
        assert_eq!(result.score, 9);
        assert!(result.feedback.starts_with("Very good!"));
    }
}
