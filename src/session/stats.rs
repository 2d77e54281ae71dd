use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::analysis::score::round_one_decimal;

use super::PracticeSession;

/// How many of the newest sessions feed `recent_scores`.
const RECENT_SCORES_LEN: usize = 10;

/// Reporting window for practice statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsPeriod {
    Week,
    Month,
    Year,
}

impl StatsPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatsPeriod::Week => "week",
            StatsPeriod::Month => "month",
            StatsPeriod::Year => "year",
        }
    }

    /// Parses a period name; anything unrecognized falls back to `Month`.
    pub fn from_str(period: &str) -> Self {
        match period.trim().to_lowercase().as_str() {
            "week" => StatsPeriod::Week,
            "year" => StatsPeriod::Year,
            _ => StatsPeriod::Month,
        }
    }

    pub fn days(&self) -> i64 {
        match self {
            StatsPeriod::Week => 7,
            StatsPeriod::Month => 30,
            StatsPeriod::Year => 365,
        }
    }
}

impl Default for StatsPeriod {
    fn default() -> Self {
        StatsPeriod::Month
    }
}

/// Per-category aggregate. The average is intentionally left unrounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub count: usize,
    pub avg_score: f64,
}

/// One point on the score-over-time chart.
#[derive(Debug, Clone, Serialize)]
pub struct ScorePoint {
    pub date: DateTime<Utc>,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PracticeStatistics {
    pub period: StatsPeriod,
    pub total_sessions: usize,
    pub average_score: f64,
    pub improvement_trend: f64,
    pub category_breakdown: IndexMap<String, CategoryStats>,
    pub recent_scores: Vec<ScorePoint>,
}

impl PracticeStatistics {
    pub fn empty(period: StatsPeriod) -> Self {
        Self {
            period,
            total_sessions: 0,
            average_score: 0.0,
            improvement_trend: 0.0,
            category_breakdown: IndexMap::new(),
            recent_scores: Vec::new(),
        }
    }
}

/// Aggregates a user's sessions over the period ending at `now`.
///
/// The improvement trend compares the average score of the older half of
/// the window against the newer half, as a percentage of the older half.
pub fn compute_statistics(
    sessions: &[PracticeSession],
    period: StatsPeriod,
    now: DateTime<Utc>,
) -> PracticeStatistics {
    let cutoff = now - Duration::days(period.days());

    let mut in_window: Vec<&PracticeSession> =
        sessions.iter().filter(|s| s.timestamp >= cutoff).collect();
    if in_window.is_empty() {
        return PracticeStatistics::empty(period);
    }
    in_window.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    let scores: Vec<f64> = in_window
        .iter()
        .map(|s| s.analysis.overall_score)
        .collect();
    let average_score = round_one_decimal(scores.iter().sum::<f64>() / scores.len() as f64);

    let mid_point = scores.len() / 2;
    let mut improvement_trend = 0.0;
    if mid_point > 0 {
        let first_half_avg = scores[..mid_point].iter().sum::<f64>() / mid_point as f64;
        let second_half_avg =
            scores[mid_point..].iter().sum::<f64>() / (scores.len() - mid_point) as f64;
        if first_half_avg > 0.0 {
            improvement_trend =
                round_one_decimal((second_half_avg - first_half_avg) / first_half_avg * 100.0);
        }
    }

    let mut totals: IndexMap<String, (usize, f64)> = IndexMap::new();
    for session in &in_window {
        let entry = totals
            .entry(session.category.as_str().to_string())
            .or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += session.analysis.overall_score;
    }
    let category_breakdown = totals
        .into_iter()
        .map(|(category, (count, total))| {
            (
                category,
                CategoryStats {
                    count,
                    avg_score: total / count as f64,
                },
            )
        })
        .collect();

    let recent_scores = in_window[in_window.len().saturating_sub(RECENT_SCORES_LEN)..]
        .iter()
        .map(|s| ScorePoint {
            date: s.timestamp,
            score: s.analysis.overall_score,
        })
        .collect();

    PracticeStatistics {
        period,
        total_sessions: in_window.len(),
        average_score,
        improvement_trend,
        category_breakdown,
        recent_scores,
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::analysis::rubric::default_rubric;
    use crate::analysis::{AnalysisResult, Category, DetailedFeedback, FillerWordAnalyzer};

    use super::*;

    fn scored_session(
        score: f64,
        category: Category,
        timestamp: DateTime<Utc>,
    ) -> PracticeSession {
        let filler = FillerWordAnalyzer::new().analyze("A clean answer.");
        PracticeSession {
            id: Uuid::new_v4(),
            user_id: "alice".to_string(),
            question: "Tell me about a challenge.".to_string(),
            response: "A clean answer.".to_string(),
            category,
            analysis: AnalysisResult {
                detailed_feedback: DetailedFeedback::from_parts(default_rubric(), filler),
                overall_score: score,
            },
            follow_up_question: String::new(),
            timestamp,
        }
    }

    #[test]
    fn test_improvement_trend_compares_halves() {
        let now = Utc::now();
        let sessions: Vec<PracticeSession> = [6.0, 6.0, 8.0, 8.0]
            .iter()
            .enumerate()
            .map(|(i, &score)| {
                scored_session(
                    score,
                    Category::General,
                    now - Duration::days(4 - i as i64),
                )
            })
            .collect();

        let stats = compute_statistics(&sessions, StatsPeriod::Month, now);

        assert_eq!(stats.total_sessions, 4);
        assert_eq!(stats.average_score, 7.0);
        assert_eq!(stats.improvement_trend, 33.3);
    }

    #[test]
    fn test_sessions_outside_window_are_ignored() {
        let now = Utc::now();
        let sessions = vec![
            scored_session(9.0, Category::General, now - Duration::days(40)),
            scored_session(7.0, Category::General, now - Duration::days(3)),
        ];

        let stats = compute_statistics(&sessions, StatsPeriod::Month, now);

        assert_eq!(stats.total_sessions, 1);
        assert_eq!(stats.average_score, 7.0);
        // A single session has no halves to compare.
        assert_eq!(stats.improvement_trend, 0.0);
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        let now = Utc::now();
        let sessions: Vec<PracticeSession> = [7.0, 8.0, 8.0]
            .iter()
            .enumerate()
            .map(|(i, &score)| {
                scored_session(score, Category::General, now - Duration::hours(i as i64))
            })
            .collect();

        let stats = compute_statistics(&sessions, StatsPeriod::Week, now);

        assert_eq!(stats.average_score, 7.7);
    }

    #[test]
    fn test_category_breakdown_keeps_first_appearance_order() {
        let now = Utc::now();
        let sessions = vec![
            scored_session(7.0, Category::Behavioral, now - Duration::hours(4)),
            scored_session(6.0, Category::General, now - Duration::hours(3)),
            scored_session(8.0, Category::Behavioral, now - Duration::hours(2)),
        ];

        let stats = compute_statistics(&sessions, StatsPeriod::Week, now);

        let keys: Vec<&String> = stats.category_breakdown.keys().collect();
        assert_eq!(keys, ["behavioral", "general"]);

        let behavioral = &stats.category_breakdown["behavioral"];
        assert_eq!(behavioral.count, 2);
        assert_eq!(behavioral.avg_score, 7.5);

        let general = &stats.category_breakdown["general"];
        assert_eq!(general.count, 1);
        assert_eq!(general.avg_score, 6.0);
    }

    #[test]
    fn test_recent_scores_keeps_newest_ten_ascending() {
        let now = Utc::now();
        let sessions: Vec<PracticeSession> = (0..12)
            .map(|i| {
                scored_session(
                    5.0 + i as f64 * 0.25,
                    Category::General,
                    now - Duration::hours(12 - i as i64),
                )
            })
            .collect();

        let stats = compute_statistics(&sessions, StatsPeriod::Week, now);

        assert_eq!(stats.recent_scores.len(), 10);
        // Oldest two sessions fall off; the rest stay in ascending order.
        assert_eq!(stats.recent_scores[0].score, 5.5);
        assert_eq!(stats.recent_scores[9].score, 7.75);
        assert!(stats.recent_scores[0].date < stats.recent_scores[9].date);
    }

    #[test]
    fn test_no_sessions_yields_empty_stats() {
        let stats = compute_statistics(&[], StatsPeriod::Year, Utc::now());

        assert_eq!(stats.period, StatsPeriod::Year);
        assert_eq!(stats.total_sessions, 0);
        assert_eq!(stats.average_score, 0.0);
        assert_eq!(stats.improvement_trend, 0.0);
        assert!(stats.category_breakdown.is_empty());
        assert!(stats.recent_scores.is_empty());
    }

    #[test]
    fn test_period_parsing() {
        assert_eq!(StatsPeriod::from_str("week"), StatsPeriod::Week);
        assert_eq!(StatsPeriod::from_str("YEAR"), StatsPeriod::Year);
        assert_eq!(StatsPeriod::from_str("month"), StatsPeriod::Month);
        assert_eq!(StatsPeriod::from_str("quarter"), StatsPeriod::Month);
        assert_eq!(StatsPeriod::Week.days(), 7);
        assert_eq!(StatsPeriod::Month.days(), 30);
        assert_eq!(StatsPeriod::Year.days(), 365);
    }
}
