use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Interview question category. Steers prompt wording and groups sessions
/// in progress statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Behavioral,
    Technical,
    Leadership,
    Situational,
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::General => "general",
            Category::Behavioral => "behavioral",
            Category::Technical => "technical",
            Category::Leadership => "leadership",
            Category::Situational => "situational",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "general" => Some(Category::General),
            "behavioral" => Some(Category::Behavioral),
            "technical" => Some(Category::Technical),
            "leadership" => Some(Category::Leadership),
            "situational" => Some(Category::Situational),
            _ => None,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::General
    }
}

/// The five scored dimensions of the feedback rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RubricDimension {
    ContentQuality,
    CommunicationClarity,
    ConfidenceLevel,
    StructureOrganization,
    Professionalism,
}

impl RubricDimension {
    pub const ALL: [RubricDimension; 5] = [
        RubricDimension::ContentQuality,
        RubricDimension::CommunicationClarity,
        RubricDimension::ConfidenceLevel,
        RubricDimension::StructureOrganization,
        RubricDimension::Professionalism,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            RubricDimension::ContentQuality => "content_quality",
            RubricDimension::CommunicationClarity => "communication_clarity",
            RubricDimension::ConfidenceLevel => "confidence_level",
            RubricDimension::StructureOrganization => "structure_organization",
            RubricDimension::Professionalism => "professionalism",
        }
    }
}

/// Score and commentary for a single rubric dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionFeedback {
    pub score: u8,
    pub feedback: String,
}

/// Typed shape of the model's rubric reply. All five dimensions are
/// required; the free-form lists default to empty when the model omits
/// them. Extra keys in the reply are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RubricFeedback {
    pub content_quality: DimensionFeedback,
    pub communication_clarity: DimensionFeedback,
    pub confidence_level: DimensionFeedback,
    pub structure_organization: DimensionFeedback,
    pub professionalism: DimensionFeedback,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub areas_for_improvement: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl RubricFeedback {
    pub fn dimension(&self, dimension: RubricDimension) -> &DimensionFeedback {
        match dimension {
            RubricDimension::ContentQuality => &self.content_quality,
            RubricDimension::CommunicationClarity => &self.communication_clarity,
            RubricDimension::ConfidenceLevel => &self.confidence_level,
            RubricDimension::StructureOrganization => &self.structure_organization,
            RubricDimension::Professionalism => &self.professionalism,
        }
    }
}

/// Outcome of the deterministic filler-word scan. `breakdown` holds only
/// terms that actually occurred, in scan order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillerAnalysis {
    pub score: u8,
    pub total_count: usize,
    pub percentage: f64,
    pub breakdown: IndexMap<String, usize>,
    pub feedback: String,
}

/// Full per-response feedback payload: the five rubric dimensions, the
/// model's free-form lists, and the local filler-word analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedFeedback {
    pub content_quality: DimensionFeedback,
    pub communication_clarity: DimensionFeedback,
    pub confidence_level: DimensionFeedback,
    pub structure_organization: DimensionFeedback,
    pub professionalism: DimensionFeedback,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub suggestions: Vec<String>,
    pub filler_words: FillerAnalysis,
}

impl DetailedFeedback {
    pub fn from_parts(rubric: RubricFeedback, filler_words: FillerAnalysis) -> Self {
        Self {
            content_quality: rubric.content_quality,
            communication_clarity: rubric.communication_clarity,
            confidence_level: rubric.confidence_level,
            structure_organization: rubric.structure_organization,
            professionalism: rubric.professionalism,
            strengths: rubric.strengths,
            areas_for_improvement: rubric.areas_for_improvement,
            suggestions: rubric.suggestions,
            filler_words,
        }
    }

    pub fn dimension(&self, dimension: RubricDimension) -> &DimensionFeedback {
        match dimension {
            RubricDimension::ContentQuality => &self.content_quality,
            RubricDimension::CommunicationClarity => &self.communication_clarity,
            RubricDimension::ConfidenceLevel => &self.confidence_level,
            RubricDimension::StructureOrganization => &self.structure_organization,
            RubricDimension::Professionalism => &self.professionalism,
        }
    }

    /// Every score the payload carries: the five rubric dimensions followed
    /// by the filler score.
    pub fn scores(&self) -> Vec<u8> {
        let mut scores: Vec<u8> = RubricDimension::ALL
            .iter()
            .map(|dimension| self.dimension(*dimension).score)
            .collect();
        scores.push(self.filler_words.score);
        scores
    }
}

/// Complete analysis of one practice answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub detailed_feedback: DetailedFeedback,
    pub overall_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in [
            Category::General,
            Category::Behavioral,
            Category::Technical,
            Category::Leadership,
            Category::Situational,
        ] {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_str("TECHNICAL"), Some(Category::Technical));
        assert_eq!(Category::from_str("casual"), None);
        assert_eq!(Category::default(), Category::General);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Behavioral).unwrap();
        assert_eq!(json, "\"behavioral\"");
        let parsed: Category = serde_json::from_str("\"leadership\"").unwrap();
        assert_eq!(parsed, Category::Leadership);
    }

    #[test]
    fn test_scores_lists_dimensions_then_filler() {
        let rubric = RubricFeedback {
            content_quality: DimensionFeedback { score: 8, feedback: "solid".to_string() },
            communication_clarity: DimensionFeedback { score: 7, feedback: "clear".to_string() },
            confidence_level: DimensionFeedback { score: 6, feedback: "steady".to_string() },
            structure_organization: DimensionFeedback { score: 9, feedback: "tight".to_string() },
            professionalism: DimensionFeedback { score: 8, feedback: "polished".to_string() },
            strengths: vec![],
            areas_for_improvement: vec![],
            suggestions: vec![],
        };
        let filler = FillerAnalysis {
            score: 10,
            total_count: 0,
            percentage: 0.0,
            breakdown: IndexMap::new(),
            feedback: "clean".to_string(),
        };

        let detailed = DetailedFeedback::from_parts(rubric, filler);
        assert_eq!(detailed.scores(), vec![8, 7, 6, 9, 8, 10]);
    }
}
