use serde::{Deserialize, Serialize};

use crate::analysis::Category;

/// Questions returned per request when no limit is given.
pub const DEFAULT_QUESTION_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn from_str(difficulty: &str) -> Self {
        match difficulty.trim().to_lowercase().as_str() {
            "beginner" => Difficulty::Beginner,
            "advanced" => Difficulty::Advanced,
            _ => Difficulty::Intermediate,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Intermediate
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeQuestion {
    pub id: String,
    pub question: String,
    pub category: Category,
    pub difficulty: Difficulty,
}

/// Built-in practice questions, keyed by category and difficulty.
///
/// Leadership and situational rounds have no stock questions; callers
/// supply their own for those categories.
pub struct QuestionBank {
    questions: Vec<PracticeQuestion>,
}

const DEFAULT_QUESTIONS: [(&str, &str, Category, Difficulty); 20] = [
    (
        "gen_1",
        "Tell me about yourself.",
        Category::General,
        Difficulty::Beginner,
    ),
    (
        "gen_2",
        "Why are you interested in this position?",
        Category::General,
        Difficulty::Beginner,
    ),
    (
        "gen_3",
        "What are your greatest strengths?",
        Category::General,
        Difficulty::Beginner,
    ),
    (
        "gen_4",
        "Describe a challenging situation you faced and how you handled it.",
        Category::General,
        Difficulty::Intermediate,
    ),
    (
        "gen_5",
        "Where do you see yourself in 5 years?",
        Category::General,
        Difficulty::Intermediate,
    ),
    (
        "gen_6",
        "Why should we hire you over other candidates?",
        Category::General,
        Difficulty::Intermediate,
    ),
    (
        "gen_7",
        "How would you handle a situation where you disagree with your manager?",
        Category::General,
        Difficulty::Advanced,
    ),
    (
        "gen_8",
        "Describe a time when you had to make a difficult decision with limited information.",
        Category::General,
        Difficulty::Advanced,
    ),
    (
        "beh_1",
        "Tell me about a time you worked in a team.",
        Category::Behavioral,
        Difficulty::Beginner,
    ),
    (
        "beh_2",
        "Describe a time when you helped a colleague.",
        Category::Behavioral,
        Difficulty::Beginner,
    ),
    (
        "beh_3",
        "Tell me about a time you had to deal with a difficult customer.",
        Category::Behavioral,
        Difficulty::Intermediate,
    ),
    (
        "beh_4",
        "Describe a situation where you had to adapt to change.",
        Category::Behavioral,
        Difficulty::Intermediate,
    ),
    (
        "beh_5",
        "Tell me about a time you had to influence someone without authority.",
        Category::Behavioral,
        Difficulty::Advanced,
    ),
    (
        "beh_6",
        "Describe a time when you had to make an unpopular decision.",
        Category::Behavioral,
        Difficulty::Advanced,
    ),
    (
        "tech_1",
        "What programming languages are you familiar with?",
        Category::Technical,
        Difficulty::Beginner,
    ),
    (
        "tech_2",
        "Explain what a database is.",
        Category::Technical,
        Difficulty::Beginner,
    ),
    (
        "tech_3",
        "How would you optimize a slow-performing application?",
        Category::Technical,
        Difficulty::Intermediate,
    ),
    (
        "tech_4",
        "Explain the difference between SQL and NoSQL databases.",
        Category::Technical,
        Difficulty::Intermediate,
    ),
    (
        "tech_5",
        "Design a system that can handle millions of users.",
        Category::Technical,
        Difficulty::Advanced,
    ),
    (
        "tech_6",
        "How would you implement a caching strategy for a web application?",
        Category::Technical,
        Difficulty::Advanced,
    ),
];

impl QuestionBank {
    pub fn new() -> Self {
        let questions = DEFAULT_QUESTIONS
            .iter()
            .map(|(id, question, category, difficulty)| PracticeQuestion {
                id: id.to_string(),
                question: question.to_string(),
                category: *category,
                difficulty: *difficulty,
            })
            .collect();
        Self { questions }
    }

    /// Returns up to `limit` questions matching the category and difficulty.
    pub fn questions(
        &self,
        category: Category,
        difficulty: Difficulty,
        limit: Option<usize>,
    ) -> Vec<PracticeQuestion> {
        let limit = limit.unwrap_or(DEFAULT_QUESTION_LIMIT);
        self.questions
            .iter()
            .filter(|q| q.category == category && q.difficulty == difficulty)
            .take(limit)
            .cloned()
            .collect()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::new()
    }
}
