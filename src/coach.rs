use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

use crate::analysis::{
    AnalysisError, Category, DetailedFeedback, FollowUpGenerator, ResponseAnalyzer,
};
use crate::generation::TextGenerator;
use crate::questions::{Difficulty, PracticeQuestion, QuestionBank};
use crate::session::{
    compute_statistics, PracticeSession, PracticeStatistics, SessionError, SessionPage,
    SessionQuery, SessionStore, StatsPeriod,
};

#[derive(Error, Debug)]
pub enum CoachError {
    #[error("Invalid request: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error("Session storage failed: {0}")]
    Store(#[from] SessionError),
}

impl CoachError {
    /// Whether retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CoachError::Analysis(e) if e.is_retryable())
    }
}

/// One practice round to analyze. Only `text` is required; anonymous
/// requests (no `user_id`) are analyzed but not recorded.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(custom = "crate::validators::validate_response_text")]
    pub text: String,
    pub question: Option<String>,
    pub category: Option<Category>,
    #[validate(length(min = 3, max = 128), regex = "crate::validators::USER_ID_RE")]
    pub user_id: Option<String>,
}

impl AnalyzeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            question: None,
            category: None,
            user_id: None,
        }
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub overall_score: f64,
    pub detailed_feedback: DetailedFeedback,
    pub follow_up_question: String,
    pub improvement_suggestions: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Facade over the whole practice flow: validation, scoring, follow-up
/// generation, history, and the stock question bank.
pub struct InterviewCoach {
    analyzer: ResponseAnalyzer,
    follow_up: FollowUpGenerator,
    store: Arc<dyn SessionStore>,
    questions: QuestionBank,
}

impl InterviewCoach {
    pub fn new(generator: Arc<dyn TextGenerator>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            analyzer: ResponseAnalyzer::new(Arc::clone(&generator)),
            follow_up: FollowUpGenerator::new(generator),
            store,
            questions: QuestionBank::new(),
        }
    }

    /// Runs the full analysis round: score the response, generate a
    /// follow-up in parallel, and record the session for known users.
    pub async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse, CoachError> {
        request.validate()?;

        let category = request.category.unwrap_or_default();
        let question = request.question.as_deref().unwrap_or("");

        let (analysis, follow_up_question) = tokio::join!(
            self.analyzer.analyze(&request.text, question, category),
            self.follow_up.generate(question, &request.text, category),
        );
        let analysis = analysis?;

        let response = AnalyzeResponse {
            success: true,
            overall_score: analysis.overall_score,
            detailed_feedback: analysis.detailed_feedback.clone(),
            follow_up_question: follow_up_question.clone(),
            improvement_suggestions: analysis.detailed_feedback.suggestions.clone(),
            timestamp: Utc::now(),
        };

        if let Some(user_id) = &request.user_id {
            let session = PracticeSession {
                id: Uuid::new_v4(),
                user_id: user_id.clone(),
                question: question.to_string(),
                response: request.text.clone(),
                category,
                analysis,
                follow_up_question,
                timestamp: response.timestamp,
            };
            self.store.record(session).await?;
            info!("Analysis completed for user: {}", user_id);
        }

        Ok(response)
    }

    /// Pages through a user's recorded sessions, newest first.
    pub async fn user_sessions(
        &self,
        user_id: &str,
        query: SessionQuery,
    ) -> Result<SessionPage, CoachError> {
        Ok(self.store.sessions_for_user(user_id, query).await?)
    }

    /// Aggregates a user's progress over the given period.
    pub async fn user_statistics(
        &self,
        user_id: &str,
        period: StatsPeriod,
    ) -> Result<PracticeStatistics, CoachError> {
        let now = Utc::now();
        let query = SessionQuery {
            limit: Some(usize::MAX),
            start: Some(now - Duration::days(period.days())),
            end: None,
        };
        let page = self.store.sessions_for_user(user_id, query).await?;
        Ok(compute_statistics(&page.sessions, period, now))
    }

    pub fn practice_questions(
        &self,
        category: Category,
        difficulty: Difficulty,
        limit: Option<usize>,
    ) -> Vec<PracticeQuestion> {
        self.questions.questions(category, difficulty, limit)
    }
}
