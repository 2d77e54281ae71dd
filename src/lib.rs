//! PrepCoach backend: interview response analysis, scoring, follow-up
//! generation, and practice session tracking.

pub mod analysis;
pub mod coach;
pub mod config;
pub mod generation;
pub mod questions;
pub mod session;
pub mod transcript;
pub mod validators;

pub use coach::{AnalyzeRequest, AnalyzeResponse, CoachError, InterviewCoach};
pub use config::AppConfig;
pub use generation::OpenAiClient;
