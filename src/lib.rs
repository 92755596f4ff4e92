//! VibeCheck scoring - compatibility core for the VibeCheck challenge app
//!
//! Players pick favorites among a question's options, then challenge friends
//! to guess or match those picks. This crate classifies each response: a
//! binary guess/compare result plus a three-tier "vibe level" derived from
//! exact matches and shared option tags.

pub mod batch;
pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use self::core::{
    classify_compare_result, classify_guess_result, classify_vibe_level, describe_vibe_level,
    Evaluator,
};
pub use models::{PlayMode, Question, QuestionOption, ResultKind, ScoreRequest, VibeLevel};
pub use services::Catalog;
