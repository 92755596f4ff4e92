use crate::config::CatalogSettings;
use crate::models::{Question, QuestionOption, QuestionSection};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use validator::Validate;

const BUILTIN_CATALOG: &str = include_str!("../../data/questions.toml");

/// Errors that can occur when loading a question catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid question {question_id:?}: {reason}")]
    Invalid { question_id: String, reason: String },

    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(String),

    #[error("Duplicate option id {option_id:?} in question {question_id:?}")]
    DuplicateOption { question_id: String, option_id: String },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    questions: Vec<Question>,
}

/// Curated set of questions, immutable once loaded
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Catalog compiled into the crate
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Load a catalog file with the same layout as the built-in one
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        tracing::debug!("Loading question catalog from {}", path.display());

        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Load the configured catalog, falling back to the built-in one
    pub fn from_settings(settings: &CatalogSettings) -> Result<Self, CatalogError> {
        match settings.path.as_deref().filter(|p| !p.is_empty()) {
            Some(path) => Self::load_from(path),
            None => Self::builtin(),
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(raw)?;
        Self::new(file.questions)
    }

    /// Build a catalog from already-parsed questions, validating each one
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut question_ids = HashSet::new();

        for question in &questions {
            validate_question(question)?;

            if !question_ids.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }
        }

        tracing::debug!("Question catalog holds {} questions", questions.len());

        Ok(Self { questions })
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// Find an option together with the question it belongs to
    pub fn option(&self, question_id: &str, option_id: &str) -> Option<(&Question, &QuestionOption)> {
        let question = self.question(question_id)?;
        let option = question.option(option_id)?;
        Some((question, option))
    }

    pub fn by_section(&self, section: QuestionSection) -> Vec<&Question> {
        self.questions.iter().filter(|q| q.section == section).collect()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn validate_question(question: &Question) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::Invalid {
        question_id: question.id.clone(),
        reason,
    };

    question.validate().map_err(|e| invalid(e.to_string()))?;

    let mut option_ids = HashSet::new();
    for option in &question.options {
        option
            .validate()
            .map_err(|e| invalid(format!("option {:?}: {}", option.id, e)))?;

        if !option_ids.insert(option.id.as_str()) {
            return Err(CatalogError::DuplicateOption {
                question_id: question.id.clone(),
                option_id: option.id.clone(),
            });
        }
    }

    Ok(())
}
