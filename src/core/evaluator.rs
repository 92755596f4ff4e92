use crate::core::scoring::{classify_compare_result, classify_guess_result, classify_vibe_level};
use crate::models::{
    ChallengeResponse, NewChallengeResponse, PlayMode, Question, ResultKind, ScoreRequest,
    VibeLevel,
};
use crate::services::Catalog;
use std::sync::Arc;
use thiserror::Error;

/// Errors that stop a response from being scored
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Challenge has no sender pick to compare against")]
    MissingSenderPick,

    #[error("Play mode {0} has no responder to score")]
    NotScorable(PlayMode),
}

/// Classification of one responder pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub result: ResultKind,
    pub vibe_level: VibeLevel,
    /// Only set for guess challenges
    pub is_correct: Option<bool>,
}

/// Score a responder's pick the way the given play mode calls for
///
/// Returns `None` for solo play, which has no responder.
pub fn evaluate_pick(
    play_mode: PlayMode,
    sender_option_id: &str,
    responder_pick: &str,
    question: &Question,
) -> Option<Evaluation> {
    let (result, is_correct) = match play_mode {
        PlayMode::Solo => return None,
        PlayMode::GuessMyPick => {
            let result = classify_guess_result(sender_option_id, responder_pick);
            (result, Some(result == ResultKind::Correct))
        }
        PlayMode::Compare | PlayMode::TwoPlayerGuess => {
            (classify_compare_result(sender_option_id, responder_pick), None)
        }
    };

    Some(Evaluation {
        result,
        vibe_level: classify_vibe_level(sender_option_id, responder_pick, question),
        is_correct,
    })
}

/// Vibe level to show for an existing response
///
/// A level stored with the response wins; otherwise it is recomputed from the
/// responder's guess, or their own pick when there is no guess.
pub fn resolve_vibe_level(
    sender_option_id: Option<&str>,
    response: &ChallengeResponse,
    question: &Question,
) -> Option<VibeLevel> {
    let sender_option_id = sender_option_id.filter(|id| !id.is_empty())?;

    if let Some(stored) = response.vibe_level {
        return Some(stored);
    }

    let pick = response.responder_pick()?;
    Some(classify_vibe_level(sender_option_id, pick, question))
}

/// Turns score requests into response rows using a shared question catalog
#[derive(Debug, Clone)]
pub struct Evaluator {
    catalog: Arc<Catalog>,
}

impl Evaluator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Score a request and build the row the caller persists
    pub fn evaluate(&self, req: &ScoreRequest) -> Result<NewChallengeResponse, EvaluationError> {
        let question = self
            .catalog
            .question(&req.question_id)
            .ok_or_else(|| EvaluationError::UnknownQuestion(req.question_id.clone()))?;

        let sender_option_id = req
            .sender_option_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(EvaluationError::MissingSenderPick)?;

        let evaluation = evaluate_pick(req.play_mode, sender_option_id, &req.responder_pick, question)
            .ok_or(EvaluationError::NotScorable(req.play_mode))?;

        // Guesses and own picks live in separate columns
        let (responder_option_id, responder_guess_id) = match req.play_mode {
            PlayMode::GuessMyPick => (None, Some(req.responder_pick.clone())),
            _ => (Some(req.responder_pick.clone()), None),
        };

        tracing::debug!(
            challenge_id = %req.challenge_id,
            play_mode = %req.play_mode,
            result = %evaluation.result,
            vibe_level = %evaluation.vibe_level,
            "scored challenge response"
        );

        Ok(NewChallengeResponse {
            challenge_id: req.challenge_id,
            responder_id: req.responder_id,
            responder_option_id,
            responder_guess_id,
            is_correct: evaluation.is_correct,
            result_type: evaluation.result,
            vibe_level: evaluation.vibe_level,
        })
    }
}
