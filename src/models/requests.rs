use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::domain::{Challenge, PlayMode};

/// Request to score one responder's pick against a challenge
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[serde(alias = "challenge_id", rename = "challengeId")]
    pub challenge_id: Uuid,
    #[serde(alias = "responder_id", rename = "responderId")]
    pub responder_id: Uuid,
    #[validate(length(min = 1))]
    #[serde(alias = "question_id", rename = "questionId")]
    pub question_id: String,
    #[serde(alias = "play_mode", rename = "playMode")]
    pub play_mode: PlayMode,
    #[serde(default)]
    #[serde(alias = "sender_option_id", rename = "senderOptionId")]
    pub sender_option_id: Option<String>,
    #[validate(length(min = 1))]
    #[serde(alias = "responder_pick", rename = "responderPick")]
    pub responder_pick: String,
}

impl ScoreRequest {
    /// Request for a responder's pick on a stored challenge
    pub fn for_challenge(challenge: &Challenge, responder_id: Uuid, responder_pick: impl Into<String>) -> Self {
        Self {
            challenge_id: challenge.id,
            responder_id,
            question_id: challenge.question_id.clone(),
            play_mode: challenge.play_mode,
            sender_option_id: challenge.sender_option_id.clone(),
            responder_pick: responder_pick.into(),
        }
    }
}
