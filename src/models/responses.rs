use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{ResultKind, VibeLevel};

/// Response row ready to insert into the backend's `challenge_responses` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewChallengeResponse {
    pub challenge_id: Uuid,
    pub responder_id: Uuid,
    pub responder_option_id: Option<String>,
    pub responder_guess_id: Option<String>,
    pub is_correct: Option<bool>,
    pub result_type: ResultKind,
    pub vibe_level: VibeLevel,
}

/// Display copy for a vibe level or a result kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayInfo {
    pub label: &'static str,
    pub emoji: &'static str,
    pub message: &'static str,
    pub color: &'static str,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
