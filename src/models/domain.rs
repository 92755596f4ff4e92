use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

/// Error returned when a stored tag string does not name a known variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} tag: {value:?}")]
pub struct ParseTagError {
    pub kind: &'static str,
    pub value: String,
}

/// Which part of the app a question is presented in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionSection {
    SelfSelect,
    Algorithm,
}

/// Whether players choose for themselves or guess someone else's answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionNature {
    Choose,
    Guess,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    #[serde(alias = "PREFERENCE")]
    Preference,
    #[serde(alias = "IDENTITY")]
    Identity,
}

/// One selectable item within a question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct QuestionOption {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(rename = "imageUrl", alias = "image_url", default)]
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A themed set of options presented to users for selection or guessing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Question {
    #[validate(length(min = 1))]
    pub id: String,
    pub section: QuestionSection,
    pub nature: QuestionNature,
    #[serde(alias = "type")]
    pub kind: QuestionKind,
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(rename = "coverImageUrl", alias = "cover_image_url", default)]
    pub cover_image_url: String,
    #[validate(length(min = 1))]
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// Look up an option of this question by exact identifier
    pub fn option(&self, option_id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

/// How a challenge is played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayMode {
    Solo,
    Compare,
    GuessMyPick,
    TwoPlayerGuess,
}

impl PlayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayMode::Solo => "solo",
            PlayMode::Compare => "compare",
            PlayMode::GuessMyPick => "guess-my-pick",
            PlayMode::TwoPlayerGuess => "two-player-guess",
        }
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayMode {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solo" => Ok(PlayMode::Solo),
            "compare" => Ok(PlayMode::Compare),
            "guess-my-pick" => Ok(PlayMode::GuessMyPick),
            "two-player-guess" => Ok(PlayMode::TwoPlayerGuess),
            other => Err(ParseTagError { kind: "play mode", value: other.to_string() }),
        }
    }
}

/// Binary outcome of a guess (correct/wrong) or a comparison (match/different)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Correct,
    Wrong,
    Match,
    Different,
}

impl ResultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKind::Correct => "correct",
            ResultKind::Wrong => "wrong",
            ResultKind::Match => "match",
            ResultKind::Different => "different",
        }
    }

    /// True for the "same pick" side of either label pair
    pub fn is_positive(&self) -> bool {
        matches!(self, ResultKind::Correct | ResultKind::Match)
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultKind {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "correct" => Ok(ResultKind::Correct),
            "wrong" => Ok(ResultKind::Wrong),
            "match" => Ok(ResultKind::Match),
            "different" => Ok(ResultKind::Different),
            other => Err(ParseTagError { kind: "result", value: other.to_string() }),
        }
    }
}

/// Three-tier compatibility classification, strongest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VibeLevel {
    Soulmates,
    SameWavelength,
    BeautifullyDifferent,
}

impl VibeLevel {
    pub const ALL: [VibeLevel; 3] = [
        VibeLevel::Soulmates,
        VibeLevel::SameWavelength,
        VibeLevel::BeautifullyDifferent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VibeLevel::Soulmates => "soulmates",
            VibeLevel::SameWavelength => "same-wavelength",
            VibeLevel::BeautifullyDifferent => "beautifully-different",
        }
    }
}

impl fmt::Display for VibeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VibeLevel {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "soulmates" => Ok(VibeLevel::Soulmates),
            "same-wavelength" => Ok(VibeLevel::SameWavelength),
            "beautifully-different" => Ok(VibeLevel::BeautifullyDifferent),
            other => Err(ParseTagError { kind: "vibe level", value: other.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeStatus {
    Active,
    Completed,
}

/// Challenge row as stored by the hosted backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub question_id: String,
    pub play_mode: PlayMode,
    #[serde(default)]
    pub sender_option_id: Option<String>,
    #[serde(default)]
    pub swap_challenge_id: Option<Uuid>,
    pub status: ChallengeStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Challenge response row as stored by the hosted backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeResponse {
    pub id: Uuid,
    pub challenge_id: Uuid,
    pub responder_id: Uuid,
    #[serde(default)]
    pub responder_option_id: Option<String>,
    #[serde(default)]
    pub responder_guess_id: Option<String>,
    #[serde(default)]
    pub is_correct: Option<bool>,
    #[serde(default)]
    pub result_type: Option<ResultKind>,
    #[serde(default)]
    pub vibe_level: Option<VibeLevel>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl ChallengeResponse {
    /// The responder's guess if present, otherwise their own pick
    pub fn responder_pick(&self) -> Option<&str> {
        self.responder_guess_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .or_else(|| self.responder_option_id.as_deref().filter(|id| !id.is_empty()))
    }
}
