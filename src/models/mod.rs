// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Challenge, ChallengeResponse, ChallengeStatus, ParseTagError, PlayMode, Question,
    QuestionKind, QuestionNature, QuestionOption, QuestionSection, ResultKind, VibeLevel,
};
pub use requests::ScoreRequest;
pub use responses::{DisplayInfo, ErrorResponse, NewChallengeResponse};
