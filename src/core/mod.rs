// Core algorithm exports
pub mod display;
pub mod evaluator;
pub mod scoring;

pub use display::{describe_result_kind, describe_vibe_level};
pub use evaluator::{evaluate_pick, resolve_vibe_level, Evaluation, EvaluationError, Evaluator};
pub use scoring::{
    classify_compare_result, classify_exact, classify_guess_result, classify_vibe_level,
    shared_tags, ResultLabels, COMPARE_LABELS, GUESS_LABELS,
};
