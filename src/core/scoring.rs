use crate::models::{Question, QuestionOption, ResultKind, VibeLevel};
use std::collections::HashSet;

/// Outcome labels attached to an exact-match comparison
///
/// Guess and compare challenges run the same equality check; they differ only
/// in the vocabulary callers show to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultLabels {
    pub same: ResultKind,
    pub different: ResultKind,
}

pub const GUESS_LABELS: ResultLabels = ResultLabels {
    same: ResultKind::Correct,
    different: ResultKind::Wrong,
};

pub const COMPARE_LABELS: ResultLabels = ResultLabels {
    same: ResultKind::Match,
    different: ResultKind::Different,
};

/// Classify two picks by exact, case-sensitive identity
#[inline]
pub fn classify_exact(sender_option_id: &str, responder_id: &str, labels: ResultLabels) -> ResultKind {
    if sender_option_id == responder_id {
        labels.same
    } else {
        labels.different
    }
}

/// Did the responder guess the sender's pick?
#[inline]
pub fn classify_guess_result(sender_option_id: &str, responder_guess_id: &str) -> ResultKind {
    classify_exact(sender_option_id, responder_guess_id, GUESS_LABELS)
}

/// Did both players pick the same option?
#[inline]
pub fn classify_compare_result(sender_option_id: &str, responder_option_id: &str) -> ResultKind {
    classify_exact(sender_option_id, responder_option_id, COMPARE_LABELS)
}

/// Classify how closely two picks within a question line up
///
/// Tiers, first match wins:
/// 1. identical identifiers -> `Soulmates` (the question is not consulted)
/// 2. both identifiers resolve to options of `question` sharing at least one
///    tag -> `SameWavelength`
/// 3. anything else -> `BeautifullyDifferent`
///
/// Identifiers that are not options of `question` land in the last tier
/// instead of producing an error.
pub fn classify_vibe_level(
    sender_option_id: &str,
    responder_or_guess_id: &str,
    question: &Question,
) -> VibeLevel {
    if sender_option_id == responder_or_guess_id {
        return VibeLevel::Soulmates;
    }

    let sender = question.option(sender_option_id);
    let responder = question.option(responder_or_guess_id);

    match (sender, responder) {
        (Some(a), Some(b)) if !shared_tags(a, b).is_empty() => VibeLevel::SameWavelength,
        (Some(_), Some(_)) => VibeLevel::BeautifullyDifferent,
        _ => {
            tracing::debug!(
                question_id = %question.id,
                sender_option_id,
                responder_or_guess_id,
                "pick not found in question options, using weakest vibe tier"
            );
            VibeLevel::BeautifullyDifferent
        }
    }
}

/// Tags present on both options, each listed once, in the first option's order
pub fn shared_tags<'a>(a: &'a QuestionOption, b: &QuestionOption) -> Vec<&'a str> {
    let other: HashSet<&str> = b.tags.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();

    a.tags
        .iter()
        .map(String::as_str)
        .filter(|tag| other.contains(tag) && seen.insert(*tag))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuestionKind, QuestionNature, QuestionSection};

    fn create_option(id: &str, tags: &[&str]) -> QuestionOption {
        QuestionOption {
            id: id.to_string(),
            title: format!("Option {}", id),
            image_url: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn create_question(options: Vec<QuestionOption>) -> Question {
        Question {
            id: "test-question".to_string(),
            section: QuestionSection::SelfSelect,
            nature: QuestionNature::Choose,
            kind: QuestionKind::Preference,
            title: "Test Question".to_string(),
            prompt: "Pick one".to_string(),
            emoji: "🧪".to_string(),
            cover_image_url: String::new(),
            options,
        }
    }

    #[test]
    fn test_guess_result() {
        assert_eq!(classify_guess_result("a", "a"), ResultKind::Correct);
        assert_eq!(classify_guess_result("a", "b"), ResultKind::Wrong);
        // Exact match only
        assert_eq!(classify_guess_result("Rose", "rose"), ResultKind::Wrong);
        assert_eq!(classify_guess_result("rose", "rose "), ResultKind::Wrong);
    }

    #[test]
    fn test_compare_result() {
        assert_eq!(classify_compare_result("x", "x"), ResultKind::Match);
        assert_eq!(classify_compare_result("x", "y"), ResultKind::Different);
        assert_eq!(classify_compare_result("", ""), ResultKind::Match);
    }

    #[test]
    fn test_vibe_level_shared_tag() {
        let question = create_question(vec![
            create_option("x", &["a", "b"]),
            create_option("y", &["b", "c"]),
        ]);

        assert_eq!(classify_vibe_level("x", "y", &question), VibeLevel::SameWavelength);
        assert_eq!(classify_vibe_level("y", "x", &question), VibeLevel::SameWavelength);
    }

    #[test]
    fn test_vibe_level_no_overlap() {
        let question = create_question(vec![
            create_option("x", &["a"]),
            create_option("y", &["z"]),
        ]);

        assert_eq!(classify_vibe_level("x", "y", &question), VibeLevel::BeautifullyDifferent);
    }

    #[test]
    fn test_vibe_level_identical_ignores_question() {
        let empty = create_question(vec![]);
        assert_eq!(classify_vibe_level("ghost", "ghost", &empty), VibeLevel::Soulmates);
    }

    #[test]
    fn test_vibe_level_unknown_falls_through() {
        let question = create_question(vec![
            create_option("x", &["a"]),
            create_option("y", &["a"]),
        ]);

        assert_eq!(classify_vibe_level("x", "unknown", &question), VibeLevel::BeautifullyDifferent);
        assert_eq!(classify_vibe_level("unknown", "x", &question), VibeLevel::BeautifullyDifferent);
    }

    #[test]
    fn test_vibe_level_empty_tags() {
        let question = create_question(vec![create_option("x", &[]), create_option("y", &[])]);
        assert_eq!(classify_vibe_level("x", "y", &question), VibeLevel::BeautifullyDifferent);
    }

    #[test]
    fn test_shared_tags_dedupes() {
        let a = create_option("a", &["bold", "bold", "calm", "soft"]);
        let b = create_option("b", &["soft", "bold"]);

        assert_eq!(shared_tags(&a, &b), vec!["bold", "soft"]);
        assert!(shared_tags(&a, &create_option("c", &["edgy"])).is_empty());
    }

    #[test]
    fn test_vibe_level_follows_shared_tags() {
        let question = create_question(vec![
            create_option("x", &["bold", "bold", "calm"]),
            create_option("y", &["calm", "calm"]),
            create_option("z", &["edgy", "edgy"]),
        ]);

        for (a, b) in [("x", "y"), ("x", "z"), ("y", "z")] {
            let expected = if shared_tags(question.option(a).unwrap(), question.option(b).unwrap()).is_empty() {
                VibeLevel::BeautifullyDifferent
            } else {
                VibeLevel::SameWavelength
            };
            assert_eq!(classify_vibe_level(a, b, &question), expected, "{} vs {}", a, b);
        }
        assert_eq!(classify_vibe_level("x", "y", &question), VibeLevel::SameWavelength);
    }
}
