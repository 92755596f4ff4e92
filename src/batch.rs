use crate::core::Evaluator;
use crate::models::{ErrorResponse, NewChallengeResponse, ScoreRequest};
use std::io::{self, BufRead, Write};
use validator::Validate;

/// Counts for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub scored: usize,
    pub rejected: usize,
}

fn rejection(error: &str, message: String) -> ErrorResponse {
    ErrorResponse {
        error: error.to_string(),
        message,
    }
}

/// Score one raw input line
pub fn score_line(evaluator: &Evaluator, raw: &[u8]) -> Result<NewChallengeResponse, ErrorResponse> {
    let line = std::str::from_utf8(raw)
        .map_err(|e| rejection("invalid_utf8", format!("Invalid UTF-8: {}", e)))?;

    let req: ScoreRequest = serde_json::from_str(line)
        .map_err(|e| rejection("invalid_json", format!("Invalid JSON: {}", e)))?;

    req.validate()
        .map_err(|e| rejection("validation_failed", e.to_string()))?;

    evaluator
        .evaluate(&req)
        .map_err(|e| rejection("evaluation_failed", e.to_string()))
}

/// Score newline-delimited requests from `reader`, one JSON line out per request
///
/// Blank lines are skipped. A bad line produces an `ErrorResponse` line and
/// the batch keeps going; only I/O failures stop it.
pub fn run<R: BufRead, W: Write>(evaluator: &Evaluator, reader: R, mut writer: W) -> io::Result<BatchStats> {
    let mut stats = BatchStats::default();

    for (index, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let raw = raw.strip_suffix(b"\r").unwrap_or(&raw);

        if raw.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        match score_line(evaluator, raw) {
            Ok(row) => {
                stats.scored += 1;
                serde_json::to_writer(&mut writer, &row)?;
            }
            Err(err) => {
                stats.rejected += 1;
                tracing::warn!("Rejected request on line {}: {}", index + 1, err.message);
                serde_json::to_writer(&mut writer, &err)?;
            }
        }

        writer.write_all(b"\n")?;
    }

    writer.flush()?;

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Catalog;
    use serde_json::Value;
    use std::sync::Arc;
    use uuid::Uuid;

    fn create_evaluator() -> Evaluator {
        Evaluator::new(Arc::new(Catalog::builtin().unwrap()))
    }

    fn request_line(question_id: &str, pick: &str) -> String {
        format!(
            r#"{{"challengeId":"{}","responderId":"{}","questionId":"{}","playMode":"compare","senderOptionId":"mansion-modern","responderPick":"{}"}}"#,
            Uuid::new_v4(),
            Uuid::new_v4(),
            question_id,
            pick
        )
    }

    fn run_batch(input: &[u8]) -> (BatchStats, Vec<Value>) {
        let evaluator = create_evaluator();
        let mut output = Vec::new();

        let stats = run(&evaluator, input, &mut output).unwrap();

        let lines = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        (stats, lines)
    }

    #[test]
    fn test_invalid_utf8_line_does_not_stop_batch() {
        let valid = request_line("billionaire-mansion", "mansion-penthouse");
        let mut input = Vec::new();
        input.extend_from_slice(valid.as_bytes());
        input.extend_from_slice(b"\n\xff\xfe bad\n");
        input.extend_from_slice(valid.as_bytes());
        input.push(b'\n');

        let (stats, lines) = run_batch(&input);

        assert_eq!(stats, BatchStats { scored: 2, rejected: 1 });
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["vibe_level"], "same-wavelength");
        assert_eq!(lines[1]["error"], "invalid_utf8");
        assert_eq!(lines[2]["vibe_level"], "same-wavelength");
    }

    #[test]
    fn test_error_codes() {
        let cases = [
            ("{not json".to_string(), "invalid_json"),
            (request_line("billionaire-mansion", ""), "validation_failed"),
            (request_line("no-such-question", "mansion-castle"), "evaluation_failed"),
        ];

        for (line, code) in cases {
            let (stats, lines) = run_batch(line.as_bytes());

            assert_eq!(stats, BatchStats { scored: 0, rejected: 1 }, "{}", code);
            assert_eq!(lines.len(), 1);
            assert_eq!(lines[0]["error"], code);
            assert!(lines[0]["message"].as_str().is_some_and(|m| !m.is_empty()));
        }
    }

    #[test]
    fn test_blank_lines_skipped_and_one_output_per_request() {
        let input = format!(
            "\n{}\r\n   \n\n{}\n{}",
            request_line("billionaire-mansion", "mansion-modern"),
            request_line("billionaire-mansion", "mansion-castle"),
            "{}"
        );

        let (stats, lines) = run_batch(input.as_bytes());

        assert_eq!(stats, BatchStats { scored: 2, rejected: 1 });
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["result_type"], "match");
        assert_eq!(lines[1]["vibe_level"], "beautifully-different");
        assert_eq!(lines[2]["error"], "invalid_json");
    }

    #[test]
    fn test_empty_input() {
        let (stats, lines) = run_batch(b"");
        assert_eq!(stats, BatchStats::default());
        assert!(lines.is_empty());
    }

    #[test]
    fn test_score_line_row() {
        let evaluator = create_evaluator();
        let line = request_line("billionaire-mansion", "mansion-modern");

        let row = score_line(&evaluator, line.as_bytes()).unwrap();
        assert_eq!(row.responder_option_id.as_deref(), Some("mansion-modern"));
        assert_eq!(row.is_correct, None);
    }
}
