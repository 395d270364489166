//! Schedule parser
//!
//! Turns extractor text into task records. Models often wrap their answer in
//! a markdown fence or add a sentence before it, so decoding happens in two
//! passes:
//!
//! 1. strip surrounding code fences and decode the remainder as a whole;
//! 2. if that fails, decode the first well-formed, non-empty task array found
//!    at any `[` in the text, ignoring whatever follows it. An empty array
//!    counts only when nothing else decodes.
//!
//! Text with no task array at all is `MalformedOutput`.

use planshot_domain::constants::MALFORMED_PREVIEW_CHARS;
use planshot_domain::{PlanshotError, Result, TaskRecord};
use serde_json::Deserializer;
use tracing::debug;

const FENCE: &str = "```";

/// Remove markdown code-fence markers and surrounding whitespace.
///
/// Handles an opening fence with or without a language tag (```` ```json ````)
/// and a closing fence. Applying it twice gives the same result as applying
/// it once; text without fences is only trimmed.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    loop {
        let stripped = strip_fence_once(text);
        if stripped.len() == text.len() {
            return text;
        }
        text = stripped;
    }
}

fn strip_fence_once(text: &str) -> &str {
    let mut text = text;
    if let Some(rest) = text.strip_prefix(FENCE) {
        let tag_len = rest.find(|c: char| !c.is_ascii_alphanumeric()).unwrap_or(rest.len());
        text = rest[tag_len..].trim_start();
    }
    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest.trim_end();
    }
    text
}

/// Decode extractor output into task records, in the order written.
///
/// # Errors
/// Returns `PlanshotError::MalformedOutput` when no array of task objects
/// (each with `summary`, `start_iso` and `end_iso`) can be decoded.
pub fn parse_schedule(raw: &str) -> Result<Vec<TaskRecord>> {
    let text = strip_code_fences(raw);
    if text.is_empty() {
        return Err(PlanshotError::MalformedOutput("extractor returned no text".into()));
    }

    let whole_error = match serde_json::from_str::<Vec<TaskRecord>>(text) {
        Ok(tasks) => return Ok(tasks),
        Err(err) => err,
    };

    if let Some((offset, tasks)) = first_task_array(text) {
        debug!(offset, task_count = tasks.len(), "decoded task array embedded in extractor text");
        return Ok(tasks);
    }

    Err(PlanshotError::MalformedOutput(format!(
        "{whole_error}; response began: {:?}",
        preview(text)
    )))
}

/// First `[` from which a non-empty task array decodes, with the decoded
/// tasks. An empty array is returned only when no non-empty one exists.
fn first_task_array(text: &str) -> Option<(usize, Vec<TaskRecord>)> {
    let mut first_empty = None;
    for (offset, _) in text.match_indices('[') {
        let decoded = Deserializer::from_str(&text[offset..])
            .into_iter::<Vec<TaskRecord>>()
            .next()
            .and_then(|decoded| decoded.ok());
        match decoded {
            Some(tasks) if !tasks.is_empty() => return Some((offset, tasks)),
            Some(tasks) => {
                first_empty.get_or_insert((offset, tasks));
            }
            None => {}
        }
    }
    first_empty
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(MALFORMED_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GYM: &str = r#"[{"summary":"Gym","start_iso":"2025-06-01T07:00:00","end_iso":"2025-06-01T08:00:00"}]"#;

    const TWO_TASKS: &str = r#"[
        {"summary": "Standup", "start_iso": "2025-12-29T09:00:00", "end_iso": "2025-12-29T09:15:00"},
        {"summary": "Deep work", "start_iso": "2025-12-29T09:30:00", "end_iso": "2025-12-29T12:00:00"}
    ]"#;

    fn fenced_variants(body: &str) -> Vec<String> {
        vec![
            format!("```json\n{body}\n```"),
            format!("```JSON\n{body}\n```\n"),
            format!("```\n{body}\n```"),
            format!("  ```json{body}```  "),
            format!("\n\n{body}\n\n"),
        ]
    }

    #[test]
    fn parses_single_task() {
        let tasks = parse_schedule(GYM).expect("should parse");

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].summary(), "Gym");
        assert_eq!(tasks[0].start(), "2025-06-01T07:00:00");
        assert_eq!(tasks[0].end(), "2025-06-01T08:00:00");
    }

    #[test]
    fn fenced_text_parses_like_unfenced_text() {
        for body in [GYM, TWO_TASKS, "[]"] {
            let expected = parse_schedule(body).expect("unfenced should parse");
            for wrapped in fenced_variants(body) {
                assert_eq!(parse_schedule(&wrapped).expect("fenced should parse"), expected);
            }
        }
    }

    #[test]
    fn fence_stripping_is_idempotent() {
        for body in [GYM, TWO_TASKS, "plain words", ""] {
            for wrapped in fenced_variants(body) {
                let once = strip_code_fences(&wrapped);
                assert_eq!(strip_code_fences(once), once);
            }
            assert_eq!(strip_code_fences(body), body.trim());
        }
    }

    #[test]
    fn keeps_input_order() {
        let tasks = parse_schedule(TWO_TASKS).expect("should parse");
        let summaries: Vec<_> = tasks.iter().map(TaskRecord::summary).collect();

        assert_eq!(summaries, ["Standup", "Deep work"]);
    }

    #[test]
    fn prose_is_malformed() {
        let result = parse_schedule("I could not find a schedule in this picture, sorry!");

        match result {
            Err(PlanshotError::MalformedOutput(msg)) => {
                assert!(msg.contains("I could not find a schedule"));
            }
            other => panic!("expected MalformedOutput, got {:?}", other),
        }
    }

    #[test]
    fn empty_response_is_malformed() {
        assert!(matches!(parse_schedule("  ``` ```  "), Err(PlanshotError::MalformedOutput(_))));
        assert!(matches!(parse_schedule(""), Err(PlanshotError::MalformedOutput(_))));
    }

    #[test]
    fn finds_array_after_leading_commentary() {
        let raw = format!("Here is the schedule I found:\n```json\n{TWO_TASKS}\n```\nLet me know!");

        let tasks = parse_schedule(&raw).expect("should find embedded array");

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].summary(), "Deep work");
    }

    #[test]
    fn skips_bracketed_prose_before_the_array() {
        let raw = format!("Tasks [2 found]: {GYM}");

        let tasks = parse_schedule(&raw).expect("should skip non-json brackets");

        assert_eq!(tasks[0].summary(), "Gym");
    }

    #[test]
    fn unwraps_object_wrapped_array() {
        let raw = format!(r#"{{"tasks": {GYM}}}"#);

        let tasks = parse_schedule(&raw).expect("should find nested array");

        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn skips_empty_array_before_the_tasks() {
        let raw = format!(r#"{{"notes": [], "tasks": {TWO_TASKS}}}"#);

        let tasks = parse_schedule(&raw).expect("should find the task array");

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].summary(), "Standup");
    }

    #[test]
    fn empty_array_counts_when_nothing_else_decodes() {
        let raw = r#"{"notes": "nothing planned", "tasks": []}"#;

        assert_eq!(parse_schedule(raw).expect("empty schedule"), Vec::new());
    }

    #[test]
    fn missing_field_is_malformed() {
        let raw = r#"[{"summary":"Gym","start_iso":"2025-06-01T07:00:00"}]"#;

        assert!(matches!(parse_schedule(raw), Err(PlanshotError::MalformedOutput(_))));
    }

    #[test]
    fn ignores_unknown_fields() {
        let raw = r#"[{"summary":"Gym","start_iso":"2025-06-01T07:00:00","end_iso":"2025-06-01T08:00:00","location":"Club"}]"#;

        assert_eq!(parse_schedule(raw).expect("should parse").len(), 1);
    }

    #[test]
    fn long_malformed_output_is_truncated_in_error() {
        let raw = "x".repeat(MALFORMED_PREVIEW_CHARS * 3);

        let Err(PlanshotError::MalformedOutput(msg)) = parse_schedule(&raw) else {
            panic!("expected MalformedOutput");
        };

        assert!(msg.len() < raw.len());
        assert!(msg.contains('…'));
    }
}
