//! Line-oriented step extraction.

use once_cell::sync::Lazy;
use regex::Regex;

static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*•]\s*").unwrap());
static STEP_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^step\s*\d+:").unwrap());
static ANSWER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^answer:").unwrap());

/// Extract labeled steps from raw model output.
///
/// Each non-empty line is trimmed and loses one leading bullet (`-`, `*`,
/// `•`). `Step <n>:` and `Answer:` lines are kept, matched
/// case-insensitively. Until the first line has been kept, any other line is
/// accepted as a starting point; afterwards unlabeled lines are dropped.
pub fn extract_steps(raw_response: &str) -> Vec<String> {
    let mut steps: Vec<String> = Vec::new();

    for line in raw_response.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let normalized = BULLET.replace(line, "");

        if STEP_LINE.is_match(&normalized) || ANSWER_LINE.is_match(&normalized) {
            steps.push(normalized.into_owned());
        } else if steps.is_empty() && !normalized.is_empty() {
            steps.push(normalized.into_owned());
        }
    }

    steps
}

/// The last extracted step, or the raw response when nothing was extracted.
pub fn final_answer(steps: &[String], raw_response: &str) -> String {
    steps
        .last()
        .cloned()
        .unwrap_or_else(|| raw_response.to_string())
}
