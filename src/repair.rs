//! Best-effort recovery of question arrays from malformed model output.
//!
//! The generative model is asked for a bare JSON array of
//! `{question, answer, hint}` objects, but in practice wraps it in markdown
//! fences, swaps in curly or Hebrew quote characters, drops commas and
//! brackets, or pads it with prose. The pipeline applies one textual repair
//! at a time and re-attempts a structural parse after each stage; only when
//! structure is beyond saving does it fall back to regex extraction of the
//! individual fields, paired by textual proximity.
//!
//! An empty result is a legitimate outcome ("no questions available"), not
//! an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::models::domain::TriviaQuestion;

/// Runs the repair pipeline over raw model output.
pub fn repair_questions(raw: &str) -> Vec<TriviaQuestion> {
    if let Some(questions) = try_parse(raw) {
        return questions;
    }

    let mut text = strip_code_fences(raw);
    if let Some(questions) = try_parse(&text) {
        return questions;
    }

    text = normalize_quotes(&text);
    if let Some(questions) = try_parse(&text) {
        return questions;
    }

    text = slice_to_array(&text);
    if let Some(questions) = try_parse(&text) {
        return questions;
    }

    text = quote_bare_keys(&text);
    if let Some(questions) = try_parse(&text) {
        return questions;
    }

    text = insert_missing_commas(&text);
    if let Some(questions) = try_parse(&text) {
        return questions;
    }

    extract_fields(&text)
}

/// Structural parse attempt. Accepts either a bare array or an object
/// wrapping one under a `questions` key. Returns `None` when the text does
/// not parse or yields no usable entries, so the caller keeps repairing.
fn try_parse(text: &str) -> Option<Vec<TriviaQuestion>> {
    let value: Value = serde_json::from_str(text.trim()).ok()?;
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("questions") {
            Some(Value::Array(items)) => items,
            _ => return None,
        },
        _ => return None,
    };

    let questions: Vec<TriviaQuestion> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<TriviaQuestion>(item).ok())
        .filter(TriviaQuestion::is_usable)
        .collect();

    if questions.is_empty() {
        None
    } else {
        Some(questions)
    }
}

/// Drops markdown fence lines (``` and ```json) around the payload.
fn strip_code_fences(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Folds curly quotes and Hebrew gershayim/geresh into plain ASCII quotes.
/// Only reached when the text already failed to parse, so a quote character
/// inside a valid string cannot be corrupted here.
fn normalize_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{05F4}' | '\u{FF02}' => '"',
            '\u{2018}' | '\u{2019}' | '\u{05F3}' => '\'',
            c => c,
        })
        .collect()
}

/// Slices the text down to its outermost array, appending closers for
/// brackets (and a dangling object brace) the model never emitted.
fn slice_to_array(text: &str) -> String {
    let Some(start) = text.find('[') else {
        return text.to_string();
    };

    let mut slice = match text.rfind(']') {
        Some(end) if end > start => text[start..=end].to_string(),
        _ => text[start..].trim_end().trim_end_matches(',').to_string(),
    };

    let open_brackets = slice.matches('[').count();
    let close_brackets = slice.matches(']').count();
    for _ in close_brackets..open_brackets {
        if slice.matches('{').count() > slice.matches('}').count() {
            slice.push('}');
        }
        slice.push(']');
    }
    slice
}

static BARE_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([\[{,]\s*)([A-Za-z_][A-Za-z0-9_]*)\s*:").expect("BARE_KEY_RE is a valid pattern")
});

fn quote_bare_keys(text: &str) -> String {
    BARE_KEY_RE.replace_all(text, "$1\"$2\":").into_owned()
}

static OBJECT_GAP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\}\s*\{").expect("OBJECT_GAP_RE is a valid pattern"));
static STRING_GAP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("\"\\s*\\n\\s*\"").expect("STRING_GAP_RE is a valid pattern"));

/// Re-inserts commas the model dropped between adjacent objects, and between
/// a string value and the key that follows it on the next line.
fn insert_missing_commas(text: &str) -> String {
    let text = OBJECT_GAP_RE.replace_all(text, "}, {");
    STRING_GAP_RE.replace_all(&text, "\",\n\"").into_owned()
}

static QUESTION_FIELD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""?question"?\s*:\s*"([^"]+)""#).expect("QUESTION_FIELD_RE is a valid pattern")
});
static ANSWER_FIELD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""?answer"?\s*:\s*"([^"]+)""#).expect("ANSWER_FIELD_RE is a valid pattern")
});
static HINT_FIELD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""?hint"?\s*:\s*"([^"]+)""#).expect("HINT_FIELD_RE is a valid pattern")
});

#[derive(Clone, Copy)]
enum Field {
    Question,
    Answer,
    Hint,
}

/// Last-resort extraction: pull question/answer/hint values straight out of
/// the text and pair each answer and hint with the closest preceding
/// question. The exact tie-breaking here is heuristic, not a contract.
fn extract_fields(text: &str) -> Vec<TriviaQuestion> {
    let mut found: Vec<(usize, Field, String)> = Vec::new();
    for (re, field) in [
        (&*QUESTION_FIELD_RE, Field::Question),
        (&*ANSWER_FIELD_RE, Field::Answer),
        (&*HINT_FIELD_RE, Field::Hint),
    ] {
        for caps in re.captures_iter(text) {
            let pos = caps.get(0).map(|m| m.start()).unwrap_or(0);
            found.push((pos, field, caps[1].trim().to_string()));
        }
    }
    found.sort_by_key(|(pos, _, _)| *pos);

    let mut partial: Vec<(Option<String>, Option<String>, Option<String>)> = Vec::new();
    for (_, field, value) in found {
        match field {
            Field::Question => partial.push((Some(value), None, None)),
            Field::Answer => {
                if let Some(entry) = partial.last_mut() {
                    if entry.1.is_none() {
                        entry.1 = Some(value);
                    }
                }
            }
            Field::Hint => {
                if let Some(entry) = partial.last_mut() {
                    if entry.2.is_none() {
                        entry.2 = Some(value);
                    }
                }
            }
        }
    }

    partial
        .into_iter()
        .filter_map(|(question, answer, hint)| {
            Some(TriviaQuestion {
                question: question?,
                answer: answer?,
                hint: hint.unwrap_or_default(),
            })
        })
        .filter(TriviaQuestion::is_usable)
        .collect()
}
