//! Best-effort repair of the JSON array a completion was asked to emit.
//!
//! Rules run in a fixed order; later rules assume the earlier ones ran.
//! Text that already parses is never rewritten.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

lazy_static! {
    // Step 1: echoed prompt markers
    static ref EXAMPLE_LABEL: Regex = Regex::new(r"(?i)example output:").unwrap();
    static ref CODE_FENCE: Regex = Regex::new(r"```(?:json)?").unwrap();
    static ref LINE_COMMENT: Regex = Regex::new(r"(?m)^[ \t]*//[^\n]*$").unwrap();
    static ref TRAILING_COMMENT: Regex = Regex::new(r#"(?m)([,\[{])[ \t]*//[^\n"]*$"#).unwrap();
    static ref LIST_PREFIX: Regex = Regex::new(r"(?m)^[ \t]*\d+[.)][ \t]*\{").unwrap();

    // Step 2
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    // Step 3: punctuation spacing, applied in this order
    static ref SPACING_RULES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r#""\s*,\s*""#).unwrap(), r#"",""#),
        (Regex::new(r#""\s*:\s*""#).unwrap(), r#"":""#),
        (Regex::new(r#""\s*:\s*\["#).unwrap(), r#"":["#),
        (Regex::new(r#"\[\s*""#).unwrap(), r#"[""#),
        (Regex::new(r#""\s*\]"#).unwrap(), r#""]"#),
        (Regex::new(r#""\s*,\s*\["#).unwrap(), r#"",["#),
        (Regex::new(r#"\]\s*,\s*""#).unwrap(), r#"],""#),
        (Regex::new(r"\}\s*,?\s*\{").unwrap(), "},{"),
        (Regex::new(r",\s*([\]}])").unwrap(), "${1}"),
        (Regex::new(r#"("|\]|\}|\d|true|false|null)\s+("[^"\s]+"\s*:)"#).unwrap(), "${1},${2}"),
    ];

    // A closing brace, optional comma, then an opening brace
    static ref FRAGMENT_BOUNDARY: Regex = Regex::new(r"\}\s*,?\s*\{").unwrap();
}

/// Apply the repair rules and make sure the result is bracketed.
pub fn repair(candidate: &str) -> String {
    let mut text = EXAMPLE_LABEL.replace_all(candidate, "").into_owned();
    text = CODE_FENCE.replace_all(&text, "").into_owned();
    text = LINE_COMMENT.replace_all(&text, "").into_owned();
    text = TRAILING_COMMENT.replace_all(&text, "${1}").into_owned();
    text = LIST_PREFIX.replace_all(&text, "{").into_owned();

    text = WHITESPACE.replace_all(&text, " ").into_owned();

    for (pattern, replacement) in SPACING_RULES.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }

    let mut text = text.trim().to_string();
    if !text.starts_with('[') {
        text.insert(0, '[');
    }
    if !text.ends_with(']') {
        text.push(']');
    }
    text
}

/// Parse a candidate array into its elements, salvaging what it can.
///
/// Tries the text verbatim, then repaired, then object by object. A
/// fragment that still fails to parse is dropped without affecting the rest.
pub fn parse_candidates(candidate: &str) -> Vec<Value> {
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(candidate) {
        return items;
    }

    let repaired = repair(candidate);
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(&repaired) {
        debug!(items = items.len(), "Parsed completion after repair");
        return items;
    }

    let fragments = split_fragments(&repaired);
    let total = fragments.len();
    let items: Vec<Value> = fragments
        .iter()
        .filter_map(|fragment| match serde_json::from_str::<Value>(fragment) {
            Ok(value @ Value::Object(_)) => Some(value),
            Ok(_) => None,
            Err(e) => {
                debug!(error = %e, fragment = %fragment, "Dropping unparseable fragment");
                None
            }
        })
        .collect();

    debug!(
        fragments = total,
        parsed = items.len(),
        "Parsed completion fragment by fragment"
    );
    items
}

/// Split a bracketed run of objects on `}{` boundaries, restoring the braces
/// so each fragment stands alone.
pub fn split_fragments(text: &str) -> Vec<String> {
    let inner = text.trim();
    let inner = inner.strip_prefix('[').unwrap_or(inner);
    let inner = inner.strip_suffix(']').unwrap_or(inner).trim();

    if inner.is_empty() {
        return Vec::new();
    }

    FRAGMENT_BOUNDARY
        .split(inner)
        .map(|piece| {
            let piece = piece.trim().trim_end_matches(',').trim();
            let mut fragment = String::with_capacity(piece.len() + 2);
            if !piece.starts_with('{') {
                fragment.push('{');
            }
            fragment.push_str(piece);
            if !piece.ends_with('}') {
                fragment.push('}');
            }
            fragment
        })
        .collect()
}
