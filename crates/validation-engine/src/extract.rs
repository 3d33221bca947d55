//! Label-anchored field extraction from raw PDF text.
//!
//! PDF-to-text conversion places whitespace and line breaks inconsistently,
//! so each label is tried against an ordered cascade of overlapping patterns
//! and the first non-empty capture wins. The redundancy trades precision for
//! recall: a label that occurs twice, or a short label like "City" appearing
//! inside another field's run, can produce a false positive.

use lazy_static::lazy_static;
use regex::Regex;

/// Builds the ordered pattern cascade anchored on `label`.
///
/// Each pattern captures the value run following the label, either up to the
/// next line break or as a constrained character-class run. Matching is
/// case-insensitive; the label is taken literally.
pub fn label_patterns(label: &str) -> Vec<Regex> {
    let anchor = regex::escape(label);
    [
        format!(r"(?i){anchor}[:\s]+([^\n\r]+)"),
        format!(r"(?i){anchor}[:\s]*([A-Za-z0-9\s/\-.]+)"),
        format!(r"(?i){anchor}\s*:\s*([^\n\r]+)"),
        format!(r"(?i){anchor}\s+([^\n\r]+)"),
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
}

/// Extracts the best-guess value following `label` in `text`.
///
/// Returns `None` when no pattern matches or every capture is empty after
/// trimming.
pub fn extract(text: &str, label: &str) -> Option<String> {
    for re in label_patterns(label) {
        if let Some(value) = first_capture(&re, text) {
            tracing::debug!(label, value = %value, "field extracted");
            return Some(value);
        }
    }
    tracing::debug!(label, "no pattern matched");
    None
}

/// Applies a single cascade pattern, returning its trimmed first capture.
pub fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}

lazy_static! {
    /// Pricing amounts have no stable preceding label in the quote text, so
    /// they are matched by the surrounding currency phrasing instead.
    static ref PRICING_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)(\d+[,.]?\d*[.,]?\d*)\s*\$?\s*p\.a\.").unwrap(),
        Regex::new(r"(?i)PRICING[:\s]*(\d+[,.]?\d*[.,]?\d*)\s*\$").unwrap(),
        Regex::new(r"(?i)(\d+[,.]?\d*)\s*\$\s*per\s*annum").unwrap(),
        Regex::new(r"(?i)Total[:\s]*(\d+[,.]?\d*[.,]?\d*)\s*\$").unwrap(),
    ];
}

/// Extracts the quoted premium from `text`.
///
/// Tries an explicit `PRICING` label first, then the dedicated currency
/// patterns. The full matched phrase is returned (e.g. `"1200.00 $ p.a."`);
/// the equivalence checker's substring rule absorbs the surrounding units.
pub fn extract_pricing(text: &str) -> Option<String> {
    if let Some(value) = extract(text, "PRICING") {
        return Some(value);
    }

    for re in PRICING_PATTERNS.iter() {
        if let Some(m) = re.find(text) {
            let value = m.as_str().trim().to_string();
            tracing::debug!(value = %value, "pricing extracted");
            return Some(value);
        }
    }

    None
}
