//! CGPA/percentage score heuristic.
//!
//! Derives one representative number from a resume's free-form text:
//!
//! 1. every `CGPA`/`cgpa`/`Cgpa` token (those three spellings only) followed
//!    by an optional `:` or `=` and a decimal number,
//! 2. every 1–3 digit number followed by `%`, discarding values over 100,
//! 3. the score is the arithmetic mean of everything collected, or 0 when
//!    nothing matched.
//!
//! CGPA (0–10 scale) and percentages (0–100 scale) are averaged together
//! without normalization. That is the documented legacy scoring contract
//! this service replaces 1:1; callers rank on it, nothing else interprets
//! the value.

use regex::Regex;
use std::sync::OnceLock;

fn cgpa_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(?:CGPA|cgpa|Cgpa)\s*[:=]?\s*(\d+(?:\.\d+)?)").expect("valid regex")
    })
}

fn percentage_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\d{1,3})\s*%").expect("valid regex"))
}

/// Collects all CGPA and percentage observations from `text` and returns
/// their mean, or 0.0 when there are none.
pub fn academic_score(text: &str) -> f64 {
    let mut values: Vec<f64> = Vec::new();

    for cap in cgpa_re().captures_iter(text) {
        if let Ok(v) = cap[1].parse::<f64>() {
            values.push(v);
        }
    }

    for cap in percentage_re().captures_iter(text) {
        if let Ok(v) = cap[1].parse::<f64>() {
            if v <= 100.0 {
                values.push(v);
            }
        }
    }

    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
