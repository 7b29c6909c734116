//! Text handling for the numeric form fields.

/// Filters live-typed text down to an optionally negative integer literal.
///
/// Keeps ASCII digits. A single leading `-` survives only when the trimmed
/// raw text starts with one; every other minus sign is dropped.
pub fn sanitize_integer_text(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();

    if !kept.contains('-') {
        return kept;
    }

    let digits: String = kept.chars().filter(|c| *c != '-').collect();
    if raw.trim().starts_with('-') {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Reads a field as a whole number.
///
/// Blank text reads as zero. Finite decimal values are truncated toward
/// zero and saturate at the `i64` bounds. Non-numeric or non-finite text
/// yields `None`.
pub fn parse_integer_field(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0);
    }
    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }

    let value = text.parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(value.trunc() as i64)
}

#[cfg(test)]
#[path = "tests/sanitize_tests.rs"]
mod tests;
