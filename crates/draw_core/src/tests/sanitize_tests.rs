use super::{parse_integer_field, sanitize_integer_text};

#[test]
fn strips_non_digit_characters() {
    assert_eq!(sanitize_integer_text("1a2-3"), "123");
    assert_eq!(sanitize_integer_text("4.5e1"), "451");
    assert_eq!(sanitize_integer_text("abc"), "");
}

#[test]
fn keeps_a_single_leading_minus() {
    assert_eq!(sanitize_integer_text("-12-3"), "-123");
    assert_eq!(sanitize_integer_text("--7"), "-7");
    assert_eq!(sanitize_integer_text(" -5"), "-5");
    assert_eq!(sanitize_integer_text("-"), "-");
}

#[test]
fn drops_minus_when_text_does_not_start_with_one() {
    assert_eq!(sanitize_integer_text("5-"), "5");
    assert_eq!(sanitize_integer_text("x-5"), "5");
}

#[test]
fn digits_only_text_is_unchanged() {
    assert_eq!(sanitize_integer_text("0042"), "0042");
}

#[test]
fn parses_plain_and_signed_integers() {
    assert_eq!(parse_integer_field("42"), Some(42));
    assert_eq!(parse_integer_field("  -3 "), Some(-3));
    assert_eq!(parse_integer_field("+8"), Some(8));
}

#[test]
fn truncates_finite_decimals() {
    assert_eq!(parse_integer_field("3.9"), Some(3));
    assert_eq!(parse_integer_field("-3.9"), Some(-3));
    assert_eq!(parse_integer_field("1e3"), Some(1000));
}

#[test]
fn blank_text_reads_as_zero() {
    assert_eq!(parse_integer_field(""), Some(0));
    assert_eq!(parse_integer_field("   "), Some(0));
}

#[test]
fn rejects_non_numeric_text() {
    assert_eq!(parse_integer_field("-"), None);
    assert_eq!(parse_integer_field("12abc"), None);
}

#[test]
fn rejects_non_finite_values() {
    assert_eq!(parse_integer_field("inf"), None);
    assert_eq!(parse_integer_field("NaN"), None);
}

#[test]
fn out_of_range_values_saturate() {
    assert_eq!(parse_integer_field("99999999999999999999"), Some(i64::MAX));
    assert_eq!(parse_integer_field("-99999999999999999999"), Some(i64::MIN));
    assert_eq!(parse_integer_field("1e30"), Some(i64::MAX));
}
