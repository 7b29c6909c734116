//! Form validation. Checks run in a fixed order and the first failure wins.

use shared::{
    domain::{range_size, DrawRequest, MAX_DRAW_COUNT},
    error::InputValidationError,
};

use crate::sanitize::parse_integer_field;

/// Validates parsed form values, yielding the request the drawer may run.
///
/// `None` stands for a field that did not hold a finite integer.
pub fn validate(
    count: Option<i64>,
    min: Option<i64>,
    max: Option<i64>,
    no_repeat: bool,
) -> Result<DrawRequest, InputValidationError> {
    let (Some(count), Some(min), Some(max)) = (count, min, max) else {
        return Err(InputValidationError::InvalidNumber);
    };

    if count <= 0 {
        return Err(InputValidationError::NonPositiveCount);
    }
    if min == max {
        return Err(InputValidationError::EqualBounds);
    }
    if max < min {
        return Err(InputValidationError::InvertedBounds);
    }
    if no_repeat {
        let range = range_size(min, max);
        if count as i128 > range {
            return Err(InputValidationError::ExceedsRange { range });
        }
    }
    if count > MAX_DRAW_COUNT {
        return Err(InputValidationError::exceeds_limit());
    }

    Ok(DrawRequest {
        count,
        min,
        max,
        no_repeat,
    })
}

/// Parses the raw field text and validates it in one step.
pub fn validate_text(
    count: &str,
    min: &str,
    max: &str,
    no_repeat: bool,
) -> Result<DrawRequest, InputValidationError> {
    validate(
        parse_integer_field(count),
        parse_integer_field(min),
        parse_integer_field(max),
        no_repeat,
    )
}

#[cfg(test)]
#[path = "tests/validator_tests.rs"]
mod tests;
