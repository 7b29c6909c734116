use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::MAX_DRAW_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidNumber,
    NonPositiveCount,
    EqualBounds,
    InvertedBounds,
    ExceedsRange,
    ExceedsLimit,
}

/// Why a submitted form cannot be drawn. The `Display` text is what the
/// error banner shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputValidationError {
    #[error("invalid numeric input: fill every field with a whole number")]
    InvalidNumber,
    #[error("count must be greater than zero")]
    NonPositiveCount,
    #[error("min and max must differ")]
    EqualBounds,
    #[error("max must be greater than min")]
    InvertedBounds,
    #[error("count exceeds available range of size {range}")]
    ExceedsRange { range: i128 },
    #[error("maximum allowed count is {limit}")]
    ExceedsLimit { limit: i64 },
}

impl InputValidationError {
    pub fn exceeds_limit() -> Self {
        Self::ExceedsLimit {
            limit: MAX_DRAW_COUNT,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidNumber => ErrorCode::InvalidNumber,
            Self::NonPositiveCount => ErrorCode::NonPositiveCount,
            Self::EqualBounds => ErrorCode::EqualBounds,
            Self::InvertedBounds => ErrorCode::InvertedBounds,
            Self::ExceedsRange { .. } => ErrorCode::ExceedsRange,
            Self::ExceedsLimit { .. } => ErrorCode::ExceedsLimit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

impl From<&InputValidationError> for ErrorReport {
    fn from(value: &InputValidationError) -> Self {
        Self {
            code: value.code(),
            message: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_error_reports_the_size_literally() {
        let err = InputValidationError::ExceedsRange { range: 10 };
        assert_eq!(err.to_string(), "count exceeds available range of size 10");
    }

    #[test]
    fn limit_error_names_the_cap() {
        assert_eq!(
            InputValidationError::exceeds_limit().to_string(),
            "maximum allowed count is 200"
        );
    }

    #[test]
    fn report_carries_code_and_message() {
        let report = ErrorReport::from(&InputValidationError::EqualBounds);
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["code"], "equal_bounds");
        assert_eq!(json["message"], "min and max must differ");
    }
}
