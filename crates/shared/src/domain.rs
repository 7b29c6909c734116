use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound on how many numbers a single draw may produce.
pub const MAX_DRAW_COUNT: i64 = 200;

/// A draw that passed validation.
///
/// Built by the validator only; the drawer trusts these invariants:
/// `0 < count <= MAX_DRAW_COUNT`, `min < max`, and when `no_repeat` is set
/// `count <= range_size()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRequest {
    pub count: i64,
    pub min: i64,
    pub max: i64,
    pub no_repeat: bool,
}

impl DrawRequest {
    pub fn range_size(&self) -> i128 {
        range_size(self.min, self.max)
    }
}

/// Number of integers in `[min, max]`, computed without overflow.
pub fn range_size(min: i64, max: i64) -> i128 {
    max as i128 - min as i128 + 1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    pub request: DrawRequest,
    pub numbers: Vec<i64>,
}

/// One cell of the results grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Tile {
    Ghost,
    Number(i64),
    Overflow(usize),
}

impl Tile {
    pub fn is_ghost(&self) -> bool {
        matches!(self, Tile::Ghost)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Ghost => f.write_str("•"),
            Tile::Number(n) => write!(f, "{n}"),
            Tile::Overflow(extra) => write!(f, "+{extra}"),
        }
    }
}

/// Raw form state captured at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub count: String,
    pub min: String,
    pub max: String,
    pub no_repeat: bool,
}

impl FormInput {
    pub fn new(
        count: impl Into<String>,
        min: impl Into<String>,
        max: impl Into<String>,
        no_repeat: bool,
    ) -> Self {
        Self {
            count: count.into(),
            min: min.into(),
            max: max.into(),
            no_repeat,
        }
    }
}
