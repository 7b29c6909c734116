//! Types shared by the draw core and its front ends.

pub mod domain;
pub mod error;
