//! Bridge from the UI thread to the draw worker.

pub mod commands;
pub mod runtime;
