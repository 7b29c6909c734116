//! Validation, drawing and reveal pipeline for the number draw widget.

pub mod config;
pub mod drawer;
pub mod orchestrator;
pub mod presenter;
pub mod rng;
pub mod sanitize;
pub mod validator;

pub use config::{load_settings, DrawSettings};
pub use drawer::draw;
pub use orchestrator::{DrawOrchestrator, DrawView, GridView, SubmitOutcome};
pub use presenter::{render_ghost, reveal, ResultsSurface, RevealPlan, RevealStep, RevealSummary};
pub use rng::{StdUnitRandom, UnitRandom};
pub use sanitize::{parse_integer_field, sanitize_integer_text};
pub use validator::{validate, validate_text};
