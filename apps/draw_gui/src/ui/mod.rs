//! UI layer: app shell and the widgets it draws.

pub mod app;
pub mod widgets;

pub use app::DrawApp;
