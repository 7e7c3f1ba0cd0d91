//! Student exam results dashboard.
//!
//! The [`data`] layer loads, filters and aggregates the table; [`dashboard`]
//! formats one selection for display; [`app`] and [`ui`] render it with egui.

pub mod app;
pub mod color;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod state;
pub mod ui;
