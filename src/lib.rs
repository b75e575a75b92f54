//! Interactive HR attrition dashboard.
//!
//! The data core (`data`, `analysis`, `report`) is a set of pure functions
//! over an immutable [`data::model::Dataset`]; `state`, `ui` and `app`
//! wire it to an egui window.

pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod report;
pub mod state;
pub mod style;
pub mod ui;
