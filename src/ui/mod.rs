//! egui presentation layer. Reads [`crate::state::AppState`] and calls its
//! methods on user input; holds no data of its own.

pub mod charts;
pub mod dashboard;
pub mod panels;
