//! Derived numbers over a filtered view: headline metrics and the grouped
//! aggregates behind each chart. Everything here is a pure function of the
//! records passed in.

pub mod aggregate;
pub mod summary;

pub use aggregate::DashboardAggregates;
pub use summary::{summarize, SummaryMetrics};
