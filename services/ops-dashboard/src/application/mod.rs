//! Application layer

pub mod aggregates;
pub mod filter;
pub mod flow_builder;
pub mod format;
pub mod handler;
pub mod kpi;
pub mod queries;
pub mod render;

pub use filter::FilterError;
pub use handler::DashboardHandler;
pub use queries::*;
pub use render::{KpiDisplay, ViewModel, render};
