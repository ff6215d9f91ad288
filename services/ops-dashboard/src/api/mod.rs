//! HTTP API

mod handlers;
mod page;
mod routes;
mod upload;

pub use routes::dashboard_routes;
