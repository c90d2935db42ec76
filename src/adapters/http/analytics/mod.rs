//! Analytics HTTP adapter module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AnalyticsAppState;
pub use routes::analytics_routes;
