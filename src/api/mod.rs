//! HTTP API handlers for docnorm

pub mod fetch;
pub mod health;
pub mod normalize;
pub mod submit;

pub use fetch::fetch_routes;
pub use health::health_routes;
pub use normalize::normalize_routes;
pub use submit::submit_routes;
