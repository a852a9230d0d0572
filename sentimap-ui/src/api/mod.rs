//! HTTP API handlers for sentimap-ui

pub mod error;
pub mod health;
pub mod history;
pub mod map;
pub mod register;
pub mod sentiment;
pub mod ui;

pub use error::ApiError;
pub use health::health_routes;
pub use history::{delete_query, history};
pub use map::sentiment_map;
pub use register::register;
pub use sentiment::submit_sentiment;
pub use ui::{
    serve_about, serve_app_js, serve_history, serve_map, serve_register, serve_sentiment,
    serve_welcome,
};
