//! UI serving routes
//!
//! Serves the static HTML/JS pages for the application

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

const WELCOME_HTML: &str = include_str!("../ui/welcome.html");
const REGISTER_HTML: &str = include_str!("../ui/register.html");
const SENTIMENT_HTML: &str = include_str!("../ui/sentiment.html");
const HISTORY_HTML: &str = include_str!("../ui/history.html");
const MAP_HTML: &str = include_str!("../ui/map.html");
const ABOUT_HTML: &str = include_str!("../ui/about.html");
const APP_JS: &str = include_str!("../ui/app.js");

/// GET /
pub async fn serve_welcome() -> Html<&'static str> {
    Html(WELCOME_HTML)
}

/// GET /register
pub async fn serve_register() -> Html<&'static str> {
    Html(REGISTER_HTML)
}

/// GET /sentiment
pub async fn serve_sentiment() -> Html<&'static str> {
    Html(SENTIMENT_HTML)
}

/// GET /history
pub async fn serve_history() -> Html<&'static str> {
    Html(HISTORY_HTML)
}

/// GET /map
pub async fn serve_map() -> Html<&'static str> {
    Html(MAP_HTML)
}

/// GET /about
pub async fn serve_about() -> Html<&'static str> {
    Html(ABOUT_HTML)
}

/// GET /static/app.js
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/javascript")],
        APP_JS,
    )
        .into_response()
}
