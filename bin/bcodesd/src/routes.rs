//! Route registration — collects all module routes + system endpoints.

use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

/// Build the complete router with all routes.
pub fn build_router(module_routes: Vec<(&str, Router)>) -> Router {
    let mut app = Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/version", get(version));

    // Merge each module's routes. Module routers are already Router<()>
    // (they called .with_state() internally) and carry their own absolute
    // `/api/{module_name}` paths, so they merge directly onto the app.
    for (_name, router) in module_routes {
        app = app.merge(router);
    }

    app
}

async fn index_page() -> impl IntoResponse {
    Html(include_str!("web/app.html"))
}

async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": "bcodesd",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
