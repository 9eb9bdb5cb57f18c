//! HTTP host for a rendered page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page is built once at startup; handlers only hand out the precomputed
//! document, tree and description. Nothing is re-rendered per request, so the
//! shared state is read-only and needs no locking.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::builder::build;
use crate::html::{DocumentOptions, render_document};
use crate::node::Element;
use crate::page::PageDescription;

/// Everything the handlers serve, computed once.
#[derive(Debug)]
pub struct RenderedPage {
    pub page: PageDescription,
    pub regions: Vec<Element>,
    pub document: String,
}

impl RenderedPage {
    /// Build and serialize `page` up front.
    #[must_use]
    pub fn new(page: PageDescription, options: &DocumentOptions) -> Self {
        let regions = build(&page);
        let document = render_document(&page, &regions, options);
        Self { page, regions, document }
    }
}

pub type AppState = Arc<RenderedPage>;

/// Router serving the rendered page.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/tree.json", get(tree))
        .route("/page.json", get(page))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.document.clone())
}

async fn tree(State(state): State<AppState>) -> Json<Vec<Element>> {
    Json(state.regions.clone())
}

async fn page(State(state): State<AppState>) -> Json<PageDescription> {
    Json(state.page.clone())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
