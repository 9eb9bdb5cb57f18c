use super::*;
use crate::sample::landing_page;

fn state() -> AppState {
    Arc::new(RenderedPage::new(landing_page(), &DocumentOptions::default()))
}

#[test]
fn rendered_page_precomputes_tree_and_document() {
    let rendered = RenderedPage::new(landing_page(), &DocumentOptions::default());
    assert_eq!(rendered.regions.len(), 3);
    assert!(rendered.document.contains("<title>Vite + React</title>"));
    assert!(rendered.document.contains("<section"));
}

#[tokio::test]
async fn index_serves_document() {
    let Html(body) = index(State(state())).await;
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Primary Call to action"));
}

#[tokio::test]
async fn tree_serves_built_regions() {
    let Json(regions) = tree(State(state())).await;
    assert_eq!(regions, build(&landing_page()));
}

#[tokio::test]
async fn page_serves_description() {
    let Json(described) = page(State(state())).await;
    assert_eq!(described, landing_page());
}

#[tokio::test]
async fn healthz_reports_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn router_builds_with_state() {
    let _router = app(state());
}
