//! Static landing page

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../views/index.html");

/// GET / - Landing page with forms for the API
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
