/* src/server/adapter/axum/src/handler.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use trellis_server::{render_request, ResponseKind, RouteTree};

/// Single entry point for all GET traffic: the tree resolves the path and
/// produces one of the three literal outcomes; the status code mapping here
/// is best-effort on top of the body contract.
pub(crate) async fn handle_page(State(tree): State<Arc<RouteTree>>, uri: Uri) -> Response {
  let rendered = render_request(&tree, uri.path());
  let status = match rendered.kind {
    ResponseKind::Page => StatusCode::OK,
    ResponseKind::NotFound => StatusCode::NOT_FOUND,
    ResponseKind::Error => StatusCode::INTERNAL_SERVER_ERROR,
  };
  (status, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], rendered.body).into_response()
}
