/* src/server/adapter/axum/src/lib.rs */

mod handler;

use std::sync::Arc;

use trellis_server::RouteTree;

/// Re-export the server core for convenience
pub use trellis_server;

/// Extension trait that serves a `RouteTree` through Axum.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for RouteTree {
  fn into_axum_router(self) -> axum::Router {
    // Page paths are arbitrary nested patterns the tree resolves itself, so
    // every GET funnels through one fallback handler instead of per-route
    // axum registrations. Non-GET methods get axum's default 405.
    axum::Router::new()
      .fallback(axum::routing::get(handler::handle_page))
      .with_state(Arc::new(self))
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("Trellis backend running on http://{local_addr}");
    axum::serve(listener, router).await?;
    Ok(())
  }
}
