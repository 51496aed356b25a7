/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use busbar_server::{SiteError, SiteServer};

/// Re-export busbar-server core for convenience
pub use busbar_server;

/// Extension trait that converts a `SiteServer` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> Result<axum::Router, SiteError>;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for SiteServer {
  fn into_axum_router(self) -> Result<axum::Router, SiteError> {
    let parts = self.into_parts()?;
    Ok(handler::build_router(parts))
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_axum_router()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(%local_addr, "busbar site backend listening");
    axum::serve(listener, router).await?;
    Ok(())
  }
}
