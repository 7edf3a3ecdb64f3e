//! Single-page web front end
//!
//! `GET /` shows the form, `POST /analyze` runs one analysis and renders the
//! same page with the answer, a warning or an error.

mod handlers;
mod page;
mod state;

pub use handlers::router;
pub use page::{Notice, NoticeKind, PageView, render_markdown};
pub use state::{AnalysisBackend, AppState, BackendError};

use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

/// Serve the page until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on http://{}", addr);
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
