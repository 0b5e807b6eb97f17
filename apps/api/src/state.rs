use std::sync::Arc;

use crate::render::PdfBackend;
use crate::storage::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Profile files are re-read per request so edits show up immediately.
    pub store: ProfileStore,
    /// Pluggable PDF converter. Default: Gotenberg-compatible HTTP backend.
    pub pdf: Arc<dyn PdfBackend>,
}
