//! HTTP surface.
//!
//! - `history`: aggregated commit history (GET /api/git-history)
//! - `assets`: embedded HTML page and static files (GET /, GET /static/...)

pub mod assets;
pub mod history;

use axum::Router;

use crate::github::{HistorySource, SharedHistory};

pub fn create_router<S: HistorySource>(history: SharedHistory<S>) -> Router {
    Router::new()
        .merge(history::routes(history))
        .merge(assets::routes())
}
