//! Aggregated commit history endpoint.
//!
//! GET /api/git-history
//!
//! Returns a JSON array of commits across every public repository of the
//! configured account, grouped by repository in listing order. If the
//! repository listing itself fails the response is 500 `{"error": ...}`;
//! individual repositories that fail are left out.

use axum::{extract::State, routing::get, Json, Router};

use crate::error::Result;
use crate::github::{HistorySource, SharedHistory};
use crate::models::CommitHistoryEntry;

pub fn routes<S: HistorySource>(history: SharedHistory<S>) -> Router {
    Router::new()
        .route("/api/git-history", get(get_git_history::<S>))
        .with_state(history)
}

async fn get_git_history<S: HistorySource>(
    State(history): State<SharedHistory<S>>,
) -> Result<Json<Vec<CommitHistoryEntry>>> {
    tracing::info!(account = %history.config().account, "Fetching git history");
    let entries = history.build_history().await?;
    Ok(Json(entries))
}
