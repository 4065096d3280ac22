pub mod client;
pub mod commits;
pub mod history;
pub mod repositories;

pub use client::GitHubClient;
pub use history::{HistoryAggregator, HistorySource, SharedHistory};

#[cfg(test)]
pub(crate) mod test_support {
    use axum::Router;

    /// Serves `app` on an ephemeral localhost port and returns its base URL.
    pub async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }
}
