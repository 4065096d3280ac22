//! Data types for upstream payloads and API responses.
//!
//! - `repository`: RepositorySummary decoded from the repository listing
//! - `commit`: RawCommit decoded from the nested commit payload, and
//!   CommitHistoryEntry serialized for the frontend

pub mod commit;
pub mod repository;

pub use commit::*;
pub use repository::*;
