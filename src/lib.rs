//! # GitHub User Lookup
//!
//! A Rust library for looking up a GitHub user and their repositories with
//! debounced queries, sequential profile and repository fetches, and
//! loading-state management.
//!
//! ## Main Components
//!
//! - [`UserSearcher`]: the search orchestrator owning the shared state
//! - [`GitHubClient`]: the GitHub REST API wrapper behind the [`UserFetcher`] seam
//! - [`Debouncer`]: the cancellable quiescence timer behind `debounced_search`
//! - [`Args`]: command line argument structure for the terminal front-end
//!
//! ## Example
//!
//! ```no_run
//! use github_user_lookup_lib::{Args, GitHubClient, SearchOptions, UserSearcher};
//! use clap::Parser;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     // Parse command line arguments
//!     let args = Args::parse();
//!
//!     // Build the client and the orchestrator
//!     let client = GitHubClient::new(args.token.unwrap_or_default())?;
//!     let searcher = UserSearcher::new(Arc::new(client), SearchOptions::default());
//!
//!     // Feed it input events; the query fires once input quiesces
//!     searcher.update_text("octocat");
//!     searcher.debounced_search("octocat");
//!
//!     Ok(())
//! }
//! ```

mod args;
mod debounce;
mod github_client;
mod user_searcher;
mod view;

// Re-export main components for documentation and external use
pub use crate::args::Args;
pub use crate::debounce::Debouncer;
pub use crate::github_client::{GitHubClient, UserFetcher};
pub use crate::user_searcher::{SearchOptions, SearchState, UserSearcher};
pub use crate::view::{
    format_updated_date, repo_entries, sorted_by_updated, Profile, RepoEntry,
};
