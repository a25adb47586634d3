//! # PubMed Search
//!
//! An async Rust client for searching PubMed and retrieving structured
//! article metadata through the NCBI eUtils APIs.
//!
//! ## Features
//!
//! - **Query Construction**: author and title/abstract keyword criteria
//!   combined with PubMed field-tag syntax
//! - **Two-Stage Retrieval**: ESearch identifier resolution followed by a
//!   single batch EFetch request
//! - **Normalized Records**: every record field is populated; missing data
//!   becomes a fixed `"N/A"` marker instead of null
//! - **Result Envelope**: a structured success/failure outcome for
//!   tool-facing callers, never a raw error
//!
//! ## Quick Start
//!
//! ```no_run
//! use pubmed_search::{PubMedClient, SearchCriteria, SearchOutcome};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = PubMedClient::new();
//!     let criteria = SearchCriteria::new()
//!         .author("Doe JP")
//!         .keyword("cancer immunotherapy")
//!         .max_results(5);
//!
//!     match client.search(&criteria).await {
//!         SearchOutcome::Success { results, total_results } => {
//!             println!("Found {total_results} articles");
//!             for record in results {
//!                 println!("{}: {}", record.pmid, record.title);
//!             }
//!         }
//!         SearchOutcome::Failure { error } => {
//!             eprintln!("Search failed: {error}");
//!         }
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod pubmed;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{PubMedError, Result};
pub use pubmed::{
    article_url, ArticleRecord, PubMedClient, SearchCriteria, SearchOutcome, NOT_AVAILABLE,
};
