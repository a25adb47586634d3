//! PubMed search client for resolving queries into structured article records
//!
//! This module implements the two-stage retrieval pipeline: a query built
//! from author/keyword criteria resolves to a list of PMIDs (ESearch), and
//! the PMIDs resolve to normalized article records (EFetch).
//!
//! - [`query`] - criteria builder producing field-tagged query strings
//! - [`client`] - ESearch/EFetch operations and the result envelope boundary
//! - [`parser`] - EFetch XML parsing into [`ArticleRecord`]s
//! - [`models`] - public record and envelope types
//! - [`responses`] - ESearch JSON response shapes

pub mod client;
pub mod models;
pub mod parser;
pub mod query;
pub mod responses;

// Re-export public types
pub use client::{PubMedClient, NO_CRITERIA_ERROR};
pub use models::{article_url, ArticleRecord, SearchOutcome, NOT_AVAILABLE};
pub use parser::parse_article_records;
pub use query::{SearchCriteria, DEFAULT_MAX_RESULTS};
