use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

/// Marker substituted for any field absent from the source record
pub const NOT_AVAILABLE: &str = "N/A";

/// Base URL for article links derived from a PMID
const ARTICLE_LINK_BASE: &str = "https://pubmed.ncbi.nlm.nih.gov";

/// Build the canonical article link for a PMID.
///
/// The link is derived even when `pmid` is the [`NOT_AVAILABLE`] marker.
pub fn article_url(pmid: &str) -> String {
    format!("{ARTICLE_LINK_BASE}/{pmid}")
}

/// A normalized PubMed article record
///
/// Every field is always populated; data missing from the source document is
/// replaced with [`NOT_AVAILABLE`], so consumers never see null fields.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    /// PubMed ID
    #[serde(rename = "pubmed_id")]
    pub pmid: String,
    /// Canonical link to the article page
    pub link: String,
    /// Article title
    pub title: String,
    /// Authors as "Surname Initials", in document order
    pub authors: Vec<String>,
    /// Journal name
    pub source: String,
    /// Journal volume
    pub volume: String,
    /// Journal issue
    pub issue: String,
    /// Page range
    pub pages: String,
    /// DOI
    pub doi: String,
    /// Publication year
    pub pubdate: String,
    /// Abstract text
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

/// Outcome of a top-level search operation
///
/// The success and failure cases are distinct variants, so a caller cannot
/// read results out of a failed search by accident. Serialization produces
/// the envelope consumed by tool-hosting callers:
/// `{"success": true, "results": [...], "total_results": n}` or
/// `{"success": false, "error": "...", "results": []}`.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The search completed. `total_results` counts the identifiers matched
    /// by the search step and can exceed `results.len()` when some records
    /// are missing from the fetch response.
    Success {
        results: Vec<ArticleRecord>,
        total_results: usize,
    },
    /// The search could not be completed
    Failure { error: String },
}

impl SearchOutcome {
    /// Construct a failure outcome from any message
    pub fn failure<S: Into<String>>(error: S) -> Self {
        SearchOutcome::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SearchOutcome::Success { .. })
    }
}

impl Serialize for SearchOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SearchOutcome::Success {
                results,
                total_results,
            } => {
                let mut state = serializer.serialize_struct("SearchOutcome", 3)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("results", results)?;
                state.serialize_field("total_results", total_results)?;
                state.end()
            }
            SearchOutcome::Failure { error } => {
                let mut state = serializer.serialize_struct("SearchOutcome", 3)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
                state.serialize_field("results", &[] as &[ArticleRecord])?;
                state.end()
            }
        }
    }
}
