use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{PubMedError, Result};
use crate::pubmed::models::{ArticleRecord, SearchOutcome};
use crate::pubmed::parser::parse_article_records;
use crate::pubmed::query::SearchCriteria;
use crate::pubmed::responses::ESearchResult;

/// Message reported when a search is attempted without any criteria
pub const NO_CRITERIA_ERROR: &str =
    "No search parameters provided. Please specify authors or keywords.";

/// Client for searching PubMed via the eUtils API
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
}

impl PubMedClient {
    /// Create a new client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_search::PubMedClient;
    ///
    /// let client = PubMedClient::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_search::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new().with_user_agent("my-research-tool/1.0");
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();

        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    /// Create a new client around a custom HTTP client
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use pubmed_search::PubMedClient;
    /// use reqwest::Client;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = PubMedClient::with_client(http_client);
    /// ```
    pub fn with_client(client: Client) -> Self {
        let config = ClientConfig::new();
        Self {
            client,
            base_url: config.effective_base_url().to_string(),
        }
    }

    /// Search PubMed and return a structured result envelope
    ///
    /// This is the sole envelope boundary: the empty-criteria case and every
    /// network or parse failure surface as [`SearchOutcome::Failure`] with a
    /// human-readable message, never as an error value.
    ///
    /// `total_results` in the success envelope counts the identifiers
    /// matched by the search step, which can exceed the number of records
    /// present in the fetch response.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_search::{PubMedClient, SearchCriteria, SearchOutcome};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = PubMedClient::new();
    ///     let criteria = SearchCriteria::new().keyword("covid-19").max_results(5);
    ///
    ///     match client.search(&criteria).await {
    ///         SearchOutcome::Success { results, total_results } => {
    ///             println!("{} of {} articles", results.len(), total_results);
    ///         }
    ///         SearchOutcome::Failure { error } => eprintln!("search failed: {error}"),
    ///     }
    /// }
    /// ```
    #[instrument(skip(self, criteria))]
    pub async fn search(&self, criteria: &SearchCriteria) -> SearchOutcome {
        let Some(query) = criteria.build() else {
            debug!("No search criteria supplied");
            return SearchOutcome::failure(NO_CRITERIA_ERROR);
        };

        info!(query = %query, "Search query");

        match self.run_search(&query, criteria.get_max_results()).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "Search failed");
                SearchOutcome::failure(e.to_string())
            }
        }
    }

    async fn run_search(&self, query: &str, max_results: usize) -> Result<SearchOutcome> {
        let pmids = self.search_pmids(query, max_results).await?;
        let results = self.fetch_article_details(&pmids).await?;

        Ok(SearchOutcome::Success {
            results,
            total_results: pmids.len(),
        })
    }

    /// Search for PMIDs matching a query string
    ///
    /// Issues one ESearch request and returns at most `max_results` PMIDs.
    /// A response without an identifier list yields an empty vector.
    ///
    /// # Errors
    ///
    /// * [`PubMedError::RequestError`] - the HTTP request failed
    /// * [`PubMedError::JsonError`] - the response body is not valid JSON
    /// * [`PubMedError::ApiError`] - non-success status or NCBI-reported error
    #[instrument(skip(self), fields(query = %query, max_results = max_results))]
    pub async fn search_pmids(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=json",
            self.base_url,
            urlencoding::encode(query),
            max_results
        );

        debug!("Making ESearch API request");
        let response = self.make_request(&url).await?;
        let body = response.text().await?;
        let search_result: ESearchResult = serde_json::from_str(&body)?;

        // NCBI sometimes reports failures as 200 OK with an ERROR field
        if let Some(error_msg) = &search_result.esearchresult.error {
            return Err(PubMedError::ApiError {
                message: format!("NCBI ESearch API error: {error_msg}"),
            });
        }

        let pmids = search_result.esearchresult.idlist;
        info!(results_found = pmids.len(), "Search completed");

        Ok(pmids)
    }

    /// Fetch full article records for a list of PMIDs
    ///
    /// Issues one EFetch request with the PMIDs comma-joined and parses the
    /// XML response into one record per article element found, in document
    /// order. PMIDs absent from the response produce no record. An empty
    /// input returns an empty vector without a network call.
    ///
    /// Errors propagate to the caller; only [`search`](Self::search)
    /// converts them into an envelope.
    ///
    /// # Errors
    ///
    /// * [`PubMedError::RequestError`] - the HTTP request failed
    /// * [`PubMedError::XmlError`] - the response body is not parseable XML
    /// * [`PubMedError::ApiError`] - non-success status
    #[instrument(skip(self), fields(pmid_count = pmids.len()))]
    pub async fn fetch_article_details(&self, pmids: &[String]) -> Result<Vec<ArticleRecord>> {
        if pmids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml",
            self.base_url,
            pmids.join(",")
        );

        debug!("Making EFetch API request");
        let response = self.make_request(&url).await?;
        let xml_text = response.text().await?;

        let records = parse_article_records(&xml_text)?;
        info!(
            requested = pmids.len(),
            parsed = records.len(),
            "Fetch completed"
        );

        Ok(records)
    }

    /// GET a URL and map non-success statuses to [`PubMedError::ApiError`]
    async fn make_request(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(PubMedError::ApiError {
                message: format!(
                    "HTTP {}: {}",
                    response.status().as_u16(),
                    response
                        .status()
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                ),
            });
        }

        Ok(response)
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}
