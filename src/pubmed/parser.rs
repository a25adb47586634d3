//! PubMed EFetch XML parser
//!
//! Parses EFetch responses into [`ArticleRecord`]s, one per `<PubmedArticle>`
//! element present in the document. Individual fields missing from an article
//! fall back to the [`NOT_AVAILABLE`] marker; a document that cannot be
//! deserialized at all fails the whole call.

use quick_xml::de::from_str;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::{PubMedError, Result};
use crate::pubmed::models::{article_url, ArticleRecord, NOT_AVAILABLE};

/// Strip inline HTML formatting tags from XML content
///
/// Handles tags like `<i>`, `<sup>`, `<sub>`, `<b>` that appear inside
/// AbstractText and ArticleTitle and break serde-based deserialization.
fn strip_inline_html_tags(xml: &str) -> String {
    use regex::Regex;
    use std::sync::OnceLock;

    static INLINE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = INLINE_TAG_REGEX.get_or_init(|| {
        Regex::new(r"</?(?:i|b|u|sup|sub|em|strong|italic|bold)>")
            .expect("Failed to compile inline tag regex")
    });

    re.replace_all(xml, "").into_owned()
}

// XML-shaped deserialization types. Field paths mirror the EFetch DTD;
// everything is optional so absent data falls back to the marker during
// conversion instead of failing the document.

#[derive(Debug, Deserialize)]
struct PubmedArticleSet {
    #[serde(rename = "PubmedArticle", default)]
    articles: Vec<PubmedArticleXml>,
}

#[derive(Debug, Deserialize)]
struct PubmedArticleXml {
    #[serde(rename = "MedlineCitation")]
    medline_citation: Option<MedlineCitationXml>,
}

#[derive(Debug, Deserialize)]
struct MedlineCitationXml {
    #[serde(rename = "PMID")]
    pmid: Option<PmidXml>,
    #[serde(rename = "Article")]
    article: Option<ArticleXml>,
}

#[derive(Debug, Deserialize)]
struct PmidXml {
    #[serde(rename = "$text")]
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArticleXml {
    #[serde(rename = "Journal")]
    journal: Option<JournalXml>,
    #[serde(rename = "ArticleTitle")]
    title: Option<String>,
    #[serde(rename = "Pagination")]
    pagination: Option<PaginationXml>,
    #[serde(rename = "ELocationID", default)]
    elocation_ids: Vec<ELocationIdXml>,
    #[serde(rename = "Abstract")]
    abstract_node: Option<AbstractXml>,
    #[serde(rename = "AuthorList")]
    author_list: Option<AuthorListXml>,
}

#[derive(Debug, Deserialize)]
struct JournalXml {
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "JournalIssue")]
    journal_issue: Option<JournalIssueXml>,
}

#[derive(Debug, Deserialize)]
struct JournalIssueXml {
    #[serde(rename = "Volume")]
    volume: Option<String>,
    #[serde(rename = "Issue")]
    issue: Option<String>,
    #[serde(rename = "PubDate")]
    pub_date: Option<PubDateXml>,
}

#[derive(Debug, Deserialize)]
struct PubDateXml {
    // Month and Day are intentionally not extracted
    #[serde(rename = "Year")]
    year: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PaginationXml {
    #[serde(rename = "MedlinePgn")]
    medline_pgn: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ELocationIdXml {
    #[serde(rename = "@EIdType", default)]
    eid_type: Option<String>,
    #[serde(rename = "$text")]
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AbstractXml {
    #[serde(rename = "AbstractText", default)]
    sections: Vec<AbstractTextXml>,
}

#[derive(Debug, Deserialize)]
struct AbstractTextXml {
    #[serde(rename = "$text")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AuthorListXml {
    #[serde(rename = "Author", default)]
    authors: Vec<AuthorXml>,
}

#[derive(Debug, Deserialize)]
struct AuthorXml {
    #[serde(rename = "LastName")]
    last_name: Option<String>,
    #[serde(rename = "Initials")]
    initials: Option<String>,
}

impl PubmedArticleXml {
    fn into_record(self) -> ArticleRecord {
        let na = || NOT_AVAILABLE.to_string();

        let (pmid_node, article) = match self.medline_citation {
            Some(citation) => (citation.pmid, citation.article),
            None => (None, None),
        };

        let pmid = pmid_node.and_then(|p| p.value).unwrap_or_else(na);

        let mut title = na();
        let mut source = na();
        let mut volume = na();
        let mut issue = na();
        let mut pages = na();
        let mut doi = na();
        let mut pubdate = na();
        let mut abstract_text = na();
        let mut authors = Vec::new();

        if let Some(article) = article {
            if let Some(t) = article.title {
                title = t;
            }
            if let Some(journal) = article.journal {
                if let Some(name) = journal.title {
                    source = name;
                }
                if let Some(journal_issue) = journal.journal_issue {
                    if let Some(v) = journal_issue.volume {
                        volume = v;
                    }
                    if let Some(i) = journal_issue.issue {
                        issue = i;
                    }
                    if let Some(year) = journal_issue.pub_date.and_then(|d| d.year) {
                        pubdate = year;
                    }
                }
            }
            if let Some(pgn) = article.pagination.and_then(|p| p.medline_pgn) {
                pages = pgn;
            }
            if let Some(value) = article
                .elocation_ids
                .into_iter()
                .find(|e| e.eid_type.as_deref() == Some("doi"))
                .and_then(|e| e.value)
            {
                doi = value;
            }
            // First AbstractText section only; structured abstracts with
            // several labeled sections contribute their first section.
            if let Some(text) = article
                .abstract_node
                .and_then(|a| a.sections.into_iter().next())
                .and_then(|s| s.text)
            {
                abstract_text = text;
            }
            if let Some(list) = article.author_list {
                for author in list.authors {
                    let last_name = author.last_name.unwrap_or_default();
                    let initials = author.initials.unwrap_or_default();
                    // An author with neither part still yields an entry
                    authors.push(format!("{last_name} {initials}").trim().to_string());
                }
            }
        }

        let link = article_url(&pmid);

        ArticleRecord {
            pmid,
            link,
            title,
            authors,
            source,
            volume,
            issue,
            pages,
            doi,
            pubdate,
            abstract_text,
        }
    }
}

/// Parse every article in an EFetch XML response
///
/// Returns one [`ArticleRecord`] per `<PubmedArticle>` element, in document
/// order. Identifiers requested but absent from the response simply produce
/// no record.
///
/// # Errors
///
/// Returns [`PubMedError::XmlError`] when the document cannot be
/// deserialized; there are no partial results.
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_article_records(xml: &str) -> Result<Vec<ArticleRecord>> {
    let cleaned_xml = strip_inline_html_tags(xml);

    let article_set: PubmedArticleSet = from_str(&cleaned_xml)
        .map_err(|e| PubMedError::XmlError(format!("Failed to deserialize XML: {e}")))?;

    let records: Vec<ArticleRecord> = article_set
        .articles
        .into_iter()
        .map(PubmedArticleXml::into_record)
        .collect();

    debug!(records = records.len(), "Parsed EFetch response");
    Ok(records)
}
