//! Enrichment module: from entries to described entries
//!
//! This module contains the network side of a run, including:
//! - HTTP fetching with a redirect limit and a per-fetch deadline
//! - Description extraction from the fetched HTML
//! - Fallback to a mirror page when the primary page yields nothing
//! - A bounded, order-preserving worker pool over all entries

mod extractor;
mod fallback;
mod fetcher;
mod scheduler;
pub mod text;

pub use extractor::{DescriptionStrategy, Extractor, MetaDescription, ProseParagraph};
pub use fallback::FallbackResolver;
pub use fetcher::{build_http_client, FetchResult, Fetcher, DEFAULT_MAX_REDIRECTS};
pub use scheduler::run_all;

use crate::config::Config;
use crate::report::Entry;
use std::sync::Arc;
use std::time::Duration;

/// Description used when neither the page nor its mirror yields one
pub const NO_DESCRIPTION: &str = "[no description found]";

/// Description used when enrichment is turned off
pub const DESCRIPTION_SKIPPED: &str = "[description skipped]";

/// Where an entry's description came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptionSource {
    /// The entry's own page
    Primary,
    /// The mirror page derived from the entry's URL
    Fallback,
    /// Nothing found; the description is [`NO_DESCRIPTION`]
    NotFound,
    /// Enrichment disabled; the description is [`DESCRIPTION_SKIPPED`]
    Skipped,
}

/// Description text together with its source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub description: String,
    pub source: DescriptionSource,
}

impl Enrichment {
    fn found(description: String, source: DescriptionSource) -> Self {
        Self {
            description,
            source,
        }
    }

    pub fn not_found() -> Self {
        Self {
            description: NO_DESCRIPTION.to_string(),
            source: DescriptionSource::NotFound,
        }
    }

    pub fn skipped() -> Self {
        Self {
            description: DESCRIPTION_SKIPPED.to_string(),
            source: DescriptionSource::Skipped,
        }
    }
}

/// An entry with its description, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedEntry {
    pub name: String,
    pub url: String,
    pub enrichment: Enrichment,
}

impl EnrichedEntry {
    pub fn new(entry: Entry, enrichment: Enrichment) -> Self {
        Self {
            name: entry.name,
            url: entry.url,
            enrichment,
        }
    }

    pub fn description(&self) -> &str {
        &self.enrichment.description
    }
}

/// Fetches and extracts one entry's description
#[derive(Debug)]
pub struct Enricher {
    fetcher: Fetcher,
    extractor: Extractor,
    fallback: Option<FallbackResolver>,
}

impl Enricher {
    pub fn new(fetcher: Fetcher, extractor: Extractor, fallback: Option<FallbackResolver>) -> Self {
        Self {
            fetcher,
            extractor,
            fallback,
        }
    }

    /// Builds an enricher from configuration
    ///
    /// The timeout is floored at one second.
    pub fn from_config(config: &Config) -> crate::Result<Self> {
        let client = build_http_client(&config.user_agent, config.enrich.allow_http)?;
        let timeout = Duration::from_secs(config.enrich.timeout_secs.max(1));
        let fetcher = Fetcher::new(client, timeout)
            .with_max_redirects(config.enrich.max_redirects)
            .with_allow_http(config.enrich.allow_http);
        let fallback = config
            .fallback
            .enabled
            .then(|| FallbackResolver::from_config(&config.fallback));

        Ok(Self::new(fetcher, Extractor::default(), fallback))
    }

    /// Fetch then extract; any failure yields `None`
    pub async fn describe(&self, url: &str) -> Option<String> {
        match self.fetcher.fetch(url).await {
            Ok(body) => {
                let description = self.extractor.extract(&body);
                if description.is_none() {
                    tracing::debug!("No description in {}", url);
                }
                description
            }
            Err(e) => {
                tracing::debug!("Fetch failed: {}", e);
                None
            }
        }
    }

    /// Describes one entry: primary page, then the mirror once
    ///
    /// Never fails; every failure degrades to [`Enrichment::not_found`].
    pub async fn enrich(&self, entry: &Entry) -> Enrichment {
        if let Some(description) = self.describe(&entry.url).await {
            return Enrichment::found(description, DescriptionSource::Primary);
        }

        let alternate = self
            .fallback
            .as_ref()
            .and_then(|resolver| resolver.derive_alternate(&entry.url));

        if let Some(alternate) = alternate {
            tracing::debug!("Trying fallback {} for {}", alternate, entry.url);
            if let Some(description) = self.describe(&alternate).await {
                return Enrichment::found(description, DescriptionSource::Fallback);
            }
        }

        Enrichment::not_found()
    }
}

/// Enriches every entry with at most `concurrency` in flight
///
/// The result has one element per entry, in the same order.
pub async fn enrich_all(
    enricher: Arc<Enricher>,
    entries: Vec<Entry>,
    concurrency: usize,
) -> crate::Result<Vec<EnrichedEntry>> {
    let enrichments = run_all(entries.clone(), concurrency, move |_, entry| {
        let enricher = Arc::clone(&enricher);
        async move { enricher.enrich(&entry).await }
    })
    .await?;

    Ok(entries
        .into_iter()
        .zip(enrichments)
        .map(|(entry, enrichment)| EnrichedEntry::new(entry, enrichment))
        .collect())
}

/// Pairs every entry with the "skipped" marker, without touching the network
pub fn skip_all(entries: Vec<Entry>) -> Vec<EnrichedEntry> {
    entries
        .into_iter()
        .map(|entry| EnrichedEntry::new(entry, Enrichment::skipped()))
        .collect()
}
