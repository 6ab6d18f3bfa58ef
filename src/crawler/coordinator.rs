//! Scrape coordinator - main orchestration logic
//!
//! This module drives a scrape from seed input to finished report:
//! - Parsing the free-text seed input
//! - Discovering policy links on each seed page
//! - Running the matching extractor for each link
//! - Assembling the link table and code index
//!
//! Everything runs strictly in sequence: one seed is fully processed,
//! extractions included, before the next one starts. A failure is scoped to
//! the seed or link that caused it and never aborts the batch.

use crate::config::Config;
use crate::crawler::cache::LinkCache;
use crate::crawler::classifier::get_links;
use crate::crawler::extractor::{extract_codes_from_link, select_path};
use crate::crawler::fetcher::build_http_client;
use crate::output::{NoticeLevel, ScrapeReport};
use crate::policy::Link;
use crate::url::parse_seed_input;
use crate::ScrapeError;
use reqwest::Client;

/// Main scrape coordinator
pub struct Scraper {
    config: Config,
    client: Client,
    link_cache: LinkCache,
}

impl Scraper {
    /// Creates a new scraper
    ///
    /// # Arguments
    ///
    /// * `config` - The scraper configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Scraper)` - Ready to run
    /// * `Err(ScrapeError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, ScrapeError> {
        let client = build_http_client(&config.fetch, &config.user_agent)?;

        Ok(Self {
            config,
            client,
            link_cache: LinkCache::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs a scrape over free-text seed input
    ///
    /// The input is split on commas and newlines. If no seed remains, a
    /// warning is logged and [`ScrapeError::EmptyInput`] is returned without
    /// any network traffic.
    pub async fn run(
        &mut self,
        raw_input: &str,
        skip_pdf: bool,
    ) -> Result<ScrapeReport, ScrapeError> {
        let seeds = parse_seed_input(raw_input);
        self.run_seeds(&seeds, skip_pdf).await
    }

    /// Runs a scrape over an already split list of seeds
    ///
    /// # Returns
    ///
    /// * `Ok(ScrapeReport)` - The finished report; seed failures are
    ///   recorded on it as error notices
    /// * `Err(ScrapeError::EmptyInput)` - No seeds were given
    pub async fn run_seeds(
        &mut self,
        seeds: &[String],
        skip_pdf: bool,
    ) -> Result<ScrapeReport, ScrapeError> {
        if seeds.is_empty() {
            tracing::warn!("Please enter at least one valid URL.");
            return Err(ScrapeError::EmptyInput);
        }

        tracing::info!("Starting scrape of {} seed URL(s)", seeds.len());
        let start_time = std::time::Instant::now();
        let mut report = ScrapeReport::new(seeds.to_vec(), skip_pdf);

        for (index, seed) in seeds.iter().enumerate() {
            tracing::info!("[{}/{}] Processing {}", index + 1, seeds.len(), seed);

            let links = match self.links_for_seed(seed).await {
                Ok(links) => links,
                Err(e) => {
                    report.seed_failed(seed, &e);
                    continue;
                }
            };

            report.add_links(&links);
            self.extract_all(&links, skip_pdf, &mut report).await;
        }

        report.finish();
        tracing::info!(
            "Scrape completed: {} link(s), {} code(s) in {:?}",
            report.links.len(),
            report.codes.len(),
            start_time.elapsed()
        );

        Ok(report)
    }

    /// Returns the policy links on a seed page, consulting the session cache
    async fn links_for_seed(&mut self, seed: &str) -> Result<Vec<Link>, ScrapeError> {
        if let Some(links) = self.link_cache.get(seed) {
            tracing::debug!("Using cached links for {}", seed);
            return Ok(links.to_vec());
        }

        let links = get_links(&self.client, seed, self.config.fetch.page_timeout()).await?;
        self.link_cache.insert(seed, links.clone());
        Ok(links)
    }

    /// Runs the selected extractor for each link, in order
    async fn extract_all(&self, links: &[Link], skip_pdf: bool, report: &mut ScrapeReport) {
        let pending = links
            .iter()
            .filter(|link| select_path(link, skip_pdf).is_some())
            .count();
        if pending < links.len() {
            report.notify(
                NoticeLevel::Info,
                format!(
                    "Skipping {} PDF link(s) on {}",
                    links.len() - pending,
                    links[0].source_url
                ),
            );
        }

        for link in links {
            if select_path(link, skip_pdf).is_none() {
                continue;
            }

            let codes =
                extract_codes_from_link(&self.client, &self.config.fetch, link, skip_pdf).await;
            tracing::debug!("{} code(s) in {}", codes.len(), link.link);
            report.add_codes(link, codes);
        }
    }
}

/// Runs a complete scrape with the configured seeds and PDF setting
///
/// # Example
///
/// ```no_run
/// use medpolicy_scraper::config::Config;
/// use medpolicy_scraper::crawler::run_scrape;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = run_scrape(Config::default(), "https://example.com/policies").await?;
/// println!("{} codes", report.codes.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_scrape(config: Config, raw_input: &str) -> Result<ScrapeReport, ScrapeError> {
    let skip_pdf = config.scrape.skip_pdf;
    let mut scraper = Scraper::new(config)?;
    scraper.run(raw_input, skip_pdf).await
}
