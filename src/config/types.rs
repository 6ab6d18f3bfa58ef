use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub scrape: ScrapeConfig,
}

/// HTTP fetch timeouts
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FetchConfig {
    /// Timeout for seed pages and HTML policy pages (seconds)
    #[serde(default = "default_page_timeout")]
    pub page_timeout_secs: u64,

    /// Timeout for PDF downloads (seconds)
    #[serde(default = "default_pdf_timeout")]
    pub pdf_timeout_secs: u64,

    /// Timeout for establishing a connection (seconds)
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl FetchConfig {
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }

    pub fn pdf_timeout(&self) -> Duration {
        Duration::from_secs(self.pdf_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_timeout_secs: default_page_timeout(),
            pdf_timeout_secs: default_pdf_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

fn default_page_timeout() -> u64 {
    10
}

fn default_pdf_timeout() -> u64 {
    15
}

fn default_connect_timeout() -> u64 {
    10
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(default = "default_crawler_name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(default = "default_crawler_version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(default)]
    pub contact_url: Option<String>,

    /// Email address for crawler-related contact
    #[serde(default)]
    pub contact_email: Option<String>,
}

impl UserAgentConfig {
    /// Formats the User-Agent header value
    ///
    /// `Name/Version`, followed by `(+url; email)` when contact details are set.
    pub fn header_value(&self) -> String {
        let base = format!("{}/{}", self.crawler_name, self.crawler_version);
        match (&self.contact_url, &self.contact_email) {
            (Some(url), Some(email)) => format!("{} (+{}; {})", base, url, email),
            (Some(url), None) => format!("{} (+{})", base, url),
            (None, Some(email)) => format!("{} ({})", base, email),
            (None, None) => base,
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
            contact_url: None,
            contact_email: None,
        }
    }
}

fn default_crawler_name() -> String {
    "MedPolicyScraper".to_string()
}

fn default_crawler_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Directory the CSV files are written into
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,

    /// File name of the policy link table
    #[serde(default = "default_links_file")]
    pub links_file: String,

    /// File name of the code index table
    #[serde(default = "default_codes_file")]
    pub codes_file: String,

    /// Optional path of a markdown summary report
    #[serde(default)]
    pub summary_path: Option<PathBuf>,
}

impl OutputConfig {
    pub fn links_path(&self) -> PathBuf {
        self.directory.join(&self.links_file)
    }

    pub fn codes_path(&self) -> PathBuf {
        self.directory.join(&self.codes_file)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            links_file: default_links_file(),
            codes_file: default_codes_file(),
            summary_path: None,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_links_file() -> String {
    "policy_links.csv".to_string()
}

fn default_codes_file() -> String {
    "code_index.csv".to_string()
}

/// Scrape behavior configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScrapeConfig {
    /// Skip downloading and parsing PDF policy documents
    #[serde(default)]
    pub skip_pdf: bool,

    /// Seed pages to crawl when none are given on the command line
    #[serde(default)]
    pub seeds: Vec<String>,
}
