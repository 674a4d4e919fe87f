//! Fetching external stylesheets, scripts and pages.

use std::{future::Future, path::PathBuf};

use anyhow::{Context, Result};
use reqwest::{Client, Url};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported resource URL: {0}")]
    Unsupported(String),
}

/// Retrieves the text of a resource by URL.
pub trait ResourceFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Fetches `http(s)` URLs over the network and `file` URLs from disk.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

impl ResourceFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|_| FetchError::Unsupported(url.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => {
                let response = self.client.get(parsed).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(FetchError::Status {
                        url: url.to_string(),
                        status: status.as_u16(),
                    });
                }
                Ok(response.text().await?)
            }
            "file" => {
                let path = parsed
                    .to_file_path()
                    .map_err(|_| FetchError::Unsupported(url.to_string()))?;
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| FetchError::Io { path, source })
            }
            _ => Err(FetchError::Unsupported(url.to_string())),
        }
    }
}

/// Label for an external resource: the last path segment, or the whole URL
/// when that segment is empty.
pub fn origin_label(url: &str) -> String {
    url.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(url)
        .to_string()
}

/// Turn a CLI page argument into a URL.
///
/// `http`, `https` and `file` URLs are used as given. Anything else is read
/// as a local path.
pub fn page_url(target: &str) -> Result<Url> {
    if let Ok(url) = Url::parse(target)
        && matches!(url.scheme(), "http" | "https" | "file")
    {
        return Ok(url);
    }

    let path = std::fs::canonicalize(target)
        .with_context(|| format!("Page not found: {}", target))?;
    Url::from_file_path(&path)
        .map_err(|_| anyhow::anyhow!("Cannot turn {} into a file URL", path.display()))
}
