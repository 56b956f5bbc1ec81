//! GitHub release client.

use crate::error::ReleaseError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Base URL of the GitHub REST API.
pub const GITHUB_API: &str = "https://api.github.com";

/// Default upstream repository.
pub const LUCIDE_REPOSITORY: &str = "lucide-icons/lucide";

const ICONS_ASSET_PREFIX: &str = "lucide-icons-";
const ICONS_ASSET_SUFFIX: &str = ".zip";

/// A published release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Git tag of the release (`0.469.0`).
    pub tag_name: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Web page of the release.
    pub html_url: String,
    /// Release notes in Markdown.
    #[serde(default)]
    pub body: Option<String>,
    /// Downloadable files.
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// A file attached to a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseAsset {
    /// File name.
    pub name: String,
    /// Direct download URL.
    #[serde(default)]
    pub browser_download_url: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
}

impl Release {
    /// Returns the `lucide-icons-*.zip` asset.
    pub fn icons_asset(&self) -> Result<&ReleaseAsset, ReleaseError> {
        self.assets
            .iter()
            .find(|asset| {
                asset.name.len() > ICONS_ASSET_PREFIX.len() + ICONS_ASSET_SUFFIX.len()
                    && asset.name.starts_with(ICONS_ASSET_PREFIX)
                    && asset.name.ends_with(ICONS_ASSET_SUFFIX)
            })
            .ok_or_else(|| ReleaseError::AssetNotFound(self.tag_name.clone()))
    }
}

/// Talks to the GitHub releases API.
#[derive(Debug, Clone)]
pub struct ReleaseClient {
    http: reqwest::Client,
    api_base: String,
    token: Option<String>,
}

impl ReleaseClient {
    /// Creates a client. A token raises the API rate limit.
    pub fn new(token: Option<String>) -> Result<Self, ReleaseError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let http = reqwest::Client::builder()
            .user_agent(concat!("lucide-tool/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            api_base: GITHUB_API.to_string(),
            token: token.filter(|token| !token.is_empty()),
        })
    }

    /// Points the client at another API host.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Fetches the latest published release of `repository` (`owner/repo`).
    pub async fn latest_release(&self, repository: &str) -> Result<Release, ReleaseError> {
        let url = format!("{}/repos/{repository}/releases/latest", self.api_base);
        tracing::info!(url = %url, "fetching latest release");

        let mut request = self.http.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ReleaseError::HttpStatus { url, status });
        }

        let release: Release = response.json().await?;
        tracing::debug!(tag = %release.tag_name, assets = release.assets.len(), "latest release");
        Ok(release)
    }

    /// Streams `url` into `dest`, returning the number of bytes written.
    pub async fn download(&self, url: &str, dest: &mut impl Write) -> Result<u64, ReleaseError> {
        tracing::info!(url, "downloading");

        let mut response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ReleaseError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let mut written = 0u64;
        while let Some(chunk) = response.chunk().await? {
            dest.write_all(&chunk).map_err(ReleaseError::TempFile)?;
            written += chunk.len() as u64;
        }
        dest.flush().map_err(ReleaseError::TempFile)?;
        Ok(written)
    }
}
