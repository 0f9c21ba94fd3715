use anyhow::Context;
use log::{debug, error};
use reqwest::Client;

use crate::{FetchError, PageRequest, StarredRepository, StarsFetcher, StdResult};

/// The REST production endpoint for GitHub.
pub const GITHUB_API_ENDPOINT: &str = "https://api.github.com";

/// The GitHub API rejects anonymous requests without a user agent.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches pages of starred repositories from the GitHub REST API.
pub struct HttpStarsFetcher {
    client: Client,
    endpoint: String,
}

impl HttpStarsFetcher {
    /// Creates a new `HttpStarsFetcher` instance targeting the given API endpoint.
    pub fn try_new(endpoint: &str) -> StdResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .with_context(|| "Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn page_url(&self, request: &PageRequest) -> String {
        format!(
            "{}/users/{}/starred?page={}&per_page={}",
            self.endpoint, request.username, request.page, request.per_page
        )
    }
}

#[async_trait::async_trait]
impl StarsFetcher for HttpStarsFetcher {
    async fn fetch_page(&self, request: &PageRequest) -> StdResult<Vec<StarredRepository>> {
        let page = request.page;
        let url = self.page_url(request);
        debug!("Fetching {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                page,
                message: e.to_string(),
            })?;
        let status = response.status();
        let body = response.text().await.map_err(|e| FetchError::Transport {
            page,
            message: e.to_string(),
        })?;

        let repositories = serde_json::from_str::<Vec<StarredRepository>>(&body).map_err(|e| {
            error!("Failed to parse starred repositories of {request}: {e}");
            FetchError::Parse {
                page,
                message: format!("status={status}, {e}"),
            }
        })?;
        debug!("Fetched {} repositories on page {page}", repositories.len());

        Ok(repositories)
    }
}
