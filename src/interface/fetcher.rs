use crate::{PageRequest, StarredRepository, StdResult};

/// A trait for fetching one page of starred repositories from the API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait StarsFetcher: Sync + Send {
    /// Fetches the starred repositories of a page. An empty page means the source is exhausted.
    async fn fetch_page(&self, request: &PageRequest) -> StdResult<Vec<StarredRepository>>;
}
