use crate::{StarredCollection, StdResult, Username};

/// A trait for gathering the starred repositories of a user across all pages.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait StarsCrawler: Sync + Send {
    /// Crawl the starred repositories of a user, up to the page boundary following `max_repositories`.
    async fn crawl(
        &self,
        username: &Username,
        max_repositories: u32,
    ) -> StdResult<StarredCollection>;
}
