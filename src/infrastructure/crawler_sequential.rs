use std::sync::Arc;

use log::{debug, info, warn};

use crate::{
    PageRequest, RequestError, StarredCollection, StarsCrawler, StarsFetcher, StdResult, Username,
};

/// A sequential crawler that walks the pages one at a time
pub struct SequentialCrawler {
    fetcher: Arc<dyn StarsFetcher>,
    per_page: u16,
}

impl SequentialCrawler {
    /// Creates a new `SequentialCrawler` instance with the given fetcher and page size.
    pub fn new(fetcher: Arc<dyn StarsFetcher>, per_page: u16) -> Self {
        Self { fetcher, per_page }
    }
}

#[async_trait::async_trait]
impl StarsCrawler for SequentialCrawler {
    async fn crawl(
        &self,
        username: &Username,
        max_repositories: u32,
    ) -> StdResult<StarredCollection> {
        if max_repositories == 0 {
            return Err(RequestError::InvalidMaxRepositories.into());
        }

        let mut collection = StarredCollection::default();
        let mut page = 1;
        loop {
            let request = PageRequest::try_new(username, page, self.per_page)?;
            info!("Processing request: {request}");
            let repositories = self.fetcher.fetch_page(&request).await?;
            let is_exhausted = repositories.is_empty();
            for repository in &repositories {
                debug!("Fetched {repository}");
            }
            collection.push_page(repositories);

            warn!(
                "Starred repositories: done={}/{max_repositories}, Pages: done={page}",
                collection.total_repositories()
            );
            // Stops on the first page boundary at or past the cap.
            if is_exhausted || collection.total_repositories() >= max_repositories {
                break;
            }
            page += 1;
        }

        Ok(collection)
    }
}
