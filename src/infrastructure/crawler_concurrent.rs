use std::{ops::RangeInclusive, sync::Arc};

use anyhow::anyhow;
use log::{debug, error, info, warn};
use tokio::{
    sync::{Mutex, OwnedSemaphorePermit, Semaphore},
    task::{JoinError, JoinSet},
};

use crate::{
    PageRequest, RequestError, StarredCollection, StarsCrawler, StarsFetcher, StdResult, Username,
};

/// The default number of page requests in flight at the same time.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 5;

/// A concurrent crawler that fetches all the planned pages in parallel, with bounded concurrency.
pub struct ConcurrentCrawler {
    /// The page fetcher
    fetcher: Arc<dyn StarsFetcher>,

    /// The number of repositories per page
    per_page: u16,

    /// The maximum number of page requests in flight at the same time
    max_in_flight: usize,
}

impl ConcurrentCrawler {
    /// Creates a new `ConcurrentCrawler` instance with the given fetcher, page size and concurrency bound.
    pub fn new(fetcher: Arc<dyn StarsFetcher>, per_page: u16, max_in_flight: usize) -> Self {
        Self {
            fetcher,
            per_page,
            max_in_flight: max_in_flight.max(1),
        }
    }

    /// The pages to fetch, computed upfront from the cap.
    ///
    /// The range is not shortened when a page turns out to be empty, so a trailing empty page is usually requested.
    fn planned_pages(&self, max_repositories: u32) -> StdResult<RangeInclusive<u32>> {
        let last_page = max_repositories
            .checked_div(self.per_page as u32)
            .ok_or(RequestError::InvalidPerPage)?
            .checked_add(1)
            .ok_or(RequestError::PageRangeOverflow(max_repositories))?;

        Ok(1..=last_page)
    }

    async fn fetch_and_aggregate(
        fetcher: Arc<dyn StarsFetcher>,
        request: PageRequest,
        _permit: OwnedSemaphorePermit,
        collection: Arc<Mutex<StarredCollection>>,
    ) -> StdResult<u32> {
        // The permit is released when dropped, including on failure, panic or abort.
        info!("Processing request: {request}");
        let repositories = fetcher.fetch_page(&request).await?;
        let total_fetched = repositories.len() as u32;
        {
            let mut collection = collection.lock().await;
            collection.push_page(repositories);
            debug!(
                "Aggregated page {}: total={}",
                request.page(),
                collection.total_repositories()
            );
        }

        Ok(total_fetched)
    }

    fn check_completed_task(joined: Result<StdResult<u32>, JoinError>) -> StdResult<u32> {
        match joined {
            Ok(Ok(total_fetched)) => Ok(total_fetched),
            Ok(Err(e)) => {
                error!("Page request failed, aborting the remaining requests: {e}");
                Err(e)
            }
            Err(e) => {
                error!("Page request task failed, aborting the remaining requests: {e}");
                Err(anyhow!("Page request task failed: {e}"))
            }
        }
    }
}

#[async_trait::async_trait]
impl StarsCrawler for ConcurrentCrawler {
    async fn crawl(
        &self,
        username: &Username,
        max_repositories: u32,
    ) -> StdResult<StarredCollection> {
        if max_repositories == 0 {
            return Err(RequestError::InvalidMaxRepositories.into());
        }
        let planned_pages = self.planned_pages(max_repositories)?;
        let total_tasks = *planned_pages.end();
        info!(
            "Planning {total_tasks} page requests, max_in_flight={}",
            self.max_in_flight
        );

        // Scoped to this invocation, never shared with another crawl.
        let admission_gate = Arc::new(Semaphore::new(self.max_in_flight));
        let collection = Arc::new(Mutex::new(StarredCollection::default()));

        // Returning early drops the join set, which aborts the tasks still running.
        let mut tasks = JoinSet::new();
        let mut total_completed = 0;
        for page in planned_pages {
            let request = PageRequest::try_new(username, page, self.per_page)?;
            let permit = Arc::clone(&admission_gate).acquire_owned().await?;
            while let Some(joined) = tasks.try_join_next() {
                Self::check_completed_task(joined)?;
                total_completed += 1;
            }
            tasks.spawn(Self::fetch_and_aggregate(
                Arc::clone(&self.fetcher),
                request,
                permit,
                Arc::clone(&collection),
            ));
        }

        while let Some(joined) = tasks.join_next().await {
            let total_fetched = Self::check_completed_task(joined)?;
            total_completed += 1;
            warn!(
                "Pages: done={total_completed}/{total_tasks}, last page fetched {total_fetched} repositories"
            );
        }

        let mut collection = collection.lock().await;

        Ok(std::mem::take(&mut *collection))
    }
}
