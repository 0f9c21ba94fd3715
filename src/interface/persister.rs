use crate::{StarredRepository, StdResult};

/// A trait for persisting starred repositories to a storage medium.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait StarsPersister: Sync + Send {
    /// Persists the starred repositories and returns how many were written.
    async fn persist(&self, data: &[StarredRepository]) -> StdResult<u32>;
}
