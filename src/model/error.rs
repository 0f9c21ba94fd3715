use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// A failure of a single page fetch.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// The remote source could not be reached or the body could not be read.
    #[error("Transport error on page {page}: {message}")]
    Transport { page: u32, message: String },

    /// The response body is not a list of starred repositories.
    #[error("Parsing error on page {page}: {message}")]
    Parse { page: u32, message: String },
}

/// An invalid argument given to a fetch operation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    #[error("Page index must be at least 1, got {0}")]
    InvalidPage(u32),

    #[error("Page size must be greater than 0")]
    InvalidPerPage,

    #[error("Maximum number of repositories must be greater than 0")]
    InvalidMaxRepositories,

    #[error("Too many pages to plan for {0} repositories")]
    PageRangeOverflow(u32),
}
