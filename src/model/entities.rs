use std::fmt::Display;

use serde::Deserialize;

/// The owner of a starred repository.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryOwner {
    /// The login of the owner.
    pub(crate) login: String,

    /// The GitHub profile URL of the owner.
    pub(crate) html_url: String,
}

impl RepositoryOwner {
    /// Creates a new `RepositoryOwner` instance.
    pub fn new(login: &str, html_url: &str) -> Self {
        Self {
            login: login.to_string(),
            html_url: html_url.to_string(),
        }
    }

    /// Retrieves the login of the owner.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Retrieves the profile URL of the owner.
    pub fn html_url(&self) -> &str {
        &self.html_url
    }
}

/// Metadata of a repository starred by a user.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct StarredRepository {
    /// The name of the repository.
    pub(crate) name: String,

    /// The URL of the repository.
    pub(crate) html_url: String,

    /// The description of the repository.
    #[serde(default)]
    pub(crate) description: Option<String>,

    /// The primary language of the repository.
    #[serde(default)]
    pub(crate) language: Option<String>,

    /// The topics the repository is tagged with.
    #[serde(default)]
    pub(crate) topics: Vec<String>,

    /// The owner of the repository.
    pub(crate) owner: RepositoryOwner,
}

impl StarredRepository {
    /// Creates a new `StarredRepository` instance.
    pub fn new(
        name: &str,
        html_url: &str,
        description: Option<&str>,
        language: Option<&str>,
        topics: &[&str],
        owner: RepositoryOwner,
    ) -> Self {
        Self {
            name: name.to_string(),
            html_url: html_url.to_string(),
            description: description.map(str::to_string),
            language: language.map(str::to_string),
            topics: topics.iter().map(|topic| topic.to_string()).collect(),
            owner,
        }
    }

    /// Retrieves the repository name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Retrieves the repository URL.
    pub fn html_url(&self) -> &str {
        &self.html_url
    }

    /// Retrieves the repository description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Retrieves the primary language of the repository.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Retrieves the topics of the repository.
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    /// Retrieves the owner of the repository.
    pub fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Creates a dummy `StarredRepository` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(owner: &str, name: &str) -> Self {
        Self::new(
            name,
            &format!("https://github.com/{owner}/{name}"),
            Some("A dummy repository"),
            Some("Rust"),
            &["cli", "backup"],
            RepositoryOwner::new(owner, &format!("https://github.com/{owner}")),
        )
    }

    /// Creates a page of distinct dummy repositories for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy_page(page: u32, total: usize) -> Vec<Self> {
        (0..total)
            .map(|index| Self::dummy("owner", &format!("repository-{page}-{index}")))
            .collect()
    }
}

impl Display for StarredRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Repository: {}/{}, Language: {}",
            self.owner.login,
            self.name,
            self.language.as_deref().unwrap_or("-")
        )
    }
}

/// The starred repositories gathered across all pages of one fetch operation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StarredCollection {
    /// The repositories gathered so far, in arrival order.
    repositories: Vec<StarredRepository>,

    /// The running count of gathered repositories.
    total_repositories: u32,
}

impl StarredCollection {
    /// Appends the repositories of a fetched page.
    pub fn push_page(&mut self, repositories: Vec<StarredRepository>) {
        self.total_repositories += repositories.len() as u32;
        self.repositories.extend(repositories);
    }

    /// Retrieves the running count of gathered repositories.
    pub fn total_repositories(&self) -> u32 {
        self.total_repositories
    }

    /// Retrieves the gathered repositories.
    pub fn repositories(&self) -> &[StarredRepository] {
        &self.repositories
    }

    /// Consumes the collection and returns the gathered repositories.
    pub fn into_repositories(self) -> Vec<StarredRepository> {
        self.repositories
    }
}
