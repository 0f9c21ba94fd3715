use serde::Serialize;

use super::StarredRepository;

/// A starred repository as written to the backup document.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct StarredRepositoryDocument {
    #[serde(rename = "repo name")]
    pub(crate) name: String,

    pub(crate) url: String,

    pub(crate) description: String,

    #[serde(rename = "author")]
    pub(crate) owner: String,

    #[serde(rename = "author's github")]
    pub(crate) owner_url: String,

    pub(crate) language: String,

    /// The topics, joined with `", "`.
    #[serde(rename = "tags")]
    pub(crate) topics: String,
}

impl From<&StarredRepository> for StarredRepositoryDocument {
    fn from(repository: &StarredRepository) -> Self {
        Self {
            name: repository.name().to_owned(),
            url: repository.html_url().to_owned(),
            description: repository.description().unwrap_or_default().to_owned(),
            owner: repository.owner().login().to_owned(),
            owner_url: repository.owner().html_url().to_owned(),
            language: repository.language().unwrap_or_default().to_owned(),
            topics: repository.topics().join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::RepositoryOwner;

    use super::*;

    #[test]
    fn project_repository_with_topics() {
        let repository = StarredRepository::dummy("org-1", "repository-1");

        let document = StarredRepositoryDocument::from(&repository);

        assert_eq!(
            StarredRepositoryDocument {
                name: "repository-1".to_string(),
                url: "https://github.com/org-1/repository-1".to_string(),
                description: "A dummy repository".to_string(),
                owner: "org-1".to_string(),
                owner_url: "https://github.com/org-1".to_string(),
                language: "Rust".to_string(),
                topics: "cli, backup".to_string(),
            },
            document
        );
    }

    #[test]
    fn project_repository_without_optional_fields() {
        let repository = StarredRepository::new(
            "repository-1",
            "https://github.com/org-1/repository-1",
            None,
            None,
            &[],
            RepositoryOwner::new("org-1", "https://github.com/org-1"),
        );

        let document = StarredRepositoryDocument::from(&repository);

        assert_eq!("", document.description);
        assert_eq!("", document.language);
        assert_eq!("", document.topics);
    }

    #[test]
    fn serialize_document_with_backup_keys() {
        let document =
            StarredRepositoryDocument::from(&StarredRepository::dummy("org-1", "repository-1"));

        let yaml = serde_yaml::to_string(&document).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(Some("repository-1"), value["repo name"].as_str());
        assert_eq!(Some("org-1"), value["author"].as_str());
        assert_eq!(Some("https://github.com/org-1"), value["author's github"].as_str());
        assert_eq!(Some("cli, backup"), value["tags"].as_str());
    }
}
