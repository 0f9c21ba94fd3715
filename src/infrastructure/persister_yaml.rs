use std::path::{Path, PathBuf};

use anyhow::Context;
use log::info;

use crate::{StarredRepository, StarredRepositoryDocument, StarsPersister, StdResult};

/// The name of the backup document.
pub const STARS_FILE_NAME: &str = "stars.yaml";

/// A persister that writes starred repositories to a YAML document.
pub struct YamlStarsPersister {
    directory: Option<PathBuf>,
}

impl YamlStarsPersister {
    /// Creates a new `YamlStarsPersister` writing into the given directory, or the working directory if `None`.
    pub fn new(directory: Option<&Path>) -> Self {
        Self {
            directory: directory.map(Path::to_path_buf),
        }
    }

    /// Retrieves the path of the backup document.
    pub fn file_path(&self) -> PathBuf {
        match &self.directory {
            Some(directory) => directory.join(STARS_FILE_NAME),
            None => PathBuf::from(STARS_FILE_NAME),
        }
    }
}

#[async_trait::async_trait]
impl StarsPersister for YamlStarsPersister {
    async fn persist(&self, data: &[StarredRepository]) -> StdResult<u32> {
        let documents = data
            .iter()
            .map(StarredRepositoryDocument::from)
            .collect::<Vec<_>>();
        let yaml = serde_yaml::to_string(&documents)
            .with_context(|| "Failed to serialize starred repositories")?;

        if let Some(directory) = &self.directory {
            tokio::fs::create_dir_all(directory)
                .await
                .with_context(|| format!("Failed to create directory {}", directory.display()))?;
        }
        let file_path = self.file_path();
        tokio::fs::write(&file_path, yaml)
            .await
            .with_context(|| format!("Failed to write {}", file_path.display()))?;
        info!(
            "Persisted {} starred repositories to {}",
            documents.len(),
            file_path.display()
        );

        Ok(documents.len() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn persist_creates_missing_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let directory = temp_dir.path().join("backup");
        let persister = YamlStarsPersister::new(Some(&directory));

        let total_persisted = persister
            .persist(&[
                StarredRepository::dummy("org-1", "repository-1"),
                StarredRepository::dummy("org-2", "repository-2"),
            ])
            .await
            .unwrap();

        assert_eq!(2, total_persisted);
        let content = std::fs::read_to_string(directory.join(STARS_FILE_NAME)).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&content).unwrap();
        let documents = value.as_sequence().unwrap();
        assert_eq!(2, documents.len());
        assert_eq!(Some("repository-2"), documents[1]["repo name"].as_str());
        assert_eq!(Some("org-2"), documents[1]["author"].as_str());
    }

    #[tokio::test]
    async fn persist_overwrites_previous_backup() {
        let temp_dir = tempfile::tempdir().unwrap();
        let persister = YamlStarsPersister::new(Some(temp_dir.path()));
        persister
            .persist(&[StarredRepository::dummy("org-1", "repository-1")])
            .await
            .unwrap();

        let total_persisted = persister.persist(&[]).await.unwrap();

        assert_eq!(0, total_persisted);
        let content = std::fs::read_to_string(persister.file_path()).unwrap();
        assert_eq!("[]", content.trim());
    }

    #[test]
    fn file_path_defaults_to_working_directory() {
        let persister = YamlStarsPersister::new(None);

        assert_eq!(PathBuf::from("stars.yaml"), persister.file_path());
    }
}
