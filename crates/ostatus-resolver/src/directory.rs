//! Lookup of local users, groups and lists

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub id: i64,
    pub nickname: String,
}

/// A tagged list of profiles owned by a local user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRecord {
    pub id: i64,
    pub tagger_id: i64,
    pub tag: String,
}

#[derive(Debug)]
pub enum DirectoryError {
    Backend(Box<dyn std::error::Error + Send + Sync>),
    Io(Box<std::io::Error>),
    Seed(String),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::Backend(err) => write!(f, "Directory backend error: {}", err),
            DirectoryError::Io(err) => write!(f, "IO error: {}", err),
            DirectoryError::Seed(msg) => write!(f, "Invalid directory seed: {}", msg),
        }
    }
}

impl std::error::Error for DirectoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectoryError::Backend(err) => Some(err.as_ref()),
            DirectoryError::Io(err) => Some(err.as_ref()),
            DirectoryError::Seed(_) => None,
        }
    }
}

impl From<std::io::Error> for DirectoryError {
    fn from(err: std::io::Error) -> Self {
        DirectoryError::Io(Box::new(err))
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(err: serde_json::Error) -> Self {
        DirectoryError::Seed(err.to_string())
    }
}

/// Local entity lookup used to build canonical URLs
#[async_trait]
pub trait LocalDirectory: Send + Sync {
    async fn find_user_by_nickname(
        &self,
        nickname: &str,
    ) -> Result<Option<UserRecord>, DirectoryError>;

    async fn find_group_by_nickname(
        &self,
        nickname: &str,
    ) -> Result<Option<GroupRecord>, DirectoryError>;

    async fn find_list_by_tagger_and_name(
        &self,
        tagger_id: i64,
        name: &str,
    ) -> Result<Option<ListRecord>, DirectoryError>;
}

/// Seed file layout for [`InMemoryDirectory`]
#[derive(Debug, Default, Deserialize)]
struct DirectorySeed {
    #[serde(default)]
    users: Vec<UserRecord>,
    #[serde(default)]
    groups: Vec<GroupRecord>,
    #[serde(default)]
    lists: Vec<ListRecord>,
}

/// Directory held entirely in memory, for development and tests
#[derive(Debug, Default, Clone)]
pub struct InMemoryDirectory {
    users: HashMap<String, UserRecord>,
    groups: HashMap<String, GroupRecord>,
    lists: HashMap<(i64, String), ListRecord>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, id: i64, nickname: &str) -> Self {
        self.users.insert(
            nickname.to_string(),
            UserRecord {
                id,
                nickname: nickname.to_string(),
            },
        );
        self
    }

    pub fn with_group(mut self, id: i64, nickname: &str) -> Self {
        self.groups.insert(
            nickname.to_string(),
            GroupRecord {
                id,
                nickname: nickname.to_string(),
            },
        );
        self
    }

    pub fn with_list(mut self, id: i64, tagger_id: i64, tag: &str) -> Self {
        self.lists.insert(
            (tagger_id, tag.to_string()),
            ListRecord {
                id,
                tagger_id,
                tag: tag.to_string(),
            },
        );
        self
    }

    /// Parse a JSON seed: `{"users": [...], "groups": [...], "lists": [...]}`
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let seed: DirectorySeed = serde_json::from_str(json)?;
        let mut dir = Self::new();
        for user in seed.users {
            dir = dir.with_user(user.id, &user.nickname);
        }
        for group in seed.groups {
            dir = dir.with_group(group.id, &group.nickname);
        }
        for list in seed.lists {
            dir = dir.with_list(list.id, list.tagger_id, &list.tag);
        }
        Ok(dir)
    }

    pub async fn load(path: &Path) -> Result<Self, DirectoryError> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.users.len() + self.groups.len() + self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl LocalDirectory for InMemoryDirectory {
    async fn find_user_by_nickname(
        &self,
        nickname: &str,
    ) -> Result<Option<UserRecord>, DirectoryError> {
        Ok(self.users.get(nickname).cloned())
    }

    async fn find_group_by_nickname(
        &self,
        nickname: &str,
    ) -> Result<Option<GroupRecord>, DirectoryError> {
        Ok(self.groups.get(nickname).cloned())
    }

    async fn find_list_by_tagger_and_name(
        &self,
        tagger_id: i64,
        name: &str,
    ) -> Result<Option<ListRecord>, DirectoryError> {
        Ok(self.lists.get(&(tagger_id, name.to_string())).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_builder_lookups() {
        let dir = InMemoryDirectory::new()
            .with_user(42, "alice")
            .with_group(7, "devs")
            .with_list(3, 42, "friends");

        assert_eq!(
            dir.find_user_by_nickname("alice").await.unwrap().unwrap().id,
            42
        );
        assert!(dir.find_user_by_nickname("bob").await.unwrap().is_none());
        assert_eq!(
            dir.find_group_by_nickname("devs").await.unwrap().unwrap().id,
            7
        );
        assert_eq!(
            dir.find_list_by_tagger_and_name(42, "friends")
                .await
                .unwrap()
                .unwrap()
                .id,
            3
        );
        assert!(dir
            .find_list_by_tagger_and_name(43, "friends")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_load_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "users": [{{"id": 42, "nickname": "alice"}}],
                "groups": [{{"id": 7, "nickname": "devs"}}],
                "lists": [{{"id": 3, "tagger_id": 42, "tag": "friends"}}]
            }}"#
        )
        .unwrap();

        let dir = InMemoryDirectory::load(file.path()).await.unwrap();
        assert_eq!(dir.len(), 3);
        assert!(dir.find_group_by_nickname("devs").await.unwrap().is_some());
    }

    #[test]
    fn test_seed_missing_sections() {
        let dir = InMemoryDirectory::from_json(r#"{"users": []}"#).unwrap();
        assert!(dir.is_empty());
    }

    #[test]
    fn test_invalid_seed() {
        let err = InMemoryDirectory::from_json("[1, 2").unwrap_err();
        assert!(matches!(err, DirectoryError::Seed(_)));
    }

    #[tokio::test]
    async fn test_missing_seed_file() {
        let err = InMemoryDirectory::load(Path::new("/nonexistent/directory.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::Io(_)));
    }
}
