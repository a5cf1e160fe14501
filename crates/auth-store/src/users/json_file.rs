//! JSON flat-file implementation of UserStore
//!
//! The whole store lives in one JSON object keyed by username. Every mutation
//! rewrites the file through a temporary sibling and an atomic rename, and all
//! mutations are serialized by a single async write lock.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use auth_core::entities::{UserMap, UserRecord};
use auth_core::traits::{check_unique, RepoResult, UserStore};

use crate::error::{map_io_error, map_json_error};

/// Credential store backed by a single JSON file
#[derive(Debug)]
pub struct JsonFileUserStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileUserStore {
    /// Create a store for the file at `path`. The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read_map(&self) -> RepoResult<UserMap> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(UserMap::new()),
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|e| map_json_error(&self.path, &e))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(UserMap::new()),
            Err(e) => Err(map_io_error("read", &self.path, &e)),
        }
    }

    /// Serialize fully, write and sync a temporary sibling, then rename over
    /// the target. A failure at any step leaves the previous file untouched.
    async fn write_map(&self, users: &UserMap) -> RepoResult<()> {
        let json = serde_json::to_vec_pretty(users).map_err(|e| map_json_error(&self.path, &e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| map_io_error("create directory", parent, &e))?;
        }

        let tmp_path = self.tmp_path();
        if let Err(e) = write_synced(&tmp_path, &json).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(map_io_error("write", &tmp_path, &e));
        }

        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(map_io_error("replace", &self.path, &e));
        }

        debug!(path = %self.path.display(), users = users.len(), "User store written");
        Ok(())
    }
}

/// Write `bytes` to a fresh file at `path` and flush it to disk
async fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}

#[async_trait]
impl UserStore for JsonFileUserStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> RepoResult<UserMap> {
        self.read_map().await
    }

    #[instrument(skip(self, users), fields(path = %self.path.display()))]
    async fn save(&self, users: &UserMap) -> RepoResult<()> {
        let _guard = self.write_lock.lock().await;
        self.write_map(users).await
    }

    #[instrument(skip(self))]
    async fn get(&self, username: &str) -> RepoResult<Option<UserRecord>> {
        let mut users = self.read_map().await?;
        Ok(users.remove(username))
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn put(&self, user: UserRecord) -> RepoResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.read_map().await?;
        users.insert(user.username.clone(), user);
        self.write_map(&users).await
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn insert_new(&self, user: UserRecord) -> RepoResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.read_map().await?;
        check_unique(&users, &user.username, &user.email)?;
        users.insert(user.username.clone(), user);
        self.write_map(&users).await
    }
}
