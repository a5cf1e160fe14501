//! In-memory implementation of UserStore

use async_trait::async_trait;
use parking_lot::RwLock;

use auth_core::entities::{UserMap, UserRecord};
use auth_core::traits::{check_unique, RepoResult, UserStore};

/// Credential store kept entirely in memory
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<UserMap>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn load(&self) -> RepoResult<UserMap> {
        Ok(self.users.read().clone())
    }

    async fn save(&self, users: &UserMap) -> RepoResult<()> {
        *self.users.write() = users.clone();
        Ok(())
    }

    async fn get(&self, username: &str) -> RepoResult<Option<UserRecord>> {
        Ok(self.users.read().get(username).cloned())
    }

    async fn put(&self, user: UserRecord) -> RepoResult<()> {
        self.users.write().insert(user.username.clone(), user);
        Ok(())
    }

    async fn insert_new(&self, user: UserRecord) -> RepoResult<()> {
        let mut users = self.users.write();
        check_unique(&users, &user.username, &user.email)?;
        users.insert(user.username.clone(), user);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<UserRecord>> {
        Ok(self
            .users
            .read()
            .values()
            .find(|user| user.email == email)
            .cloned())
    }
}
