use crate::cache::{Freshness, QueryCache, QueryKey, DIRECTORY_FRESHNESS};
use crate::directory::domain::{Post, User};
use crate::ports::outbound::UserRepository;
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// CachingUserRepository wraps a UserRepository with the query cache.
///
/// Decorator over any UserRepository. It is the process-wide cache
/// service: create it once and hand the same instance to every view.
///
/// | Query | Key | Freshness |
/// |-------|-----|-----------|
/// | directory | `AllUsers` | 5 minutes (configurable) |
/// | single user | `User(id)` | until invalidated |
/// | posts of a user | `PostsByUser(id)` | until invalidated |
///
/// Concurrent fetches of one key share a single call to the inner
/// repository. Failures are returned to every waiter and never stored.
pub struct CachingUserRepository<R: UserRepository> {
    inner: Arc<R>,
    directory: QueryCache<Vec<User>>,
    users: QueryCache<User>,
    posts: QueryCache<Vec<Post>>,
}

impl<R: UserRepository + 'static> CachingUserRepository<R> {
    /// Creates a caching repository with the default directory window
    pub fn new(inner: R) -> Self {
        Self::with_directory_freshness(inner, DIRECTORY_FRESHNESS)
    }

    pub fn with_directory_freshness(inner: R, directory_window: Duration) -> Self {
        Self {
            inner: Arc::new(inner),
            directory: QueryCache::new(Freshness::Window(directory_window)),
            users: QueryCache::new(Freshness::UntilInvalidated),
            posts: QueryCache::new(Freshness::UntilInvalidated),
        }
    }

    /// Access to the wrapped repository
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Returns the current cache size across all queries
    pub fn cache_size(&self) -> usize {
        self.directory.len() + self.users.len() + self.posts.len()
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserRepository for CachingUserRepository<R> {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        let inner = Arc::clone(&self.inner);
        let users = self
            .directory
            .fetch(QueryKey::AllUsers, move || async move {
                inner.fetch_users().await
            })
            .await?;
        Ok(users)
    }

    async fn fetch_user(&self, user_id: u32) -> Result<User> {
        let inner = Arc::clone(&self.inner);
        let user = self
            .users
            .fetch(QueryKey::User(user_id), move || async move {
                inner.fetch_user(user_id).await
            })
            .await?;
        Ok(user)
    }

    async fn fetch_posts(&self, user_id: u32) -> Result<Vec<Post>> {
        let inner = Arc::clone(&self.inner);
        let posts = self
            .posts
            .fetch(QueryKey::PostsByUser(user_id), move || async move {
                inner.fetch_posts(user_id).await
            })
            .await?;
        Ok(posts)
    }

    fn invalidate(&self, key: &QueryKey) -> bool {
        match key {
            QueryKey::AllUsers => self.directory.invalidate(key),
            QueryKey::User(_) => self.users.invalidate(key),
            QueryKey::PostsByUser(_) => self.posts.invalidate(key),
        }
    }
}
