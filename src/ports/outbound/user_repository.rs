use crate::cache::QueryKey;
use crate::directory::domain::{Post, User};
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// UserRepository port for reading the remote user directory
///
/// This port abstracts the read-only REST API the directory is served
/// from. Implementations must be `Send + Sync` so a single repository can
/// be shared by every view.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetches the whole directory in API order
    ///
    /// # Errors
    /// Returns an error if the request fails, the API answers with a
    /// non-success status, or the body cannot be decoded.
    async fn fetch_users(&self) -> Result<Vec<User>>;

    /// Fetches a single user
    ///
    /// An unknown id is reported as an error like any other failure.
    async fn fetch_user(&self, user_id: u32) -> Result<User>;

    /// Fetches the posts written by a user, possibly none
    async fn fetch_posts(&self, user_id: u32) -> Result<Vec<Post>>;

    /// Forgets any stored result for `key` so the next fetch goes to the
    /// source again. Returns whether something was dropped.
    ///
    /// Repositories without storage have nothing to forget.
    fn invalidate(&self, _key: &QueryKey) -> bool {
        false
    }
}

/// Lets one repository instance, typically the caching one, be shared by
/// several use cases.
#[async_trait]
impl<R: UserRepository + ?Sized> UserRepository for Arc<R> {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        (**self).fetch_users().await
    }

    async fn fetch_user(&self, user_id: u32) -> Result<User> {
        (**self).fetch_user(user_id).await
    }

    async fn fetch_posts(&self, user_id: u32) -> Result<Vec<Post>> {
        (**self).fetch_posts(user_id).await
    }

    fn invalidate(&self, key: &QueryKey) -> bool {
        (**self).invalidate(key)
    }
}
