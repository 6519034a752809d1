use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use user_directory::prelude::*;

/// Mock UserRepository for testing
///
/// Records every call in order (`"users"`, `"user:7"`, `"posts:7"`) so
/// tests can assert on sequencing and on how often the source was hit.
#[derive(Clone, Default)]
pub struct MockUserRepository {
    pub users: Vec<User>,
    pub posts: HashMap<u32, Vec<Post>>,
    pub fail_users: bool,
    pub fail_posts: bool,
    pub delay: Option<Duration>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            ..Default::default()
        }
    }

    pub fn with_posts(mut self, user_id: u32, posts: Vec<Post>) -> Self {
        self.posts.insert(user_id, posts);
        self
    }

    /// Directory and single-user fetches fail
    pub fn with_user_failure(mut self) -> Self {
        self.fail_users = true;
        self
    }

    pub fn with_posts_failure(mut self) -> Self {
        self.fail_posts = true;
        self
    }

    /// Every fetch waits this long before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, call: &str) -> usize {
        self.get_calls().iter().filter(|c| *c == call).count()
    }

    async fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        self.record("users".to_string()).await;
        if self.fail_users {
            anyhow::bail!("Mock user repository failure");
        }
        Ok(self.users.clone())
    }

    async fn fetch_user(&self, user_id: u32) -> Result<User> {
        self.record(format!("user:{}", user_id)).await;
        if self.fail_users {
            anyhow::bail!("Mock user repository failure");
        }
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("API returned status code 404 Not Found"))
    }

    async fn fetch_posts(&self, user_id: u32) -> Result<Vec<Post>> {
        self.record(format!("posts:{}", user_id)).await;
        if self.fail_posts {
            anyhow::bail!("Mock posts failure");
        }
        Ok(self.posts.get(&user_id).cloned().unwrap_or_default())
    }
}
