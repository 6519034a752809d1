use crate::directory::domain::{Post, User};

/// Outcome of the posts fetch of a profile
///
/// A failure is kept apart from an empty list here. Rendering treats both
/// the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum PostsOutcome {
    Loaded(Vec<Post>),
    Failed(String),
}

impl PostsOutcome {
    /// Posts to display; none when the fetch failed
    pub fn posts(&self) -> &[Post] {
        match self {
            PostsOutcome::Loaded(posts) => posts,
            PostsOutcome::Failed(_) => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PostsOutcome::Failed(_))
    }
}

/// ProfileResponse - a user with the outcome of their posts fetch
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileResponse {
    pub user: User,
    pub posts: PostsOutcome,
}
