//! Read model of the detail view

use crate::application::dto::ProfileResponse;
use crate::directory::domain::{Company, Post};
use serde::Serialize;

/// Post bodies longer than this many characters are cut in previews
pub const POST_EXCERPT_CHARS: usize = 140;

const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostPreview {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
}

impl From<&Post> for PostPreview {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            excerpt: excerpt(&post.body),
        }
    }
}

/// Everything the detail view renders
///
/// `posts` is empty both when the user has no posts and when they could
/// not be loaded; both render the same empty state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileReadModel {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub company: Company,
    pub address: String,
    pub posts: Vec<PostPreview>,
}

impl ProfileReadModel {
    pub fn from_response(response: &ProfileResponse) -> Self {
        let user = &response.user;
        Self {
            id: user.id,
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            website: user.website.clone(),
            company: user.company.clone(),
            address: user.address.single_line(),
            posts: response.posts.posts().iter().map(PostPreview::from).collect(),
        }
    }
}

/// Cuts `body` to [`POST_EXCERPT_CHARS`] characters plus an ellipsis.
/// Counts chars, not bytes, so multi-byte text is never split.
pub fn excerpt(body: &str) -> String {
    match body.char_indices().nth(POST_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}{}", &body[..cut], ELLIPSIS),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::PostsOutcome;
    use crate::directory::domain::fixtures::user;

    fn post(id: u32, body: &str) -> Post {
        Post {
            id,
            user_id: 1,
            title: format!("post {}", id),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_short_body_is_kept() {
        assert_eq!(excerpt("quia et suscipit"), "quia et suscipit");
        assert_eq!(excerpt(""), "");
    }

    #[test]
    fn test_body_at_limit_is_kept() {
        let body = "a".repeat(POST_EXCERPT_CHARS);
        assert_eq!(excerpt(&body), body);
    }

    #[test]
    fn test_long_body_is_truncated_with_ellipsis() {
        let body = "b".repeat(POST_EXCERPT_CHARS + 1);
        let cut = excerpt(&body);
        assert_eq!(cut, format!("{}...", "b".repeat(POST_EXCERPT_CHARS)));
    }

    #[test]
    fn test_truncation_counts_characters() {
        let body = "é".repeat(200);
        let cut = excerpt(&body);
        assert_eq!(cut.chars().count(), POST_EXCERPT_CHARS + ELLIPSIS.len());
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_failed_and_empty_posts_render_alike() {
        let user = user(1, "Leanne Graham", "a@b.c", "Gwenborough", "Acme");
        let failed = ProfileReadModel::from_response(&ProfileResponse {
            user: user.clone(),
            posts: PostsOutcome::Failed("timeout".to_string()),
        });
        let empty = ProfileReadModel::from_response(&ProfileResponse {
            user,
            posts: PostsOutcome::Loaded(vec![]),
        });
        assert_eq!(failed, empty);
    }

    #[test]
    fn test_from_response_builds_previews() {
        let model = ProfileReadModel::from_response(&ProfileResponse {
            user: user(1, "Leanne Graham", "a@b.c", "Gwenborough", "Acme"),
            posts: PostsOutcome::Loaded(vec![post(1, "short"), post(2, &"x".repeat(300))]),
        });
        assert_eq!(model.posts.len(), 2);
        assert_eq!(model.posts[0].excerpt, "short");
        assert!(model.posts[1].excerpt.ends_with("..."));
        assert_eq!(model.address, "Kulas Light, Apt. 556, Gwenborough 92998-3874");
    }
}
