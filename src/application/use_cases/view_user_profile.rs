use crate::application::dto::{PostsOutcome, ProfileResponse};
use crate::cache::QueryKey;
use crate::ports::outbound::{ProgressReporter, UserRepository};
use crate::shared::Result;
use tracing::warn;

/// ViewUserProfileUseCase - the detail view
///
/// Loads a user, then that user's posts. The posts fetch is only issued
/// once the user fetch succeeded; if it fails, posts are never requested.
/// A posts failure never touches the user entry and is returned as
/// [`PostsOutcome::Failed`] instead of an error.
pub struct ViewUserProfileUseCase<REPO, PR> {
    repository: REPO,
    progress_reporter: PR,
}

impl<REPO, PR> ViewUserProfileUseCase<REPO, PR>
where
    REPO: UserRepository,
    PR: ProgressReporter,
{
    pub fn new(repository: REPO, progress_reporter: PR) -> Self {
        Self {
            repository,
            progress_reporter,
        }
    }

    pub async fn execute(&self, user_id: u32) -> Result<ProfileResponse> {
        self.progress_reporter
            .report(&format!("🔍 Loading user #{}...", user_id));

        let user = match self.repository.fetch_user(user_id).await {
            Ok(user) => user,
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "❌ Failed to load user #{}. Use retry to try again.",
                    user_id
                ));
                return Err(e);
            }
        };

        self.progress_reporter
            .report(&format!("📝 Loading posts by {}...", user.name));

        let posts = match self.repository.fetch_posts(user.id).await {
            Ok(posts) => PostsOutcome::Loaded(posts),
            Err(e) => {
                warn!(user_id = user.id, error = %format!("{:#}", e), "posts unavailable, showing empty list");
                PostsOutcome::Failed(format!("{:#}", e))
            }
        };

        self.progress_reporter
            .report_completion(&format!("✅ Loaded profile of {}", user.name));

        Ok(ProfileResponse { user, posts })
    }

    /// Manual retry: drops the cached user and posts, then loads again
    pub async fn retry(&self, user_id: u32) -> Result<ProfileResponse> {
        self.repository.invalidate(&QueryKey::User(user_id));
        self.repository.invalidate(&QueryKey::PostsByUser(user_id));
        self.execute(user_id).await
    }

    pub fn repository(&self) -> &REPO {
        &self.repository
    }
}
