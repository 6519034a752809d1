use crate::application::dto::DirectoryResponse;
use crate::cache::QueryKey;
use crate::directory::domain::{DirectoryQuery, User};
use crate::directory::services::{FilterOptions, ViewPipeline};
use crate::ports::outbound::{ProgressReporter, UserRepository};
use crate::shared::Result;

/// DirectorySnapshot - one loaded copy of the directory
///
/// Filter choices are computed once per load, so changing filters never
/// recomputes them; reloading the list does.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectorySnapshot {
    users: Vec<User>,
    filter_options: FilterOptions,
}

impl DirectorySnapshot {
    pub fn new(users: Vec<User>) -> Self {
        let filter_options = FilterOptions::from_users(&users);
        Self {
            users,
            filter_options,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn filter_options(&self) -> &FilterOptions {
        &self.filter_options
    }

    /// Applies a query to this snapshot; no I/O
    pub fn view(&self, query: &DirectoryQuery) -> DirectoryResponse {
        DirectoryResponse {
            users: ViewPipeline::derive_view(&self.users, query),
            total: self.users.len(),
            filter_options: self.filter_options.clone(),
            query: query.clone(),
        }
    }
}

/// BrowseDirectoryUseCase - the list view
///
/// Loads the directory through the injected repository (normally the
/// caching one, so repeated loads inside the freshness window are free)
/// and derives filtered views from it.
///
/// # Type Parameters
/// * `REPO` - UserRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct BrowseDirectoryUseCase<REPO, PR> {
    repository: REPO,
    progress_reporter: PR,
}

impl<REPO, PR> BrowseDirectoryUseCase<REPO, PR>
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

    /// Loads the directory and applies `query` to it
    pub async fn execute(&self, query: &DirectoryQuery) -> Result<DirectoryResponse> {
        let snapshot = self.load().await?;
        Ok(snapshot.view(query))
    }

    /// Loads the directory, from cache when fresh
    pub async fn load(&self) -> Result<DirectorySnapshot> {
        self.progress_reporter.report("🔍 Loading users...");

        match self.repository.fetch_users().await {
            Ok(users) => {
                self.progress_reporter
                    .report_completion(&format!("✅ Loaded {} user(s)", users.len()));
                Ok(DirectorySnapshot::new(users))
            }
            Err(e) => {
                self.progress_reporter
                    .report_error("❌ Failed to load users. Use retry to try again.");
                Err(e)
            }
        }
    }

    /// Manual retry: drops the cached directory and loads it again
    pub async fn retry(&self) -> Result<DirectorySnapshot> {
        self.repository.invalidate(&QueryKey::AllUsers);
        self.load().await
    }

    pub fn repository(&self) -> &REPO {
        &self.repository
    }
}
