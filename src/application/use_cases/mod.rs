/// Use cases module containing application business logic orchestration
mod browse_directory;
mod view_user_profile;

pub use browse_directory::{BrowseDirectoryUseCase, DirectorySnapshot};
pub use view_user_profile::ViewUserProfileUseCase;
