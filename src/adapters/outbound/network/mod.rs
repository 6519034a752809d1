/// Network adapters for the remote directory API
mod caching_user_repository;
mod placeholder_client;

pub use caching_user_repository::CachingUserRepository;
pub use placeholder_client::{PlaceholderUserRepository, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
