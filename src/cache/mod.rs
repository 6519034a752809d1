/// In-memory query cache with request coalescing
mod query_cache;
mod query_key;

pub use query_cache::{Freshness, QueryCache, DIRECTORY_FRESHNESS};
pub use query_key::QueryKey;
