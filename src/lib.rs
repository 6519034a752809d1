//! user-directory - browse and inspect a remote user directory
//!
//! This library fetches users and their posts from a JSONPlaceholder-style
//! REST API, caches and coalesces those requests, and derives filtered,
//! sorted views of the directory client-side. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`directory`): Models, name ordering and the pure
//!   filter/sort pipeline
//! - **Cache** (`cache`): Query cache with freshness windows and request
//!   coalescing
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Errors, logging and the debounce primitive
//!
//! # Example
//!
//! ```no_run
//! use user_directory::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // One cache service per process, shared by every view
//! let repository = std::sync::Arc::new(CachingUserRepository::new(
//!     PlaceholderUserRepository::new()?,
//! ));
//!
//! let use_case = BrowseDirectoryUseCase::new(repository, StderrProgressReporter::new());
//! let query = DirectoryQuery::default().with_search_text("ann");
//! let response = use_case.execute(&query).await?;
//!
//! let model = DirectoryReadModel::from_response(&response);
//! println!("{}", TextFormatter::new().format_directory(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cache;
pub mod config;
pub mod directory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::{
        CachingUserRepository, PlaceholderUserRepository,
    };
    pub use crate::application::dto::{
        DirectoryResponse, OutputFormat, PostsOutcome, ProfileResponse,
    };
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::read_models::{
        DirectoryReadModel, PostPreview, ProfileReadModel, UserCardView,
    };
    pub use crate::application::use_cases::{
        BrowseDirectoryUseCase, DirectorySnapshot, ViewUserProfileUseCase,
    };
    pub use crate::cache::{Freshness, QueryCache, QueryKey};
    pub use crate::directory::domain::{
        Address, Company, DirectoryQuery, Geo, Post, Selection, SortDirection, User,
    };
    pub use crate::directory::policies::NameCollation;
    pub use crate::directory::services::{FilterOptions, ViewPipeline};
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, UserRepository, ViewFormatter,
    };
    pub use crate::shared::{Debouncer, FetchError, Result};
}
