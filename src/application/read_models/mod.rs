//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that flatten domain data for the list and
//! detail views.

pub mod directory_read_model;
pub mod profile_read_model;
pub mod user_card_view;

pub use directory_read_model::DirectoryReadModel;
pub use profile_read_model::{excerpt, PostPreview, ProfileReadModel, POST_EXCERPT_CHARS};
pub use user_card_view::UserCardView;
