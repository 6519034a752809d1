/// Domain models of the user directory
mod post;
mod query;
mod user;

#[cfg(test)]
pub(crate) use user::fixtures;

pub use post::Post;
pub use query::{DirectoryQuery, Selection, SortDirection};
pub use user::{Address, Company, Geo, User};
