/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod directory_response;
mod output_format;
mod profile_response;

pub use directory_response::DirectoryResponse;
pub use output_format::OutputFormat;
pub use profile_response::{PostsOutcome, ProfileResponse};
