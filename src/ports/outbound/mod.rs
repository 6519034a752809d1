/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (remote API, console, ...).
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod user_repository;

pub use formatter::ViewFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use user_repository::UserRepository;
