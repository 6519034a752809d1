use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between argument errors
/// and failures while talking to the directory API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (fetch failure, config error, output error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// The single failure kind of the query cache.
///
/// Network errors, non-success HTTP statuses and undecodable bodies all
/// collapse into this one error, tagged with the query key that failed.
/// It is `Clone` so one failed load can be handed to every caller that
/// was waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to fetch {key}\nDetails: {details}\n\n💡 Hint: Check your network connection and the API base URL, then retry")]
pub struct FetchError {
    pub key: String,
    pub details: String,
}

impl FetchError {
    pub fn new(key: impl fmt::Display, source: &anyhow::Error) -> Self {
        Self {
            key: key.to_string(),
            details: format!("{:#}", source),
        }
    }
}

/// Application-specific errors outside the fetch path.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Invalid configuration: {field}\nReason: {reason}\n\n💡 Hint: Fix the value in user-directory.config.yml or remove it to use the default")]
    InvalidConfig { field: String, reason: String },

    #[error("Invalid API base URL: {url}\nReason: {reason}\n\n💡 Hint: Use an absolute http:// or https:// URL such as https://jsonplaceholder.typicode.com")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to write output\nDetails: {details}")]
    OutputError { details: String },
}
