use crate::ports::outbound::OutputPresenter;
use crate::shared::error::DirectoryError;
use crate::shared::Result;
use std::io::{self, Write};

/// StdoutPresenter adapter for writing rendered views to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", content)
            .and_then(|_| handle.flush())
            .map_err(|e| DirectoryError::OutputError {
                details: e.to_string(),
            })?;
        Ok(())
    }
}
