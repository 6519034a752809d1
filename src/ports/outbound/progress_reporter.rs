/// ProgressReporter port for reporting progress to the operator
///
/// This port abstracts user-facing status output (e.g., to stderr) so it
/// never mixes with the rendered views on stdout.
pub trait ProgressReporter {
    /// Reports that a long-running step started or progressed
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports an error or warning message
    ///
    /// # Arguments
    /// * `message` - The error/warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}
