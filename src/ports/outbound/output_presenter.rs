use crate::shared::Result;

/// OutputPresenter port for the rendered match, listing or detail text
///
/// Implemented for stdout and for an `--output` file. Progress and
/// warnings never go through here; they use `ProgressReporter` on stderr.
pub trait OutputPresenter {
    /// Writes the rendered text in full
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn present(&self, content: &str) -> Result<()>;
}
