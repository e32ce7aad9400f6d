use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Recoverable validation failure: the add is a no-op and the
    /// caller may retry with corrected input.
    #[error("Invalid date '{0}'. Use the format DD-MM-YYYY")]
    InvalidDate(String),

    /// Fatal storage failure: unreadable store at load, or a failed
    /// whole-file rewrite after an add.
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}
