use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while reading or writing the console: {0}")]
    Io(#[from] std::io::Error),

    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}
