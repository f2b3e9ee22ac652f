use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FSInteractionError {
    #[error("Receipt directory path '{path}' is not a directory")]
    NotADirectory { path: String },
    // Catch all for plain IO failures.
    #[error("Error when accessing the FS ({source})")]
    IOError { source: io::Error, kind: io::ErrorKind },
}
pub type Result<T> = std::result::Result<T, FSInteractionError>;

impl From<io::Error> for FSInteractionError {
    fn from(error: io::Error) -> Self {
        Self::IOError {
            kind: error.kind(),
            source: error,
        }
    }
}
