use crate::enrollment_db::EnrollmentDBError;
use crate::fs_interaction::FSInteractionError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("No receipt available for '{name}'")]
    NotFound { name: String },
    #[error("Could not load the student record ({source})")]
    EnrollmentDBError {
        #[from]
        source: EnrollmentDBError,
    },
    #[error("Could not store the receipt ({source})")]
    FSInteractionError {
        #[from]
        source: FSInteractionError,
    },
    #[error("Could not render the receipt document ({source})")]
    PDFError {
        #[from]
        source: lopdf::Error,
    },
    #[error("Could not read the receipt font '{name}' ({source})")]
    FontError {
        name: String,
        source: ttf_parser::FaceParsingError,
    },
    #[error("Could not serialize the receipt document ({source})")]
    IOError {
        #[from]
        source: io::Error,
    },
}
pub type Result<T> = std::result::Result<T, ReceiptError>;
