use super::form::FormError;
use crate::enrollment_db::EnrollmentDBError;
use crate::fs_interaction::FSInteractionError;
use crate::receipt::ReceiptError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdmissionError {
    #[error("Invalid admission form ({source})")]
    FormError {
        #[from]
        source: FormError,
    },
    #[error("Enrollment store failure ({source})")]
    EnrollmentDBError {
        #[from]
        source: EnrollmentDBError,
    },
    #[error("Receipt directory failure ({source})")]
    FSInteractionError {
        #[from]
        source: FSInteractionError,
    },
    #[error("{source}")]
    ReceiptError {
        #[from]
        source: ReceiptError,
    },
}
pub type Result<T> = std::result::Result<T, AdmissionError>;

impl AdmissionError {
    /// True if a receipt was requested for a name without any record.
    pub fn is_receipt_not_found(&self) -> bool {
        matches!(
            self,
            Self::ReceiptError {
                source: ReceiptError::NotFound { .. }
            }
        )
    }

    /// True if the caller submitted unusable input (as opposed to a storage failure).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::FormError { .. })
    }
}
