//! Transport independent interface between an admission desk and its presentation host.
//!
//! Each operation answers with a complete response (status, content type and body),
//! so a host only has to deliver it, whether that is an HTTP server or the command line.
use crate::admission::{AdmissionDesk, AdmissionError, AdmissionForm};
use crate::fs_interaction::virtual_fs;

pub const RECEIPT_NOT_FOUND: &str = "Receipt not found";

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    /// Suggested download file name, if the body should be saved rather than shown.
    pub attachment: Option<String>,
}

impl Response {
    fn ok(content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: STATUS_OK,
            content_type,
            body,
            attachment: None,
        }
    }

    fn text(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: message.as_bytes().to_vec(),
            attachment: None,
        }
    }

    fn from_error(error: &AdmissionError) -> Self {
        if error.is_receipt_not_found() {
            Self::text(STATUS_NOT_FOUND, RECEIPT_NOT_FOUND)
        } else if error.is_invalid_input() {
            Self::text(STATUS_BAD_REQUEST, &error.to_string())
        } else {
            log::error!("{}", error);
            Self::text(STATUS_INTERNAL_ERROR, &error.to_string())
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Handles a submitted admission form given as JSON body.
pub fn submit<FS: virtual_fs::FS>(desk: &AdmissionDesk<FS>, body: &[u8]) -> Response {
    match AdmissionForm::from_json(body) {
        Ok(form) => submit_form(desk, &form),
        Err(error) => Response::from_error(&AdmissionError::from(error)),
    }
}

/// Handles an already decoded admission form, answering with the JSON submission summary.
pub fn submit_form<FS: virtual_fs::FS>(desk: &AdmissionDesk<FS>, form: &AdmissionForm) -> Response {
    let submission = match desk.submit(form) {
        Ok(submission) => submission,
        Err(error) => return Response::from_error(&error),
    };

    match serde_json::to_vec(&submission) {
        Ok(body) => Response::ok("application/json", body),
        Err(error) => {
            log::error!("Could not serialize submission: {}", error);
            Response::text(STATUS_INTERNAL_ERROR, &error.to_string())
        }
    }
}

/// Answers with the PDF receipt of the latest record for the name (as attachment),
/// or with 404 "Receipt not found".
pub fn receipt<FS: virtual_fs::FS>(desk: &AdmissionDesk<FS>, name: &str) -> Response {
    match desk.receipt(name) {
        Ok(receipt) => Response {
            attachment: Some(receipt.file_name),
            ..Response::ok("application/pdf", receipt.content)
        },
        Err(error) => Response::from_error(&error),
    }
}

/// Answers with all students as HTML table, newest first.
pub fn students<FS: virtual_fs::FS>(desk: &AdmissionDesk<FS>) -> Response {
    match desk.students_html() {
        Ok(html) => Response::ok("text/html; charset=utf-8", html.into_bytes()),
        Err(error) => Response::from_error(&error),
    }
}
