mod errors;
pub use self::errors::*;
pub mod font;
pub use self::font::ReceiptFont;
pub mod layout;
pub use self::layout::ReceiptLayout;
pub mod pdf;


use std::path::PathBuf;

use crate::enrollment_db::{EnrollmentDB, Student};
use crate::fs_interaction::{virtual_fs, FSInteraction};

/// Institute specific parts of the receipt text.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptStyle {
    pub institute: String,
    pub currency_symbol: String,
    pub font: ReceiptFont,
}

impl ReceiptStyle {
    pub fn title(&self) -> String {
        format!("{} Receipt", self.institute)
    }
}

impl Default for ReceiptStyle {
    fn default() -> Self {
        Self {
            institute: "GIS Institute".to_string(),
            currency_symbol: "₹".to_string(),
            font: ReceiptFont::builtin(),
        }
    }
}

/// A rendered receipt, as written to the receipt directory.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub student: Student,
    pub layout: ReceiptLayout,
    pub file_name: String,
    pub path: PathBuf,
    pub content: Vec<u8>,
}

/// Renders the payment receipt of the most recent record stored under the exact name.
///
/// The document is written to the receipt directory (replacing an older receipt for the same
/// name) and returned for direct transfer. Fails with NotFound without side effects if no
/// record with that name exists.
pub fn generate_receipt<FS: virtual_fs::FS>(
    enrollment_db: &EnrollmentDB,
    receipt_dir: &FSInteraction<FS>,
    style: &ReceiptStyle,
    name: &str,
) -> Result<Receipt> {
    let student = match enrollment_db.find_latest_by_name(name)? {
        Some(student) => student,
        None => {
            log::warn!("Receipt requested for unknown student '{}'", name);
            return Err(ReceiptError::NotFound {
                name: name.to_string(),
            });
        }
    };

    let layout = ReceiptLayout::for_student(&student, style);
    let content = pdf::render(&layout, &style.font)?;
    let path = receipt_dir.write_receipt(&student.name, &content)?;

    Ok(Receipt {
        file_name: crate::fs_interaction::receipt_file_name(&student.name),
        student,
        layout,
        path,
        content,
    })
}
