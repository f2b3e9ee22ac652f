use std::path::PathBuf;

use crate::receipt::{ReceiptFont, ReceiptStyle};

pub const DEFAULT_DB_PATH: &str = "gis_institute.db";
pub const DEFAULT_RECEIPT_DIR: &str = ".";

/// Everything needed to open an admission desk.
/// Defaults reproduce a desk that keeps its files in the working directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Path of the SQLite file (":memory:" for a transient store).
    pub db_path: String,
    /// Directory receipt documents are written to.
    pub receipt_dir: PathBuf,
    pub receipt_style: ReceiptStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            receipt_dir: PathBuf::from(DEFAULT_RECEIPT_DIR),
            receipt_style: ReceiptStyle::default(),
        }
    }
}

impl Settings {
    pub fn with_db_path<S: Into<String>>(mut self, db_path: S) -> Self {
        self.db_path = db_path.into();
        self
    }

    pub fn with_receipt_dir<P: Into<PathBuf>>(mut self, receipt_dir: P) -> Self {
        self.receipt_dir = receipt_dir.into();
        self
    }

    pub fn with_institute<S: Into<String>>(mut self, institute: S) -> Self {
        self.receipt_style.institute = institute.into();
        self
    }

    pub fn with_currency_symbol<S: Into<String>>(mut self, currency_symbol: S) -> Self {
        self.receipt_style.currency_symbol = currency_symbol.into();
        self
    }

    pub fn with_receipt_font(mut self, font: ReceiptFont) -> Self {
        self.receipt_style.font = font;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_files_in_working_directory() {
        let settings = Settings::default();

        assert_eq!(settings.db_path, "gis_institute.db");
        assert_eq!(settings.receipt_dir, PathBuf::from("."));
        assert_eq!(settings.receipt_style.title(), "GIS Institute Receipt");
        assert_eq!(settings.receipt_style.currency_symbol, "₹");
        assert_eq!(settings.receipt_style.font, ReceiptFont::builtin());
    }

    #[test]
    fn builders_override_single_values() {
        let settings = Settings::default()
            .with_db_path(":memory:")
            .with_receipt_dir("out")
            .with_institute("Survey School")
            .with_currency_symbol("$")
            .with_receipt_font(
                ReceiptFont::from_program("Copy".to_string(), ReceiptFont::builtin().program().to_vec())
                    .unwrap(),
            );

        assert_eq!(settings.db_path, ":memory:");
        assert_eq!(settings.receipt_dir, PathBuf::from("out"));
        assert_eq!(settings.receipt_style.title(), "Survey School Receipt");
        assert_eq!(settings.receipt_style.currency_symbol, "$");
        assert_eq!(settings.receipt_style.font.name(), "Copy");
    }
}
