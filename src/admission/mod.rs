mod errors;
pub use self::errors::*;
pub mod form;
pub use self::form::{AdmissionForm, FeeInput, FormError};
pub mod listing;


use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::enrollment_db::{EnrollmentDB, Student};
use crate::fs_interaction::{virtual_fs, FSInteraction};
use crate::receipt::{self, Receipt};
use crate::settings::Settings;

pub const SUBMIT_MESSAGE: &str = "Student added successfully!";

/// Answer to a successful form submission.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Submission {
    pub message: String,
    pub name: String,
    pub course: String,
    pub fees_paid: i64,
    pub date: NaiveDate,
}

impl Submission {
    fn for_student(student: &Student) -> Self {
        Self {
            message: SUBMIT_MESSAGE.to_string(),
            name: student.name.clone(),
            course: student.course.clone(),
            fees_paid: student.fees_paid,
            date: student.date,
        }
    }
}

/// Overview of what a desk currently holds.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DeskStatus {
    pub db_path: String,
    pub receipt_dir: PathBuf,
    pub students: i64,
    pub receipts: Vec<PathBuf>,
}

/// The context every admission operation runs against.
///
/// Owns the enrollment store, the receipt directory and the settings they were opened with.
/// Created once by the process entry point and closed explicitly on exit.
pub struct AdmissionDesk<FS: virtual_fs::FS> {
    enrollment_db: EnrollmentDB,
    receipt_dir: FSInteraction<FS>,
    settings: Settings,
}
pub type DefaultAdmissionDesk = AdmissionDesk<virtual_fs::WrapperFS>;

impl<FS: virtual_fs::FS> AdmissionDesk<FS> {
    /// Same as open_with_fs, but uses the default FS abstraction (OS native calls).
    pub fn open(settings: Settings) -> Result<Self> {
        Self::open_with_fs(settings, FS::default())
    }

    /// Opens the enrollment store and the receipt directory named in the settings.
    /// Both are created if they do not exist yet.
    pub fn open_with_fs(settings: Settings, fs: FS) -> Result<Self> {
        let receipt_dir = FSInteraction::open_with_fs(Path::new(&settings.receipt_dir), fs)?;
        let enrollment_db = EnrollmentDB::open(&settings.db_path)?;

        Ok(Self {
            enrollment_db,
            receipt_dir,
            settings,
        })
    }

    pub fn receipt_dir(&self) -> &FSInteraction<FS> {
        &self.receipt_dir
    }

    /// Validates the form and stores it as a new student record.
    /// Nothing is stored if the form is invalid.
    pub fn submit(&self, form: &AdmissionForm) -> Result<Submission> {
        let new_student = form.validate()?;
        let student = self.enrollment_db.create_student(&new_student)?;

        Ok(Submission::for_student(&student))
    }

    /// Renders (and stores) the receipt of the latest record for the given name.
    pub fn receipt(&self, name: &str) -> Result<Receipt> {
        Ok(receipt::generate_receipt(
            &self.enrollment_db,
            &self.receipt_dir,
            &self.settings.receipt_style,
            name,
        )?)
    }

    /// All student records, newest first.
    pub fn students(&self) -> Result<Vec<Student>> {
        Ok(self.enrollment_db.list_students()?)
    }

    pub fn students_html(&self) -> Result<String> {
        Ok(listing::render_students_html(&self.students()?))
    }

    /// Number of stored records and the receipt files present in the receipt directory.
    pub fn status(&self) -> Result<DeskStatus> {
        Ok(DeskStatus {
            db_path: self.settings.db_path.clone(),
            receipt_dir: self.receipt_dir.root_path().to_path_buf(),
            students: self.enrollment_db.count_students()?,
            receipts: self.receipt_dir.list_receipts()?,
        })
    }

    pub fn optimize(&self) -> Result<()> {
        Ok(self.enrollment_db.optimize()?)
    }

    /// Flushes the enrollment store and releases all resources.
    pub fn close(self) -> Result<()> {
        Ok(self.enrollment_db.close()?)
    }
}
