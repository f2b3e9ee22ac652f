use super::schema;

// Basic entity mappings on database tables (Should be mostly 1:1 copies of our schema and helpers).
pub mod student;
pub use self::student::{NewStudent, Student};
