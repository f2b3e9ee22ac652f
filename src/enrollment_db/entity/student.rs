use super::schema::students;
use serde::Serialize;

/// One admission/payment entry as stored in the students table.
#[derive(Debug, Queryable, Serialize, Clone, PartialEq)]
pub struct Student {
    pub id: i64,

    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,

    pub fees_total: i64,
    pub fees_paid: i64,
    pub date: chrono::NaiveDate,
}

/// Validated field set of a student that is not yet stored.
/// The id and date are assigned by the database on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,

    pub fees_total: i64,
    pub fees_paid: i64,
}

#[derive(Insertable)]
#[table_name = "students"]
pub struct InsertFull<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub course: &'a str,

    pub fees_total: i64,
    pub fees_paid: i64,
    pub date: &'a chrono::NaiveDate,
}

impl<'a> InsertFull<'a> {
    pub fn from_new_student(student: &'a NewStudent, date: &'a chrono::NaiveDate) -> Self {
        Self {
            name: &student.name,
            email: &student.email,
            phone: &student.phone,
            course: &student.course,

            fees_total: student.fees_total,
            fees_paid: student.fees_paid,
            date,
        }
    }
}
