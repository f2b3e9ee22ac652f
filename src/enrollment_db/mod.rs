// Database schema - must be kept up to date manually
mod entity;
pub use self::entity::*;
mod errors;
pub use self::errors::*;
mod schema;


use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sqlite::SqliteConnection;

use self::schema::students;

const CREATE_STUDENTS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL,
        course TEXT NOT NULL,
        fees_total INTEGER NOT NULL,
        fees_paid INTEGER NOT NULL,
        date TEXT NOT NULL
    )";

/// Handle on the SQLite file holding all student records.
///
/// Records are append only: there is no way to update or delete an entry once it is created.
/// The handle owns exactly one connection, callers serialize their requests on it.
pub struct EnrollmentDB {
    conn: SqliteConnection,
}

impl EnrollmentDB {
    /// Opens the enrollment db file located at the given path (":memory:" for a transient db).
    /// The students table is created if it is not present yet, existing tables are used as is.
    pub fn open(path: &str) -> Result<EnrollmentDB> {
        let result = EnrollmentDB {
            conn: SqliteConnection::establish(path)?,
        };

        result.default_db_settings()?;
        result.create_tables()?;
        log::info!("Opened enrollment database at '{}'", path);

        Ok(result)
    }

    /// Stores a new student record stamped with today's (local) date.
    pub fn create_student(&self, new_student: &NewStudent) -> Result<Student> {
        let today = chrono::Local::now().date_naive();
        self.create_student_on(new_student, &today)
    }

    /// Stores a new student record with the given creation date.
    /// Returns the record as persisted, including its newly assigned id.
    pub fn create_student_on(&self, new_student: &NewStudent, date: &NaiveDate) -> Result<Student> {
        let result = self.conn.transaction::<_, EnrollmentDBError, _>(|| {
            diesel::insert_into(students::table)
                .values(&student::InsertFull::from_new_student(new_student, date))
                .execute(&self.conn)?;

            // Single connection, thus the newest row is the one we just inserted.
            let student = students::table
                .order(students::id.desc())
                .first::<Student>(&self.conn)?;
            Ok(student)
        })?;

        log::info!(
            "Created student record {} for '{}' ({})",
            result.id,
            result.name,
            result.course
        );
        Ok(result)
    }

    /// Lists all student records, newest first.
    pub fn list_students(&self) -> Result<Vec<Student>> {
        let result = students::table
            .order(students::id.desc())
            .load::<Student>(&self.conn)?;

        log::debug!("Loaded {} student records", result.len());
        Ok(result)
    }

    /// Returns the most recent record whose name matches exactly (case sensitive).
    pub fn find_latest_by_name(&self, name: &str) -> Result<Option<Student>> {
        let result = students::table
            .filter(students::name.eq(name))
            .order(students::id.desc())
            .first::<Student>(&self.conn)
            .optional()?;

        log::debug!("Latest record lookup for '{}': {:?}", name, result.as_ref().map(|s| s.id));
        Ok(result)
    }

    pub fn count_students(&self) -> Result<i64> {
        Ok(students::table.count().get_result::<i64>(&self.conn)?)
    }

    /// Compacts the database file, can save space after many inserts.
    pub fn optimize(&self) -> Result<()> {
        sql_query("VACUUM").execute(&self.conn)?;
        log::info!("Optimized enrollment database");

        Ok(())
    }

    /// Flushes all pending writes into the main database file and closes the connection.
    pub fn close(self) -> Result<()> {
        sql_query("PRAGMA wal_checkpoint(TRUNCATE)").execute(&self.conn)?;
        log::info!("Closed enrollment database");

        Ok(())
    }

    fn create_tables(&self) -> Result<()> {
        sql_query(CREATE_STUDENTS_TABLE).execute(&self.conn)?;

        Ok(())
    }

    fn default_db_settings(&self) -> Result<()> {
        sql_query("PRAGMA journal_mode = WAL").execute(&self.conn)?;

        Ok(())
    }
}
