use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnrollmentDBError {
    #[error("Could not connect to the enrollment database ({source})")]
    DBConnectionError {
        #[from]
        source: diesel::result::ConnectionError,
    },
    #[error("Error During Enrollment Interaction ({source})")]
    GenericSQLError { source: diesel::result::Error },
    #[error("Requested record does not exist")]
    NotFound,
}
pub type Result<T> = std::result::Result<T, EnrollmentDBError>;

impl From<diesel::result::Error> for EnrollmentDBError {
    fn from(error: diesel::result::Error) -> Self {
        match error {
            diesel::result::Error::NotFound => Self::NotFound,
            error => Self::GenericSQLError { source: error },
        }
    }
}
