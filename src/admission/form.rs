use serde::Deserialize;
use thiserror::Error;

use crate::enrollment_db::NewStudent;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Missing form field '{field}'")]
    MissingField { field: &'static str },
    #[error("Form field '{field}' must be a whole number, got '{value}'")]
    InvalidFee { field: &'static str, value: String },
    #[error("Submitted form is not readable ({source})")]
    MalformedBody {
        #[from]
        source: serde_json::Error,
    },
}

/// Fee amount as submitted: either a JSON number or the text of a form input.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FeeInput {
    Number(i64),
    Text(String),
}

impl FeeInput {
    fn parse(&self, field: &'static str) -> Result<i64, FormError> {
        match self {
            FeeInput::Number(amount) => Ok(*amount),
            FeeInput::Text(text) => text.trim().parse().map_err(|_| FormError::InvalidFee {
                field,
                value: text.clone(),
            }),
        }
    }
}

/// Raw admission form as collected by the host, nothing is checked yet.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AdmissionForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub course: Option<String>,
    pub fees_total: Option<FeeInput>,
    pub fees_paid: Option<FeeInput>,
}

impl AdmissionForm {
    pub fn from_json(body: &[u8]) -> Result<AdmissionForm, FormError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Checks that every field is present and that both fees are whole numbers.
    /// Text is taken as is and fees are not checked against each other.
    pub fn validate(&self) -> Result<NewStudent, FormError> {
        Ok(NewStudent {
            name: required(&self.name, "name")?.clone(),
            email: required(&self.email, "email")?.clone(),
            phone: required(&self.phone, "phone")?.clone(),
            course: required(&self.course, "course")?.clone(),

            fees_total: required(&self.fees_total, "fees_total")?.parse("fees_total")?,
            fees_paid: required(&self.fees_paid, "fees_paid")?.parse("fees_paid")?,
        })
    }
}

fn required<'a, T>(value: &'a Option<T>, field: &'static str) -> Result<&'a T, FormError> {
    value.as_ref().ok_or(FormError::MissingField { field })
}
