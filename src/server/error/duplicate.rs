use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// A write was rejected because an equivalent row already exists.
///
/// These checks run before the insert and are not backed by database constraints.
#[derive(Error, Debug)]
pub enum DuplicateError {
    #[error("Hostel name already exists. Please keep some other name")]
    HostelName,

    #[error("Phone number already exists")]
    HostelPhone,

    #[error("Student already exists")]
    Student,

    #[error("This phone number already exists")]
    StudentPhone,

    #[error("Employee already exists")]
    Employee,

    #[error("Phone number already exists")]
    EmployeePhone,
}

impl DuplicateError {
    /// Request field the duplicate was detected on.
    pub fn field(&self) -> &'static str {
        match self {
            Self::HostelName => "name",
            Self::HostelPhone | Self::StudentPhone | Self::EmployeePhone => "phone_no",
            Self::Student | Self::Employee => "first_name",
        }
    }
}

/// Converts duplicate errors into 400 Bad Request responses naming the offending field.
impl IntoResponse for DuplicateError {
    fn into_response(self) -> Response {
        let field = self.field();
        super::bad_request(self.to_string(), Some(field))
    }
}
