use sea_orm::DatabaseConnection;

use crate::server::{
    data::student::StudentRepository,
    error::{duplicate::DuplicateError, AppError},
    model::student::{CreateStudentParams, Student},
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new student after checking the name pair and phone number are unused
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);

        if repo
            .name_pair_exists(&params.first_name, params.last_name.as_deref())
            .await?
        {
            return Err(DuplicateError::Student.into());
        }
        if repo.phone_exists(&params.phone_no).await? {
            return Err(DuplicateError::StudentPhone.into());
        }

        Ok(repo.create(params).await?)
    }
}
