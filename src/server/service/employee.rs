use sea_orm::DatabaseConnection;

use crate::server::{
    data::{employee::EmployeeRepository, hostel::HostelRepository},
    error::{duplicate::DuplicateError, AppError},
    model::{
        employee::{CreateEmployeeParams, Employee, EmployeeFilter},
        page::Page,
    },
};

pub struct EmployeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new employee for an existing hostel
    ///
    /// Rejects employees whose first and last name pair or phone number is already taken.
    pub async fn create(&self, params: CreateEmployeeParams) -> Result<Employee, AppError> {
        if HostelRepository::new(self.db)
            .find_by_id(params.hostel_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Hostel {} does not exist",
                params.hostel_id
            )));
        }

        let repo = EmployeeRepository::new(self.db);

        if repo
            .name_pair_exists(&params.first_name, params.last_name.as_deref())
            .await?
        {
            return Err(DuplicateError::Employee.into());
        }
        if repo.phone_exists(&params.phone_no).await? {
            return Err(DuplicateError::EmployeePhone.into());
        }

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Employee>, AppError> {
        Ok(EmployeeRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_paginated(
        &self,
        filter: EmployeeFilter,
        limit: u64,
        offset: u64,
    ) -> Result<Page<Employee>, AppError> {
        Ok(EmployeeRepository::new(self.db)
            .get_paginated(filter, limit, offset)
            .await?)
    }
}
