use sea_orm::DatabaseConnection;

use crate::server::{
    data::{hostel::HostelRepository, student::StudentRepository},
    error::{duplicate::DuplicateError, AppError},
    model::{
        hostel::{CreateHostelParams, Hostel},
        student::HostelStudents,
    },
};

pub struct HostelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HostelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new hostel after checking its name and phone number are unused
    pub async fn create(&self, params: CreateHostelParams) -> Result<Hostel, AppError> {
        let repo = HostelRepository::new(self.db);

        if repo.name_exists(&params.name).await? {
            return Err(DuplicateError::HostelName.into());
        }
        if repo.phone_exists(&params.phone_no).await? {
            return Err(DuplicateError::HostelPhone.into());
        }

        let hostel = repo.create(params).await?;

        tracing::info!("Created hostel {} ({})", hostel.id, hostel.name);

        Ok(hostel)
    }

    /// Gets a specific hostel by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Hostel>, AppError> {
        let repo = HostelRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Gets the names of the students holding a booking in a hostel
    ///
    /// Returns None if the hostel doesn't exist
    pub async fn get_students(&self, hostel_id: i32) -> Result<Option<HostelStudents>, AppError> {
        if HostelRepository::new(self.db)
            .find_by_id(hostel_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let students = StudentRepository::new(self.db)
            .get_by_hostel(hostel_id)
            .await?;

        Ok(Some(HostelStudents {
            names: students.iter().map(|s| s.full_name()).collect(),
        }))
    }
}
