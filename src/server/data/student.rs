use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::student::{CreateStudentParams, Student};

pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new student
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, DbErr> {
        let student = entity::student::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            address: ActiveValue::Set(params.address),
            phone_no: ActiveValue::Set(params.phone_no),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(student))
    }

    /// Gets a student by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let student = entity::prelude::Student::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(student.map(Student::from_entity))
    }

    /// Checks whether a student with the same first and last name exists
    ///
    /// An absent last name only matches students without a last name.
    pub async fn name_pair_exists(
        &self,
        first_name: &str,
        last_name: Option<&str>,
    ) -> Result<bool, DbErr> {
        let last_name_condition = match last_name {
            Some(last_name) => entity::student::Column::LastName.eq(last_name),
            None => entity::student::Column::LastName.is_null(),
        };

        let count = entity::prelude::Student::find()
            .filter(entity::student::Column::FirstName.eq(first_name))
            .filter(last_name_condition)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any student already uses the given phone number
    pub async fn phone_exists(&self, phone_no: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Student::find()
            .filter(entity::student::Column::PhoneNo.eq(phone_no))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the students holding a booking for any room of a hostel
    ///
    /// Resolved with a single join over bookings and rooms. A student appears once per
    /// booking, ordered by booking ID.
    pub async fn get_by_hostel(&self, hostel_id: i32) -> Result<Vec<Student>, DbErr> {
        let students = entity::prelude::Student::find()
            .join(JoinType::InnerJoin, entity::student::Relation::Booking.def())
            .join(JoinType::InnerJoin, entity::booking::Relation::Room.def())
            .filter(entity::room::Column::HostelId.eq(hostel_id))
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(students.into_iter().map(Student::from_entity).collect())
    }
}
