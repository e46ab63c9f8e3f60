use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition,
    DatabaseConnection, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

use crate::server::model::{
    employee::{CreateEmployeeParams, Employee, EmployeeFilter, EmployeeOrdering},
    page::Page,
};

const LIKE_ESCAPE: char = '\\';

/// `LIKE` pattern matching `search` anywhere, with its wildcards taken literally.
fn contains_pattern(search: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape(LIKE_ESCAPE)
}

pub struct EmployeeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new employee and returns it with the hostel's name
    pub async fn create(&self, params: CreateEmployeeParams) -> Result<Employee, DbErr> {
        let employee = entity::employee::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            address: ActiveValue::Set(params.address),
            phone_no: ActiveValue::Set(params.phone_no),
            email_address: ActiveValue::Set(params.email_address),
            hostel_id: ActiveValue::Set(params.hostel_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(employee.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Employee with id {} not found after creation",
                employee.id
            )))
    }

    /// Gets an employee by ID with the hostel's name
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, DbErr> {
        let result = entity::prelude::Employee::find_by_id(id)
            .find_also_related(entity::prelude::Hostel)
            .one(self.db)
            .await?;

        Ok(result.map(|(employee, hostel)| Employee::from_entity(employee, hostel)))
    }

    /// Checks whether an employee with the same first and last name exists
    pub async fn name_pair_exists(
        &self,
        first_name: &str,
        last_name: Option<&str>,
    ) -> Result<bool, DbErr> {
        let last_name_condition = match last_name {
            Some(last_name) => entity::employee::Column::LastName.eq(last_name),
            None => entity::employee::Column::LastName.is_null(),
        };

        let count = entity::prelude::Employee::find()
            .filter(entity::employee::Column::FirstName.eq(first_name))
            .filter(last_name_condition)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any employee already uses the given phone number
    pub async fn phone_exists(&self, phone_no: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Employee::find()
            .filter(entity::employee::Column::PhoneNo.eq(phone_no))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets one window of employees matching the filter
    ///
    /// Employees are ordered by first name when the filter asks for it and by ID
    /// otherwise. The hostel filter matches the hostel name exactly, the search
    /// matches any part of the last name.
    pub async fn get_paginated(
        &self,
        filter: EmployeeFilter,
        limit: u64,
        offset: u64,
    ) -> Result<Page<Employee>, DbErr> {
        let mut condition = Condition::all();
        if let Some(hostel) = filter.hostel {
            condition = condition.add(entity::hostel::Column::Name.eq(hostel));
        }
        if let Some(search) = filter.search.filter(|s| !s.is_empty()) {
            condition = condition
                .add(entity::employee::Column::LastName.like(contains_pattern(&search)));
        }

        let total = entity::prelude::Employee::find()
            .join(JoinType::LeftJoin, entity::employee::Relation::Hostel.def())
            .filter(condition.clone())
            .count(self.db)
            .await?;

        let query = entity::prelude::Employee::find()
            .find_also_related(entity::prelude::Hostel)
            .filter(condition);

        let query = match filter.ordering {
            Some(EmployeeOrdering::FirstNameAsc) => {
                query.order_by_asc(entity::employee::Column::FirstName)
            }
            Some(EmployeeOrdering::FirstNameDesc) => {
                query.order_by_desc(entity::employee::Column::FirstName)
            }
            None => query,
        }
        .order_by_asc(entity::employee::Column::Id);

        let employees = query.offset(offset).limit(limit).all(self.db).await?;

        Ok(Page {
            items: employees
                .into_iter()
                .map(|(employee, hostel)| Employee::from_entity(employee, hostel))
                .collect(),
            total,
            limit,
            offset,
        })
    }
}
