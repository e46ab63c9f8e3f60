use crate::model::transaction::{CreateTransactionDto, TransactionDto};

/// Record linking a payment to the employee who handled it.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i32,
    pub student_id: i32,
    pub booking_id: i32,
    pub payment_id: i32,
    pub employee_id: i32,
}

impl Transaction {
    pub fn from_entity(entity: entity::transaction::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            booking_id: entity.booking_id,
            payment_id: entity.payment_id,
            employee_id: entity.employee_id,
        }
    }

    pub fn into_dto(self) -> TransactionDto {
        TransactionDto {
            id: self.id,
            student_id: self.student_id,
            booking_id: self.booking_id,
            payment_id: self.payment_id,
            employee_id: self.employee_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTransactionParams {
    pub student_id: i32,
    pub booking_id: i32,
    pub payment_id: i32,
    pub employee_id: i32,
}

impl From<CreateTransactionDto> for CreateTransactionParams {
    fn from(dto: CreateTransactionDto) -> Self {
        Self {
            student_id: dto.student,
            booking_id: dto.booking,
            payment_id: dto.payment,
            employee_id: dto.employee,
        }
    }
}
