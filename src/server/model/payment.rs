//! Payment domain models and parameters.

use chrono::{DateTime, Utc};
use entity::payment::PaymentMode;

use crate::{
    model::payment::{CreatePaymentDto, PaymentDto, PaymentModeDto},
    server::model::booking::Booking,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub student_id: i32,
    pub booking_id: i32,
    pub payment_mode: PaymentMode,
    pub payment_datetime: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            booking_id: entity.booking_id,
            payment_mode: entity.payment_mode,
            payment_datetime: entity.payment_datetime,
        }
    }
}

/// Payment enriched with the booking it settles and the booked room's price.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDetails {
    pub payment: Payment,
    pub student_name: String,
    pub booking: Booking,
    pub room_description: String,
    pub room_price: i32,
}

impl PaymentDetails {
    /// Amount owed for the booking: room price times nights.
    pub fn total(&self) -> i64 {
        self.room_price as i64 * self.booking.no_of_nights as i64
    }

    pub fn into_dto(self) -> PaymentDto {
        let total_payments = self.total();

        PaymentDto {
            id: self.payment.id,
            student: self.student_name,
            booking_id: self.booking.id,
            booking_date: self.booking.booking_date,
            check_in_date: self.booking.check_in_date,
            check_out_date: self.booking.check_out_date,
            room: self.room_description,
            room_price: self.room_price,
            no_of_nights: self.booking.no_of_nights,
            payment_mode: self.payment.payment_mode.into(),
            payment_datetime: self.payment.payment_datetime,
            total_payments,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePaymentParams {
    pub student_id: i32,
    pub booking_id: i32,
    pub payment_mode: PaymentMode,
}

impl From<CreatePaymentDto> for CreatePaymentParams {
    fn from(dto: CreatePaymentDto) -> Self {
        Self {
            student_id: dto.student,
            booking_id: dto.booking,
            payment_mode: dto.payment_mode.into(),
        }
    }
}

impl From<PaymentMode> for PaymentModeDto {
    fn from(mode: PaymentMode) -> Self {
        match mode {
            PaymentMode::Cash => Self::Cash,
            PaymentMode::Online => Self::Online,
        }
    }
}

impl From<PaymentModeDto> for PaymentMode {
    fn from(mode: PaymentModeDto) -> Self {
        match mode {
            PaymentModeDto::Cash => Self::Cash,
            PaymentModeDto::Online => Self::Online,
        }
    }
}
