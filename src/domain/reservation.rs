// src/domain/reservation.rs
use crate::domain::property::Property;
use chrono::NaiveDate;
use serde::Serialize;

/// A reservation joined with the property it books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestReservation {
    pub id: i64,
    pub guest_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property: Property,
}
