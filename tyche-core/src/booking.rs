use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
    Refunded,
}

/// Booking fields that passed validation, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBooking {
    pub service_type: String,
    pub service_id: Option<i64>,
    pub start_date: String,
    pub end_date: String,
    pub departure_location: String,
    pub destination: String,
    pub destination_id: Option<i64>,
    pub guests: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: Option<String>,
    pub additional_services: Option<Map<String, Value>>,
    pub estimated_price: i64,
}

/// A reservation request. Not a confirmed transaction.
///
/// `service_type`, `destination` and the optional ids echo catalog data as
/// free text; nothing checks that they refer to stored records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub service_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<i64>,
    pub start_date: String,
    pub end_date: String,
    pub departure_location: String,
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<i64>,
    pub guests: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_services: Option<Map<String, Value>>,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub estimated_price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_price: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn from_submission(id: i64, created_at: DateTime<Utc>, data: ValidatedBooking) -> Self {
        Self {
            id,
            service_type: data.service_type,
            service_id: data.service_id,
            start_date: data.start_date,
            end_date: data.end_date,
            departure_location: data.departure_location,
            destination: data.destination,
            destination_id: data.destination_id,
            guests: data.guests,
            name: data.name,
            email: data.email,
            phone: data.phone,
            special_requests: data.special_requests,
            additional_services: data.additional_services,
            status: BookingStatus::default(),
            payment_status: PaymentStatus::default(),
            estimated_price: data.estimated_price,
            final_price: None,
            created_at,
        }
    }
}
