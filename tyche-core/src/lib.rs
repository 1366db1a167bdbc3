pub mod booking;
pub mod contact;
pub mod user;
pub mod validation;
pub mod repository;

pub use booking::{Booking, BookingStatus, PaymentStatus, ValidatedBooking};
pub use contact::{Contact, ContactStatus, ValidatedContact};
pub use user::{NewUser, User};
pub use validation::{
    validate_booking_submission, validate_booking_submission_with, validate_contact_submission,
    BookingRules, ValidationError,
};
pub use repository::Storage;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Storage failure: {0}")]
    Storage(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
