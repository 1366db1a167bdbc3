use async_trait::async_trait;
use tyche_catalog::{
    Destination, NewDestination, NewService, NewTestimonial, Service, ServiceType, Testimonial,
};

use crate::booking::{Booking, ValidatedBooking};
use crate::contact::{Contact, ValidatedContact};
use crate::user::{NewUser, User};
use crate::CoreResult;

// Lookups of unknown ids return `Ok(None)`; `Err` is reserved for the store
// itself failing.

/// Repository trait for the charter catalog
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create_service(&self, service: NewService) -> CoreResult<Service>;

    /// All services in insertion order.
    async fn list_services(&self) -> CoreResult<Vec<Service>>;

    /// The subsequence of `list_services` with the given type.
    async fn list_services_by_type(&self, service_type: ServiceType) -> CoreResult<Vec<Service>>;

    async fn get_service(&self, id: i64) -> CoreResult<Option<Service>>;
}

#[async_trait]
pub trait DestinationRepository: Send + Sync {
    async fn create_destination(&self, destination: NewDestination) -> CoreResult<Destination>;

    async fn list_destinations(&self) -> CoreResult<Vec<Destination>>;

    async fn get_destination(&self, id: i64) -> CoreResult<Option<Destination>>;
}

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn create_testimonial(&self, testimonial: NewTestimonial) -> CoreResult<Testimonial>;

    async fn list_testimonials(&self) -> CoreResult<Vec<Testimonial>>;
}

/// Repository trait for booking requests
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Stores a validated booking, stamping its id and `created_at`.
    async fn create_booking(&self, booking: ValidatedBooking) -> CoreResult<Booking>;

    async fn list_bookings(&self) -> CoreResult<Vec<Booking>>;

    async fn get_booking(&self, id: i64) -> CoreResult<Option<Booking>>;
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact(&self, contact: ValidatedContact) -> CoreResult<Contact>;

    async fn list_contacts(&self) -> CoreResult<Vec<Contact>>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `CoreError::Conflict` when the username is taken.
    async fn create_user(&self, user: NewUser) -> CoreResult<User>;

    async fn get_user(&self, id: i64) -> CoreResult<Option<User>>;

    async fn get_user_by_username(&self, username: &str) -> CoreResult<Option<User>>;
}

/// Everything the HTTP layer needs from a store.
pub trait Storage:
    ServiceRepository
    + DestinationRepository
    + TestimonialRepository
    + BookingRepository
    + ContactRepository
    + UserRepository
{
}

impl<T> Storage for T where
    T: ServiceRepository
        + DestinationRepository
        + TestimonialRepository
        + BookingRepository
        + ContactRepository
        + UserRepository
{
}
