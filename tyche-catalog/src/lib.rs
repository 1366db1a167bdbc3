pub mod service;
pub mod destination;
pub mod testimonial;
pub mod pricing;
pub mod seed;

pub use service::{CatalogError, NewService, Rate, Service, ServiceType};
pub use destination::{Destination, NewDestination};
pub use testimonial::{NewTestimonial, Testimonial};
pub use pricing::StartingRates;
