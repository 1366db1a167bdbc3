use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use tyche_catalog::{
    seed, Destination, NewDestination, NewService, NewTestimonial, Service, ServiceType, Testimonial,
};
use tyche_core::repository::{
    BookingRepository, ContactRepository, DestinationRepository, ServiceRepository,
    TestimonialRepository, UserRepository,
};
use tyche_core::{
    Booking, Contact, CoreError, CoreResult, NewUser, User, ValidatedBooking, ValidatedContact,
};

/// Records of one entity type plus the counter that names them.
///
/// Ids start at 1 and are never handed out twice. The map is keyed by id, so
/// iteration order is insertion order.
struct Collection<T> {
    next_id: i64,
    items: BTreeMap<i64, T>,
}

impl<T: Clone> Collection<T> {
    fn new() -> Self {
        Self {
            next_id: 1,
            items: BTreeMap::new(),
        }
    }

    fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let record = build(id);
        self.items.insert(id, record.clone());
        record
    }

    fn get(&self, id: i64) -> Option<T> {
        self.items.get(&id).cloned()
    }

    fn all(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    fn last(&self) -> Option<&T> {
        self.items.values().next_back()
    }
}

/// Current time, but never earlier than `previous`.
fn stamp(previous: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = Utc::now();
    match previous {
        Some(previous) if previous > now => previous,
        _ => now,
    }
}

/// Process-lifetime store for every entity the site knows about.
///
/// Each collection sits behind its own lock; a create takes the write lock
/// once for both the id increment and the insert.
pub struct MemStorage {
    services: RwLock<Collection<Service>>,
    destinations: RwLock<Collection<Destination>>,
    testimonials: RwLock<Collection<Testimonial>>,
    bookings: RwLock<Collection<Booking>>,
    contacts: RwLock<Collection<Contact>>,
    users: RwLock<Collection<User>>,
}

impl MemStorage {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            services: RwLock::new(Collection::new()),
            destinations: RwLock::new(Collection::new()),
            testimonials: RwLock::new(Collection::new()),
            bookings: RwLock::new(Collection::new()),
            contacts: RwLock::new(Collection::new()),
            users: RwLock::new(Collection::new()),
        }
    }

    /// A store pre-populated with the given catalog, in order.
    pub fn with_catalog(
        services: Vec<NewService>,
        destinations: Vec<NewDestination>,
        testimonials: Vec<NewTestimonial>,
    ) -> Self {
        let mut store = Self::new();

        let collection = store.services.get_mut();
        for service in services {
            collection.insert_with(|id| service.into_service(id));
        }
        let collection = store.destinations.get_mut();
        for destination in destinations {
            collection.insert_with(|id| destination.into_destination(id));
        }
        let collection = store.testimonials.get_mut();
        for testimonial in testimonials {
            collection.insert_with(|id| testimonial.into_testimonial(id));
        }

        store
    }

    /// A store holding the embedded site catalog.
    pub fn seeded() -> Self {
        Self::with_catalog(seed::services(), seed::destinations(), seed::testimonials())
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceRepository for MemStorage {
    async fn create_service(&self, service: NewService) -> CoreResult<Service> {
        let created = self.services.write().await.insert_with(|id| service.into_service(id));
        debug!(service_id = created.id, service_type = %created.service_type, "Service created");
        Ok(created)
    }

    async fn list_services(&self) -> CoreResult<Vec<Service>> {
        Ok(self.services.read().await.all())
    }

    async fn list_services_by_type(&self, service_type: ServiceType) -> CoreResult<Vec<Service>> {
        let services = self.services.read().await;
        Ok(services
            .items
            .values()
            .filter(|s| s.service_type == service_type)
            .cloned()
            .collect())
    }

    async fn get_service(&self, id: i64) -> CoreResult<Option<Service>> {
        Ok(self.services.read().await.get(id))
    }
}

#[async_trait]
impl DestinationRepository for MemStorage {
    async fn create_destination(&self, destination: NewDestination) -> CoreResult<Destination> {
        let created = self
            .destinations
            .write()
            .await
            .insert_with(|id| destination.into_destination(id));
        debug!(destination_id = created.id, "Destination created");
        Ok(created)
    }

    async fn list_destinations(&self) -> CoreResult<Vec<Destination>> {
        Ok(self.destinations.read().await.all())
    }

    async fn get_destination(&self, id: i64) -> CoreResult<Option<Destination>> {
        Ok(self.destinations.read().await.get(id))
    }
}

#[async_trait]
impl TestimonialRepository for MemStorage {
    async fn create_testimonial(&self, testimonial: NewTestimonial) -> CoreResult<Testimonial> {
        Ok(self
            .testimonials
            .write()
            .await
            .insert_with(|id| testimonial.into_testimonial(id)))
    }

    async fn list_testimonials(&self) -> CoreResult<Vec<Testimonial>> {
        Ok(self.testimonials.read().await.all())
    }
}

#[async_trait]
impl BookingRepository for MemStorage {
    async fn create_booking(&self, booking: ValidatedBooking) -> CoreResult<Booking> {
        let mut bookings = self.bookings.write().await;
        let created_at = stamp(bookings.last().map(|b| b.created_at));
        let created = bookings.insert_with(|id| Booking::from_submission(id, created_at, booking));
        debug!(booking_id = created.id, "Booking stored");
        Ok(created)
    }

    async fn list_bookings(&self) -> CoreResult<Vec<Booking>> {
        Ok(self.bookings.read().await.all())
    }

    async fn get_booking(&self, id: i64) -> CoreResult<Option<Booking>> {
        Ok(self.bookings.read().await.get(id))
    }
}

#[async_trait]
impl ContactRepository for MemStorage {
    async fn create_contact(&self, contact: ValidatedContact) -> CoreResult<Contact> {
        let mut contacts = self.contacts.write().await;
        let created_at = stamp(contacts.last().map(|c| c.created_at));
        let created = contacts.insert_with(|id| Contact::from_submission(id, created_at, contact));
        debug!(contact_id = created.id, "Contact stored");
        Ok(created)
    }

    async fn list_contacts(&self) -> CoreResult<Vec<Contact>> {
        Ok(self.contacts.read().await.all())
    }
}

#[async_trait]
impl UserRepository for MemStorage {
    async fn create_user(&self, user: NewUser) -> CoreResult<User> {
        let mut users = self.users.write().await;
        if users.items.values().any(|u| u.username == user.username) {
            return Err(CoreError::Conflict(format!(
                "Username already taken: {}",
                user.username
            )));
        }
        let created_at = stamp(users.last().map(|u| u.created_at));
        Ok(users.insert_with(|id| user.into_user(id, created_at)))
    }

    async fn get_user(&self, id: i64) -> CoreResult<Option<User>> {
        Ok(self.users.read().await.get(id))
    }

    async fn get_user_by_username(&self, username: &str) -> CoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.items.values().find(|u| u.username == username).cloned())
    }
}
