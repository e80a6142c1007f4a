mod conflict;
mod error;
mod store;
mod validate;

pub use error::RegistryError;
pub use store::BookingStore;

use chrono::Utc;
use tokio::sync::RwLock;
use ulid::Ulid;

use crate::model::{Booking, BookingRequest};

use validate::validate;

/// The booking registry: an explicitly owned store behind a single lock,
/// constructed once at startup and injected into the handlers.
pub struct Registry {
    store: RwLock<BookingStore>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(BookingStore::new()),
        }
    }

    /// Run the full creation pipeline and insert on success.
    ///
    /// The write lock is held across validation and insert so two in-flight
    /// creations can never interleave their conflict check with the write.
    pub async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<Booking, RegistryError> {
        let mut store = self.store.write().await;
        let now = Utc::now();
        let candidate = validate(request, store.all(), now)?;

        let booking = Booking {
            id: Ulid::new(),
            user_id: candidate.user_id,
            start_time: candidate.start,
            end_time: candidate.end,
            created_at: now,
        };
        store.insert(booking.clone());
        tracing::info!(id = %booking.id, user_id = %booking.user_id, "booking created");
        Ok(booking)
    }

    /// All bookings in insertion order.
    pub async fn list_bookings(&self) -> Vec<Booking> {
        self.store.read().await.all().to_vec()
    }

    pub async fn get_booking(&self, id: &Ulid) -> Result<Booking, RegistryError> {
        self.store
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(RegistryError::NotFound(*id))
    }

    pub async fn booking_count(&self) -> usize {
        self.store.read().await.len()
    }
}
