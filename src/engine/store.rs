use std::collections::HashMap;

use ulid::Ulid;

use crate::model::Booking;

/// Insertion-ordered in-memory booking collection with an id index.
/// Append-only: no update or delete exists in this registry.
#[derive(Default)]
pub struct BookingStore {
    bookings: Vec<Booking>,
    by_id: HashMap<Ulid, usize>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a booking. Infallible: ids are generated fresh per creation,
    /// so a collision cannot occur.
    pub fn insert(&mut self, booking: Booking) {
        self.by_id.insert(booking.id, self.bookings.len());
        self.bookings.push(booking);
    }

    /// All bookings in insertion order.
    pub fn all(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn get(&self, id: &Ulid) -> Option<&Booking> {
        self.by_id.get(id).map(|&pos| &self.bookings[pos])
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}
