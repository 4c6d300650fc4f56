//! In-memory implementation of [`BookingRepository`].

use atria_core::error::{AtriaError, AtriaResult};
use atria_core::models::booking::Booking;
use atria_core::repository::BookingRepository;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    bookings: Vec<Booking>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.bookings.iter().position(|b| b.id == id)
    }
}

impl BookingRepository for InMemoryBookingRepository {
    fn insert(&mut self, booking: Booking) -> AtriaResult<Booking> {
        self.bookings.push(booking.clone());
        Ok(booking)
    }

    fn get(&self, id: Uuid) -> AtriaResult<Booking> {
        self.bookings
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AtriaError::not_found("booking", id))
    }

    fn save(&mut self, booking: Booking) -> AtriaResult<Booking> {
        let idx = self
            .position(booking.id)
            .ok_or_else(|| AtriaError::not_found("booking", booking.id))?;
        self.bookings[idx] = booking.clone();
        Ok(booking)
    }

    fn list(&self) -> Vec<Booking> {
        self.bookings.clone()
    }
}
