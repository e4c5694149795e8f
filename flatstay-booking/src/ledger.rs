use crate::models::{Booking, BookingStatus};
use chrono::{NaiveDate, Utc};

/// The authoritative collection of bookings, used to decide availability.
///
/// Append-mostly: records are created and later flipped to cancelled, never
/// removed. Ids are assigned sequentially from 1 and never reused. The
/// ledger does not itself re-check availability on create; callers decide
/// first via [`BookingLedger::is_available`], which keeps the decision and
/// the mutation independently testable.
pub struct BookingLedger {
    bookings: Vec<Booking>,
    next_id: u32,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self {
            bookings: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a confirmed booking and return it.
    #[allow(clippy::too_many_arguments)]
    pub fn create_booking(
        &mut self,
        flat_id: u32,
        guest_name: String,
        guest_email: String,
        guest_phone: String,
        check_in: NaiveDate,
        check_out: NaiveDate,
        total_guests: u32,
        total_price_cents: i32,
        special_requests: String,
    ) -> &Booking {
        let booking = Booking {
            id: self.next_id,
            flat_id,
            guest_name,
            guest_email,
            guest_phone,
            check_in,
            check_out,
            total_guests,
            total_price_cents,
            booking_date: Utc::now(),
            status: BookingStatus::Confirmed,
            special_requests,
        };
        self.next_id += 1;

        tracing::info!(
            booking_id = booking.id,
            flat_id,
            %check_in,
            %check_out,
            "booking created"
        );

        self.bookings.push(booking);
        self.bookings.last().expect("just pushed")
    }

    /// Get a booking by id
    pub fn booking(&self, id: u32) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// A guest's confirmed bookings, in creation order. Cancelled bookings
    /// are excluded from this view.
    pub fn bookings_by_email(&self, email: &str) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.guest_email == email && b.is_confirmed())
            .collect()
    }

    /// Whether a flat is free over the half-open range [check_in, check_out).
    ///
    /// A confirmed booking conflicts unless it ends on or before the
    /// requested check-in, or starts on or after the requested check-out:
    /// checkout day and same-day check-in do not collide (standard hotel
    /// semantics). Cancelled bookings never conflict.
    pub fn is_available(&self, flat_id: u32, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        !self.bookings.iter().any(|b| {
            b.flat_id == flat_id
                && b.is_confirmed()
                && !(check_out <= b.check_in || check_in >= b.check_out)
        })
    }

    /// Cancel a booking by id. Returns false when no such booking exists;
    /// the transition is one-way and cancelling an already-cancelled booking
    /// leaves it cancelled.
    pub fn cancel_booking(&mut self, id: u32) -> bool {
        match self.bookings.iter_mut().find(|b| b.id == id) {
            Some(booking) => {
                booking.status = BookingStatus::Cancelled;
                tracing::info!(booking_id = id, flat_id = booking.flat_id, "booking cancelled");
                true
            }
            None => false,
        }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self::new()
    }
}
