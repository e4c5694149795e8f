use chrono::Utc;
use flatstay_booking::{Booking, BookingLedger};
use flatstay_catalog::{Apartment, Catalog, Flat, FlatType};
use serde::{Deserialize, Serialize};

use crate::search::{AvailableFlat, SearchRequest, Stay};
use crate::{ReservationError, ReserveResult};

/// A booking confirmation request from the presentation layer
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub flat_id: u32,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub check_in: String,
    pub check_out: String,
    pub total_guests: u32,
    pub special_requests: String,
}

/// A booking joined with the catalog entities it references, for
/// confirmation pages and booking lists
#[derive(Debug, Clone, Serialize)]
pub struct BookingDetails {
    pub booking: Booking,
    pub flat: Flat,
    pub apartment: Apartment,
    pub flat_type: FlatType,
}

/// Flats of one apartment grouped by their type
#[derive(Debug, Clone, Serialize)]
pub struct FlatTypeGroup {
    pub flat_type: FlatType,
    pub flats: Vec<Flat>,
}

/// Orchestrates the catalog and the booking ledger: answers availability
/// searches and turns validated requests into ledger entries.
///
/// Single-threaded by design; the search-then-confirm sequence is not
/// atomic, so confirmation re-checks availability before writing.
pub struct ReservationService {
    catalog: Catalog,
    ledger: BookingLedger,
}

impl ReservationService {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ledger: BookingLedger::new(),
        }
    }

    /// Flats available for the requested stay, guest count, and optional
    /// apartment / flat-type filters.
    pub fn search(&self, request: &SearchRequest) -> ReserveResult<Vec<AvailableFlat>> {
        let stay = Stay::parse_for_search(
            &request.check_in,
            &request.check_out,
            Utc::now().date_naive(),
        )?;
        Ok(self.scan_available(request, stay))
    }

    fn scan_available(&self, request: &SearchRequest, stay: Stay) -> Vec<AvailableFlat> {
        let mut results = Vec::new();

        for flat in self.catalog.flats() {
            if let Some(apartment_id) = request.apartment_id {
                if flat.apartment_id != apartment_id {
                    continue;
                }
            }
            if let Some(flat_type_id) = request.flat_type_id {
                if flat.flat_type_id != flat_type_id {
                    continue;
                }
            }

            let flat_type = self.flat_type_of(flat);
            if flat_type.max_guests < request.guests {
                continue;
            }

            if !self
                .ledger
                .is_available(flat.id, stay.check_in, stay.check_out)
            {
                continue;
            }

            results.push(AvailableFlat {
                flat: flat.clone(),
                apartment: self.apartment_of(flat).clone(),
                flat_type: flat_type.clone(),
            });
        }

        tracing::debug!(
            check_in = %stay.check_in,
            check_out = %stay.check_out,
            guests = request.guests,
            matches = results.len(),
            "availability search"
        );

        results
    }

    /// Confirm a reservation: validate the request, re-check availability,
    /// price the stay, and write it into the ledger. Nothing is mutated on
    /// any failure path.
    pub fn confirm(&mut self, request: &BookingRequest) -> ReserveResult<Booking> {
        let guest_name = request.guest_name.trim();
        let guest_email = request.guest_email.trim();
        let guest_phone = request.guest_phone.trim();
        if guest_name.is_empty() || guest_email.is_empty() || guest_phone.is_empty() {
            return Err(ReservationError::Validation(
                "All required guest fields must be filled".to_string(),
            ));
        }
        if request.total_guests == 0 {
            return Err(ReservationError::Validation(
                "At least one guest is required".to_string(),
            ));
        }

        let stay = Stay::parse(&request.check_in, &request.check_out)?;

        let flat = self
            .catalog
            .flat(request.flat_id)
            .ok_or(ReservationError::FlatNotFound(request.flat_id))?;

        // Time may have passed since the search; check again before writing
        if !self
            .ledger
            .is_available(flat.id, stay.check_in, stay.check_out)
        {
            tracing::warn!(
                flat_id = flat.id,
                check_in = %stay.check_in,
                check_out = %stay.check_out,
                "flat no longer available at confirmation"
            );
            return Err(ReservationError::Unavailable {
                flat_id: flat.id,
                check_in: stay.check_in,
                check_out: stay.check_out,
            });
        }

        let flat_type = self.flat_type_of(flat);
        // Prices stay in cents; a stay long enough to overflow is refused
        // rather than booked at a wrapped total.
        let total_price_cents = i64::from(flat_type.base_price_cents)
            .checked_mul(stay.nights())
            .and_then(|total| i32::try_from(total).ok())
            .ok_or_else(|| {
                ReservationError::Validation("Stay is too long to price".to_string())
            })?;

        let booking = self.ledger.create_booking(
            request.flat_id,
            guest_name.to_string(),
            guest_email.to_string(),
            guest_phone.to_string(),
            stay.check_in,
            stay.check_out,
            request.total_guests,
            total_price_cents,
            request.special_requests.trim().to_string(),
        );
        Ok(booking.clone())
    }

    /// Cancel a booking; false when the id is unknown
    pub fn cancel(&mut self, booking_id: u32) -> bool {
        self.ledger.cancel_booking(booking_id)
    }

    /// A booking joined with its flat, apartment, and flat type
    pub fn booking_details(&self, booking_id: u32) -> Option<BookingDetails> {
        let booking = self.ledger.booking(booking_id)?;
        let flat = self.catalog.flat(booking.flat_id)?;
        Some(BookingDetails {
            booking: booking.clone(),
            flat: flat.clone(),
            apartment: self.apartment_of(flat).clone(),
            flat_type: self.flat_type_of(flat).clone(),
        })
    }

    /// A guest's confirmed bookings as joined views, in creation order
    pub fn guest_bookings(&self, email: &str) -> Vec<BookingDetails> {
        self.ledger
            .bookings_by_email(email)
            .into_iter()
            .filter_map(|b| self.booking_details(b.id))
            .collect()
    }

    /// The flats of one apartment grouped by flat type, groups in
    /// first-seen order. None when the apartment does not exist.
    pub fn apartment_units(&self, apartment_id: u32) -> Option<Vec<FlatTypeGroup>> {
        self.catalog.apartment(apartment_id)?;

        let mut groups: Vec<FlatTypeGroup> = Vec::new();
        for flat in self.catalog.flats_by_apartment(apartment_id) {
            match groups
                .iter_mut()
                .find(|g| g.flat_type.id == flat.flat_type_id)
            {
                Some(group) => group.flats.push(flat.clone()),
                None => groups.push(FlatTypeGroup {
                    flat_type: self.flat_type_of(flat).clone(),
                    flats: vec![flat.clone()],
                }),
            }
        }
        Some(groups)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &BookingLedger {
        &self.ledger
    }

    // Catalog construction validated these references, so the joins below
    // cannot miss.
    fn flat_type_of(&self, flat: &Flat) -> &FlatType {
        self.catalog
            .flat_type(flat.flat_type_id)
            .expect("catalog validated flat type references")
    }

    fn apartment_of(&self, flat: &Flat) -> &Apartment {
        self.catalog
            .apartment(flat.apartment_id)
            .expect("catalog validated apartment references")
    }
}
