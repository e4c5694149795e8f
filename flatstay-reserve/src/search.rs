use chrono::NaiveDate;
use flatstay_catalog::{Apartment, Flat, FlatType};
use serde::{Deserialize, Serialize};

use crate::{ReservationError, ReserveResult};

/// Availability search over the catalog. Dates arrive as ISO-8601
/// `YYYY-MM-DD` strings from the presentation layer; both filters are
/// optional.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
    pub apartment_id: Option<u32>,
    pub flat_type_id: Option<u32>,
}

/// One search result row: the flat joined with its apartment and type
#[derive(Debug, Clone, Serialize)]
pub struct AvailableFlat {
    pub flat: Flat,
    pub apartment: Apartment,
    pub flat_type: FlatType,
}

/// A validated stay window with check_out strictly after check_in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Stay {
    /// Parse a stay from date strings, rejecting malformed input and
    /// empty or inverted ranges.
    pub fn parse(check_in: &str, check_out: &str) -> ReserveResult<Self> {
        let check_in = parse_date(check_in)?;
        let check_out = parse_date(check_out)?;
        if check_out <= check_in {
            return Err(ReservationError::Validation(
                "Check-out date must be after check-in date".to_string(),
            ));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Like [`Stay::parse`], additionally rejecting check-ins before
    /// `today`. Applied to searches; confirmations only re-check ordering
    /// and availability.
    pub fn parse_for_search(
        check_in: &str,
        check_out: &str,
        today: NaiveDate,
    ) -> ReserveResult<Self> {
        let stay = Self::parse(check_in, check_out)?;
        if stay.check_in < today {
            return Err(ReservationError::Validation(
                "Check-in date cannot be in the past".to_string(),
            ));
        }
        Ok(stay)
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

fn parse_date(input: &str) -> ReserveResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| ReservationError::Validation(format!("Invalid date format: {input}")))
}
