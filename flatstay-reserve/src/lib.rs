pub mod search;
pub mod workflow;

pub use search::{AvailableFlat, SearchRequest, Stay};
pub use workflow::{BookingDetails, BookingRequest, FlatTypeGroup, ReservationService};

use chrono::NaiveDate;

/// Recoverable outcomes of the reservation workflow.
///
/// `Unavailable` is distinct from plain validation failure so callers can
/// prompt the guest towards another flat or date range.
#[derive(Debug, thiserror::Error)]
pub enum ReservationError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Flat not found: {0}")]
    FlatNotFound(u32),

    #[error("Flat {flat_id} is no longer available from {check_in} to {check_out}")]
    Unavailable {
        flat_id: u32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

pub type ReserveResult<T> = Result<T, ReservationError>;
