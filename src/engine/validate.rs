use chrono::{DateTime, Utc};

use crate::clock::Stamp;
use crate::model::{Booking, BookingRequest};

use super::conflict::find_conflict;
use super::RegistryError;

/// A request that has passed every pipeline step and is ready for insertion.
pub(crate) struct Candidate {
    pub user_id: String,
    pub start: Stamp,
    pub end: Stamp,
}

/// The creation pipeline: presence, parseability, ordering, no-past, then
/// conflict. Steps short-circuit in that order so error reporting is
/// deterministic. `now` is injected so the past-boundary rule is testable.
pub(crate) fn validate(
    request: &BookingRequest,
    existing: &[Booking],
    now: DateTime<Utc>,
) -> Result<Candidate, RegistryError> {
    let user_id = non_empty(&request.user_id).ok_or(RegistryError::MissingFields)?;
    let start_text = non_empty(&request.start_time).ok_or(RegistryError::MissingFields)?;
    let end_text = non_empty(&request.end_time).ok_or(RegistryError::MissingFields)?;

    let start = Stamp::parse(start_text).ok_or(RegistryError::InvalidDateFormat)?;
    let end = Stamp::parse(end_text).ok_or(RegistryError::InvalidDateFormat)?;

    // Equal instants are invalid too: the interval must be non-empty.
    if !start.is_before(&end) {
        return Err(RegistryError::StartAfterEnd);
    }

    // Strictly before now is rejected; a start exactly at now is accepted.
    if start.instant() < now {
        return Err(RegistryError::PastBooking);
    }

    if let Some(id) = find_conflict(&start, &end, existing) {
        return Err(RegistryError::Conflict(id));
    }

    Ok(Candidate {
        user_id: user_id.to_string(),
        start,
        end,
    })
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
