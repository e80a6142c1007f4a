use ulid::Ulid;

use crate::clock::Stamp;
use crate::model::Booking;

/// Scan existing bookings for one the candidate interval overlaps, returning
/// the first offender's id. O(n) over the collection — fine at this scale.
///
/// Overlap is the three-way disjunction: candidate start strictly inside the
/// existing interval (open at both ends), candidate end strictly inside, or
/// candidate containing the existing interval with inclusive endpoints. The
/// asymmetry is deliberate: the strictly-inside tests let two bookings share
/// exactly one endpoint, so back-to-back bookings touching at a point are
/// allowed, while equal-endpoint containment still conflicts.
pub(crate) fn find_conflict(start: &Stamp, end: &Stamp, existing: &[Booking]) -> Option<Ulid> {
    existing
        .iter()
        .find(|booking| {
            start.is_strictly_within(&booking.start_time, &booking.end_time)
                || end.is_strictly_within(&booking.start_time, &booking.end_time)
                || (start.is_same_or_before(&booking.start_time)
                    && end.is_same_or_after(&booking.end_time))
        })
        .map(|booking| booking.id)
}
