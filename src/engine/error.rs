use ulid::Ulid;

/// Rejection reasons for the creation pipeline plus lookup misses.
/// All variants except `NotFound` are client-input errors; none are fatal
/// and nothing is stored when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    MissingFields,
    InvalidDateFormat,
    StartAfterEnd,
    PastBooking,
    /// Carries the id of the first existing booking the candidate overlaps.
    Conflict(Ulid),
    NotFound(Ulid),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::MissingFields => write!(f, "missing required fields"),
            RegistryError::InvalidDateFormat => write!(f, "invalid date format"),
            RegistryError::StartAfterEnd => write!(f, "start time must be before end time"),
            RegistryError::PastBooking => write!(f, "cannot book in the past"),
            RegistryError::Conflict(id) => write!(f, "conflict with booking: {id}"),
            RegistryError::NotFound(id) => write!(f, "booking not found: {id}"),
        }
    }
}

impl std::error::Error for RegistryError {}
