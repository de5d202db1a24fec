//! Error types for calendar request validation.
//!
//! The sun calculations themselves never fail: absent events are `None` and
//! unknown timezones fall back to UTC. Only the values a front end hands in
//! (coordinates, day counts, event kinds) can be rejected.

/// Error type for all fallible operations in the calsun crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalsunError {
    /// Returned when latitude or longitude is not supplied.
    #[error("lat and lng parameters are required")]
    MissingCoordinates,

    /// Returned when latitude does not parse or lies outside [-90, 90].
    #[error("invalid lat parameter")]
    InvalidLatitude,

    /// Returned when longitude does not parse or lies outside [-180, 180].
    #[error("invalid lng parameter")]
    InvalidLongitude,

    /// Returned when the day count does not parse or lies outside 1..=max.
    #[error("days must be between 1 and {max}")]
    InvalidDays {
        /// Largest accepted day count.
        max: u32,
    },

    /// Returned when the exclude value is neither `sunrise` nor `sunset`.
    #[error("exclude must be 'sunrise' or 'sunset'")]
    InvalidExclude,

    /// Returned when a string does not name a sun event kind.
    #[error("unknown sun event kind: {value:?}")]
    InvalidEventKind {
        /// The string that failed to parse.
        value: String,
    },
}
