pub mod angles;
pub mod calendar;
pub mod error;
pub mod report;
pub mod solstice;
pub mod sun_times;
pub mod timezone;
pub mod types;

pub use angles::{
    deg_to_rad, from_julian, normalize_angle, rad_to_deg, solar_position, sun_coords, to_days,
    to_julian, SolarPosition, SunCoords, J1970, J2000,
};

pub use calendar::{
    build_entries, calendar_name, event_uid, location_label, CalendarEntry, CalendarRequest,
    ATTACHMENT_FILENAME, CONTENT_TYPE, DEFAULT_DAYS, MAX_DAYS, PRODUCT_ID,
};

pub use error::CalsunError;

pub use report::{describe, format_day_length, format_delta, wall_clock_delta};

pub use solstice::nearest_solstice;

pub use sun_times::{compute_day, compute_range, HORIZON_ALTITUDE};

pub use timezone::timezone_for;

pub use types::{
    Coordinate, DaySunTimes, EventFilter, Solstice, SolsticeCountdown, SunEvent, SunEventKind,
};
