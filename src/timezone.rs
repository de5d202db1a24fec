use std::sync::OnceLock;

use chrono_tz::Tz;
use tracing::debug;
use tzf_rs::DefaultFinder;

use crate::types::Coordinate;

fn finder() -> &'static DefaultFinder {
    static FINDER: OnceLock<DefaultFinder> = OnceLock::new();
    FINDER.get_or_init(DefaultFinder::new)
}

/// Resolves an IANA zone name, falling back to UTC for empty or unknown names.
pub fn zone_from_name(name: &str) -> Tz {
    if name.is_empty() {
        return Tz::UTC;
    }
    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            debug!(zone = name, "unknown timezone, using UTC");
            Tz::UTC
        }
    }
}

/// Timezone for a coordinate, or UTC when no zone covers it.
pub fn timezone_for(coordinate: Coordinate) -> Tz {
    // tzf-rs takes (longitude, latitude)
    let name = finder().get_tz_name(coordinate.longitude, coordinate.latitude);
    zone_from_name(name)
}
