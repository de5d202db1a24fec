use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::CalsunError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SunEventKind {
    Sunrise,
    Sunset,
}

impl SunEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SunEventKind::Sunrise => "sunrise",
            SunEventKind::Sunset => "sunset",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SunEventKind::Sunrise => "Sunrise",
            SunEventKind::Sunset => "Sunset",
        }
    }
}

impl fmt::Display for SunEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SunEventKind {
    type Err = CalsunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sunrise" => Ok(SunEventKind::Sunrise),
            "sunset" => Ok(SunEventKind::Sunset),
            other => Err(CalsunError::InvalidEventKind {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunEvent {
    pub kind: SunEventKind,
    pub instant: DateTime<Utc>,
    /// Degrees clockwise from north, in [0, 360).
    pub azimuth: f64,
    pub elevation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySunTimes {
    pub date: NaiveDate,
    pub sunrise: Option<SunEvent>,
    pub sunset: Option<SunEvent>,
}

impl DaySunTimes {
    pub fn event(&self, kind: SunEventKind) -> Option<&SunEvent> {
        match kind {
            SunEventKind::Sunrise => self.sunrise.as_ref(),
            SunEventKind::Sunset => self.sunset.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solstice {
    Summer,
    Winter,
}

impl fmt::Display for Solstice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Solstice::Summer => "summer",
            Solstice::Winter => "winter",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolsticeCountdown {
    pub days_until: u32,
    pub solstice: Solstice,
}

/// Which event kinds end up in a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventFilter {
    pub include_sunrise: bool,
    pub include_sunset: bool,
}

impl EventFilter {
    pub const ALL: EventFilter = EventFilter {
        include_sunrise: true,
        include_sunset: true,
    };

    pub fn excluding(kind: SunEventKind) -> Self {
        match kind {
            SunEventKind::Sunrise => EventFilter {
                include_sunrise: false,
                include_sunset: true,
            },
            SunEventKind::Sunset => EventFilter {
                include_sunrise: true,
                include_sunset: false,
            },
        }
    }

    pub fn includes(&self, kind: SunEventKind) -> bool {
        match kind {
            SunEventKind::Sunrise => self.include_sunrise,
            SunEventKind::Sunset => self.include_sunset,
        }
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::ALL
    }
}
