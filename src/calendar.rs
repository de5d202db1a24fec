//! Typed calendar entries for a range of sun events.
//!
//! Front ends (HTTP handler, CLI) validate their raw inputs with
//! [`CalendarRequest::parse`], compute a range, then turn it into
//! [`CalendarEntry`] values here. Serializing entries to iCal text is left
//! to the caller.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use sha2::{Digest, Sha256};

use crate::error::CalsunError;
use crate::report;
use crate::types::{Coordinate, DaySunTimes, EventFilter, SunEvent, SunEventKind};

pub const DEFAULT_DAYS: u32 = 30;
pub const MAX_DAYS: u32 = 90;

pub const CONTENT_TYPE: &str = "text/calendar; charset=utf-8";
pub const ATTACHMENT_FILENAME: &str = "calsun.ics";
pub const PRODUCT_ID: &str = "-//CalSun//Sunrise Sunset Calendar//EN";

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarRequest {
    pub coordinate: Coordinate,
    pub name: String,
    pub days: u32,
    pub filter: EventFilter,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl CalendarRequest {
    /// Validates raw parameter values. Empty strings count as absent; surrounding
    /// whitespace is not trimmed and fails to parse.
    pub fn parse(
        lat: Option<&str>,
        lng: Option<&str>,
        name: Option<&str>,
        days: Option<&str>,
        exclude: Option<&str>,
    ) -> Result<Self, CalsunError> {
        let (lat, lng) = match (present(lat), present(lng)) {
            (Some(lat), Some(lng)) => (lat, lng),
            _ => return Err(CalsunError::MissingCoordinates),
        };
        let latitude = lat
            .parse::<f64>()
            .ok()
            .filter(|v| (-90.0..=90.0).contains(v))
            .ok_or(CalsunError::InvalidLatitude)?;
        let longitude = lng
            .parse::<f64>()
            .ok()
            .filter(|v| (-180.0..=180.0).contains(v))
            .ok_or(CalsunError::InvalidLongitude)?;
        let coordinate = Coordinate::new(latitude, longitude);

        let days = match present(days) {
            None => DEFAULT_DAYS,
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|d| (1..=MAX_DAYS).contains(d))
                .ok_or(CalsunError::InvalidDays { max: MAX_DAYS })?,
        };

        let filter = match present(exclude) {
            None => EventFilter::ALL,
            Some(raw) => {
                let kind: SunEventKind = raw.parse().map_err(|_| CalsunError::InvalidExclude)?;
                EventFilter::excluding(kind)
            }
        };

        Ok(Self {
            coordinate,
            name: name.unwrap_or_default().to_string(),
            days,
            filter,
        })
    }

    pub fn location_label(&self) -> String {
        location_label(&self.name, self.coordinate)
    }

    pub fn calendar_name(&self) -> String {
        calendar_name(&self.name, self.filter)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEntry {
    pub uid: String,
    pub kind: SunEventKind,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub summary: String,
    pub description: String,
    pub location: String,
}

/// Stable identifier: hex of the first 8 bytes of SHA-256 over `date|lat|lng|kind`.
pub fn event_uid(date: NaiveDate, coordinate: Coordinate, kind: SunEventKind) -> String {
    let data = format!(
        "{}|{:.4}|{:.4}|{}",
        date.format("%Y-%m-%d"),
        coordinate.latitude,
        coordinate.longitude,
        kind
    );
    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    let hash = hasher.finalize();
    hex::encode(&hash[..8])
}

pub fn location_label(name: &str, coordinate: Coordinate) -> String {
    if name.is_empty() {
        coordinate.to_string()
    } else {
        name.to_string()
    }
}

pub fn calendar_name(name: &str, filter: EventFilter) -> String {
    let base = if name.is_empty() {
        "Sun Times".to_string()
    } else {
        format!("Sun Times - {name}")
    };

    if !filter.include_sunrise {
        format!("{base} (Sunset only)")
    } else if !filter.include_sunset {
        format!("{base} (Sunrise only)")
    } else {
        base
    }
}

pub fn entry_summary(event: &SunEvent, tz: Tz) -> String {
    format!(
        "{} {}",
        event.kind.title(),
        event.instant.with_timezone(&tz).format("%H:%M")
    )
}

/// One entry per included, present event, in range order (sunrise before sunset).
pub fn build_entries(request: &CalendarRequest, days: &[DaySunTimes], tz: Tz) -> Vec<CalendarEntry> {
    let label = request.location_label();
    let mut entries = Vec::new();

    for (i, day) in days.iter().enumerate() {
        let previous = i.checked_sub(1).and_then(|p| days.get(p));
        for kind in [SunEventKind::Sunrise, SunEventKind::Sunset] {
            if !request.filter.includes(kind) {
                continue;
            }
            let Some(event) = day.event(kind) else {
                continue;
            };
            entries.push(CalendarEntry {
                uid: event_uid(day.date, request.coordinate, kind),
                kind,
                start: event.instant,
                end: event.instant + Duration::minutes(1),
                summary: entry_summary(event, tz),
                description: report::describe(event, day, previous, request.coordinate, &label, tz),
                location: label.clone(),
            });
        }
    }

    entries
}
