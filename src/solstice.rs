use chrono::{Datelike, NaiveDate};

use crate::types::{Solstice, SolsticeCountdown};

pub const SUMMER_SOLSTICE: (u32, u32) = (6, 21);
pub const WINTER_SOLSTICE: (u32, u32) = (12, 21);

fn solstice_date(year: i32, (month, day): (u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Days from `date` to the next occurrence of `month_day`, counting today as 0.
fn days_until(date: NaiveDate, month_day: (u32, u32)) -> Option<u32> {
    let this_year = solstice_date(date.year(), month_day)?;
    let target = if this_year < date {
        solstice_date(date.year() + 1, month_day)?
    } else {
        this_year
    };
    u32::try_from((target - date).num_days()).ok()
}

/// Countdown to the closer of the two (fixed-date) solstices; ties go to summer.
pub fn nearest_solstice(date: NaiveDate) -> SolsticeCountdown {
    let to_summer = days_until(date, SUMMER_SOLSTICE).unwrap_or(u32::MAX);
    let to_winter = days_until(date, WINTER_SOLSTICE).unwrap_or(u32::MAX);

    if to_summer <= to_winter {
        SolsticeCountdown {
            days_until: to_summer,
            solstice: Solstice::Summer,
        }
    } else {
        SolsticeCountdown {
            days_until: to_winter,
            solstice: Solstice::Winter,
        }
    }
}
