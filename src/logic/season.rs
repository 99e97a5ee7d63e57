//! Calendar helpers. Every function takes the date explicitly.

use crate::models::Season;
use chrono::{Datelike, NaiveDate};

/// Sowing season in effect for a calendar month (1-12).
pub fn season_for_month(month: u32) -> Season {
    match month {
        6..=10 => Season::Kharif,
        11 | 12 | 1..=3 => Season::Rabi,
        _ => Season::Zaid,
    }
}

pub fn current_season(date: NaiveDate) -> Season {
    season_for_month(date.month())
}

/// "Kharif (Monsoon)", "Rabi (Winter)" or "Zaid (Summer)".
pub fn current_season_label(date: NaiveDate) -> &'static str {
    current_season(date).label()
}

/// Whether `month` is a favourable sowing month for a profile's crop season.
///
/// The Zaid window here runs April through June and so overlaps the first
/// Kharif month; this is wider than `season_for_month`.
pub fn in_sowing_window(season: Season, month: u32) -> bool {
    match season {
        Season::Kharif => (6..=10).contains(&month),
        Season::Rabi => month >= 11 || month <= 3,
        Season::Zaid => (4..=6).contains(&month),
    }
}

pub fn is_winter(date: NaiveDate) -> bool {
    matches!(date.month(), 12 | 1 | 2)
}

pub fn is_summer(date: NaiveDate) -> bool {
    (4..=6).contains(&date.month())
}

pub fn is_monsoon(date: NaiveDate) -> bool {
    (6..=9).contains(&date.month())
}

/// Hours of sunlight gained or lost to the season. Assumes the northern
/// hemisphere calendar; southern latitudes get the opposite sign.
pub fn seasonal_sunlight_adjustment(date: NaiveDate, lat: f64) -> f64 {
    match date.month() {
        6..=8 => {
            if lat > 0.0 {
                2.0
            } else {
                -1.0
            }
        }
        12 | 1 | 2 => {
            if lat > 0.0 {
                -2.0
            } else {
                1.0
            }
        }
        _ => 0.0,
    }
}

/// Daily sunlight hours in [6, 14], rounded to one decimal.
pub fn sunlight_hours(lat: f64, date: NaiveDate) -> f64 {
    let hours = 12.0 - lat.abs() * 0.1 + seasonal_sunlight_adjustment(date, lat);
    (hours.clamp(6.0, 14.0) * 10.0).round() / 10.0
}
