//! Day Ordering
//!
//! Fixed Monday-first ordering of the seven weekdays, by English name.

use chrono::Weekday;

/// Display order of day groups
pub const WEEKDAY_ORDER: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name as stored in `ClassRecord::day`
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Exact, case-sensitive match against the full names
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    WEEKDAY_ORDER.iter().copied().find(|d| weekday_name(*d) == name)
}
