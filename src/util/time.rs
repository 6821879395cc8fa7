use chrono::{NaiveDateTime, Utc};
use chrono_tz::Europe::Amsterdam;

/// Returns the current wall-clock time in Europe/Amsterdam.
///
/// All user-facing schedule comparisons use Amsterdam local time; UTC is used
/// for storage of creation timestamps only.
pub fn amsterdam_now() -> NaiveDateTime {
    Utc::now().with_timezone(&Amsterdam).naive_local()
}

/// Default value for the `Date` modal field: today in Amsterdam as `dd MMM`.
pub fn default_modal_date() -> String {
    Utc::now().with_timezone(&Amsterdam).format("%d %b").to_string()
}
