//! Indonesian date formatting.
//!
//! Dates are written the way the reservoir reports print them:
//! `7 Agustus 2024`, or `7 Agustus 2024 09:05` when the time is wanted.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

/// Indonesian name of a month. Anything outside 1..=11 is `Desember`.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Januari",
        2 => "Februari",
        3 => "Maret",
        4 => "April",
        5 => "Mei",
        6 => "Juni",
        7 => "Juli",
        8 => "Agustus",
        9 => "September",
        10 => "Oktober",
        11 => "November",
        _ => "Desember",
    }
}

/// Formats a unix timestamp in the given time zone.
pub fn tanggal_format(timestamp: i64, with_time: bool, tz: Tz) -> String {
    let utc = DateTime::<Utc>::from_timestamp(timestamp, 0).unwrap_or_default();
    tanggal_format_datetime(&utc.with_timezone(&tz), with_time)
}

pub fn tanggal_format_datetime<T: TimeZone>(dt: &DateTime<T>, with_time: bool) -> String {
    let mut out = format!("{} {} {}", dt.day(), month_name(dt.month()), dt.year());
    if with_time {
        out.push_str(&format!(" {:02}:{:02}", dt.hour(), dt.minute()));
    }
    out
}
