//! Czech date formatting for journal cards and chart axes.

use chrono::{Datelike, NaiveDate};

/// Month names in the genitive case, as used after a day number.
const MONTHS_GENITIVE: [&str; 12] = [
    "ledna",
    "února",
    "března",
    "dubna",
    "května",
    "června",
    "července",
    "srpna",
    "září",
    "října",
    "listopadu",
    "prosince",
];

const MONTHS_SHORT: [&str; 12] = [
    "led", "úno", "bře", "dub", "kvě", "čvn", "čvc", "srp", "zář", "říj", "lis", "pro",
];

/// "23. srpna 2026" style, for journal entry headers.
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}. {} {}",
        date.day(),
        MONTHS_GENITIVE[date.month0() as usize],
        date.year()
    )
}

/// "23. srp" style for chart tick labels. The input is the wire format
/// (`YYYY-MM-DD`); anything else is passed through untouched.
pub fn format_day_month(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => format!("{}. {}", date.day(), MONTHS_SHORT[date.month0() as usize]),
        Err(_) => raw.to_string(),
    }
}
