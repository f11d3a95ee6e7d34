// Date utility functions

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// The Monday starting the week that contains `date`.
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    let days_from_monday = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(days_from_monday)
}

/// The 7 consecutive dates of the Monday-starting week containing `date`.
pub fn week_dates(date: NaiveDate) -> Vec<NaiveDate> {
    let monday = monday_of_week(date);
    (0..7).map(|i| monday + Duration::days(i)).collect()
}

/// Short upper-case weekday name as shown in the grid header.
pub fn weekday_short_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "MON",
        Weekday::Tue => "TUE",
        Weekday::Wed => "WED",
        Weekday::Thu => "THU",
        Weekday::Fri => "FRI",
        Weekday::Sat => "SAT",
        Weekday::Sun => "SUN",
    }
}
