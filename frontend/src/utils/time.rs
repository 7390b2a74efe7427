use chrono::{Datelike, Local, NaiveDate};

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// `(month, year)` of the given date, month being 1-based.
pub fn period_of(date: NaiveDate) -> (u32, i32) {
    (date.month(), date.year())
}

pub fn current_period() -> (u32, i32) {
    period_of(today_local())
}
