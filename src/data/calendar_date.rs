use crate::error::{CalendarError, Result};
use chrono::{Datelike, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single calendar day. Always a real date; ordering is chronological.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub const MIN: CalendarDate = CalendarDate(NaiveDate::MIN);
    pub const MAX: CalendarDate = CalendarDate(NaiveDate::MAX);

    /// Returns `None` for days that do not exist, e.g. February 30.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    pub fn today() -> Self {
        CalendarDate(Local::now().date_naive())
    }

    pub fn parse(input: &str) -> Result<Self> {
        NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
            .map(CalendarDate)
            .map_err(|_| CalendarError::InvalidDate {
                input: input.to_string(),
            })
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    pub fn naive(self) -> NaiveDate {
        self.0
    }

    pub fn days_in_month(self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    pub fn month_beginning(self) -> Self {
        CalendarDate(self.0.with_day(1).unwrap_or(self.0))
    }

    pub fn month_end(self) -> Self {
        CalendarDate(self.0.with_day(self.days_in_month()).unwrap_or(self.0))
    }

    /// Moves by whole months, clamping the day to the target month's length
    /// (Jan 31 + 1 month = Feb 28/29). Saturates at [`CalendarDate::MIN`] and
    /// [`CalendarDate::MAX`].
    pub fn plus_months(self, months: i32) -> Self {
        self.checked_plus_months(months).unwrap_or(if months >= 0 {
            CalendarDate::MAX
        } else {
            CalendarDate::MIN
        })
    }

    /// Like [`CalendarDate::plus_months`], but `None` when the target month
    /// is outside the representable years.
    pub fn checked_plus_months(self, months: i32) -> Option<Self> {
        let total = self.month_index() + months as i64;
        let year = i32::try_from(total.div_euclid(12)).ok()?;
        let month = total.rem_euclid(12) as u32 + 1;
        let day = self.day().min(days_in_month(year, month));
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    pub fn minus_months(self, months: i32) -> Self {
        self.plus_months(-months)
    }

    pub fn plus_days(self, days: i64) -> Self {
        self.0
            .checked_add_signed(chrono::Duration::days(days))
            .map(CalendarDate)
            .unwrap_or(self)
    }

    /// Signed number of month boundaries between `self` and `other`:
    /// positive when `other` lies in a later month.
    pub fn months_between(self, other: CalendarDate) -> i64 {
        other.month_index() - self.month_index()
    }

    /// Inclusive on both ends.
    pub fn is_between(self, from: CalendarDate, to: CalendarDate) -> bool {
        from <= self && self <= to
    }

    pub fn is_same_month(self, other: CalendarDate) -> bool {
        self.month_index() == other.month_index()
    }

    pub fn is_weekend(self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn month_index(self) -> i64 {
        self.year() as i64 * 12 + (self.month() as i64 - 1)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        CalendarDate::parse(s)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    match (
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
        NaiveDate::from_ymd_opt(year, month, 1),
    ) {
        (Some(next), Some(first)) => next.signed_duration_since(first).num_days() as u32,
        _ => 0,
    }
}

/// Maps an ISO 8601 weekday number (1 = Monday … 7 = Sunday) to a `Weekday`.
pub fn weekday_from_iso(value: u8) -> Result<Weekday> {
    match value {
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        7 => Ok(Weekday::Sun),
        _ => Err(CalendarError::InvalidFirstDayOfWeek { value }),
    }
}

pub fn weekday_to_iso(weekday: Weekday) -> u8 {
    weekday.number_from_monday() as u8
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
