//! Server-side rendition of the booking calendar contract: a minimum
//! selectable date, the disabled ranges, a per-day decoration, and the
//! outcome of a selection change.

use chrono::{Datelike, Months, NaiveDate};

use crate::availability::{compute_stay, AvailabilityIndex, DateRange, DayStatus, StayQuote};

/// Calendar for one place: the availability index plus the nightly price.
pub struct BookingCalendar {
    index: AvailabilityIndex,
    nightly_price: f64,
}

/// Outcome of a selection change.
///
/// On `Unavailable` and `TooShort` the caller clears the selection and shows
/// a message; the range is never clamped or auto-adjusted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    /// Fewer than two dates picked; nothing to price yet.
    Incomplete,
    /// Overlaps a confirmed booking.
    Unavailable,
    /// Same start and end day; a stay needs at least one night.
    TooShort,
    Quoted(StayQuote),
}

impl BookingCalendar {
    pub fn new(index: AvailabilityIndex, nightly_price: f64) -> Self {
        Self {
            index,
            nightly_price,
        }
    }

    /// Earliest selectable day.
    pub fn min_date(&self) -> NaiveDate {
        self.index.today()
    }

    pub fn disabled_ranges(&self) -> &[DateRange] {
        self.index.disabled_ranges()
    }

    pub fn nightly_price(&self) -> f64 {
        self.nightly_price
    }

    /// Per-day decoration: past first, then booked, else available.
    pub fn decorate(&self, day: NaiveDate) -> DayStatus {
        self.index.classify(day)
    }

    /// Validate a picked range end to end: completeness, overlap, length.
    pub fn selection_changed(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Selection {
        let (Some(start), Some(end)) = (start, end) else {
            return Selection::Incomplete;
        };
        // the widget hands the pair sorted; a hand-built form may not
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        if !self.index.is_range_available(start, end) {
            return Selection::Unavailable;
        }
        match compute_stay(start, end, self.nightly_price) {
            Ok(quote) => Selection::Quoted(quote),
            Err(_) => Selection::TooShort,
        }
    }

    /// Month grids starting from the current month, for rendering.
    pub fn upcoming_months(&self, count: u32) -> Vec<MonthGrid> {
        let today = self.index.today();
        let mut grids = Vec::new();
        for offset in 0..count {
            let Some(anchor) = today.checked_add_months(Months::new(offset)) else {
                break;
            };
            grids.push(self.month_grid(anchor.year(), anchor.month()));
        }
        grids
    }

    /// Grid for one month: leading blanks align the first day on a
    /// Monday-first week, then every day with its status.
    pub fn month_grid(&self, year: i32, month: u32) -> MonthGrid {
        let mut days = Vec::new();
        let mut leading_blanks = 0;
        if let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) {
            leading_blanks = first.weekday().num_days_from_monday();
            let mut day = first;
            while day.year() == year && day.month() == month {
                days.push((day, self.index.classify(day)));
                match day.succ_opt() {
                    Some(next) => day = next,
                    None => break,
                }
            }
        }
        MonthGrid {
            year,
            month,
            leading_blanks,
            days,
        }
    }
}

pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub leading_blanks: u32,
    pub days: Vec<(NaiveDate, DayStatus)>,
}

impl MonthGrid {
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

fn month_name(month: u32) -> &'static str {
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
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::parse_day;
    use crate::models::booking::{Booking, BookingStatus};
    use crate::models::user::PersonRef;
    use uuid::Uuid;

    fn day(s: &str) -> NaiveDate {
        parse_day(s).unwrap()
    }

    fn calendar_with(bookings: &[(&str, &str)], today: &str, price: f64) -> BookingCalendar {
        let bookings: Vec<Booking> = bookings
            .iter()
            .map(|(start, end)| Booking {
                id: Uuid::nil(),
                start_date: Some((*start).into()),
                end_date: Some((*end).into()),
                status: BookingStatus::Confirmed,
                message: None,
                user: PersonRef {
                    id: Uuid::nil(),
                    first_name: "Jane".into(),
                    last_name: "Doe".into(),
                },
            })
            .collect();
        BookingCalendar::new(AvailabilityIndex::build(&bookings, day(today)), price)
    }

    #[test]
    fn test_min_date_is_today() {
        let cal = calendar_with(&[], "2024-03-01", 100.0);
        assert_eq!(cal.min_date(), day("2024-03-01"));
    }

    #[test]
    fn test_selection_incomplete_without_both_dates() {
        let cal = calendar_with(&[], "2024-03-01", 100.0);
        assert_eq!(cal.selection_changed(None, None), Selection::Incomplete);
        assert_eq!(
            cal.selection_changed(Some(day("2024-03-05")), None),
            Selection::Incomplete
        );
        assert_eq!(
            cal.selection_changed(None, Some(day("2024-03-05"))),
            Selection::Incomplete
        );
    }

    #[test]
    fn test_selection_overlapping_booked_range_is_unavailable() {
        let cal = calendar_with(&[("2024-03-10", "2024-03-15")], "2024-03-01", 100.0);
        assert_eq!(
            cal.selection_changed(Some(day("2024-03-14")), Some(day("2024-03-20"))),
            Selection::Unavailable
        );
    }

    #[test]
    fn test_selection_after_booked_range_is_quoted() {
        let cal = calendar_with(&[("2024-03-10", "2024-03-15")], "2024-03-01", 100.0);
        let selection = cal.selection_changed(Some(day("2024-03-16")), Some(day("2024-03-20")));
        assert_eq!(
            selection,
            Selection::Quoted(StayQuote {
                nights: 4,
                total: 400.0
            })
        );
    }

    #[test]
    fn test_selection_same_day_is_too_short() {
        let cal = calendar_with(&[], "2024-03-01", 100.0);
        assert_eq!(
            cal.selection_changed(Some(day("2024-03-05")), Some(day("2024-03-05"))),
            Selection::TooShort
        );
    }

    #[test]
    fn test_selection_sorts_an_inverted_pair() {
        let cal = calendar_with(&[], "2024-03-01", 50.0);
        let selection = cal.selection_changed(Some(day("2024-03-08")), Some(day("2024-03-05")));
        assert_eq!(
            selection,
            Selection::Quoted(StayQuote {
                nights: 3,
                total: 150.0
            })
        );
    }

    #[test]
    fn test_month_grid_shape() {
        let cal = calendar_with(&[], "2024-03-01", 100.0);
        let grid = cal.month_grid(2024, 3);
        // March 2024 starts on a Friday and has 31 days
        assert_eq!(grid.leading_blanks, 4);
        assert_eq!(grid.days.len(), 31);
        assert_eq!(grid.title(), "March 2024");
    }

    #[test]
    fn test_month_grid_decorates_days() {
        let cal = calendar_with(&[("2024-03-10", "2024-03-12")], "2024-03-05", 100.0);
        let grid = cal.month_grid(2024, 3);
        let status_of = |n: usize| grid.days[n - 1].1;
        assert_eq!(status_of(4), DayStatus::Past);
        assert_eq!(status_of(5), DayStatus::Available);
        assert_eq!(status_of(10), DayStatus::Booked);
        assert_eq!(status_of(12), DayStatus::Booked);
        assert_eq!(status_of(13), DayStatus::Available);
    }

    #[test]
    fn test_upcoming_months_are_consecutive() {
        let cal = calendar_with(&[], "2024-11-15", 100.0);
        let grids = cal.upcoming_months(3);
        let labels: Vec<String> = grids.iter().map(|g| g.title()).collect();
        assert_eq!(labels, ["November 2024", "December 2024", "January 2025"]);
    }
}
