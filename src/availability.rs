//! Booking availability calculator.
//!
//! Pure calendar-day logic behind the place-details page: which days are
//! selectable, whether a candidate range collides with an existing confirmed
//! booking, and what a validated stay costs. All comparisons operate on
//! normalized calendar days (`NaiveDate`); the index is built once per
//! bookings snapshot and is read-only afterwards.

use chrono::NaiveDate;

use crate::error::PageError;
use crate::models::booking::{Booking, BookingStatus};

pub const DATE_FMT: &str = "%Y-%m-%d";

/// Parse a calendar-day value from the wire.
///
/// Accepts plain `YYYY-MM-DD` as well as datetime strings; anything after
/// the day part is dropped, so two values denoting the same calendar day
/// always compare equal.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let day_part = raw
        .split(|c| c == 'T' || c == ' ')
        .next()
        .unwrap_or(raw);
    NaiveDate::parse_from_str(day_part, DATE_FMT).ok()
}

/// The normalized date range of a booking, if both dates are usable.
pub fn booking_range(booking: &Booking) -> Option<DateRange> {
    let start = parse_day(booking.start_date.as_deref()?)?;
    let end = parse_day(booking.end_date.as_deref()?)?;
    DateRange::new(start, end)
}

/// Closed interval of calendar days, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Standard closed-interval intersection test.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

/// How a single calendar day renders and whether it can be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Past,
    Booked,
    Available,
}

impl DayStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            DayStatus::Past => "past-date",
            DayStatus::Booked => "booked-date",
            DayStatus::Available => "available-date",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DayStatus::Past => "Past date",
            DayStatus::Booked => "Already booked",
            DayStatus::Available => "Available",
        }
    }
}

/// Disabled-range index for one bookings snapshot.
///
/// Ranges are kept exactly as the bookings describe them: overlapping
/// confirmed bookings are not merged, and each still blocks its own days.
#[derive(Debug, Clone)]
pub struct AvailabilityIndex {
    today: NaiveDate,
    ranges: Vec<DateRange>,
}

impl AvailabilityIndex {
    /// Build the index from a bookings snapshot.
    ///
    /// Only confirmed bookings whose end is today or later become disabled
    /// ranges; past confirmed bookings cannot affect future selection.
    /// Records with malformed or missing dates are skipped, not fatal.
    pub fn build(bookings: &[Booking], today: NaiveDate) -> Self {
        let mut ranges = Vec::new();
        for booking in bookings {
            if booking.status != BookingStatus::Confirmed {
                continue;
            }
            let Some(range) = booking_range(booking) else {
                tracing::warn!(booking = %booking.id, "skipping booking with unusable dates");
                continue;
            };
            if range.end >= today {
                ranges.push(range);
            }
        }
        Self { today, ranges }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn disabled_ranges(&self) -> &[DateRange] {
        &self.ranges
    }

    /// Classify one calendar day. Past is checked before booked: a past day
    /// inside a booked range still renders as past.
    pub fn classify(&self, day: NaiveDate) -> DayStatus {
        if day < self.today {
            return DayStatus::Past;
        }
        if self.ranges.iter().any(|r| r.contains(day)) {
            return DayStatus::Booked;
        }
        DayStatus::Available
    }

    /// A candidate range is available iff it overlaps none of the disabled
    /// ranges.
    pub fn is_range_available(&self, start: NaiveDate, end: NaiveDate) -> bool {
        let candidate = DateRange { start, end };
        !self.ranges.iter().any(|r| r.overlaps(&candidate))
    }
}

/// Night count and total for a validated stay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StayQuote {
    pub nights: i64,
    pub total: f64,
}

/// Price a stay. Requires at least one night (`start < end`); a zero-night
/// range is rejected here, before anything reaches the API.
///
/// Day-granularity subtraction gives the night count exactly, so no
/// daylight-saving rounding is needed.
pub fn compute_stay(
    start: NaiveDate,
    end: NaiveDate,
    nightly_price: f64,
) -> Result<StayQuote, PageError> {
    if start >= end {
        return Err(PageError::validation(
            "A booking must cover at least one night",
        ));
    }
    let nights = (end - start).num_days();
    Ok(StayQuote {
        nights,
        total: nights as f64 * nightly_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::PersonRef;
    use uuid::Uuid;

    fn day(s: &str) -> NaiveDate {
        parse_day(s).unwrap()
    }

    fn booking(start: Option<&str>, end: Option<&str>, status: BookingStatus) -> Booking {
        Booking {
            id: Uuid::nil(),
            start_date: start.map(str::to_string),
            end_date: end.map(str::to_string),
            status,
            message: None,
            user: PersonRef {
                id: Uuid::nil(),
                first_name: "Jane".into(),
                last_name: "Doe".into(),
            },
        }
    }

    fn confirmed(start: &str, end: &str) -> Booking {
        booking(Some(start), Some(end), BookingStatus::Confirmed)
    }

    #[test]
    fn test_parse_day_accepts_dates_and_datetimes() {
        assert_eq!(parse_day("2024-03-10"), Some(day("2024-03-10")));
        assert_eq!(parse_day("2024-03-10T14:30:00"), Some(day("2024-03-10")));
        assert_eq!(parse_day("2024-03-10 14:30:00"), Some(day("2024-03-10")));
        assert_eq!(parse_day(" 2024-03-10 "), Some(day("2024-03-10")));
    }

    #[test]
    fn test_parse_day_rejects_garbage() {
        assert_eq!(parse_day(""), None);
        assert_eq!(parse_day("not-a-date"), None);
        assert_eq!(parse_day("2024-13-40"), None);
    }

    #[test]
    fn test_same_day_compares_equal_regardless_of_time() {
        assert_eq!(parse_day("2024-03-10T00:00:01"), parse_day("2024-03-10T23:59:59"));
    }

    #[test]
    fn test_index_ignores_non_confirmed_bookings() {
        let today = day("2024-03-01");
        let bookings = vec![
            booking(Some("2024-03-10"), Some("2024-03-15"), BookingStatus::Pending),
            booking(Some("2024-03-10"), Some("2024-03-15"), BookingStatus::Cancelled),
            booking(Some("2024-03-10"), Some("2024-03-15"), BookingStatus::Completed),
        ];
        let index = AvailabilityIndex::build(&bookings, today);
        assert!(index.disabled_ranges().is_empty());
        assert_eq!(index.classify(day("2024-03-12")), DayStatus::Available);
    }

    #[test]
    fn test_empty_booking_list_leaves_every_future_day_available() {
        let today = day("2024-03-01");
        let index = AvailabilityIndex::build(&[], today);
        assert!(index.disabled_ranges().is_empty());
        assert_eq!(index.classify(today), DayStatus::Available);
        assert_eq!(index.classify(day("2025-01-01")), DayStatus::Available);
    }

    #[test]
    fn test_index_excludes_fully_past_confirmed_bookings() {
        let today = day("2024-03-01");
        let bookings = vec![confirmed("2024-02-10", "2024-02-15")];
        let index = AvailabilityIndex::build(&bookings, today);
        assert!(index.disabled_ranges().is_empty());
    }

    #[test]
    fn test_index_keeps_booking_straddling_today() {
        let today = day("2024-03-01");
        let bookings = vec![confirmed("2024-02-28", "2024-03-03")];
        let index = AvailabilityIndex::build(&bookings, today);
        assert_eq!(index.disabled_ranges().len(), 1);
        assert_eq!(index.classify(day("2024-03-02")), DayStatus::Booked);
    }

    #[test]
    fn test_index_skips_malformed_and_missing_dates() {
        let today = day("2024-03-01");
        let bookings = vec![
            booking(Some("garbage"), Some("2024-03-15"), BookingStatus::Confirmed),
            booking(None, Some("2024-03-15"), BookingStatus::Confirmed),
            booking(Some("2024-03-10"), None, BookingStatus::Confirmed),
            // inverted range, cannot be normalized
            confirmed("2024-03-20", "2024-03-10"),
            confirmed("2024-03-10", "2024-03-15"),
        ];
        let index = AvailabilityIndex::build(&bookings, today);
        assert_eq!(index.disabled_ranges().len(), 1);
    }

    #[test]
    fn test_every_day_of_a_confirmed_booking_classifies_booked() {
        let today = day("2024-03-01");
        let index = AvailabilityIndex::build(&[confirmed("2024-03-10", "2024-03-15")], today);
        let mut d = day("2024-03-10");
        while d <= day("2024-03-15") {
            assert_eq!(index.classify(d), DayStatus::Booked);
            d = d.succ_opt().unwrap();
        }
        assert_eq!(index.classify(day("2024-03-09")), DayStatus::Available);
        assert_eq!(index.classify(day("2024-03-16")), DayStatus::Available);
    }

    #[test]
    fn test_past_takes_precedence_over_booked() {
        let today = day("2024-03-12");
        let index = AvailabilityIndex::build(&[confirmed("2024-03-10", "2024-03-15")], today);
        // 10th and 11th are inside the booked range but already past
        assert_eq!(index.classify(day("2024-03-10")), DayStatus::Past);
        assert_eq!(index.classify(day("2024-03-11")), DayStatus::Past);
        assert_eq!(index.classify(day("2024-03-12")), DayStatus::Booked);
    }

    #[test]
    fn test_any_past_day_is_past_regardless_of_bookings() {
        let today = day("2024-03-12");
        let index = AvailabilityIndex::build(&[], today);
        assert_eq!(index.classify(day("2024-03-11")), DayStatus::Past);
        assert_eq!(index.classify(day("2020-01-01")), DayStatus::Past);
    }

    #[test]
    fn test_overlapping_confirmed_bookings_both_block() {
        let today = day("2024-03-01");
        let index = AvailabilityIndex::build(
            &[confirmed("2024-03-10", "2024-03-14"), confirmed("2024-03-12", "2024-03-18")],
            today,
        );
        // unmerged: two ranges, and the union of days is blocked
        assert_eq!(index.disabled_ranges().len(), 2);
        assert_eq!(index.classify(day("2024-03-13")), DayStatus::Booked);
        assert_eq!(index.classify(day("2024-03-17")), DayStatus::Booked);
        assert!(!index.is_range_available(day("2024-03-16"), day("2024-03-20")));
    }

    #[test]
    fn test_candidate_sharing_boundary_days_overlaps() {
        let today = day("2024-03-01");
        let index = AvailabilityIndex::build(&[confirmed("2024-03-10", "2024-03-15")], today);
        // shares 2024-03-14/15
        assert!(!index.is_range_available(day("2024-03-14"), day("2024-03-20")));
        // single shared edge day on each side
        assert!(!index.is_range_available(day("2024-03-15"), day("2024-03-20")));
        assert!(!index.is_range_available(day("2024-03-05"), day("2024-03-10")));
    }

    #[test]
    fn test_adjacent_candidate_does_not_overlap() {
        let today = day("2024-03-01");
        let index = AvailabilityIndex::build(&[confirmed("2024-03-10", "2024-03-15")], today);
        assert!(index.is_range_available(day("2024-03-16"), day("2024-03-20")));
        assert!(index.is_range_available(day("2024-03-05"), day("2024-03-09")));
    }

    #[test]
    fn test_candidate_swallowing_a_disabled_range_overlaps() {
        let today = day("2024-03-01");
        let index = AvailabilityIndex::build(&[confirmed("2024-03-10", "2024-03-12")], today);
        assert!(!index.is_range_available(day("2024-03-05"), day("2024-03-20")));
    }

    #[test]
    fn test_range_availability_invariant_under_reordering() {
        let today = day("2024-03-01");
        let a = confirmed("2024-03-10", "2024-03-12");
        let b = confirmed("2024-04-01", "2024-04-05");
        let c = confirmed("2024-05-20", "2024-05-22");
        let forward = AvailabilityIndex::build(&[a.clone(), b.clone(), c.clone()], today);
        let reversed = AvailabilityIndex::build(&[c, b, a], today);
        let candidates = [
            (day("2024-03-11"), day("2024-03-13")),
            (day("2024-03-13"), day("2024-03-31")),
            (day("2024-04-04"), day("2024-05-21")),
            (day("2024-06-01"), day("2024-06-10")),
        ];
        for (start, end) in candidates {
            assert_eq!(
                forward.is_range_available(start, end),
                reversed.is_range_available(start, end),
            );
        }
    }

    #[test]
    fn test_compute_stay_two_nights() {
        let quote = compute_stay(day("2024-01-01"), day("2024-01-03"), 100.0).unwrap();
        assert_eq!(quote.nights, 2);
        assert_eq!(quote.total, 200.0);
    }

    #[test]
    fn test_compute_stay_single_night() {
        let quote = compute_stay(day("2024-01-01"), day("2024-01-02"), 79.5).unwrap();
        assert_eq!(quote.nights, 1);
        assert_eq!(quote.total, 79.5);
    }

    #[test]
    fn test_compute_stay_rejects_zero_nights() {
        assert!(compute_stay(day("2024-01-01"), day("2024-01-01"), 100.0).is_err());
    }

    #[test]
    fn test_compute_stay_rejects_inverted_range() {
        assert!(compute_stay(day("2024-01-03"), day("2024-01-01"), 100.0).is_err());
    }

    #[test]
    fn test_compute_stay_across_dst_transition_counts_whole_nights() {
        // Europe's spring-forward weekend, 2024-03-30 -> 2024-03-31
        let quote = compute_stay(day("2024-03-29"), day("2024-04-01"), 50.0).unwrap();
        assert_eq!(quote.nights, 3);
        assert_eq!(quote.total, 150.0);
    }
}
