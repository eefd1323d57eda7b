//! Room Tariff Library
//!
//! Pure pricing math for room reservations: a flat per-room-per-night rate
//! and calendar stay-length arithmetic. No IO, no clock access - callers
//! supply the dates.
//!
//! # Example
//! ```
//! use chrono::NaiveDate;
//! use room_tariff::RatePlan;
//!
//! let plan = RatePlan::default();
//! let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let to = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
//!
//! let quote = plan.quote(2, from, to);
//! assert_eq!(quote.total, 6000);
//! ```

use chrono::NaiveDate;

/// Default nightly rate per room, in whole currency units.
pub const BASE_PER_ROOM_PER_NIGHT: i64 = 1000;

/// Signed number of nights between two calendar dates.
///
/// Zero when the dates coincide, negative when `to` precedes `from`. Callers
/// decide whether inverted ranges are acceptable; this function just reports
/// the difference.
pub fn nights(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// A flat per-room-per-night rate plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatePlan {
    base_per_room_per_night: i64,
}

impl RatePlan {
    /// Creates a rate plan with a custom nightly rate.
    pub fn new(base_per_room_per_night: i64) -> Self {
        Self {
            base_per_room_per_night,
        }
    }

    /// Returns the nightly rate per room.
    pub fn base_per_room_per_night(&self) -> i64 {
        self.base_per_room_per_night
    }

    /// Prices a stay: `base × rooms × nights`, exactly.
    ///
    /// The nights term is signed, so an inverted date range produces a zero
    /// or negative total rather than an error.
    pub fn quote(&self, rooms: u32, from: NaiveDate, to: NaiveDate) -> Quote {
        let nights = nights(from, to);
        Quote {
            rooms,
            nights,
            total: self.base_per_room_per_night * rooms as i64 * nights,
        }
    }
}

impl Default for RatePlan {
    fn default() -> Self {
        Self::new(BASE_PER_ROOM_PER_NIGHT)
    }
}

/// The priced result of a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    /// Number of rooms priced
    pub rooms: u32,
    /// Signed stay length in nights
    pub nights: i64,
    /// Total price for the stay
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_nights_spanning_days() {
        assert_eq!(nights(date(2024, 1, 1), date(2024, 1, 4)), 3);
    }

    #[test]
    fn test_nights_same_day() {
        assert_eq!(nights(date(2024, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_nights_inverted_range_is_negative() {
        assert_eq!(nights(date(2024, 1, 4), date(2024, 1, 1)), -3);
    }

    #[test]
    fn test_nights_across_month_boundary() {
        assert_eq!(nights(date(2024, 1, 30), date(2024, 2, 2)), 3);
    }

    #[test]
    fn test_quote_worked_example() {
        let quote = RatePlan::default().quote(2, date(2024, 1, 1), date(2024, 1, 4));

        assert_eq!(quote.nights, 3);
        assert_eq!(quote.total, 6000);
    }

    #[test]
    fn test_quote_zero_rooms() {
        let quote = RatePlan::default().quote(0, date(2024, 1, 1), date(2024, 1, 4));

        assert_eq!(quote.total, 0);
    }

    #[test]
    fn test_quote_zero_nights() {
        let quote = RatePlan::default().quote(3, date(2024, 1, 1), date(2024, 1, 1));

        assert_eq!(quote.total, 0);
    }

    #[test]
    fn test_quote_inverted_range_goes_negative() {
        let quote = RatePlan::default().quote(2, date(2024, 1, 4), date(2024, 1, 1));

        assert_eq!(quote.total, -6000);
    }

    #[test]
    fn test_quote_custom_rate() {
        let quote = RatePlan::new(2500).quote(1, date(2024, 6, 10), date(2024, 6, 12));

        assert_eq!(quote.total, 5000);
    }
}
