//! Comprehensive unit tests for the BillingPeriod module
//!
//! Tests cover period construction and validation, month navigation
//! across year boundaries, calendar queries, distance arithmetic,
//! ordering, and serialization.

use chrono::NaiveDate;
use core_kernel::{BillingPeriod, PeriodError};

mod construction {
    use super::*;

    #[test]
    fn test_new_accepts_valid_months() {
        for month in 1..=12 {
            assert!(BillingPeriod::new(2024, month).is_ok());
        }
    }

    #[test]
    fn test_new_rejects_month_zero() {
        assert_eq!(BillingPeriod::new(2024, 0), Err(PeriodError::InvalidMonth(0)));
    }

    #[test]
    fn test_new_rejects_month_thirteen() {
        assert_eq!(
            BillingPeriod::new(2024, 13),
            Err(PeriodError::InvalidMonth(13))
        );
    }

    #[test]
    fn test_from_date_picks_up_year_and_month() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 31).unwrap();
        let period = BillingPeriod::from_date(date);
        assert_eq!(period.year(), 2024);
        assert_eq!(period.month(), 7);
    }
}

mod navigation {
    use super::*;

    #[test]
    fn test_next_within_a_year() {
        let march = BillingPeriod::new(2024, 3).unwrap();
        assert_eq!(march.next(), BillingPeriod::new(2024, 4).unwrap());
    }

    #[test]
    fn test_next_rolls_over_december() {
        let december = BillingPeriod::new(2024, 12).unwrap();
        assert_eq!(december.next(), BillingPeriod::new(2025, 1).unwrap());
    }

    #[test]
    fn test_prev_rolls_back_january() {
        let january = BillingPeriod::new(2025, 1).unwrap();
        assert_eq!(january.prev(), BillingPeriod::new(2024, 12).unwrap());
    }

    #[test]
    fn test_walking_a_full_year() {
        let mut period = BillingPeriod::new(2024, 1).unwrap();
        for _ in 0..12 {
            period = period.next();
        }
        assert_eq!(period, BillingPeriod::new(2025, 1).unwrap());
    }
}

mod calendar_queries {
    use super::*;

    #[test]
    fn test_first_day() {
        let period = BillingPeriod::new(2024, 2).unwrap();
        assert_eq!(
            period.first_day(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_contains_dates_inside_the_month() {
        let period = BillingPeriod::new(2024, 2).unwrap();
        assert!(period.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
        assert!(period.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
    }

    #[test]
    fn test_contains_rejects_neighboring_months() {
        let period = BillingPeriod::new(2024, 2).unwrap();
        assert!(!period.contains(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    }
}

mod distance {
    use super::*;

    #[test]
    fn test_months_since_same_period_is_zero() {
        let period = BillingPeriod::new(2024, 6).unwrap();
        assert_eq!(period.months_since(&period), 0);
    }

    #[test]
    fn test_months_since_within_a_year() {
        let january = BillingPeriod::new(2024, 1).unwrap();
        let october = BillingPeriod::new(2024, 10).unwrap();
        assert_eq!(october.months_since(&january), 9);
    }

    #[test]
    fn test_months_since_across_years() {
        let start = BillingPeriod::new(2022, 11).unwrap();
        let later = BillingPeriod::new(2025, 2).unwrap();
        assert_eq!(later.months_since(&start), 27);
    }

    #[test]
    fn test_months_since_is_negative_backwards() {
        let earlier = BillingPeriod::new(2024, 3).unwrap();
        let later = BillingPeriod::new(2024, 8).unwrap();
        assert_eq!(earlier.months_since(&later), -5);
    }
}

mod ordering {
    use super::*;

    #[test]
    fn test_periods_sort_chronologically() {
        let mut periods = vec![
            BillingPeriod::new(2025, 1).unwrap(),
            BillingPeriod::new(2024, 3).unwrap(),
            BillingPeriod::new(2024, 12).unwrap(),
        ];

        periods.sort();

        assert_eq!(periods[0], BillingPeriod::new(2024, 3).unwrap());
        assert_eq!(periods[1], BillingPeriod::new(2024, 12).unwrap());
        assert_eq!(periods[2], BillingPeriod::new(2025, 1).unwrap());
    }

    #[test]
    fn test_year_dominates_month() {
        let late_2023 = BillingPeriod::new(2023, 12).unwrap();
        let early_2024 = BillingPeriod::new(2024, 1).unwrap();
        assert!(late_2023 < early_2024);
    }
}

mod display_and_serialization {
    use super::*;

    #[test]
    fn test_display_pads_month() {
        let period = BillingPeriod::new(2024, 3).unwrap();
        assert_eq!(period.to_string(), "2024-03");
    }

    #[test]
    fn test_display_double_digit_month() {
        let period = BillingPeriod::new(2024, 11).unwrap();
        assert_eq!(period.to_string(), "2024-11");
    }

    #[test]
    fn test_json_roundtrip() {
        let period = BillingPeriod::new(2024, 6).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        let deserialized: BillingPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(period, deserialized);
    }
}
