//! Call records
//!
//! A call record is the read-only usage collaborator contracts rate
//! against: who called whom, when the call connected, and how long it
//! lasted. Records are produced by the ingestion layer and never change
//! once constructed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{BillingPeriod, CallId};

/// A single completed call on a phone line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallRecord {
    /// Unique record identifier
    id: CallId,
    /// Number the call originated from
    src_number: String,
    /// Number the call was placed to
    dst_number: String,
    /// When the call connected
    connect_time: DateTime<Utc>,
    /// Call length in seconds
    duration_secs: u32,
}

impl CallRecord {
    /// Creates a new call record
    pub fn new(
        src_number: impl Into<String>,
        dst_number: impl Into<String>,
        connect_time: DateTime<Utc>,
        duration_secs: u32,
    ) -> Self {
        Self {
            id: CallId::new_v7(),
            src_number: src_number.into(),
            dst_number: dst_number.into(),
            connect_time,
            duration_secs,
        }
    }

    /// Returns the record identifier
    pub fn id(&self) -> CallId {
        self.id
    }

    /// Returns the originating number
    pub fn src_number(&self) -> &str {
        &self.src_number
    }

    /// Returns the dialed number
    pub fn dst_number(&self) -> &str {
        &self.dst_number
    }

    /// Returns when the call connected
    pub fn connect_time(&self) -> DateTime<Utc> {
        self.connect_time
    }

    /// Returns the call length in seconds
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Returns the billing period the call lands in
    pub fn period(&self) -> BillingPeriod {
        BillingPeriod::from_date(self.connect_time.date_naive())
    }

    /// Returns the minutes chargeable for this call
    ///
    /// Duration rounds up to the next whole minute: a one-second
    /// connection bills a full minute, while a zero-second call bills
    /// nothing. Every plan's rating policy starts from this figure.
    pub fn billable_minutes(&self) -> u32 {
        self.duration_secs.div_ceil(60)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn billable_minutes_is_ceiling_division(duration in 0u32..1_000_000u32) {
            let connect_time = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
            let record = CallRecord::new("486-555-0100", "486-555-0101", connect_time, duration);

            let expected = (duration + 59) / 60;
            prop_assert_eq!(record.billable_minutes(), expected);
        }

        #[test]
        fn billable_minutes_covers_duration(duration in 0u32..1_000_000u32) {
            let connect_time = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
            let record = CallRecord::new("486-555-0100", "486-555-0101", connect_time, duration);

            let minutes = record.billable_minutes();
            prop_assert!(minutes as u64 * 60 >= duration as u64);
            if duration > 0 {
                prop_assert!((minutes as u64 - 1) * 60 < duration as u64);
            }
        }
    }
}
