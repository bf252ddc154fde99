// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Discount policies applied to a screening date or time.
//!
//! A policy is bound to exactly one input value. Each qualifying policy
//! subtracts a flat amount from the per-seat price; the pricing engine adds
//! the amounts of all qualifying policies together.

use crate::date::MovieDate;
use crate::movie_time::MovieTime;
use serde::{Deserialize, Serialize};
use time::macros::time;

/// Day discount settings: applies on discountable days of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayDiscount {
    /// Amount subtracted per seat.
    pub amount_per_seat: u64,
}

impl Default for DayDiscount {
    fn default() -> Self {
        Self {
            amount_per_seat: 2_000,
        }
    }
}

/// A half-open time range `[from, until)`. `until = None` runs to midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Start of the range (inclusive).
    pub from: MovieTime,
    /// End of the range (exclusive), or `None` for end of day.
    pub until: Option<MovieTime>,
}

impl TimeRange {
    #[must_use]
    pub fn contains(&self, time: MovieTime) -> bool {
        time >= self.from && self.until.is_none_or(|until| time < until)
    }
}

/// Time discount settings: applies when the screening starts inside any range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDiscount {
    /// Qualifying ranges.
    pub ranges: Vec<TimeRange>,
    /// Amount subtracted per seat.
    pub amount_per_seat: u64,
}

impl Default for TimeDiscount {
    /// Morning shows before 11:00 and evening shows from 20:00.
    fn default() -> Self {
        Self {
            ranges: vec![
                TimeRange {
                    from: MovieTime::from_time(time!(0:00)),
                    until: Some(MovieTime::from_time(time!(11:00))),
                },
                TimeRange {
                    from: MovieTime::from_time(time!(20:00)),
                    until: None,
                },
            ],
            amount_per_seat: 2_000,
        }
    }
}

/// The configured set of discounts, in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRules {
    /// Day-of-month discount, if enabled.
    #[serde(default)]
    pub day: Option<DayDiscount>,
    /// Time-of-day discount, if enabled.
    #[serde(default)]
    pub time: Option<TimeDiscount>,
}

impl DiscountRules {
    /// Both the day and time discounts with their default settings.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            day: Some(DayDiscount::default()),
            time: Some(TimeDiscount::default()),
        }
    }

    /// Binds the enabled discounts to the selected date and time.
    ///
    /// The day policy comes first, then the time policy. A discount whose
    /// input has not been selected yet is left out.
    #[must_use]
    pub fn policies_for(
        &self,
        date: Option<MovieDate>,
        time: Option<MovieTime>,
    ) -> Vec<DiscountPolicy> {
        let mut policies: Vec<DiscountPolicy> = Vec::with_capacity(2);
        if let (Some(rule), Some(date)) = (self.day, date) {
            policies.push(DiscountPolicy::day(date, rule));
        }
        if let (Some(rule), Some(time)) = (&self.time, time) {
            policies.push(DiscountPolicy::time(time, rule));
        }
        policies
    }
}

/// A discount rule bound to the value it inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscountPolicy {
    /// Qualifies when the date is discountable.
    Day {
        /// The screening date.
        date: MovieDate,
        /// Amount subtracted per seat.
        amount_per_seat: u64,
    },
    /// Qualifies when the time falls in one of the ranges.
    Time {
        /// The screening time.
        time: MovieTime,
        /// Qualifying ranges.
        ranges: Vec<TimeRange>,
        /// Amount subtracted per seat.
        amount_per_seat: u64,
    },
}

impl DiscountPolicy {
    #[must_use]
    pub const fn day(date: MovieDate, rule: DayDiscount) -> Self {
        Self::Day {
            date,
            amount_per_seat: rule.amount_per_seat,
        }
    }

    #[must_use]
    pub fn time(time: MovieTime, rule: &TimeDiscount) -> Self {
        Self::Time {
            time,
            ranges: rule.ranges.clone(),
            amount_per_seat: rule.amount_per_seat,
        }
    }

    /// Short name used in price breakdowns and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Day { .. } => "day",
            Self::Time { .. } => "time",
        }
    }

    #[must_use]
    pub fn qualifies(&self) -> bool {
        match self {
            Self::Day { date, .. } => date.is_discountable(),
            Self::Time { time, ranges, .. } => ranges.iter().any(|range| range.contains(*time)),
        }
    }

    /// The per-seat discount this policy contributes, zero if it does not qualify.
    #[must_use]
    pub fn discount_per_seat(&self) -> u64 {
        if !self.qualifies() {
            return 0;
        }
        match self {
            Self::Day {
                amount_per_seat, ..
            }
            | Self::Time {
                amount_per_seat, ..
            } => *amount_per_seat,
        }
    }
}
