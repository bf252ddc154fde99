// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket pricing.
//!
//! This module provides pure, deterministic price calculation:
//! - Qualifying discounts are summed per seat
//! - The per-seat price is floored at zero
//! - The total is the per-seat price times the number of picked seats
//!
//! Runs on every seat toggle and every date/time change, so it is linear in
//! the number of policies and does no allocation beyond the breakdown.

use crate::discount::DiscountPolicy;
use crate::picked_seats::PickedSeats;
use serde::{Deserialize, Serialize};

/// A non-negative money amount produced by the pricing engine.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TicketPrice {
    /// The amount in the smallest currency unit.
    amount: u64,
}

impl TicketPrice {
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.amount
    }
}

impl std::fmt::Display for TicketPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.amount)
    }
}

/// One policy's contribution to a price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedDiscount {
    /// The policy name (`day`, `time`).
    pub policy: String,
    /// Whether the policy qualified.
    pub qualified: bool,
    /// Discount per seat contributed (zero if not qualified).
    pub discount_per_seat: u64,
}

/// A price together with how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Base price per seat before discounts.
    pub base_price_per_seat: u64,
    /// Price per seat after discounts.
    pub price_per_seat: u64,
    /// Number of seats priced.
    pub seat_count: usize,
    /// The total price.
    pub total: TicketPrice,
    /// Every policy in the order it was given.
    pub discounts: Vec<AppliedDiscount>,
}

/// Calculates the total price of the picked seats.
///
/// # Arguments
///
/// * `picked` - The picked seats
/// * `base_price_per_seat` - Price of one seat before discounts
/// * `policies` - Discount policies, each contributing a flat per-seat amount
///
/// # Example
///
/// ```text
/// base = 10,000, day discount = 2,000, 2 seats
/// day 20 -> (10,000 - 2,000) x 2 = 16,000
/// day 15 -> 10,000 x 2 = 20,000
/// ```
#[must_use]
pub fn calculate_total_price(
    picked: &PickedSeats,
    base_price_per_seat: u64,
    policies: &[DiscountPolicy],
) -> TicketPrice {
    let discount: u64 = policies
        .iter()
        .map(DiscountPolicy::discount_per_seat)
        .fold(0, u64::saturating_add);
    let per_seat: u64 = base_price_per_seat.saturating_sub(discount);
    total_for(per_seat, picked.len())
}

/// Same as [`calculate_total_price`], also reporting each policy's contribution.
#[must_use]
pub fn price_breakdown(
    picked: &PickedSeats,
    base_price_per_seat: u64,
    policies: &[DiscountPolicy],
) -> PriceBreakdown {
    let discounts: Vec<AppliedDiscount> = policies
        .iter()
        .map(|policy| AppliedDiscount {
            policy: policy.name().to_string(),
            qualified: policy.qualifies(),
            discount_per_seat: policy.discount_per_seat(),
        })
        .collect();

    let discount: u64 = discounts
        .iter()
        .map(|applied| applied.discount_per_seat)
        .fold(0, u64::saturating_add);
    let price_per_seat: u64 = base_price_per_seat.saturating_sub(discount);

    PriceBreakdown {
        base_price_per_seat,
        price_per_seat,
        seat_count: picked.len(),
        total: total_for(price_per_seat, picked.len()),
        discounts,
    }
}

fn total_for(per_seat: u64, seat_count: usize) -> TicketPrice {
    let count: u64 = u64::try_from(seat_count).unwrap_or(u64::MAX);
    TicketPrice {
        amount: per_seat.saturating_mul(count),
    }
}
