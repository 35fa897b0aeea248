// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Booking, BookingPlatform, BookingStatus, HostingStatus, Listing};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewCards {
    pub total_bookings: usize,
    pub occupancy_rate: Decimal,
    pub total_revenue: Decimal,
    pub pending_inquiries: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformShare {
    pub platform: BookingPlatform,
    pub bookings: usize,
    pub percent: Decimal,
}

pub fn overview(bookings: &[Booking], listings: &[Listing]) -> OverviewCards {
    let hosting = listings
        .iter()
        .filter(|l| l.hosting_status == HostingStatus::CurrentlyHosting)
        .count();
    OverviewCards {
        total_bookings: bookings.len(),
        occupancy_rate: percent(hosting, listings.len(), 0),
        total_revenue: bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Paid)
            .map(|b| b.amount)
            .sum(),
        pending_inquiries: bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Inquiry)
            .count(),
    }
}

/// Booking share per known platform, followed by `Other` only when present.
pub fn platform_distribution(bookings: &[Booking]) -> Vec<PlatformShare> {
    let total = bookings.len();
    let count = |p: BookingPlatform| bookings.iter().filter(|b| b.platform == p).count();
    let mut out: Vec<PlatformShare> = BookingPlatform::KNOWN
        .iter()
        .map(|&p| {
            let n = count(p);
            PlatformShare {
                platform: p,
                bookings: n,
                percent: percent(n, total, 1),
            }
        })
        .collect();
    let other = count(BookingPlatform::Other);
    if other > 0 {
        out.push(PlatformShare {
            platform: BookingPlatform::Other,
            bookings: other,
            percent: percent(other, total, 1),
        });
    }
    out
}

fn percent(part: usize, whole: usize, dp: u32) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole))
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
