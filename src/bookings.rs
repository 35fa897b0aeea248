// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Booking, BookingStatus};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const EMPTY_STATE: &str = "No bookings found matching your filters.";

/// `All` is the "no filtering" sentinel and never equals a real status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(BookingStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: BookingStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => *s == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        BookingStatus::parse(s)
            .map(StatusFilter::Only)
            .ok_or_else(|| format!("Unknown status '{}' (use all|paid|inquiry|cancelled)", s))
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(s) => f.write_str(&s.label().to_lowercase()),
        }
    }
}

/// Bookings whose status passes `status` and whose guest name or property
/// contains `search`, ignoring case. Input order is preserved.
pub fn filter_bookings<'a>(
    bookings: &'a [Booking],
    status: StatusFilter,
    search: &str,
) -> Vec<&'a Booking> {
    let needle = search.to_lowercase();
    bookings
        .iter()
        .filter(|b| status.matches(b.status))
        .filter(|b| {
            b.guest_name.to_lowercase().contains(&needle)
                || b.property.to_lowercase().contains(&needle)
        })
        .collect()
}

#[derive(Serialize)]
pub struct BookingRow {
    pub id: String,
    pub guest: String,
    pub property: String,
    pub check_in: String,
    pub check_out: String,
    pub platform: String,
    pub status: String,
    pub guests: u32,
    pub amount: String,
}

pub fn rows(bookings: &[&Booking], symbol: &str) -> Vec<BookingRow> {
    bookings
        .iter()
        .map(|b| BookingRow {
            id: b.id.clone(),
            guest: b.guest_name.clone(),
            property: b.property.clone(),
            check_in: crate::utils::fmt_date(b.check_in),
            check_out: crate::utils::fmt_date(b.check_out),
            platform: b.platform.label().to_string(),
            status: b.status.label().to_string(),
            guests: b.guests,
            amount: crate::utils::fmt_symbol(&b.amount, symbol),
        })
        .collect()
}
