// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::cloud::CloudStorage;
use crate::errors::DashboardError;
use crate::models::{
    Booking, BookingPlatform, BookingStatus, ConnectionStatus, HostingStatus, Listing, Platform,
    Transaction,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Seed payload the dashboard starts from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Fixtures {
    pub bookings: Vec<Booking>,
    pub earnings: Vec<Transaction>,
    pub expenses: Vec<Transaction>,
    pub platforms: Vec<Platform>,
    pub listings: Vec<Listing>,
    pub cloud_storage: CloudStorage,
}

impl Fixtures {
    pub fn load(path: &Path) -> Result<Fixtures, DashboardError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DashboardError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let fx: Fixtures = serde_json::from_str(&raw).map_err(|source| DashboardError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "loaded {} bookings, {} earnings, {} expenses, {} platforms, {} listings from {}",
            fx.bookings.len(),
            fx.earnings.len(),
            fx.expenses.len(),
            fx.platforms.len(),
            fx.listings.len(),
            path.display()
        );
        Ok(fx)
    }

    pub fn builtin() -> Fixtures {
        Fixtures {
            bookings: builtin_bookings(),
            earnings: builtin_earnings(),
            expenses: builtin_expenses(),
            platforms: builtin_platforms(),
            listings: builtin_listings(),
            cloud_storage: CloudStorage {
                last_backup: Some(utc(2023, 5, 15, 12, 0)),
                ..CloudStorage::default()
            },
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn booking(
    id: &str,
    guest: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
    platform: BookingPlatform,
    status: BookingStatus,
    amount: Decimal,
    guests: u32,
    property: &str,
) -> Booking {
    Booking {
        id: id.into(),
        guest_name: guest.into(),
        check_in,
        check_out,
        platform,
        status,
        amount,
        guests,
        property: property.into(),
    }
}

fn builtin_bookings() -> Vec<Booking> {
    use BookingPlatform::*;
    use BookingStatus::*;
    vec![
        booking("1", "John Smith", date(2023, 10, 15), date(2023, 10, 20), Airbnb, Paid, dec!(750), 2, "Seaside Villa"),
        booking("2", "Maria Garcia", date(2023, 10, 22), date(2023, 10, 25), BookingCom, Inquiry, dec!(450), 3, "Downtown Loft"),
        booking("3", "Robert Chen", date(2023, 11, 1), date(2023, 11, 7), TripCom, Paid, dec!(1200), 4, "Mountain Cabin"),
        booking("4", "Sarah Johnson", date(2023, 11, 10), date(2023, 11, 15), Agoda, Cancelled, dec!(600), 2, "City Apartment"),
        booking("5", "David Wilson", date(2023, 11, 18), date(2023, 11, 22), Airbnb, Paid, dec!(800), 5, "Lakeside Cottage"),
    ]
}

fn tx(id: &str, date: NaiveDate, description: &str, amount: Decimal, category: Option<&str>) -> Transaction {
    Transaction {
        id: id.into(),
        date,
        description: description.into(),
        amount,
        category: category.map(str::to_string),
    }
}

fn builtin_earnings() -> Vec<Transaction> {
    vec![
        tx("1", date(2023, 6, 1), "Airbnb Booking #1234", dec!(120.00), None),
        tx("2", date(2023, 6, 3), "Booking.com Reservation #5678", dec!(95.50), None),
        tx("3", date(2023, 6, 5), "Trip.com Booking #9012", dec!(150.75), None),
        tx("4", date(2023, 6, 10), "Agoda Reservation #3456", dec!(85.25), None),
        tx("5", date(2023, 6, 15), "Airbnb Booking #7890", dec!(110.00), None),
    ]
}

fn builtin_expenses() -> Vec<Transaction> {
    vec![
        tx("1", date(2023, 6, 2), "Toilet Paper", dec!(12.99), Some("toiletries")),
        tx("2", date(2023, 6, 4), "Cleaning Service", dec!(50.00), Some("cleaner payments")),
        tx("3", date(2023, 6, 7), "All-Purpose Cleaner", dec!(8.75), Some("cleaning materials")),
        tx("4", date(2023, 6, 9), "Shampoo and Soap", dec!(15.50), Some("toiletries")),
        tx("5", date(2023, 6, 12), "Cleaning Service", dec!(50.00), Some("cleaner payments")),
        tx("6", date(2023, 6, 14), "Disinfectant Spray", dec!(7.25), Some("cleaning materials")),
    ]
}

fn builtin_platforms() -> Vec<Platform> {
    let p = |id: &str, name: &str, status, last_sync, auto_sync| Platform {
        id: id.into(),
        name: name.into(),
        status,
        last_sync: Some(last_sync),
        auto_sync,
    };
    vec![
        p("1", "Airbnb", ConnectionStatus::Connected, utc(2023, 5, 15, 10, 30), true),
        p("2", "Trip.com", ConnectionStatus::Connected, utc(2023, 5, 14, 14, 45), true),
        p("3", "Booking.com", ConnectionStatus::Error, utc(2023, 5, 10, 9, 15), false),
        p("4", "Agoda", ConnectionStatus::Disconnected, utc(2023, 5, 1, 16, 20), false),
    ]
}

fn builtin_listings() -> Vec<Listing> {
    let l = |id: &str, name: &str, platform_id: &str, status, guest: Option<&str>, range: &str, rate| Listing {
        id: id.into(),
        name: name.into(),
        platform_id: platform_id.into(),
        hosting_status: status,
        guest_name: guest.map(str::to_string),
        date_range: range.into(),
        rate,
        currency: "USD".into(),
    };
    use HostingStatus::*;
    vec![
        l("1", "Seaside Villa", "1", CurrentlyHosting, Some("John Smith"), "Oct 15 - Oct 20", dec!(150)),
        l("2", "Lakeside Cottage", "1", Available, None, "From Nov 23", dec!(200)),
        l("3", "Downtown Loft", "1", Available, None, "From Oct 26", dec!(150)),
        l("4", "Mountain Cabin", "2", CurrentlyHosting, Some("Robert Chen"), "Nov 1 - Nov 7", dec!(200)),
        l("5", "City Apartment", "3", Available, None, "From Nov 16", dec!(120)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_listings_reference_builtin_platforms() {
        let fx = Fixtures::builtin();
        assert!(crate::listings::orphaned(&fx.listings, &fx.platforms).is_empty());
    }
}
