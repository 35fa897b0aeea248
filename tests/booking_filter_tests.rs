// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use hostboard::bookings::{StatusFilter, filter_bookings};
use hostboard::fixtures::Fixtures;
use hostboard::models::{Booking, BookingPlatform, BookingStatus};
use rust_decimal_macros::dec;

fn booking(id: &str, guest: &str, property: &str, status: BookingStatus) -> Booking {
    Booking {
        id: id.into(),
        guest_name: guest.into(),
        check_in: chrono::NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
        check_out: chrono::NaiveDate::from_ymd_opt(2023, 10, 3).unwrap(),
        platform: BookingPlatform::Airbnb,
        status,
        amount: dec!(100),
        guests: 2,
        property: property.into(),
    }
}

fn ids(v: &[&Booking]) -> Vec<String> {
    v.iter().map(|b| b.id.clone()).collect()
}

#[test]
fn paid_filter_returns_only_the_paid_booking() {
    let bookings = vec![
        booking("1", "Ann", "Villa", BookingStatus::Paid),
        booking("2", "Ben", "Loft", BookingStatus::Inquiry),
        booking("3", "Cat", "Cabin", BookingStatus::Cancelled),
    ];
    let out = filter_bookings(&bookings, StatusFilter::Only(BookingStatus::Paid), "");
    assert_eq!(ids(&out), vec!["1"]);
}

#[test]
fn all_with_empty_search_is_identity_in_order() {
    let fx = Fixtures::builtin();
    let out = filter_bookings(&fx.bookings, StatusFilter::All, "");
    assert_eq!(out.len(), fx.bookings.len());
    for (a, b) in out.iter().zip(fx.bookings.iter()) {
        assert_eq!(*a, b);
    }
}

#[test]
fn search_is_case_insensitive_on_guest_or_property() {
    let fx = Fixtures::builtin();
    assert_eq!(ids(&filter_bookings(&fx.bookings, StatusFilter::All, "SMITH")), vec!["1"]);
    assert_eq!(ids(&filter_bookings(&fx.bookings, StatusFilter::All, "cabin")), vec!["3"]);
    // "o" appears in several guests and properties; order must follow input
    let out = filter_bookings(&fx.bookings, StatusFilter::All, "o");
    let got = ids(&out);
    let mut sorted = got.clone();
    sorted.sort();
    assert_eq!(got, sorted);
}

#[test]
fn status_and_search_must_both_hold() {
    let fx = Fixtures::builtin();
    let out = filter_bookings(&fx.bookings, StatusFilter::Only(BookingStatus::Paid), "loft");
    assert!(out.is_empty());
    let out = filter_bookings(&fx.bookings, StatusFilter::Only(BookingStatus::Inquiry), "loft");
    assert_eq!(ids(&out), vec!["2"]);
}

#[test]
fn every_result_satisfies_predicates() {
    let fx = Fixtures::builtin();
    for status in [
        StatusFilter::All,
        StatusFilter::Only(BookingStatus::Paid),
        StatusFilter::Only(BookingStatus::Inquiry),
        StatusFilter::Only(BookingStatus::Cancelled),
    ] {
        for q in ["", "a", "VILLA", "zzz"] {
            for b in filter_bookings(&fx.bookings, status, q) {
                assert!(status.matches(b.status));
                let q = q.to_lowercase();
                assert!(
                    b.guest_name.to_lowercase().contains(&q)
                        || b.property.to_lowercase().contains(&q)
                );
            }
        }
    }
}

#[test]
fn unknown_status_label_falls_back() {
    let b: Booking = serde_json::from_str(
        r#"{"id":"9","guestName":"X","checkIn":"2023-01-01","checkOut":"2023-01-02",
            "platform":"Vrbo","status":"refunded","amount":"10","guests":1,"property":"P"}"#,
    )
    .unwrap();
    assert_eq!(b.status, BookingStatus::Unknown);
    assert_eq!(b.status.label(), "Unknown");
    assert_eq!(b.platform, BookingPlatform::Other);
    let bookings = vec![b];
    assert!(filter_bookings(&bookings, StatusFilter::Only(BookingStatus::Paid), "").is_empty());
    assert_eq!(filter_bookings(&bookings, StatusFilter::All, "").len(), 1);
}
