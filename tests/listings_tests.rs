// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use hostboard::fixtures::Fixtures;
use hostboard::listings::{
    ALL_PLATFORMS, UNKNOWN_PLATFORM, listings_for_platform, orphaned, platform_name_for,
    selected_platform_name,
};
use hostboard::models::{HostingStatus, Listing};
use rust_decimal_macros::dec;

#[test]
fn selecting_a_platform_scopes_listings() {
    let fx = Fixtures::builtin();
    let on_one = listings_for_platform(&fx.listings, Some("1"));
    assert_eq!(on_one.len(), 3);
    assert!(on_one.iter().all(|l| l.platform_id == "1"));
    assert_eq!(listings_for_platform(&fx.listings, Some("2")).len(), 1);
    assert!(listings_for_platform(&fx.listings, Some("99")).is_empty());
}

#[test]
fn no_selection_returns_everything_in_order() {
    let fx = Fixtures::builtin();
    let all = listings_for_platform(&fx.listings, None);
    let ids: Vec<&str> = all.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn name_resolution_falls_back() {
    let fx = Fixtures::builtin();
    assert_eq!(selected_platform_name(&fx.platforms, Some("2")), "Trip.com");
    assert_eq!(selected_platform_name(&fx.platforms, None), ALL_PLATFORMS);
    assert_eq!(selected_platform_name(&fx.platforms, Some("99")), ALL_PLATFORMS);
    assert_eq!(selected_platform_name(&[], Some("1")), ALL_PLATFORMS);
}

#[test]
fn orphaned_listings_are_kept_and_reported() {
    let fx = Fixtures::builtin();
    let mut listings = fx.listings.clone();
    listings.push(Listing {
        id: "6".into(),
        name: "Harbor Studio".into(),
        platform_id: "42".into(),
        hosting_status: HostingStatus::Available,
        guest_name: None,
        date_range: "From Dec 1".into(),
        rate: dec!(95),
        currency: "USD".into(),
    });
    assert_eq!(listings_for_platform(&listings, None).len(), 6);
    assert_eq!(listings_for_platform(&listings, Some("42")).len(), 1);
    let orphans = orphaned(&listings, &fx.platforms);
    assert_eq!(orphans.len(), 1);
    assert_eq!(platform_name_for(&fx.platforms, orphans[0]), UNKNOWN_PLATFORM);
}
