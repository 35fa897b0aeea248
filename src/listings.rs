// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Listing, Platform};

pub const ALL_PLATFORMS: &str = "All Platforms";
pub const UNKNOWN_PLATFORM: &str = "Unknown platform";

/// Listings on the selected platform, or every listing when nothing is selected.
pub fn listings_for_platform<'a>(listings: &'a [Listing], selected: Option<&str>) -> Vec<&'a Listing> {
    match selected {
        None => listings.iter().collect(),
        Some(id) => listings.iter().filter(|l| l.platform_id == id).collect(),
    }
}

/// Display name for the current selection. Falls back to "All Platforms"
/// for no selection and for ids that match nothing.
pub fn selected_platform_name<'a>(platforms: &'a [Platform], selected: Option<&str>) -> &'a str {
    selected
        .and_then(|id| platforms.iter().find(|p| p.id == id))
        .map(|p| p.name.as_str())
        .unwrap_or(ALL_PLATFORMS)
}

pub fn platform_name_for<'a>(platforms: &'a [Platform], listing: &Listing) -> &'a str {
    platforms
        .iter()
        .find(|p| p.id == listing.platform_id)
        .map(|p| p.name.as_str())
        .unwrap_or(UNKNOWN_PLATFORM)
}

/// Listings whose platform id references no known platform.
pub fn orphaned<'a>(listings: &'a [Listing], platforms: &[Platform]) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|l| !platforms.iter().any(|p| p.id == l.platform_id))
        .collect()
}
