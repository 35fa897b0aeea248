// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod bookings;
pub mod cli;
pub mod cloud;
pub mod commands;
pub mod config;
pub mod errors;
pub mod finance;
pub mod fixtures;
pub mod listings;
pub mod models;
pub mod platforms;
pub mod state;
pub mod summary;
pub mod sync;
pub mod utils;
