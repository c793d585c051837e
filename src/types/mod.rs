// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types and default bounds for the television state.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off power state
//!
//! # Constants
//!
//! The default volume range is [`MIN_VOLUME`]..=[`MAX_VOLUME`] and the default
//! channel range is [`MIN_CHANNEL`]..=[`MAX_CHANNEL`]. Volume changes saturate
//! at the bounds; channel changes wrap around.

mod power;

pub use power::PowerState;

/// Lowest volume level. Also the level forced while muted.
pub const MIN_VOLUME: u8 = 0;

/// Highest volume level.
pub const MAX_VOLUME: u8 = 2;

/// Lowest channel number.
pub const MIN_CHANNEL: u8 = 0;

/// Highest channel number.
pub const MAX_CHANNEL: u8 = 3;
