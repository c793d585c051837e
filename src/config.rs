// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Volume and channel bounds for a television.
//!
//! [`Limits::default()`] matches the crate-level constants
//! ([`MIN_VOLUME`], [`MAX_VOLUME`], [`MIN_CHANNEL`], [`MAX_CHANNEL`]).
//! Custom limits can be built in code or loaded from JSON.
//!
//! # Examples
//!
//! ```
//! use television_lib::config::Limits;
//!
//! let limits = Limits::from_json(r#"{ "max_channel": 9 }"#).unwrap();
//! assert_eq!(limits.max_channel(), 9);
//! assert_eq!(limits.max_volume(), 2);
//! assert_eq!(limits.channel_count(), 10);
//! ```

use crate::error::{ParseError, Result, ValueError};
use crate::types::{MAX_CHANNEL, MAX_VOLUME, MIN_CHANNEL, MIN_VOLUME};

/// Inclusive volume and channel ranges.
///
/// Always satisfies `min_volume <= max_volume` and `min_channel <= max_channel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawLimits")]
pub struct Limits {
    min_volume: u8,
    max_volume: u8,
    min_channel: u8,
    max_channel: u8,
}

impl Limits {
    /// Creates validated limits.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidRange` if either lower bound exceeds its
    /// upper bound.
    pub fn new(
        min_volume: u8,
        max_volume: u8,
        min_channel: u8,
        max_channel: u8,
    ) -> std::result::Result<Self, ValueError> {
        if min_volume > max_volume {
            return Err(ValueError::InvalidRange {
                name: "volume",
                min: min_volume,
                max: max_volume,
            });
        }
        if min_channel > max_channel {
            return Err(ValueError::InvalidRange {
                name: "channel",
                min: min_channel,
                max: max_channel,
            });
        }
        tracing::trace!(
            min_volume,
            max_volume,
            min_channel,
            max_channel,
            "Validated television limits"
        );
        Ok(Self {
            min_volume,
            max_volume,
            min_channel,
            max_channel,
        })
    }

    /// Loads limits from a JSON object. Missing fields take default values.
    ///
    /// # Errors
    ///
    /// Returns `Error::Parse` if the JSON is malformed or a bound pair is
    /// inverted.
    pub fn from_json(json: &str) -> Result<Self> {
        let limits = serde_json::from_str(json).map_err(ParseError::from)?;
        Ok(limits)
    }

    /// Lowest volume level.
    #[must_use]
    pub const fn min_volume(&self) -> u8 {
        self.min_volume
    }

    /// Highest volume level.
    #[must_use]
    pub const fn max_volume(&self) -> u8 {
        self.max_volume
    }

    /// Lowest channel number.
    #[must_use]
    pub const fn min_channel(&self) -> u8 {
        self.min_channel
    }

    /// Highest channel number.
    #[must_use]
    pub const fn max_channel(&self) -> u8 {
        self.max_channel
    }

    /// Number of distinct channels, `max_channel - min_channel + 1`.
    #[must_use]
    pub const fn channel_count(&self) -> u16 {
        self.max_channel as u16 - self.min_channel as u16 + 1
    }

    /// Channel after `channel`, wrapping from the top back to `min_channel`.
    #[must_use]
    pub fn wrap_channel_up(&self, channel: u8) -> u8 {
        let offset = u16::from(channel) - u16::from(self.min_channel);
        self.channel_at((offset + 1) % self.channel_count())
    }

    /// Channel before `channel`, wrapping from the bottom up to `max_channel`.
    #[must_use]
    pub fn wrap_channel_down(&self, channel: u8) -> u8 {
        let count = self.channel_count();
        let offset = u16::from(channel) - u16::from(self.min_channel);
        // Adding `count` keeps the operand non-negative before the modulo.
        self.channel_at((offset + count - 1) % count)
    }

    // offset < channel_count, so the sum never exceeds max_channel
    #[allow(clippy::cast_possible_truncation)]
    fn channel_at(&self, offset: u16) -> u8 {
        (u16::from(self.min_channel) + offset) as u8
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_volume: MIN_VOLUME,
            max_volume: MAX_VOLUME,
            min_channel: MIN_CHANNEL,
            max_channel: MAX_CHANNEL,
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawLimits {
    min_volume: u8,
    max_volume: u8,
    min_channel: u8,
    max_channel: u8,
}

impl Default for RawLimits {
    fn default() -> Self {
        let limits = Limits::default();
        Self {
            min_volume: limits.min_volume,
            max_volume: limits.max_volume,
            min_channel: limits.min_channel,
            max_channel: limits.max_channel,
        }
    }
}

impl TryFrom<RawLimits> for Limits {
    type Error = ValueError;

    fn try_from(raw: RawLimits) -> std::result::Result<Self, Self::Error> {
        Self::new(
            raw.min_volume,
            raw.max_volume,
            raw.min_channel,
            raw.max_channel,
        )
    }
}
