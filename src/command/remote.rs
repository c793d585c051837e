// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Remote control button commands.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A single button press on the remote.
///
/// # Examples
///
/// ```
/// use television_lib::command::RemoteCommand;
///
/// let cmd: RemoteCommand = "ch+".parse().unwrap();
/// assert_eq!(cmd, RemoteCommand::ChannelUp);
/// assert_eq!(cmd.name(), "channel_up");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteCommand {
    /// Switch power on or off.
    TogglePower,
    /// Mute, or unmute and restore the previous volume.
    ToggleMute,
    /// Next channel, wrapping past the highest.
    ChannelUp,
    /// Previous channel, wrapping below the lowest.
    ChannelDown,
    /// Raise volume by one step, unmuting first.
    VolumeUp,
    /// Lower volume by one step, unmuting first.
    VolumeDown,
}

impl RemoteCommand {
    /// Every command, in button order.
    pub const ALL: [Self; 6] = [
        Self::TogglePower,
        Self::ToggleMute,
        Self::ChannelUp,
        Self::ChannelDown,
        Self::VolumeUp,
        Self::VolumeDown,
    ];

    /// Returns the canonical snake_case name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TogglePower => "toggle_power",
            Self::ToggleMute => "toggle_mute",
            Self::ChannelUp => "channel_up",
            Self::ChannelDown => "channel_down",
            Self::VolumeUp => "volume_up",
            Self::VolumeDown => "volume_down",
        }
    }

    /// Returns `true` for commands that still act while the power is off.
    #[must_use]
    pub const fn works_when_off(&self) -> bool {
        matches!(self, Self::TogglePower)
    }
}

impl fmt::Display for RemoteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RemoteCommand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "toggle_power" | "power" => Ok(Self::TogglePower),
            "toggle_mute" | "mute" => Ok(Self::ToggleMute),
            "channel_up" | "ch+" | "ch_up" => Ok(Self::ChannelUp),
            "channel_down" | "ch_" | "ch_down" => Ok(Self::ChannelDown),
            "volume_up" | "vol+" | "vol_up" => Ok(Self::VolumeUp),
            "volume_down" | "vol_" | "vol_down" => Ok(Self::VolumeDown),
            _ => Err(ParseError::UnknownCommand(s.to_string())),
        }
    }
}

/// Parses a sequence of commands separated by whitespace or commas.
///
/// # Errors
///
/// Returns `ParseError::UnknownCommand` for the first unrecognized token.
///
/// # Examples
///
/// ```
/// use television_lib::command::{parse_sequence, RemoteCommand};
///
/// let cmds = parse_sequence("power, vol+ vol+  mute").unwrap();
/// assert_eq!(
///     cmds,
///     vec![
///         RemoteCommand::TogglePower,
///         RemoteCommand::VolumeUp,
///         RemoteCommand::VolumeUp,
///         RemoteCommand::ToggleMute,
///     ]
/// );
/// ```
pub fn parse_sequence(input: &str) -> Result<Vec<RemoteCommand>, ParseError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}
