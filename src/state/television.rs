// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The television state machine.

use std::fmt;

use crate::command::RemoteCommand;
use crate::config::Limits;
use crate::types::PowerState;

use super::Snapshot;

/// User-facing state of a television.
///
/// Holds power, mute, volume and channel, plus the volume to restore when
/// leaving mute. Fields are only reachable through the operations below, so
/// the following always hold:
///
/// - `volume` stays within the volume limits
/// - `channel` stays within the channel limits
/// - while muted, `volume` equals the minimum volume
///
/// Every operation except [`toggle_power`](Self::toggle_power) does nothing
/// while the television is off. Bounds are handled silently: volume saturates
/// and channels wrap around.
///
/// # Examples
///
/// ```
/// use television_lib::Television;
///
/// let mut tv = Television::new();
/// assert_eq!(tv.render(), "Power = False, Channel = 0, Volume = 0");
///
/// tv.toggle_power();
/// tv.channel_up();
/// tv.volume_up();
/// assert_eq!(tv.to_string(), "Power = True, Channel = 1, Volume = 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Television {
    power: PowerState,
    muted: bool,
    volume: u8,
    channel: u8,
    stored_volume: u8,
    limits: Limits,
}

impl Television {
    /// Creates a powered-off, unmuted television on the lowest channel at
    /// the lowest volume, using the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    /// Creates a television in its initial state with custom limits.
    #[must_use]
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            power: PowerState::Off,
            muted: false,
            volume: limits.min_volume(),
            channel: limits.min_channel(),
            stored_volume: limits.min_volume(),
            limits,
        }
    }

    // ========== Accessors ==========

    /// Returns `true` if the television is on.
    #[must_use]
    pub const fn is_powered(&self) -> bool {
        self.power.is_on()
    }

    /// Returns the power state.
    #[must_use]
    pub const fn power(&self) -> PowerState {
        self.power
    }

    /// Returns `true` if audio is muted.
    #[must_use]
    pub const fn is_muted(&self) -> bool {
        self.muted
    }

    /// Returns the current volume level.
    #[must_use]
    pub const fn volume(&self) -> u8 {
        self.volume
    }

    /// Returns the current channel.
    #[must_use]
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Returns the limits this television was built with.
    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    // ========== Operations ==========

    /// Switches the power on or off.
    ///
    /// Mute, volume and channel persist across power cycles.
    pub fn toggle_power(&mut self) {
        self.power = self.power.toggled();
    }

    /// Mutes, remembering the current volume, or unmutes and restores it.
    pub fn toggle_mute(&mut self) {
        if !self.is_powered() {
            return;
        }

        if self.muted {
            self.unmute();
        } else {
            self.stored_volume = self.volume;
            self.volume = self.limits.min_volume();
            self.muted = true;
        }
    }

    /// Moves to the next channel, wrapping from the highest to the lowest.
    pub fn channel_up(&mut self) {
        if !self.is_powered() {
            return;
        }
        self.channel = self.limits.wrap_channel_up(self.channel);
    }

    /// Moves to the previous channel, wrapping from the lowest to the highest.
    pub fn channel_down(&mut self) {
        if !self.is_powered() {
            return;
        }
        self.channel = self.limits.wrap_channel_down(self.channel);
    }

    /// Raises the volume by one step, stopping at the maximum.
    ///
    /// If muted, the stored volume is restored first and the step is then
    /// applied on top of it within the same call.
    pub fn volume_up(&mut self) {
        if !self.is_powered() {
            return;
        }
        if self.muted {
            self.unmute();
        }
        if self.volume < self.limits.max_volume() {
            self.volume += 1;
        }
    }

    /// Lowers the volume by one step, stopping at the minimum.
    ///
    /// If muted, the stored volume is restored first and the step is then
    /// applied on top of it within the same call.
    pub fn volume_down(&mut self) {
        if !self.is_powered() {
            return;
        }
        if self.muted {
            self.unmute();
        }
        if self.volume > self.limits.min_volume() {
            self.volume -= 1;
        }
    }

    fn unmute(&mut self) {
        self.volume = self.stored_volume;
        self.muted = false;
    }

    // ========== Commands ==========

    /// Dispatches a remote command and returns whether the visible state
    /// (power, mute, volume or channel) changed.
    pub fn apply(&mut self, command: RemoteCommand) -> bool {
        let before = self.snapshot();
        match command {
            RemoteCommand::TogglePower => self.toggle_power(),
            RemoteCommand::ToggleMute => self.toggle_mute(),
            RemoteCommand::ChannelUp => self.channel_up(),
            RemoteCommand::ChannelDown => self.channel_down(),
            RemoteCommand::VolumeUp => self.volume_up(),
            RemoteCommand::VolumeDown => self.volume_down(),
        }
        let changed = self.snapshot() != before;
        if changed {
            tracing::debug!(
                command = %command,
                power = %self.power,
                muted = self.muted,
                volume = self.volume,
                channel = self.channel,
                "Applied remote command"
            );
        }
        changed
    }

    /// Applies commands in order and returns how many changed the state.
    pub fn apply_all<I>(&mut self, commands: I) -> usize
    where
        I: IntoIterator<Item = RemoteCommand>,
    {
        commands
            .into_iter()
            .filter(|command| self.apply(*command))
            .count()
    }

    // ========== Projections ==========

    /// Returns a serializable copy of the visible state.
    #[must_use]
    pub const fn snapshot(&self) -> Snapshot {
        Snapshot {
            power: self.power,
            muted: self.muted,
            volume: self.volume,
            channel: self.channel,
        }
    }

    /// Renders `Power = <True|False>, Channel = <n>, Volume = <n>`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for Television {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Television {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.snapshot(), f)
    }
}
