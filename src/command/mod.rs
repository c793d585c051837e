// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Remote control commands.
//!
//! | Command | Effect | Aliases |
//! |---------|--------|---------|
//! | [`RemoteCommand::TogglePower`] | Flip power | `power` |
//! | [`RemoteCommand::ToggleMute`] | Mute / restore volume | `mute` |
//! | [`RemoteCommand::ChannelUp`] | Next channel, wrapping | `ch+`, `ch_up` |
//! | [`RemoteCommand::ChannelDown`] | Previous channel, wrapping | `ch-`, `ch_down` |
//! | [`RemoteCommand::VolumeUp`] | Unmute, then +1 up to the ceiling | `vol+`, `vol_up` |
//! | [`RemoteCommand::VolumeDown`] | Unmute, then -1 down to the floor | `vol-`, `vol_down` |
//!
//! Every command except `TogglePower` is ignored while the television is off.

mod remote;

pub use remote::{RemoteCommand, parse_sequence};
