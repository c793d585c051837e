// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Television Lib - the user-facing state of a television as a small,
//! fully-enumerable state machine.
//!
//! The state covers power, channel, volume and mute. Commands mutate it by
//! fixed rules:
//!
//! - **Power**: toggles freely; all other commands are ignored while off
//! - **Channel**: wraps around at both ends
//! - **Volume**: saturates at both ends
//! - **Mute**: forces the minimum volume and restores the previous level on
//!   unmute; volume buttons unmute before stepping
//!
//! No hardware, protocol or UI is involved. Rendering the state is a pure
//! read-only projection.
//!
//! # Quick Start
//!
//! ```
//! use television_lib::Television;
//!
//! let mut tv = Television::new();
//! tv.toggle_power();
//! tv.volume_up();
//! tv.volume_up();
//! tv.toggle_mute();
//! assert_eq!(tv.render(), "Power = True, Channel = 0, Volume = 0");
//!
//! // Unmutes to 2, then the step is capped at the ceiling
//! tv.volume_up();
//! assert_eq!(tv.render(), "Power = True, Channel = 0, Volume = 2");
//! ```
//!
//! ## Driving from text
//!
//! ```
//! use television_lib::{Television, command::parse_sequence};
//!
//! # fn main() -> television_lib::Result<()> {
//! let mut tv = Television::new();
//! tv.apply_all(parse_sequence("power ch+ ch+ ch- vol+")?);
//! assert_eq!(tv.to_string(), "Power = True, Channel = 1, Volume = 1");
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom limits
//!
//! ```
//! use television_lib::{Television, config::Limits};
//!
//! # fn main() -> television_lib::Result<()> {
//! let limits = Limits::from_json(r#"{ "max_volume": 10, "max_channel": 99 }"#)?;
//! let mut tv = Television::with_limits(limits);
//! tv.toggle_power();
//! tv.channel_down();
//! assert_eq!(tv.channel(), 99);
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod config;
pub mod error;
mod shared;
pub mod state;
pub mod types;

pub use command::{RemoteCommand, parse_sequence};
pub use config::Limits;
pub use error::{Error, ParseError, Result, ValueError};
pub use shared::SharedTelevision;
pub use state::{Snapshot, Television};
pub use types::{MAX_CHANNEL, MAX_VOLUME, MIN_CHANNEL, MIN_VOLUME, PowerState};
