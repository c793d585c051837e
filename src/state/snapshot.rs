// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only view of the television state.

use std::fmt;

use crate::types::PowerState;

/// Visible state of a [`Television`](super::Television) at one point in time.
///
/// The remembered pre-mute volume is internal and not part of the snapshot.
///
/// # Examples
///
/// ```
/// use television_lib::Television;
///
/// let snap = Television::new().snapshot();
/// let json = serde_json::to_string(&snap).unwrap();
/// assert_eq!(json, r#"{"power":"OFF","muted":false,"volume":0,"channel":0}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    /// Power state.
    pub power: PowerState,
    /// Whether audio is muted.
    pub muted: bool,
    /// Volume level.
    pub volume: u8,
    /// Channel number.
    pub channel: u8,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let power = if self.power.is_on() { "True" } else { "False" };
        write!(
            f,
            "Power = {power}, Channel = {}, Volume = {}",
            self.channel, self.volume
        )
    }
}
