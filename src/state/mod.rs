// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Television state management.
//!
//! [`Television`] owns the state and its transition rules. [`Snapshot`] is a
//! plain copy of the visible fields, used for rendering and serialization.
//!
//! # Examples
//!
//! ```
//! use television_lib::command::RemoteCommand;
//! use television_lib::state::Television;
//!
//! let mut tv = Television::new();
//!
//! // Ignored while off
//! assert!(!tv.apply(RemoteCommand::VolumeUp));
//!
//! assert!(tv.apply(RemoteCommand::TogglePower));
//! assert!(tv.apply(RemoteCommand::VolumeUp));
//! assert_eq!(tv.snapshot().volume, 1);
//! ```

mod snapshot;
mod television;

pub use snapshot::Snapshot;
pub use television::Television;
