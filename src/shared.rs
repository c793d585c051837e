// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thread-safe handle to a television.
//!
//! [`Television`] itself is a plain value with `&mut self` operations. When
//! several threads need to drive the same television, wrap it in a
//! [`SharedTelevision`]: every call takes the lock for its whole duration, so
//! callers never observe a half-applied command.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::command::RemoteCommand;
use crate::config::Limits;
use crate::state::{Snapshot, Television};

/// Cloneable, lock-protected handle to a [`Television`].
///
/// # Examples
///
/// ```
/// use television_lib::SharedTelevision;
/// use television_lib::command::RemoteCommand;
///
/// let tv = SharedTelevision::new();
/// let remote = tv.clone();
///
/// std::thread::spawn(move || {
///     remote.apply(RemoteCommand::TogglePower);
/// })
/// .join()
/// .unwrap();
///
/// assert!(tv.snapshot().power.is_on());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedTelevision {
    inner: Arc<RwLock<Television>>,
}

impl SharedTelevision {
    /// Creates a handle to a new television with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::from(Television::new())
    }

    /// Creates a handle to a new television with custom limits.
    #[must_use]
    pub fn with_limits(limits: Limits) -> Self {
        Self::from(Television::with_limits(limits))
    }

    /// Applies a command atomically. See [`Television::apply`].
    pub fn apply(&self, command: RemoteCommand) -> bool {
        self.inner.write().apply(command)
    }

    /// Applies a batch of commands under a single lock acquisition.
    pub fn apply_all<I>(&self, commands: I) -> usize
    where
        I: IntoIterator<Item = RemoteCommand>,
    {
        self.inner.write().apply_all(commands)
    }

    /// Runs `f` with exclusive access to the television.
    pub fn with<R>(&self, f: impl FnOnce(&mut Television) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Returns a copy of the visible state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.inner.read().snapshot()
    }

    /// Returns the rendered state line.
    #[must_use]
    pub fn render(&self) -> String {
        self.inner.read().render()
    }
}

impl From<Television> for SharedTelevision {
    fn from(tv: Television) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tv)),
        }
    }
}
