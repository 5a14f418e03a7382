// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cancellable timer that collapses bursts of events into one call.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;

pub struct Debounce {
    delay: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Debounce {
    pub fn new(delay: u32) -> Self {
        Debounce {
            delay,
            pending: RefCell::new(None),
        }
    }

    /// Arm `action` to run after the quiet period. Replacing the stored
    /// handle drops, and thereby clears, any previously scheduled timeout,
    /// so only the last call within the quiet period fires.
    pub fn schedule<F>(&self, action: F)
    where
        F: FnOnce() + 'static,
    {
        let timeout = Timeout::new(self.delay, action);

        *self.pending.borrow_mut() = Some(timeout);
    }
}
