//! `TimerHost` on `gloo_timers::callback::Timeout`.
//!
//! Fired timeouts stay in the map until cleared; gesture helpers always
//! clear on release, cancel, or drop.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use responsive::gesture::{TimerHost, TimerId};

#[derive(Default)]
pub struct WebTimers {
    pending: RefCell<HashMap<TimerId, Timeout>>,
    next_id: Cell<u64>,
}

impl TimerHost for WebTimers {
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let timeout = Timeout::new(delay_ms, callback);
        self.pending.borrow_mut().insert(id, timeout);
        id
    }

    fn clear_timeout(&self, id: TimerId) {
        // Dropping a Timeout clears it.
        self.pending.borrow_mut().remove(&id);
    }
}
