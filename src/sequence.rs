//! Request sequencing for UI slots
//!
//! Each slot (prediction panel, insight card) owns a generation counter.
//! Starting a request bumps the counter; a response may only touch the UI
//! while its ticket still matches the latest generation.

use std::cell::Cell;

/// Proof that a request was started at a given generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Generation counter for one UI slot
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: Cell<u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket
    pub fn begin(&self) -> Ticket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        Ticket(next)
    }

    /// Whether `ticket` belongs to the most recent request
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}
