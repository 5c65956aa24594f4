//! Generation counters for gating async results.
//!
//! DESIGN
//! ======
//! Requests are fire-and-forget once issued. Each one captures a `Ticket`
//! from the owning `Generation`; when the response arrives it is applied only
//! if the ticket is still current. Advancing the generation (a newer request,
//! a panel closing) or invalidating it (component cleanup) turns every
//! outstanding ticket stale.

#[cfg(test)]
#[path = "generation_test.rs"]
mod generation_test;

/// Opaque snapshot of a [`Generation`] taken when a request is issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic request generation owned by one component instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generation {
    current: u64,
    retired: bool,
}

impl Generation {
    /// Start a new generation and return its ticket. Older tickets go stale.
    pub fn issue(&mut self) -> Ticket {
        self.advance();
        Ticket(self.current)
    }

    /// Stale every outstanding ticket without issuing a new one.
    pub fn advance(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    /// Permanently retire the owner. No ticket is current afterwards.
    pub fn invalidate(&mut self) {
        self.advance();
        self.retired = true;
    }

    /// Whether results carrying `ticket` may still be applied.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        !self.retired && self.current == ticket.0
    }
}
