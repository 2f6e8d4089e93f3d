//! Request sequence guard.
//!
//! Each refresh takes a ticket; when its response arrives the ticket is
//! checked against the latest one issued, and older responses are
//! dropped so a slow stale fetch cannot overwrite a newer result.

use std::cell::Cell;

/// Issued request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Monotonic request counter for one query.
#[derive(Debug, Default)]
pub struct RequestSeq {
    latest: Cell<u64>,
}

impl RequestSeq {
    /// Counter with no request issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request; any earlier ticket becomes stale.
    pub fn issue(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    /// `true` when `ticket` is the most recent one issued.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        let current = self.latest.get() == ticket.0;
        if !current {
            tracing::warn!(stale = ticket.0, latest = self.latest.get(), "dropping stale response");
        }
        current
    }

    /// Invalidate every outstanding ticket, e.g. on unmount.
    pub fn invalidate(&self) {
        self.latest.set(self.latest.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let seq = RequestSeq::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn invalidate_drops_in_flight_ticket() {
        let seq = RequestSeq::new();
        let ticket = seq.issue();
        seq.invalidate();
        assert!(!seq.is_current(ticket));
    }
}
