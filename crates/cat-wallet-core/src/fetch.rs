//! Generation tracking for in-flight fetches.
//!
//! Every fetch a view issues is tagged with a [`FetchTicket`]. Only the ticket
//! of the most recent request may commit into view state; anything older is a
//! stale response and gets dropped.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    generation: u64,
}

impl FetchGuard {
    /// Start a new request, invalidating every ticket handed out before.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation = self.generation.wrapping_add(1);
        FetchTicket(self.generation)
    }

    /// Invalidate outstanding tickets without starting a request.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }
}

/// What happened when a fetch result was handed back to a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Applied,
    /// A newer request superseded this one.
    Stale,
    /// The request failed; the message is meant for an error toast.
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::FetchGuard;

    #[test]
    fn only_latest_ticket_is_current() {
        let mut guard = FetchGuard::default();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn invalidate_retires_outstanding_ticket() {
        let mut guard = FetchGuard::default();
        let ticket = guard.begin();
        guard.invalidate();
        assert!(!guard.is_current(ticket));
    }
}
