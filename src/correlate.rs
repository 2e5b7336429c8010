use crate::flow::FlowKey;
use std::collections::HashMap;
use tracing::trace;

#[cfg(test)]
mod tests;

/// Pairs responses with the requests that originated them.
///
/// Owns all correlation state: a table of pending requests keyed by
/// normalized [`FlowKey`] and the count of completed exchanges. Presence in
/// the table IS pending status; an entry is created when a filtered-in
/// request is seen and removed the moment its response resolves, so a
/// duplicated or retransmitted response can never resolve twice.
#[derive(Debug, Default)]
pub struct Correlator {
    pending: HashMap<FlowKey, u64>,
    completed: u64,
}

impl Correlator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a request under its flow key. A second request on the same
    /// key before the first resolves overwrites the prior entry
    /// (last-request-wins); the orphaned request's response, if it ever
    /// arrives, resolves against the new entry instead.
    pub fn register_request(&mut self, key: FlowKey, sequence: u64) {
        if let Some(orphaned) = self.pending.insert(key, sequence) {
            trace!(%key, orphaned, "request replaced a pending entry");
        }
    }

    /// Resolves a response against its pending request. Returns the stored
    /// sequence number on a match, removing the entry and counting the
    /// exchange as completed. An unmatched key (never registered, already
    /// consumed, or overwritten) returns `None` with no state change.
    pub fn resolve_response(&mut self, key: FlowKey) -> Option<u64> {
        let sequence = self.pending.remove(&key)?;
        self.completed += 1;
        Some(sequence)
    }

    /// Number of requests still awaiting a response.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Number of fully resolved request/response exchanges.
    pub fn completed_count(&self) -> u64 {
        self.completed
    }

    /// Provisional sequence number for the next request: completed
    /// exchanges plus requests in flight, one-based. Reflects queue
    /// position at registration time, not final completion order, so
    /// numbers can print out of order when responses resolve out of
    /// arrival order.
    pub fn next_sequence(&self) -> u64 {
        self.completed + self.pending.len() as u64 + 1
    }
}
