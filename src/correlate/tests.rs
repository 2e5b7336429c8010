use super::*;
use crate::flow::{Endpoint, FlowKey, IPAddress};

fn key(client_port: u16) -> FlowKey {
    let client = Endpoint::new(IPAddress::V4([10, 0, 0, 1]), client_port);
    let server = Endpoint::new(IPAddress::V4([10, 0, 0, 2]), 80);
    FlowKey::from_request(client, server)
}

#[test]
fn pending_count_tracks_unresolved_registrations() {
    let mut correlator = Correlator::new();

    for (i, port) in (5000..5004).enumerate() {
        let seq = correlator.next_sequence();
        assert_eq!(seq, i as u64 + 1);
        correlator.register_request(key(port), seq);
    }

    assert_eq!(correlator.pending_count(), 4);
    assert_eq!(correlator.completed_count(), 0);
}

#[test]
fn resolve_removes_entry_and_counts_once() {
    let mut correlator = Correlator::new();
    correlator.register_request(key(5000), 1);

    assert_eq!(correlator.resolve_response(key(5000)), Some(1));
    assert_eq!(correlator.completed_count(), 1);
    assert_eq!(correlator.pending_count(), 0);

    // A retransmitted response finds nothing to resolve.
    assert_eq!(correlator.resolve_response(key(5000)), None);
    assert_eq!(correlator.completed_count(), 1);
}

#[test]
fn unmatched_resolve_leaves_state_untouched() {
    let mut correlator = Correlator::new();
    correlator.register_request(key(5000), 1);

    assert_eq!(correlator.resolve_response(key(6000)), None);
    assert_eq!(correlator.completed_count(), 0);
    assert_eq!(correlator.pending_count(), 1);
}

#[test]
fn second_request_on_same_key_wins() {
    let mut correlator = Correlator::new();
    correlator.register_request(key(5000), 1);
    correlator.register_request(key(5000), 2);

    assert_eq!(correlator.pending_count(), 1);
    assert_eq!(correlator.resolve_response(key(5000)), Some(2));
    // The orphaned first request never completes.
    assert_eq!(correlator.resolve_response(key(5000)), None);
    assert_eq!(correlator.completed_count(), 1);
}

#[test]
fn sequence_numbers_stay_unique_with_requests_in_flight() {
    let mut correlator = Correlator::new();

    let first = correlator.next_sequence();
    correlator.register_request(key(5000), first);
    let second = correlator.next_sequence();
    correlator.register_request(key(5001), second);

    assert_eq!((first, second), (1, 2));

    correlator.resolve_response(key(5000));
    // completed=1, pending=1 -> next is 3.
    assert_eq!(correlator.next_sequence(), 3);
}
