use super::*;
use crate::flow::{Endpoint, IPAddress};

const PAYLOAD: &[u8] = b"GET /api/users HTTP/1.1\r\nHost: example.com\r\n\r\n";

fn ep(last_octet: u8, port: u16) -> Endpoint {
    Endpoint::new(IPAddress::V4([10, 0, 0, last_octet]), port)
}

#[test]
fn empty_config_passes_everything() {
    let config = FilterConfig::default();
    assert!(config.matches_request(&ep(1, 5000), &ep(2, 80), PAYLOAD));
}

#[test]
fn source_filter_matches_substring_of_rendered_endpoint() {
    let config = FilterConfig {
        source: Some("10.0.0.1:5".into()),
        ..Default::default()
    };
    assert!(config.matches_request(&ep(1, 5000), &ep(2, 80), PAYLOAD));

    let config = FilterConfig {
        source: Some("10.0.0.9".into()),
        ..Default::default()
    };
    assert!(!config.matches_request(&ep(1, 5000), &ep(2, 80), PAYLOAD));
}

#[test]
fn destination_filters_are_or_matched() {
    let config = FilterConfig {
        destinations: vec!["10.0.0.9".into(), "10.0.0.2".into()],
        ..Default::default()
    };
    assert!(config.matches_request(&ep(1, 5000), &ep(2, 80), PAYLOAD));

    let config = FilterConfig {
        destinations: vec!["10.0.0.9".into(), "10.0.0.3".into()],
        ..Default::default()
    };
    assert!(!config.matches_request(&ep(1, 5000), &ep(2, 80), PAYLOAD));
}

#[test]
fn uri_filter_searches_the_whole_payload() {
    let config = FilterConfig {
        uri: Some("/api/users".into()),
        ..Default::default()
    };
    assert!(config.matches_request(&ep(1, 5000), &ep(2, 80), PAYLOAD));

    // Matches outside the request-line URI token too.
    let config = FilterConfig {
        uri: Some("example.com".into()),
        ..Default::default()
    };
    assert!(config.matches_request(&ep(1, 5000), &ep(2, 80), PAYLOAD));

    let config = FilterConfig {
        uri: Some("/missing".into()),
        ..Default::default()
    };
    assert!(!config.matches_request(&ep(1, 5000), &ep(2, 80), PAYLOAD));
}

#[test]
fn all_predicates_must_pass() {
    let config = FilterConfig {
        source: Some("10.0.0.1".into()),
        destinations: vec!["10.0.0.2".into()],
        uri: Some("/missing".into()),
    };
    assert!(!config.matches_request(&ep(1, 5000), &ep(2, 80), PAYLOAD));
}

#[test]
fn address_filter_presence_is_reported() {
    assert!(!FilterConfig::default().has_address_filters());
    assert!(
        FilterConfig {
            source: Some("10.".into()),
            ..Default::default()
        }
        .has_address_filters()
    );
    assert!(
        FilterConfig {
            destinations: vec!["10.".into()],
            ..Default::default()
        }
        .has_address_filters()
    );
}
