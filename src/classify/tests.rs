use super::*;

#[test]
fn method_prefixes_classify_as_requests() {
    for payload in [
        &b"GET /index.html HTTP/1.1\r\n"[..],
        b"POST /submit HTTP/1.1\r\n",
        b"PUT /thing HTTP/1.1\r\n",
        b"DELETE /thing HTTP/1.1\r\n",
        b"HEAD / HTTP/1.1\r\n",
        b"OPTIONS * HTTP/1.1\r\n",
        b"PATCH /thing HTTP/1.1\r\n",
    ] {
        assert_eq!(classify(payload), Classification::Request);
    }
}

#[test]
fn status_line_classifies_as_response() {
    assert_eq!(
        classify(b"HTTP/1.1 200 OK\r\n"),
        Classification::Response
    );
}

#[test]
fn prefix_match_is_case_sensitive() {
    assert_eq!(classify(b"get / HTTP/1.1\r\n"), Classification::Ignore);
    assert_eq!(classify(b"http/1.1 200 OK\r\n"), Classification::Ignore);
}

#[test]
fn non_http_payloads_are_ignored() {
    assert_eq!(classify(b""), Classification::Ignore);
    assert_eq!(classify(b"\x16\x03\x01\x02\x00"), Classification::Ignore);
    assert_eq!(classify(b"SSH-2.0-OpenSSH_9.6\r\n"), Classification::Ignore);
}
