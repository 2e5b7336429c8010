use std::fmt;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IPAddress {
    V4([u8; 4]),
    V6([u8; 16]),
}

impl fmt::Display for IPAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IPAddress::V4(bytes) => {
                write!(f, "{}.{}.{}.{}", bytes[0], bytes[1], bytes[2], bytes[3])
            }
            IPAddress::V6(bytes) => {
                let segments: Vec<String> = bytes
                    .chunks(2)
                    .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
                    .map(|segment| format!("{:x}", segment))
                    .collect();
                write!(f, "{}", segments.join(":"))
            }
        }
    }
}

/// An IP address and port pair, rendered as `address:port`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub ip: IPAddress,
    pub port: u16,
}

impl Endpoint {
    pub fn new(ip: IPAddress, port: u16) -> Self {
        Self { ip, port }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ip, self.port)
    }
}

/// Identifies one request/response exchange as an ORDERED endpoint pair.
///
/// The initiator is always the side that sent the request. A response
/// travels in the reverse direction, so its key is built by swapping its
/// own source and destination before any table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlowKey {
    pub initiator: Endpoint,
    pub responder: Endpoint,
}

impl FlowKey {
    /// Key for a packet carrying a request: `(src, dst)` as observed.
    pub fn from_request(src: Endpoint, dst: Endpoint) -> Self {
        FlowKey {
            initiator: src,
            responder: dst,
        }
    }

    /// Key for a packet carrying a response: source and destination are
    /// swapped so the key matches the one stored for the request.
    pub fn from_response(src: Endpoint, dst: Endpoint) -> Self {
        FlowKey {
            initiator: dst,
            responder: src,
        }
    }
}

impl fmt::Display for FlowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.initiator, self.responder)
    }
}
