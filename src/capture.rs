use crate::filter::FilterConfig;
use crate::flow::Endpoint;
use anyhow::Result;

pub mod decoder;
pub mod file;
pub mod live;


pub use file::FileSource;
pub use live::{LiveSource, list_interfaces};

/// A TCP packet reduced to what the pipeline needs: both endpoints and the
/// application payload. Produced once at the capture boundary; nothing
/// downstream re-inspects layers or transport kind.
#[derive(Debug, Clone)]
pub struct DecodedPacket {
    pub src: Endpoint,
    pub dst: Endpoint,
    pub payload: Vec<u8>,
}

/// Blocking feed of decoded packets in strict arrival order.
///
/// `Ok(None)` means the feed is exhausted (end of file, or the capture
/// handle was torn down); the session ends there.
pub trait PacketSource {
    fn next_packet(&mut self) -> Result<Option<DecodedPacket>>;
}

/// Capture-time predicate handed to libpcap. Without address filters only
/// port 80 traffic is worth delivering; with them, any TCP port may hold a
/// match, so the expression is broadened and filtering happens upstream.
pub fn bpf_expression(filter: &FilterConfig) -> &'static str {
    if filter.has_address_filters() {
        "tcp"
    } else {
        "tcp port 80"
    }
}
