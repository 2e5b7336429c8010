use super::DecodedPacket;
use crate::flow::{Endpoint, IPAddress};
use etherparse::{NetHeaders, PacketHeaders, TransportHeader};
use tracing::trace;

/// Decodes an Ethernet frame down to endpoints and TCP payload.
///
/// Returns `None` for anything the pipeline has no use for: unparseable
/// frames, non-IP packets, non-TCP transports, and TCP segments carrying
/// no application data. These are not errors; they are silently dropped.
pub fn decode_frame(frame: &[u8]) -> Option<DecodedPacket> {
    let headers = match PacketHeaders::from_ethernet_slice(frame) {
        Ok(headers) => headers,
        Err(err) => {
            trace!(error = ?err, "failed to parse packet headers");
            return None;
        }
    };

    let (src_ip, dst_ip) = match headers.net {
        Some(NetHeaders::Ipv4(ip, _)) => (IPAddress::V4(ip.source), IPAddress::V4(ip.destination)),
        Some(NetHeaders::Ipv6(ip, _)) => (IPAddress::V6(ip.source), IPAddress::V6(ip.destination)),
        _ => return None,
    };

    let tcp = match headers.transport {
        Some(TransportHeader::Tcp(tcp)) => tcp,
        _ => return None,
    };

    let payload = headers.payload.slice();
    if payload.is_empty() {
        return None;
    }

    Some(DecodedPacket {
        src: Endpoint::new(src_ip, tcp.source_port),
        dst: Endpoint::new(dst_ip, tcp.destination_port),
        payload: payload.to_vec(),
    })
}
