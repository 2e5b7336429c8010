use crate::capture::{DecodedPacket, PacketSource};
use crate::classify::{Classification, classify};
use crate::correlate::Correlator;
use crate::filter::FilterConfig;
use crate::flow::FlowKey;
use crate::render;
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info};


const RULE_WIDTH: usize = 80;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub filter: FilterConfig,
    /// The session stops once this many request/response exchanges have
    /// completed.
    pub max_completed: u64,
}

/// Drives the capture loop: classify, correlate, filter, render.
///
/// Packets are consumed one at a time in arrival order; each is processed
/// to completion before the next is pulled, so the correlator needs no
/// synchronization. The loop ends when the completed-exchange limit is
/// reached or the feed runs dry.
pub fn run<S, W>(
    source: &mut S,
    config: &SessionConfig,
    correlator: &mut Correlator,
    out: &mut W,
) -> Result<()>
where
    S: PacketSource + ?Sized,
    W: Write,
{
    if config.max_completed == 0 {
        return Ok(());
    }

    while let Some(packet) = source.next_packet()? {
        match classify(&packet.payload) {
            Classification::Ignore => {}
            Classification::Request => handle_request(&packet, config, correlator, out)?,
            Classification::Response => {
                let resolved = handle_response(&packet, correlator, out)?;
                if resolved && correlator.completed_count() >= config.max_completed {
                    info!(
                        completed = correlator.completed_count(),
                        "reached maximum completed exchanges"
                    );
                    break;
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Requests are shown optimistically, before their response arrives.
fn handle_request<W: Write>(
    packet: &DecodedPacket,
    config: &SessionConfig,
    correlator: &mut Correlator,
    out: &mut W,
) -> Result<()> {
    if !config
        .filter
        .matches_request(&packet.src, &packet.dst, &packet.payload)
    {
        debug!(src = %packet.src, dst = %packet.dst, "request filtered out");
        return Ok(());
    }

    let key = FlowKey::from_request(packet.src, packet.dst);
    let sequence = correlator.next_sequence();
    correlator.register_request(key, sequence);

    writeln!(out)?;
    writeln!(out, "[{sequence}] [REQUEST] {} -> {}", packet.src, packet.dst)?;
    writeln!(out, "{}", render::render_request(&packet.payload))?;
    out.flush()?;
    Ok(())
}

/// Returns whether the response resolved a pending request.
fn handle_response<W: Write>(
    packet: &DecodedPacket,
    correlator: &mut Correlator,
    out: &mut W,
) -> Result<bool> {
    // A response travels in the reverse direction of its request, so its
    // key is the swap of its own src/dst.
    let key = FlowKey::from_response(packet.src, packet.dst);
    let Some(sequence) = correlator.resolve_response(key) else {
        debug!(%key, "dropping orphan response");
        return Ok(false);
    };

    writeln!(out)?;
    writeln!(
        out,
        "[{sequence}] [RESPONSE] {} -> {}",
        packet.src, packet.dst
    )?;
    writeln!(out, "{}", render::render_response(&packet.payload))?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    out.flush()?;
    Ok(true)
}
