use super::decoder::decode_frame;
use super::{DecodedPacket, PacketSource};
use anyhow::{Context, Result};
use pcap::{Active, Capture, Device};
use tracing::debug;

const SNAPLEN: i32 = 65536;

/// Live capture over a libpcap handle on one interface.
pub struct LiveSource {
    capture: Capture<Active>,
}

impl LiveSource {
    /// Opens the interface in promiscuous mode and installs the BPF
    /// expression. Both failures are fatal setup errors.
    pub fn open(interface: &str, bpf: &str) -> Result<Self> {
        let mut capture = Capture::from_device(interface)
            .with_context(|| format!("unknown capture device {interface:?}"))?
            .promisc(true)
            .snaplen(SNAPLEN)
            .timeout(500)
            .open()
            .with_context(|| format!("failed to open capture device {interface:?}"))?;

        capture
            .filter(bpf, true)
            .with_context(|| format!("capture device rejected filter {bpf:?}"))?;

        debug!(interface, bpf, "capture handle opened");
        Ok(Self { capture })
    }
}

impl PacketSource for LiveSource {
    fn next_packet(&mut self) -> Result<Option<DecodedPacket>> {
        loop {
            match self.capture.next_packet() {
                Ok(packet) => {
                    if let Some(decoded) = decode_frame(packet.data) {
                        return Ok(Some(decoded));
                    }
                }
                Err(pcap::Error::TimeoutExpired) => continue,
                Err(pcap::Error::NoMorePackets) => return Ok(None),
                Err(err) => return Err(err).context("error reading from capture handle"),
            }
        }
    }
}

/// Prints every capture device libpcap knows about, with its addresses.
pub fn list_interfaces() -> Result<()> {
    let devices = Device::list().context("failed to enumerate capture devices")?;
    println!("Available interfaces:");
    for device in devices {
        match &device.desc {
            Some(desc) => println!("  {} ({desc})", device.name),
            None => println!("  {}", device.name),
        }
        for address in &device.addresses {
            println!("    IP: {}", address.addr);
        }
    }
    Ok(())
}
