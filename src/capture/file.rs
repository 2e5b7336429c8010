use super::decoder::decode_frame;
use super::{DecodedPacket, PacketSource};
use anyhow::{Context, Result, anyhow};
use pcap_parser::traits::{PcapNGPacketBlock, PcapReaderIterator};
use pcap_parser::{Block, Linktype, PcapBlockOwned, PcapError, PcapNGReader};
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

/// Replays a pcapng capture file as if the packets were arriving live.
/// Only Ethernet-linktype interfaces are considered.
pub struct FileSource {
    reader: PcapNGReader<File>,
    interfaces: Vec<Linktype>,
}

impl FileSource {
    pub fn open(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open capture file {path:?}"))?;
        let reader = PcapNGReader::new(65536, file)
            .map_err(|err| anyhow!("failed to read pcapng header from {path:?}: {err:?}"))?;
        Ok(Self {
            reader,
            interfaces: Vec::new(),
        })
    }
}

impl PacketSource for FileSource {
    fn next_packet(&mut self) -> Result<Option<DecodedPacket>> {
        loop {
            match self.reader.next() {
                Ok((offset, block)) => {
                    let decoded = handle_block(&mut self.interfaces, &block);
                    self.reader.consume(offset);
                    if decoded.is_some() {
                        return Ok(decoded);
                    }
                }
                Err(PcapError::Eof) => return Ok(None),
                Err(PcapError::Incomplete(_)) => {
                    self.reader
                        .refill()
                        .map_err(|err| anyhow!("failed to refill pcapng reader: {err:?}"))?;
                }
                Err(err) => return Err(anyhow!("error reading pcapng block: {err:?}")),
            }
        }
    }
}

fn handle_block(interfaces: &mut Vec<Linktype>, block: &PcapBlockOwned) -> Option<DecodedPacket> {
    match block {
        PcapBlockOwned::NG(Block::SectionHeader(_)) => {
            // New section: interface ids start over.
            interfaces.clear();
            None
        }
        PcapBlockOwned::NG(Block::InterfaceDescription(idb)) => {
            interfaces.push(idb.linktype);
            None
        }
        PcapBlockOwned::NG(Block::EnhancedPacket(epb)) => {
            match interfaces.get(epb.if_id as usize) {
                Some(linktype) if *linktype == Linktype::ETHERNET => {
                    decode_frame(epb.packet_data())
                }
                Some(_) => None,
                None => {
                    warn!(if_id = epb.if_id, "packet references unknown interface");
                    None
                }
            }
        }
        _ => {
            debug!("skipping unsupported pcapng block");
            None
        }
    }
}
