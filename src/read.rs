//! HSF decoder
//!
//! Reads framed segments sequentially until the stream is exhausted. Each
//! segment is self-contained: the InfoByte selects the topology, the length
//! field says how many symbols to emit, and (for non-run topologies) the
//! payload bits are walked MSB-first through a freshly built decode tree.
//! Trailing pad bits in a segment's final byte are discarded the moment the
//! declared symbol count is reached.

use std::io::{self, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::{
    error::{DecodeError, Result},
    topology::Topology,
    tree::DecodeTree,
};

/// A streaming reader over framed HSF segments.
///
/// Generic over any `io::Read`; callers decoding from files should hand in a
/// `BufReader`, since payload bytes are consumed one at a time.
pub struct Reader<R: io::Read> {
    inner: R,
    /// Reusable per-segment output buffer
    buf: Vec<u8>,
}

impl<R: Read> Reader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
        }
    }

    /// Consumes the reader and returns the underlying stream
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Decode the next segment into `output`.
    ///
    /// Returns `Ok(Some(n))` with the segment's symbol count, or `Ok(None)`
    /// on a clean end of stream (EOF at a segment boundary). EOF anywhere
    /// inside a segment is [`DecodeError::Truncated`].
    pub fn read_segment<W: Write>(&mut self, output: &mut W) -> Result<Option<usize>> {
        let mut info = [0u8; 1];
        match self.inner.read_exact(&mut info) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e.into()),
        }
        let Some(topology) = Topology::new(info[0]) else {
            return Err(DecodeError::InvalidTopology(info[0]).into());
        };

        let count = match self.inner.read_i32::<LittleEndian>() {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(DecodeError::Truncated("length").into());
            }
            Err(e) => return Err(e.into()),
        };
        if count < 0 {
            return Err(DecodeError::InvalidLength(count).into());
        }
        let count = count as usize;

        self.buf.clear();
        if let Some(symbol) = topology.run_symbol() {
            // Run segment: the header is the whole story.
            self.buf.resize(count, symbol.to_ascii());
        } else {
            self.decode_payload(topology, count)?;
        }
        output.write_all(&self.buf)?;
        Ok(Some(count))
    }

    fn decode_payload(&mut self, topology: Topology, count: usize) -> Result<()> {
        let tree = DecodeTree::build(topology);
        self.buf.reserve(count);
        let mut node = DecodeTree::ROOT;
        let mut byte = [0u8; 1];
        let mut emitted = 0;
        while emitted < count {
            match self.inner.read_exact(&mut byte) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    return Err(DecodeError::Truncated("payload").into());
                }
                Err(e) => return Err(e.into()),
            }
            for shift in (0..8).rev() {
                let bit = (byte[0] >> shift) & 1 == 1;
                let Some(next) = tree.step(node, bit) else {
                    return Err(DecodeError::InvalidCode(topology.id()).into());
                };
                node = next;
                if let Some(symbol) = tree.symbol(node) {
                    self.buf.push(symbol.to_ascii());
                    emitted += 1;
                    node = DecodeTree::ROOT;
                    if emitted == count {
                        // Remaining bits of this byte are segment padding.
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Decode an entire HSF stream into `output`.
pub fn decompress<R: Read, W: Write>(input: R, output: &mut W) -> Result<()> {
    let mut reader = Reader::new(input);
    while reader.read_segment(output)?.is_some() {}
    Ok(())
}
