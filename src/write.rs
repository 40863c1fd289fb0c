//! HSF encoder
//!
//! Validates an input sequence, asks the planner for a segmentation, and
//! emits the framed stream: per segment an InfoByte, a little-endian 32-bit
//! symbol count, and (for non-run topologies) the code words packed
//! MSB-first with the tail zero-padded to a byte boundary. Nothing is
//! written until the input has validated, so a failed call leaves the sink
//! untouched apart from an already-started stream being truncated.

use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use crate::{
    error::{EncodeError, Result},
    nuc::Nucleotide,
    planner::{plan, Segment},
    topology::Code,
};

/// Packs code words into bytes, first bit written landing in bit 7.
struct BitWriter<'a, W: Write> {
    inner: &'a mut W,
    acc: u8,
    nbits: u8,
}

impl<'a, W: Write> BitWriter<'a, W> {
    fn new(inner: &'a mut W) -> Self {
        Self {
            inner,
            acc: 0,
            nbits: 0,
        }
    }

    fn push(&mut self, code: Code) -> io::Result<()> {
        for idx in 0..code.len() {
            self.acc = (self.acc << 1) | u8::from(code.bit(idx));
            self.nbits += 1;
            if self.nbits == 8 {
                self.inner.write_u8(self.acc)?;
                self.acc = 0;
                self.nbits = 0;
            }
        }
        Ok(())
    }

    /// Flush a partial byte, zero-filling the low-order side.
    fn finish(self) -> io::Result<()> {
        if self.nbits > 0 {
            self.inner.write_u8(self.acc << (8 - self.nbits))?;
        }
        Ok(())
    }
}

/// Compress `input` into `output` as a framed HSF stream.
///
/// A single trailing byte outside {A,C,G,T,N} (typically a newline) is
/// stripped silently; any other non-symbol byte fails with
/// [`EncodeError::InvalidSymbol`]. The decoded form of the stream equals the
/// post-strip input exactly.
pub fn compress<W: Write>(input: &[u8], output: &mut W) -> Result<()> {
    let symbols = validate(input)?;
    for segment in plan(&symbols) {
        write_segment(&segment, &symbols, output)?;
    }
    Ok(())
}

/// Map raw bytes to symbols, applying the trailing-byte strip.
fn validate(input: &[u8]) -> Result<Vec<Nucleotide>> {
    let input = match input.last() {
        Some(&last) if Nucleotide::from_ascii(last).is_none() => &input[..input.len() - 1],
        _ => input,
    };
    if input.is_empty() {
        return Err(EncodeError::EmptyInput.into());
    }
    if input.len() > i32::MAX as usize {
        return Err(EncodeError::InputTooLarge(input.len()).into());
    }
    let mut symbols = Vec::with_capacity(input.len());
    for (offset, &byte) in input.iter().enumerate() {
        match Nucleotide::from_ascii(byte) {
            Some(sym) => symbols.push(sym),
            None => return Err(EncodeError::InvalidSymbol { byte, offset }.into()),
        }
    }
    Ok(symbols)
}

fn write_segment<W: Write>(
    segment: &Segment,
    symbols: &[Nucleotide],
    output: &mut W,
) -> Result<()> {
    output.write_u8(segment.topology.id())?;
    output.write_i32::<LittleEndian>(segment.len() as i32)?;

    // Run segments are fully described by the header.
    if segment.topology.run_symbol().is_some() {
        return Ok(());
    }

    let mut bits = BitWriter::new(output);
    for &sym in &symbols[segment.start..segment.end] {
        let Some(code) = segment.topology.code(sym) else {
            unreachable!("planner segments cover their symbols")
        };
        bits.push(code)?;
    }
    bits.finish()?;
    Ok(())
}
