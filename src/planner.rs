//! Split planner
//!
//! Chooses how to partition an input sequence into contiguous segments and
//! which topology encodes each one, minimizing total output bits. The
//! planner runs a dynamic program over (position, topology): a cell holds
//! the cheapest encoding of the prefix ending at that position inside a
//! segment of that topology, and each step either extends the current
//! segment by one symbol or closes it (padding to a byte boundary) and
//! opens a new one under the cheapest predecessor.
//!
//! Costs are measured in bits. Each segment is charged a fixed
//! [`HEADER_COST_BITS`] once, plus the code length of every symbol it
//! covers; pad bits appear only at topology switches, because the next
//! header must start on a byte boundary.

use crate::nuc::Nucleotide;
use crate::topology::{Topology, NUM_TOPOLOGIES};

/// Bits the planner charges per segment header.
pub const HEADER_COST_BITS: u64 = 72;

/// Backtrack sentinel for cells whose topology cannot encode the symbol.
const INFEASIBLE: u8 = u8::MAX;

/// Length-table sentinel for symbols outside a topology's domain.
const UNCOVERED: u8 = u8::MAX;

/// A contiguous run of input symbols encoded under one topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Code table used for every symbol in the range
    pub topology: Topology,
    /// First symbol index (inclusive)
    pub start: usize,
    /// Last symbol index (exclusive)
    pub end: usize,
}

impl Segment {
    /// Number of source symbols the segment covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[inline]
fn round_up_to_byte(bits: u64) -> u64 {
    (bits + 7) & !7
}

/// Per-symbol code lengths across the catalog, `UNCOVERED` where a topology
/// does not encode the symbol. Indexed `[symbol][topology]` so the planner's
/// inner loop reads one contiguous row per input symbol.
fn length_table() -> [[u8; NUM_TOPOLOGIES]; 5] {
    let mut table = [[UNCOVERED; NUM_TOPOLOGIES]; 5];
    for top in Topology::all() {
        let slots = top.shape().slots();
        for (slot, &sym) in top.symbols().iter().enumerate() {
            table[sym.to_index() as usize][top.id() as usize] = slots[slot].len();
        }
    }
    table
}

/// Compute the minimum-cost segmentation of `symbols`.
///
/// Returns segments in input order; their union is exactly `0..symbols.len()`
/// and every segment's topology covers every symbol in its range. An empty
/// input yields no segments.
pub fn plan(symbols: &[Nucleotide]) -> Vec<Segment> {
    if symbols.is_empty() {
        return Vec::new();
    }
    let lengths = length_table();
    let len = symbols.len();

    // Two rolling cost columns plus the full backtrack matrix. The matrix is
    // byte-wide: cells hold the predecessor topology id of the cheapest path
    // into them (the cell's own id when the segment was extended).
    let mut prev: Vec<Option<u64>> = vec![None; NUM_TOPOLOGIES];
    let mut cur: Vec<Option<u64>> = vec![None; NUM_TOPOLOGIES];
    let mut backtrack = vec![INFEASIBLE; len * NUM_TOPOLOGIES];

    // Base column: every covering topology opens a fresh segment.
    let mut best = (usize::MAX, u64::MAX);
    let row = &lengths[symbols[0].to_index() as usize];
    for (t, &code_len) in row.iter().enumerate() {
        if code_len == UNCOVERED {
            continue;
        }
        let cost = HEADER_COST_BITS + code_len as u64;
        prev[t] = Some(cost);
        backtrack[t] = t as u8;
        if cost < best.1 {
            best = (t, cost);
        }
    }

    for i in 1..len {
        let row = &lengths[symbols[i].to_index() as usize];
        let column = &mut backtrack[i * NUM_TOPOLOGIES..(i + 1) * NUM_TOPOLOGIES];
        let mut next_best = (usize::MAX, u64::MAX);
        for (t, &code_len) in row.iter().enumerate() {
            if code_len == UNCOVERED {
                cur[t] = None;
                continue;
            }
            let bits = code_len as u64;
            let (cost, from) = if t == best.0 {
                // The cheapest predecessor is this topology itself: extending
                // always beats closing and immediately reopening it.
                (best.1 + bits, t)
            } else {
                let switch = round_up_to_byte(best.1) + HEADER_COST_BITS + bits;
                match prev[t] {
                    // Ties keep the segment open (fewer cuts).
                    Some(extend) if extend + bits <= switch => (extend + bits, t),
                    _ => (switch, best.0),
                }
            };
            cur[t] = Some(cost);
            column[t] = from as u8;
            if cost < next_best.1 {
                next_best = (t, cost);
            }
        }
        std::mem::swap(&mut prev, &mut cur);
        best = next_best;
    }

    // Recover the topology at every position, then cut where it changes.
    let mut path = vec![0u8; len];
    path[len - 1] = best.0 as u8;
    for i in (0..len - 1).rev() {
        path[i] = backtrack[(i + 1) * NUM_TOPOLOGIES + path[i + 1] as usize];
    }

    let mut segments = Vec::new();
    let mut start = 0;
    for end in 1..=len {
        if end == len || path[end] != path[start] {
            let Some(topology) = Topology::new(path[start]) else {
                unreachable!("backtrack cell holds an invalid topology id")
            };
            segments.push(Segment {
                topology,
                start,
                end,
            });
            start = end;
        }
    }
    segments
}
