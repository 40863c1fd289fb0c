#![doc = include_str!("../README.md")]
//!
//! # Layout
//!
//! The library is split along the three format concerns:
//!
//! - [`topology`]: the static catalog of 165 prefix codes, indexed by the
//!   InfoByte value each segment carries on disk
//! - [`planner`] + [`write`]: the dynamic program choosing segment cuts
//!   and the framed emitter behind [`compress`]
//! - [`tree`] + [`read`]: per-segment prefix-tree reconstruction and the
//!   streaming [`decompress`] / [`Reader`] side
//!
//! The catalog is immutable compile-time data, so a process can share it
//! across threads and decode independent streams in parallel; each segment
//! is self-framed and carries no cross-segment state.

/// Error definitions
pub mod error;

/// The five-symbol DNA alphabet
pub mod nuc;

/// Segment cut selection
pub mod planner;

/// Prelude - commonly used types and functions
pub mod prelude;

/// Stream decoding
pub mod read;

/// The topology catalog
pub mod topology;

/// Decode-tree construction
pub mod tree;

/// Path helpers for the `.hsf` suffix
pub mod utils;

/// Stream encoding
pub mod write;

pub use error::{DecodeError, EncodeError, Error, ExtensionError, Result};
pub use nuc::Nucleotide;
pub use planner::{plan, Segment};
pub use read::{decompress, Reader};
pub use topology::{ShapeClass, Topology, NUM_TOPOLOGIES};
pub use tree::DecodeTree;
pub use write::compress;
