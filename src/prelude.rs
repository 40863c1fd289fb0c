//! Commonly used types and functions
//!
//! ```
//! use hsf::prelude::*;
//! ```

pub use crate::error::{DecodeError, EncodeError, Error, Result};
pub use crate::nuc::Nucleotide;
pub use crate::planner::Segment;
pub use crate::read::{decompress, Reader};
pub use crate::topology::Topology;
pub use crate::write::compress;
