//! The topology catalog
//!
//! HSF draws every segment's prefix code from a closed set of 165 code
//! tables ("topologies"), one per InfoByte value. The set enumerates every
//! rooted binary tree shape with at most five leaves, crossed with every
//! meaningful assignment of {A,C,G,T,N} to the leaves. Because the catalog
//! is fixed, a one-byte id replaces the tree descriptor a classical Huffman
//! stream would have to carry, and the encoder's per-symbol bit cost for
//! each topology is a compile-time constant.
//!
//! Entries are bucketed by [`ShapeClass`]; within a bucket, entries differ
//! only in which symbol sits in which code slot.

use crate::nuc::Nucleotide;

/// Number of entries in the catalog.
pub const NUM_TOPOLOGIES: usize = 165;

/// InfoByte value reserved as an end-of-stream marker. Never written by the
/// encoder and never a valid topology id.
pub const RESERVED_INFO_BYTE: u8 = u8::MAX;

/// A single prefix code word of 0 to 4 bits, stored right-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    bits: u8,
    len: u8,
}

impl Code {
    const fn new(bits: u8, len: u8) -> Self {
        Self { bits, len }
    }

    /// Number of bits in the code word.
    #[inline(always)]
    pub const fn len(self) -> u8 {
        self.len
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Bit `idx` in emission order: index 0 is the first bit written to the
    /// stream (the most significant of the word).
    #[inline(always)]
    pub fn bit(self, idx: u8) -> bool {
        debug_assert!(idx < self.len);
        (self.bits >> (self.len - 1 - idx)) & 1 == 1
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for idx in 0..self.len {
            write!(f, "{}", u8::from(self.bit(idx)))?;
        }
        Ok(())
    }
}

// The code slots shared by all entries of a shape class.
const EMPTY: Code = Code::new(0b0, 0);
const B1: Code = Code::new(0b1, 1);
const B0: Code = Code::new(0b0, 1);
const B11: Code = Code::new(0b11, 2);
const B10: Code = Code::new(0b10, 2);
const B01: Code = Code::new(0b01, 2);
const B00: Code = Code::new(0b00, 2);
const B011: Code = Code::new(0b011, 3);
const B010: Code = Code::new(0b010, 3);
const B001: Code = Code::new(0b001, 3);
const B000: Code = Code::new(0b000, 3);
const B0001: Code = Code::new(0b0001, 4);
const B0000: Code = Code::new(0b0000, 4);

/// The eight tree shapes a topology can take.
///
/// A shape fixes the code slots; the catalog entry fixes which symbol fills
/// which slot. The decoder dispatches tree construction on this bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeClass {
    /// One symbol, empty code word (ids 0..=4)
    Single,
    /// Two symbols, one bit each (ids 5..=14)
    Pair,
    /// Three symbols on a two-level chain (ids 15..=44)
    Triple,
    /// Four symbols on a full two-level tree (ids 45..=49)
    QuadBalanced,
    /// Four symbols on a three-level chain (ids 50..=89)
    QuadChain,
    /// Five symbols on a four-level chain (ids 90..=149)
    QuintChain,
    /// Five symbols, balanced pair on top of a chain (ids 150..=159)
    QuintUpperBend,
    /// Five symbols, chain with a balanced pair one level down (ids 160..=164)
    QuintLowerBend,
}

impl ShapeClass {
    /// Code words of this shape, in slot order.
    pub const fn slots(self) -> &'static [Code] {
        match self {
            Self::Single => &[EMPTY],
            Self::Pair => &[B1, B0],
            Self::Triple => &[B1, B01, B00],
            Self::QuadBalanced => &[B11, B10, B01, B00],
            Self::QuadChain => &[B1, B01, B001, B000],
            Self::QuintChain => &[B1, B01, B001, B0001, B0000],
            Self::QuintUpperBend => &[B11, B10, B01, B001, B000],
            Self::QuintLowerBend => &[B1, B011, B010, B001, B000],
        }
    }

    /// Number of symbols a topology of this shape encodes.
    pub const fn arity(self) -> usize {
        self.slots().len()
    }
}

/// A validated topology id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Topology(u8);

impl Topology {
    /// Wrap a raw InfoByte, rejecting anything outside the catalog.
    #[inline]
    pub fn new(id: u8) -> Option<Self> {
        if (id as usize) < NUM_TOPOLOGIES {
            Some(Self(id))
        } else {
            None
        }
    }

    /// The raw id, as written on disk.
    #[inline(always)]
    pub const fn id(self) -> u8 {
        self.0
    }

    /// The shape bucket containing this id.
    pub fn shape(self) -> ShapeClass {
        match self.0 {
            0..=4 => ShapeClass::Single,
            5..=14 => ShapeClass::Pair,
            15..=44 => ShapeClass::Triple,
            45..=49 => ShapeClass::QuadBalanced,
            50..=89 => ShapeClass::QuadChain,
            90..=149 => ShapeClass::QuintChain,
            150..=159 => ShapeClass::QuintUpperBend,
            160..=164 => ShapeClass::QuintLowerBend,
            _ => unreachable!("topology id out of range"),
        }
    }

    /// The symbols this topology encodes, in slot order.
    #[inline]
    pub fn symbols(self) -> &'static [Nucleotide] {
        ASSIGNMENTS[self.0 as usize]
    }

    /// The code word for `nuc`, or `None` if this topology does not cover it.
    #[inline]
    pub fn code(self, nuc: Nucleotide) -> Option<Code> {
        let slot = self.symbols().iter().position(|&s| s == nuc)?;
        Some(self.shape().slots()[slot])
    }

    /// Whether `nuc` is in this topology's domain.
    #[inline]
    pub fn covers(self, nuc: Nucleotide) -> bool {
        self.symbols().contains(&nuc)
    }

    /// For single-symbol topologies, the symbol the segment repeats.
    #[inline]
    pub fn run_symbol(self) -> Option<Nucleotide> {
        if self.0 < 5 {
            Nucleotide::from_index(self.0)
        } else {
            None
        }
    }

    /// Iterate the whole catalog in id order.
    pub fn all() -> impl Iterator<Item = Topology> {
        (0..NUM_TOPOLOGIES as u8).map(Topology)
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

use Nucleotide::{A, C, G, N, T};

/// Symbol-to-slot assignment for every catalog entry. Row order is the wire
/// format: the InfoByte of a segment indexes this table directly.
#[rustfmt::skip]
static ASSIGNMENTS: [&[Nucleotide]; NUM_TOPOLOGIES] = [
    // single-symbol runs
    &[A],             // 0
    &[C],             // 1
    &[G],             // 2
    &[T],             // 3
    &[N],             // 4
    // two symbols
    &[A, C],          // 5
    &[A, G],          // 6
    &[A, T],          // 7
    &[A, N],          // 8
    &[C, G],          // 9
    &[C, T],          // 10
    &[C, N],          // 11
    &[G, T],          // 12
    &[G, N],          // 13
    &[T, N],          // 14
    // three symbols
    &[A, C, G],       // 15
    &[A, C, T],       // 16
    &[A, C, N],       // 17
    &[A, G, T],       // 18
    &[A, G, N],       // 19
    &[A, T, N],       // 20
    &[C, A, G],       // 21
    &[C, A, T],       // 22
    &[C, A, N],       // 23
    &[C, G, T],       // 24
    &[C, G, N],       // 25
    &[C, T, N],       // 26
    &[G, A, C],       // 27
    &[G, A, T],       // 28
    &[G, A, N],       // 29
    &[G, C, T],       // 30
    &[G, C, N],       // 31
    &[G, T, N],       // 32
    &[T, A, C],       // 33
    &[T, A, G],       // 34
    &[T, A, N],       // 35
    &[T, C, G],       // 36
    &[T, C, N],       // 37
    &[T, G, N],       // 38
    &[N, A, C],       // 39
    &[N, A, G],       // 40
    &[N, A, T],       // 41
    &[N, C, G],       // 42
    &[N, C, T],       // 43
    &[N, G, T],       // 44
    // four symbols, balanced
    &[A, C, G, T],    // 45
    &[A, C, G, N],    // 46
    &[A, C, T, N],    // 47
    &[A, G, T, N],    // 48
    &[C, G, T, N],    // 49
    // four symbols, chain
    &[A, C, G, T],    // 50
    &[A, C, G, N],    // 51
    &[A, G, C, T],    // 52
    &[A, G, C, N],    // 53
    &[A, T, C, G],    // 54
    &[A, T, C, N],    // 55
    &[A, N, C, G],    // 56
    &[A, N, C, T],    // 57
    &[C, A, G, T],    // 58
    &[C, A, G, N],    // 59
    &[C, G, A, T],    // 60
    &[C, G, A, N],    // 61
    &[C, T, A, G],    // 62
    &[C, T, A, N],    // 63
    &[C, N, A, G],    // 64
    &[C, N, A, T],    // 65
    &[G, A, C, T],    // 66
    &[G, A, C, N],    // 67
    &[G, C, A, T],    // 68
    &[G, C, A, N],    // 69
    &[G, T, A, C],    // 70
    &[G, T, A, N],    // 71
    &[G, N, A, C],    // 72
    &[G, N, A, T],    // 73
    &[T, A, C, G],    // 74
    &[T, A, C, N],    // 75
    &[T, C, A, G],    // 76
    &[T, C, A, N],    // 77
    &[T, G, A, C],    // 78
    &[T, G, A, N],    // 79
    &[T, N, A, C],    // 80
    &[T, N, A, G],    // 81
    &[N, A, C, G],    // 82
    &[N, A, C, T],    // 83
    &[N, C, A, G],    // 84
    &[N, C, A, T],    // 85
    &[N, G, A, C],    // 86
    &[N, G, A, T],    // 87
    &[N, T, A, C],    // 88
    &[N, T, A, G],    // 89
    // five symbols, chain
    &[A, C, G, T, N], // 90
    &[A, C, T, G, N], // 91
    &[A, C, N, G, T], // 92
    &[A, G, C, T, N], // 93
    &[A, G, T, C, N], // 94
    &[A, G, N, C, T], // 95
    &[A, T, C, G, N], // 96
    &[A, T, G, C, N], // 97
    &[A, T, N, C, G], // 98
    &[A, N, C, G, T], // 99
    &[A, N, G, C, T], // 100
    &[A, N, T, C, G], // 101
    &[C, A, G, T, N], // 102
    &[C, A, T, G, N], // 103
    &[C, A, N, G, T], // 104
    &[C, G, A, T, N], // 105
    &[C, G, T, A, N], // 106
    &[C, G, N, A, T], // 107
    &[C, T, A, G, N], // 108
    &[C, T, G, A, N], // 109
    &[C, T, N, A, G], // 110
    &[C, N, A, G, T], // 111
    &[C, N, G, A, T], // 112
    &[C, N, T, A, G], // 113
    &[G, A, C, T, N], // 114
    &[G, A, T, C, N], // 115
    &[G, A, N, C, T], // 116
    &[G, C, A, T, N], // 117
    &[G, C, T, A, N], // 118
    &[G, C, N, A, T], // 119
    &[G, T, A, C, N], // 120
    &[G, T, C, A, N], // 121
    &[G, T, N, A, C], // 122
    &[G, N, A, C, T], // 123
    &[G, N, C, A, T], // 124
    &[G, N, T, A, C], // 125
    &[T, A, C, G, N], // 126
    &[T, A, G, C, N], // 127
    &[T, A, N, C, G], // 128
    &[T, C, A, G, N], // 129
    &[T, C, G, A, N], // 130
    &[T, C, N, A, G], // 131
    &[T, G, A, C, N], // 132
    &[T, G, C, A, N], // 133
    &[T, G, N, A, C], // 134
    &[T, N, A, C, G], // 135
    &[T, N, C, A, G], // 136
    &[T, N, G, A, C], // 137
    &[N, A, C, G, T], // 138
    &[N, A, G, C, T], // 139
    &[N, A, T, C, G], // 140
    &[N, C, A, G, T], // 141
    &[N, C, G, A, T], // 142
    &[N, C, T, A, G], // 143
    &[N, G, A, C, T], // 144
    &[N, G, C, A, T], // 145
    &[N, G, T, A, C], // 146
    &[N, T, A, C, G], // 147
    &[N, T, C, A, G], // 148
    &[N, T, G, A, C], // 149
    // five symbols, upper bend
    &[A, C, G, T, N], // 150
    &[A, C, T, G, N], // 151
    &[A, G, T, C, N], // 152
    &[C, G, T, A, N], // 153
    &[A, C, N, G, T], // 154
    &[A, G, N, C, T], // 155
    &[C, G, N, A, T], // 156
    &[A, T, N, C, G], // 157
    &[C, T, N, A, G], // 158
    &[G, T, N, A, C], // 159
    // five symbols, lower bend
    &[A, C, G, T, N], // 160
    &[C, A, G, T, N], // 161
    &[G, A, C, T, N], // 162
    &[T, A, C, G, N], // 163
    &[N, A, C, G, T], // 164
];

#[cfg(test)]
mod testing {
    use super::*;

    fn is_prefix(a: Code, b: Code) -> bool {
        if a.len() > b.len() {
            return false;
        }
        (0..a.len()).all(|i| a.bit(i) == b.bit(i))
    }

    #[test]
    fn test_catalog_size_and_buckets() {
        assert_eq!(Topology::all().count(), NUM_TOPOLOGIES);
        for top in Topology::all() {
            let expected = match top.id() {
                0..=4 => ShapeClass::Single,
                5..=14 => ShapeClass::Pair,
                15..=44 => ShapeClass::Triple,
                45..=49 => ShapeClass::QuadBalanced,
                50..=89 => ShapeClass::QuadChain,
                90..=149 => ShapeClass::QuintChain,
                150..=159 => ShapeClass::QuintUpperBend,
                _ => ShapeClass::QuintLowerBend,
            };
            assert_eq!(top.shape(), expected, "bucket mismatch for id {top}");
            assert_eq!(top.symbols().len(), top.shape().arity());
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Topology::new(164).is_some());
        assert!(Topology::new(165).is_none());
        assert!(Topology::new(200).is_none());
        assert!(Topology::new(RESERVED_INFO_BYTE).is_none());
    }

    #[test]
    fn test_symbols_are_distinct() {
        for top in Topology::all() {
            let syms = top.symbols();
            for i in 0..syms.len() {
                for j in (i + 1)..syms.len() {
                    assert_ne!(syms[i], syms[j], "duplicate symbol in id {top}");
                }
            }
        }
    }

    #[test]
    fn test_codes_are_prefix_free() {
        for top in Topology::all() {
            let slots = top.shape().slots();
            for i in 0..slots.len() {
                for j in 0..slots.len() {
                    if i != j {
                        assert!(
                            !is_prefix(slots[i], slots[j]),
                            "id {top}: {} is a prefix of {}",
                            slots[i],
                            slots[j]
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_codes_tile_a_complete_tree() {
        // Kraft equality: sum of 2^-len over the slots is exactly 1.
        for top in Topology::all() {
            let total: u32 = top
                .shape()
                .slots()
                .iter()
                .map(|code| 1u32 << (4 - code.len()))
                .sum();
            assert_eq!(total, 16, "incomplete code set for id {top}");
        }
    }

    #[test]
    fn test_entries_are_unique() {
        // No two InfoBytes may describe the same code table.
        let tables: Vec<Vec<(u8, String)>> = Topology::all()
            .map(|top| {
                top.symbols()
                    .iter()
                    .zip(top.shape().slots())
                    .map(|(&sym, &code)| (sym.to_index(), code.to_string()))
                    .collect()
            })
            .collect();
        for i in 0..tables.len() {
            for j in (i + 1)..tables.len() {
                assert_ne!(tables[i], tables[j], "ids {i} and {j} collide");
            }
        }
    }

    #[test]
    fn test_known_code_tables() {
        let top5 = Topology::new(5).unwrap();
        assert_eq!(top5.code(A).unwrap().to_string(), "1");
        assert_eq!(top5.code(C).unwrap().to_string(), "0");
        assert_eq!(top5.code(G), None);

        let top45 = Topology::new(45).unwrap();
        assert_eq!(top45.code(A).unwrap().to_string(), "11");
        assert_eq!(top45.code(C).unwrap().to_string(), "10");
        assert_eq!(top45.code(G).unwrap().to_string(), "01");
        assert_eq!(top45.code(T).unwrap().to_string(), "00");

        let top90 = Topology::new(90).unwrap();
        assert_eq!(top90.code(A).unwrap().to_string(), "1");
        assert_eq!(top90.code(C).unwrap().to_string(), "01");
        assert_eq!(top90.code(G).unwrap().to_string(), "001");
        assert_eq!(top90.code(T).unwrap().to_string(), "0001");
        assert_eq!(top90.code(N).unwrap().to_string(), "0000");

        let top150 = Topology::new(150).unwrap();
        assert_eq!(top150.code(A).unwrap().to_string(), "11");
        assert_eq!(top150.code(T).unwrap().to_string(), "001");
        assert_eq!(top150.code(N).unwrap().to_string(), "000");

        let top164 = Topology::new(164).unwrap();
        assert_eq!(top164.code(N).unwrap().to_string(), "1");
        assert_eq!(top164.code(A).unwrap().to_string(), "011");
        assert_eq!(top164.code(T).unwrap().to_string(), "000");
    }

    #[test]
    fn test_run_symbols() {
        assert_eq!(Topology::new(0).unwrap().run_symbol(), Some(A));
        assert_eq!(Topology::new(1).unwrap().run_symbol(), Some(C));
        assert_eq!(Topology::new(2).unwrap().run_symbol(), Some(G));
        assert_eq!(Topology::new(3).unwrap().run_symbol(), Some(T));
        assert_eq!(Topology::new(4).unwrap().run_symbol(), Some(N));
        assert_eq!(Topology::new(5).unwrap().run_symbol(), None);
    }

    #[test]
    fn test_covers() {
        let top12 = Topology::new(12).unwrap();
        assert!(top12.covers(G));
        assert!(top12.covers(T));
        assert!(!top12.covers(A));
        assert!(!top12.covers(N));

        for top in Topology::all().filter(|t| t.shape().arity() == 5) {
            for nuc in crate::nuc::ALPHABET {
                assert!(top.covers(nuc));
            }
        }
    }

    #[test]
    fn test_code_bit_order() {
        // "001": first emitted bit is 0, last is 1.
        let code = Topology::new(50).unwrap().code(G).unwrap();
        assert_eq!(code.len(), 3);
        assert!(!code.bit(0));
        assert!(!code.bit(1));
        assert!(code.bit(2));
    }
}
