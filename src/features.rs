//! Feature-flag collection: fixed-capacity bitset, generic enumerator,
//! and the deterministic ordering applied before rendering

/// Upper bound on feature indices across all architecture name tables
pub const MAX_FEATURES: usize = 128;

const WORD_BITS: usize = 64;
const WORDS: usize = MAX_FEATURES / WORD_BITS;

/// Fixed-capacity set of per-architecture feature bits
///
/// Indices correspond to positions in the architecture's feature name table.
/// Populated once by a detection backend and read-only afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureSet {
    words: [u64; WORDS],
}

impl FeatureSet {
    /// Create an empty set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Mark feature `index` as present
    ///
    /// Indices past `MAX_FEATURES` are ignored; name tables are asserted to
    /// fit within capacity in tests.
    pub fn set(&mut self, index: usize) {
        if index < MAX_FEATURES {
            self.words[index / WORD_BITS] |= 1 << (index % WORD_BITS);
        }
    }

    /// Query whether feature `index` is present
    pub fn contains(&self, index: usize) -> bool {
        if index >= MAX_FEATURES {
            return false;
        }
        self.words[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
    }

    /// True when no feature bit is set
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }
}

/// Enumerate the names of all features present in `set`
///
/// One generic routine for every architecture: the per-architecture variation
/// lives entirely in the name table (index -> name) and in the detection
/// backend that populated `set`. Pure function of its inputs; output order is
/// the table order, not yet sorted.
pub fn enumerate(set: &FeatureSet, names: &'static [&'static str]) -> Vec<&'static str> {
    let mut found = Vec::with_capacity(names.len());
    for (index, name) in names.iter().enumerate() {
        if set.contains(index) {
            found.push(*name);
        }
    }
    found
}

/// Sort a flag list into the canonical output order
///
/// Byte-wise lexicographic, deduplicated. Applied exactly once, at record
/// construction, so text and JSON output are byte-identical for identical
/// hardware regardless of enumeration order.
pub fn sort_flags(flags: &mut Vec<String>) {
    flags.sort_unstable();
    flags.dedup();
}
