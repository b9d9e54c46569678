//! Label seeds: turning a state label into the `alpha` coefficient.
//!
//! `alpha` is `|hash(label) mod 1000| / 1000`, so it always lands in
//! `[0, 1)` in steps of 0.001. The hash is pluggable; the default is
//! 32-bit FNV-1a, which gives the same alpha for a label on every run.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash, Hasher};

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Source of the label hash used to derive `alpha`.
///
/// Implementations must return the same hash for the same label for as long
/// as the seed value lives.
pub trait LabelSeed: Send + Sync {
    /// Hash a state label.
    fn hash_label(&self, label: &str) -> i64;

    /// Derive `alpha` in `[0, 1)` from a state label.
    fn alpha(&self, label: &str) -> f64 {
        let reduced = (self.hash_label(label) % 1000).abs();
        reduced as f64 / 1000.0
    }
}

/// 32-bit FNV-1a over the label's UTF-8 bytes. Stable across runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fnv1aSeed;

impl Fnv1aSeed {
    pub fn new() -> Self {
        Self
    }

    /// Raw FNV-1a digest of a byte string.
    pub fn digest(bytes: &[u8]) -> u32 {
        bytes.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
            (hash ^ u32::from(*byte)).wrapping_mul(FNV_PRIME)
        })
    }
}

impl LabelSeed for Fnv1aSeed {
    fn hash_label(&self, label: &str) -> i64 {
        i64::from(Self::digest(label.as_bytes()))
    }
}

/// Randomly keyed hash, stable only for the lifetime of one seed value.
///
/// Reproduces a process-local hash: the same label gives the same alpha
/// within a run, but a fresh seed (or a restart) reshuffles every label.
#[derive(Debug, Clone, Default)]
pub struct ProcessSeed {
    state: RandomState,
}

impl ProcessSeed {
    pub fn new() -> Self {
        Self {
            state: RandomState::new(),
        }
    }
}

impl LabelSeed for ProcessSeed {
    fn hash_label(&self, label: &str) -> i64 {
        let mut hasher = self.state.build_hasher();
        label.hash(&mut hasher);
        // Wrapping into i64 is fine; only the value mod 1000 matters.
        hasher.finish() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_reference_vectors() {
        assert_eq!(Fnv1aSeed::digest(b""), 0x811c_9dc5);
        assert_eq!(Fnv1aSeed::digest(b"a"), 0xe40c_292c);
        assert_eq!(Fnv1aSeed::digest(b"foobar"), 0xbf9c_f968);
    }

    #[test]
    fn test_fnv1a_alpha_values() {
        let seed = Fnv1aSeed::new();
        assert_eq!(seed.alpha(""), 0.261);
        assert_eq!(seed.alpha("Q-Event-42"), 0.662);
        assert_eq!(seed.alpha("Q-Event-3"), 0.045);
    }

    #[test]
    fn test_process_seed_stable_within_instance() {
        let seed = ProcessSeed::new();
        let first = seed.alpha("Q-Event-42");
        let second = seed.alpha("Q-Event-42");
        assert_eq!(first, second);
        assert!((0.0..1.0).contains(&first));
    }

    #[test]
    fn test_negative_hash_still_yields_unit_alpha() {
        struct Negative;
        impl LabelSeed for Negative {
            fn hash_label(&self, _label: &str) -> i64 {
                -123_456_789
            }
        }

        assert_eq!(Negative.alpha("anything"), 0.789);
    }
}
