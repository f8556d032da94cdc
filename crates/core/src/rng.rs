//! RNG module - piece kind selection
//!
//! Every spawn draws a kind uniformly and independently from the seven
//! kinds. There is no bag or history: the same kind may repeat any number of
//! times in a row.
//!
//! The generator is seeded exactly once, when the source is created, and
//! lives as long as the world that owns it.
//!
//! Also provides a scripted source for deterministic tests and replays.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Supplies the kind of every newly spawned piece.
pub trait KindSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Uniform random kind picker
#[derive(Debug, Clone)]
pub struct KindPicker {
    rng: StdRng,
    seed: u64,
}

impl KindPicker {
    /// Create a picker with the given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a picker seeded from OS entropy.
    ///
    /// The drawn seed is kept so a session can be logged and replayed.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    /// The seed this picker was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl KindSource for KindPicker {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::from_index(self.rng.gen_range(0..PieceKind::ALL.len()))
    }
}

impl Default for KindPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Replays a fixed list of kinds, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedKinds {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl ScriptedKinds {
    /// Create a scripted source. An empty script yields `O` forever.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        Self {
            kinds: kinds.into(),
            next: 0,
        }
    }

    /// A source that always yields `kind`.
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }

    /// Number of kinds drawn so far
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl KindSource for ScriptedKinds {
    fn next_kind(&mut self) -> PieceKind {
        let kind = if self.kinds.is_empty() {
            PieceKind::O
        } else {
            self.kinds[self.next % self.kinds.len()]
        };
        self.next += 1;
        kind
    }
}

impl<S: KindSource + ?Sized> KindSource for &mut S {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}
