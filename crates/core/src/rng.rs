//! RNG module - uniform random piece selection
//!
//! Every spawn picks one of the seven kinds independently and uniformly; there
//! is no bag or history. The generator is seeded so a session can be replayed.

use crate::types::PieceKind;

/// Seeded source of piece kinds
#[derive(Debug, Clone)]
pub struct PieceRng {
    rng: fastrand::Rng,
    seed: u64,
}

impl PieceRng {
    /// Create a generator with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            seed,
        }
    }

    /// Create a generator with a fresh random seed
    pub fn from_entropy() -> Self {
        Self::new(fastrand::u64(..))
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.usize(..PieceKind::ALL.len())]
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
