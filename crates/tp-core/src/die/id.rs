//! Stable die identity.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for every die.
///
/// Two dice built with the same side count are still distinct. The id is
/// also the input to a die's material, so it must survive persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DieId(pub Uuid);

impl DieId {
    /// Generate a new random die ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Draw a version-4 ID from the given RNG, so seeded callers get
    /// reproducible identities.
    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        let bytes: [u8; 16] = rng.random();
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    /// The 128 id bits folded into a 64-bit seed.
    pub fn seed_bits(self) -> u64 {
        let (hi, lo) = self.0.as_u64_pair();
        hi ^ lo
    }

    /// Whether the full hyphenated form starts with `prefix` (case-insensitive).
    pub fn matches_prefix(self, prefix: &str) -> bool {
        !prefix.is_empty()
            && self
                .0
                .to_string()
                .starts_with(prefix.to_ascii_lowercase().as_str())
    }
}

impl Default for DieId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}
