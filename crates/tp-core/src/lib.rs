//! Dice with memory for Tymora's Pocket.
//!
//! A [`Die`] owns a private random stream that it reseeds after every draw,
//! remembers every roll and who made it, and reads its own luck from the
//! trailing window of its history. Luck and a deterministic material feed
//! into a short flavor description.

pub mod describe;
pub mod die;
pub mod error;
pub mod luck;
pub mod material;

pub use describe::describe;
pub use die::{Die, DieId, DieSnapshot};
pub use error::{DiceError, DiceResult};
pub use luck::{LUCK_WINDOW, LuckModel, LuckTier, luck_score};
pub use material::{Material, material_for};
