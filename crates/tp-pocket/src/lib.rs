//! Bags of dice, dice notation, and pocket files for Tymora's Pocket.
//!
//! A [`DiceBag`] owns dice and hands them out by side count, forging new
//! ones when it runs short. A [`DiceSet`] is built from notation such as
//! `2d6+3` and rolls its dice together. A [`Pocket`] ties one bag to a
//! JSON file so that dice and their histories survive between sessions.

pub mod bag;
pub mod config;
pub mod error;
pub mod notation;
pub mod pocket;
pub mod set;
pub mod store;

pub use bag::{BagSnapshot, DiceBag};
pub use config::PocketConfig;
pub use error::{PocketError, PocketResult};
pub use notation::{MAX_DICE, Notation, Term};
pub use pocket::Pocket;
pub use set::{DiceSet, SetRoll};
pub use store::{POCKET_FILE_VERSION, PocketFile, load_bag, save_bag};
