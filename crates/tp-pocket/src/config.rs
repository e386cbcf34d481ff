//! Configuration for a pocket of dice.

use std::path::PathBuf;

/// Default location of the pocket file.
pub const DEFAULT_BAG_PATH: &str = "pocket.json";
/// Default name recorded against rolls.
pub const DEFAULT_USER: &str = "player";
/// Default name of a freshly created bag.
pub const DEFAULT_BAG_NAME: &str = "Main Bag";

/// Configuration for a [`Pocket`](crate::Pocket).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PocketConfig {
    /// Where the bag is loaded from and saved to.
    pub bag_path: PathBuf,
    /// Who rolls when no roller is named.
    pub user: String,
    /// Seed for newly forged dice. `None` draws from the OS.
    pub seed: Option<u64>,
    /// Name given to a bag created from scratch.
    pub bag_name: String,
}

impl Default for PocketConfig {
    fn default() -> Self {
        Self {
            bag_path: PathBuf::from(DEFAULT_BAG_PATH),
            user: DEFAULT_USER.to_string(),
            seed: None,
            bag_name: DEFAULT_BAG_NAME.to_string(),
        }
    }
}

impl PocketConfig {
    /// Set the pocket file location.
    pub fn with_bag_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.bag_path = path.into();
        self
    }

    /// Set the default roller.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Seed the forge for reproducible new dice.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the name of a freshly created bag.
    pub fn with_bag_name(mut self, name: impl Into<String>) -> Self {
        self.bag_name = name.into();
        self
    }
}
