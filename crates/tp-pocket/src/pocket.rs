//! The pocket: one bag of dice tied to a file on disk.

use std::fs;
use std::io::ErrorKind;

use tracing::{debug, info};

use crate::bag::DiceBag;
use crate::config::PocketConfig;
use crate::error::{PocketError, PocketResult};
use crate::set::{DiceSet, SetRoll};
use crate::store;

/// A bag of dice plus the configuration that says where it lives and who
/// is rolling.
#[derive(Debug)]
pub struct Pocket {
    config: PocketConfig,
    bag: DiceBag,
}

impl Pocket {
    /// Start a pocket with an empty bag, ignoring any file on disk.
    pub fn new(config: PocketConfig) -> Self {
        let mut bag = DiceBag::new(config.bag_name.clone());
        if let Some(seed) = config.seed {
            bag.set_forge_seed(seed);
        }
        Self { config, bag }
    }

    /// Load the bag at the configured path, or start empty if no file
    /// exists yet. Any other failure to inspect the path is a read error.
    pub fn open(config: PocketConfig) -> PocketResult<Self> {
        match fs::metadata(&config.bag_path) {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %config.bag_path.display(), "no pocket file yet, starting empty");
                return Ok(Self::new(config));
            }
            Err(source) => {
                return Err(PocketError::Read {
                    path: config.bag_path,
                    source,
                });
            }
        }
        let mut bag = store::load_bag(&config.bag_path)?;
        if let Some(seed) = config.seed {
            bag.set_forge_seed(seed);
        }
        info!(path = %config.bag_path.display(), dice = bag.len(), "opened pocket");
        Ok(Self { config, bag })
    }

    /// The active configuration.
    pub fn config(&self) -> &PocketConfig {
        &self.config
    }

    /// The bag.
    pub fn bag(&self) -> &DiceBag {
        &self.bag
    }

    /// The bag, for mutation.
    pub fn bag_mut(&mut self) -> &mut DiceBag {
        &mut self.bag
    }

    /// Roll `expression` as the configured user.
    pub fn roll(&mut self, expression: &str) -> PocketResult<SetRoll> {
        let user = self.config.user.clone();
        self.roll_as(expression, &user)
    }

    /// Roll `expression` on behalf of `user`.
    pub fn roll_as(&mut self, expression: &str, user: &str) -> PocketResult<SetRoll> {
        let set = DiceSet::parse(&mut self.bag, expression)?;
        let result = set.roll_all(&mut self.bag, user)?;
        debug!(%expression, user, total = result.total(), "rolled");
        Ok(result)
    }

    /// Write the bag to the configured path.
    pub fn save(&self) -> PocketResult<()> {
        store::save_bag(&self.bag, &self.config.bag_path)
    }
}
