pub mod describe;
pub mod forge;
pub mod history;
pub mod list;
pub mod name;
pub mod roll;

use colored::{ColoredString, Colorize};

use tp_core::{Die, LuckTier};
use tp_pocket::{Pocket, PocketConfig};

/// Open the configured pocket, starting empty if the file does not exist.
fn open(config: PocketConfig) -> Result<Pocket, String> {
    Pocket::open(config).map_err(|e| e.to_string())
}

fn save(pocket: &Pocket) -> Result<(), String> {
    pocket.save().map_err(|e| e.to_string())
}

/// Resolve a nickname or id prefix to a die in the pocket's bag.
fn find<'a>(pocket: &'a Pocket, query: &str) -> Result<&'a Die, String> {
    pocket.bag().find_die(query).map_err(|e| e.to_string())
}

/// Luck tier label, colored by fortune.
fn tier_label(tier: LuckTier) -> ColoredString {
    let label = tier.to_string();
    match tier {
        LuckTier::VeryLucky => label.green().bold(),
        LuckTier::Lucky => label.green(),
        LuckTier::Neutral => label.normal(),
        LuckTier::Unlucky => label.red(),
        LuckTier::VeryUnlucky => label.red().bold(),
    }
}
