//! CLI frontend for Tymora's Pocket, a bag of dice with long memories.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tp_pocket::PocketConfig;
use tp_pocket::config::{DEFAULT_BAG_PATH, DEFAULT_USER};

#[derive(Parser)]
#[command(
    name = "tymora",
    about = "Tymora's Pocket: dice that remember every roll",
    version,
    propagate_version = true
)]
struct Cli {
    /// Pocket file holding the bag of dice
    #[arg(short, long, global = true, default_value = DEFAULT_BAG_PATH)]
    bag: PathBuf,

    /// RNG seed for reproducible new dice
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Name recorded against each roll
    #[arg(short, long, global = true, default_value = DEFAULT_USER)]
    user: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice notation such as 2d6+3
    Roll {
        /// Dice notation
        notation: String,
    },

    /// List every die in the bag
    List,

    /// Describe one die, or every die in the bag
    Describe {
        /// Die nickname or id prefix
        die: Option<String>,
    },

    /// Give a die a nickname, setting it aside from random draws
    Name {
        /// Die nickname or id prefix
        die: String,

        /// New nickname
        nickname: String,
    },

    /// Show who rolled a die and what came up
    History {
        /// Die nickname or id prefix
        die: String,
    },

    /// Add fresh dice to the bag
    Forge {
        /// Number of sides
        sides: u32,

        /// How many dice to forge
        #[arg(short, long, default_value = "1")]
        count: u32,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = PocketConfig::default()
        .with_bag_path(cli.bag)
        .with_user(cli.user);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    tracing::debug!(bag = %config.bag_path.display(), user = %config.user, "using pocket");

    let result = match cli.command {
        Commands::Roll { notation } => commands::roll::run(config, &notation),
        Commands::List => commands::list::run(config),
        Commands::Describe { die } => commands::describe::run(config, die.as_deref()),
        Commands::Name { die, nickname } => commands::name::run(config, &die, &nickname),
        Commands::History { die } => commands::history::run(config, &die),
        Commands::Forge { sides, count } => commands::forge::run(config, sides, count),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
