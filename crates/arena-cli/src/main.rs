//! Command-line front end for the arena odds calculator.

mod commands;

use std::path::PathBuf;
use std::process;

use arena_core::{FollowUp, Ruleset};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "arena",
    about = "Exact win probabilities for Fire Emblem arena battles",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the player's chance of winning from stats on the command line
    Calc {
        #[command(flatten)]
        stats: StatArgs,

        /// True-hit formula: 1rn, 2rn, or hybrid
        #[arg(short, long)]
        ruleset: Option<Ruleset>,

        /// Pick the ruleset by game title instead (see `arena games`)
        #[arg(short, long, conflicts_with = "ruleset")]
        game: Option<String>,

        /// Which side strikes twice per round: neither, player, or enemy
        #[arg(short, long, default_value = "neither")]
        follow_up: FollowUp,

        /// Output format: table or json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Compute the player's chance of winning for a battle stored as JSON
    File {
        /// Path to the battle file
        path: PathBuf,

        /// Output format: table or json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// List known games and the ruleset each one uses
    Games,
}

/// Stats for both sides. Hit defaults to 100 and crit to 0 when omitted.
#[derive(Args)]
struct StatArgs {
    /// Player's displayed hit rate
    #[arg(long, allow_negative_numbers = true)]
    player_hit: Option<i64>,

    /// Damage the player deals per strike
    #[arg(long, allow_negative_numbers = true)]
    player_dmg: Option<i64>,

    /// Player's crit rate
    #[arg(long, allow_negative_numbers = true)]
    player_crit: Option<i64>,

    /// Player's starting HP
    #[arg(long, allow_negative_numbers = true)]
    player_hp: Option<i64>,

    /// Enemy's displayed hit rate
    #[arg(long, allow_negative_numbers = true)]
    enemy_hit: Option<i64>,

    /// Damage the enemy deals per strike
    #[arg(long, allow_negative_numbers = true)]
    enemy_dmg: Option<i64>,

    /// Enemy's crit rate
    #[arg(long, allow_negative_numbers = true)]
    enemy_crit: Option<i64>,

    /// Enemy's starting HP
    #[arg(long, allow_negative_numbers = true)]
    enemy_hp: Option<i64>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Calc {
            stats,
            ruleset,
            game,
            follow_up,
            format,
        } => {
            let input = commands::calc::battle_input(stats, ruleset, game, follow_up);
            commands::calc::run(&input, &format)
        }
        Commands::File { path, format } => commands::file::run(&path, &format),
        Commands::Games => commands::games::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
