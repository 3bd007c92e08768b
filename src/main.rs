//! Binary entrypoint for the Kingdom's Call CLI.
//!
//! Commands:
//! - `play [--seed <n>]` - play the adventure (default when no command is given)
//! - `init` - write a starter config file
//! - `classes` - print the class stat table
//!
//! See the library crate docs for module-level details: `kingdoms_call::`.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};

use kingdoms_call::config::Config;
use kingdoms_call::game::{CharacterClass, Game, LineConsole, RngDice};

#[derive(Parser)]
#[command(name = "kingdoms-call")]
#[command(about = "A turn-based text adventure: fight, choose, save the kingdom")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "kingdoms-call.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the adventure
    Play {
        /// Seed the dice for a reproducible run (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Write a default configuration file
    Init,
    /// Show the stats each class starts with
    Classes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play { seed: None });

    match command {
        Commands::Init => {
            init_logging(&None, cli.verbose);
            Config::create_default(&cli.config)?;
            println!("Configuration file created at {}", cli.config);
        }
        Commands::Classes => {
            for class in CharacterClass::ALL {
                let s = class.stats();
                println!(
                    "{:<8} Strength: {:>2}, Agility: {:>2}, Magic: {:>2}",
                    class.name(),
                    s.strength,
                    s.agility,
                    s.magic
                );
            }
        }
        Commands::Play { seed } => {
            let config = Config::load_or_default(&cli.config)
                .with_context(|| format!("loading {}", cli.config))?;
            init_logging(&Some(config.clone()), cli.verbose);
            info!("Starting Kingdom's Call v{}", env!("CARGO_PKG_VERSION"));

            // CLI seed overrides config; fall back to entropy when neither is set
            let dice = match seed.or(config.game.seed) {
                Some(seed) => {
                    info!("Using fixed seed {}", seed);
                    RngDice::seeded(seed)
                }
                None => RngDice::from_entropy(),
            };

            let stdin = std::io::stdin();
            let console = LineConsole::new(stdin.lock(), std::io::stdout());
            let mut game = Game::new(dice, console).with_intro(config.game.intro);
            let summary = game.run()?;
            debug!(
                "final character: {}",
                serde_json::to_string(&summary.player)?
            );
        }
    }

    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .map(|c| c.logging.level_filter())
            .unwrap_or(log::LevelFilter::Warn),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config.as_ref().and_then(|c| c.logging.file.clone());
    if let Some(file) = log_file {
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file)
        {
            Ok(f) => {
                let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
                // Game text owns stdout; only echo to stderr when someone is watching it
                let is_tty = atty::is(atty::Stream::Stderr);
                builder.format(move |fmt, record| {
                    let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                    let line = format!("{} [{}] {}", ts, record.level(), record.args());
                    if let Ok(mut guard) = write_mutex.lock() {
                        let _ = writeln!(guard, "{}", line);
                    }
                    if is_tty {
                        writeln!(fmt, "{}", line)
                    } else {
                        Ok(())
                    }
                });
            }
            Err(e) => {
                eprintln!("Could not open log file {}: {} (logging to stderr)", file, e);
                builder.format(|fmt, record| {
                    let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                    writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
                });
            }
        }
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
