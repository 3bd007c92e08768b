//! # Kingdom's Call - a small turn-based text adventure
//!
//! Create a Warrior, Mage or Rogue, fight through the Haunted Forest and the
//! Enchanted Castle, make a choice in each, and find out whether the kingdom is saved.
//!
//! ## Features
//!
//! - **Class Table**: Fixed strength/agility/magic per class, looked up from a closed enum.
//! - **Turn-Based Combat**: Attack, Magic and Heal, each answered by the enemy's counter-attack.
//! - **Story Branches**: Each location ends with a free-text choice mapped to named responses.
//! - **Deterministic Play**: Randomness comes from an injected [`game::Dice`]; seed it for replays.
//! - **Pluggable I/O**: Prompts go through [`game::Console`]; tests drive games from a string.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kingdoms_call::config::Config;
//! use kingdoms_call::game::{Game, LineConsole, RngDice};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load_or_default("kingdoms-call.toml")?;
//!     let dice = match config.game.seed {
//!         Some(seed) => RngDice::seeded(seed),
//!         None => RngDice::from_entropy(),
//!     };
//!     let stdin = std::io::stdin();
//!     let mut game = Game::new(dice, LineConsole::new(stdin.lock(), std::io::stdout()));
//!     game.run()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - Characters, enemies, locations, combat and the game driver
//! - [`config`] - Configuration loading and defaults
//! - [`logutil`] - Log-safe escaping for player-typed text
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   Game driver   │ ← Character creation, scene order, endings
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │   Location      │ ← Encounter + story choice
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │ Character/Enemy │ ← Stats and combat actions
//! └─────────────────┘
//! ```

pub mod config;
pub mod game;
pub mod logutil;
