//! # Game Core
//!
//! Everything needed to play one run of the adventure.
//!
//! ## Components
//!
//! - [`character`] - Player classes, stats and combat actions
//! - [`enemy`] - Opponent stats and counter-attacks
//! - [`location`] - Scripted scenes: random encounter, combat loop, story choice
//! - [`world`] - The two fixed locations
//! - [`driver`] - Character creation, scene order and endings
//! - [`dice`] - Injected random source
//! - [`console`] - Injected line-based I/O
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kingdoms_call::game::{Game, LineConsole, RngDice};
//!
//! fn main() -> anyhow::Result<()> {
//!     let stdin = std::io::stdin();
//!     let console = LineConsole::new(stdin.lock(), std::io::stdout());
//!     let summary = Game::new(RngDice::seeded(7), console).run()?;
//!     println!("{:?}", summary.ending);
//!     Ok(())
//! }
//! ```

pub mod character;
pub mod console;
pub mod dice;
pub mod driver;
pub mod enemy;
pub mod errors;
pub mod location;
pub mod world;

pub use character::{Character, CharacterClass, ClassStats};
pub use console::{Console, LineConsole};
pub use dice::{Dice, RngDice, ScriptedDice};
pub use driver::{Ending, Game, GameSummary};
pub use enemy::Enemy;
pub use errors::{GameError, Result};
pub use location::{CombatAction, CombatState, Location, Response, SceneReport};
