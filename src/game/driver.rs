//! Top-level game flow: character creation, the locations in order, then the ending.

use super::character::{Character, CharacterClass, STARTING_HEALTH};
use super::console::Console;
use super::dice::Dice;
use super::errors::Result;
use super::location::{Location, SceneReport};
use super::world::default_world;
use crate::logutil::escape_log;

const GOOD_ENDING: &str =
    "Congratulations! You have defeated the dark forces and saved the kingdom!";
const BAD_ENDING: &str =
    "You have failed the kingdom. The evil forces have won, and all hope is lost.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Good,
    Bad,
}

impl Ending {
    pub fn resolve(player: &Character) -> Self {
        if player.is_alive() {
            Ending::Good
        } else {
            Ending::Bad
        }
    }

    /// Print the ending and pin health: full on a win, zero on a loss.
    pub fn apply(self, player: &mut Character, console: &mut impl Console) -> Result<()> {
        match self {
            Ending::Good => {
                console.say_after_gap(GOOD_ENDING)?;
                player.health = STARTING_HEALTH;
            }
            Ending::Bad => {
                console.say_after_gap(BAD_ENDING)?;
                player.health = 0;
            }
        }
        Ok(())
    }
}

/// Outcome of a full run.
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub ending: Ending,
    pub player: Character,
    pub scenes: Vec<SceneReport>,
}

pub struct Game<D, C> {
    dice: D,
    console: C,
    locations: Vec<Location>,
    intro: bool,
}

impl<D: Dice, C: Console> Game<D, C> {
    /// A game over the default two-location world.
    pub fn new(dice: D, console: C) -> Self {
        Game {
            dice,
            console,
            locations: default_world(),
            intro: true,
        }
    }

    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.locations = locations;
        self
    }

    /// Toggle the welcome banner shown before character creation.
    pub fn with_intro(mut self, intro: bool) -> Self {
        self.intro = intro;
        self
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Prompt for a name and class and return the new character.
    /// Anything but `1`/`2`/`3` at the class menu falls back to Warrior.
    pub fn start_game(&mut self) -> Result<Character> {
        if self.intro {
            self.console.say("Welcome to the RPG Game!")?;
        }
        let name = self.console.ask("Enter your character's name: ")?;
        self.console.say_after_gap("Choose your character class:")?;
        for (i, class) in CharacterClass::ALL.iter().enumerate() {
            self.console.say(&format!("{}. {}", i + 1, class))?;
        }
        let choice = self.console.ask("Enter 1, 2, or 3: ")?;
        let class = match CharacterClass::from_menu_choice(&choice) {
            Some(class) => class,
            None => {
                log::warn!("unknown class choice '{}', using Warrior", escape_log(&choice));
                self.console.say("Invalid choice, defaulting to Warrior.")?;
                CharacterClass::Warrior
            }
        };

        let player = Character::new(name, class);
        log::info!("created {} the {}", escape_log(&player.name), player.class);
        self.console
            .say_after_gap(&format!("Character created: {}", player.display_stats()))?;
        Ok(player)
    }

    /// Play from character creation to the ending. Every location is entered in
    /// order even after the player falls.
    pub fn run(&mut self) -> Result<GameSummary> {
        let mut player = self.start_game()?;
        let mut scenes = Vec::with_capacity(self.locations.len());
        for location in &self.locations {
            scenes.push(location.enter(&mut player, &mut self.dice, &mut self.console)?);
        }

        let ending = Ending::resolve(&player);
        log::info!(
            "{} reached the {:?} ending with {} health",
            escape_log(&player.name),
            ending,
            player.health
        );
        ending.apply(&mut player, &mut self.console)?;
        Ok(GameSummary {
            ending,
            player,
            scenes,
        })
    }
}
