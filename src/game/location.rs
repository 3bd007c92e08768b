//! A scripted scene: an optional random encounter followed by one story choice.
//!
//! Combat runs as a small state machine. Each recognised action (`attack`, `magic`,
//! `heal`) is one turn and is always followed by the enemy's counter-attack unless the
//! enemy just fell. Unrecognised input re-prompts without spending a turn.

use super::character::Character;
use super::console::{normalize, Console};
use super::dice::Dice;
use super::enemy::Enemy;
use super::errors::Result;
use crate::logutil::escape_log;
use std::collections::BTreeMap;

const ACTION_PROMPT: &str = "Choose an action (Attack / Magic / Heal): ";
const CHOICE_PROMPT: &str = "What will you do? ";
const INVALID_CHOICE: &str = "Invalid choice. The story has taken an unexpected turn.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatState {
    Ongoing,
    EnemyDefeated,
    PlayerDefeated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    Attack,
    Magic,
    Heal,
}

impl CombatAction {
    /// Parse an already-normalized action token.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "attack" => Some(CombatAction::Attack),
            "magic" => Some(CombatAction::Magic),
            "heal" => Some(CombatAction::Heal),
            _ => None,
        }
    }
}

/// What a story choice does once picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Print a line of narration; the player is left untouched.
    Narrate(String),
}

impl Response {
    pub fn narrate(text: impl Into<String>) -> Self {
        Response::Narrate(text.into())
    }

    fn apply(&self, _player: &mut Character, console: &mut impl Console) -> Result<()> {
        match self {
            Response::Narrate(text) => console.say(text),
        }
    }
}

/// Summary of one [`Location::enter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneReport {
    pub location: String,
    pub enemy: Option<String>,
    pub combat: Option<CombatState>,
    /// Turns spent on recognised actions.
    pub turns: u32,
    /// Normalized key of the matched story choice; `None` when nothing matched.
    pub choice: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Location {
    pub name: String,
    pub description: String,
    pub enemies: Vec<Enemy>,
    pub story_prompt: String,
    outcomes: BTreeMap<String, Response>,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        enemies: Vec<Enemy>,
        story_prompt: impl Into<String>,
    ) -> Self {
        Location {
            name: name.into(),
            description: description.into(),
            enemies,
            story_prompt: story_prompt.into(),
            outcomes: BTreeMap::new(),
        }
    }

    /// Register a story choice. Keys are stored and matched lowercased.
    pub fn with_response(mut self, choice: &str, response: Response) -> Self {
        self.outcomes.insert(normalize(choice), response);
        self
    }

    pub fn response_for(&self, input: &str) -> Option<&Response> {
        self.outcomes.get(&normalize(input))
    }

    /// Story choice keys, in sorted order.
    pub fn choices(&self) -> impl Iterator<Item = &str> {
        self.outcomes.keys().map(String::as_str)
    }

    pub fn enter(
        &self,
        player: &mut Character,
        dice: &mut impl Dice,
        console: &mut impl Console,
    ) -> Result<SceneReport> {
        log::info!("entering {}", self.name);
        console.say_after_gap(&format!(
            "You have entered {}: {}",
            self.name, self.description
        ))?;

        let mut report = SceneReport {
            location: self.name.clone(),
            enemy: None,
            combat: None,
            turns: 0,
            choice: None,
        };

        if !self.enemies.is_empty() {
            let mut enemy = self.enemies[dice.pick(self.enemies.len())].clone();
            console.say_after_gap(&format!("A wild {} appears!", enemy.name))?;
            let (state, turns) = fight(player, &mut enemy, dice, console)?;
            report.enemy = Some(enemy.name);
            report.combat = Some(state);
            report.turns = turns;
        }

        console.say_after_gap(&self.story_prompt)?;
        let raw = console.ask(CHOICE_PROMPT)?;
        let key = normalize(&raw);
        match self.outcomes.get(&key) {
            Some(response) => {
                response.apply(player, console)?;
                report.choice = Some(key);
            }
            None => {
                log::debug!("{}: unmatched choice '{}'", self.name, escape_log(&raw));
                console.say(INVALID_CHOICE)?;
            }
        }

        log::debug!("scene report: {:?}", report);
        Ok(report)
    }
}

fn combat_state(player: &Character, enemy: &Enemy) -> CombatState {
    if !enemy.is_alive() {
        CombatState::EnemyDefeated
    } else if !player.is_alive() {
        CombatState::PlayerDefeated
    } else {
        CombatState::Ongoing
    }
}

/// Run one encounter to completion. Returns the final state and the turns taken.
fn fight(
    player: &mut Character,
    enemy: &mut Enemy,
    dice: &mut impl Dice,
    console: &mut impl Console,
) -> Result<(CombatState, u32)> {
    let mut turns = 0u32;
    let mut state = combat_state(player, enemy);
    while state == CombatState::Ongoing {
        let raw = console.ask(ACTION_PROMPT)?;
        let Some(action) = CombatAction::parse(&normalize(&raw)) else {
            console.say("Invalid action. Try again.")?;
            continue;
        };
        turns += 1;
        match action {
            CombatAction::Attack => {
                let damage = player.attack(enemy, dice);
                console.say(&format!("You attacked the {} for {} damage.", enemy.name, damage))?;
            }
            CombatAction::Magic => {
                let damage = player.use_magic(enemy, dice);
                if damage > 0 {
                    console.say(&format!(
                        "You cast a spell on the {} for {} damage!",
                        enemy.name, damage
                    ))?;
                } else {
                    console.say("You have no magic left!")?;
                }
            }
            CombatAction::Heal => {
                let healing = player.heal(dice);
                console.say(&format!("You healed yourself for {} HP.", healing))?;
            }
        }

        if !enemy.is_alive() {
            console.say(&format!("You defeated the {}!", enemy.name))?;
            state = CombatState::EnemyDefeated;
            break;
        }
        let damage = enemy.attack(player, dice);
        console.say(&format!("The {} attacked you for {} damage.", enemy.name, damage))?;
        state = combat_state(player, enemy);
    }
    log::debug!("combat vs {} ended {:?} after {} turns", enemy.name, state, turns);
    Ok((state, turns))
}
