use super::character::Character;
use super::dice::Dice;
use serde::{Deserialize, Serialize};

/// An opponent. Values are taken as given; nothing is validated or clamped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Enemy {
    pub name: String,
    pub health: i32,
    pub strength: i32,
}

impl Enemy {
    pub fn new(name: impl Into<String>, health: i32, strength: i32) -> Self {
        Enemy {
            name: name.into(),
            health,
            strength,
        }
    }

    /// Counter-attack: 5..=10 plus half strength, taken straight off the player's health.
    pub fn attack(&self, player: &mut Character, dice: &mut impl Dice) -> i32 {
        let damage = dice.roll(5, 10) + self.strength / 2;
        player.health -= damage;
        log::debug!(
            "{} hits {} for {} (player hp {})",
            self.name,
            player.name,
            damage,
            player.health
        );
        damage
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}
