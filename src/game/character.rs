//! The player character: class table, stats and combat actions.
//!
//! Health and magic are plain `i32` counters with no clamping in either direction:
//! heals stack past the starting 100 and repeated casts drive magic negative.

use super::dice::Dice;
use super::enemy::Enemy;
use super::errors::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Health every new character starts with (and the good ending restores).
pub const STARTING_HEALTH: i32 = 100;
/// Magic spent per cast.
pub const MAGIC_COST: i32 = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
}

/// Fixed starting stats for a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassStats {
    pub strength: i32,
    pub agility: i32,
    pub magic: i32,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 3] = [
        CharacterClass::Warrior,
        CharacterClass::Mage,
        CharacterClass::Rogue,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Warrior => "Warrior",
            CharacterClass::Mage => "Mage",
            CharacterClass::Rogue => "Rogue",
        }
    }

    pub fn stats(self) -> ClassStats {
        match self {
            CharacterClass::Warrior => ClassStats {
                strength: 15,
                agility: 5,
                magic: 2,
            },
            CharacterClass::Mage => ClassStats {
                strength: 5,
                agility: 10,
                magic: 20,
            },
            CharacterClass::Rogue => ClassStats {
                strength: 10,
                agility: 15,
                magic: 5,
            },
        }
    }

    /// Class for a creation-menu entry: exactly `1`, `2` or `3`.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(CharacterClass::Warrior),
            "2" => Some(CharacterClass::Mage),
            "3" => Some(CharacterClass::Rogue),
            _ => None,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterClass {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterClass::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| GameError::InvalidClass(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    pub class: CharacterClass,
    pub health: i32,
    pub strength: i32,
    pub agility: i32,
    pub magic: i32,
    /// Carried items. Nothing in the current adventure hands any out.
    #[serde(default)]
    pub inventory: Vec<String>,
}

impl Character {
    pub fn new(name: impl Into<String>, class: CharacterClass) -> Self {
        let stats = class.stats();
        Character {
            name: name.into(),
            class,
            health: STARTING_HEALTH,
            strength: stats.strength,
            agility: stats.agility,
            magic: stats.magic,
            inventory: Vec::new(),
        }
    }

    /// Build a character from a class name, failing on anything but Warrior, Mage or Rogue.
    pub fn from_class_name(name: impl Into<String>, class: &str) -> Result<Self, GameError> {
        let class = class.parse::<CharacterClass>()?;
        Ok(Character::new(name, class))
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Weapon strike: 5..=10 plus half strength. Returns damage dealt.
    pub fn attack(&self, enemy: &mut Enemy, dice: &mut impl Dice) -> i32 {
        let damage = dice.roll(5, 10) + self.strength / 2;
        enemy.health -= damage;
        log::debug!(
            "{} hits {} for {} (enemy hp {})",
            self.name,
            enemy.name,
            damage,
            enemy.health
        );
        damage
    }

    /// Spell: 10..=20 plus current magic, costing [`MAGIC_COST`]. With no magic left
    /// nothing happens and 0 is returned.
    pub fn use_magic(&mut self, enemy: &mut Enemy, dice: &mut impl Dice) -> i32 {
        if self.magic <= 0 {
            log::debug!("{} tried to cast with magic {}", self.name, self.magic);
            return 0;
        }
        let damage = dice.roll(10, 20) + self.magic;
        enemy.health -= damage;
        self.magic -= MAGIC_COST;
        log::debug!(
            "{} casts at {} for {} (enemy hp {}, magic now {})",
            self.name,
            enemy.name,
            damage,
            enemy.health,
            self.magic
        );
        damage
    }

    pub fn heal(&mut self, dice: &mut impl Dice) -> i32 {
        let healing = dice.roll(10, 20);
        self.health += healing;
        log::debug!("{} heals {} (hp {})", self.name, healing, self.health);
        healing
    }

    pub fn display_stats(&self) -> String {
        format!(
            "{} ({}) - Health: {}, Strength: {}, Agility: {}, Magic: {}",
            self.name, self.class, self.health, self.strength, self.agility, self.magic
        )
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_stats())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::dice::{RngDice, ScriptedDice};

    fn dummy(health: i32) -> Enemy {
        Enemy::new("Dummy", health, 0)
    }

    #[test]
    fn class_table_matches_each_variant() {
        let expected = [
            ("Warrior", 15, 5, 2),
            ("Mage", 5, 10, 20),
            ("Rogue", 10, 15, 5),
        ];
        for (name, s, a, m) in expected {
            let c = Character::from_class_name("Tester", name).unwrap();
            assert_eq!(c.health, 100);
            assert_eq!((c.strength, c.agility, c.magic), (s, a, m), "stats for {}", name);
            assert!(c.inventory.is_empty());
        }
    }

    #[test]
    fn unknown_class_names_are_rejected() {
        for bad in ["Paladin", "warrior", "", " Mage", "1"] {
            let err = Character::from_class_name("Tester", bad).unwrap_err();
            assert!(
                matches!(err, GameError::InvalidClass(ref s) if s == bad),
                "expected InvalidClass for {:?}, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn menu_choices_map_to_classes() {
        assert_eq!(CharacterClass::from_menu_choice("1"), Some(CharacterClass::Warrior));
        assert_eq!(CharacterClass::from_menu_choice("2"), Some(CharacterClass::Mage));
        assert_eq!(CharacterClass::from_menu_choice("3"), Some(CharacterClass::Rogue));
        assert_eq!(CharacterClass::from_menu_choice(" 2 "), None);
        assert_eq!(CharacterClass::from_menu_choice("4"), None);
        assert_eq!(CharacterClass::from_menu_choice("Mage"), None);
    }

    #[test]
    fn attack_damage_stays_in_strength_band() {
        let mut dice = RngDice::seeded(1);
        for class in CharacterClass::ALL {
            let hero = Character::new("Tester", class);
            let bonus = hero.strength / 2;
            for _ in 0..200 {
                let mut target = dummy(1000);
                let dmg = hero.attack(&mut target, &mut dice);
                assert!(
                    (5 + bonus..=10 + bonus).contains(&dmg),
                    "{} damage {} out of band",
                    class,
                    dmg
                );
                assert_eq!(target.health, 1000 - dmg);
            }
        }
    }

    #[test]
    fn attack_can_push_enemy_below_zero() {
        let hero = Character::new("Tester", CharacterClass::Warrior);
        let mut target = dummy(3);
        let dmg = hero.attack(&mut target, &mut ScriptedDice::new([10]));
        assert_eq!(dmg, 17);
        assert_eq!(target.health, -14);
        assert!(!target.is_alive());
    }

    #[test]
    fn magic_spends_five_and_scales_with_magic() {
        let mut dice = RngDice::seeded(3);
        let mut hero = Character::new("Tester", CharacterClass::Mage);
        let mut target = dummy(10_000);
        while hero.magic > 0 {
            let before = hero.magic;
            let hp_before = target.health;
            let dmg = hero.use_magic(&mut target, &mut dice);
            assert!(
                (10 + before..=20 + before).contains(&dmg),
                "damage {} with magic {}",
                dmg,
                before
            );
            assert_eq!(hero.magic, before - 5);
            assert_eq!(target.health, hp_before - dmg);
        }
        assert_eq!(hero.magic, 0);
    }

    #[test]
    fn magic_goes_negative_then_stops() {
        let mut hero = Character::new("Tester", CharacterClass::Warrior);
        let mut target = dummy(100);
        let dmg = hero.use_magic(&mut target, &mut ScriptedDice::new([10]));
        assert_eq!(dmg, 12);
        assert_eq!(hero.magic, -3);

        let mut dice = ScriptedDice::new([20]);
        let snapshot = (hero.clone(), target.clone());
        assert_eq!(hero.use_magic(&mut target, &mut dice), 0);
        assert_eq!((hero, target), snapshot);
        assert_eq!(dice.remaining(), 1, "no roll should be consumed without magic");
    }

    #[test]
    fn heal_has_no_ceiling() {
        let mut dice = RngDice::seeded(9);
        let mut hero = Character::new("Tester", CharacterClass::Rogue);
        for _ in 0..50 {
            let before = hero.health;
            let amount = hero.heal(&mut dice);
            assert!((10..=20).contains(&amount));
            assert_eq!(hero.health, before + amount);
        }
        assert!(hero.health > STARTING_HEALTH + 400);
    }

    #[test]
    fn alive_means_positive_health() {
        let mut hero = Character::new("Tester", CharacterClass::Warrior);
        for (hp, alive) in [(1, true), (0, false), (-25, false), (250, true)] {
            hero.health = hp;
            assert_eq!(hero.is_alive(), alive, "health {}", hp);
        }
    }

    #[test]
    fn stats_line_format() {
        let hero = Character::new("Morgana", CharacterClass::Mage);
        assert_eq!(
            hero.display_stats(),
            "Morgana (Mage) - Health: 100, Strength: 5, Agility: 10, Magic: 20"
        );
        assert_eq!(hero.to_string(), hero.display_stats());
    }

    #[test]
    fn class_serializes_by_name() {
        let json = serde_json::to_string(&CharacterClass::Rogue).unwrap();
        assert_eq!(json, "\"Rogue\"");
        let back: CharacterClass = serde_json::from_str("\"Mage\"").unwrap();
        assert_eq!(back, CharacterClass::Mage);
    }
}
