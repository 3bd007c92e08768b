//! The fixed adventure: two locations visited in order.

use super::enemy::Enemy;
use super::location::{Location, Response};

pub fn haunted_forest() -> Location {
    Location::new(
        "Haunted Forest",
        "A dark and eerie forest filled with spirits and dangers.",
        vec![Enemy::new("Ghost", 30, 5), Enemy::new("Zombie", 50, 8)],
        "You encounter a spooky figure. Do you approach it or run?",
    )
    .with_response(
        "approach",
        Response::narrate("You approach and find a treasure chest!"),
    )
    .with_response(
        "run",
        Response::narrate("You run away, but an enemy attacks you."),
    )
}

pub fn enchanted_castle() -> Location {
    Location::new(
        "Enchanted Castle",
        "A majestic castle, rumored to be filled with magical beings.",
        vec![Enemy::new("Sorcerer", 100, 20)],
        "The castle's doors are locked. Will you try to pick the lock or knock?",
    )
    .with_response(
        "pick the lock",
        Response::narrate("You successfully pick the lock and enter."),
    )
    .with_response(
        "knock",
        Response::narrate("A guard opens the door and attacks!"),
    )
}

/// Locations in the order the player visits them.
pub fn default_world() -> Vec<Location> {
    vec![haunted_forest(), enchanted_castle()]
}
