use thiserror::Error;

/// Errors that can arise while setting up or playing the adventure.
#[derive(Debug, Error)]
pub enum GameError {
    /// Returned when a class name is not one of Warrior, Mage or Rogue.
    #[error("invalid character class: {0}")]
    InvalidClass(String),

    /// The console reached end of input while a prompt was waiting.
    #[error("input closed")]
    InputClosed,

    /// Wrapper around IO errors from the console.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
