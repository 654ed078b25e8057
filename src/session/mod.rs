//! Session layer: the player and the lifecycle of their matches

mod game;
mod player;

pub use game::{GameSession, GuessReport};
pub use player::Player;
