pub mod args;       // PayAndStartData, EndGameData, PlayerScore
pub mod game_state; // GameState
pub mod room;       // Room, RoomStatus

// Re-export the types so everyone can `use crate::state::{...}`.
pub use args::{EndGameData, PayAndStartData, PlayerScore};
pub use game_state::GameState;
pub use room::{Room, RoomStatus};

/// First byte of every account this program owns.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Uninitialized = 0,
    GameState = 1,
    Room = 2,
}
