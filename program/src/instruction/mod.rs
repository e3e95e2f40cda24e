use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

pub mod close_room;
pub mod create_park_token;
pub mod create_room;
pub mod end_game;
pub mod expire_room;
pub mod initialize;
pub mod join_room;
pub mod pay_and_start;

pub use close_room::*;
pub use create_park_token::*;
pub use create_room::*;
pub use end_game::*;
pub use expire_room::*;
pub use initialize::*;
pub use join_room::*;
pub use pay_and_start::*;

#[repr(u8)]
#[derive(ShankInstruction, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParkInstruction {
    #[account(0, writable, name = "game_state", desc = "Game PDA, seeds [\"game\"]")]
    #[account(1, writable, signer, name = "admin", desc = "Pays for and administers the game")]
    #[account(2, name = "server", desc = "Game server wallet")]
    #[account(3, name = "system_program", desc = "System program")]
    Initialize,

    #[account(0, writable, name = "game_state", desc = "Game PDA")]
    #[account(1, writable, signer, name = "admin", desc = "Game admin, pays for the mint")]
    #[account(2, writable, name = "park_mint", desc = "PARK mint PDA, seeds [\"park_mint\"]")]
    #[account(3, name = "token_program", desc = "SPL Token program")]
    #[account(4, name = "system_program", desc = "System program")]
    CreateParkToken,

    #[account(0, writable, signer, name = "room", desc = "New room account")]
    #[account(1, writable, signer, name = "host", desc = "Room host, pays for the room")]
    #[account(2, name = "system_program", desc = "System program")]
    CreateRoom,

    #[account(0, writable, name = "room", desc = "Room to join")]
    #[account(1, signer, name = "player", desc = "Joining player")]
    JoinRoom,

    #[account(0, writable, name = "room", desc = "Room to start")]
    #[account(1, signer, name = "host", desc = "Room host")]
    #[account(2, name = "game_state", desc = "Game PDA")]
    #[account(3, writable, name = "from", desc = "Host GOR token account")]
    #[account(4, writable, name = "to", desc = "Server GOR token account")]
    #[account(5, name = "gor_mint", desc = "GOR mint")]
    #[account(6, name = "token_program", desc = "SPL Token program")]
    PayAndStart,

    #[account(0, writable, name = "room", desc = "Room to finish")]
    #[account(1, name = "game_state", desc = "Game PDA, PARK mint authority")]
    #[account(2, writable, name = "park_mint", desc = "PARK mint")]
    #[account(3, signer, name = "server", desc = "Game server wallet")]
    #[account(4, name = "token_program", desc = "SPL Token program")]
    EndGame,

    #[account(0, writable, name = "room", desc = "Waiting room past its deadline")]
    ExpireRoom,

    #[account(0, writable, name = "room", desc = "Completed or expired room")]
    #[account(1, writable, signer, name = "host", desc = "Room host, receives the rent")]
    CloseRoom,
}

impl TryFrom<&u8> for ParkInstruction {
    type Error = ProgramError;

    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match *value {
            0 => Ok(ParkInstruction::Initialize),
            1 => Ok(ParkInstruction::CreateParkToken),
            2 => Ok(ParkInstruction::CreateRoom),
            3 => Ok(ParkInstruction::JoinRoom),
            4 => Ok(ParkInstruction::PayAndStart),
            5 => Ok(ParkInstruction::EndGame),
            6 => Ok(ParkInstruction::ExpireRoom),
            7 => Ok(ParkInstruction::CloseRoom),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}
