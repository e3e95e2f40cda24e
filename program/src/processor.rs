use pinocchio::{
    account_info::AccountInfo, msg, program_error::ProgramError, pubkey::Pubkey, ProgramResult,
};

use crate::instruction::{self, ParkInstruction};

#[inline(always)]
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if *program_id != crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    // Host builds also accept bincode-encoded instructions from off-chain tooling.
    // SBF builds have no `std`, so on-chain dispatch only ever sees the raw format.
    #[cfg(feature = "std")]
    {
        if let Some(raw) = wire::normalize(instruction_data) {
            return dispatch(accounts, &raw);
        }
    }

    dispatch(accounts, instruction_data)
}

fn dispatch(accounts: &[AccountInfo], instruction_data: &[u8]) -> ProgramResult {
    let (disc, payload) = instruction_data
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;

    match ParkInstruction::try_from(disc)? {
        ParkInstruction::Initialize => {
            msg!("Instruction: Initialize");
            no_payload(payload)?;
            instruction::process_initialize(accounts)
        }
        ParkInstruction::CreateParkToken => {
            msg!("Instruction: CreateParkToken");
            no_payload(payload)?;
            instruction::process_create_park_token(accounts)
        }
        ParkInstruction::CreateRoom => {
            msg!("Instruction: CreateRoom");
            no_payload(payload)?;
            instruction::process_create_room(accounts)
        }
        ParkInstruction::JoinRoom => {
            msg!("Instruction: JoinRoom");
            no_payload(payload)?;
            instruction::process_join_room(accounts)
        }
        ParkInstruction::PayAndStart => {
            msg!("Instruction: PayAndStart");
            instruction::process_pay_and_start(accounts, payload)
        }
        ParkInstruction::EndGame => {
            msg!("Instruction: EndGame");
            instruction::process_end_game(accounts, payload)
        }
        ParkInstruction::ExpireRoom => {
            msg!("Instruction: ExpireRoom");
            no_payload(payload)?;
            instruction::process_expire_room(accounts)
        }
        ParkInstruction::CloseRoom => {
            msg!("Instruction: CloseRoom");
            no_payload(payload)?;
            instruction::process_close_room(accounts)
        }
    }
}

#[inline(always)]
fn no_payload(payload: &[u8]) -> ProgramResult {
    if !payload.is_empty() {
        return Err(ProgramError::InvalidInstructionData);
    }
    Ok(())
}

// Wire decoding for ParkInstruction (bincode) for std builds.
// Never compiled into the on-chain program.
#[cfg(feature = "std")]
pub mod wire {
    use bincode::Options;
    use serde::{Deserialize, Serialize};
    use std::vec::Vec;

    use crate::instruction::ParkInstruction as Disc;

    pub type WirePubkey = [u8; 32];

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PlayerScore {
        pub player: WirePubkey,
        pub tokens: u64,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub enum ParkInstruction {
        Initialize,
        CreateParkToken,
        CreateRoom,
        JoinRoom,
        PayAndStart { maps: Vec<u8> },
        EndGame { scores: Vec<PlayerScore> },
        ExpireRoom,
        CloseRoom,
    }

    fn options() -> impl Options {
        bincode::DefaultOptions::new()
            .with_fixint_encoding()
            .reject_trailing_bytes()
    }

    pub fn encode(ix: &ParkInstruction) -> Result<Vec<u8>, bincode::Error> {
        options().serialize(ix)
    }

    /// Lower a wire instruction to the raw `[discriminator][payload]` format.
    pub fn to_raw(ix: &ParkInstruction) -> Vec<u8> {
        match ix {
            ParkInstruction::Initialize => vec![Disc::Initialize as u8],
            ParkInstruction::CreateParkToken => vec![Disc::CreateParkToken as u8],
            ParkInstruction::CreateRoom => vec![Disc::CreateRoom as u8],
            ParkInstruction::JoinRoom => vec![Disc::JoinRoom as u8],
            ParkInstruction::PayAndStart { maps } => {
                let mut raw = Vec::with_capacity(2 + maps.len());
                raw.push(Disc::PayAndStart as u8);
                raw.push(u8::try_from(maps.len()).unwrap_or(u8::MAX));
                raw.extend_from_slice(maps);
                raw
            }
            ParkInstruction::EndGame { scores } => {
                let mut raw = Vec::with_capacity(2 + scores.len() * 40);
                raw.push(Disc::EndGame as u8);
                raw.push(u8::try_from(scores.len()).unwrap_or(u8::MAX));
                for score in scores {
                    raw.extend_from_slice(&score.player);
                    raw.extend_from_slice(&score.tokens.to_le_bytes());
                }
                raw
            }
            ParkInstruction::ExpireRoom => vec![Disc::ExpireRoom as u8],
            ParkInstruction::CloseRoom => vec![Disc::CloseRoom as u8],
        }
    }

    /// Raw instructions never decode here: bincode needs a four byte variant tag
    /// and rejects trailing bytes.
    pub fn normalize(data: &[u8]) -> Option<Vec<u8>> {
        options()
            .deserialize::<ParkInstruction>(data)
            .ok()
            .map(|ix| to_raw(&ix))
    }

}
