use pinocchio::{program_error::ProgramError, pubkey::Pubkey};

use crate::error::GameError;
use crate::helpers::PARK_TOKEN_UNIT;

// PayAndStart instruction data: [n: u8][maps: n bytes]
// Only framing is checked here; `Room::start` enforces the map limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayAndStartData<'a> {
    pub maps: &'a [u8],
}

impl<'a> PayAndStartData<'a> {
    pub fn parse(data: &'a [u8]) -> Result<Self, ProgramError> {
        let (count, maps) = data
            .split_first()
            .ok_or(ProgramError::InvalidInstructionData)?;
        if maps.len() != *count as usize {
            return Err(ProgramError::InvalidInstructionData);
        }
        Ok(Self { maps })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerScore {
    pub player: Pubkey,
    pub tokens: u64,
}

impl PlayerScore {
    pub const LEN: usize = 32 + 8;

    fn read(bytes: &[u8]) -> Self {
        let mut player = [0u8; 32];
        player.copy_from_slice(&bytes[..32]);
        let mut tokens = [0u8; 8];
        tokens.copy_from_slice(&bytes[32..Self::LEN]);
        Self {
            player,
            tokens: u64::from_le_bytes(tokens),
        }
    }

    /// Base units minted for this score.
    pub fn payout(&self) -> Result<u64, GameError> {
        self.tokens
            .checked_mul(PARK_TOKEN_UNIT)
            .ok_or(GameError::ScoreOverflow)
    }
}

// EndGame instruction data: [n: u8][n * (player: 32 bytes, tokens: u64 LE)]
// Only framing is checked here; `Room::check_finishable` caps the score count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndGameData<'a> {
    raw: &'a [u8],
}

impl<'a> EndGameData<'a> {
    pub fn parse(data: &'a [u8]) -> Result<Self, ProgramError> {
        let (count, raw) = data
            .split_first()
            .ok_or(ProgramError::InvalidInstructionData)?;
        let count = *count as usize;
        if raw.len() != count * PlayerScore::LEN {
            return Err(ProgramError::InvalidInstructionData);
        }
        Ok(Self { raw })
    }

    pub fn len(&self) -> usize {
        self.raw.len() / PlayerScore::LEN
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn scores(&self) -> impl Iterator<Item = PlayerScore> + 'a {
        self.raw.chunks_exact(PlayerScore::LEN).map(PlayerScore::read)
    }

    /// Every scored player must be unique.
    pub fn check_unique(&self) -> Result<(), GameError> {
        for (i, score) in self.scores().enumerate() {
            if self.scores().skip(i + 1).any(|other| other.player == score.player) {
                return Err(GameError::DuplicateScore);
            }
        }
        Ok(())
    }
}
