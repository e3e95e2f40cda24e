use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey};
use shank::ShankAccount;

use crate::error::GameError;
use crate::helpers::{
    require_program_owned, require_writable, MAX_MAPS, MAX_PLAYERS, MIN_PLAYERS_TO_START,
    ROOM_TTL_SECONDS,
};
use crate::state::AccountKind;

pub type UnixTimestamp = [u8; 8];

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    Waiting = 0,
    Active = 1,
    Completed = 2,
    Expired = 3,
}

impl TryFrom<u8> for RoomStatus {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RoomStatus::Waiting),
            1 => Ok(RoomStatus::Active),
            2 => Ok(RoomStatus::Completed),
            3 => Ok(RoomStatus::Expired),
            _ => Err(ProgramError::InvalidAccountData),
        }
    }
}

// Shank wants literal array lengths in account layouts.
const _: () = assert!(MAX_PLAYERS == 4 && MAX_MAPS == 8);

/// A game room. Waiting -> Active -> Completed, or Waiting -> Expired.
#[repr(C)]
#[derive(ShankAccount, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub discriminator: u8,
    status: u8,
    player_count: u8,
    map_count: u8,
    pub host: Pubkey,
    players: [Pubkey; 4],
    selected_maps: [u8; 8],
    created_at: UnixTimestamp,
    expires_at: UnixTimestamp,
    started_at: UnixTimestamp,
    ended_at: UnixTimestamp,
}

impl Room {
    pub const LEN: usize = core::mem::size_of::<Room>();

    pub fn init(&mut self, host: &Pubkey, now: i64) {
        self.discriminator = AccountKind::Room as u8;
        self.status = RoomStatus::Waiting as u8;
        self.player_count = 0;
        self.map_count = 0;
        self.host = *host;
        self.players = [Pubkey::default(); MAX_PLAYERS];
        self.selected_maps = [0; MAX_MAPS];
        self.created_at = now.to_le_bytes();
        self.expires_at = now.saturating_add(ROOM_TTL_SECONDS).to_le_bytes();
        self.started_at = 0i64.to_le_bytes();
        self.ended_at = 0i64.to_le_bytes();
    }

    #[inline]
    pub fn status(&self) -> Result<RoomStatus, ProgramError> {
        RoomStatus::try_from(self.status)
    }

    #[inline]
    pub fn players(&self) -> &[Pubkey] {
        &self.players[..(self.player_count as usize).min(MAX_PLAYERS)]
    }

    #[inline]
    pub fn selected_maps(&self) -> &[u8] {
        &self.selected_maps[..(self.map_count as usize).min(MAX_MAPS)]
    }

    pub fn contains_player(&self, player: &Pubkey) -> bool {
        self.players().iter().any(|p| p == player)
    }

    pub fn created_at(&self) -> i64 {
        i64::from_le_bytes(self.created_at)
    }

    pub fn expires_at(&self) -> i64 {
        i64::from_le_bytes(self.expires_at)
    }

    pub fn started_at(&self) -> i64 {
        i64::from_le_bytes(self.started_at)
    }

    pub fn ended_at(&self) -> i64 {
        i64::from_le_bytes(self.ended_at)
    }

    #[inline]
    pub fn is_expired(&self, now: i64) -> bool {
        now > self.expires_at()
    }

    fn require_status(&self, expected: RoomStatus) -> Result<(), GameError> {
        match self.status() {
            Ok(status) if status == expected => Ok(()),
            _ => Err(GameError::InvalidRoomState),
        }
    }

    pub fn join(&mut self, player: &Pubkey, now: i64) -> Result<(), GameError> {
        self.require_status(RoomStatus::Waiting)?;
        if self.is_expired(now) {
            return Err(GameError::RoomExpired);
        }
        if self.contains_player(player) {
            return Err(GameError::AlreadyJoined);
        }
        let count = self.player_count as usize;
        if count >= MAX_PLAYERS {
            return Err(GameError::RoomFull);
        }
        self.players[count] = *player;
        self.player_count += 1;
        Ok(())
    }

    pub fn start(&mut self, host: &Pubkey, maps: &[u8], now: i64) -> Result<(), GameError> {
        if host != &self.host {
            return Err(GameError::Unauthorized);
        }
        self.require_status(RoomStatus::Waiting)?;
        if self.players().len() < MIN_PLAYERS_TO_START {
            return Err(GameError::NotEnoughPlayers);
        }
        if maps.is_empty() || maps.len() > MAX_MAPS {
            return Err(GameError::InvalidMapSelection);
        }
        self.selected_maps = [0; MAX_MAPS];
        self.selected_maps[..maps.len()].copy_from_slice(maps);
        self.map_count = maps.len() as u8;
        self.status = RoomStatus::Active as u8;
        self.started_at = now.to_le_bytes();
        Ok(())
    }

    /// Entry checks for a payout, run before any tokens move.
    pub fn check_finishable(&self, score_count: usize) -> Result<(), GameError> {
        self.require_status(RoomStatus::Active)?;
        if score_count > self.players().len() {
            return Err(GameError::TooManyScores);
        }
        Ok(())
    }

    pub fn finish(&mut self, now: i64) -> Result<(), GameError> {
        self.require_status(RoomStatus::Active)?;
        self.status = RoomStatus::Completed as u8;
        self.ended_at = now.to_le_bytes();
        Ok(())
    }

    pub fn expire(&mut self, now: i64) -> Result<(), GameError> {
        self.require_status(RoomStatus::Waiting)?;
        if !self.is_expired(now) {
            return Err(GameError::RoomNotExpired);
        }
        self.status = RoomStatus::Expired as u8;
        self.ended_at = now.to_le_bytes();
        Ok(())
    }

    pub fn check_closable(&self, host: &Pubkey) -> Result<(), GameError> {
        if host != &self.host {
            return Err(GameError::Unauthorized);
        }
        match self.status() {
            Ok(RoomStatus::Completed) | Ok(RoomStatus::Expired) => Ok(()),
            _ => Err(GameError::InvalidRoomState),
        }
    }

    pub fn load(data: &[u8]) -> Result<&Self, ProgramError> {
        if data.len() < Self::LEN || data[0] != AccountKind::Room as u8 {
            return Err(ProgramError::InvalidAccountData);
        }
        // All fields are bytes, so any offset is suitably aligned.
        Ok(unsafe { &*(data.as_ptr() as *const Self) })
    }

    pub fn load_mut(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
        if data.len() < Self::LEN || data[0] != AccountKind::Room as u8 {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(unsafe { &mut *(data.as_mut_ptr() as *mut Self) })
    }

    pub fn load_uninit(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
        if data.len() < Self::LEN || data[0] != AccountKind::Uninitialized as u8 {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(unsafe { &mut *(data.as_mut_ptr() as *mut Self) })
    }

    pub fn from_account_info_mut(account: &AccountInfo) -> Result<&mut Self, ProgramError> {
        require_program_owned(account)?;
        require_writable(account)?;
        Self::load_mut(unsafe { account.borrow_mut_data_unchecked() })
    }
}
