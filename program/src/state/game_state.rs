use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey};
use shank::ShankAccount;

use crate::helpers::{require_program_owned, require_writable};
use crate::state::AccountKind;

/// Program-wide settings, stored at the `[b"game"]` PDA.
#[repr(C)]
#[derive(ShankAccount, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub discriminator: u8,
    pub bump: u8,
    pub park_mint_bump: u8,
    park_mint_created: u8,
    pub admin: Pubkey,
    pub server_wallet: Pubkey,
    pub park_mint: Pubkey,
}

impl GameState {
    pub const LEN: usize = core::mem::size_of::<GameState>();

    pub fn init(&mut self, admin: &Pubkey, server_wallet: &Pubkey, bump: u8) {
        self.discriminator = AccountKind::GameState as u8;
        self.bump = bump;
        self.park_mint_bump = 0;
        self.park_mint_created = 0;
        self.admin = *admin;
        self.server_wallet = *server_wallet;
        self.park_mint = Pubkey::default();
    }

    #[inline]
    pub fn park_mint_created(&self) -> bool {
        self.park_mint_created != 0
    }

    pub fn set_park_mint(&mut self, mint: &Pubkey, bump: u8) {
        self.park_mint = *mint;
        self.park_mint_bump = bump;
        self.park_mint_created = 1;
    }

    pub fn load(data: &[u8]) -> Result<&Self, ProgramError> {
        if data.len() < Self::LEN || data[0] != AccountKind::GameState as u8 {
            return Err(ProgramError::InvalidAccountData);
        }
        // All fields are bytes, so any offset is suitably aligned.
        Ok(unsafe { &*(data.as_ptr() as *const Self) })
    }

    pub fn load_mut(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
        if data.len() < Self::LEN || data[0] != AccountKind::GameState as u8 {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(unsafe { &mut *(data.as_mut_ptr() as *mut Self) })
    }

    /// View over freshly allocated, zeroed account data.
    pub fn load_uninit(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
        if data.len() < Self::LEN || data[0] != AccountKind::Uninitialized as u8 {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(unsafe { &mut *(data.as_mut_ptr() as *mut Self) })
    }

    pub fn from_account_info(account: &AccountInfo) -> Result<&Self, ProgramError> {
        require_program_owned(account)?;
        Self::load(unsafe { account.borrow_data_unchecked() })
    }

    pub fn from_account_info_mut(account: &AccountInfo) -> Result<&mut Self, ProgramError> {
        require_program_owned(account)?;
        require_writable(account)?;
        Self::load_mut(unsafe { account.borrow_mut_data_unchecked() })
    }
}
