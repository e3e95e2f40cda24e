use pinocchio::{
    account_info::AccountInfo,
    instruction::Signer,
    program_error::ProgramError,
    pubkey::{find_program_address, Pubkey},
    sysvars::{clock::Clock, rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_system::instructions::CreateAccount;

use crate::error::{to_program_error, GameError};
use crate::ID;

#[inline(always)]
pub fn require_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    Ok(())
}

#[inline(always)]
pub fn require_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable() {
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(())
}

#[inline(always)]
pub fn require_program_owned(account: &AccountInfo) -> ProgramResult {
    if !account.is_owned_by(&ID) {
        return Err(ProgramError::InvalidAccountOwner);
    }
    Ok(())
}

pub fn require_system_program(account: &AccountInfo) -> ProgramResult {
    if account.key() != &pinocchio_system::ID {
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

pub fn require_token_program(account: &AccountInfo) -> ProgramResult {
    if account.key() != &pinocchio_token::ID {
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

/// Derive the canonical PDA for `seeds` and check that `account` sits at it.
/// Returns the bump.
pub fn verify_pda(account: &AccountInfo, seeds: &[&[u8]]) -> Result<u8, ProgramError> {
    let (expected, bump) = find_program_address(seeds, &ID);
    if account.key() != &expected {
        return Err(to_program_error(GameError::InvalidAddress));
    }
    Ok(bump)
}

/// Fresh accounts are still owned by the system program and carry no data.
pub fn require_uninitialized(account: &AccountInfo) -> ProgramResult {
    if !account.data_is_empty() || account.is_owned_by(&ID) {
        return Err(to_program_error(GameError::AlreadyInitialized));
    }
    Ok(())
}

#[inline]
pub fn current_unix_timestamp() -> Result<i64, ProgramError> {
    Ok(Clock::get()?.unix_timestamp)
}

/// Create a rent-exempt account of `space` bytes owned by `owner`, funded by `payer`.
/// PDAs pass their seeds through `signers`; keypair accounts sign the transaction.
pub fn create_account(
    payer: &AccountInfo,
    new_account: &AccountInfo,
    space: usize,
    owner: &Pubkey,
    signers: &[Signer],
) -> ProgramResult {
    let lamports = Rent::get()?.minimum_balance(space);
    CreateAccount {
        from: payer,
        to: new_account,
        lamports,
        space: space as u64,
        owner,
    }
    .invoke_signed(signers)
}

// Move lamports between two accounts (checked)
pub fn relocate_lamports(
    source_account_info: &AccountInfo,
    destination_account_info: &AccountInfo,
    lamports: u64,
) -> ProgramResult {
    {
        let mut source_lamports = source_account_info.try_borrow_mut_lamports()?;
        *source_lamports = source_lamports
            .checked_sub(lamports)
            .ok_or(ProgramError::InsufficientFunds)?;
    }
    {
        let mut destination_lamports = destination_account_info.try_borrow_mut_lamports()?;
        *destination_lamports = destination_lamports
            .checked_add(lamports)
            .ok_or(ProgramError::ArithmeticOverflow)?;
    }
    Ok(())
}
