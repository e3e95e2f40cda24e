use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey};
use pinocchio_token::state::TokenAccount;

use crate::error::{to_program_error, GameError};

/// Check that `account` is an SPL token account for `mint` owned by `owner`.
pub fn check_token_account(
    account: &AccountInfo,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Result<(), ProgramError> {
    let token_account = TokenAccount::from_account_info(account)?;
    if token_account.mint() != mint {
        return Err(to_program_error(GameError::MintMismatch));
    }
    if token_account.owner() != owner {
        return Err(to_program_error(GameError::TokenOwnerMismatch));
    }
    Ok(())
}
