use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};

use crate::helpers::*;
use crate::state::Room;

/// Anyone may mark a waiting room expired once its deadline has passed.
///
/// Accounts (exactly 1):
/// 0. `[writable]` Waiting room past `expires_at`
pub fn process_expire_room(accounts: &[AccountInfo]) -> ProgramResult {
    let [room_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let room = Room::from_account_info_mut(room_info)?;
    room.expire(current_unix_timestamp()?)?;

    pinocchio::msg!("Room expired");
    Ok(())
}
