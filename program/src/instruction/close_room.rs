use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};

use crate::helpers::*;
use crate::state::Room;

/// Return a finished room's rent to its host and wipe the account.
///
/// Accounts (exactly 2):
/// 0. `[writable]`         Completed or expired room
/// 1. `[writable, signer]` Host
pub fn process_close_room(accounts: &[AccountInfo]) -> ProgramResult {
    let [room_info, host_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(host_info)?;
    require_writable(host_info)?;
    if room_info.key() == host_info.key() {
        return Err(ProgramError::InvalidArgument);
    }

    Room::from_account_info_mut(room_info)?.check_closable(host_info.key())?;

    relocate_lamports(room_info, host_info, room_info.lamports())?;
    room_info.try_borrow_mut_data()?.fill(0);

    pinocchio::msg!("Room closed");
    Ok(())
}
