use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};

use crate::helpers::*;
use crate::state::Room;
use crate::ID;

/// Open a waiting room that stays joinable for `ROOM_TTL_SECONDS`.
///
/// Accounts (exactly 3):
/// 0. `[writable, signer]` New room account
/// 1. `[writable, signer]` Host, pays rent
/// 2. `[]`                 System program
pub fn process_create_room(accounts: &[AccountInfo]) -> ProgramResult {
    let [room_info, host_info, system_program_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(room_info)?;
    require_signer(host_info)?;
    require_system_program(system_program_info)?;
    require_uninitialized(room_info)?;

    create_account(host_info, room_info, Room::LEN, &ID, &[])?;

    let now = current_unix_timestamp()?;
    let data = unsafe { room_info.borrow_mut_data_unchecked() };
    Room::load_uninit(data)?.init(host_info.key(), now);

    pinocchio::msg!("Room created");
    Ok(())
}
