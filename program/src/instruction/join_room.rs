use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};
use pinocchio_log::log;

use crate::helpers::*;
use crate::state::Room;

/// Accounts (exactly 2):
/// 0. `[writable]` Room
/// 1. `[signer]`   Player
pub fn process_join_room(accounts: &[AccountInfo]) -> ProgramResult {
    let [room_info, player_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(player_info)?;
    let room = Room::from_account_info_mut(room_info)?;

    let now = current_unix_timestamp()?;
    room.join(player_info.key(), now)?;

    log!("Player joined, {} seated", room.players().len());
    Ok(())
}
