use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};
use pinocchio_log::log;
use pinocchio_token::{instructions::TransferChecked, state::Mint};

use crate::helpers::*;
use crate::state::{GameState, PayAndStartData, Room};

/// Host pays the entry fee to the server wallet and the match begins.
///
/// Accounts (exactly 7):
/// 0. `[writable]` Room
/// 1. `[signer]`   Host
/// 2. `[]`         Game state PDA
/// 3. `[writable]` Host GOR token account
/// 4. `[writable]` Server GOR token account
/// 5. `[]`         GOR mint
/// 6. `[]`         SPL Token program
pub fn process_pay_and_start(accounts: &[AccountInfo], payload: &[u8]) -> ProgramResult {
    let [room_info, host_info, game_state_info, from_info, to_info, gor_mint_info, token_program_info, _rest @ ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let args = PayAndStartData::parse(payload)?;

    require_signer(host_info)?;
    require_token_program(token_program_info)?;

    let game_state = GameState::from_account_info(game_state_info)?;
    let room = Room::from_account_info_mut(room_info)?;

    let now = current_unix_timestamp()?;
    room.start(host_info.key(), args.maps, now)?;

    check_token_account(from_info, gor_mint_info.key(), host_info.key())?;
    check_token_account(to_info, gor_mint_info.key(), &game_state.server_wallet)?;
    let decimals = Mint::from_account_info(gor_mint_info)?.decimals();

    TransferChecked {
        from: from_info,
        mint: gor_mint_info,
        to: to_info,
        authority: host_info,
        amount: ENTRY_FEE,
        decimals,
    }
    .invoke()?;

    log!("Match started with {} players on {} maps", room.players().len(), args.maps.len());
    Ok(())
}
