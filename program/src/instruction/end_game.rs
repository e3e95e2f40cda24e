use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    program_error::ProgramError,
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_token::instructions::MintTo;

use crate::error::{to_program_error, GameError};
use crate::helpers::*;
use crate::state::{EndGameData, GameState, Room};

/// Server reports final scores; each player is paid in PARK tokens.
///
/// Accounts (5 + one recipient per score):
/// 0. `[writable]` Room
/// 1. `[]`         Game state PDA, PARK mint authority
/// 2. `[writable]` PARK mint
/// 3. `[signer]`   Server wallet
/// 4. `[]`         SPL Token program
/// 5.. `[writable]` PARK token account of each scored player, in score order
pub fn process_end_game(accounts: &[AccountInfo], payload: &[u8]) -> ProgramResult {
    let [room_info, game_state_info, park_mint_info, server_info, token_program_info, recipients @ ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let args = EndGameData::parse(payload)?;

    require_signer(server_info)?;
    require_token_program(token_program_info)?;

    let game_state = GameState::from_account_info(game_state_info)?;
    if game_state.server_wallet != *server_info.key() {
        return Err(to_program_error(GameError::Unauthorized));
    }
    if !game_state.park_mint_created() {
        return Err(to_program_error(GameError::ParkTokenMissing));
    }
    if game_state.park_mint != *park_mint_info.key() {
        return Err(to_program_error(GameError::MintMismatch));
    }

    let room = Room::from_account_info_mut(room_info)?;
    room.check_finishable(args.len())?;
    args.check_unique()?;
    if recipients.len() < args.len() {
        return Err(ProgramError::NotEnoughAccountKeys);
    }

    let bump_seed = [game_state.bump];
    let seeds = [Seed::from(GAME_SEED), Seed::from(&bump_seed[..])];
    let signers = [Signer::from(&seeds[..])];

    for (score, recipient_info) in args.scores().zip(recipients.iter()) {
        if !room.contains_player(&score.player) {
            return Err(to_program_error(GameError::PlayerNotInRoom));
        }
        check_token_account(recipient_info, park_mint_info.key(), &score.player)?;

        let amount = score.payout()?;
        if amount == 0 {
            continue;
        }
        MintTo {
            mint: park_mint_info,
            account: recipient_info,
            mint_authority: game_state_info,
            amount,
        }
        .invoke_signed(&signers)?;
        log!("Minted {} PARK base units", amount);
    }

    let now = current_unix_timestamp()?;
    room.finish(now)?;
    pinocchio::msg!("Game ended");
    Ok(())
}
