use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    program_error::ProgramError,
    ProgramResult,
};
use pinocchio_log::log;

use crate::helpers::*;
use crate::state::GameState;
use crate::ID;

/// Create the game PDA and record who administers it.
///
/// Accounts (exactly 4):
/// 0. `[writable]`         Game state PDA, seeds `[b"game"]`
/// 1. `[writable, signer]` Admin, pays rent
/// 2. `[]`                 Server wallet
/// 3. `[]`                 System program
pub fn process_initialize(accounts: &[AccountInfo]) -> ProgramResult {
    let [game_state_info, admin_info, server_info, system_program_info, _rest @ ..] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(admin_info)?;
    require_system_program(system_program_info)?;

    let bump = verify_pda(game_state_info, &[GAME_SEED])?;
    require_uninitialized(game_state_info)?;

    let bump_seed = [bump];
    let seeds = [Seed::from(GAME_SEED), Seed::from(&bump_seed[..])];
    create_account(
        admin_info,
        game_state_info,
        GameState::LEN,
        &ID,
        &[Signer::from(&seeds[..])],
    )?;

    let data = unsafe { game_state_info.borrow_mut_data_unchecked() };
    GameState::load_uninit(data)?.init(admin_info.key(), server_info.key(), bump);

    log!("Game initialized, bump {}", bump);
    Ok(())
}
