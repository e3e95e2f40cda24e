use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    program_error::ProgramError,
    ProgramResult,
};
use pinocchio_token::{instructions::InitializeMint2, state::Mint};

use crate::error::{to_program_error, GameError};
use crate::helpers::*;
use crate::state::GameState;

/// Create the PARK mint at its PDA. The game PDA is mint and freeze authority,
/// so only this program can pay out scores.
///
/// Accounts (exactly 5):
/// 0. `[writable]`         Game state PDA
/// 1. `[writable, signer]` Admin, pays rent
/// 2. `[writable]`         PARK mint PDA, seeds `[b"park_mint"]`
/// 3. `[]`                 SPL Token program
/// 4. `[]`                 System program
pub fn process_create_park_token(accounts: &[AccountInfo]) -> ProgramResult {
    let [game_state_info, admin_info, park_mint_info, token_program_info, system_program_info, _rest @ ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    require_signer(admin_info)?;
    require_token_program(token_program_info)?;
    require_system_program(system_program_info)?;

    let game_state = GameState::from_account_info_mut(game_state_info)?;
    if game_state.admin != *admin_info.key() {
        return Err(to_program_error(GameError::Unauthorized));
    }
    if game_state.park_mint_created() {
        return Err(to_program_error(GameError::ParkTokenExists));
    }

    let mint_bump = verify_pda(park_mint_info, &[PARK_MINT_SEED])?;
    require_uninitialized(park_mint_info)?;

    let bump_seed = [mint_bump];
    let seeds = [Seed::from(PARK_MINT_SEED), Seed::from(&bump_seed[..])];
    create_account(
        admin_info,
        park_mint_info,
        Mint::LEN,
        &pinocchio_token::ID,
        &[Signer::from(&seeds[..])],
    )?;

    InitializeMint2 {
        mint: park_mint_info,
        decimals: PARK_DECIMALS,
        mint_authority: game_state_info.key(),
        freeze_authority: Some(game_state_info.key()),
    }
    .invoke()?;

    game_state.set_park_mint(park_mint_info.key(), mint_bump);
    pinocchio::msg!("PARK token created");
    Ok(())
}
