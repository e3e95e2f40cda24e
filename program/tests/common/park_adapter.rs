use super::*;
use pinocchio_park::{
    helpers::{GAME_SEED, PARK_MINT_SEED},
    instruction::ParkInstruction,
};
use solana_sdk::{instruction::AccountMeta, system_program};

pub const MINT_LEN: u64 = 82;
pub const TOKEN_ACCOUNT_LEN: u64 = 165;

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(pinocchio_park::ID)
}

pub fn token_program_id() -> Pubkey {
    Pubkey::new_from_array(pinocchio_token::ID)
}

pub fn game_state_address() -> Pubkey {
    Pubkey::find_program_address(&[GAME_SEED], &program_id()).0
}

pub fn park_mint_address() -> Pubkey {
    Pubkey::find_program_address(&[PARK_MINT_SEED], &program_id()).0
}

pub mod ixn {
    use super::*;

    fn ix(disc: ParkInstruction, accounts: Vec<AccountMeta>, payload: &[u8]) -> Instruction {
        let mut data = Vec::with_capacity(1 + payload.len());
        data.push(disc as u8);
        data.extend_from_slice(payload);
        Instruction { program_id: program_id(), accounts, data }
    }

    pub fn initialize(admin: &Pubkey, server: &Pubkey) -> Instruction {
        initialize_at(&game_state_address(), admin, server)
    }

    pub fn initialize_at(game_state: &Pubkey, admin: &Pubkey, server: &Pubkey) -> Instruction {
        ix(
            ParkInstruction::Initialize,
            vec![
                AccountMeta::new(*game_state, false),
                AccountMeta::new(*admin, true),
                AccountMeta::new_readonly(*server, false),
                AccountMeta::new_readonly(system_program::id(), false),
            ],
            &[],
        )
    }

    pub fn create_park_token(admin: &Pubkey) -> Instruction {
        ix(
            ParkInstruction::CreateParkToken,
            vec![
                AccountMeta::new(game_state_address(), false),
                AccountMeta::new(*admin, true),
                AccountMeta::new(park_mint_address(), false),
                AccountMeta::new_readonly(token_program_id(), false),
                AccountMeta::new_readonly(system_program::id(), false),
            ],
            &[],
        )
    }

    pub fn create_room(room: &Pubkey, host: &Pubkey) -> Instruction {
        ix(
            ParkInstruction::CreateRoom,
            vec![
                AccountMeta::new(*room, true),
                AccountMeta::new(*host, true),
                AccountMeta::new_readonly(system_program::id(), false),
            ],
            &[],
        )
    }

    pub fn join_room(room: &Pubkey, player: &Pubkey) -> Instruction {
        ix(
            ParkInstruction::JoinRoom,
            vec![AccountMeta::new(*room, false), AccountMeta::new_readonly(*player, true)],
            &[],
        )
    }

    pub fn pay_and_start(
        room: &Pubkey,
        host: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        gor_mint: &Pubkey,
        maps: &[u8],
    ) -> Instruction {
        let mut payload = vec![maps.len() as u8];
        payload.extend_from_slice(maps);
        ix(
            ParkInstruction::PayAndStart,
            vec![
                AccountMeta::new(*room, false),
                AccountMeta::new_readonly(*host, true),
                AccountMeta::new_readonly(game_state_address(), false),
                AccountMeta::new(*from, false),
                AccountMeta::new(*to, false),
                AccountMeta::new_readonly(*gor_mint, false),
                AccountMeta::new_readonly(token_program_id(), false),
            ],
            &payload,
        )
    }

    /// `scores` pairs each player with the PARK token account that receives the payout.
    pub fn end_game(room: &Pubkey, server: &Pubkey, scores: &[(Pubkey, Pubkey, u64)]) -> Instruction {
        let mut payload = vec![scores.len() as u8];
        let mut accounts = vec![
            AccountMeta::new(*room, false),
            AccountMeta::new_readonly(game_state_address(), false),
            AccountMeta::new(park_mint_address(), false),
            AccountMeta::new_readonly(*server, true),
            AccountMeta::new_readonly(token_program_id(), false),
        ];
        for (player, recipient, tokens) in scores {
            payload.extend_from_slice(&player.to_bytes());
            payload.extend_from_slice(&tokens.to_le_bytes());
            accounts.push(AccountMeta::new(*recipient, false));
        }
        ix(ParkInstruction::EndGame, accounts, &payload)
    }

    pub fn expire_room(room: &Pubkey) -> Instruction {
        ix(ParkInstruction::ExpireRoom, vec![AccountMeta::new(*room, false)], &[])
    }

    pub fn close_room(room: &Pubkey, host: &Pubkey) -> Instruction {
        ix(
            ParkInstruction::CloseRoom,
            vec![AccountMeta::new(*room, false), AccountMeta::new(*host, true)],
            &[],
        )
    }
}

// ---- SPL token plumbing (hand-packed, matches spl-token's wire format) ----

pub async fn create_mint(ctx: &mut ProgramTestContext, authority: &Pubkey, decimals: u8) -> Pubkey {
    let mint = Keypair::new();
    let rent = ctx.banks_client.get_rent().await.unwrap();
    let create = system_instruction::create_account(
        &ctx.payer.pubkey(),
        &mint.pubkey(),
        rent.minimum_balance(MINT_LEN as usize),
        MINT_LEN,
        &token_program_id(),
    );
    // InitializeMint2: [20, decimals, authority, freeze = None]
    let mut data = vec![20u8, decimals];
    data.extend_from_slice(&authority.to_bytes());
    data.push(0);
    let init = Instruction {
        program_id: token_program_id(),
        accounts: vec![AccountMeta::new(mint.pubkey(), false)],
        data,
    };
    send(ctx, &[create, init], &[&mint]).await.unwrap();
    mint.pubkey()
}

pub async fn create_token_account(ctx: &mut ProgramTestContext, mint: &Pubkey, owner: &Pubkey) -> Pubkey {
    let account = Keypair::new();
    let rent = ctx.banks_client.get_rent().await.unwrap();
    let create = system_instruction::create_account(
        &ctx.payer.pubkey(),
        &account.pubkey(),
        rent.minimum_balance(TOKEN_ACCOUNT_LEN as usize),
        TOKEN_ACCOUNT_LEN,
        &token_program_id(),
    );
    // InitializeAccount3: [18, owner]
    let mut data = vec![18u8];
    data.extend_from_slice(&owner.to_bytes());
    let init = Instruction {
        program_id: token_program_id(),
        accounts: vec![
            AccountMeta::new(account.pubkey(), false),
            AccountMeta::new_readonly(*mint, false),
        ],
        data,
    };
    send(ctx, &[create, init], &[&account]).await.unwrap();
    account.pubkey()
}

/// Mint with the context payer as mint authority.
pub async fn mint_tokens(ctx: &mut ProgramTestContext, mint: &Pubkey, destination: &Pubkey, amount: u64) {
    // MintTo: [7, amount]
    let mut data = vec![7u8];
    data.extend_from_slice(&amount.to_le_bytes());
    let ix = Instruction {
        program_id: token_program_id(),
        accounts: vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(ctx.payer.pubkey(), true),
        ],
        data,
    };
    send(ctx, &[ix], &[]).await.unwrap();
}

pub async fn token_balance(ctx: &mut ProgramTestContext, account: &Pubkey) -> u64 {
    let data = account_data(ctx, account).await;
    u64::from_le_bytes(data[64..72].try_into().unwrap())
}
