#![allow(dead_code)]

use solana_program_test::{ProgramTest, ProgramTestBanksClientExt};
use std::{env, path::Path};

pub use solana_program_test::{BanksClient, BanksClientError, ProgramTestContext};
pub use solana_sdk::{
    clock::Clock,
    instruction::{Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction,
    transaction::{Transaction, TransactionError},
};

// Shared instruction builders + token helpers
pub mod park_adapter;

pub fn program_test() -> ProgramTest {
    // Workspace builds land in <root>/target/deploy
    let deploy_dir = format!("{}/../target/deploy", env!("CARGO_MANIFEST_DIR"));
    env::set_var("BPF_OUT_DIR", &deploy_dir);
    let so_path = Path::new(&deploy_dir).join("pinocchio_park.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf --manifest-path program/Cargo.toml`",
        so_path.display()
    );

    let mut pt = ProgramTest::default();
    pt.prefer_bpf(true);
    pt.set_compute_max_units(400_000);
    let program_id = Pubkey::new_from_array(pinocchio_park::ID);
    pt.add_upgradeable_program_to_genesis("pinocchio_park", &program_id);
    pt
}

pub async fn refresh_blockhash(ctx: &mut ProgramTestContext) {
    ctx.last_blockhash = ctx
        .banks_client
        .get_new_latest_blockhash(&ctx.last_blockhash)
        .await
        .unwrap();
}

pub async fn transfer(ctx: &mut ProgramTestContext, recipient: &Pubkey, amount: u64) {
    let tx = Transaction::new_signed_with_payer(
        &[system_instruction::transfer(&ctx.payer.pubkey(), recipient, amount)],
        Some(&ctx.payer.pubkey()),
        &[&ctx.payer],
        ctx.last_blockhash,
    );
    ctx.banks_client.process_transaction(tx).await.unwrap();
}

/// Sign with the context payer plus `signers` and submit. Returns the
/// transaction signature on success.
pub async fn send(
    ctx: &mut ProgramTestContext,
    ixs: &[Instruction],
    signers: &[&Keypair],
) -> Result<Signature, BanksClientError> {
    let mut all: Vec<&Keypair> = vec![&ctx.payer];
    all.extend_from_slice(signers);
    let tx = Transaction::new_signed_with_payer(
        ixs,
        Some(&ctx.payer.pubkey()),
        &all,
        ctx.last_blockhash,
    );
    let signature = tx.signatures[0];
    ctx.banks_client.process_transaction(tx).await?;
    Ok(signature)
}

/// Custom program error code carried by a failed transaction, if any.
pub fn custom_code<T: std::fmt::Debug>(res: Result<T, BanksClientError>) -> Option<u32> {
    let err = match res {
        Ok(v) => panic!("expected failure, got {:?}", v),
        Err(BanksClientError::TransactionError(err)) => err,
        Err(BanksClientError::SimulationError { err, .. }) => err,
        Err(other) => panic!("unexpected client error: {:?}", other),
    };
    match err {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(code),
        _ => None,
    }
}

pub fn instruction_error<T: std::fmt::Debug>(
    res: Result<T, BanksClientError>,
) -> InstructionError {
    match res {
        Err(BanksClientError::TransactionError(TransactionError::InstructionError(_, e)))
        | Err(BanksClientError::SimulationError {
            err: TransactionError::InstructionError(_, e),
            ..
        }) => e,
        other => panic!("expected instruction error, got {:?}", other),
    }
}

pub async fn account_data(ctx: &mut ProgramTestContext, address: &Pubkey) -> Vec<u8> {
    ctx.banks_client
        .get_account(*address)
        .await
        .unwrap()
        .expect("account should exist")
        .data
}

/// Move the bank clock forward by `seconds`.
pub async fn warp_clock(ctx: &mut ProgramTestContext, seconds: i64) {
    let mut clock: Clock = ctx.banks_client.get_sysvar().await.unwrap();
    clock.unix_timestamp += seconds;
    ctx.set_sysvar(&clock);
}

pub async fn now(ctx: &mut ProgramTestContext) -> i64 {
    let clock: Clock = ctx.banks_client.get_sysvar().await.unwrap();
    clock.unix_timestamp
}
