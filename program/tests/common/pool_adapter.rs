use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::Signer,
    system_program,
    sysvar,
};
use vector_protocol::instruction::PoolInstruction;

use super::{program_id, token_program_id, PoolFixture};

pub fn initialize() -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: vec![],
        data: PoolInstruction::Initialize.pack(),
    }
}

pub fn create_pool(f: &PoolFixture, payer: &Pubkey, trade_fee_bps: u16) -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(f.pool, false),
            AccountMeta::new_readonly(f.mint_a, false),
            AccountMeta::new_readonly(f.mint_b, false),
            AccountMeta::new_readonly(f.vault_a, false),
            AccountMeta::new_readonly(f.vault_b, false),
            AccountMeta::new_readonly(f.lp_mint, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(token_program_id(), false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
        ],
        data: PoolInstruction::CreatePool { trade_fee_bps }.pack(),
    }
}

pub fn add_liquidity(f: &PoolFixture, amount_a: u64, amount_b: u64) -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new_readonly(f.user.pubkey(), true),
            AccountMeta::new(f.user_a, false),
            AccountMeta::new(f.user_b, false),
            AccountMeta::new(f.user_lp, false),
            AccountMeta::new(f.pool, false),
            AccountMeta::new_readonly(f.mint_a, false),
            AccountMeta::new_readonly(f.mint_b, false),
            AccountMeta::new(f.vault_a, false),
            AccountMeta::new(f.vault_b, false),
            AccountMeta::new(f.lp_mint, false),
            AccountMeta::new_readonly(token_program_id(), false),
        ],
        data: PoolInstruction::AddLiquidity { amount_a, amount_b }.pack(),
    }
}

/// Direction of a swap against the fixture's pool.
#[derive(Clone, Copy, Debug)]
pub enum Side {
    AToB,
    BToA,
}

pub fn swap(f: &PoolFixture, side: Side, amount_in: u64) -> Instruction {
    let (user_source, user_destination, vault_source, vault_destination) = match side {
        Side::AToB => (f.user_a, f.user_b, f.vault_a, f.vault_b),
        Side::BToA => (f.user_b, f.user_a, f.vault_b, f.vault_a),
    };
    swap_with(f, user_source, user_destination, vault_source, vault_destination, amount_in)
}

pub fn swap_with(
    f: &PoolFixture,
    user_source: Pubkey,
    user_destination: Pubkey,
    vault_source: Pubkey,
    vault_destination: Pubkey,
    amount_in: u64,
) -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new_readonly(f.user.pubkey(), true),
            AccountMeta::new_readonly(f.pool, false),
            AccountMeta::new_readonly(f.mint_a, false),
            AccountMeta::new_readonly(f.mint_b, false),
            AccountMeta::new(user_source, false),
            AccountMeta::new(user_destination, false),
            AccountMeta::new(vault_source, false),
            AccountMeta::new(vault_destination, false),
            AccountMeta::new_readonly(token_program_id(), false),
        ],
        data: PoolInstruction::Swap { amount_in }.pack(),
    }
}
