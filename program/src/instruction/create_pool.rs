use pinocchio::{
    account_info::AccountInfo,
    instruction::Signer,
    program_error::ProgramError,
    sysvars::rent::Rent,
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_system::instructions::{Allocate, Assign, CreateAccount, Transfer};
use pinocchio_token::state::{Mint, TokenAccount};

use crate::{
    error::{to_program_error, PoolError},
    helpers::*,
    state::{Pool, POOL_DISCRIMINATOR},
};

/// Register a pool for `(token_a_mint, token_b_mint)`.
///
/// The vaults and LP mint are created by the client beforehand with the
/// pool PDA as owner / mint authority; this only validates and records them.
pub fn process_create_pool(accounts: &[AccountInfo], trade_fee_bps: u16) -> ProgramResult {
    let [
        pool_ai,
        token_a_mint_ai,
        token_b_mint_ai,
        token_a_vault_ai,
        token_b_vault_ai,
        lp_mint_ai,
        payer_ai,
        system_program_ai,
        token_program_ai,
        rent_ai,
        _rest @ ..,
    ] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_signer(payer_ai)?;
    check_writable(payer_ai)?;
    check_writable(pool_ai)?;
    check_program(system_program_ai, &pinocchio_system::ID)?;
    check_program(token_program_ai, &pinocchio_token::ID)?;

    if trade_fee_bps > MAX_FEE_BPS {
        return Err(to_program_error(PoolError::InvalidFee));
    }
    if token_a_mint_ai.key() == token_b_mint_ai.key() {
        return Err(to_program_error(PoolError::IdenticalMints));
    }
    // both sides must be real SPL mints
    Mint::from_account_info(token_a_mint_ai)?;
    Mint::from_account_info(token_b_mint_ai)?;

    let (expected_pool, bump) =
        find_pool_address(token_a_mint_ai.key(), token_b_mint_ai.key());
    if pool_ai.key() != &expected_pool {
        return Err(to_program_error(PoolError::InvalidSeeds));
    }
    if !pool_ai.is_owned_by(&pinocchio_system::ID) || !pool_ai.data_is_empty() {
        return Err(ProgramError::AccountAlreadyInitialized);
    }

    for (vault_ai, mint_ai) in [
        (token_a_vault_ai, token_a_mint_ai),
        (token_b_vault_ai, token_b_mint_ai),
    ] {
        let vault = TokenAccount::from_account_info(vault_ai)?;
        if vault.owner() != pool_ai.key() || vault.mint() != mint_ai.key() {
            return Err(to_program_error(PoolError::InvalidVault));
        }
    }

    {
        let lp_mint = Mint::from_account_info(lp_mint_ai)?;
        if lp_mint.mint_authority() != Some(pool_ai.key()) || lp_mint.supply() != 0 {
            return Err(to_program_error(PoolError::InvalidLpMint));
        }
    }

    let pool = Pool {
        discriminator: POOL_DISCRIMINATOR,
        token_a_mint: *token_a_mint_ai.key(),
        token_b_mint: *token_b_mint_ai.key(),
        token_a_vault: *token_a_vault_ai.key(),
        token_b_vault: *token_b_vault_ai.key(),
        lp_mint: *lp_mint_ai.key(),
        trade_fee_bps: trade_fee_bps.to_le_bytes(),
        bump,
    };

    let rent_exempt = Rent::from_account_info(rent_ai)?.minimum_balance(Pool::LEN);
    let bump_seed = [bump];
    let seeds = pool.signer_seeds(&bump_seed);

    let current_lamports = pool_ai.lamports();
    if current_lamports == 0 {
        CreateAccount {
            from: payer_ai,
            to: pool_ai,
            lamports: rent_exempt,
            space: Pool::LEN as u64,
            owner: &crate::ID,
        }
        .invoke_signed(&[Signer::from(&seeds[..])])?;
    } else {
        // Pre-funded PDA: CreateAccount rejects accounts holding lamports.
        let shortfall = rent_exempt.saturating_sub(current_lamports);
        if shortfall > 0 {
            Transfer {
                from: payer_ai,
                to: pool_ai,
                lamports: shortfall,
            }
            .invoke()?;
        }
        Allocate {
            account: pool_ai,
            space: Pool::LEN as u64,
        }
        .invoke_signed(&[Signer::from(&seeds[..])])?;
        Assign {
            account: pool_ai,
            owner: &crate::ID,
        }
        .invoke_signed(&[Signer::from(&seeds[..])])?;
    }

    pool.store(pool_ai)?;

    log!("create_pool: fee_bps={} bump={}", trade_fee_bps, bump);
    Ok(())
}
