use pinocchio::{
    account_info::AccountInfo, instruction::Signer, program_error::ProgramError, ProgramResult,
};
use pinocchio_log::log;
use pinocchio_token::instructions::{MintTo, Transfer};

use crate::{
    error::{to_program_error, PoolError},
    helpers::*,
    state::Pool,
};

/// Deposit both sides and mint LP shares to the user.
///
/// Share math only looks at the A side; see `lp_tokens_for_deposit`.
pub fn process_add_liquidity(
    accounts: &[AccountInfo],
    amount_a: u64,
    amount_b: u64,
) -> ProgramResult {
    let [
        user_ai,
        user_token_a_ai,
        user_token_b_ai,
        user_lp_ai,
        pool_ai,
        token_a_mint_ai,
        token_b_mint_ai,
        token_a_vault_ai,
        token_b_vault_ai,
        lp_mint_ai,
        token_program_ai,
        _rest @ ..,
    ] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_signer(user_ai)?;
    check_program(token_program_ai, &pinocchio_token::ID)?;
    for ai in [
        user_token_a_ai,
        user_token_b_ai,
        user_lp_ai,
        token_a_vault_ai,
        token_b_vault_ai,
        lp_mint_ai,
    ] {
        check_writable(ai)?;
    }

    let pool = Pool::load(pool_ai)?;
    if token_a_mint_ai.key() != &pool.token_a_mint || token_b_mint_ai.key() != &pool.token_b_mint {
        return Err(to_program_error(PoolError::MintMismatch));
    }
    if token_a_vault_ai.key() != &pool.token_a_vault
        || token_b_vault_ai.key() != &pool.token_b_vault
    {
        return Err(to_program_error(PoolError::InvalidVault));
    }
    if lp_mint_ai.key() != &pool.lp_mint {
        return Err(to_program_error(PoolError::InvalidLpMint));
    }

    if amount_a == 0 || amount_b == 0 {
        return Err(to_program_error(PoolError::ZeroAmount));
    }

    // Price the deposit against balances before any tokens move.
    let lp_to_mint = lp_tokens_for_deposit(
        mint_supply(lp_mint_ai)?,
        amount_a,
        token_amount(token_a_vault_ai)?,
    )?;
    if lp_to_mint == 0 {
        return Err(to_program_error(PoolError::ZeroAmount));
    }

    Transfer {
        from: user_token_a_ai,
        to: token_a_vault_ai,
        authority: user_ai,
        amount: amount_a,
    }
    .invoke()?;

    Transfer {
        from: user_token_b_ai,
        to: token_b_vault_ai,
        authority: user_ai,
        amount: amount_b,
    }
    .invoke()?;

    let bump_seed = [pool.bump];
    let seeds = pool.signer_seeds(&bump_seed);
    MintTo {
        mint: lp_mint_ai,
        account: user_lp_ai,
        mint_authority: pool_ai,
        amount: lp_to_mint,
    }
    .invoke_signed(&[Signer::from(&seeds[..])])?;

    log!("add_liquidity: a={} b={} lp={}", amount_a, amount_b, lp_to_mint);
    Ok(())
}
