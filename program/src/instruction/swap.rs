use pinocchio::{
    account_info::AccountInfo, instruction::Signer, program_error::ProgramError, ProgramResult,
};
use pinocchio_log::log;
use pinocchio_token::instructions::Transfer;

use crate::{
    error::{to_program_error, PoolError},
    helpers::*,
    state::Pool,
};

/// Swap `amount_in` of the source side for the destination side.
///
/// Direction is picked by which vault is passed as source. The output amount
/// is also handed back as return data (u64 LE).
pub fn process_swap(accounts: &[AccountInfo], amount_in: u64) -> ProgramResult {
    let [
        user_ai,
        pool_ai,
        token_a_mint_ai,
        token_b_mint_ai,
        user_source_ai,
        user_destination_ai,
        vault_source_ai,
        vault_destination_ai,
        token_program_ai,
        _rest @ ..,
    ] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_signer(user_ai)?;
    check_program(token_program_ai, &pinocchio_token::ID)?;
    for ai in [user_source_ai, user_destination_ai, vault_source_ai, vault_destination_ai] {
        check_writable(ai)?;
    }

    let pool = Pool::load(pool_ai)?;
    if token_a_mint_ai.key() != &pool.token_a_mint || token_b_mint_ai.key() != &pool.token_b_mint {
        return Err(to_program_error(PoolError::MintMismatch));
    }
    if !pool.is_vault(vault_source_ai.key())
        || !pool.is_vault(vault_destination_ai.key())
        || vault_source_ai.key() == vault_destination_ai.key()
    {
        return Err(to_program_error(PoolError::InvalidVault));
    }

    if amount_in == 0 {
        return Err(to_program_error(PoolError::ZeroAmount));
    }

    let quote = swap_amount_out(
        token_amount(vault_source_ai)?,
        token_amount(vault_destination_ai)?,
        amount_in,
        pool.trade_fee_bps(),
    )?;
    if quote.amount_out == 0 {
        return Err(to_program_error(PoolError::ZeroAmount));
    }

    Transfer {
        from: user_source_ai,
        to: vault_source_ai,
        authority: user_ai,
        amount: amount_in,
    }
    .invoke()?;

    let bump_seed = [pool.bump];
    let seeds = pool.signer_seeds(&bump_seed);
    Transfer {
        from: vault_destination_ai,
        to: user_destination_ai,
        authority: pool_ai,
        amount: quote.amount_out,
    }
    .invoke_signed(&[Signer::from(&seeds[..])])?;

    log!(
        "swap: in={} fee={} out={}",
        amount_in,
        quote.fee,
        quote.amount_out
    );

    pinocchio::cpi::set_return_data(&quote.amount_out.to_le_bytes());

    Ok(())
}
