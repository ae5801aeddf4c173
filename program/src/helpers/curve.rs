use crate::{
    error::PoolError,
    helpers::constant::{BPS_DENOMINATOR, INITIAL_LP_SUPPLY},
};

/// Result of pricing a swap against the pool reserves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SwapQuote {
    pub fee: u64,
    pub amount_in_after_fee: u64,
    pub amount_out: u64,
}

/// LP tokens owed for a deposit of `amount_a` into a pool whose A vault holds
/// `vault_a_balance` and whose LP mint has `lp_supply` outstanding.
///
/// An empty LP mint always mints `INITIAL_LP_SUPPLY`. The B side does not
/// enter the share calculation.
pub fn lp_tokens_for_deposit(
    lp_supply: u64,
    amount_a: u64,
    vault_a_balance: u64,
) -> Result<u64, PoolError> {
    if lp_supply == 0 {
        return Ok(INITIAL_LP_SUPPLY);
    }
    if vault_a_balance == 0 {
        return Err(PoolError::CalculationError);
    }
    let minted = (lp_supply as u128)
        .checked_mul(amount_a as u128)
        .and_then(|v| v.checked_div(vault_a_balance as u128))
        .ok_or(PoolError::CalculationError)?;
    u64::try_from(minted).map_err(|_| PoolError::CalculationError)
}

#[inline]
pub fn swap_fee(amount_in: u64, trade_fee_bps: u16) -> Result<u64, PoolError> {
    let fee = (amount_in as u128)
        .checked_mul(trade_fee_bps as u128)
        .ok_or(PoolError::CalculationError)?
        / BPS_DENOMINATOR as u128;
    u64::try_from(fee).map_err(|_| PoolError::CalculationError)
}

/// Constant-product output: `dst * in' / (src + in')` where `in'` is the
/// input net of the trade fee.
pub fn swap_amount_out(
    vault_source_balance: u64,
    vault_destination_balance: u64,
    amount_in: u64,
    trade_fee_bps: u16,
) -> Result<SwapQuote, PoolError> {
    let fee = swap_fee(amount_in, trade_fee_bps)?;
    let amount_in_after_fee = amount_in
        .checked_sub(fee)
        .ok_or(PoolError::CalculationError)?;
    let denominator = vault_source_balance
        .checked_add(amount_in_after_fee)
        .ok_or(PoolError::CalculationError)?;
    let amount_out = (vault_destination_balance as u128)
        .checked_mul(amount_in_after_fee as u128)
        .and_then(|v| v.checked_div(denominator as u128))
        .ok_or(PoolError::CalculationError)?;

    Ok(SwapQuote {
        fee,
        amount_in_after_fee,
        amount_out: u64::try_from(amount_out).map_err(|_| PoolError::CalculationError)?,
    })
}
