use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    pubkey::{find_program_address, Pubkey},
    ProgramResult,
};
use pinocchio_token::state::{Mint, TokenAccount};

use crate::{
    error::{to_program_error, PoolError},
    helpers::constant::POOL_SEED,
    ID,
};

#[inline]
pub fn check_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer() {
        return Err(to_program_error(PoolError::MissingSigner));
    }
    Ok(())
}

#[inline]
pub fn check_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable() {
        return Err(to_program_error(PoolError::NotWritable));
    }
    Ok(())
}

/// Program accounts passed for CPI must be the real ones.
#[inline]
pub fn check_program(account: &AccountInfo, program_id: &Pubkey) -> ProgramResult {
    if account.key() != program_id {
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

/// Pool PDA and bump for a mint pair. Order matters: (A, B) and (B, A) are
/// different pools.
#[inline]
pub fn find_pool_address(token_a_mint: &Pubkey, token_b_mint: &Pubkey) -> (Pubkey, u8) {
    find_program_address(&[POOL_SEED, &token_a_mint[..], &token_b_mint[..]], &ID)
}

pub fn read_u64(data: &[u8]) -> Result<u64, ProgramError> {
    let bytes: [u8; 8] = data
        .try_into()
        .map_err(|_| ProgramError::InvalidInstructionData)?;
    Ok(u64::from_le_bytes(bytes))
}

pub fn read_u16(data: &[u8]) -> Result<u16, ProgramError> {
    let bytes: [u8; 2] = data
        .try_into()
        .map_err(|_| ProgramError::InvalidInstructionData)?;
    Ok(u16::from_le_bytes(bytes))
}

// The returned values are copies; no borrow outlives these calls, so the
// token program can take the same accounts in a following CPI.

pub fn token_amount(account: &AccountInfo) -> Result<u64, ProgramError> {
    Ok(TokenAccount::from_account_info(account)?.amount())
}

pub fn mint_supply(mint: &AccountInfo) -> Result<u64, ProgramError> {
    Ok(Mint::from_account_info(mint)?.supply())
}
