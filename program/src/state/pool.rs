use pinocchio::{
    account_info::AccountInfo, instruction::Seed, program_error::ProgramError, pubkey::Pubkey,
};
use shank::ShankAccount;

use crate::{
    error::{to_program_error, PoolError},
    helpers::constant::POOL_SEED,
};

/// Marks a pool account that went through `CreatePool`.
pub const POOL_DISCRIMINATOR: u8 = 1;

/// A two-sided pool. Stored in the PDA `["pool", token_a_mint, token_b_mint]`.
///
/// Every field is a byte array so the struct has alignment 1 and can be read
/// in place from account data.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ShankAccount)]
pub struct Pool {
    pub discriminator: u8,
    pub token_a_mint: Pubkey,
    pub token_b_mint: Pubkey,
    pub token_a_vault: Pubkey,
    pub token_b_vault: Pubkey,
    pub lp_mint: Pubkey,
    /// Little-endian u16.
    pub trade_fee_bps: [u8; 2],
    pub bump: u8,
}

impl Pool {
    pub const LEN: usize = core::mem::size_of::<Pool>();

    #[inline]
    pub fn trade_fee_bps(&self) -> u16 {
        u16::from_le_bytes(self.trade_fee_bps)
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.discriminator == POOL_DISCRIMINATOR
    }

    /// Whether `key` is one of the two vaults.
    #[inline]
    pub fn is_vault(&self, key: &Pubkey) -> bool {
        *key == self.token_a_vault || *key == self.token_b_vault
    }

    /// Seeds that let the pool PDA sign CPIs. `bump` must hold `[self.bump]`.
    pub fn signer_seeds<'a>(&'a self, bump: &'a [u8; 1]) -> [Seed<'a>; 4] {
        [
            Seed::from(POOL_SEED),
            Seed::from(&self.token_a_mint[..]),
            Seed::from(&self.token_b_mint[..]),
            Seed::from(&bump[..]),
        ]
    }

    pub fn from_bytes(data: &[u8]) -> Result<&Self, ProgramError> {
        if data.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        // SAFETY: length checked, alignment is 1, every bit pattern is valid.
        Ok(unsafe { &*(data.as_ptr() as *const Self) })
    }

    pub fn write_to(&self, data: &mut [u8]) -> Result<(), ProgramError> {
        if data.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        // SAFETY: see `from_bytes`.
        let dst = unsafe { &mut *(data.as_mut_ptr() as *mut Self) };
        *dst = *self;
        Ok(())
    }

    /// Read an initialized pool owned by this program.
    pub fn load(account: &AccountInfo) -> Result<Self, ProgramError> {
        if !account.is_owned_by(&crate::ID) {
            return Err(ProgramError::InvalidAccountOwner);
        }
        let data = account.try_borrow_data()?;
        let pool = *Self::from_bytes(&data)?;
        if !pool.is_initialized() {
            return Err(to_program_error(PoolError::UninitializedPool));
        }
        Ok(pool)
    }

    /// Write the pool back. Caller has already checked ownership.
    pub fn store(&self, account: &AccountInfo) -> Result<(), ProgramError> {
        let mut data = account.try_borrow_mut_data()?;
        self.write_to(&mut data)
    }
}
