use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

use crate::helpers::{read_u16, read_u64};

pub mod add_liquidity;
pub mod create_pool;
pub mod initialize;
pub mod swap;

pub use add_liquidity::*;
pub use create_pool::*;
pub use initialize::*;
pub use swap::*;

/// Wire format: one discriminator byte followed by little-endian arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankInstruction)]
pub enum PoolInstruction {
    /// Liveness check; no accounts.
    Initialize,

    #[account(0, writable, name = "pool", desc = "Pool PDA, created here")]
    #[account(1, name = "token_a_mint")]
    #[account(2, name = "token_b_mint")]
    #[account(3, name = "token_a_vault", desc = "Owned by the pool, mint A")]
    #[account(4, name = "token_b_vault", desc = "Owned by the pool, mint B")]
    #[account(5, name = "lp_mint", desc = "Mint authority = pool, zero supply")]
    #[account(6, writable, signer, name = "payer")]
    #[account(7, name = "system_program")]
    #[account(8, name = "token_program")]
    #[account(9, name = "rent")]
    CreatePool { trade_fee_bps: u16 },

    #[account(0, signer, name = "user")]
    #[account(1, writable, name = "user_token_a")]
    #[account(2, writable, name = "user_token_b")]
    #[account(3, writable, name = "user_lp_wallet")]
    #[account(4, writable, name = "pool")]
    #[account(5, name = "token_a_mint")]
    #[account(6, name = "token_b_mint")]
    #[account(7, writable, name = "token_a_vault")]
    #[account(8, writable, name = "token_b_vault")]
    #[account(9, writable, name = "lp_mint")]
    #[account(10, name = "token_program")]
    AddLiquidity { amount_a: u64, amount_b: u64 },

    #[account(0, signer, name = "user")]
    #[account(1, name = "pool")]
    #[account(2, name = "token_a_mint")]
    #[account(3, name = "token_b_mint")]
    #[account(4, writable, name = "user_source")]
    #[account(5, writable, name = "user_destination")]
    #[account(6, writable, name = "vault_source")]
    #[account(7, writable, name = "vault_destination")]
    #[account(8, name = "token_program")]
    Swap { amount_in: u64 },
}

impl PoolInstruction {
    pub const INITIALIZE: u8 = 0;
    pub const CREATE_POOL: u8 = 1;
    pub const ADD_LIQUIDITY: u8 = 2;
    pub const SWAP: u8 = 3;

    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        let (disc, payload) = data
            .split_first()
            .ok_or(ProgramError::InvalidInstructionData)?;

        match *disc {
            Self::INITIALIZE => {
                if !payload.is_empty() {
                    return Err(ProgramError::InvalidInstructionData);
                }
                Ok(Self::Initialize)
            }
            Self::CREATE_POOL => Ok(Self::CreatePool {
                trade_fee_bps: read_u16(payload)?,
            }),
            Self::ADD_LIQUIDITY => {
                if payload.len() != 16 {
                    return Err(ProgramError::InvalidInstructionData);
                }
                Ok(Self::AddLiquidity {
                    amount_a: read_u64(&payload[..8])?,
                    amount_b: read_u64(&payload[8..])?,
                })
            }
            Self::SWAP => Ok(Self::Swap {
                amount_in: read_u64(payload)?,
            }),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }

    /// Client-side encoding, the inverse of `unpack`.
    #[cfg(feature = "std")]
    pub fn pack(&self) -> std::vec::Vec<u8> {
        let mut data = std::vec::Vec::with_capacity(17);
        match *self {
            Self::Initialize => data.push(Self::INITIALIZE),
            Self::CreatePool { trade_fee_bps } => {
                data.push(Self::CREATE_POOL);
                data.extend_from_slice(&trade_fee_bps.to_le_bytes());
            }
            Self::AddLiquidity { amount_a, amount_b } => {
                data.push(Self::ADD_LIQUIDITY);
                data.extend_from_slice(&amount_a.to_le_bytes());
                data.extend_from_slice(&amount_b.to_le_bytes());
            }
            Self::Swap { amount_in } => {
                data.push(Self::SWAP);
                data.extend_from_slice(&amount_in.to_le_bytes());
            }
        }
        data
    }
}
