/// Seed prefix for the pool PDA: `["pool", token_a_mint, token_b_mint]`.
pub const POOL_SEED: &[u8] = b"pool";

/// LP minted by the very first deposit into an empty pool.
pub const INITIAL_LP_SUPPLY: u64 = 1_000_000_000;

pub const BPS_DENOMINATOR: u64 = 10_000;
pub const MAX_FEE_BPS: u16 = 10_000;

// Custom error codes start here, same offset Anchor programs use.
pub const CUSTOM_ERROR_BASE: u32 = 6000;
