use pinocchio::program_error::ProgramError;

use crate::helpers::constant::CUSTOM_ERROR_BASE;

/// Pool failures. Each maps to `ProgramError::Custom(6000 + n)` so clients
/// can decode them by position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum PoolError {
    /// Checked math overflowed, underflowed or divided by zero.
    CalculationError,
    IdenticalMints,
    InvalidVault,
    InvalidLpMint,
    MintMismatch,
    InvalidFee,
    ZeroAmount,
    InvalidSeeds,
    UninitializedPool,
    // not part of the custom range
    MissingSigner,
    NotWritable,
}

// map internal errors to program errors
pub fn to_program_error(err: PoolError) -> ProgramError {
    match err {
        PoolError::MissingSigner => ProgramError::MissingRequiredSignature,
        PoolError::NotWritable => ProgramError::InvalidArgument,
        other => ProgramError::Custom(CUSTOM_ERROR_BASE + other as u32),
    }
}

impl From<PoolError> for ProgramError {
    fn from(err: PoolError) -> Self {
        to_program_error(err)
    }
}
