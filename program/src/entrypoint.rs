use crate::instruction::{self, PoolInstruction};
use pinocchio::{
    account_info::AccountInfo, msg, program_entrypoint, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};

// Entrypoint macro
program_entrypoint!(process_instruction);

#[inline(always)]
fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if *program_id != crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    match PoolInstruction::unpack(instruction_data)? {
        PoolInstruction::Initialize => {
            msg!("Instruction: Initialize");
            instruction::initialize::process_initialize(accounts)
        }
        PoolInstruction::CreatePool { trade_fee_bps } => {
            msg!("Instruction: CreatePool");
            instruction::create_pool::process_create_pool(accounts, trade_fee_bps)
        }
        PoolInstruction::AddLiquidity { amount_a, amount_b } => {
            msg!("Instruction: AddLiquidity");
            instruction::add_liquidity::process_add_liquidity(accounts, amount_a, amount_b)
        }
        PoolInstruction::Swap { amount_in } => {
            msg!("Instruction: Swap");
            instruction::swap::process_swap(accounts, amount_in)
        }
    }
}
