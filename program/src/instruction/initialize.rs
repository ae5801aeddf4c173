use pinocchio::{account_info::AccountInfo, msg, ProgramResult};

/// No state is touched; a successful call proves the program is deployed and
/// reachable. Any accounts passed along are ignored.
pub fn process_initialize(_accounts: &[AccountInfo]) -> ProgramResult {
    msg!("vector_protocol: initialized");
    Ok(())
}
