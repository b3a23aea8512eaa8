//! SetPriceOverride Instruction Processor
//!
//! Sets or clears the per-unit price one address pays in the gated phase.

use crate::error::SaleError;
use crate::processor::load_sale;
use crate::state::{MinterRecord, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    pubkey::Pubkey,
};

/// Process SetPriceOverride instruction
///
/// Accounts expected:
/// 0. `[]` Sale
/// 1. `[writable]` Minter record of the address
/// 2. `[signer]` Administrator
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], price: Option<u64>) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let sale_info = next_account_info(account_info_iter)?;
    let record_info = next_account_info(account_info_iter)?;
    let admin_info = next_account_info(account_info_iter)?;

    let config = load_sale(program_id, sale_info)?;
    validate_admin(&config, admin_info)?;

    // Validate record
    assert_owned_by(record_info, program_id)?;
    assert_writable(record_info)?;
    assert_data_length(record_info, MinterRecord::LEN)?;

    let mut record = MinterRecord::unpack_from_slice(&record_info.data.borrow())?;
    if !record.is_initialized {
        return Err(SaleError::UninitializedAccount.into());
    }
    if record.sale != *sale_info.key {
        return Err(SaleError::MinterMismatch.into());
    }

    record.price_override = price.into();

    record.pack_into_slice(&mut record_info.data.borrow_mut())?;

    Ok(())
}
