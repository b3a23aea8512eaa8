//! InitializeHolding Instruction Processor
//!
//! Creates a balance entry for one owner in one collection.

use crate::error::SaleError;
use crate::state::{Collection, Holding, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    pubkey::Pubkey,
    rent::Rent,
    sysvar::Sysvar,
};

/// Process InitializeHolding instruction
///
/// Accounts expected:
/// 0. `[writable]` Holding to initialize
/// 1. `[]` Collection the holding belongs to
/// 2. `[]` Owner of the new holding
/// 3. `[]` Rent sysvar
///
/// The collection only has to be a program-owned account of the right size.
/// The treasury holding is created before `InitializeSale` initializes the
/// collection.
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let holding_info = next_account_info(account_info_iter)?;
    let collection_info = next_account_info(account_info_iter)?;
    let owner_info = next_account_info(account_info_iter)?;

    let rent_info = next_account_info(account_info_iter)?;
    let rent = Rent::from_account_info(rent_info)?;

    // Validate holding
    assert_owned_by(holding_info, program_id)?;
    assert_writable(holding_info)?;
    assert_data_length(holding_info, Holding::LEN)?;
    assert_rent_exempt(&rent, holding_info)?;

    // Validate collection
    assert_owned_by(collection_info, program_id)?;
    assert_data_length(collection_info, Collection::LEN)?;

    let mut holding = Holding::unpack_from_slice(&holding_info.data.borrow())?;
    if holding.is_initialized {
        return Err(SaleError::AlreadyInitialized.into());
    }

    holding.is_initialized = true;
    holding.collection = *collection_info.key;
    holding.owner = *owner_info.key;
    holding.amount = 0;

    holding.pack_into_slice(&mut holding_info.data.borrow_mut())?;

    Ok(())
}
