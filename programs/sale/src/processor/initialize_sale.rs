//! InitializeSale Instruction Processor
//!
//! Creates a sale, takes ownership of a fresh collection and seeds the
//! treasury with its reserved units.

use crate::constants::TREASURY_SEED_AMOUNT;
use crate::controller::{HoldingLedger, TokenLedger};
use crate::error::SaleError;
use crate::state::{Collection, Holding, Pack, SaleConfig};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
    rent::Rent,
    sysvar::Sysvar,
};

/// Process InitializeSale instruction
///
/// Accounts expected:
/// 0. `[writable]` Sale config to initialize
/// 1. `[writable]` Collection to initialize
/// 2. `[writable]` Treasury holding (already initialized for the collection)
/// 3. `[signer]` Administrator
/// 4. `[]` Rent sysvar
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], art_provider: Pubkey) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let sale_info = next_account_info(account_info_iter)?;
    let collection_info = next_account_info(account_info_iter)?;
    let treasury_holding_info = next_account_info(account_info_iter)?;
    let admin_info = next_account_info(account_info_iter)?;

    let rent_info = next_account_info(account_info_iter)?;
    let rent = Rent::from_account_info(rent_info)?;

    // Validate sale
    assert_owned_by(sale_info, program_id)?;
    assert_writable(sale_info)?;
    assert_data_length(sale_info, SaleConfig::LEN)?;
    assert_rent_exempt(&rent, sale_info)?;

    // Validate collection
    assert_owned_by(collection_info, program_id)?;
    assert_writable(collection_info)?;
    assert_data_length(collection_info, Collection::LEN)?;
    assert_rent_exempt(&rent, collection_info)?;

    // Validate treasury holding
    assert_owned_by(treasury_holding_info, program_id)?;
    assert_writable(treasury_holding_info)?;
    assert_data_length(treasury_holding_info, Holding::LEN)?;

    assert_signer(admin_info)?;

    let existing = SaleConfig::unpack_from_slice(&sale_info.data.borrow())?;
    if existing.is_initialized {
        return Err(SaleError::AlreadyInitialized.into());
    }

    let mut collection = Collection::unpack_from_slice(&collection_info.data.borrow())?;
    if collection.is_initialized {
        return Err(SaleError::AlreadyInitialized.into());
    }

    let mut treasury_holding = Holding::unpack_from_slice(&treasury_holding_info.data.borrow())?;
    if !treasury_holding.is_initialized {
        return Err(SaleError::UninitializedAccount.into());
    }
    if treasury_holding.collection != *collection_info.key {
        return Err(SaleError::CollectionMismatch.into());
    }

    let treasury = treasury_holding.owner;
    let mut config = SaleConfig::new(*admin_info.key, treasury, *collection_info.key, art_provider);

    collection.is_initialized = true;
    collection.sale = *sale_info.key;
    collection.supply = 0;

    // The seed bypasses admission: no phase, price or limit applies
    config.limits.seed(TREASURY_SEED_AMOUNT)?;
    HoldingLedger::new(&mut collection, &mut treasury_holding)
        .credit(&treasury, TREASURY_SEED_AMOUNT)?;

    config.pack_into_slice(&mut sale_info.data.borrow_mut())?;
    collection.pack_into_slice(&mut collection_info.data.borrow_mut())?;
    treasury_holding.pack_into_slice(&mut treasury_holding_info.data.borrow_mut())?;

    msg!(
        "Sale initialized: treasury {} seeded with {}",
        treasury,
        TREASURY_SEED_AMOUNT
    );

    Ok(())
}
