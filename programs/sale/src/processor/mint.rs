//! Mint Instruction Processor
//!
//! Loads the sale, the caller's minter record and the token ledger
//! accounts, runs the mint controller on the in-memory copies, collects
//! the payment and writes everything back.

use crate::controller::{execute_mint, HoldingLedger, MintRequest};
use crate::error::SaleError;
use crate::processor::load_sale;
use crate::state::{Collection, Holding, MinterRecord, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::invoke,
    program_error::ProgramError,
    pubkey::Pubkey,
    system_instruction, system_program,
};

/// Process Mint instruction
///
/// Accounts expected:
/// 0. `[writable]` Sale (receives the payment)
/// 1. `[writable]` Caller's minter record
/// 2. `[writable]` Collection
/// 3. `[writable]` Caller's holding
/// 4. `[writable, signer]` Caller
/// 5. `[]` System program
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    quantity: u64,
    payment: u64,
    proof: &[u8],
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let sale_info = next_account_info(account_info_iter)?;
    let record_info = next_account_info(account_info_iter)?;
    let collection_info = next_account_info(account_info_iter)?;
    let holding_info = next_account_info(account_info_iter)?;
    let caller_info = next_account_info(account_info_iter)?;
    let system_program_info = next_account_info(account_info_iter)?;

    // Validate sale
    let mut config = load_sale(program_id, sale_info)?;
    assert_writable(sale_info)?;

    assert_signer(caller_info)?;
    assert_writable(caller_info)?;

    if *system_program_info.key != system_program::id() {
        return Err(ProgramError::IncorrectProgramId);
    }

    // Validate minter record
    assert_owned_by(record_info, program_id)?;
    assert_writable(record_info)?;
    assert_data_length(record_info, MinterRecord::LEN)?;

    let mut record = MinterRecord::unpack_from_slice(&record_info.data.borrow())?;
    if !record.is_initialized {
        return Err(SaleError::UninitializedAccount.into());
    }
    if record.sale != *sale_info.key || record.owner != *caller_info.key {
        return Err(SaleError::MinterMismatch.into());
    }

    // Validate collection
    assert_owned_by(collection_info, program_id)?;
    assert_writable(collection_info)?;
    assert_data_length(collection_info, Collection::LEN)?;
    if *collection_info.key != config.collection {
        return Err(SaleError::CollectionMismatch.into());
    }
    let mut collection = Collection::unpack_from_slice(&collection_info.data.borrow())?;

    // Validate holding
    assert_owned_by(holding_info, program_id)?;
    assert_writable(holding_info)?;
    assert_data_length(holding_info, Holding::LEN)?;

    let mut holding = Holding::unpack_from_slice(&holding_info.data.borrow())?;
    if !holding.is_initialized {
        return Err(SaleError::UninitializedAccount.into());
    }
    if holding.collection != *collection_info.key {
        return Err(SaleError::CollectionMismatch.into());
    }
    if holding.owner != *caller_info.key {
        return Err(SaleError::OwnerMismatch.into());
    }

    let request = MintRequest {
        caller: *caller_info.key,
        quantity,
        proof,
        payment,
    };
    let receipt = {
        let mut ledger = HoldingLedger::new(&mut collection, &mut holding);
        execute_mint(&mut config, &mut record, &mut ledger, &request)?
    };

    // Collect payment before any state is written back
    if receipt.payment > 0 {
        invoke(
            &system_instruction::transfer(caller_info.key, sale_info.key, receipt.payment),
            &[
                caller_info.clone(),
                sale_info.clone(),
                system_program_info.clone(),
            ],
        )?;
    }

    config.pack_into_slice(&mut sale_info.data.borrow_mut())?;
    record.pack_into_slice(&mut record_info.data.borrow_mut())?;
    collection.pack_into_slice(&mut collection_info.data.borrow_mut())?;
    holding.pack_into_slice(&mut holding_info.data.borrow_mut())?;

    msg!(
        "Minted {} to {}: paid {}, address total {}, supply {}",
        receipt.quantity,
        caller_info.key,
        receipt.payment,
        receipt.minted,
        receipt.total_supply
    );

    Ok(())
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

CHECK, THEN COMMIT
==================

Nothing is written to an account until every check has passed:

1. Unpack sale, record, collection and holding into local copies
2. execute_mint() decides and updates the local copies
3. Transfer the payment (the only cross-program call)
4. Pack the local copies back

If step 2 fails, the accounts were never touched. If step 3 fails the
whole transaction fails and the runtime discards it, the same as any
other error.

WHERE THE LAMPORTS GO
=====================

The caller pays the sale account directly. The System Program can credit
any writable account, including one owned by this program, so no escrow
account is needed. The required amount is computed by the controller;
the `payment` argument only has to equal it.

WIRING CHECKS
=============

A caller chooses every account it passes. Before the controller runs:

- the collection must be the one the sale was created with
- the holding must belong to that collection and to the caller
- the minter record must be for this sale and this caller

Without these a caller could credit a holding in an unrelated collection
or count its mints against someone else's record.
*/
