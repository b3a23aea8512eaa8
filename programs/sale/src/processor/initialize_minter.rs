//! InitializeMinter Instruction Processor
//!
//! Creates the minter record for one address. The record lives at the PDA
//! `[MINTER_SEED, sale, owner]`, so each address has exactly one and its
//! minted count cannot be reset by creating another.

use crate::constants::MINTER_SEED;
use crate::error::SaleError;
use crate::processor::load_sale;
use crate::state::{MinterRecord, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    program::invoke_signed,
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    system_instruction, system_program,
    sysvar::Sysvar,
};

/// Process InitializeMinter instruction
///
/// Accounts expected:
/// 0. `[writable, signer]` Payer of the record's rent
/// 1. `[writable]` Minter record PDA
/// 2. `[]` Sale
/// 3. `[]` Address the record tracks
/// 4. `[]` System program
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let payer_info = next_account_info(account_info_iter)?;
    let record_info = next_account_info(account_info_iter)?;
    let sale_info = next_account_info(account_info_iter)?;
    let owner_info = next_account_info(account_info_iter)?;
    let system_program_info = next_account_info(account_info_iter)?;

    assert_signer(payer_info)?;
    assert_writable(payer_info)?;
    assert_writable(record_info)?;

    if *system_program_info.key != system_program::id() {
        return Err(ProgramError::IncorrectProgramId);
    }

    load_sale(program_id, sale_info)?;

    let (expected, bump) = Pubkey::find_program_address(
        &[MINTER_SEED, sale_info.key.as_ref(), owner_info.key.as_ref()],
        program_id,
    );
    if expected != *record_info.key {
        return Err(SaleError::InvalidMinterAddress.into());
    }
    if !record_info.data_is_empty() {
        return Err(SaleError::AlreadyInitialized.into());
    }

    let rent = Rent::get()?;
    invoke_signed(
        &system_instruction::create_account(
            payer_info.key,
            record_info.key,
            rent.minimum_balance(MinterRecord::LEN),
            MinterRecord::LEN as u64,
            program_id,
        ),
        &[
            payer_info.clone(),
            record_info.clone(),
            system_program_info.clone(),
        ],
        &[&[
            MINTER_SEED,
            sale_info.key.as_ref(),
            owner_info.key.as_ref(),
            &[bump],
        ]],
    )?;

    let record = MinterRecord::new(*sale_info.key, *owner_info.key, bump);
    record.pack_into_slice(&mut record_info.data.borrow_mut())?;

    Ok(())
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

WHY A PDA?
==========

The per-address limit is only meaningful if an address can't start over
with a fresh counter. If records were ordinary keypair accounts, a caller
could create a second record for themselves and mint another full
allowance.

A program derived address removes that option:

    find_program_address(["minter", sale, owner], program_id)

always yields the same address for a (sale, owner) pair, and only this
program can sign for it. `create_account` fails on an address that
already holds an account, so the first record is the only record.

WHO PAYS?
=========

Anyone may pay for anyone's record. The record starts at zero minted with
no price override, so creating it on someone else's behalf grants nothing.
*/
