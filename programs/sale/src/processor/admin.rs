//! Administrator Instruction Processors
//!
//! Every instruction here takes the same two accounts and rewrites one
//! part of the sale configuration:
//!
//! 0. `[writable]` Sale
//! 1. `[signer]` Administrator
//!
//! Values are stored as given. A mint limit below the current supply or a
//! purchase unit of zero is accepted; the mint path decides what they mean.

use crate::controller::SalePhase;
use crate::processor::load_sale;
use crate::state::{Pack, SaleConfig};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Load the sale, check the administrator, apply `update` and save.
fn update_sale<F>(program_id: &Pubkey, accounts: &[AccountInfo], update: F) -> ProgramResult
where
    F: FnOnce(&mut SaleConfig),
{
    let account_info_iter = &mut accounts.iter();

    let sale_info = next_account_info(account_info_iter)?;
    let admin_info = next_account_info(account_info_iter)?;

    let mut config = load_sale(program_id, sale_info)?;
    assert_writable(sale_info)?;
    validate_admin(&config, admin_info)?;

    update(&mut config);

    config.pack_into_slice(&mut sale_info.data.borrow_mut())?;
    Ok(())
}

pub fn process_set_phase(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    phase: SalePhase,
    purchase_unit: u64,
) -> ProgramResult {
    update_sale(program_id, accounts, |config| {
        config.gate.set(phase, purchase_unit);
    })?;
    msg!("Phase set to {:?}, purchase unit {}", phase, purchase_unit);
    Ok(())
}

pub fn process_set_mint_limit(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    mint_limit: u64,
) -> ProgramResult {
    update_sale(program_id, accounts, |config| {
        config.limits.set_mint_limit(mint_limit);
    })
}

pub fn process_set_max_mint_per_address(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    max_mint_per_address: u64,
) -> ProgramResult {
    update_sale(program_id, accounts, |config| {
        config.limits.set_max_mint_per_address(max_mint_per_address);
    })
}

pub fn process_set_base_price(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    price: u64,
) -> ProgramResult {
    update_sale(program_id, accounts, |config| {
        config.pricing.set_base_price(price);
    })
}

/// Replacing the root immediately invalidates every proof against the old one.
pub fn process_set_merkle_root(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    root: [u8; 32],
) -> ProgramResult {
    update_sale(program_id, accounts, |config| {
        config.merkle_root = root;
    })
}

/// Only the recorded address changes; units already credited stay put.
pub fn process_set_treasury(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    treasury: Pubkey,
) -> ProgramResult {
    update_sale(program_id, accounts, |config| {
        config.treasury = treasury;
    })
}

pub fn process_transfer_admin(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    new_admin: Pubkey,
) -> ProgramResult {
    update_sale(program_id, accounts, |config| {
        config.admin = new_admin;
    })?;
    msg!("Administrator changed to {}", new_admin);
    Ok(())
}
