//! Instruction Processors
//!
//! This module contains the account handling for each instruction.
//! Admission decisions live in `controller`; processors load accounts,
//! call in, and write the results back.

pub mod admin;
pub mod initialize_holding;
pub mod initialize_minter;
pub mod initialize_sale;
pub mod mint;
pub mod set_price_override;

use crate::error::SaleError;
use crate::instruction::SaleInstruction;
use crate::state::{Pack, SaleConfig};
use crate::utils::*;
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, msg, program_error::ProgramError,
    pubkey::Pubkey,
};

/// Main processor that routes instructions to specific handlers
pub struct Processor;

impl Processor {
    /// Process a sale program instruction
    pub fn process(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        instruction_data: &[u8],
    ) -> ProgramResult {
        let instruction = SaleInstruction::unpack(instruction_data)?;

        match instruction {
            SaleInstruction::InitializeSale { art_provider } => {
                msg!("Instruction: InitializeSale");
                initialize_sale::process(program_id, accounts, art_provider)
            }

            SaleInstruction::InitializeHolding => {
                msg!("Instruction: InitializeHolding");
                initialize_holding::process(program_id, accounts)
            }

            SaleInstruction::InitializeMinter => {
                msg!("Instruction: InitializeMinter");
                initialize_minter::process(program_id, accounts)
            }

            SaleInstruction::SetPhase {
                phase,
                purchase_unit,
            } => {
                msg!("Instruction: SetPhase");
                admin::process_set_phase(program_id, accounts, phase, purchase_unit)
            }

            SaleInstruction::SetMintLimit { mint_limit } => {
                msg!("Instruction: SetMintLimit");
                admin::process_set_mint_limit(program_id, accounts, mint_limit)
            }

            SaleInstruction::SetMaxMintPerAddress {
                max_mint_per_address,
            } => {
                msg!("Instruction: SetMaxMintPerAddress");
                admin::process_set_max_mint_per_address(program_id, accounts, max_mint_per_address)
            }

            SaleInstruction::SetBasePrice { price } => {
                msg!("Instruction: SetBasePrice");
                admin::process_set_base_price(program_id, accounts, price)
            }

            SaleInstruction::SetPriceOverride { price } => {
                msg!("Instruction: SetPriceOverride");
                set_price_override::process(program_id, accounts, price)
            }

            SaleInstruction::SetMerkleRoot { root } => {
                msg!("Instruction: SetMerkleRoot");
                admin::process_set_merkle_root(program_id, accounts, root)
            }

            SaleInstruction::SetTreasury { treasury } => {
                msg!("Instruction: SetTreasury");
                admin::process_set_treasury(program_id, accounts, treasury)
            }

            SaleInstruction::TransferAdmin { new_admin } => {
                msg!("Instruction: TransferAdmin");
                admin::process_transfer_admin(program_id, accounts, new_admin)
            }

            SaleInstruction::Mint {
                quantity,
                payment,
                proof,
            } => {
                msg!("Instruction: Mint");
                mint::process(program_id, accounts, quantity, payment, &proof)
            }
        }
    }
}

/// Load an initialized `SaleConfig` owned by this program.
pub(crate) fn load_sale(
    program_id: &Pubkey,
    sale_info: &AccountInfo,
) -> Result<SaleConfig, ProgramError> {
    assert_owned_by(sale_info, program_id)?;
    assert_data_length(sale_info, SaleConfig::LEN)?;

    let config = SaleConfig::unpack_from_slice(&sale_info.data.borrow())?;
    if !config.is_initialized {
        return Err(SaleError::UninitializedAccount.into());
    }
    Ok(config)
}
