//! Program Entrypoint
//!
//! The runtime calls `process_instruction` for every instruction addressed
//! to the sale program. Errors are logged in readable form here, once, so
//! processors only have to return them.

// Compiled out with the "no-entrypoint" feature so other programs can
// depend on this crate
#![cfg(not(feature = "no-entrypoint"))]

use crate::error::SaleError;
use crate::processor::Processor;
use solana_program::{
    account_info::AccountInfo, entrypoint, entrypoint::ProgramResult,
    program_error::PrintProgramError, pubkey::Pubkey,
};

entrypoint!(process_instruction);

/// The main entrypoint for the sale program.
///
/// # Arguments
///
/// * `program_id` - The address this program is deployed at
/// * `accounts` - Every account the instruction lists, in order
/// * `instruction_data` - A packed `SaleInstruction`
///
/// # Returns
///
/// * `Ok(())` - Instruction executed; account writes are kept
/// * `Err(ProgramError)` - The transaction fails and every write is discarded
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if let Err(error) = Processor::process(program_id, accounts, instruction_data) {
        error.print::<SaleError>();
        return Err(error);
    }
    Ok(())
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

THE ENTRYPOINT MACRO
====================

entrypoint!(process_instruction);

This creates the `entrypoint` symbol the runtime looks for, sets up the
heap allocator and panic handler, and deserializes the raw input buffer
into `program_id`, `accounts` and `instruction_data`.

ERROR LOGGING
=============

A failed instruction only reports `Custom(15)` to the client. Before
returning, the entrypoint decodes the code back into a `SaleError` and
writes its message to the program log:

    Program log: Error: Sold out

`print::<SaleError>()` comes from `PrintProgramError`. For custom codes it
uses `SaleError::decode_custom_error_to_enum`, which is backed by the
`FromPrimitive` implementation in error.rs; built-in `ProgramError`s are
printed by name.

CONDITIONAL COMPILATION
=======================

#![cfg(not(feature = "no-entrypoint"))]

Another program that depends on this crate to build instructions or read
accounts enables `no-entrypoint`, otherwise two entrypoints collide:

[dependencies]
gated_sale = { path = "../sale", features = ["no-entrypoint"] }

THE FLOW
========

Transaction
     │
     ▼
process_instruction()      log decoded errors
     │
     ▼
Processor::process()       unpack SaleInstruction, route
     │
     ▼
processor::<instruction>   load accounts, call controller, pack accounts
*/
