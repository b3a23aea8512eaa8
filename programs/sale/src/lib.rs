//! # Gated Sale
//!
//! A phase-gated mint controller for a fixed-supply collectible.
//!
//! ## Overview
//!
//! The program decides who may mint, how many units, at what price and in
//! which sale phase, then credits the units to a token ledger:
//! - Locked: only the administrator can mint (free)
//! - PrivilegedMint: only the administrator can mint (free, any quantity)
//! - Gated: allowlisted addresses mint multiples of the purchase unit and
//!   pay the exact price, proven against a Merkle root
//!
//! Total supply never exceeds the mint limit and no address ever mints
//! more than the per-address limit. 100 units are reserved for the
//! treasury when the sale is created.
//!
//! ## Account Types
//!
//! | Account Type | Size | Description |
//! |--------------|------|-------------|
//! | SaleConfig | 202 bytes | Phase, root, price, limits, supply |
//! | MinterRecord | 86 bytes | Per-address minted count and price override |
//! | Collection | 41 bytes | Token ledger supply |
//! | Holding | 73 bytes | Token ledger balance of one owner |
//!
//! ## Instructions
//!
//! | # | Instruction | Description |
//! |---|-------------|-------------|
//! | 0 | InitializeSale | Create a sale and seed the treasury |
//! | 1 | InitializeHolding | Create a balance entry |
//! | 2 | InitializeMinter | Create a minter record PDA |
//! | 3 | SetPhase | Set phase and purchase unit |
//! | 4 | SetMintLimit | Set the total supply ceiling |
//! | 5 | SetMaxMintPerAddress | Set the per-address ceiling |
//! | 6 | SetBasePrice | Set the price per unit |
//! | 7 | SetPriceOverride | Set or clear one address's price |
//! | 8 | SetMerkleRoot | Replace the allowlist root |
//! | 9 | SetTreasury | Record a new treasury address |
//! | 10 | TransferAdmin | Hand over the administrator role |
//! | 11 | Mint | Mint units to the caller |

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Default configuration values and PDA seeds
pub mod constants;

/// Phase gate, pricing, limits and the mint orchestrator
pub mod controller;

/// Program entrypoint - where Solana calls into our program
pub mod entrypoint;

/// Custom error types with stable codes
pub mod error;

/// Instruction definitions and parsing
pub mod instruction;

/// Instruction processors (account handling)
pub mod processor;

/// Account state structures
pub mod state;

/// Account validation, administrator checks and Merkle proofs
pub mod utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use controller::{MintReceipt, MintRequest, SalePhase, TokenLedger};
pub use error::SaleError;
pub use instruction::SaleInstruction;
pub use processor::Processor;
pub use state::{Collection, Holding, MinterRecord, Pack, SaleConfig};

// =============================================================================
// PROGRAM ID
// =============================================================================

solana_program::declare_id!("GatedSa1e1111111111111111111111111111111111");

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

LAYOUT
======

src/
├── lib.rs           <- You are here
├── entrypoint.rs    <- runtime entry, error logging
├── constants.rs     <- defaults applied by InitializeSale
├── error.rs         <- SaleError
├── instruction.rs   <- SaleInstruction pack/unpack
├── controller/      <- the decisions, in plain Rust
│   ├── mod.rs       <- authorize() and execute_mint()
│   ├── phase.rs
│   ├── pricing.rs
│   ├── limits.rs
│   └── ledger.rs    <- TokenLedger trait
├── processor/       <- one handler per instruction
├── state/           <- account layouts
└── utils/           <- assertions, authority, merkle

CONTROLLER VS PROCESSOR
=======================

The controller never sees an AccountInfo. It works on unpacked structs
and a TokenLedger, which is why its unit tests run against a HashMap
ledger without a validator.

Processors do the Solana part: check owners, sizes and signers, unpack,
call the controller, move lamports, pack.

FINDING A MINTER RECORD
=======================

Clients derive the record address themselves:

    let (record, _bump) = Pubkey::find_program_address(
        &[b"minter", sale.as_ref(), owner.as_ref()],
        &gated_sale::id(),
    );

DECLARE_ID MACRO
================

solana_program::declare_id!("GatedSa1e1111111111111111111111111111111111");

This creates the constant `ID`, the function `id()` and `check_id()`.
Replace the placeholder with the deployed program's address.
*/
