//! Instruction Types
//!
//! This module defines all instructions supported by the sale program.
//! Each instruction has:
//! - A discriminant (first byte, identifies the instruction type)
//! - Instruction-specific data (remaining bytes)
//! - Expected accounts (documented, not encoded in data)
//!
//! # Instruction Format
//!
//! ```text
//! [discriminant: u8][data: varies]
//! ```
//!
//! # Discriminant Values
//!
//! | Value | Instruction |
//! |-------|-------------|
//! | 0 | InitializeSale |
//! | 1 | InitializeHolding |
//! | 2 | InitializeMinter |
//! | 3 | SetPhase |
//! | 4 | SetMintLimit |
//! | 5 | SetMaxMintPerAddress |
//! | 6 | SetBasePrice |
//! | 7 | SetPriceOverride |
//! | 8 | SetMerkleRoot |
//! | 9 | SetTreasury |
//! | 10 | TransferAdmin |
//! | 11 | Mint |

use crate::controller::SalePhase;
use crate::error::SaleError;
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// SALE INSTRUCTION ENUM
// =============================================================================

/// All instructions supported by the sale program.
///
/// Each variant contains the instruction-specific data.
/// Account requirements are documented in comments but not encoded.
#[derive(Clone, Debug, PartialEq)]
pub enum SaleInstruction {
    // =========================================================================
    // INITIALIZATION INSTRUCTIONS
    // =========================================================================

    /// Create a sale, wire it to a collection and seed the treasury.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | sale | ✓ | | The sale config to initialize |
    /// | 1 | collection | ✓ | | The collection this sale credits |
    /// | 2 | treasury_holding | ✓ | | Initialized holding of the treasury |
    /// | 3 | admin | | ✓ | Becomes the sale administrator |
    /// | 4 | rent | | | Rent sysvar |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (0)
    /// [1..33]: art_provider (Pubkey, 32 bytes)
    /// ```
    ///
    /// The treasury is the owner of `treasury_holding`. It receives 100
    /// units without going through any phase or limit check.
    InitializeSale {
        /// Handle of the artwork provider, stored as-is
        art_provider: Pubkey,
    },

    /// Initialize a holding (balance entry) in a collection.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | holding | ✓ | | The holding to initialize |
    /// | 1 | collection | | | The collection it belongs to |
    /// | 2 | owner | | | Who holds the units |
    /// | 3 | rent | | | Rent sysvar |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (1)
    /// ```
    InitializeHolding,

    /// Create the minter record PDA for one address.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | payer | ✓ | ✓ | Funds the record's rent |
    /// | 1 | minter_record | ✓ | | PDA `["minter", sale, owner]` |
    /// | 2 | sale | | | The sale |
    /// | 3 | owner | | | The address being tracked |
    /// | 4 | system_program | | | System program |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (2)
    /// ```
    InitializeMinter,

    // =========================================================================
    // ADMINISTRATOR INSTRUCTIONS
    // =========================================================================

    /// Set the phase and purchase unit together.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | sale | ✓ | | The sale |
    /// | 1 | admin | | ✓ | Sale administrator |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (3)
    /// [1]: phase (0 = Locked, 1 = PrivilegedMint, 2 = Gated)
    /// [2..10]: purchase_unit (u64, little-endian)
    /// ```
    SetPhase {
        phase: SalePhase,
        purchase_unit: u64,
    },

    /// Replace the ceiling on cumulative minted units.
    ///
    /// Accounts: `[writable] sale`, `[signer] admin`.
    ///
    /// ```text
    /// [0]: discriminant (4)
    /// [1..9]: mint_limit (u64, little-endian)
    /// ```
    SetMintLimit { mint_limit: u64 },

    /// Replace the per-address ceiling.
    ///
    /// Accounts: `[writable] sale`, `[signer] admin`.
    ///
    /// ```text
    /// [0]: discriminant (5)
    /// [1..9]: max_mint_per_address (u64, little-endian)
    /// ```
    SetMaxMintPerAddress { max_mint_per_address: u64 },

    /// Replace the base price per unit.
    ///
    /// Accounts: `[writable] sale`, `[signer] admin`.
    ///
    /// ```text
    /// [0]: discriminant (6)
    /// [1..9]: price (u64, little-endian, lamports)
    /// ```
    SetBasePrice { price: u64 },

    /// Set or clear one address's price override.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | sale | | | The sale |
    /// | 1 | minter_record | ✓ | | Record of the address |
    /// | 2 | admin | | ✓ | Sale administrator |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (7)
    /// [1]: price_option (0 = clear, 1 = set)
    /// [2..10]: price (u64, little-endian, if option = 1)
    /// ```
    SetPriceOverride {
        /// `None` falls back to the base price
        price: Option<u64>,
    },

    /// Replace the allowlist root.
    ///
    /// Accounts: `[writable] sale`, `[signer] admin`.
    ///
    /// ```text
    /// [0]: discriminant (8)
    /// [1..33]: root ([u8; 32])
    /// ```
    SetMerkleRoot { root: [u8; 32] },

    /// Record a new treasury address.
    ///
    /// Accounts: `[writable] sale`, `[signer] admin`.
    ///
    /// ```text
    /// [0]: discriminant (9)
    /// [1..33]: treasury (Pubkey)
    /// ```
    SetTreasury { treasury: Pubkey },

    /// Hand the administrator role to another address.
    ///
    /// Accounts: `[writable] sale`, `[signer] admin`.
    ///
    /// ```text
    /// [0]: discriminant (10)
    /// [1..33]: new_admin (Pubkey)
    /// ```
    TransferAdmin { new_admin: Pubkey },

    // =========================================================================
    // MINT
    // =========================================================================

    /// Mint units to the caller.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | sale | ✓ | | The sale, receives the payment |
    /// | 1 | minter_record | ✓ | | Caller's minter record |
    /// | 2 | collection | ✓ | | The sale's collection |
    /// | 3 | holding | ✓ | | Caller's holding in the collection |
    /// | 4 | caller | ✓ | ✓ | Mints and pays |
    /// | 5 | system_program | | | System program |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (11)
    /// [1..9]: quantity (u64, little-endian)
    /// [9..17]: payment (u64, little-endian, lamports)
    /// [17..]: proof (N * 32 bytes of sibling hashes)
    /// ```
    Mint {
        quantity: u64,

        /// Lamports the caller attaches; must equal the price exactly
        payment: u64,

        /// Allowlist proof, ignored outside the gated phase
        proof: Vec<u8>,
    },
}

// =============================================================================
// PARSING HELPERS
// =============================================================================

fn unpack_u64(input: &[u8]) -> Result<u64, ProgramError> {
    let bytes = input
        .get(..8)
        .and_then(|slice| slice.try_into().ok())
        .ok_or(SaleError::InvalidInstruction)?;
    Ok(u64::from_le_bytes(bytes))
}

fn unpack_bytes32(input: &[u8]) -> Result<[u8; 32], ProgramError> {
    input
        .get(..32)
        .and_then(|slice| slice.try_into().ok())
        .ok_or_else(|| SaleError::InvalidInstruction.into())
}

fn unpack_pubkey(input: &[u8]) -> Result<Pubkey, ProgramError> {
    unpack_bytes32(input).map(Pubkey::new_from_array)
}

// =============================================================================
// INSTRUCTION PARSING (UNPACK)
// =============================================================================

impl SaleInstruction {
    /// Parse instruction data into a SaleInstruction.
    ///
    /// # Returns
    /// * `Ok(SaleInstruction)` - Successfully parsed instruction
    /// * `Err(InvalidInstruction)` - Could not parse
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (&discriminant, rest) = input
            .split_first()
            .ok_or(SaleError::InvalidInstruction)?;

        Ok(match discriminant {
            0 => SaleInstruction::InitializeSale {
                art_provider: unpack_pubkey(rest)?,
            },

            1 => SaleInstruction::InitializeHolding,

            2 => SaleInstruction::InitializeMinter,

            3 => {
                let (&phase, rest) = rest
                    .split_first()
                    .ok_or(SaleError::InvalidInstruction)?;
                SaleInstruction::SetPhase {
                    phase: SalePhase::from_u8(phase)?,
                    purchase_unit: unpack_u64(rest)?,
                }
            }

            4 => SaleInstruction::SetMintLimit {
                mint_limit: unpack_u64(rest)?,
            },

            5 => SaleInstruction::SetMaxMintPerAddress {
                max_mint_per_address: unpack_u64(rest)?,
            },

            6 => SaleInstruction::SetBasePrice {
                price: unpack_u64(rest)?,
            },

            7 => {
                let (&option, rest) = rest
                    .split_first()
                    .ok_or(SaleError::InvalidInstruction)?;
                let price = match option {
                    0 => None,
                    1 => Some(unpack_u64(rest)?),
                    _ => return Err(SaleError::InvalidInstruction.into()),
                };
                SaleInstruction::SetPriceOverride { price }
            }

            8 => SaleInstruction::SetMerkleRoot {
                root: unpack_bytes32(rest)?,
            },

            9 => SaleInstruction::SetTreasury {
                treasury: unpack_pubkey(rest)?,
            },

            10 => SaleInstruction::TransferAdmin {
                new_admin: unpack_pubkey(rest)?,
            },

            11 => {
                if rest.len() < 16 {
                    return Err(SaleError::InvalidInstruction.into());
                }
                let (amounts, proof) = rest.split_at(16);
                SaleInstruction::Mint {
                    quantity: unpack_u64(&amounts[..8])?,
                    payment: unpack_u64(&amounts[8..])?,
                    proof: proof.to_vec(),
                }
            }

            _ => return Err(SaleError::InvalidInstruction.into()),
        })
    }

    // =========================================================================
    // INSTRUCTION PACKING (for tests and clients)
    // =========================================================================

    /// Pack instruction into bytes.
    ///
    /// This is the inverse of `unpack()`.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        match self {
            SaleInstruction::InitializeSale { art_provider } => {
                buf.push(0);
                buf.extend_from_slice(art_provider.as_ref());
            }

            SaleInstruction::InitializeHolding => {
                buf.push(1);
            }

            SaleInstruction::InitializeMinter => {
                buf.push(2);
            }

            SaleInstruction::SetPhase {
                phase,
                purchase_unit,
            } => {
                buf.push(3);
                buf.push(phase.to_u8());
                buf.extend_from_slice(&purchase_unit.to_le_bytes());
            }

            SaleInstruction::SetMintLimit { mint_limit } => {
                buf.push(4);
                buf.extend_from_slice(&mint_limit.to_le_bytes());
            }

            SaleInstruction::SetMaxMintPerAddress {
                max_mint_per_address,
            } => {
                buf.push(5);
                buf.extend_from_slice(&max_mint_per_address.to_le_bytes());
            }

            SaleInstruction::SetBasePrice { price } => {
                buf.push(6);
                buf.extend_from_slice(&price.to_le_bytes());
            }

            SaleInstruction::SetPriceOverride { price } => {
                buf.push(7);
                match price {
                    Some(price) => {
                        buf.push(1);
                        buf.extend_from_slice(&price.to_le_bytes());
                    }
                    None => {
                        buf.push(0);
                    }
                }
            }

            SaleInstruction::SetMerkleRoot { root } => {
                buf.push(8);
                buf.extend_from_slice(root);
            }

            SaleInstruction::SetTreasury { treasury } => {
                buf.push(9);
                buf.extend_from_slice(treasury.as_ref());
            }

            SaleInstruction::TransferAdmin { new_admin } => {
                buf.push(10);
                buf.extend_from_slice(new_admin.as_ref());
            }

            SaleInstruction::Mint {
                quantity,
                payment,
                proof,
            } => {
                buf.push(11);
                buf.extend_from_slice(&quantity.to_le_bytes());
                buf.extend_from_slice(&payment.to_le_bytes());
                buf.extend_from_slice(proof);
            }
        }

        buf
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================


/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

INSTRUCTION FORMAT
==================

Every instruction sent to a Solana program has:
1. Program ID (which program to call)
2. Accounts (which accounts are involved)
3. Data (instruction-specific bytes)

This module defines how we parse #3 (the data):

[discriminant: 1 byte][instruction_data: varies]

Integers are little-endian. Optional values are a 0/1 tag byte followed by
the value when the tag is 1.

THE MINT PAYLOAD
================

Mint is the only variable-length instruction. Quantity and payment are
fixed; everything after byte 17 is the proof, a sequence of 32-byte
sibling hashes from leaf to root:

[11][quantity: 8][payment: 8][sibling 0: 32][sibling 1: 32]...

The parser does not check that the proof length is a multiple of 32. A
malformed proof is simply one that fails verification, which keeps the
error a caller sees (InvalidProof) the same whether the bytes are garbage
or a well-formed proof for someone else.

WHY PAYMENT IS AN ARGUMENT
==========================

There is no "value attached to the call" on Solana. The caller states how
many lamports it is paying; the program compares that figure against the
price and then moves exactly that many lamports with a System Program
transfer. A caller can't claim a payment it doesn't make: the transfer
fails the whole transaction if the caller's balance is short.
*/
