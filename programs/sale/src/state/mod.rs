//! Account State Structures
//!
//! This module defines the data structures stored in Solana accounts.
//!
//! # Account Types
//!
//! | Type | Size | Description |
//! |------|------|-------------|
//! | SaleConfig | 202 bytes | Sale configuration, counters, collected lamports |
//! | MinterRecord | 86 bytes | Per-address minted count and price override (PDA) |
//! | Collection | 41 bytes | Token ledger supply |
//! | Holding | 73 bytes | Token ledger balance of one owner |
//!
//! # Serialization
//!
//! All structures use fixed-size, deterministic serialization:
//! - Little-endian for integers
//! - No padding between fields
//! - Same data always produces same bytes
//!
//! ```ignore
//! let config = SaleConfig::unpack_from_slice(&sale_info.data.borrow())?;  // Read
//! config.pack_into_slice(&mut sale_info.data.borrow_mut())?;              // Write
//! ```

// =============================================================================
// SUBMODULES
// =============================================================================

pub mod collection;
pub mod holding;
pub mod minter;
pub mod sale;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use collection::Collection;
pub use holding::Holding;
pub use minter::MinterRecord;
pub use sale::SaleConfig;

use crate::error::SaleError;
use arrayref::{array_refs, mut_array_refs};
use solana_program::program_error::ProgramError;

// =============================================================================
// PACK TRAIT
// =============================================================================

/// Trait for packing/unpacking account state to/from bytes.
///
/// All state structures implement this trait so processors read and write
/// accounts the same way.
pub trait Pack: Sized {
    /// The fixed size in bytes when serialized.
    const LEN: usize;

    /// Deserialize from a byte slice.
    ///
    /// # Panics
    /// May panic if input.len() < Self::LEN (use unpack_from_slice instead)
    fn unpack(input: &[u8]) -> Result<Self, ProgramError>;

    /// Serialize into a byte slice.
    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError>;

    /// Unpack with length validation.
    ///
    /// Checks that `src.len() == Self::LEN` before unpacking.
    fn unpack_from_slice(src: &[u8]) -> Result<Self, ProgramError> {
        if src.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        Self::unpack(src)
    }

    /// Pack with length validation.
    ///
    /// Checks that `dst.len() == Self::LEN` before packing.
    fn pack_into_slice(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        if dst.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        self.pack(dst)
    }
}

// =============================================================================
// COPTION - COMPACT OPTIONAL TYPE
// =============================================================================

/// A compact optional type for on-chain storage.
///
/// # Layout
///
/// ```text
/// COption<u64>: 12 bytes
/// [tag: 4 bytes, little-endian u32][value: 8 bytes]
///
/// Tag = 0: None (value bytes are zeros)
/// Tag = 1: Some (value bytes contain the u64)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct COption<T> {
    value: Option<T>,
}

impl<T> COption<T> {
    /// Create a COption with a value (Some variant).
    pub fn some(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Create an empty COption (None variant).
    pub fn none() -> Self {
        Self { value: None }
    }

    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }

    /// Get a reference to the inner value, if present.
    pub fn as_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T: Copy> COption<T> {
    /// Copy the inner value out as a standard Option.
    pub fn get(&self) -> Option<T> {
        self.value
    }
}

// Allow conversion from standard Option
impl<T> From<Option<T>> for COption<T> {
    fn from(opt: Option<T>) -> Self {
        Self { value: opt }
    }
}

// Allow conversion to standard Option
impl<T> From<COption<T>> for Option<T> {
    fn from(copt: COption<T>) -> Self {
        copt.value
    }
}

// =============================================================================
// SHARED FIELD CODECS
// =============================================================================

/// Unpack a COption<u64> from 12 bytes.
///
/// # Tag Values
///
/// - 0: None (value bytes are ignored)
/// - 1: Some(u64)
/// - Other: Error (InvalidInstruction)
pub(crate) fn unpack_coption_u64(src: &[u8; 12]) -> Result<COption<u64>, ProgramError> {
    let (tag, body) = array_refs![src, 4, 8];
    match u32::from_le_bytes(*tag) {
        0 => Ok(COption::none()),
        1 => Ok(COption::some(u64::from_le_bytes(*body))),
        _ => Err(SaleError::InvalidInstruction.into()),
    }
}

/// Pack a COption<u64> into 12 bytes.
pub(crate) fn pack_coption_u64(src: &COption<u64>, dst: &mut [u8; 12]) {
    let (tag, body) = mut_array_refs![dst, 4, 8];
    match src.get() {
        Some(value) => {
            *tag = 1u32.to_le_bytes();
            *body = value.to_le_bytes();
        }
        None => {
            *tag = 0u32.to_le_bytes();
            body.fill(0);
        }
    }
}

/// Parse an `is_initialized` byte. Only 0 and 1 are valid.
pub(crate) fn unpack_bool(src: &[u8; 1]) -> Result<bool, ProgramError> {
    match src[0] {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(ProgramError::InvalidAccountData),
    }
}


/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

WHY FIXED SIZES MATTER
======================

Solana accounts have fixed sizes set at creation.
When creating a Holding account:
1. Calculate size: Holding::LEN = 73 bytes
2. Calculate rent: rent.minimum_balance(73)
3. Create account with that size

If a struct changes size, old accounts become unreadable.
That's why every layout uses fixed-size fields only.

HOW THE SALE IS SPREAD OVER ACCOUNTS
====================================

    SaleConfig  (one per sale)
        phase, purchase unit, merkle root, prices, limits, total supply
        also the vault that receives mint payments
          │
          ├── MinterRecord  (one PDA per address that mints)
          │       minted count, price override
          │
          └── Collection  (the token ledger)
                  supply
                    │
                    └── Holding  (one per owner)
                            amount

The sale's counters (SaleConfig.total_supply, MinterRecord.minted) are the
authoritative ones for admission. The Collection and Holdings are the token
ledger and always move by the same amounts in the same instruction.
*/
