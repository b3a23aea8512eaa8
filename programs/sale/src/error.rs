//! Custom Error Types
//!
//! This module defines all errors that the sale program can return.
//! Each error has a unique numeric code that clients can match against.
//!
//! # Error Code Ranges
//!
//! | Range | Category |
//! |-------|----------|
//! | 0-4 | Account validation errors |
//! | 5-6 | Authority errors |
//! | 7-8 | Instruction and arithmetic errors |
//! | 9-17 | Mint admission errors |
//! | 18-20 | Account wiring errors |
//!
//! # Usage
//!
//! ```ignore
//! use crate::error::SaleError;
//!
//! fn some_check() -> ProgramResult {
//!     if !valid {
//!         return Err(SaleError::Unauthorized.into());
//!     }
//!     Ok(())
//! }
//! ```

use num_traits::FromPrimitive;
use solana_program::{
    decode_error::DecodeError,
    msg,
    program_error::{PrintProgramError, ProgramError},
};
use thiserror::Error;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by the sale program.
///
/// Each variant becomes a unique error code when converted to ProgramError.
/// The codes are assigned based on the order of variants (0, 1, 2, ...).
///
/// # Important
///
/// After deployment, NEVER reorder these variants!
/// Clients depend on stable error codes.
/// Always add new errors at the end.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SaleError {
    // =========================================================================
    // ACCOUNT VALIDATION ERRORS (0-4)
    // =========================================================================

    /// Error 0: Account is not owned by the sale program.
    ///
    /// Every state account we read must be owned by our program,
    /// otherwise an attacker could hand us a forged SaleConfig.
    #[error("Account not owned by sale program")]
    InvalidAccountOwner,

    /// Error 1: Account data has wrong length.
    #[error("Invalid account data length")]
    InvalidAccountDataLength,

    /// Error 2: Account is not rent exempt.
    #[error("Account is not rent exempt")]
    NotRentExempt,

    /// Error 3: Account is already initialized.
    #[error("Account already initialized")]
    AlreadyInitialized,

    /// Error 4: Account is not initialized.
    #[error("Account not initialized")]
    UninitializedAccount,

    // =========================================================================
    // AUTHORITY ERRORS (5-6)
    // =========================================================================

    /// Error 5: Administrator-only operation invoked by someone else.
    ///
    /// Returned before the operation touches any of its own state.
    #[error("Caller is not the sale administrator")]
    Unauthorized,

    /// Error 6: Holding is not owned by the expected address.
    ///
    /// Minted units are always credited to the caller's own holding.
    #[error("Owner mismatch")]
    OwnerMismatch,

    // =========================================================================
    // INSTRUCTION AND ARITHMETIC ERRORS (7-8)
    // =========================================================================

    /// Error 7: Invalid instruction data.
    ///
    /// Wrong format, missing bytes, invalid discriminant or phase byte.
    #[error("Invalid instruction")]
    InvalidInstruction,

    /// Error 8: Arithmetic overflow.
    ///
    /// E.g. `price × quantity` does not fit in a u64.
    #[error("Arithmetic overflow")]
    Overflow,

    // =========================================================================
    // MINT ADMISSION ERRORS (9-17)
    // =========================================================================

    /// Error 9: The sale is not open to this caller.
    ///
    /// Raised in `Locked` phase for everyone except the administrator,
    /// and in `PrivilegedMint` phase for everyone except the administrator.
    #[error("Sale is locked")]
    SaleLocked,

    /// Error 10: Quantity is not a positive multiple of the purchase unit.
    #[error("Invalid purchase unit")]
    InvalidPurchaseUnit,

    /// Error 11: Allowlist proof does not verify against the current root.
    #[error("Invalid proof")]
    InvalidProof,

    /// Error 12: Attached payment is below `price × quantity`.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Error 13: Attached payment is above `price × quantity`.
    ///
    /// Payment must match exactly; excess is never kept or refunded.
    #[error("Excess payment")]
    ExcessPayment,

    /// Error 14: The administrator attached a payment to a privileged mint.
    #[error("Owner mint must be free")]
    OwnerMintMustBeFree,

    /// Error 15: The mint would push total supply above the mint limit.
    #[error("Sold out")]
    SoldOut,

    /// Error 16: The mint would push the caller above the per-address limit.
    #[error("Exceeds max mint per address")]
    ExceedsPerAddress,

    /// Error 17: A privileged mint requested zero units.
    #[error("Quantity must be greater than zero")]
    ZeroQuantity,

    // =========================================================================
    // ACCOUNT WIRING ERRORS (18-20)
    // =========================================================================

    /// Error 18: Collection or holding is not the one wired to this sale.
    #[error("Collection mismatch")]
    CollectionMismatch,

    /// Error 19: Minter record belongs to another sale or another address.
    #[error("Minter record mismatch")]
    MinterMismatch,

    /// Error 20: Minter record address is not the expected PDA.
    #[error("Invalid minter record address")]
    InvalidMinterAddress,
}

// =============================================================================
// CONVERSION TO PROGRAMERROR
// =============================================================================

/// Convert SaleError to ProgramError.
///
/// The error code is the enum variant's position (0-indexed),
/// so `SaleError::SoldOut` becomes `ProgramError::Custom(15)`.
impl From<SaleError> for ProgramError {
    fn from(e: SaleError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

// =============================================================================
// DECODING FOR PROGRAM LOGS
// =============================================================================

impl<T> DecodeError<T> for SaleError {
    fn type_of() -> &'static str {
        "SaleError"
    }
}

impl FromPrimitive for SaleError {
    fn from_i64(n: i64) -> Option<Self> {
        if n < 0 {
            None
        } else {
            Self::from_u64(n as u64)
        }
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(match n {
            0 => SaleError::InvalidAccountOwner,
            1 => SaleError::InvalidAccountDataLength,
            2 => SaleError::NotRentExempt,
            3 => SaleError::AlreadyInitialized,
            4 => SaleError::UninitializedAccount,
            5 => SaleError::Unauthorized,
            6 => SaleError::OwnerMismatch,
            7 => SaleError::InvalidInstruction,
            8 => SaleError::Overflow,
            9 => SaleError::SaleLocked,
            10 => SaleError::InvalidPurchaseUnit,
            11 => SaleError::InvalidProof,
            12 => SaleError::InsufficientFunds,
            13 => SaleError::ExcessPayment,
            14 => SaleError::OwnerMintMustBeFree,
            15 => SaleError::SoldOut,
            16 => SaleError::ExceedsPerAddress,
            17 => SaleError::ZeroQuantity,
            18 => SaleError::CollectionMismatch,
            19 => SaleError::MinterMismatch,
            20 => SaleError::InvalidMinterAddress,
            _ => return None,
        })
    }
}

impl PrintProgramError for SaleError {
    fn print<E>(&self)
    where
        E: 'static + std::error::Error + DecodeError<E> + PrintProgramError + FromPrimitive,
    {
        msg!("Error: {}", self);
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admission_error_codes_are_stable() {
        assert_eq!(ProgramError::from(SaleError::SaleLocked), ProgramError::Custom(9));
        assert_eq!(ProgramError::from(SaleError::InvalidProof), ProgramError::Custom(11));
        assert_eq!(ProgramError::from(SaleError::SoldOut), ProgramError::Custom(15));
        assert_eq!(
            ProgramError::from(SaleError::ExceedsPerAddress),
            ProgramError::Custom(16)
        );
    }

    #[test]
    fn test_every_code_decodes_to_its_variant() {
        let mut code = 0u64;
        while let Some(error) = SaleError::from_u64(code) {
            assert_eq!(error as u64, code);
            code += 1;
        }
        assert_eq!(code, 21);
        assert!(SaleError::from_i64(-1).is_none());
    }

    #[test]
    fn test_messages_match_reason_strings() {
        assert_eq!(SaleError::SoldOut.to_string(), "Sold out");
        assert_eq!(SaleError::OwnerMintMustBeFree.to_string(), "Owner mint must be free");
    }
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

WHERE THE CODES COME FROM
=========================

The admission errors (9-17) are the sale's public contract: every failed
mint maps to exactly one of them and tests match on the numeric code.

    SaleLocked           phase does not admit this caller
    InvalidPurchaseUnit  quantity % purchase_unit != 0 (or zero)
    InvalidProof         allowlist membership not proven
    InsufficientFunds    payment < price * quantity
    ExcessPayment        payment > price * quantity
    OwnerMintMustBeFree  privileged mint with a payment attached
    SoldOut              total_supply + quantity > mint_limit
    ExceedsPerAddress    minted + quantity > max_mint_per_address

DECODING IN LOGS
================

ProgramError::Custom(15) says little in a transaction log.
The entrypoint calls error.print::<SaleError>(), which uses
FromPrimitive to turn 15 back into SaleError::SoldOut and prints
"Error: Sold out".
*/
