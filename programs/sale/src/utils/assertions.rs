//! Assertion Helper Functions
//!
//! Common validation checks used across all processors.
//!
//! # Usage Pattern
//!
//! ```ignore
//! pub fn process(...) -> ProgramResult {
//!     // Validate everything first
//!     assert_owned_by(sale_info, program_id)?;
//!     assert_writable(sale_info)?;
//!     assert_data_length(sale_info, SaleConfig::LEN)?;
//!
//!     // Then do the actual work
//!     ...
//! }
//! ```

use crate::error::SaleError;
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program_error::ProgramError,
    pubkey::Pubkey, rent::Rent,
};

// =============================================================================
// OWNERSHIP CHECKS
// =============================================================================

/// Assert that an account is owned by the expected program.
///
/// Without this an attacker could pass an account owned by their own
/// program whose bytes look like a `SaleConfig` with themselves as admin.
///
/// # Errors
///
/// Returns `InvalidAccountOwner` if the owner doesn't match.
pub fn assert_owned_by(account: &AccountInfo, owner: &Pubkey) -> ProgramResult {
    if account.owner != owner {
        Err(SaleError::InvalidAccountOwner.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// SIGNER CHECKS
// =============================================================================

/// Assert that an account is a signer of the transaction.
///
/// # Errors
///
/// Returns `MissingRequiredSignature` if not a signer.
pub fn assert_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer {
        Err(ProgramError::MissingRequiredSignature)
    } else {
        Ok(())
    }
}

// =============================================================================
// WRITABLE CHECKS
// =============================================================================

/// Assert that an account is writable.
///
/// The runtime would reject the write anyway; this reports it up front.
///
/// # Errors
///
/// Returns `InvalidAccountData` if not writable.
pub fn assert_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable {
        Err(ProgramError::InvalidAccountData)
    } else {
        Ok(())
    }
}

// =============================================================================
// SIZE CHECKS
// =============================================================================

/// Assert that an account has the expected data length.
///
/// # Errors
///
/// Returns `InvalidAccountDataLength` if length doesn't match.
pub fn assert_data_length(account: &AccountInfo, expected: usize) -> ProgramResult {
    if account.data_len() != expected {
        Err(SaleError::InvalidAccountDataLength.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// RENT CHECKS
// =============================================================================

/// Assert that an account is rent exempt.
///
/// # Errors
///
/// Returns `NotRentExempt` if the account doesn't have enough lamports.
pub fn assert_rent_exempt(rent: &Rent, account: &AccountInfo) -> ProgramResult {
    if !rent.is_exempt(account.lamports(), account.data_len()) {
        Err(SaleError::NotRentExempt.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership_size_and_flags() {
        let key = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data = [0u8; 41];
        let account = AccountInfo::new(
            &key, false, true, &mut lamports, &mut data, &program_id, false, 0,
        );

        assert!(assert_owned_by(&account, &program_id).is_ok());
        assert_eq!(
            assert_owned_by(&account, &Pubkey::new_unique()),
            Err(ProgramError::from(SaleError::InvalidAccountOwner))
        );
        assert!(assert_writable(&account).is_ok());
        assert_eq!(
            assert_signer(&account),
            Err(ProgramError::MissingRequiredSignature)
        );
        assert!(assert_data_length(&account, 41).is_ok());
        assert_eq!(
            assert_data_length(&account, 73),
            Err(ProgramError::from(SaleError::InvalidAccountDataLength))
        );
    }

    #[test]
    fn test_rent_exemption() {
        let rent = Rent::default();
        let key = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut data = [0u8; 73];

        let mut poor = 0;
        let account = AccountInfo::new(&key, false, true, &mut poor, &mut data, &owner, false, 0);
        assert_eq!(
            assert_rent_exempt(&rent, &account),
            Err(ProgramError::from(SaleError::NotRentExempt))
        );
        drop(account);

        let mut funded = rent.minimum_balance(73);
        let account = AccountInfo::new(&key, false, true, &mut funded, &mut data, &owner, false, 0);
        assert!(assert_rent_exempt(&rent, &account).is_ok());
    }
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

WHY ASSERTIONS?
===============

Every processor needs the same checks:
1. Is this account owned by our program?
2. Did the administrator / caller sign?
3. Is the account writable?
4. Is it the right size?
5. Is it rent exempt?

One line per check keeps each processor easy to audit.

THE PATTERN
===========

Every processor follows this pattern:

```rust
pub fn process(...) -> ProgramResult {
    // 1. Parse accounts
    let account_iter = &mut accounts.iter();
    let sale_info = next_account_info(account_iter)?;

    // 2. Validate accounts
    assert_owned_by(sale_info, program_id)?;
    assert_writable(sale_info)?;

    // 3. Unpack state into local copies
    let mut config = SaleConfig::unpack_from_slice(&sale_info.data.borrow())?;

    // 4. Decide and mutate the local copies
    ...

    // 5. Pack state back only once everything has succeeded
    config.pack_into_slice(&mut sale_info.data.borrow_mut())?;
    Ok(())
}
```

Because step 5 runs last, a failure anywhere earlier leaves every account
exactly as it was.
*/
