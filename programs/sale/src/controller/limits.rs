//! Supply & Limit Ledger
//!
//! Tracks total minted supply against the global mint limit, and each
//! address's minted count against the per-address limit.
//!
//! # Reservation
//!
//! `reserve` checks both ceilings against the totals the mint WOULD
//! produce, then increments both counters together. A failed reservation
//! changes nothing.
//!
//! ```text
//! total_supply + quantity <= mint_limit             else SoldOut
//! minted       + quantity <= max_mint_per_address   else ExceedsPerAddress
//! ```
//!
//! Limits may be lowered below what has already been minted. Nothing is
//! clawed back; every later reservation simply fails.

use crate::error::SaleError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SupplyLimits {
    pub(crate) total_supply: u64,
    pub(crate) mint_limit: u64,
    pub(crate) max_mint_per_address: u64,
}

impl SupplyLimits {
    pub fn new(mint_limit: u64, max_mint_per_address: u64) -> Self {
        Self {
            total_supply: 0,
            mint_limit,
            max_mint_per_address,
        }
    }

    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }

    pub fn mint_limit(&self) -> u64 {
        self.mint_limit
    }

    pub fn max_mint_per_address(&self) -> u64 {
        self.max_mint_per_address
    }

    pub fn set_mint_limit(&mut self, mint_limit: u64) {
        self.mint_limit = mint_limit;
    }

    pub fn set_max_mint_per_address(&mut self, max_mint_per_address: u64) {
        self.max_mint_per_address = max_mint_per_address;
    }

    /// Reserve `quantity` units for an address that has minted `minted`.
    ///
    /// On success both `self.total_supply` and `*minted` are incremented.
    pub fn reserve(&mut self, minted: &mut u64, quantity: u64) -> Result<(), SaleError> {
        let total_supply = self
            .total_supply
            .checked_add(quantity)
            .filter(|total| *total <= self.mint_limit)
            .ok_or(SaleError::SoldOut)?;

        let minted_after = minted
            .checked_add(quantity)
            .filter(|count| *count <= self.max_mint_per_address)
            .ok_or(SaleError::ExceedsPerAddress)?;

        self.total_supply = total_supply;
        *minted = minted_after;
        Ok(())
    }

    /// Add units outside the mint rules (the treasury seed at creation).
    pub fn seed(&mut self, quantity: u64) -> Result<(), SaleError> {
        self.total_supply = self
            .total_supply
            .checked_add(quantity)
            .ok_or(SaleError::Overflow)?;
        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
