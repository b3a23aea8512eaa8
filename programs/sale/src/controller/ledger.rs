//! Token Ledger Seam
//!
//! The sale does not own balances; it asks a token ledger to credit units
//! once a mint has been admitted. On-chain the ledger is a `Collection`
//! plus the destination `Holding`, loaded by the processor.

use crate::error::SaleError;
use crate::state::{Collection, Holding};
use solana_program::pubkey::Pubkey;

/// What the sale needs from a token ledger.
pub trait TokenLedger {
    /// Increase `owner`'s holding and the ledger's supply by `quantity`.
    fn credit(&mut self, owner: &Pubkey, quantity: u64) -> Result<(), SaleError>;

    fn balance_of(&self, owner: &Pubkey) -> u64;

    fn total_supply(&self) -> u64;
}

/// A collection together with the one holding an instruction credits.
pub struct HoldingLedger<'a> {
    collection: &'a mut Collection,
    holding: &'a mut Holding,
}

impl<'a> HoldingLedger<'a> {
    pub fn new(collection: &'a mut Collection, holding: &'a mut Holding) -> Self {
        Self {
            collection,
            holding,
        }
    }
}

impl TokenLedger for HoldingLedger<'_> {
    fn credit(&mut self, owner: &Pubkey, quantity: u64) -> Result<(), SaleError> {
        if self.holding.owner != *owner {
            return Err(SaleError::OwnerMismatch);
        }

        let supply = self
            .collection
            .supply
            .checked_add(quantity)
            .ok_or(SaleError::Overflow)?;
        let amount = self
            .holding
            .amount
            .checked_add(quantity)
            .ok_or(SaleError::Overflow)?;

        self.collection.supply = supply;
        self.holding.amount = amount;
        Ok(())
    }

    fn balance_of(&self, owner: &Pubkey) -> u64 {
        if self.holding.owner == *owner {
            self.holding.amount
        } else {
            0
        }
    }

    fn total_supply(&self) -> u64 {
        self.collection.supply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_moves_supply_and_balance_together() {
        let owner = Pubkey::new_unique();
        let mut collection = Collection {
            is_initialized: true,
            sale: Pubkey::new_unique(),
            supply: 100,
        };
        let mut holding = Holding {
            is_initialized: true,
            collection: Pubkey::new_unique(),
            owner,
            amount: 0,
        };

        let mut ledger = HoldingLedger::new(&mut collection, &mut holding);
        ledger.credit(&owner, 5).unwrap();
        assert_eq!(ledger.balance_of(&owner), 5);
        assert_eq!(ledger.balance_of(&Pubkey::new_unique()), 0);
        assert_eq!(ledger.total_supply(), 105);
    }

    #[test]
    fn test_credit_rejects_foreign_owner_without_mutation() {
        let mut collection = Collection::default();
        let mut holding = Holding {
            owner: Pubkey::new_unique(),
            ..Holding::default()
        };

        let mut ledger = HoldingLedger::new(&mut collection, &mut holding);
        assert_eq!(
            ledger.credit(&Pubkey::new_unique(), 5),
            Err(SaleError::OwnerMismatch)
        );
        assert_eq!(ledger.total_supply(), 0);
    }

    #[test]
    fn test_credit_overflow_is_atomic() {
        let owner = Pubkey::new_unique();
        let mut collection = Collection::default();
        let mut holding = Holding {
            owner,
            amount: u64::MAX,
            ..Holding::default()
        };

        let mut ledger = HoldingLedger::new(&mut collection, &mut holding);
        assert_eq!(ledger.credit(&owner, 1), Err(SaleError::Overflow));
        assert_eq!(ledger.total_supply(), 0);
        assert_eq!(ledger.balance_of(&owner), u64::MAX);
    }
}
