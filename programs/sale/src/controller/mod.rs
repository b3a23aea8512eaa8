//! Mint Controller
//!
//! The admission-and-accounting core of the sale. Everything in here is
//! plain Rust over unpacked state; the processors load accounts, call in,
//! and write the results back.
//!
//! # Admission Order
//!
//! ```text
//! 1. Locked          caller != admin            -> SaleLocked
//! 2. PrivilegedMint  caller != admin            -> SaleLocked
//!                    payment != 0               -> OwnerMintMustBeFree
//! 3. Gated           quantity % unit != 0       -> InvalidPurchaseUnit
//!                    proof does not verify      -> InvalidProof
//!                    payment <  price * qty     -> InsufficientFunds
//!                    payment >  price * qty     -> ExcessPayment
//! 4. reserve         supply over mint limit     -> SoldOut
//!                    caller over per-address    -> ExceedsPerAddress
//! 5. credit the token ledger
//! ```
//!
//! The administrator minting while `Locked` is treated exactly like a
//! `PrivilegedMint` mint.
//!
//! The first failing step aborts the request. Steps 1-3 only read; step 4
//! mutates nothing on failure; if step 5 fails, step 4 is rolled back.

pub mod ledger;
pub mod limits;
pub mod phase;
pub mod pricing;

pub use ledger::{HoldingLedger, TokenLedger};
pub use limits::SupplyLimits;
pub use phase::{PhaseGate, SalePhase};
pub use pricing::PricePolicy;

use crate::error::SaleError;
use crate::state::{MinterRecord, SaleConfig};
use crate::utils::merkle;
use solana_program::pubkey::Pubkey;

/// A caller's request to mint.
#[derive(Clone, Copy, Debug)]
pub struct MintRequest<'a> {
    pub caller: Pubkey,
    pub quantity: u64,
    /// Raw allowlist proof bytes, only consulted in the `Gated` phase.
    pub proof: &'a [u8],
    /// Lamports the caller attaches.
    pub payment: u64,
}

/// The outcome of a successful mint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintReceipt {
    pub quantity: u64,
    /// Lamports to collect from the caller.
    pub payment: u64,
    /// The caller's minted count after this mint.
    pub minted: u64,
    /// The sale's total supply after this mint.
    pub total_supply: u64,
}

/// Run admission steps 1-3 and return the exact payment required.
pub fn authorize(
    config: &SaleConfig,
    record: &MinterRecord,
    request: &MintRequest,
) -> Result<u64, SaleError> {
    match config.gate.phase() {
        SalePhase::Locked | SalePhase::PrivilegedMint => {
            if !config.is_admin(&request.caller) {
                return Err(SaleError::SaleLocked);
            }
            if request.payment != 0 {
                return Err(SaleError::OwnerMintMustBeFree);
            }
            if request.quantity == 0 {
                return Err(SaleError::ZeroQuantity);
            }
            Ok(0)
        }

        SalePhase::Gated => {
            if !config.gate.is_aligned(request.quantity) {
                return Err(SaleError::InvalidPurchaseUnit);
            }
            if !merkle::verify(&config.merkle_root, &request.caller, request.proof) {
                return Err(SaleError::InvalidProof);
            }

            let required = config
                .pricing
                .required_payment(record.price_override.get(), request.quantity)?;
            if request.payment < required {
                return Err(SaleError::InsufficientFunds);
            }
            if request.payment > required {
                return Err(SaleError::ExcessPayment);
            }
            Ok(required)
        }
    }
}

/// Admit and apply a mint against in-memory state.
///
/// On success `config.limits`, `record.minted` and the ledger have all
/// moved by `request.quantity`. On failure none of them has changed.
pub fn execute_mint<L: TokenLedger>(
    config: &mut SaleConfig,
    record: &mut MinterRecord,
    ledger: &mut L,
    request: &MintRequest,
) -> Result<MintReceipt, SaleError> {
    let payment = authorize(config, record, request)?;

    let limits_before = config.limits;
    let minted_before = record.minted;
    config
        .limits
        .reserve(&mut record.minted, request.quantity)?;

    if let Err(error) = ledger.credit(&request.caller, request.quantity) {
        config.limits = limits_before;
        record.minted = minted_before;
        return Err(error);
    }

    Ok(MintReceipt {
        quantity: request.quantity,
        payment,
        minted: record.minted,
        total_supply: config.limits.total_supply(),
    })
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::COption;
    use crate::utils::merkle::{build_proof, compute_root, encode_proof, leaf_hash};
    use std::collections::HashMap;

    const PRICE: u64 = 50_000_000;

    #[derive(Default)]
    struct MemoryLedger {
        balances: HashMap<Pubkey, u64>,
        supply: u64,
        fail_next_credit: bool,
    }

    impl TokenLedger for MemoryLedger {
        fn credit(&mut self, owner: &Pubkey, quantity: u64) -> Result<(), SaleError> {
            if self.fail_next_credit {
                return Err(SaleError::Overflow);
            }
            *self.balances.entry(*owner).or_default() += quantity;
            self.supply += quantity;
            Ok(())
        }

        fn balance_of(&self, owner: &Pubkey) -> u64 {
            self.balances.get(owner).copied().unwrap_or(0)
        }

        fn total_supply(&self) -> u64 {
            self.supply
        }
    }

    struct Sale {
        config: SaleConfig,
        ledger: MemoryLedger,
        admin: Pubkey,
        members: Vec<Pubkey>,
    }

    impl Sale {
        /// Gated sale, purchase unit 5, two allowlisted members.
        fn gated() -> Self {
            let admin = Pubkey::new_unique();
            let mut config = SaleConfig::new(
                admin,
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                Pubkey::new_unique(),
            );
            let members = vec![Pubkey::new_unique(), Pubkey::new_unique()];
            let leaves: Vec<_> = members.iter().map(leaf_hash).collect();
            config.merkle_root = compute_root(&leaves);
            config.gate.set(SalePhase::Gated, 5);

            let mut ledger = MemoryLedger::default();
            config.limits.seed(100).unwrap();
            ledger.credit(&config.treasury, 100).unwrap();

            Self {
                config,
                ledger,
                admin,
                members,
            }
        }

        fn proof_for(&self, index: usize) -> Vec<u8> {
            let leaves: Vec<_> = self.members.iter().map(leaf_hash).collect();
            encode_proof(&build_proof(&leaves, index).unwrap())
        }

        fn record(&self, owner: Pubkey) -> MinterRecord {
            MinterRecord::new(Pubkey::new_unique(), owner, 255)
        }

        fn mint(
            &mut self,
            record: &mut MinterRecord,
            quantity: u64,
            proof: &[u8],
            payment: u64,
        ) -> Result<MintReceipt, SaleError> {
            let request = MintRequest {
                caller: record.owner,
                quantity,
                proof,
                payment,
            };
            execute_mint(&mut self.config, record, &mut self.ledger, &request)
        }

        fn assert_unchanged(&self, record: &MinterRecord, supply: u64, minted: u64) {
            assert_eq!(self.config.limits.total_supply(), supply);
            assert_eq!(self.ledger.total_supply(), supply);
            assert_eq!(record.minted, minted);
            assert_eq!(self.ledger.balance_of(&record.owner), minted);
        }
    }

    #[test]
    fn test_gated_mint_with_exact_payment() {
        let mut sale = Sale::gated();
        let member = sale.members[0];
        let proof = sale.proof_for(0);
        let mut record = sale.record(member);

        let receipt = sale.mint(&mut record, 5, &proof, 5 * PRICE).unwrap();

        assert_eq!(
            receipt,
            MintReceipt {
                quantity: 5,
                payment: 250_000_000,
                minted: 5,
                total_supply: 105,
            }
        );
        assert_eq!(sale.ledger.balance_of(&member), 5);
        assert_eq!(sale.ledger.total_supply(), 105);
    }

    #[test]
    fn test_gated_misaligned_quantity() {
        let mut sale = Sale::gated();
        let proof = sale.proof_for(0);
        let mut record = sale.record(sale.members[0]);

        assert_eq!(
            sale.mint(&mut record, 7, &proof, 7 * PRICE),
            Err(SaleError::InvalidPurchaseUnit)
        );
        assert_eq!(
            sale.mint(&mut record, 0, &proof, 0),
            Err(SaleError::InvalidPurchaseUnit)
        );
        sale.assert_unchanged(&record, 100, 0);
    }

    #[test]
    fn test_gated_unit_checked_before_proof() {
        let mut sale = Sale::gated();
        let mut record = sale.record(Pubkey::new_unique());
        assert_eq!(
            sale.mint(&mut record, 3, &[], 3 * PRICE),
            Err(SaleError::InvalidPurchaseUnit)
        );
    }

    #[test]
    fn test_gated_non_member_rejected() {
        let mut sale = Sale::gated();
        let borrowed_proof = sale.proof_for(0);
        let mut record = sale.record(Pubkey::new_unique());

        assert_eq!(
            sale.mint(&mut record, 5, &borrowed_proof, 5 * PRICE),
            Err(SaleError::InvalidProof)
        );
        sale.assert_unchanged(&record, 100, 0);
    }

    #[test]
    fn test_gated_replaced_root_invalidates_proof() {
        let mut sale = Sale::gated();
        let proof = sale.proof_for(1);
        let mut record = sale.record(sale.members[1]);

        sale.config.merkle_root = compute_root(&[leaf_hash(&Pubkey::new_unique())]);
        assert_eq!(
            sale.mint(&mut record, 5, &proof, 5 * PRICE),
            Err(SaleError::InvalidProof)
        );
    }

    #[test]
    fn test_gated_payment_must_be_exact() {
        let mut sale = Sale::gated();
        let proof = sale.proof_for(0);
        let mut record = sale.record(sale.members[0]);

        assert_eq!(
            sale.mint(&mut record, 5, &proof, 5 * PRICE - 1),
            Err(SaleError::InsufficientFunds)
        );
        assert_eq!(
            sale.mint(&mut record, 5, &proof, 5 * PRICE + 1),
            Err(SaleError::ExcessPayment)
        );
        sale.assert_unchanged(&record, 100, 0);
    }

    #[test]
    fn test_gated_price_override() {
        let mut sale = Sale::gated();
        let proof = sale.proof_for(0);
        let mut record = sale.record(sale.members[0]);
        record.price_override = COption::some(1_000);

        assert_eq!(
            sale.mint(&mut record, 5, &proof, 5 * PRICE),
            Err(SaleError::ExcessPayment)
        );
        let receipt = sale.mint(&mut record, 5, &proof, 5_000).unwrap();
        assert_eq!(receipt.payment, 5_000);

        // A free override still goes through the exact-payment check
        record.price_override = COption::some(0);
        sale.mint(&mut record, 5, &proof, 0).unwrap();
        assert_eq!(record.minted, 10);
    }

    #[test]
    fn test_gated_per_address_limit() {
        let mut sale = Sale::gated();
        sale.config.pricing.set_base_price(1);
        let proof = sale.proof_for(0);
        let mut record = sale.record(sale.members[0]);

        sale.mint(&mut record, 50, &proof, 50).unwrap();
        assert_eq!(
            sale.mint(&mut record, 55, &proof, 55),
            Err(SaleError::ExceedsPerAddress)
        );
        sale.assert_unchanged(&record, 150, 50);

        sale.mint(&mut record, 50, &proof, 50).unwrap();
        assert_eq!(record.minted, 100);
    }

    #[test]
    fn test_admin_is_not_exempt_from_gated_rules() {
        let mut sale = Sale::gated();
        let mut record = sale.record(sale.admin);
        assert_eq!(
            sale.mint(&mut record, 5, &[], 0),
            Err(SaleError::InvalidProof)
        );
    }

    #[test]
    fn test_locked_rejects_everyone_but_admin() {
        let mut sale = Sale::gated();
        sale.config.gate.set(SalePhase::Locked, 5);
        let proof = sale.proof_for(0);
        let mut member = sale.record(sale.members[0]);

        assert_eq!(
            sale.mint(&mut member, 5, &proof, 5 * PRICE),
            Err(SaleError::SaleLocked)
        );

        let mut admin = sale.record(sale.admin);
        sale.mint(&mut admin, 3, &[], 0).unwrap();
        assert_eq!(sale.ledger.balance_of(&sale.admin), 3);
        assert_eq!(sale.config.limits.total_supply(), 103);
    }

    #[test]
    fn test_privileged_mint_rules() {
        let mut sale = Sale::gated();
        sale.config.gate.set(SalePhase::PrivilegedMint, 5);
        let mut admin = sale.record(sale.admin);

        // Not unit-aligned, no proof, free
        let receipt = sale.mint(&mut admin, 3, &[], 0).unwrap();
        assert_eq!(receipt.payment, 0);

        assert_eq!(
            sale.mint(&mut admin, 1, &[], PRICE),
            Err(SaleError::OwnerMintMustBeFree)
        );
        assert_eq!(sale.mint(&mut admin, 0, &[], 0), Err(SaleError::ZeroQuantity));

        let mut member = sale.record(sale.members[0]);
        assert_eq!(
            sale.mint(&mut member, 3, &[], 0),
            Err(SaleError::SaleLocked)
        );
        sale.assert_unchanged(&admin, 103, 3);
    }

    #[test]
    fn test_privileged_mint_sold_out() {
        let mut sale = Sale::gated();
        sale.config.gate.set(SalePhase::PrivilegedMint, 5);
        sale.config.limits.set_max_mint_per_address(5_000);
        let mut admin = sale.record(sale.admin);

        sale.mint(&mut admin, 2_000, &[], 0).unwrap();
        assert_eq!(sale.config.limits.total_supply(), 2_100);

        assert_eq!(sale.mint(&mut admin, 1, &[], 0), Err(SaleError::SoldOut));
        sale.assert_unchanged(&admin, 2_100, 2_000);
    }

    #[test]
    fn test_failed_credit_rolls_back_reservation() {
        let mut sale = Sale::gated();
        let proof = sale.proof_for(0);
        let mut record = sale.record(sale.members[0]);
        sale.ledger.fail_next_credit = true;

        assert_eq!(
            sale.mint(&mut record, 5, &proof, 5 * PRICE),
            Err(SaleError::Overflow)
        );
        assert_eq!(sale.config.limits.total_supply(), 100);
        assert_eq!(record.minted, 0);
    }

    #[test]
    fn test_supply_equals_seed_plus_successful_mints() {
        let mut sale = Sale::gated();
        sale.config.pricing.set_base_price(10);
        let proofs = [sale.proof_for(0), sale.proof_for(1)];
        let mut records = [sale.record(sale.members[0]), sale.record(sale.members[1])];

        let attempts = [(0, 5), (1, 7), (1, 10), (0, 100), (0, 20), (1, 90), (1, 5)];
        let mut minted_total = 0;
        for (who, quantity) in attempts {
            let result = sale.mint(&mut records[who], quantity, &proofs[who], quantity * 10);
            if result.is_ok() {
                minted_total += quantity;
            }
            assert!(records[who].minted <= sale.config.limits.max_mint_per_address());
        }

        assert_eq!(sale.config.limits.total_supply(), 100 + minted_total);
        assert_eq!(sale.ledger.total_supply(), sale.config.limits.total_supply());
        assert_eq!(records[0].minted + records[1].minted, minted_total);
    }
}
