//! Sale Configuration State
//!
//! One `SaleConfig` account exists per sale. It is the explicit
//! configuration aggregate of the controller: phase gate, allowlist root,
//! pricing and supply limits, plus the identities the sale is wired to.
//!
//! The account also receives every lamport paid for a gated mint.
//!
//! # Size: 202 bytes

use crate::constants::{
    DEFAULT_MAX_MINT_PER_ADDRESS, DEFAULT_MINT_LIMIT, DEFAULT_MINT_PRICE, DEFAULT_PURCHASE_UNIT,
};
use crate::controller::{PhaseGate, PricePolicy, SalePhase, SupplyLimits};
use crate::state::{unpack_bool, Pack};
use crate::utils::merkle::{Node, EMPTY_ROOT};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// SALE CONFIG STRUCTURE
// =============================================================================

/// Sale configuration and counters.
///
/// # Memory Layout (202 bytes total)
///
/// ```text
/// ┌────────┬──────┬──────────────────────┬──────────────┐
/// │ Offset │ Size │ Field                │ Type         │
/// ├────────┼──────┼──────────────────────┼──────────────┤
/// │ 0      │ 1    │ is_initialized       │ bool         │
/// │ 1      │ 32   │ admin                │ Pubkey       │
/// │ 33     │ 32   │ treasury             │ Pubkey       │
/// │ 65     │ 32   │ collection           │ Pubkey       │
/// │ 97     │ 32   │ art_provider         │ Pubkey       │
/// │ 129    │ 1    │ phase                │ u8           │
/// │ 130    │ 8    │ purchase_unit        │ u64          │
/// │ 138    │ 32   │ merkle_root          │ [u8; 32]     │
/// │ 170    │ 8    │ base_price           │ u64          │
/// │ 178    │ 8    │ mint_limit           │ u64          │
/// │ 186    │ 8    │ max_mint_per_address │ u64          │
/// │ 194    │ 8    │ total_supply         │ u64          │
/// └────────┴──────┴──────────────────────┴──────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SaleConfig {
    /// Set by `InitializeSale`; zeroed accounts are never trusted.
    pub is_initialized: bool,

    /// The single identity allowed to reconfigure the sale.
    pub admin: Pubkey,

    /// Recipient of the construction-time seed; kept as configuration.
    pub treasury: Pubkey,

    /// The token ledger this sale credits.
    pub collection: Pubkey,

    /// Handle of the artwork provider. Stored, never interpreted.
    pub art_provider: Pubkey,

    /// Current phase and purchase unit.
    pub gate: PhaseGate,

    /// Allowlist commitment checked in the `Gated` phase.
    pub merkle_root: Node,

    /// Base price per unit.
    pub pricing: PricePolicy,

    /// Total supply and both ceilings.
    pub limits: SupplyLimits,
}

impl SaleConfig {
    pub const LEN: usize = 202;

    /// A freshly initialized sale with the default configuration.
    ///
    /// Total supply starts at zero; the treasury seed is applied by the
    /// `InitializeSale` processor.
    pub fn new(admin: Pubkey, treasury: Pubkey, collection: Pubkey, art_provider: Pubkey) -> Self {
        Self {
            is_initialized: true,
            admin,
            treasury,
            collection,
            art_provider,
            gate: PhaseGate::new(SalePhase::Locked, DEFAULT_PURCHASE_UNIT),
            merkle_root: EMPTY_ROOT,
            pricing: PricePolicy::new(DEFAULT_MINT_PRICE),
            limits: SupplyLimits::new(DEFAULT_MINT_LIMIT, DEFAULT_MAX_MINT_PER_ADDRESS),
        }
    }

    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admin == *key
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for SaleConfig {
    const LEN: usize = 202;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, SaleConfig::LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (
            is_initialized,
            admin,
            treasury,
            collection,
            art_provider,
            phase,
            purchase_unit,
            merkle_root,
            base_price,
            mint_limit,
            max_mint_per_address,
            total_supply,
        ) = array_refs![input, 1, 32, 32, 32, 32, 1, 8, 32, 8, 8, 8, 8];

        Ok(SaleConfig {
            is_initialized: unpack_bool(is_initialized)?,
            admin: Pubkey::new_from_array(*admin),
            treasury: Pubkey::new_from_array(*treasury),
            collection: Pubkey::new_from_array(*collection),
            art_provider: Pubkey::new_from_array(*art_provider),
            gate: PhaseGate {
                phase: SalePhase::from_u8(phase[0])?,
                purchase_unit: u64::from_le_bytes(*purchase_unit),
            },
            merkle_root: *merkle_root,
            pricing: PricePolicy {
                base_price: u64::from_le_bytes(*base_price),
            },
            limits: SupplyLimits {
                total_supply: u64::from_le_bytes(*total_supply),
                mint_limit: u64::from_le_bytes(*mint_limit),
                max_mint_per_address: u64::from_le_bytes(*max_mint_per_address),
            },
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, SaleConfig::LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (
            is_initialized_dst,
            admin_dst,
            treasury_dst,
            collection_dst,
            art_provider_dst,
            phase_dst,
            purchase_unit_dst,
            merkle_root_dst,
            base_price_dst,
            mint_limit_dst,
            max_mint_per_address_dst,
            total_supply_dst,
        ) = mut_array_refs![output, 1, 32, 32, 32, 32, 1, 8, 32, 8, 8, 8, 8];

        is_initialized_dst[0] = self.is_initialized as u8;
        admin_dst.copy_from_slice(self.admin.as_ref());
        treasury_dst.copy_from_slice(self.treasury.as_ref());
        collection_dst.copy_from_slice(self.collection.as_ref());
        art_provider_dst.copy_from_slice(self.art_provider.as_ref());
        phase_dst[0] = self.gate.phase.to_u8();
        *purchase_unit_dst = self.gate.purchase_unit.to_le_bytes();
        *merkle_root_dst = self.merkle_root;
        *base_price_dst = self.pricing.base_price.to_le_bytes();
        *mint_limit_dst = self.limits.mint_limit.to_le_bytes();
        *max_mint_per_address_dst = self.limits.max_mint_per_address.to_le_bytes();
        *total_supply_dst = self.limits.total_supply.to_le_bytes();

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
    fn test_sale_config_pack_unpack() {
        let mut config = SaleConfig::new(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        );
        config.gate.set(SalePhase::Gated, 5);
        config.merkle_root = [9u8; 32];
        config.limits.seed(100).unwrap();

        let mut packed = [0u8; SaleConfig::LEN];
        config.pack_into_slice(&mut packed).unwrap();
        assert_eq!(SaleConfig::unpack_from_slice(&packed).unwrap(), config);

        // Spot-check offsets from the layout table
        assert_eq!(packed[129], SalePhase::Gated.to_u8());
        assert_eq!(&packed[138..170], &[9u8; 32]);
        assert_eq!(&packed[194..202], &100u64.to_le_bytes());
    }

    #[test]
    fn test_defaults() {
        let config = SaleConfig::new(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        );
        assert_eq!(config.gate.phase(), SalePhase::Locked);
        assert_eq!(config.pricing.base_price(), DEFAULT_MINT_PRICE);
        assert_eq!(config.limits.mint_limit(), 2100);
        assert_eq!(config.limits.total_supply(), 0);
        assert_eq!(config.merkle_root, EMPTY_ROOT);
    }

    #[test]
    fn test_uninitialized_account_is_all_zeros() {
        let config = SaleConfig::unpack_from_slice(&[0u8; SaleConfig::LEN]).unwrap();
        assert!(!config.is_initialized);
        assert_eq!(config.gate.phase(), SalePhase::Locked);
    }

    #[test]
    fn test_invalid_phase_byte_is_rejected() {
        let mut packed = [0u8; SaleConfig::LEN];
        packed[129] = 9;
        assert!(SaleConfig::unpack_from_slice(&packed).is_err());
    }

    #[test]
    fn test_wrong_size() {
        assert!(SaleConfig::unpack_from_slice(&[0u8; SaleConfig::LEN - 1]).is_err());
    }
}
