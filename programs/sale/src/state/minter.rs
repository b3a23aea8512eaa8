//! Minter Record State
//!
//! One record per (sale, address), stored at the PDA
//! `[MINTER_SEED, sale, owner]`. Because the address is derived, an owner
//! cannot open a second record to reset their minted count.
//!
//! # Size: 86 bytes

use crate::state::{pack_coption_u64, unpack_bool, unpack_coption_u64, COption, Pack};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

/// Per-address sale bookkeeping.
///
/// # Memory Layout (86 bytes total)
///
/// ```text
/// ┌────────┬──────┬────────────────┬──────────────┐
/// │ Offset │ Size │ Field          │ Type         │
/// ├────────┼──────┼────────────────┼──────────────┤
/// │ 0      │ 1    │ is_initialized │ bool         │
/// │ 1      │ 32   │ sale           │ Pubkey       │
/// │ 33     │ 32   │ owner          │ Pubkey       │
/// │ 65     │ 8    │ minted         │ u64          │
/// │ 73     │ 12   │ price_override │ COption<u64> │
/// │ 85     │ 1    │ bump           │ u8           │
/// └────────┴──────┴────────────────┴──────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MinterRecord {
    pub is_initialized: bool,

    /// The sale this record counts against.
    pub sale: Pubkey,

    /// The address whose mints are counted.
    pub owner: Pubkey,

    /// Units minted by `owner` across all phases. Never decremented.
    pub minted: u64,

    /// Price per unit for this address, replacing the base price.
    pub price_override: COption<u64>,

    /// PDA bump seed.
    pub bump: u8,
}

impl MinterRecord {
    pub const LEN: usize = 86;

    pub fn new(sale: Pubkey, owner: Pubkey, bump: u8) -> Self {
        Self {
            is_initialized: true,
            sale,
            owner,
            minted: 0,
            price_override: COption::none(),
            bump,
        }
    }
}

impl Pack for MinterRecord {
    const LEN: usize = 86;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, MinterRecord::LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (is_initialized, sale, owner, minted, price_override, bump) =
            array_refs![input, 1, 32, 32, 8, 12, 1];

        Ok(MinterRecord {
            is_initialized: unpack_bool(is_initialized)?,
            sale: Pubkey::new_from_array(*sale),
            owner: Pubkey::new_from_array(*owner),
            minted: u64::from_le_bytes(*minted),
            price_override: unpack_coption_u64(price_override)?,
            bump: bump[0],
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, MinterRecord::LEN];
        #[allow(clippy::ptr_offset_with_cast)]
        let (is_initialized_dst, sale_dst, owner_dst, minted_dst, price_override_dst, bump_dst) =
            mut_array_refs![output, 1, 32, 32, 8, 12, 1];

        is_initialized_dst[0] = self.is_initialized as u8;
        sale_dst.copy_from_slice(self.sale.as_ref());
        owner_dst.copy_from_slice(self.owner.as_ref());
        *minted_dst = self.minted.to_le_bytes();
        pack_coption_u64(&self.price_override, price_override_dst);
        bump_dst[0] = self.bump;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minter_record_pack_unpack() {
        let mut record = MinterRecord::new(Pubkey::new_unique(), Pubkey::new_unique(), 254);
        record.minted = 50;
        record.price_override = COption::some(1_000);

        let mut packed = [0u8; MinterRecord::LEN];
        record.pack(&mut packed).unwrap();
        let unpacked = MinterRecord::unpack(&packed).unwrap();

        assert_eq!(unpacked, record);
        assert_eq!(unpacked.price_override.get(), Some(1_000));
        assert_eq!(packed[85], 254);
    }

    #[test]
    fn test_new_record_has_no_override() {
        let record = MinterRecord::new(Pubkey::new_unique(), Pubkey::new_unique(), 1);
        assert!(record.is_initialized);
        assert_eq!(record.minted, 0);
        assert!(record.price_override.is_none());
    }
}
