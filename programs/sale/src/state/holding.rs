//! Holding State
//!
//! A Holding records how many units of one collection an owner holds.
//! It is the token ledger's balance entry; the sale only ever credits it.
//!
//! # Size: 73 bytes

use crate::state::{unpack_bool, Pack};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

/// # Memory Layout (73 bytes total)
///
/// ```text
/// ┌────────┬──────┬────────────────┬────────┐
/// │ Offset │ Size │ Field          │ Type   │
/// ├────────┼──────┼────────────────┼────────┤
/// │ 0      │ 1    │ is_initialized │ bool   │
/// │ 1      │ 32   │ collection     │ Pubkey │
/// │ 33     │ 32   │ owner          │ Pubkey │
/// │ 65     │ 8    │ amount         │ u64    │
/// └────────┴──────┴────────────────┴────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Holding {
    pub is_initialized: bool,

    /// The collection these units belong to.
    pub collection: Pubkey,

    /// Who holds the units.
    pub owner: Pubkey,

    /// Units held.
    pub amount: u64,
}

impl Holding {
    pub const LEN: usize = 73;
}

impl Pack for Holding {
    const LEN: usize = 73;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Holding::LEN];
        let (is_initialized, collection, owner, amount) = array_refs![input, 1, 32, 32, 8];

        Ok(Holding {
            is_initialized: unpack_bool(is_initialized)?,
            collection: Pubkey::new_from_array(*collection),
            owner: Pubkey::new_from_array(*owner),
            amount: u64::from_le_bytes(*amount),
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Holding::LEN];
        let (is_initialized_dst, collection_dst, owner_dst, amount_dst) =
            mut_array_refs![output, 1, 32, 32, 8];

        is_initialized_dst[0] = self.is_initialized as u8;
        collection_dst.copy_from_slice(self.collection.as_ref());
        owner_dst.copy_from_slice(self.owner.as_ref());
        *amount_dst = self.amount.to_le_bytes();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holding_pack_unpack() {
        let holding = Holding {
            is_initialized: true,
            collection: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            amount: 5,
        };
        let mut packed = [0u8; Holding::LEN];
        holding.pack(&mut packed).unwrap();
        assert_eq!(Holding::unpack(&packed).unwrap(), holding);
        assert_eq!(&packed[65..73], &5u64.to_le_bytes());
    }

    #[test]
    fn test_holding_wrong_size() {
        assert!(Holding::unpack_from_slice(&[0u8; 72]).is_err());
        assert!(Holding::unpack_from_slice(&[0u8; 74]).is_err());
    }
}
