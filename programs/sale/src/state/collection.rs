//! Collection State
//!
//! The token ledger's supply record. Only the sale it is wired to credits
//! it, and always together with a Holding.
//!
//! # Size: 41 bytes

use crate::state::{unpack_bool, Pack};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

/// # Memory Layout (41 bytes total)
///
/// ```text
/// [0]      is_initialized (bool)
/// [1..33]  sale (Pubkey)
/// [33..41] supply (u64)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Collection {
    pub is_initialized: bool,

    /// The sale allowed to credit this collection.
    pub sale: Pubkey,

    /// Units in existence, as seen by the ledger.
    pub supply: u64,
}

impl Collection {
    pub const LEN: usize = 41;
}

impl Pack for Collection {
    const LEN: usize = 41;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Collection::LEN];
        let (is_initialized, sale, supply) = array_refs![input, 1, 32, 8];

        Ok(Collection {
            is_initialized: unpack_bool(is_initialized)?,
            sale: Pubkey::new_from_array(*sale),
            supply: u64::from_le_bytes(*supply),
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Collection::LEN];
        let (is_initialized_dst, sale_dst, supply_dst) = mut_array_refs![output, 1, 32, 8];

        is_initialized_dst[0] = self.is_initialized as u8;
        sale_dst.copy_from_slice(self.sale.as_ref());
        *supply_dst = self.supply.to_le_bytes();

        Ok(())
    }
}
