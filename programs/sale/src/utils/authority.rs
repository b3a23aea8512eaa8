//! Administrator Validation
//!
//! Every configuration instruction is restricted to the single
//! administrator recorded in the sale's `SaleConfig`.
//!
//! # Example Usage
//!
//! ```ignore
//! let mut config = load_sale(program_id, sale_info)?;
//! validate_admin(&config, admin_info)?;
//! config.pricing.set_base_price(price);
//! ```

use crate::error::SaleError;
use crate::state::SaleConfig;
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program_error::ProgramError,
};

/// Validate that `admin_info` is the sale's administrator and has signed.
///
/// # Returns
///
/// * `Ok(())` - Administrator key, signed
/// * `Err(Unauthorized)` - Any other key
/// * `Err(MissingRequiredSignature)` - Right key but didn't sign
pub fn validate_admin(config: &SaleConfig, admin_info: &AccountInfo) -> ProgramResult {
    // CHECK 1: Key matches the recorded administrator
    if !config.is_admin(admin_info.key) {
        return Err(ProgramError::from(SaleError::Unauthorized));
    }

    // CHECK 2: Has signed the transaction
    if !admin_info.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_program::pubkey::Pubkey;

    fn config_with_admin(admin: Pubkey) -> SaleConfig {
        SaleConfig::new(
            admin,
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        )
    }

    #[test]
    fn test_validate_admin() {
        let admin = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let config = config_with_admin(admin);

        let mut admin_lamports = 0;
        let mut admin_data: [u8; 0] = [];
        let signed = AccountInfo::new(
            &admin, true, false, &mut admin_lamports, &mut admin_data, &owner, false, 0,
        );
        assert!(validate_admin(&config, &signed).is_ok());

        let mut unsigned_lamports = 0;
        let mut unsigned_data: [u8; 0] = [];
        let unsigned = AccountInfo::new(
            &admin, false, false, &mut unsigned_lamports, &mut unsigned_data, &owner, false, 0,
        );
        assert_eq!(
            validate_admin(&config, &unsigned),
            Err(ProgramError::MissingRequiredSignature)
        );

        let mut other_lamports = 0;
        let mut other_data: [u8; 0] = [];
        let impostor = AccountInfo::new(
            &other, true, false, &mut other_lamports, &mut other_data, &owner, false, 0,
        );
        assert_eq!(
            validate_admin(&config, &impostor),
            Err(ProgramError::from(SaleError::Unauthorized))
        );
    }
}
