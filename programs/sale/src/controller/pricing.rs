//! Pricing Policy
//!
//! A single base price per unit, with an optional per-address override
//! stored on the address's minter record.

use crate::error::SaleError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PricePolicy {
    pub(crate) base_price: u64,
}

impl PricePolicy {
    pub fn new(base_price: u64) -> Self {
        Self { base_price }
    }

    /// Price per unit in lamports when no override applies.
    pub fn base_price(&self) -> u64 {
        self.base_price
    }

    pub fn set_base_price(&mut self, amount: u64) {
        self.base_price = amount;
    }

    /// Price per unit for an address: its override if set, else the base.
    pub fn price_for(&self, price_override: Option<u64>) -> u64 {
        price_override.unwrap_or(self.base_price)
    }

    /// Exact payment required for `quantity` units.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if `price × quantity` does not fit in a u64.
    pub fn required_payment(
        &self,
        price_override: Option<u64>,
        quantity: u64,
    ) -> Result<u64, SaleError> {
        self.price_for(price_override)
            .checked_mul(quantity)
            .ok_or(SaleError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins_over_base() {
        let mut policy = PricePolicy::new(50);
        assert_eq!(policy.price_for(None), 50);
        assert_eq!(policy.price_for(Some(20)), 20);
        assert_eq!(policy.price_for(Some(0)), 0);

        policy.set_base_price(25);
        assert_eq!(policy.base_price(), 25);
        assert_eq!(policy.price_for(None), 25);
        assert_eq!(policy.price_for(Some(20)), 20);
    }

    #[test]
    fn test_required_payment() {
        let policy = PricePolicy::new(50_000_000);
        assert_eq!(policy.required_payment(None, 5).unwrap(), 250_000_000);
        assert_eq!(policy.required_payment(Some(1), 5).unwrap(), 5);
        assert_eq!(
            policy.required_payment(None, u64::MAX).unwrap_err(),
            SaleError::Overflow
        );
    }
}
