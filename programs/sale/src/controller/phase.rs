//! Phase Controller
//!
//! Holds the current sale phase together with the purchase unit that the
//! `Gated` phase enforces. Phases only change when the administrator says
//! so; there is no schedule and no transition table.

use crate::error::SaleError;
use solana_program::program_error::ProgramError;

// =============================================================================
// SALE PHASE
// =============================================================================

/// The sale's current admission mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SalePhase {
    /// No public minting. Only the administrator may mint.
    #[default]
    Locked,

    /// Administrator-only minting, free, no proof, no unit alignment.
    PrivilegedMint,

    /// Allowlisted, paid, unit-aligned minting.
    Gated,
}

impl SalePhase {
    /// Convert a u8 byte to SalePhase.
    ///
    /// # Values
    ///
    /// - 0 = Locked
    /// - 1 = PrivilegedMint
    /// - 2 = Gated
    /// - Other = Error
    pub fn from_u8(value: u8) -> Result<Self, ProgramError> {
        match value {
            0 => Ok(SalePhase::Locked),
            1 => Ok(SalePhase::PrivilegedMint),
            2 => Ok(SalePhase::Gated),
            _ => Err(SaleError::InvalidInstruction.into()),
        }
    }

    /// Convert SalePhase to a u8 byte.
    pub fn to_u8(self) -> u8 {
        match self {
            SalePhase::Locked => 0,
            SalePhase::PrivilegedMint => 1,
            SalePhase::Gated => 2,
        }
    }
}

// =============================================================================
// PHASE GATE
// =============================================================================

/// Phase plus the purchase unit legal for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhaseGate {
    pub(crate) phase: SalePhase,
    pub(crate) purchase_unit: u64,
}

impl PhaseGate {
    pub fn new(phase: SalePhase, purchase_unit: u64) -> Self {
        Self {
            phase,
            purchase_unit,
        }
    }

    pub fn phase(&self) -> SalePhase {
        self.phase
    }

    pub fn purchase_unit(&self) -> u64 {
        self.purchase_unit
    }

    /// Overwrite both fields. Any phase may follow any phase, and the
    /// purchase unit is stored as given.
    pub fn set(&mut self, phase: SalePhase, purchase_unit: u64) {
        self.phase = phase;
        self.purchase_unit = purchase_unit;
    }

    /// Whether `quantity` is a positive multiple of the purchase unit.
    ///
    /// A purchase unit of zero admits nothing.
    pub fn is_aligned(&self, quantity: u64) -> bool {
        quantity > 0 && quantity.checked_rem(self.purchase_unit) == Some(0)
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_byte_values() {
        for phase in [SalePhase::Locked, SalePhase::PrivilegedMint, SalePhase::Gated] {
            assert_eq!(SalePhase::from_u8(phase.to_u8()).unwrap(), phase);
        }
        assert_eq!(
            SalePhase::from_u8(3).unwrap_err(),
            ProgramError::from(SaleError::InvalidInstruction)
        );
    }

    #[test]
    fn test_set_then_read_returns_exact_values() {
        let mut gate = PhaseGate::new(SalePhase::Gated, 5);

        gate.set(SalePhase::Locked, 7);
        assert_eq!(gate.phase(), SalePhase::Locked);
        assert_eq!(gate.purchase_unit(), 7);

        // Downgrades and repeated settings are allowed
        gate.set(SalePhase::Gated, 1);
        gate.set(SalePhase::PrivilegedMint, 0);
        assert_eq!(gate.phase(), SalePhase::PrivilegedMint);
        assert_eq!(gate.purchase_unit(), 0);
    }

    #[test]
    fn test_alignment() {
        let gate = PhaseGate::new(SalePhase::Gated, 5);
        assert!(gate.is_aligned(5));
        assert!(gate.is_aligned(50));
        assert!(!gate.is_aligned(7));
        assert!(!gate.is_aligned(0));

        let zero_unit = PhaseGate::new(SalePhase::Gated, 0);
        assert!(!zero_unit.is_aligned(5));
    }
}
