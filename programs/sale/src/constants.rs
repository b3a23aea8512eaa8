//! Sale Defaults and Seeds
//!
//! Values applied by `InitializeSale`. Everything except the treasury
//! seed amount can be changed afterwards through the administrator
//! instructions.

/// Units credited to the treasury holding when the sale is created.
pub const TREASURY_SEED_AMOUNT: u64 = 100;

/// Initial ceiling on cumulative minted units.
pub const DEFAULT_MINT_LIMIT: u64 = 2_100;

/// Initial price per unit, in lamports (0.05 SOL).
pub const DEFAULT_MINT_PRICE: u64 = 50_000_000;

/// Initial ceiling on units minted by one address across all phases.
pub const DEFAULT_MAX_MINT_PER_ADDRESS: u64 = 100;

/// Initial purchase unit. Only enforced once the phase is `Gated`.
pub const DEFAULT_PURCHASE_UNIT: u64 = 5;

/// PDA seed prefix for minter records: `[MINTER_SEED, sale, owner]`.
pub const MINTER_SEED: &[u8] = b"minter";

/// Deepest proof accepted; 32 levels covers any realistic allowlist.
pub const MAX_PROOF_DEPTH: usize = 32;
