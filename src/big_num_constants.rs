/// Every limb holds a value in `[0, RADIX)`.
pub const RADIX: u64 = 1_000_000_000;

/// Decimal digits rendered per non-leading limb.
pub const LIMB_DIGITS: usize = 9;

/// Largest value kept in the small constant cache.
pub const MAX_CONSTANT: usize = 16;
