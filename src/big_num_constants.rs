use std::mem::size_of;

use crate::shared_buffer::SharedBuffer;

/// One word of the multi-precision representation.
#[cfg(not(feature = "u64_limbs"))]
pub type Limb = u32;
/// Twice the width of a [`Limb`], only used where division forms a two limb dividend.
#[cfg(not(feature = "u64_limbs"))]
pub type DoubleLimb = u64;

/// One word of the multi-precision representation.
#[cfg(feature = "u64_limbs")]
pub type Limb = u64;
/// Twice the width of a [`Limb`], only used where division forms a two limb dividend.
#[cfg(feature = "u64_limbs")]
pub type DoubleLimb = u128;

pub const LIMB_BITS: usize = Limb::BITS as usize;

pub const HALF_LIMB_BITS: usize = LIMB_BITS / 2;

pub const LOW_HALF_MASK: Limb = Limb::MAX >> HALF_LIMB_BITS;

pub const SIGN_BIT: Limb = 1 << (LIMB_BITS - 1);

/// Number of limbs a `LimbStorage` keeps without touching the heap. The inline
/// array is never larger than a buffer handle plus a length word.
pub const INLINE_CAPACITY: usize = (size_of::<SharedBuffer>() + size_of::<usize>()) / size_of::<Limb>();

/// `10^9`, the largest power of ten that fits every limb width.
pub const DECIMAL_GROUP_RADIX: Limb = 1_000_000_000;

pub const DECIMAL_GROUP_DIGITS: usize = 9;
