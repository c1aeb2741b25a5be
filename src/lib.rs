//! Cow Big Int \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers. All operations behave as if BigInt were represented in infinitely sign-extended two's-complement notation.
//! - [`LimbStorage`]: the limb container behind it. Short values live inline, longer ones in a reference-counted buffer that is copied on the first write while shared.
//!
//! Build with the `u64_limbs` feature to use 64 bit limbs instead of 32 bit ones.

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod error;
mod limb;
mod limb_storage;
mod shared_buffer;

pub use big_int::BigInt;
pub use big_num_constants::{Limb, INLINE_CAPACITY, LIMB_BITS};
pub use error::{BigIntError, BigIntResult};
pub use limb_storage::LimbStorage;
