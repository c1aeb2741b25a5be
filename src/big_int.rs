//! # BigInt
//! Arbitrary-precision signed integers. The limbs are read as an infinitely
//! sign-extended two's-complement number, so every operation behaves exactly
//! like the corresponding operation on a primitive integer that never
//! overflows.
//! # Example
//! ```
//! use cow_big_int::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "-900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {}", &a << 10u32);
//! println!("a >> 10 = {}", &a >> 10u32);
//! ```

mod decimal;
mod division;
mod ops;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::big_num_constants::*;
use crate::limb::*;
use crate::limb_storage::LimbStorage;

/// Arbitrary-precision signed integer.
///
/// Small values keep their limbs inline, larger ones share a heap buffer
/// between clones until one of them is written to. Because the sharing count
/// is not atomic, `BigInt` is neither `Send` nor `Sync`.
#[derive(Clone)]
pub struct BigInt {
    // least significant limb first, never empty, normalized between operations
    limbs: LimbStorage,
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::from_i128(val as i128)
        }
    }
    )*
    };
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::from_u128(val as u128)
        }
    }
    )*
    };
}

impl_signed_to_big_int!(i8, i16, i32, i64, i128, isize);
impl_unsigned_to_big_int!(u8, u16, u32, u64, u128, usize);

const LIMBS_PER_I128: usize = 128 / LIMB_BITS;

// 实现构造
impl BigInt {
    pub fn zero() -> Self {
        BigInt { limbs: LimbStorage::from_slice(&[0]) }
    }

    pub fn one() -> Self {
        BigInt { limbs: LimbStorage::from_slice(&[1]) }
    }

    fn from_i128(val: i128) -> Self {
        let mut limbs = [0 as Limb; LIMBS_PER_I128];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = (val >> (i * LIMB_BITS)) as Limb;
        }
        BigInt::from_twos_complement(&limbs)
    }

    fn from_u128(val: u128) -> Self {
        // one extra zero limb keeps the top bit of `val` from reading as a sign
        let mut limbs = [0 as Limb; LIMBS_PER_I128 + 1];
        for (i, limb) in limbs.iter_mut().take(LIMBS_PER_I128).enumerate() {
            *limb = (val >> (i * LIMB_BITS)) as Limb;
        }
        BigInt::from_twos_complement(&limbs)
    }

    fn from_twos_complement(limbs: &[Limb]) -> Self {
        let mut x = BigInt { limbs: LimbStorage::from_slice(limbs) };
        x.normalize();
        x
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

// 杂项辅助函数
impl BigInt {
    /// The normalized two's-complement limbs, least significant first.
    pub fn limbs(&self) -> &[Limb] {
        self.limbs.as_slice()
    }

    pub fn storage(&self) -> &LimbStorage {
        &self.limbs
    }

    pub fn is_negative(&self) -> bool {
        self.top() & SIGN_BIT != 0
    }

    pub fn is_zero(&self) -> bool {
        self.limbs().iter().all(|&limb| limb == 0)
    }

    /// `-1`, `0` or `1` according to the sign of `self`.
    pub fn signum(&self) -> BigInt {
        if self.is_negative() {
            BigInt::from(-1)
        } else if self.is_zero() {
            BigInt::zero()
        } else {
            BigInt::one()
        }
    }

    pub fn abs(&self) -> BigInt {
        let mut x = self.clone();
        if x.is_negative() {
            x.negate();
        }
        x
    }

    /// Adds one, like prefix `++`.
    pub fn inc(&mut self) -> &mut Self {
        self.add_at(&BigInt::one(), 0, false);
        self
    }

    /// Subtracts one, like prefix `--`.
    pub fn dec(&mut self) -> &mut Self {
        self.add_at(&BigInt::one(), 0, true);
        self
    }

    fn len(&self) -> usize {
        self.limbs.len()
    }

    fn top(&self) -> Limb {
        self.limbs[self.len() - 1]
    }

    /// The value of every limb above the stored ones.
    fn fill(&self) -> Limb {
        sign_fill(self.top())
    }

    fn limb_or_fill(&self, i: usize) -> Limb {
        match self.limbs().get(i) {
            Some(&limb) => limb,
            None => self.fill(),
        }
    }

    /// Sign extends to `new_len` limbs, never shortens.
    fn extend(&mut self, new_len: usize) {
        if new_len > self.len() {
            let fill = self.fill();
            self.limbs.resize(new_len, fill);
        }
    }

    /// Appends `next`, the limb just above the stored ones of an exact result,
    /// unless the current top limb already sign extends to it.
    fn push_guard(&mut self, next: Limb) {
        if next != self.fill() {
            self.limbs.push(next);
        }
    }

    /// Drops top limbs that only repeat the sign of the limb below them.
    fn normalize(&mut self) {
        let limbs = self.limbs.as_slice();
        let mut len = limbs.len();
        while len > 1 && limbs[len - 1] == sign_fill(limbs[len - 2]) {
            len -= 1;
        }
        self.limbs.truncate(len);
    }

    /// Limbs of a nonnegative value without the zero limb that may carry its sign.
    fn magnitude(&self) -> &[Limb] {
        let limbs = self.limbs();
        match limbs {
            [rest @ .., 0] if !rest.is_empty() => rest,
            _ => limbs,
        }
    }
}

// 实现加减法
impl BigInt {
    /// `self += rhs * B^offset` where `B = 2^LIMB_BITS`, or `self -= rhs * B^offset`
    /// if `negate_rhs` is set. Subtraction adds the complement of `rhs` with an
    /// incoming carry, which is the negation of `rhs` without materializing it.
    fn add_at(&mut self, rhs: &BigInt, offset: usize, negate_rhs: bool) {
        let mask = if negate_rhs { Limb::MAX } else { 0 };
        let self_fill = self.fill();
        let rhs_fill = rhs.fill() ^ mask;
        self.extend(rhs.len() + offset);

        let mut carry = negate_rhs as Limb;
        for (i, limb) in self.limbs.as_mut_slice().iter_mut().enumerate().skip(offset) {
            let r = rhs.limb_or_fill(i - offset) ^ mask;
            let (sum, c) = add_carry(*limb, r, carry);
            *limb = sum;
            carry = c;
        }
        // both operands fit in the current width, so one more limb always holds the sum
        self.push_guard(self_fill.wrapping_add(rhs_fill).wrapping_add(carry));
        self.normalize();
    }

    /// Two's-complement negation: complement every limb and add one.
    ///
    /// The only value whose negation needs an extra limb is `100...0`; the
    /// guard limb computed from the inverted fill and the final carry covers it.
    fn negate(&mut self) {
        let fill = !self.fill();
        let mut carry = 1;
        for limb in self.limbs.as_mut_slice() {
            let (sum, c) = add_carry(!*limb, 0, carry);
            *limb = sum;
            carry = c;
        }
        self.push_guard(fill.wrapping_add(carry));
        self.normalize();
    }

    fn add_in_place(&mut self, rhs: &BigInt) {
        self.add_at(rhs, 0, false);
    }

    fn sub_in_place(&mut self, rhs: &BigInt) {
        self.add_at(rhs, 0, true);
    }
}

// 实现乘法
impl BigInt {
    fn mul_in_place(&mut self, rhs: &BigInt) {
        let negative = self.is_negative() ^ rhs.is_negative();
        let a = self.abs();
        let b = rhs.abs();
        let (a, b) = (a.limbs(), b.limbs());

        // one spare limb above `len(a) + len(b)` keeps the product's sign bit clear
        let mut product = LimbStorage::new();
        product.resize(a.len() + b.len() + 1, 0);
        let out = product.as_mut_slice();
        for (i, &x) in a.iter().enumerate() {
            let mut carry = 0;
            for (j, &y) in b.iter().enumerate() {
                let (hi, lo) = mul_limb(x, y);
                let (sum, c) = add_carry(out[i + j], lo, carry);
                out[i + j] = sum;
                // x * y + out + carry < B^2, so this cannot overflow
                carry = hi + c;
            }
            out[i + b.len()] = carry;
        }

        let mut product = BigInt { limbs: product };
        product.normalize();
        if product.len() <= INLINE_CAPACITY {
            product = BigInt::from_twos_complement(product.limbs());
        }
        if negative {
            product.negate();
        }
        *self = product;
    }

    /// `self = self * factor + addend` for nonnegative `self`.
    fn mul_add_short(&mut self, factor: Limb, addend: Limb) {
        debug_assert!(!self.is_negative());
        let mut carry = addend;
        for limb in self.limbs.as_mut_slice() {
            let (hi, lo) = mul_limb(*limb, factor);
            let (sum, c) = add_carry(lo, carry, 0);
            *limb = sum;
            carry = hi + c;
        }
        if carry != 0 {
            self.limbs.push(carry);
        }
        // the result is nonnegative, so the limb above is zero
        self.push_guard(0);
        self.normalize();
    }
}

// 实现位运算
impl BigInt {
    /// Combines limb-wise after sign extending the shorter operand.
    fn bit_op(&mut self, rhs: &BigInt, op: impl Fn(Limb, Limb) -> Limb) {
        self.extend(rhs.len());
        for (i, limb) in self.limbs.as_mut_slice().iter_mut().enumerate() {
            *limb = op(*limb, rhs.limb_or_fill(i));
        }
        self.normalize();
    }

    fn and_in_place(&mut self, rhs: &BigInt) {
        self.bit_op(rhs, |a, b| a & b);
    }

    fn or_in_place(&mut self, rhs: &BigInt) {
        self.bit_op(rhs, |a, b| a | b);
    }

    fn xor_in_place(&mut self, rhs: &BigInt) {
        self.bit_op(rhs, |a, b| a ^ b);
    }

    fn not_in_place(&mut self) {
        self.bit_op(&BigInt::from(-1), |a, b| a ^ b);
    }
}

// 实现移位
impl BigInt {
    fn shift_left(&mut self, bits: i128) {
        let amount = usize::try_from(bits.unsigned_abs()).unwrap_or(usize::MAX);
        if bits < 0 {
            self.shr_bits(amount);
        } else {
            self.shl_bits(amount);
        }
    }

    fn shift_right(&mut self, bits: i128) {
        let amount = usize::try_from(bits.unsigned_abs()).unwrap_or(usize::MAX);
        if bits < 0 {
            self.shl_bits(amount);
        } else {
            self.shr_bits(amount);
        }
    }

    fn shl_bits(&mut self, bits: usize) {
        if self.is_zero() {
            return;
        }
        let n_limbs = bits / LIMB_BITS;
        let n_bits = bits % LIMB_BITS;
        let fill = self.fill();
        let len = self.len();

        if n_limbs > 0 {
            self.limbs.resize(len + n_limbs, 0);
            let limbs = self.limbs.as_mut_slice();
            limbs.copy_within(0..len, n_limbs);
            limbs[..n_limbs].fill(0);
        }

        if n_bits > 0 {
            let mut spill = 0;
            for limb in self.limbs.as_mut_slice()[n_limbs..].iter_mut() {
                let next_spill = *limb >> (LIMB_BITS - n_bits);
                *limb = (*limb << n_bits) | spill;
                spill = next_spill;
            }
            // the shifted-in fill above the old top limb, joined with the bits
            // that left it; this limb is only redundant when it repeats the sign
            self.push_guard((fill << n_bits) | spill);
        }
        self.normalize();
    }

    fn shr_bits(&mut self, bits: usize) {
        let n_limbs = bits / LIMB_BITS;
        let n_bits = bits % LIMB_BITS;
        let fill = self.fill();
        let len = self.len();

        if n_limbs >= len {
            self.limbs.clear();
            self.limbs.push(fill);
            return;
        }

        let limbs = self.limbs.as_mut_slice();
        limbs.copy_within(n_limbs..len, 0);
        limbs[len - n_limbs..].fill(fill);

        if n_bits > 0 {
            let mut spill = fill << (LIMB_BITS - n_bits);
            for limb in limbs.iter_mut().rev() {
                let next_spill = *limb << (LIMB_BITS - n_bits);
                *limb = (*limb >> n_bits) | spill;
                spill = next_spill;
            }
        }
        self.normalize();
    }
}

// 实现大小比较
impl BigInt {
    /// Compares limb sequences from the most significant end, padding the
    /// shorter one with its fill. Only meaningful for operands of equal sign.
    fn compare_limbs(&self, other: &BigInt) -> Ordering {
        let len = self.len().max(other.len());
        for i in (0..len).rev() {
            let (a, b) = (self.limb_or_fill(i), other.limb_or_fill(i));
            if a != b {
                return a.cmp(&b);
            }
        }
        Ordering::Equal
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => self.compare_limbs(other),
        }
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // normalized limbs are unique per value
        self.limbs().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    fn is_normalized(x: &BigInt) -> bool {
        let limbs = x.limbs();
        limbs.len() == 1 || limbs[limbs.len() - 1] != sign_fill(limbs[limbs.len() - 2])
    }

    #[test]
    fn test_from() {
        assert_eq!(BigInt::from(0).limbs(), &[0]);
        assert_eq!(BigInt::from(-1).limbs(), &[Limb::MAX]);
        assert_eq!(BigInt::from(5u8).limbs(), &[5]);
        assert_eq!(BigInt::from(Limb::MAX).limbs(), &[Limb::MAX, 0]);
        assert_eq!(BigInt::from(u128::MAX).to_string(), u128::MAX.to_string());
        assert_eq!(BigInt::from(i128::MIN).to_string(), i128::MIN.to_string());
        assert_eq!(BigInt::from(i64::MIN).to_string(), i64::MIN.to_string());
        assert!(BigInt::from(i128::MIN).is_negative());
        assert!(is_normalized(&BigInt::from(i128::MIN)));
        assert_eq!(BigInt::default(), BigInt::zero());
    }

    #[test]
    fn test_normalize() {
        let mut x = BigInt { limbs: LimbStorage::from_slice(&[5, 0, 0]) };
        x.normalize();
        assert_eq!(x.limbs(), &[5]);

        let mut x = BigInt { limbs: LimbStorage::from_slice(&[SIGN_BIT, 0, 0]) };
        x.normalize();
        assert_eq!(x.limbs(), &[SIGN_BIT, 0]);

        let mut x = BigInt { limbs: LimbStorage::from_slice(&[1, Limb::MAX, Limb::MAX]) };
        x.normalize();
        assert_eq!(x.limbs(), &[1, Limb::MAX]);

        let mut x = BigInt { limbs: LimbStorage::from_slice(&[Limb::MAX, Limb::MAX]) };
        x.normalize();
        assert_eq!(x.limbs(), &[Limb::MAX]);
    }

    #[test]
    fn test_add_grows_on_same_sign_overflow() {
        let max = BigInt::from(Limb::MAX >> 1);
        let sum = &max + &BigInt::one();
        assert_eq!(sum.limbs(), &[SIGN_BIT, 0]);

        let min = BigInt::from(-1) - &max;
        assert_eq!(min.limbs(), &[SIGN_BIT]);
        let below = &min - &BigInt::one();
        assert_eq!(below.limbs(), &[Limb::MAX >> 1, Limb::MAX]);
        assert_eq!(&below + &BigInt::one(), min);

        // mixed signs never grow
        assert_eq!((&max + &min).limbs(), &[Limb::MAX]);
        assert_eq!(BigInt::from(5) + BigInt::from(-5), BigInt::zero());
        assert!(is_normalized(&(BigInt::from(5) + BigInt::from(-5))));
    }

    #[test]
    fn test_negate_min_value() {
        let mut x = BigInt::from_twos_complement(&[SIGN_BIT]);
        x.negate();
        assert_eq!(x.limbs(), &[SIGN_BIT, 0]);
        x.negate();
        assert_eq!(x.limbs(), &[SIGN_BIT]);

        let mut x = BigInt::from_twos_complement(&[0, 0, SIGN_BIT]);
        let y = -&x;
        x.negate();
        assert_eq!(x, y);
        assert_eq!(x.limbs(), &[0, 0, SIGN_BIT, 0]);

        let mut zero = BigInt::zero();
        zero.negate();
        assert_eq!(zero.limbs(), &[0]);
    }

    #[test]
    fn test_add_at_offset() {
        let mut x = BigInt::from(1);
        x.add_at(&BigInt::from(1), 2, false);
        assert_eq!(x.limbs(), &[1, 0, 1]);
        x.add_at(&BigInt::from(1), 2, true);
        assert_eq!(x.limbs(), &[1]);
        x.add_at(&BigInt::from(2), 1, true);
        assert_eq!(x.limbs(), &[1, Limb::MAX - 1]);
    }

    #[test]
    fn test_mul() {
        assert_eq!(
            big("123456789123456789") * big("-2"),
            big("-246913578246913578")
        );
        assert_eq!(big("-3") * big("-7"), big("21"));
        assert_eq!(big("0") * big("-7"), big("0"));
        let x = BigInt::from(Limb::MAX);
        let sq = &x * &x;
        assert_eq!(sq.limbs(), &[1, Limb::MAX - 1, 0]);
        assert_eq!(sq.to_string(), ((Limb::MAX as u128) * (Limb::MAX as u128)).to_string());
        // a small product stays inline
        assert!((BigInt::from(3) * BigInt::from(4)).storage().is_inline());
    }

    #[test]
    fn test_mul_add_short() {
        let mut x = BigInt::from(Limb::MAX);
        x.mul_add_short(Limb::MAX, Limb::MAX);
        // (B - 1)^2 + B - 1 = B^2 - B
        assert_eq!(x.limbs(), &[0, Limb::MAX, 0]);
        let mut x = BigInt::zero();
        x.mul_add_short(DECIMAL_GROUP_RADIX, 7);
        assert_eq!(x.limbs(), &[7]);
    }

    #[test]
    fn test_bit_ops() {
        assert_eq!(BigInt::from(0b1100) & BigInt::from(0b1010), BigInt::from(0b1000));
        assert_eq!(BigInt::from(0b1100) | BigInt::from(0b1010), BigInt::from(0b1110));
        assert_eq!(BigInt::from(0b1100) ^ BigInt::from(0b1010), BigInt::from(0b0110));
        assert_eq!(BigInt::from(-1) & big("123456789012345678901234567890"), big("123456789012345678901234567890"));
        assert_eq!(BigInt::from(-8) & BigInt::from(13), BigInt::from(-8 & 13));
        assert_eq!(BigInt::from(-8) | BigInt::from(13), BigInt::from(-8 | 13));
        assert_eq!(BigInt::from(-8) ^ BigInt::from(13), BigInt::from(-8 ^ 13));
        assert_eq!(!BigInt::from(0), BigInt::from(-1));
        assert_eq!(!big("-123456789012345678901234567891"), big("123456789012345678901234567890"));
        let x = big("-340282366920938463463374607431768211456");
        assert!(is_normalized(&(&x ^ &x)));
        assert_eq!(&x ^ &x, BigInt::zero());
    }

    #[test]
    fn test_shl() {
        assert_eq!((BigInt::from(1) << 64u32).to_string(), "18446744073709551616");
        assert_eq!(BigInt::from(-1) << 0u32, BigInt::from(-1));
        assert_eq!(BigInt::from(-1) << LIMB_BITS, BigInt::from(-(1i128 << LIMB_BITS)));
        assert_eq!(BigInt::from(1) << (LIMB_BITS - 1), BigInt::from(1i128 << (LIMB_BITS - 1)));
        assert_eq!((BigInt::from(1) << (LIMB_BITS - 1)).limbs(), &[SIGN_BIT, 0]);
        // -2^(w-2) << 1 = -2^(w-1) still fits one limb
        assert_eq!((BigInt::from(-(1i128 << (LIMB_BITS - 2))) << 1u32).limbs(), &[SIGN_BIT]);
        assert_eq!(BigInt::from(-3) << 100u32, BigInt::from(-3i128 << 100));
        assert_eq!(BigInt::from(0) << 1000u32, BigInt::zero());
        assert_eq!((BigInt::from(0) << 1000u32).limbs(), &[0]);
        assert_eq!(BigInt::from(5) << -1i32, BigInt::from(2));
    }

    #[test]
    fn test_shl_zero_by_huge_amount() {
        let x = BigInt::zero() << (1u64 << 40);
        assert_eq!(x, BigInt::zero());
        assert_eq!(x.limbs(), &[0]);
        assert!(x.storage().is_inline());
        let mut y = BigInt::zero();
        y <<= usize::MAX;
        assert!(y.is_zero());
        assert_eq!(BigInt::zero() >> -(1i64 << 50), BigInt::zero());
    }

    #[test]
    fn test_shr() {
        assert_eq!(BigInt::from(-1) >> 1000u32, BigInt::from(-1));
        assert_eq!(BigInt::from(7) >> 1000u32, BigInt::zero());
        assert_eq!(BigInt::from(-7) >> 1u32, BigInt::from(-4));
        assert_eq!(BigInt::from(-7i128 << 90) >> 90u32, BigInt::from(-7));
        assert_eq!(BigInt::from(i128::MIN) >> 127u32, BigInt::from(-1));
        assert_eq!(BigInt::from(i128::MIN) >> LIMB_BITS, BigInt::from(i128::MIN >> LIMB_BITS));
        assert_eq!(BigInt::from(5) >> -2i32, BigInt::from(20));
        assert_eq!(BigInt::from(u128::MAX) >> 1u32, BigInt::from(u128::MAX >> 1));
    }

    #[test]
    fn test_cmp() {
        let values: Vec<BigInt> = [
            "-340282366920938463463374607431768211456",
            "-18446744073709551616",
            "-4294967296",
            "-1",
            "0",
            "1",
            "4294967295",
            "4294967296",
            "18446744073709551616",
        ]
        .iter()
        .map(|s| big(s))
        .collect();
        for (i, a) in values.iter().enumerate() {
            for (j, b) in values.iter().enumerate() {
                assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_signum_abs() {
        assert_eq!(big("-42").signum(), BigInt::from(-1));
        assert_eq!(big("0").signum(), BigInt::zero());
        assert_eq!(big("42").signum(), BigInt::one());
        assert_eq!(big("-42").abs(), big("42"));
        assert_eq!(BigInt::from(i128::MIN).abs(), BigInt::from(i128::MIN as u128));
    }

    #[test]
    fn test_inc_dec() {
        let mut x = BigInt::from(-1);
        x.inc();
        assert!(x.is_zero());
        x.dec().dec();
        assert_eq!(x, BigInt::from(-2));
        let mut x = BigInt::from(u64::MAX);
        x.inc();
        assert_eq!(x, BigInt::from(u64::MAX as u128 + 1));
    }
}
