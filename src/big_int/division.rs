//! Truncating division. Quotients are computed on magnitudes with Knuth's
//! Algorithm D (The Art of Computer Programming, Vol. 2, 4.3.1) and the sign
//! is restored afterwards; remainders are derived as `a - (a / b) * b`.

use std::cmp::Ordering;

use log::trace;

use super::BigInt;
use crate::big_num_constants::*;
use crate::error::{BigIntError, BigIntResult};
use crate::limb::*;
use crate::limb_storage::LimbStorage;

impl BigInt {
    /// `self / rhs`, rounding toward zero.
    pub fn try_div(&self, rhs: &BigInt) -> BigIntResult<BigInt> {
        let mut quotient = self.clone();
        quotient.div_in_place(rhs)?;
        Ok(quotient)
    }

    /// `self % rhs`, with the sign of `self`.
    pub fn try_rem(&self, rhs: &BigInt) -> BigIntResult<BigInt> {
        let mut remainder = self.clone();
        remainder.rem_in_place(rhs)?;
        Ok(remainder)
    }

    /// Quotient and remainder of truncating division.
    pub fn div_rem(&self, rhs: &BigInt) -> BigIntResult<(BigInt, BigInt)> {
        let quotient = self.try_div(rhs)?;
        let mut remainder = self.clone();
        remainder.sub_in_place(&(&quotient * rhs));
        Ok((quotient, remainder))
    }

    pub(super) fn rem_in_place(&mut self, rhs: &BigInt) -> BigIntResult<()> {
        let quotient = self.try_div(rhs)?;
        self.sub_in_place(&(quotient * rhs));
        Ok(())
    }

    pub(super) fn div_in_place(&mut self, rhs: &BigInt) -> BigIntResult<()> {
        if rhs.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let negative = self.is_negative() ^ rhs.is_negative();
        let mut dividend = self.abs();
        let mut divisor = rhs.abs();

        if divisor.compare_limbs(&dividend) == Ordering::Greater {
            *self = BigInt::zero();
            return Ok(());
        }

        // scale both operands so the divisor's leading limb has its top bit set
        let shift = divisor.magnitude()[divisor.magnitude().len() - 1].leading_zeros();
        let factor: Limb = 1 << shift;
        divisor.mul_add_short(factor, 0);
        dividend.mul_add_short(factor, 0);
        trace!(
            "dividing {} limbs by {} limbs, normalization factor 2^{}",
            dividend.magnitude().len(),
            divisor.magnitude().len(),
            shift
        );

        let d = divisor.magnitude();
        let mut quotient = if d.len() == 1 {
            dividend.div_short(d[0]);
            dividend
        } else {
            BigInt::divide_knuth(dividend.magnitude(), d)
        };
        if negative {
            quotient.negate();
        }
        *self = quotient;
        Ok(())
    }

    /// Divides a nonnegative `self` by a single limb in place and returns the
    /// remainder.
    pub(super) fn div_short(&mut self, divisor: Limb) -> Limb {
        debug_assert!(divisor != 0 && !self.is_negative());
        let divisor = divisor as DoubleLimb;
        let mut rem: Limb = 0;
        for limb in self.limbs.as_mut_slice().iter_mut().rev() {
            let cur = join(rem, *limb);
            *limb = (cur / divisor) as Limb;
            rem = (cur % divisor) as Limb;
        }
        self.normalize();
        rem
    }

    /// Algorithm D on magnitudes. `d` has at least two limbs and its leading
    /// limb has the top bit set; `u` has at least as many limbs as `d`.
    fn divide_knuth(u: &[Limb], d: &[Limb]) -> BigInt {
        let n = d.len();
        let m = u.len();
        debug_assert!(n >= 2 && m >= n && d[n - 1] & SIGN_BIT != 0);

        let mut rem = LimbStorage::from_slice(u);
        rem.push(0);
        // the spare top limb keeps the quotient nonnegative
        let mut quotient = LimbStorage::new();
        quotient.resize(m - n + 2, 0);

        let (d1, d0) = (d[n - 1], d[n - 2]);
        let r = rem.as_mut_slice();
        let q = quotient.as_mut_slice();
        for j in (0..=m - n).rev() {
            let window = &mut r[j..=j + n];
            let mut qhat = estimate_quotient_limb(window[n], window[n - 1], window[n - 2], d1, d0);
            if sub_mul_limb(window, d, qhat) {
                trace!("add-back for quotient limb {}", j);
                qhat -= 1;
                add_back(window, d);
            }
            q[j] = qhat;
        }

        let mut quotient = BigInt { limbs: quotient };
        quotient.normalize();
        quotient
    }
}

/// Trial quotient limb for the window `u2 u1 u0` over the divisor's leading
/// limbs `d1 d0`, requiring `u2 <= d1`. The estimate is never too small and at
/// most one too large.
fn estimate_quotient_limb(u2: Limb, u1: Limb, u0: Limb, d1: Limb, d0: Limb) -> Limb {
    let base = join(1, 0);
    let (d1, d0) = (d1 as DoubleLimb, d0 as DoubleLimb);
    let (mut qhat, mut rhat) = if u2 as DoubleLimb == d1 {
        // (u2 * B + u1) / d1 >= B, saturate at B - 1 and carry the remainder
        // of that guess: u2 * B + u1 - (B - 1) * d1 = u1 + d1
        (Limb::MAX as DoubleLimb, u1 as DoubleLimb + d1)
    } else {
        let num = join(u2, u1);
        (num / d1, num % d1)
    };
    // once rhat >= B the two limb test can no longer fail
    while rhat < base && qhat * d0 > join(rhat as Limb, u0) {
        qhat -= 1;
        rhat += d1;
    }
    qhat as Limb
}

/// `window -= d * q`, returns whether the result went negative.
/// `window` is one limb longer than `d`.
fn sub_mul_limb(window: &mut [Limb], d: &[Limb], q: Limb) -> bool {
    let n = d.len();
    let mut mul_carry = 0;
    let mut borrow = 0;
    for (w, &di) in window.iter_mut().zip(d) {
        let (hi, lo) = mul_limb(q, di);
        let (lo, c) = add_carry(lo, mul_carry, 0);
        mul_carry = hi + c;
        let (diff, b) = sub_borrow(*w, lo, borrow);
        *w = diff;
        borrow = b;
    }
    let (diff, b) = sub_borrow(window[n], mul_carry, borrow);
    window[n] = diff;
    b != 0
}

/// `window += d`, dropping the final carry which cancels the earlier borrow.
fn add_back(window: &mut [Limb], d: &[Limb]) {
    let n = d.len();
    let mut carry = 0;
    for (w, &di) in window.iter_mut().zip(d) {
        let (sum, c) = add_carry(*w, di, carry);
        *w = sum;
        carry = c;
    }
    window[n] = window[n].wrapping_add(carry);
}
