//! Word-level primitives. Carries and borrows are detected with overflow
//! checks on the limb type itself, and the limb product is assembled from half
//! words, so nothing here needs a type wider than [`Limb`].

use crate::big_num_constants::*;

/// Returns `a + b + carry` and the carry out of that sum (0, 1 or 2).
#[inline(always)]
pub fn add_carry(a: Limb, b: Limb, carry: Limb) -> (Limb, Limb) {
    let (sum, c1) = a.overflowing_add(b);
    let (sum, c2) = sum.overflowing_add(carry);
    (sum, c1 as Limb + c2 as Limb)
}

/// Returns `a - b - borrow` and whether the difference went below zero.
/// `borrow` must be 0 or 1.
#[inline(always)]
pub fn sub_borrow(a: Limb, b: Limb, borrow: Limb) -> (Limb, Limb) {
    let (diff, b1) = a.overflowing_sub(b);
    let (diff, b2) = diff.overflowing_sub(borrow);
    (diff, (b1 | b2) as Limb)
}

#[inline(always)]
fn lo_half(x: Limb) -> Limb {
    x & LOW_HALF_MASK
}

#[inline(always)]
fn hi_half(x: Limb) -> Limb {
    x >> HALF_LIMB_BITS
}

/// Full product of two limbs as `(hi, lo)`.
///
/// Each operand is split into half words, the four cross products are formed
/// (each fits in a limb) and recombined with explicit carries.
#[inline]
pub fn mul_limb(x: Limb, y: Limb) -> (Limb, Limb) {
    let (x0, x1) = (lo_half(x), hi_half(x));
    let (y0, y1) = (lo_half(y), hi_half(y));

    let low = x0 * y0;
    let (mid, mid_carry) = (x0 * y1).overflowing_add(x1 * y0);
    let high = x1 * y1;

    let (lo, lo_carry) = low.overflowing_add(mid << HALF_LIMB_BITS);
    let hi = high + hi_half(mid) + ((mid_carry as Limb) << HALF_LIMB_BITS) + lo_carry as Limb;
    (hi, lo)
}

/// All-ones if the sign bit of `x` is set, zero otherwise.
#[inline(always)]
pub fn sign_fill(x: Limb) -> Limb {
    if x & SIGN_BIT != 0 {
        Limb::MAX
    } else {
        0
    }
}

#[inline(always)]
pub fn join(hi: Limb, lo: Limb) -> DoubleLimb {
    ((hi as DoubleLimb) << LIMB_BITS) | lo as DoubleLimb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide_mul(x: Limb, y: Limb) -> (Limb, Limb) {
        let p = x as DoubleLimb * y as DoubleLimb;
        ((p >> LIMB_BITS) as Limb, p as Limb)
    }

    #[test]
    fn test_mul_limb() {
        let edges = [
            0,
            1,
            2,
            LOW_HALF_MASK,
            LOW_HALF_MASK + 1,
            SIGN_BIT,
            SIGN_BIT - 1,
            Limb::MAX - 1,
            Limb::MAX,
            DECIMAL_GROUP_RADIX,
        ];
        for &x in edges.iter() {
            for &y in edges.iter() {
                assert_eq!(mul_limb(x, y), wide_mul(x, y), "{} * {}", x, y);
            }
        }
        // (B - 1)^2 = (B - 2) * B + 1
        assert_eq!(mul_limb(Limb::MAX, Limb::MAX), (Limb::MAX - 1, 1));
    }

    #[test]
    fn test_add_carry() {
        assert_eq!(add_carry(Limb::MAX, Limb::MAX, 1), (Limb::MAX, 1));
        assert_eq!(add_carry(Limb::MAX, 0, 1), (0, 1));
        assert_eq!(add_carry(Limb::MAX, 1, 1), (1, 1));
        assert_eq!(add_carry(Limb::MAX, Limb::MAX, 2), (0, 2));
        assert_eq!(add_carry(3, 4, 0), (7, 0));
    }

    #[test]
    fn test_sub_borrow() {
        assert_eq!(sub_borrow(0, 0, 1), (Limb::MAX, 1));
        assert_eq!(sub_borrow(0, Limb::MAX, 1), (0, 1));
        assert_eq!(sub_borrow(5, 3, 1), (1, 0));
        assert_eq!(sub_borrow(5, 5, 0), (0, 0));
    }

    #[test]
    fn test_sign_fill() {
        assert_eq!(sign_fill(SIGN_BIT), Limb::MAX);
        assert_eq!(sign_fill(SIGN_BIT - 1), 0);
        assert_eq!(join(1, 2), ((1 as DoubleLimb) << LIMB_BITS) + 2);
    }
}
