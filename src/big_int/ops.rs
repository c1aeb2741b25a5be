use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use super::BigInt;

// every binary operator is built on one in-place method taking `&BigInt`
macro_rules! impl_binary_op {
    ($($Op: ident, $op: ident, $OpAssign: ident, $op_assign: ident, $in_place: path;)*) => {
    $(
    impl $OpAssign<&BigInt> for BigInt {
        fn $op_assign(&mut self, rhs: &BigInt) {
            $in_place(self, rhs);
        }
    }

    impl $OpAssign for BigInt {
        fn $op_assign(&mut self, rhs: BigInt) {
            $in_place(self, &rhs);
        }
    }

    impl $Op<&BigInt> for BigInt {
        type Output = BigInt;

        fn $op(mut self, rhs: &BigInt) -> Self::Output {
            $in_place(&mut self, rhs);
            self
        }
    }

    impl $Op for BigInt {
        type Output = BigInt;

        fn $op(mut self, rhs: BigInt) -> Self::Output {
            $in_place(&mut self, &rhs);
            self
        }
    }

    impl $Op<&BigInt> for &BigInt {
        type Output = BigInt;

        fn $op(self, rhs: &BigInt) -> Self::Output {
            let mut result = self.clone();
            $in_place(&mut result, rhs);
            result
        }
    }

    impl $Op<BigInt> for &BigInt {
        type Output = BigInt;

        fn $op(self, rhs: BigInt) -> Self::Output {
            let mut result = self.clone();
            $in_place(&mut result, &rhs);
            result
        }
    }
    )*
    };
}

impl BigInt {
    fn div_or_panic(&mut self, rhs: &BigInt) {
        if let Err(e) = self.div_in_place(rhs) {
            panic!("attempt to divide by zero: {}", e);
        }
    }

    fn rem_or_panic(&mut self, rhs: &BigInt) {
        if let Err(e) = self.rem_in_place(rhs) {
            panic!("attempt to divide by zero: {}", e);
        }
    }
}

impl_binary_op! {
    Add, add, AddAssign, add_assign, BigInt::add_in_place;
    Sub, sub, SubAssign, sub_assign, BigInt::sub_in_place;
    Mul, mul, MulAssign, mul_assign, BigInt::mul_in_place;
    Div, div, DivAssign, div_assign, BigInt::div_or_panic;
    Rem, rem, RemAssign, rem_assign, BigInt::rem_or_panic;
    BitAnd, bitand, BitAndAssign, bitand_assign, BigInt::and_in_place;
    BitOr, bitor, BitOrAssign, bitor_assign, BigInt::or_in_place;
    BitXor, bitxor, BitXorAssign, bitxor_assign, BigInt::xor_in_place;
}

// negative amounts shift the other way
macro_rules! impl_shift {
    ($($t: ty),*) => {
    $(
    impl ShlAssign<$t> for BigInt {
        fn shl_assign(&mut self, n: $t) {
            self.shift_left(n as i128);
        }
    }

    impl Shl<$t> for BigInt {
        type Output = BigInt;

        fn shl(mut self, n: $t) -> Self::Output {
            self.shift_left(n as i128);
            self
        }
    }

    impl Shl<$t> for &BigInt {
        type Output = BigInt;

        fn shl(self, n: $t) -> Self::Output {
            self.clone() << n
        }
    }

    impl ShrAssign<$t> for BigInt {
        fn shr_assign(&mut self, n: $t) {
            self.shift_right(n as i128);
        }
    }

    impl Shr<$t> for BigInt {
        type Output = BigInt;

        fn shr(mut self, n: $t) -> Self::Output {
            self.shift_right(n as i128);
            self
        }
    }

    impl Shr<$t> for &BigInt {
        type Output = BigInt;

        fn shr(self, n: $t) -> Self::Output {
            self.clone() >> n
        }
    }
    )*
    };
}

impl_shift!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(mut self) -> Self::Output {
        self.not_in_place();
        self
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        self.clone().not()
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| acc * x)
    }
}
