use lazy_static::*;

use crate::big_num_constants::*;

lazy_static! {
    /// `POW10[i] == 10^i` for every chunk length the decimal codec produces.
    pub static ref POW10: [Limb; DECIMAL_GROUP_DIGITS + 1] = {
        let mut pow10 = [1 as Limb; DECIMAL_GROUP_DIGITS + 1];
        for i in 1..=DECIMAL_GROUP_DIGITS {
            pow10[i] = pow10[i - 1] * 10;
        }
        pow10
    };
}

#[test]
fn test_pow10() {
    assert_eq!(POW10[0], 1);
    assert_eq!(POW10[1], 10);
    assert_eq!(POW10[DECIMAL_GROUP_DIGITS], DECIMAL_GROUP_RADIX);
}
