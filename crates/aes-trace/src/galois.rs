//! GF(2^8) arithmetic with the AES reduction polynomial x^8 + x^4 + x^3 + x + 1.

/// Low byte of the reduction polynomial 0x11b.
const REDUCTION: u8 = 0x1b;

/// Multiplies `byte` by `x` (i.e. 0x02), folding overflow back into the field.
#[inline]
pub fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies `a` and `b` in GF(2^8) by shift-and-add.
pub fn multiply(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    for _ in 0..8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fips197_worked_examples() {
        // §4.2: {57} • {83} = {c1}, §4.2.1: {57} • {13} = {fe}
        assert_eq!(multiply(0x57, 0x83), 0xc1);
        assert_eq!(multiply(0x57, 0x13), 0xfe);
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0xae), 0x47);
        assert_eq!(xtime(0x47), 0x8e);
        assert_eq!(xtime(0x8e), 0x07);
    }

    #[test]
    fn known_inverse_pairs() {
        assert_eq!(multiply(0x49, 0x24), 0xdc);
        assert_eq!(multiply(0x07, 0xd1), 0x01);
        assert_eq!(multiply(0x53, 0xca), 0x01);
    }

    #[test]
    fn identity_and_zero_for_every_byte() {
        for x in 0u8..=255 {
            assert_eq!(multiply(x, 1), x);
            assert_eq!(multiply(1, x), x);
            assert_eq!(multiply(x, 0), 0);
            assert_eq!(multiply(x, 2), xtime(x));
        }
    }

    proptest! {
        #[test]
        fn multiply_is_commutative(a in any::<u8>(), b in any::<u8>()) {
            prop_assert_eq!(multiply(a, b), multiply(b, a));
        }

        #[test]
        fn multiply_distributes_over_xor(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
            prop_assert_eq!(multiply(a, b ^ c), multiply(a, b) ^ multiply(a, c));
        }
    }
}
