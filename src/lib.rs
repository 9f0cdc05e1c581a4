//! Big Number \
//! This crate provides [`BigInteger`]: arbitrary-precision signed integers kept as
//! base `10^9` limbs, with the usual arithmetic operators, power-of-two shifts
//! done by repeated doubling and halving, total ordering and decimal conversion.
//!
//! ```
//! use big_number::{bn, BigInteger, BigIntegerError};
//!
//! let a = bn!(93845405873409587340985730489570394857043987543);
//! let b = BigInteger::from(32423423);
//! let (q, r) = a.div_rem(&b).unwrap();
//! assert_eq!(&q * &b + &r, a);
//!
//! let max = (BigInteger::from(1) << 63) - BigInteger::from(1);
//! assert_eq!(max.to_i64(), Ok(i64::MAX));
//! assert_eq!((BigInteger::from(1) << 64).to_i64(), Err(BigIntegerError::RangeOverflow));
//! ```

mod big_integer;
mod big_num_cache;
mod big_num_constants;
mod error;
pub mod stream;

pub use big_integer::BigInteger;
pub use big_num_constants::{LIMB_DIGITS, RADIX};
pub use error::{BigIntegerError, ParseBigIntegerError, ReadError, Result};

/// Embeds an integer literal of any length, e.g. `bn!(-123_456_789_012_345_678_901)`.
///
/// # Panics
/// Panics if the token is not a decimal integer literal.
#[macro_export]
macro_rules! bn {
    (- $lit: tt) => {
        $crate::BigInteger::from_literal(concat!("-", stringify!($lit)))
    };
    ($lit: tt) => {
        $crate::BigInteger::from_literal(stringify!($lit))
    };
}

#[cfg(test)]
mod tests {
    use crate::BigInteger;

    #[test]
    fn it_works() {
        let a: BigInteger = "10000000000000".parse().unwrap();
        let b: BigInteger = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
        assert_eq!((&a << 10).to_string(), "10240000000000000");
        assert_eq!((&a >> 10).to_string(), "9765625000");
    }

    #[test]
    fn bn_macro() {
        assert_eq!(bn!(0), BigInteger::zero());
        assert_eq!(bn!(-42), BigInteger::from(-42));
        assert_eq!(bn!(1_000_000_000), BigInteger::from(1_000_000_000));
        assert_eq!(
            bn!(2342399999999999999999934).to_string(),
            "2342399999999999999999934"
        );
    }
}
