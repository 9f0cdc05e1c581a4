//! Integration tests for big_number
//!
//! Concrete scenarios from the demo program, checked against `num-bigint`
//! as an independent oracle.

use big_number::{bn, BigInteger, BigIntegerError, ParseBigIntegerError};
use num_bigint::BigInt;

fn oracle(x: &BigInteger) -> BigInt {
    x.to_string().parse().unwrap()
}

fn quick_pow(a: &BigInteger, b: u32) -> BigInteger {
    match b {
        0 => BigInteger::from(1),
        1 => a.clone(),
        _ => {
            let half = quick_pow(a, b / 2);
            let mut res = &half * &half;
            if b % 2 == 1 {
                res *= a;
            }
            res
        }
    }
}

#[test]
fn test_literal_round_trip() {
    let b2: BigInteger = "2342399999999999999999934".parse().unwrap();
    assert_eq!(b2.to_string(), "2342399999999999999999934");
    assert_eq!(bn!(2342399999999999999999934), b2);
}

#[test]
fn test_demo_operations_match_oracle() {
    let b1 = BigInteger::from(3445345345_i64);
    let b2 = bn!(2342399999999999999999934);
    let (o1, o2) = (oracle(&b1), oracle(&b2));

    assert_eq!(oracle(&(&b1 + &b2)), &o1 + &o2);
    assert_eq!(oracle(&(&b1 - &b2)), &o1 - &o2);
    assert_eq!(oracle(&(&b1 * &b2)), &o1 * &o2);
    assert_eq!(oracle(&(&b2 / &b1)), &o2 / &o1);
    assert_eq!(oracle(&(&b2 % &b1)), &o2 % &o1);
    assert_eq!(oracle(&(&b1 / &b2)), &o1 / &o2);
    assert_eq!(oracle(&(&b1 % &b2)), &o1 % &o2);

    assert_eq!((&b1 + &b2).to_string(), "2342400000000003445345279");
    assert_eq!((&b2 / &b1).to_string(), "679873790707038");
    assert_eq!((&b2 % &b1).to_string(), "2367961824");
    assert!(b1 < b2);
    assert!(b1.to_bool());
    assert_eq!(!&b2, false);
    assert!(!&BigInteger::zero());
}

#[test]
fn test_large_division() {
    let a = bn!(93845405873409587340985730489570394857043987543);
    let b = BigInteger::from(32423423);
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q.to_string(), "2894370710748510030572211036742493069193");
    assert_eq!(r.to_string(), "31079904");
    assert_eq!(&q * &b + &r, a);
    assert_eq!(&a / &b, q);
    assert_eq!(&a % &b, r);
}

#[test]
fn test_signed_division_matches_oracle() {
    let dividends = [
        "0",
        "7",
        "-7",
        "999999999999999999999999999",
        "-123456789012345678901234567890123456789",
        "1000000000000000000",
    ];
    let divisors = ["1", "-1", "3", "-3", "1000000000", "-999999999", "98765432109876543210"];
    for x in dividends {
        for y in divisors {
            let (a, b): (BigInteger, BigInteger) = (x.parse().unwrap(), y.parse().unwrap());
            let (q, r) = a.div_rem(&b).unwrap();
            let (oa, ob) = (oracle(&a), oracle(&b));
            assert_eq!(oracle(&q), &oa / &ob, "{} / {}", x, y);
            assert_eq!(oracle(&r), &oa % &ob, "{} % {}", x, y);
        }
    }
}

#[test]
fn test_i64_boundaries() {
    let one = BigInteger::from(1);
    let max = (&one << 63) - &one;
    assert_eq!(max.to_i64(), Ok(i64::MAX));
    assert_eq!(i64::try_from(&max), Ok(i64::MAX));
    assert_eq!((&one << 64).to_i64(), Err(BigIntegerError::RangeOverflow));
    assert_eq!((-(&one << 63)).to_i64(), Ok(i64::MIN));
    assert_eq!((-(&one << 63) - &one).to_i64(), Err(BigIntegerError::RangeOverflow));
    assert_eq!(BigInteger::from(i64::MIN).to_string(), i64::MIN.to_string());
}

#[test]
fn test_shift_matches_fast_power() {
    let one = BigInteger::from(1);
    let two = BigInteger::from(2);
    assert_eq!(&one << 1000, quick_pow(&two, 1000));
    assert_eq!(oracle(&(&one << 1000)), BigInt::from(2).pow(1000));
    assert_eq!((&one << 444).to_string(), BigInt::from(2).pow(444).to_string());

    let x = bn!(-31415926535897932384626433832795);
    assert_eq!(&x << 77, &x * &quick_pow(&two, 77));
    assert_eq!((&x << 77) >> 77, x);
    assert_eq!(x.shl_big(&BigInteger::from(77)).unwrap(), &x << 77);
}

#[test]
fn test_negative_shift_rejected() {
    let x = BigInteger::from(5);
    assert_eq!(x.checked_shl(-3), Err(BigIntegerError::NegativeShift(-3)));
    assert_eq!(x.checked_shr(-3), Err(BigIntegerError::NegativeShift(-3)));
    assert_eq!(x.checked_shl(0), Ok(x.clone()));
    assert_eq!(x.shr_big(&BigInteger::zero()), Ok(x.clone()));
}

#[test]
fn test_parse_errors_surface() {
    assert_eq!("-".parse::<BigInteger>(), Err(ParseBigIntegerError::EmptyDigits));
    assert!(matches!(
        "1e9".parse::<BigInteger>(),
        Err(ParseBigIntegerError::InvalidDigit { index: 1, found: 'e' })
    ));
    let err: BigIntegerError = "--1".parse::<BigInteger>().unwrap_err().into();
    assert_eq!(err.to_string(), "parse error: invalid digit '-' at byte 1");
}

#[test]
fn test_canonical_strings() {
    let cases = [
        ("", "0"),
        ("0", "0"),
        ("-0", "0"),
        ("000000000000000000001", "1"),
        ("-000000000123456789123456789", "-123456789123456789"),
        ("1000000000000000000000000000", "1000000000000000000000000000"),
    ];
    for (input, canonical) in cases {
        assert_eq!(input.parse::<BigInteger>().unwrap().to_string(), canonical, "{:?}", input);
    }
}
