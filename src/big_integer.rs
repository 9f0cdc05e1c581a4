//! # BigInteger
//! Arbitrary-precision signed integers stored as base `10^9` limbs, most significant first.
//! # Example
//! ```
//! use big_number::BigInteger;
//!
//! let a: BigInteger = "10000000000000".parse().unwrap();
//! let b = BigInteger::from(900000000000_i64);
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {}", &a << 10);
//! println!("a >> 10 = {}", &a >> 10);
//! ```

use std::fmt::{self, Display, Write};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Neg, Not,
};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::{BigIntegerError, ParseBigIntegerError, Result};

/// An arbitrary-precision signed integer.
///
/// The representation is always canonical: no leading zero limbs, and zero is
/// a single `0` limb with a non-negative sign. Derived equality and hashing are
/// therefore value equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    /// `true` for non-negative values.
    sign: bool,
    limbs: Vec<u64>,
}

impl Default for BigInteger {
    fn default() -> Self {
        BigInteger::zero()
    }
}

// 构造与规范化
impl BigInteger {
    pub fn zero() -> Self {
        BigInteger { sign: true, limbs: vec![0] }
    }

    /// Builds a value from raw limbs and canonicalizes it.
    pub(crate) fn from_limbs(sign: bool, limbs: Vec<u64>) -> Self {
        let mut value = BigInteger { sign, limbs };
        value.clean();
        value
    }

    /// 去掉前导 0 limb, 全部去掉时恢复为规范的 0
    fn clean(&mut self) {
        let leading = self.limbs.iter().take_while(|&&limb| limb == 0).count();
        self.limbs.drain(..leading);
        if self.limbs.is_empty() {
            *self = BigInteger::zero();
        }
    }

    /// `digits` must be ASCII decimal digits; an empty slice is zero.
    fn from_digits(negative: bool, digits: &[u8]) -> Self {
        let head = digits.len() % LIMB_DIGITS;
        let mut limbs = Vec::with_capacity(digits.len() / LIMB_DIGITS + 1);
        if head > 0 {
            limbs.push(limb_value(&digits[..head]));
        }
        limbs.extend(digits[head..].chunks(LIMB_DIGITS).map(limb_value));
        BigInteger::from_limbs(!negative, limbs)
    }

    pub fn from_i64(n: i64) -> Self {
        // `unsigned_abs` keeps i64::MIN representable
        let magnitude = n.unsigned_abs();
        if magnitude <= MAX_CONSTANT as u64 {
            let cache: &Vec<BigInteger> = if n < 0 { &NEG_CACHE } else { &POS_CACHE };
            return cache[magnitude as usize].clone();
        }
        BigInteger::from_digits(n < 0, magnitude.to_string().as_bytes())
    }

    pub fn from_u64(n: u64) -> Self {
        if n <= MAX_CONSTANT as u64 {
            return POS_CACHE[n as usize].clone();
        }
        BigInteger::from_digits(false, n.to_string().as_bytes())
    }

    /// Parses an optionally `-` prefixed decimal string.
    ///
    /// The empty string is zero. Leading zeros are accepted.
    pub fn from_decimal_str(s: &str) -> std::result::Result<Self, ParseBigIntegerError> {
        if s.is_empty() {
            return Ok(BigInteger::zero());
        }
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if digits.is_empty() {
            return Err(ParseBigIntegerError::EmptyDigits);
        }
        let offset = s.len() - digits.len();
        if let Some((index, found)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseBigIntegerError::InvalidDigit { index: index + offset, found });
        }
        Ok(BigInteger::from_digits(negative, digits.as_bytes()))
    }

    /// Builds a value from literal source text such as `stringify!(123_456)`.
    /// `_` separators are ignored.
    ///
    /// # Panics
    /// Panics if the text is not a decimal integer. Use [`str::parse`] for
    /// untrusted input.
    pub fn from_literal(text: &str) -> Self {
        let digits: String = text.chars().filter(|&c| c != '_').collect();
        match BigInteger::from_decimal_str(&digits) {
            Ok(value) => value,
            Err(e) => panic!("invalid big integer literal `{}`: {}", text, e),
        }
    }
}

#[inline]
fn limb_value(group: &[u8]) -> u64 {
    group.iter().fold(0, |acc, &d| acc * 10 + (d - b'0') as u64)
}

impl FromStr for BigInteger {
    type Err = ParseBigIntegerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        BigInteger::from_decimal_str(s)
    }
}

macro_rules! impl_signed_to_big_integer {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInteger {
        fn from(val: $i) -> Self {
            BigInteger::from_i64(val as i64)
        }
    }
    )*
    };
}

macro_rules! impl_unsigned_to_big_integer {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInteger {
        fn from(val: $u) -> Self {
            BigInteger::from_u64(val as u64)
        }
    }
    )*
    };
}
impl_signed_to_big_integer!(i8, i16, i32, isize, i64);
impl_unsigned_to_big_integer!(u8, u16, u32, usize, u64);

// 查询
impl BigInteger {
    /// True for the single zero limb, whatever the sign flag says.
    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    pub fn to_bool(&self) -> bool {
        !self.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        !self.sign
    }

    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.sign {
            1
        } else {
            -1
        }
    }

    /// Number of decimal digits in the magnitude; zero has one digit.
    pub fn digits(&self) -> usize {
        let leading = self.limbs[0].to_string().len();
        leading + (self.limbs.len() - 1) * LIMB_DIGITS
    }

    pub fn abs(&self) -> BigInteger {
        BigInteger { sign: true, limbs: self.limbs.clone() }
    }

    /// Unary plus.
    pub fn pos(&self) -> BigInteger {
        self.clone()
    }
}

// 实现打印
impl Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::with_capacity(self.limbs.len() * LIMB_DIGITS);
        write!(s, "{}", self.limbs[0])?;
        for limb in &self.limbs[1..] {
            write!(s, "{:0width$}", limb, width = LIMB_DIGITS)?;
        }
        let digits = s.trim_start_matches('0');
        if digits.is_empty() {
            return f.pad_integral(true, "", "0");
        }
        f.pad_integral(self.sign, "", digits)
    }
}

// 实现窄化转换
impl BigInteger {
    /// Converts to `i64`, failing with [`BigIntegerError::RangeOverflow`]
    /// instead of wrapping.
    pub fn to_i64(&self) -> Result<i64> {
        self.to_string()
            .parse::<i64>()
            .map_err(|_| BigIntegerError::RangeOverflow)
    }
}

impl TryFrom<&BigInteger> for i64 {
    type Error = BigIntegerError;

    fn try_from(value: &BigInteger) -> Result<i64> {
        value.to_i64()
    }
}

impl TryFrom<BigInteger> for i64 {
    type Error = BigIntegerError;

    fn try_from(value: BigInteger) -> Result<i64> {
        value.to_i64()
    }
}

// 实现大小比较
fn compare_mag(a: &[u64], b: &[u64]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            // more negative is smaller
            (false, false) => compare_mag(&other.limbs, &self.limbs),
            (true, true) => compare_mag(&self.limbs, &other.limbs),
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// 无符号的 magnitude 运算
/// Left-pads `mag` with zero limbs up to `len`.
fn aligned(mag: &[u64], len: usize) -> Vec<u64> {
    let mut padded = vec![0; len - mag.len()];
    padded.extend_from_slice(mag);
    padded
}

fn add_mag(a: &[u64], b: &[u64]) -> Vec<u64> {
    let len = a.len().max(b.len());
    let mut result = aligned(a, len);
    let b = aligned(b, len);
    let mut carry = 0;
    for (x, y) in result.iter_mut().zip(b).rev() {
        let sum = *x + y + carry;
        carry = sum / RADIX;
        *x = sum % RADIX;
    }
    if carry != 0 {
        result.insert(0, carry);
    }
    result
}

/// Requires `|big| >= |little|`.
fn sub_mag(big: &[u64], little: &[u64]) -> Vec<u64> {
    let mut result = big.to_vec();
    let little = aligned(little, big.len());
    let mut borrow = 0;
    for (x, y) in result.iter_mut().zip(little).rev() {
        let take = y + borrow;
        if *x < take {
            *x = *x + RADIX - take;
            borrow = 1;
        } else {
            *x -= take;
            borrow = 0;
        }
    }
    result
}

/// `a - b` over magnitudes, returning the sign flag and magnitude.
fn sub_signed(a: &[u64], b: &[u64]) -> (bool, Vec<u64>) {
    match compare_mag(a, b) {
        Ordering::Less => (false, sub_mag(b, a)),
        _ => (true, sub_mag(a, b)),
    }
}

fn mul_mag(a: &[u64], b: &[u64]) -> Vec<u64> {
    let mut t = vec![0; a.len() + b.len()];
    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            t[i + j + 1] += a[i] * b[j];
            t[i + j] += t[i + j + 1] / RADIX;
            t[i + j + 1] %= RADIX;
        }
    }
    t
}

/// Restoring long division, one limb of the dividend at a time.
/// `divisor` must be positive.
fn div_mag(dividend: &[u64], divisor: &BigInteger) -> Vec<u64> {
    let ten = small(10);
    let mut quotient = vec![0; dividend.len()];
    let mut f = BigInteger::zero();
    for (i, &limb) in dividend.iter().enumerate() {
        f.push_limb(limb);
        if f < *divisor {
            continue;
        }
        let mut temp = divisor.clone();
        let mut pow: u64 = 1;
        while &temp * ten <= f {
            temp *= ten;
            pow *= 10;
        }
        while pow > 0 {
            while f >= temp {
                f -= &temp;
                quotient[i] += pow;
            }
            temp.div_ten();
            pow /= 10;
        }
        if i > 0 {
            let carry = quotient[i] / RADIX;
            quotient[i] %= RADIX;
            quotient[i - 1] += carry;
        }
    }
    quotient
}

impl BigInteger {
    /// `self = self * RADIX + limb` for a non-negative `self`.
    fn push_limb(&mut self, limb: u64) {
        if self.is_zero() {
            self.limbs[0] = limb;
        } else {
            self.limbs.push(limb);
        }
    }

    /// Truncating division of the magnitude by ten.
    fn div_ten(&mut self) {
        let mut carry = 0;
        for limb in self.limbs.iter_mut() {
            *limb += carry;
            carry = (*limb % 10) * RADIX;
            *limb /= 10;
        }
        self.clean();
    }
}

// 实现取反
impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.sign = !self.sign;
        }
        self
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

impl Not for &BigInteger {
    type Output = bool;

    /// True iff the value is zero.
    fn not(self) -> bool {
        self.is_zero()
    }
}

impl Not for BigInteger {
    type Output = bool;

    fn not(self) -> bool {
        self.is_zero()
    }
}

// 实现加法
impl AddAssign<&BigInteger> for BigInteger {
    fn add_assign(&mut self, rhs: &BigInteger) {
        let (sign, limbs) = match (self.sign, rhs.sign) {
            (true, true) => (true, add_mag(&self.limbs, &rhs.limbs)),
            (true, false) => sub_signed(&self.limbs, &rhs.limbs),
            (false, true) => sub_signed(&rhs.limbs, &self.limbs),
            (false, false) => (false, add_mag(&self.limbs, &rhs.limbs)),
        };
        self.sign = sign;
        self.limbs = limbs;
        self.clean();
    }
}

// 实现减法
impl SubAssign<&BigInteger> for BigInteger {
    fn sub_assign(&mut self, rhs: &BigInteger) {
        let (sign, limbs) = match (self.sign, rhs.sign) {
            (true, true) => sub_signed(&self.limbs, &rhs.limbs),
            (true, false) => (true, add_mag(&self.limbs, &rhs.limbs)),
            (false, true) => (false, add_mag(&self.limbs, &rhs.limbs)),
            (false, false) => sub_signed(&rhs.limbs, &self.limbs),
        };
        self.sign = sign;
        self.limbs = limbs;
        self.clean();
    }
}

// 实现乘法
impl MulAssign<&BigInteger> for BigInteger {
    fn mul_assign(&mut self, rhs: &BigInteger) {
        self.limbs = mul_mag(&self.limbs, &rhs.limbs);
        self.sign = self.sign == rhs.sign;
        self.clean();
    }
}

// 实现除法与求余
impl BigInteger {
    /// Quotient truncated toward zero.
    pub fn checked_div(&self, rhs: &BigInteger) -> Result<BigInteger> {
        if rhs.is_zero() {
            return Err(BigIntegerError::DivisionByZero);
        }
        let limbs = div_mag(&self.limbs, &rhs.abs());
        Ok(BigInteger::from_limbs(self.sign == rhs.sign, limbs))
    }

    /// Remainder with the sign of the dividend, `self - (self / rhs) * rhs`.
    pub fn checked_rem(&self, rhs: &BigInteger) -> Result<BigInteger> {
        Ok(self.div_rem(rhs)?.1)
    }

    pub fn div_rem(&self, rhs: &BigInteger) -> Result<(BigInteger, BigInteger)> {
        let quotient = self.checked_div(rhs)?;
        let remainder = self - &(&quotient * rhs);
        Ok((quotient, remainder))
    }
}

impl DivAssign<&BigInteger> for BigInteger {
    /// # Panics
    /// Panics if `rhs` is zero.
    fn div_assign(&mut self, rhs: &BigInteger) {
        match self.checked_div(rhs) {
            Ok(quotient) => *self = quotient,
            Err(e) => panic!("{}", e),
        }
    }
}

impl RemAssign<&BigInteger> for BigInteger {
    /// # Panics
    /// Panics if `rhs` is zero.
    fn rem_assign(&mut self, rhs: &BigInteger) {
        match self.checked_rem(rhs) {
            Ok(remainder) => *self = remainder,
            Err(e) => panic!("{}", e),
        }
    }
}

/// Derives the owned and borrowed forms of a binary operator from its
/// `OpAssign<&BigInteger>` implementation.
macro_rules! impl_binary_op {
    ($($op: ident, $method: ident, $op_assign: ident, $method_assign: ident);* $(;)?) => {
    $(
    impl $op_assign for BigInteger {
        fn $method_assign(&mut self, rhs: BigInteger) {
            <BigInteger as $op_assign<&BigInteger>>::$method_assign(self, &rhs);
        }
    }

    impl $op for BigInteger {
        type Output = BigInteger;

        fn $method(mut self, rhs: BigInteger) -> Self::Output {
            <BigInteger as $op_assign<&BigInteger>>::$method_assign(&mut self, &rhs);
            self
        }
    }

    impl $op<&BigInteger> for BigInteger {
        type Output = BigInteger;

        fn $method(mut self, rhs: &BigInteger) -> Self::Output {
            <BigInteger as $op_assign<&BigInteger>>::$method_assign(&mut self, rhs);
            self
        }
    }

    impl $op<BigInteger> for &BigInteger {
        type Output = BigInteger;

        fn $method(self, rhs: BigInteger) -> Self::Output {
            let mut res = self.clone();
            <BigInteger as $op_assign<&BigInteger>>::$method_assign(&mut res, &rhs);
            res
        }
    }

    impl $op<&BigInteger> for &BigInteger {
        type Output = BigInteger;

        fn $method(self, rhs: &BigInteger) -> Self::Output {
            let mut res = self.clone();
            <BigInteger as $op_assign<&BigInteger>>::$method_assign(&mut res, rhs);
            res
        }
    }
    )*
    };
}

impl_binary_op!(
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
    Div, div, DivAssign, div_assign;
    Rem, rem, RemAssign, rem_assign;
);

// 自增自减
impl BigInteger {
    /// `++x`
    pub fn increment(&mut self) -> &mut Self {
        *self += small(1);
        self
    }

    /// `x++`, returns the value before the increment.
    pub fn post_increment(&mut self) -> BigInteger {
        let previous = self.clone();
        self.increment();
        previous
    }

    /// `--x`
    pub fn decrement(&mut self) -> &mut Self {
        *self -= small(1);
        self
    }

    /// `x--`, returns the value before the decrement.
    pub fn post_decrement(&mut self) -> BigInteger {
        let previous = self.clone();
        self.decrement();
        previous
    }
}

// 实现移位
// Shifts are repeated multiplication or truncating division by two, so a
// negative value shifted right rounds toward zero.
impl BigInteger {
    fn double_times(&mut self, n: u64) {
        for _ in 0..n {
            *self *= small(2);
        }
    }

    fn halve_times(&mut self, n: u64) {
        for _ in 0..n {
            *self /= small(2);
        }
    }

    /// `self << amount`, rejecting negative amounts.
    pub fn checked_shl(&self, amount: i64) -> Result<BigInteger> {
        let n = u64::try_from(amount).map_err(|_| BigIntegerError::NegativeShift(amount))?;
        let mut res = self.clone();
        res.double_times(n);
        Ok(res)
    }

    /// `self >> amount`, rejecting negative amounts.
    pub fn checked_shr(&self, amount: i64) -> Result<BigInteger> {
        let n = u64::try_from(amount).map_err(|_| BigIntegerError::NegativeShift(amount))?;
        let mut res = self.clone();
        res.halve_times(n);
        Ok(res)
    }

    /// `self << amount` with a `BigInteger` amount, counted with a
    /// `BigInteger` loop variable.
    pub fn shl_big(&self, amount: &BigInteger) -> Result<BigInteger> {
        let mut res = self.clone();
        for _ in ShiftCount::new(amount)? {
            res *= small(2);
        }
        Ok(res)
    }

    /// `self >> amount` with a `BigInteger` amount.
    pub fn shr_big(&self, amount: &BigInteger) -> Result<BigInteger> {
        let mut res = self.clone();
        for _ in ShiftCount::new(amount)? {
            res /= small(2);
        }
        Ok(res)
    }
}

/// Counts `1..=amount` with a `BigInteger` counter.
struct ShiftCount<'a> {
    i: BigInteger,
    amount: &'a BigInteger,
}

impl<'a> ShiftCount<'a> {
    fn new(amount: &'a BigInteger) -> Result<Self> {
        if amount.is_negative() {
            let reported = amount.to_i64().unwrap_or(i64::MIN);
            return Err(BigIntegerError::NegativeShift(reported));
        }
        Ok(ShiftCount { i: small(1).clone(), amount })
    }
}

impl Iterator for ShiftCount<'_> {
    type Item = ();

    fn next(&mut self) -> Option<()> {
        if self.i > *self.amount {
            return None;
        }
        self.i.increment();
        Some(())
    }
}

impl ShlAssign<u32> for BigInteger {
    fn shl_assign(&mut self, n: u32) {
        self.double_times(n as u64);
    }
}

impl Shl<u32> for BigInteger {
    type Output = BigInteger;

    fn shl(mut self, n: u32) -> Self::Output {
        self <<= n;
        self
    }
}

impl Shl<u32> for &BigInteger {
    type Output = BigInteger;

    fn shl(self, n: u32) -> Self::Output {
        self.clone() << n
    }
}

impl ShrAssign<u32> for BigInteger {
    fn shr_assign(&mut self, n: u32) {
        self.halve_times(n as u64);
    }
}

impl Shr<u32> for BigInteger {
    type Output = BigInteger;

    fn shr(mut self, n: u32) -> Self::Output {
        self >>= n;
        self
    }
}

impl Shr<u32> for &BigInteger {
    type Output = BigInteger;

    fn shr(self, n: u32) -> Self::Output {
        self.clone() >> n
    }
}

#[test]
fn test_from() {
    let big = BigInteger::from(12_i8);
    assert_eq!(big.limbs, vec![12]);
    assert!(big.sign);

    let big = BigInteger::from(-100_i16);
    assert_eq!(big.limbs, vec![100]);
    assert!(!big.sign);

    let big = BigInteger::from(1_234_567_890_123_i64);
    assert_eq!(big.limbs, vec![1234, 567_890_123]);

    let big = BigInteger::from(i64::MIN);
    assert_eq!(big.limbs, vec![9, 223_372_036, 854_775_808]);
    assert!(!big.sign);

    let big = BigInteger::from(u64::MAX);
    assert_eq!(big.limbs, vec![18, 446_744_073, 709_551_615]);

    let big = BigInteger::from(0_u8);
    assert_eq!(big, BigInteger::zero());
}

#[test]
fn test_parse() {
    let a: BigInteger = "2342399999999999999999934".parse().unwrap();
    assert_eq!(a.limbs, vec![2342399, 999_999_999, 999_999_934]);

    let a: BigInteger = "000000042".parse().unwrap();
    assert_eq!(a.limbs, vec![42]);

    let a: BigInteger = "1000000000".parse().unwrap();
    assert_eq!(a.limbs, vec![1, 0]);

    let a: BigInteger = "-0000".parse().unwrap();
    assert_eq!(a, BigInteger::zero());
    assert!(a.sign);

    let a: BigInteger = "".parse().unwrap();
    assert_eq!(a, BigInteger::zero());
}

#[test]
fn test_parse_errors() {
    assert_eq!("-".parse::<BigInteger>(), Err(ParseBigIntegerError::EmptyDigits));
    assert_eq!(
        "12a4".parse::<BigInteger>(),
        Err(ParseBigIntegerError::InvalidDigit { index: 2, found: 'a' })
    );
    assert_eq!(
        "-1-2".parse::<BigInteger>(),
        Err(ParseBigIntegerError::InvalidDigit { index: 2, found: '-' })
    );
    assert_eq!(
        "+12".parse::<BigInteger>(),
        Err(ParseBigIntegerError::InvalidDigit { index: 0, found: '+' })
    );
    assert_eq!(
        " 1".parse::<BigInteger>(),
        Err(ParseBigIntegerError::InvalidDigit { index: 0, found: ' ' })
    );
}

#[test]
fn test_clean() {
    let a = BigInteger::from_limbs(false, vec![0, 0, 0]);
    assert_eq!(a.limbs, vec![0]);
    assert!(a.sign);

    let a = BigInteger::from_limbs(true, vec![0, 0, 7, 0]);
    assert_eq!(a.limbs, vec![7, 0]);
}

#[test]
fn test_cmp() {
    let values: Vec<BigInteger> = ["-1000000000000", "-999999999", "-1", "0", "1", "999999999", "1000000000"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", a, b);
        }
    }
}

#[test]
fn test_add_sub_signs() {
    let cases = [
        (7, 5), (7, -5), (-7, 5), (-7, -5),
        (5, 7), (5, -7), (-5, 7), (-5, -7),
        (5, 5), (-5, 5), (0, -3), (-3, 0),
    ];
    for (x, y) in cases {
        let (a, b) = (BigInteger::from(x), BigInteger::from(y));
        assert_eq!(&a + &b, BigInteger::from(x + y), "{} + {}", x, y);
        assert_eq!(&a - &b, BigInteger::from(x - y), "{} - {}", x, y);
    }
}

#[test]
fn test_add_carry() {
    let a: BigInteger = "999999999999999999".parse().unwrap();
    let sum = a + BigInteger::from(1);
    assert_eq!(sum.limbs, vec![1, 0, 0]);

    let b: BigInteger = "1000000000000000000".parse().unwrap();
    let diff = b - BigInteger::from(1);
    assert_eq!(diff.limbs, vec![999_999_999, 999_999_999]);
}

#[test]
fn test_mul() {
    let a: BigInteger = "123456789123456789".parse().unwrap();
    let b: BigInteger = "-987654321987654321".parse().unwrap();
    let c: BigInteger = "-121932631356500531347203169112635269".parse().unwrap();
    assert_eq!(&a * &b, c);
    assert_eq!(&b * &b, "975461059740893157555403139789971041".parse::<BigInteger>().unwrap());
    assert_eq!(&a * &BigInteger::zero(), BigInteger::zero());
    assert!(!(&b * &BigInteger::zero()).is_negative());
}

#[test]
fn test_div() {
    let a = BigInteger::from(120);
    let b = BigInteger::from(13);
    assert_eq!(&a / &b, BigInteger::from(9));
    assert_eq!(-&a / b.clone(), BigInteger::from(-9));
    assert_eq!(&a / &-&b, BigInteger::from(-9));
    assert_eq!(-&a / -&b, BigInteger::from(9));

    let a: BigInteger = "10000000000000000000000000000000000".parse().unwrap();
    let b = BigInteger::from(1000);
    let c: BigInteger = "10000000000000000000000000000000".parse().unwrap();
    assert_eq!(a / b, c);

    let a = BigInteger::from(3);
    let b: BigInteger = "100000000000000000000".parse().unwrap();
    assert_eq!(&a / &b, BigInteger::zero());
    assert_eq!(&a % &b, a);
}

#[test]
fn test_mod() {
    let cases = [(12, 8, 4), (-12, 8, -4), (12, -8, 4), (-12, -8, -4), (16, 4, 0)];
    for (x, y, r) in cases {
        assert_eq!(BigInteger::from(x) % BigInteger::from(y), BigInteger::from(r), "{} % {}", x, y);
    }

    let a: BigInteger = "23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245".parse().unwrap();
    let b: BigInteger = "526738495607659438721653478560954837265378495607".parse().unwrap();
    let r: BigInteger = "393707270751296419349581795408095683999332705291".parse().unwrap();
    assert_eq!(a % b, r);
}

#[test]
fn test_div_by_zero() {
    let a = BigInteger::from(42);
    assert_eq!(a.checked_div(&BigInteger::zero()), Err(BigIntegerError::DivisionByZero));
    assert_eq!(a.checked_rem(&BigInteger::zero()), Err(BigIntegerError::DivisionByZero));
    assert_eq!(a.div_rem(&BigInteger::zero()), Err(BigIntegerError::DivisionByZero));
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_div_operator_by_zero() {
    let _ = BigInteger::from(42) / BigInteger::zero();
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_rem_operator_by_zero() {
    let mut a = BigInteger::from(-42);
    a %= BigInteger::zero();
}

#[test]
fn test_div_ten() {
    let mut a: BigInteger = "1234567890123".parse().unwrap();
    a.div_ten();
    assert_eq!(a.to_string(), "123456789012");
    let mut a = BigInteger::from(7);
    a.div_ten();
    assert!(a.is_zero());
}

#[test]
fn test_shift() {
    let one = BigInteger::from(1);
    assert_eq!((&one << 10).to_string(), "1024");
    assert_eq!(&one << 0, one);
    assert_eq!(BigInteger::from(-3) >> 1, BigInteger::from(-1));
    assert_eq!(BigInteger::from(1025) >> 10, BigInteger::from(1));
    assert_eq!(one.checked_shl(-1), Err(BigIntegerError::NegativeShift(-1)));
    assert_eq!(one.checked_shr(-5), Err(BigIntegerError::NegativeShift(-5)));
    assert_eq!(one.shl_big(&BigInteger::from(70)).unwrap(), one.checked_shl(70).unwrap());
    assert_eq!(one.shl_big(&BigInteger::from(-2)), Err(BigIntegerError::NegativeShift(-2)));
    assert_eq!(
        BigInteger::from(1 << 20).shr_big(&BigInteger::from(20)).unwrap(),
        one
    );
}

#[test]
fn test_inc_dec() {
    let mut a = BigInteger::from(-1);
    assert_eq!(a.post_increment(), BigInteger::from(-1));
    assert!(a.is_zero() && !a.is_negative());
    a.increment().increment();
    assert_eq!(a, BigInteger::from(2));
    assert_eq!(a.post_decrement(), BigInteger::from(2));
    a.decrement().decrement();
    assert_eq!(a, BigInteger::from(-1));
}

#[test]
fn test_to_i64() {
    let a: BigInteger = "123456789110".parse().unwrap();
    assert_eq!(a.to_i64(), Ok(123456789110));
    assert_eq!(i64::try_from(BigInteger::from(i64::MIN)), Ok(i64::MIN));
    let too_big: BigInteger = "9223372036854775808".parse().unwrap();
    assert_eq!(i64::try_from(&too_big), Err(BigIntegerError::RangeOverflow));
    assert_eq!((-too_big).to_i64(), Ok(i64::MIN));
}

#[test]
fn test_to_string() {
    let a: BigInteger = "12345678909876523784950683472613487560983287654321".parse().unwrap();
    assert_eq!(a.to_string(), "12345678909876523784950683472613487560983287654321");
    assert_eq!(BigInteger::from(-1_000_000_007).to_string(), "-1000000007");
    assert_eq!(BigInteger::zero().to_string(), "0");
    assert_eq!(format!("{:>6}", BigInteger::from(-42)), "   -42");
    assert_eq!(format!("{:+}", BigInteger::from(42)), "+42");
}

#[test]
fn test_bool_and_digits() {
    let zero = BigInteger::zero();
    assert!(!&zero);
    assert!(!zero.to_bool());
    assert!(BigInteger::from(-3).to_bool());
    assert_eq!(zero.digits(), 1);
    assert_eq!(BigInteger::from(-1_000_000_000).digits(), 10);
    assert_eq!(BigInteger::from(-5).signum(), -1);
    assert_eq!(zero.signum(), 0);
    assert_eq!(-zero.clone(), zero);
}
