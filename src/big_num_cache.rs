use lazy_static::*;

use crate::BigInteger;
use crate::big_num_constants::*;

lazy_static! {
    pub static ref POS_CACHE: Vec<BigInteger> = (0..=MAX_CONSTANT as u64)
        .map(|n| BigInteger::from_limbs(true, vec![n]))
        .collect();
    pub static ref NEG_CACHE: Vec<BigInteger> = (0..=MAX_CONSTANT as u64)
        .map(|n| BigInteger::from_limbs(false, vec![n]))
        .collect();
}

/// 缓存中的小常量, `n` 必须不大于 `MAX_CONSTANT`
#[inline]
pub(crate) fn small(n: usize) -> &'static BigInteger {
    &POS_CACHE[n]
}

#[test]
fn test_cache_is_canonical() {
    assert_eq!(POS_CACHE.len(), MAX_CONSTANT + 1);
    assert_eq!(NEG_CACHE[0], POS_CACHE[0]);
    assert!(NEG_CACHE[0].is_zero() && !NEG_CACHE[0].is_negative());
    for n in 1..=MAX_CONSTANT {
        assert_eq!(POS_CACHE[n].to_string(), n.to_string());
        assert_eq!(NEG_CACHE[n].to_string(), format!("-{}", n));
    }
}
