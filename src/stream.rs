//! Formatted input: whitespace-delimited decimal tokens read from a [`BufRead`].
//!
//! Output needs no helper, [`BigInteger`] implements [`Display`](std::fmt::Display).

use std::io::{self, BufRead};

use crate::BigInteger;
use crate::error::ReadError;

/// Reads the next whitespace-delimited token and parses it.
///
/// Returns `Ok(None)` at end of input. The single whitespace byte that ends the
/// token is consumed.
pub fn read_big_integer<R: BufRead>(reader: &mut R) -> Result<Option<BigInteger>, ReadError> {
    match next_token(reader)? {
        Some(token) => Ok(Some(token.parse::<BigInteger>()?)),
        None => Ok(None),
    }
}

fn next_token<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut token = Vec::new();
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let mut used = 0;
        let mut done = false;
        for &byte in buf {
            used += 1;
            if !byte.is_ascii_whitespace() {
                token.push(byte);
            } else if !token.is_empty() {
                done = true;
                break;
            }
        }
        reader.consume(used);
        if done {
            break;
        }
    }
    if token.is_empty() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&token).into_owned()))
}

/// Iterator over every token of a reader.
pub struct BigIntegerTokens<R> {
    reader: R,
}

impl<R: BufRead> BigIntegerTokens<R> {
    pub fn new(reader: R) -> Self {
        BigIntegerTokens { reader }
    }
}

impl<R: BufRead> Iterator for BigIntegerTokens<R> {
    type Item = Result<BigInteger, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        read_big_integer(&mut self.reader).transpose()
    }
}

#[test]
fn test_read_tokens() {
    let input = "  12 -3400000000000000000000\n\t0007\n";
    let mut reader = input.as_bytes();
    assert_eq!(read_big_integer(&mut reader).unwrap(), Some(BigInteger::from(12)));
    assert_eq!(
        read_big_integer(&mut reader).unwrap().map(|v| v.to_string()),
        Some("-3400000000000000000000".to_string())
    );
    assert_eq!(read_big_integer(&mut reader).unwrap(), Some(BigInteger::from(7)));
    assert!(read_big_integer(&mut reader).unwrap().is_none());
}

#[test]
fn test_read_token_spanning_buffers() {
    let input = "123456789012345678901234567890 42";
    let reader = io::BufReader::with_capacity(4, input.as_bytes());
    let values: Vec<BigInteger> = BigIntegerTokens::new(reader)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values[0].to_string(), "123456789012345678901234567890");
    assert_eq!(values[1], BigInteger::from(42));
}

#[test]
fn test_read_malformed_token() {
    let mut reader = "12x 5".as_bytes();
    match read_big_integer(&mut reader) {
        Err(ReadError::Parse(e)) => assert_eq!(
            e,
            crate::ParseBigIntegerError::InvalidDigit { index: 2, found: 'x' }
        ),
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(read_big_integer(&mut reader).unwrap(), Some(BigInteger::from(5)));
}
