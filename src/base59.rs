//! Base59 codec
//!
//! The base58 alphabet with `'0'` appended as digit 58. Multisig addresses
//! use it so that their final character can be `'0'`, which base58 never
//! produces. Leading zero bytes map to leading `'1'` characters exactly as
//! in base58.

use crate::error::{CodecError, Result};

pub const BASE59_ALPHABET: &[u8; 59] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz0";

fn digit_of(c: u8) -> Option<u8> {
    BASE59_ALPHABET
        .iter()
        .position(|&a| a == c)
        .map(|p| p as u8)
}

pub fn encode(input: &[u8]) -> String {
    let zeros = input.iter().take_while(|&&b| b == 0).count();

    // little-endian base-59 digits of the big-endian input
    let mut digits: Vec<u8> = Vec::with_capacity(input.len() * 2);
    for &byte in &input[zeros..] {
        let mut carry = byte as u32;
        for d in digits.iter_mut() {
            carry += (*d as u32) << 8;
            *d = (carry % 59) as u8;
            carry /= 59;
        }
        while carry > 0 {
            digits.push((carry % 59) as u8);
            carry /= 59;
        }
    }

    let mut out = String::with_capacity(zeros + digits.len());
    out.extend(std::iter::repeat(BASE59_ALPHABET[0] as char).take(zeros));
    out.extend(digits.iter().rev().map(|&d| BASE59_ALPHABET[d as usize] as char));
    out
}

pub fn decode(input: &str) -> Result<Vec<u8>> {
    let bytes = input.as_bytes();
    let zeros = bytes
        .iter()
        .take_while(|&&c| c == BASE59_ALPHABET[0])
        .count();

    // little-endian base-256 bytes
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    for &c in &bytes[zeros..] {
        let digit = digit_of(c).ok_or_else(|| {
            CodecError::InvalidEncoding(format!("invalid base59 character {:?}", c as char))
        })?;
        let mut carry = digit as u32;
        for b in out.iter_mut() {
            carry += *b as u32 * 59;
            *b = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            out.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut result = vec![0u8; zeros];
    result.extend(out.iter().rev());
    Ok(result)
}

/// True when every character belongs to the base59 alphabet.
pub fn is_base59(input: &str) -> bool {
    input.bytes().all(|c| digit_of(c).is_some())
}
