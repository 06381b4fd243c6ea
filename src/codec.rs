//! Primitive VBK codec
//!
//! Every composite entity is built from four primitives:
//!
//! - single-BE values: `u8 len · minimal big-endian bytes` (at least one byte)
//! - single-byte-length values: `u8 len · bytes`
//! - var-len values: `singleBE(len) · bytes`, for payloads above 255 bytes
//! - arrays: `singleBE(count) · item*`
//!
//! Readers check every length or count against the field's `[min, max]`
//! range before touching the payload, so a hostile prefix can neither
//! allocate nor read out of bounds.

use tracing::warn;

use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::stream::{ReadStream, WriteStream};

/// Entities with a VBK wire form
pub trait VbkEncode {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()>;

    fn to_vbk_bytes(&self) -> Result<Vec<u8>> {
        let mut w = WriteStream::new();
        self.to_vbk_encoding(&mut w)?;
        Ok(w.into_inner())
    }

    fn encoded_size(&self) -> Result<usize> {
        Ok(self.to_vbk_bytes()?.len())
    }
}

/// Entities decodable from a VBK stream.
///
/// The configuration carries the chain-specific bounds; entities with fixed
/// layouts ignore it.
pub trait VbkDecode: Sized {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self>;
}

/// Decode a value that must span the whole of `bytes`.
pub fn decode_exact<T: VbkDecode>(bytes: &[u8], config: &CodecConfig) -> Result<T> {
    let mut r = ReadStream::new(bytes);
    let value = T::from_vbk_encoding(&mut r, config)?;
    r.finish()?;
    Ok(value)
}

/// CheckRange: ℤ × ℕ × ℕ → {ok, MalformedLength}
///
/// Lengths are compared as unsigned; a negative decoded length is always out
/// of range.
pub fn check_range(what: &'static str, value: i64, min: usize, max: usize) -> Result<()> {
    if value < 0 || (value as u64) < min as u64 || (value as u64) > max as u64 {
        return Err(CodecError::MalformedLength {
            what,
            got: value,
            min: min as u64,
            max: max as u64,
        });
    }
    Ok(())
}

/// TrimmedArray: the `width` low bytes of `value`, big-endian, with leading
/// zero bytes stripped (at least one byte is kept).
pub fn trimmed_be(value: u64, width: usize) -> Vec<u8> {
    let full = value.to_be_bytes();
    let bytes = &full[8 - width..];
    let skip = bytes
        .iter()
        .take(width - 1)
        .take_while(|b| **b == 0)
        .count();
    bytes[skip..].to_vec()
}

fn write_trimmed(w: &mut WriteStream, value: u64, width: usize) {
    let bytes = trimmed_be(value, width);
    w.write_u8(bytes.len() as u8);
    w.write(&bytes);
}

/// Write a 64-bit value in trimmed form.
pub fn write_single_be_value(w: &mut WriteStream, value: i64) {
    write_trimmed(w, value as u64, 8);
}

/// Write a 32-bit value in trimmed form; negative values use all 4 bytes.
pub fn write_single_be_i32(w: &mut WriteStream, value: i32) {
    write_trimmed(w, value as u32 as u64, 4);
}

/// Write a 32-bit value untrimmed: `0x04 · 4 bytes`.
pub fn write_single_fixed_be_i32(w: &mut WriteStream, value: i32) {
    w.write_u8(4);
    w.write_be_i32(value);
}

fn read_single_be(r: &mut ReadStream<'_>, what: &'static str, width: usize) -> Result<i64> {
    let len = r.read_u8()? as usize;
    check_range(what, len as i64, 0, width)?;
    let bytes = r.read(len)?;
    let mut buf = [0u8; 8];
    buf[8 - len..].copy_from_slice(bytes);
    let raw = u64::from_be_bytes(buf);
    // sign-extend from the target width
    let shift = 64 - 8 * width as u32;
    Ok(((raw << shift) as i64) >> shift)
}

/// Read a trimmed value into a 64-bit signed integer.
pub fn read_single_be_value(r: &mut ReadStream<'_>, what: &'static str) -> Result<i64> {
    read_single_be(r, what, 8)
}

/// Read a trimmed value into a 32-bit signed integer.
pub fn read_single_be_i32(r: &mut ReadStream<'_>, what: &'static str) -> Result<i32> {
    Ok(read_single_be(r, what, 4)? as i32)
}

/// Writer-side counterpart of `check_range`: refuse to emit a field the
/// decoder would reject.
pub fn check_encode_limit(what: &'static str, len: usize, max: usize) -> Result<()> {
    if len > max {
        warn!(field = what, len, max, "refusing to encode oversized field");
        return Err(CodecError::EncodeConstraint(format!(
            "{what}: {len} exceeds maximum {max}"
        )));
    }
    Ok(())
}

pub fn write_single_byte_len_value(w: &mut WriteStream, bytes: &[u8]) -> Result<()> {
    check_encode_limit("single-byte-length value", bytes.len(), u8::MAX as usize)?;
    w.write_u8(bytes.len() as u8);
    w.write(bytes);
    Ok(())
}

pub fn read_single_byte_len_value<'a>(
    r: &mut ReadStream<'a>,
    what: &'static str,
    min: usize,
    max: usize,
) -> Result<&'a [u8]> {
    let len = r.read_u8()?;
    check_range(what, len as i64, min, max)?;
    r.read(len as usize)
}

/// Read a single-byte-length value whose length must be exactly `N`.
pub fn read_single_byte_len_array<const N: usize>(
    r: &mut ReadStream<'_>,
    what: &'static str,
) -> Result<[u8; N]> {
    let bytes = read_single_byte_len_value(r, what, N, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok(out)
}

pub fn write_var_len_value(w: &mut WriteStream, bytes: &[u8]) -> Result<()> {
    let len = i32::try_from(bytes.len()).map_err(|_| {
        CodecError::EncodeConstraint(format!(
            "var-len value of {} bytes exceeds i32 range",
            bytes.len()
        ))
    })?;
    write_single_be_i32(w, len);
    w.write(bytes);
    Ok(())
}

pub fn read_var_len_value<'a>(
    r: &mut ReadStream<'a>,
    what: &'static str,
    min: usize,
    max: usize,
) -> Result<&'a [u8]> {
    let len = read_single_be_i32(r, what)?;
    check_range(what, len as i64, min, max)?;
    r.read(len as usize)
}

/// WriteArrayOf: `singleBE(count) · f(item)*`
pub fn write_array_of<T, F>(w: &mut WriteStream, items: &[T], mut f: F) -> Result<()>
where
    F: FnMut(&mut WriteStream, &T) -> Result<()>,
{
    write_single_be_value(w, items.len() as i64);
    for item in items {
        f(w, item)?;
    }
    Ok(())
}

/// ReadArrayOf: the count is checked against `[min, max]` before anything is
/// allocated, and the first failing item aborts the whole read.
pub fn read_array_of<'a, T, F>(
    r: &mut ReadStream<'a>,
    what: &'static str,
    min: usize,
    max: usize,
    mut f: F,
) -> Result<Vec<T>>
where
    F: FnMut(&mut ReadStream<'a>) -> Result<T>,
{
    let count = read_single_be_i32(r, what)?;
    check_range(what, count as i64, min, max)?;
    // every item takes at least one byte
    let mut items = Vec::with_capacity((count as usize).min(r.remaining()));
    for _ in 0..count {
        items.push(f(r)?);
    }
    Ok(items)
}

/// Network byte pair: an optional network id followed by a transaction type.
///
/// On the wire the network byte is omitted entirely when absent, so the
/// reader has to compare the first byte against the expected type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct NetworkBytePair {
    pub network_byte: Option<u8>,
    pub type_id: u8,
}

impl NetworkBytePair {
    pub fn new(network_byte: Option<u8>, type_id: u8) -> Self {
        Self {
            network_byte,
            type_id,
        }
    }

    /// A network byte equal to the type tag could not be told apart from an
    /// absent one, so it is refused.
    pub fn write(&self, w: &mut WriteStream) -> Result<()> {
        if let Some(network) = self.network_byte {
            if network == self.type_id {
                return Err(CodecError::EncodeConstraint(format!(
                    "network byte {network:#04x} collides with type tag"
                )));
            }
            w.write_u8(network);
        }
        w.write_u8(self.type_id);
        Ok(())
    }

    pub fn read(r: &mut ReadStream<'_>, expected_type: u8) -> Result<Self> {
        let first = r.read_u8()?;
        if first == expected_type {
            return Ok(Self::new(None, first));
        }
        let type_id = r.read_u8()?;
        if type_id != expected_type {
            return Err(CodecError::UnknownDiscriminator(format!(
                "network byte pair ({first:#04x}, {type_id:#04x}) does not carry type {expected_type:#04x}"
            )));
        }
        Ok(Self::new(Some(first), type_id))
    }
}
