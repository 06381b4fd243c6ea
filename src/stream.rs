//! Byte cursors used by every codec in the crate
//!
//! `ReadStream` borrows its input and never allocates; every read checks the
//! remaining length first and fails with `TruncatedInput` instead of panicking.
//! `WriteStream` owns a growable buffer.

use crate::error::{CodecError, Result};

/// Borrowing read cursor over an encoded buffer
#[derive(Debug, Clone)]
pub struct ReadStream<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ReadStream<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Take the next `n` bytes.
    pub fn read(&mut self, n: usize) -> Result<&'a [u8]> {
        let have = self.remaining();
        if n > have {
            return Err(CodecError::TruncatedInput { need: n, have });
        }
        let out = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_be_i16(&mut self) -> Result<i16> {
        Ok(i16::from_be_bytes(self.read_array()?))
    }

    pub fn read_be_u32(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    pub fn read_be_i32(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    pub fn read_be_u64(&mut self) -> Result<u64> {
        Ok(u64::from_be_bytes(self.read_array()?))
    }

    pub fn read_le_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// Fail unless the whole buffer was consumed.
    pub fn finish(&self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CodecError::InvalidEncoding(format!(
                "{} trailing bytes after entity",
                self.remaining()
            )))
        }
    }
}

/// Owning write buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteStream {
    data: Vec<u8>,
}

impl WriteStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn write(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    pub fn write_u8(&mut self, value: u8) {
        self.data.push(value);
    }

    pub fn write_be_i16(&mut self, value: i16) {
        self.write(&value.to_be_bytes());
    }

    pub fn write_be_u32(&mut self, value: u32) {
        self.write(&value.to_be_bytes());
    }

    pub fn write_be_i32(&mut self, value: i32) {
        self.write(&value.to_be_bytes());
    }

    pub fn write_be_u64(&mut self, value: u64) {
        self.write(&value.to_be_bytes());
    }

    pub fn write_le_u32(&mut self, value: u32) {
        self.write(&value.to_le_bytes());
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}
