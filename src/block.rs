//! Block headers of the three chains
//!
//! Each header has a raw form (the chain's native header bytes) and a VBK
//! form. BtcBlock and VbkBlock wrap their raw form in a single-byte length
//! that must equal the fixed header size; AltBlock's VBK form is its raw
//! form, since its hash fields already carry their own lengths.

use serde::{Deserialize, Serialize};

use crate::codec::{
    read_single_byte_len_value, write_single_byte_len_value, VbkDecode, VbkEncode,
};
use crate::config::CodecConfig;
use crate::constants::*;
use crate::error::{CodecError, Result};
use crate::hashing::{reversed, sha256d, Hash, VbkBlockHasher};
use crate::stream::{ReadStream, WriteStream};

/// Largest nonce representable in 5 bytes
pub const VBK_MAX_NONCE: u64 = (1 << 40) - 1;

/// Altchain block header
///
/// Hash widths are chain-configurable and bounded by `CodecConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AltBlock {
    pub hash: Vec<u8>,
    pub previous_block: Vec<u8>,
    pub height: i32,
    pub timestamp: u32,
}

impl AltBlock {
    /// `singleByteLen(hash) · singleByteLen(prev) · i32BE height · u32BE timestamp`
    pub fn write_raw(&self, w: &mut WriteStream) -> Result<()> {
        write_single_byte_len_value(w, &self.hash)?;
        write_single_byte_len_value(w, &self.previous_block)?;
        w.write_be_i32(self.height);
        w.write_be_u32(self.timestamp);
        Ok(())
    }

    pub fn read_raw(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        let (min, max) = (config.alt_hash_min, config.alt_hash_max);
        let hash = read_single_byte_len_value(r, "alt-block-hash", min, max)?.to_vec();
        let previous_block =
            read_single_byte_len_value(r, "alt-block-previous", min, max)?.to_vec();
        let height = r.read_be_i32()?;
        let timestamp = r.read_be_u32()?;
        Ok(Self {
            hash,
            previous_block,
            height,
            timestamp,
        })
    }

    /// Altchain hashes are computed by the altchain and stored as given.
    pub fn hash(&self) -> &[u8] {
        &self.hash
    }
}

impl VbkEncode for AltBlock {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        self.write_raw(w)
    }
}

impl VbkDecode for AltBlock {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        Self::read_raw(r, config)
    }
}

/// Bitcoin block header: ℋ = ℕ × ℍ × ℍ × ℕ × ℕ × ℕ
///
/// `previous_block` and `merkle_root` are kept byte-reversed relative to the
/// wire, so they compare directly against `hash()` of the parent and against
/// a merkle path root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BtcBlock {
    pub version: u32,
    pub previous_block: Hash,
    pub merkle_root: Hash,
    pub timestamp: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl BtcBlock {
    /// The 80-byte native header, little-endian.
    pub fn to_raw(&self) -> Vec<u8> {
        let mut w = WriteStream::with_capacity(BTC_HEADER_SIZE);
        self.write_raw(&mut w);
        w.into_inner()
    }

    pub fn write_raw(&self, w: &mut WriteStream) {
        w.write_le_u32(self.version);
        w.write(&reversed(self.previous_block));
        w.write(&reversed(self.merkle_root));
        w.write_le_u32(self.timestamp);
        w.write_le_u32(self.bits);
        w.write_le_u32(self.nonce);
    }

    pub fn read_raw(r: &mut ReadStream<'_>) -> Result<Self> {
        let version = r.read_le_u32()?;
        let previous_block = reversed(r.read_array()?);
        let merkle_root = reversed(r.read_array()?);
        let timestamp = r.read_le_u32()?;
        let bits = r.read_le_u32()?;
        let nonce = r.read_le_u32()?;
        Ok(Self {
            version,
            previous_block,
            merkle_root,
            timestamp,
            bits,
            nonce,
        })
    }

    /// Hash(h) = reverse(SHA256(SHA256(raw(h))))
    pub fn hash(&self) -> Hash {
        reversed(sha256d(&self.to_raw()))
    }
}

impl VbkEncode for BtcBlock {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        write_single_byte_len_value(w, &self.to_raw())
    }
}

impl VbkDecode for BtcBlock {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, _config: &CodecConfig) -> Result<Self> {
        let raw = read_single_byte_len_value(r, "btc-header", BTC_HEADER_SIZE, BTC_HEADER_SIZE)?;
        Self::read_raw(&mut ReadStream::new(raw))
    }
}

/// VeriBlock block header
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VbkBlock {
    pub height: i32,
    pub version: i16,
    pub previous_block: [u8; VBK_PREVIOUS_BLOCK_HASH_SIZE],
    pub previous_keystone: [u8; VBK_PREVIOUS_KEYSTONE_HASH_SIZE],
    pub second_previous_keystone: [u8; VBK_PREVIOUS_KEYSTONE_HASH_SIZE],
    pub merkle_root: [u8; VBK_MERKLE_ROOT_HASH_SIZE],
    pub timestamp: i32,
    pub difficulty: i32,
    /// 40-bit nonce
    pub nonce: u64,
}

impl VbkBlock {
    /// The 65-byte native header, big-endian.
    pub fn to_raw(&self) -> Result<Vec<u8>> {
        let mut w = WriteStream::with_capacity(VBK_HEADER_SIZE_PROGPOW);
        self.write_raw(&mut w)?;
        Ok(w.into_inner())
    }

    pub fn write_raw(&self, w: &mut WriteStream) -> Result<()> {
        if self.nonce > VBK_MAX_NONCE {
            return Err(CodecError::EncodeConstraint(format!(
                "vbk nonce {:#x} does not fit in 40 bits",
                self.nonce
            )));
        }
        w.write_be_i32(self.height);
        w.write_be_i16(self.version);
        w.write(&self.previous_block);
        w.write(&self.previous_keystone);
        w.write(&self.second_previous_keystone);
        w.write(&self.merkle_root);
        w.write_be_i32(self.timestamp);
        w.write_be_i32(self.difficulty);
        w.write(&self.nonce.to_be_bytes()[3..]);
        Ok(())
    }

    pub fn read_raw(r: &mut ReadStream<'_>) -> Result<Self> {
        let height = r.read_be_i32()?;
        let version = r.read_be_i16()?;
        let previous_block = r.read_array()?;
        let previous_keystone = r.read_array()?;
        let second_previous_keystone = r.read_array()?;
        let merkle_root = r.read_array()?;
        let timestamp = r.read_be_i32()?;
        let difficulty = r.read_be_i32()?;
        let mut nonce = [0u8; 8];
        nonce[3..].copy_from_slice(r.read(5)?);
        Ok(Self {
            height,
            version,
            previous_block,
            previous_keystone,
            second_previous_keystone,
            merkle_root,
            timestamp,
            difficulty,
            nonce: u64::from_be_bytes(nonce),
        })
    }

    pub fn hash(&self, hasher: &dyn VbkBlockHasher) -> Result<[u8; VBK_BLOCK_HASH_SIZE]> {
        Ok(hasher.hash_header(&self.to_raw()?))
    }

    /// Id: the last 12 bytes of the header hash
    pub fn id(&self, hasher: &dyn VbkBlockHasher) -> Result<[u8; VBK_ID_SIZE]> {
        let hash = self.hash(hasher)?;
        let mut id = [0u8; VBK_ID_SIZE];
        id.copy_from_slice(&hash[VBK_BLOCK_HASH_SIZE - VBK_ID_SIZE..]);
        Ok(id)
    }
}

impl VbkEncode for VbkBlock {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        write_single_byte_len_value(w, &self.to_raw()?)
    }
}

impl VbkDecode for VbkBlock {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, _config: &CodecConfig) -> Result<Self> {
        let raw = read_single_byte_len_value(
            r,
            "vbk-header",
            VBK_HEADER_SIZE_PROGPOW,
            VBK_HEADER_SIZE_PROGPOW,
        )?;
        Self::read_raw(&mut ReadStream::new(raw))
    }
}
