//! Merkle paths
//!
//! A path authenticates a subject hash against a merkle root through the
//! sibling hashes of each layer; the leaf index decides on which side the
//! sibling sits.

use serde::{Deserialize, Serialize};

use crate::codec::{
    check_range, read_array_of, read_single_be_i32, read_single_byte_len_array,
    read_var_len_value, write_single_byte_len_value, write_single_fixed_be_i32,
    write_var_len_value, VbkDecode, VbkEncode,
};
use crate::config::CodecConfig;
use crate::constants::*;
use crate::error::{CodecError, Result};
use crate::hashing::{sha256_pair, sha256d_pair, Hash};
use crate::stream::{ReadStream, WriteStream};

fn check_layer_count(layers: usize) -> Result<()> {
    if layers > MAX_LAYER_COUNT_MERKLE {
        return Err(CodecError::EncodeConstraint(format!(
            "merkle path has {layers} layers, at most {MAX_LAYER_COUNT_MERKLE} allowed"
        )));
    }
    Ok(())
}

/// Bitcoin merkle path
///
/// The subject is not part of the encoding; a decoder is handed it by the
/// enclosing transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MerklePath {
    pub index: i32,
    pub subject: Hash,
    pub layers: Vec<Hash>,
}

impl MerklePath {
    /// `fixedBE(index) · fixedBE(layers) · fixedBE(4) · u32BE(32) · layer*`
    ///
    /// The size-of-size and size-of-data fields are constants of the format
    /// and are validated on decode.
    pub fn write_raw(&self, w: &mut WriteStream) -> Result<()> {
        check_layer_count(self.layers.len())?;
        write_single_fixed_be_i32(w, self.index);
        write_single_fixed_be_i32(w, self.layers.len() as i32);
        write_single_fixed_be_i32(w, MERKLE_SIZE_OF_SIZE as i32);
        w.write_be_u32(SHA256_HASH_SIZE as u32);
        for layer in &self.layers {
            write_single_byte_len_value(w, layer)?;
        }
        Ok(())
    }

    pub fn read_raw(r: &mut ReadStream<'_>, subject: Hash) -> Result<Self> {
        let index = read_single_be_i32(r, "merkle-index")?;
        let num_layers = read_single_be_i32(r, "merkle-num-layers")?;
        check_range("merkle-num-layers", num_layers as i64, 0, MAX_LAYER_COUNT_MERKLE)?;

        let size_of_size = read_single_be_i32(r, "merkle-size-of-size")?;
        check_range(
            "merkle-size-of-size",
            size_of_size as i64,
            MERKLE_SIZE_OF_SIZE as usize,
            MERKLE_SIZE_OF_SIZE as usize,
        )?;
        let size_of_data = r.read_be_u32()?;
        check_range(
            "merkle-size-of-data",
            size_of_data as i64,
            SHA256_HASH_SIZE,
            SHA256_HASH_SIZE,
        )?;

        let mut layers = Vec::with_capacity(num_layers as usize);
        for _ in 0..num_layers {
            layers.push(read_single_byte_len_array::<32>(r, "merkle-layer")?);
        }
        Ok(Self {
            index,
            subject,
            layers,
        })
    }

    pub fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        let mut raw = WriteStream::new();
        self.write_raw(&mut raw)?;
        write_var_len_value(w, raw.data())
    }

    pub fn from_vbk_encoding(r: &mut ReadStream<'_>, subject: Hash) -> Result<Self> {
        let raw = read_var_len_value(r, "merkle-path", 0, MAX_POPDATA_SIZE)?;
        let mut inner = ReadStream::new(raw);
        let path = Self::read_raw(&mut inner, subject)?;
        inner.finish()?;
        Ok(path)
    }

    /// Fold the subject up the tree with double SHA-256.
    pub fn calculate_merkle_root(&self) -> Hash {
        let mut cursor = self.subject;
        let mut layer_index = self.index as u32;
        for layer in &self.layers {
            cursor = if layer_index & 1 != 0 {
                sha256d_pair(layer, &cursor)
            } else {
                sha256d_pair(&cursor, layer)
            };
            layer_index >>= 1;
        }
        cursor
    }
}

/// VeriBlock merkle path
///
/// VeriBlock blocks commit to two trees (regular and PoP transactions)
/// joined under a metapackage hash; `tree_index` selects the tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VbkMerklePath {
    pub tree_index: i32,
    pub index: i32,
    pub subject: Hash,
    pub layers: Vec<Hash>,
}

impl VbkMerklePath {
    /// Fold with single SHA-256. The second-to-last layer sits on the side
    /// given by `tree_index`; the last layer (metapackage hash) is always on
    /// the left. The root is truncated to the VeriBlock merkle root width.
    pub fn calculate_merkle_root(&self) -> [u8; VBK_MERKLE_ROOT_HASH_SIZE] {
        let mut cursor = self.subject;
        let mut layer_index = self.index as u32;
        let size = self.layers.len();
        for (i, layer) in self.layers.iter().enumerate() {
            if i + 1 == size {
                layer_index = 1;
            } else if i + 2 == size {
                layer_index = self.tree_index as u32;
            }
            cursor = if layer_index & 1 != 0 {
                sha256_pair(layer, &cursor)
            } else {
                sha256_pair(&cursor, layer)
            };
            layer_index >>= 1;
        }
        let mut root = [0u8; VBK_MERKLE_ROOT_HASH_SIZE];
        root.copy_from_slice(&cursor[..VBK_MERKLE_ROOT_HASH_SIZE]);
        root
    }
}

impl VbkEncode for VbkMerklePath {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        check_layer_count(self.layers.len())?;
        write_single_fixed_be_i32(w, self.tree_index);
        write_single_fixed_be_i32(w, self.index);
        write_single_byte_len_value(w, &self.subject)?;
        write_single_fixed_be_i32(w, self.layers.len() as i32);
        for layer in &self.layers {
            write_single_byte_len_value(w, layer)?;
        }
        Ok(())
    }
}

impl VbkDecode for VbkMerklePath {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, _config: &CodecConfig) -> Result<Self> {
        let tree_index = read_single_be_i32(r, "vbk-merkle-tree-index")?;
        let index = read_single_be_i32(r, "vbk-merkle-index")?;
        let subject = read_single_byte_len_array::<32>(r, "vbk-merkle-subject")?;
        let layers = read_array_of(r, "vbk-merkle-layers", 0, MAX_LAYER_COUNT_MERKLE, |r| {
            read_single_byte_len_array::<32>(r, "vbk-merkle-layer")
        })?;
        Ok(Self {
            tree_index,
            index,
            subject,
            layers,
        })
    }
}
