//! PoP payloads: ATV, VTB and the PopData bundle
//!
//! Every payload starts with a big-endian u32 version, and this format
//! generation only knows version 1.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::block::VbkBlock;
use crate::codec::{check_encode_limit, read_array_of, write_array_of, VbkDecode, VbkEncode};
use crate::config::CodecConfig;
use crate::constants::*;
use crate::error::{CodecError, Result};
use crate::hashing::{sha256, sha256_pair, sha256d, sha256d_pair, Hash, VbkBlockHasher};
use crate::merkle::VbkMerklePath;
use crate::stream::{ReadStream, WriteStream};
use crate::transaction::{VbkPopTx, VbkTx};

fn write_version(w: &mut WriteStream, entity: &'static str, version: u32) -> Result<()> {
    if version != SUPPORTED_PAYLOAD_VERSION {
        warn!(entity, version, "refusing to encode unsupported version");
        return Err(CodecError::EncodeConstraint(format!(
            "{entity}: cannot encode version {version}"
        )));
    }
    w.write_be_u32(version);
    Ok(())
}

fn read_version(r: &mut ReadStream<'_>, entity: &'static str) -> Result<u32> {
    let version = r.read_be_u32()?;
    if version != SUPPORTED_PAYLOAD_VERSION {
        return Err(CodecError::UnsupportedVersion { entity, version });
    }
    Ok(version)
}

fn log_decode_failure<T>(entity: &'static str, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        debug!(entity, error = %e, "decode failed");
    }
    result
}

/// Altchain-to-VeriBlock publication
///
/// Proves that `transaction`, carrying an altchain header, was mined in
/// the VeriBlock block `block_of_proof`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Atv {
    pub version: u32,
    pub transaction: VbkTx,
    pub merkle_path: VbkMerklePath,
    pub block_of_proof: VbkBlock,
}

impl Atv {
    /// Id(atv) = SHA256(encoding(atv))
    pub fn id(&self) -> Result<Hash> {
        Ok(sha256(&self.to_vbk_bytes()?))
    }

    /// The merkle path proves the transaction against the block of proof.
    pub fn is_merkle_path_valid(&self) -> Result<bool> {
        Ok(self.merkle_path.subject == self.transaction.hash()?
            && self.merkle_path.calculate_merkle_root() == self.block_of_proof.merkle_root)
    }

    fn read(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        let version = read_version(r, "ATV")?;
        Ok(Self {
            version,
            transaction: VbkTx::from_vbk_encoding(r, config)?,
            merkle_path: VbkMerklePath::from_vbk_encoding(r, config)?,
            block_of_proof: VbkBlock::from_vbk_encoding(r, config)?,
        })
    }
}

impl VbkEncode for Atv {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        write_version(w, "ATV", self.version)?;
        self.transaction.to_vbk_encoding(w)?;
        self.merkle_path.to_vbk_encoding(w)?;
        self.block_of_proof.to_vbk_encoding(w)
    }
}

impl VbkDecode for Atv {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        log_decode_failure("ATV", Self::read(r, config))
    }
}

/// VeriBlock-to-Bitcoin publication
///
/// Proves that a VeriBlock block was published into Bitcoin, and that the
/// publishing transaction was itself mined in `containing_block`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vtb {
    pub version: u32,
    pub transaction: VbkPopTx,
    pub merkle_path: VbkMerklePath,
    pub containing_block: VbkBlock,
}

impl Vtb {
    /// Id(vtb) = SHA256(txid ‖ SHA256(proofHash ‖ containingHash))
    ///
    /// The 24-byte containing hash is zero-padded on the right to 32 bytes.
    pub fn id(&self, hasher: &dyn VbkBlockHasher) -> Result<Hash> {
        let tx_hash = self.transaction.bitcoin_transaction.hash();
        let proof_hash = self.transaction.block_of_proof.hash();
        let mut containing = [0u8; 32];
        containing[..VBK_BLOCK_HASH_SIZE].copy_from_slice(&self.containing_block.hash(hasher)?);
        let inner = sha256_pair(&proof_hash, &containing);
        Ok(sha256_pair(&tx_hash, &inner))
    }

    /// The merkle path proves the pop transaction against the containing block.
    pub fn is_merkle_path_valid(&self) -> Result<bool> {
        Ok(self.merkle_path.subject == self.transaction.hash()?
            && self.merkle_path.calculate_merkle_root() == self.containing_block.merkle_root)
    }

    fn read(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        let version = read_version(r, "VTB")?;
        Ok(Self {
            version,
            transaction: VbkPopTx::from_vbk_encoding(r, config)?,
            merkle_path: VbkMerklePath::from_vbk_encoding(r, config)?,
            containing_block: VbkBlock::from_vbk_encoding(r, config)?,
        })
    }
}

impl VbkEncode for Vtb {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        write_version(w, "VTB", self.version)?;
        self.transaction.to_vbk_encoding(w)?;
        self.merkle_path.to_vbk_encoding(w)?;
        self.containing_block.to_vbk_encoding(w)
    }
}

impl VbkDecode for Vtb {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        log_decode_failure("VTB", Self::read(r, config))
    }
}

/// PayloadsRoot: (𝔹ᴺ)* → 𝔹ᴺ
///
/// Bitcoin-style tree over payload ids: pairs hashed with double SHA-256
/// and truncated to the id width, an odd tail paired with itself, the final
/// root byte-reversed. An empty list yields zeros.
pub fn payloads_merkle_root<const N: usize>(ids: &[[u8; N]]) -> [u8; N] {
    let mut layer: Vec<[u8; N]> = ids.to_vec();
    if layer.is_empty() {
        return [0u8; N];
    }
    while layer.len() > 1 {
        if layer.len() % 2 != 0 {
            if let Some(&last) = layer.last() {
                layer.push(last);
            }
        }
        layer = layer
            .chunks_exact(2)
            .map(|pair| {
                let full = sha256d_pair(&pair[0], &pair[1]);
                let mut out = [0u8; N];
                out.copy_from_slice(&full[32 - N..]);
                out
            })
            .collect();
    }
    let mut root = layer[0];
    root.reverse();
    root
}

/// Bundle of payloads submitted with an altchain block.
///
/// Sections are ordered: context VeriBlock blocks, then VTBs, then ATVs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PopData {
    pub version: u32,
    pub context: Vec<VbkBlock>,
    pub vtbs: Vec<Vtb>,
    pub atvs: Vec<Atv>,
}

impl PopData {
    pub fn new() -> Self {
        Self {
            version: SUPPORTED_PAYLOAD_VERSION,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.context.is_empty() && self.vtbs.is_empty() && self.atvs.is_empty()
    }

    /// True when a section repeats a payload id.
    pub fn has_duplicate_payloads(&self, hasher: &dyn VbkBlockHasher) -> Result<bool> {
        let mut vbk_ids = HashSet::new();
        for block in &self.context {
            if !vbk_ids.insert(block.id(hasher)?) {
                debug!("duplicate vbk block in pop data");
                return Ok(true);
            }
        }
        let mut vtb_ids = HashSet::new();
        for vtb in &self.vtbs {
            if !vtb_ids.insert(vtb.id(hasher)?) {
                debug!("duplicate vtb in pop data");
                return Ok(true);
            }
        }
        let mut atv_ids = HashSet::new();
        for atv in &self.atvs {
            if !atv_ids.insert(atv.id()?) {
                debug!("duplicate atv in pop data");
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Commitment to every payload id in the bundle:
    ///
    /// ```text
    /// left  = SHA256d(vbkRoot ‖ vtbRoot)
    /// right = SHA256d(atvRoot ‖ SHA256d(u32BE version))
    /// root  = SHA256d(left ‖ right)
    /// ```
    pub fn merkle_root(&self, hasher: &dyn VbkBlockHasher) -> Result<Hash> {
        let vbk_ids = self
            .context
            .iter()
            .map(|b| b.id(hasher))
            .collect::<Result<Vec<_>>>()?;
        let vtb_ids = self
            .vtbs
            .iter()
            .map(|v| v.id(hasher))
            .collect::<Result<Vec<_>>>()?;
        let atv_ids = self.atvs.iter().map(Atv::id).collect::<Result<Vec<_>>>()?;

        let version_hash = sha256d(&self.version.to_be_bytes());
        let left = sha256d_pair(&payloads_merkle_root(&vbk_ids), &payloads_merkle_root(&vtb_ids));
        let right = sha256d_pair(&payloads_merkle_root(&atv_ids), &version_hash);
        Ok(sha256d_pair(&left, &right))
    }

    fn read(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        let version = read_version(r, "PopData")?;
        let context = read_array_of(r, "popdata-context", 0, config.max_context_vbk_blocks, |r| {
            VbkBlock::from_vbk_encoding(r, config)
        })?;
        let vtbs = read_array_of(r, "popdata-vtbs", 0, config.max_vtbs, |r| {
            Vtb::from_vbk_encoding(r, config)
        })?;
        let atvs = read_array_of(r, "popdata-atvs", 0, config.max_atvs, |r| {
            Atv::from_vbk_encoding(r, config)
        })?;
        trace!(
            context = context.len(),
            vtbs = vtbs.len(),
            atvs = atvs.len(),
            "decoded pop data"
        );
        Ok(Self {
            version,
            context,
            vtbs,
            atvs,
        })
    }
}

impl VbkEncode for PopData {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        write_version(w, "PopData", self.version)?;
        check_encode_limit("popdata-context", self.context.len(), MAX_POPDATA_VBK)?;
        check_encode_limit("popdata-vtbs", self.vtbs.len(), MAX_POPDATA_VTB)?;
        check_encode_limit("popdata-atvs", self.atvs.len(), MAX_POPDATA_ATV)?;
        write_array_of(w, &self.context, |w, b| b.to_vbk_encoding(w))?;
        write_array_of(w, &self.vtbs, |w, v| v.to_vbk_encoding(w))?;
        write_array_of(w, &self.atvs, |w, a| a.to_vbk_encoding(w))
    }
}

impl VbkDecode for PopData {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        log_decode_failure("PopData", Self::read(r, config))
    }
}
