//! Endorsements and the per-block PopState
//!
//! An endorsement links three blocks: the endorsed block, the block that
//! contains the endorsing payload, and the block of proof on the securing
//! chain. Alt endorsements come from ATVs (altchain secured by VeriBlock),
//! Vbk endorsements from VTBs (VeriBlock secured by Bitcoin).
//!
//! `payout_info` is filled when an endorsement is built from its payload
//! and is not part of the stored form.

use serde::{Deserialize, Serialize};

use crate::codec::{
    check_encode_limit, read_array_of, read_single_byte_len_array, read_single_byte_len_value, write_array_of,
    write_single_byte_len_value, VbkDecode, VbkEncode,
};
use crate::config::CodecConfig;
use crate::constants::*;
use crate::error::Result;
use crate::hashing::{Hash, VbkBlockHasher};
use crate::pop::{Atv, Vtb};
use crate::stream::{ReadStream, WriteStream};

/// Endorsement of an altchain block by an ATV
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AltEndorsement {
    pub id: Hash,
    pub endorsed_hash: Vec<u8>,
    pub containing_hash: Vec<u8>,
    pub block_of_proof: [u8; VBK_BLOCK_HASH_SIZE],
    pub payout_info: Vec<u8>,
}

impl AltEndorsement {
    pub fn from_atv(
        atv: &Atv,
        containing_hash: &[u8],
        endorsed_hash: &[u8],
        hasher: &dyn VbkBlockHasher,
    ) -> Result<Self> {
        Ok(Self {
            id: atv.id()?,
            endorsed_hash: endorsed_hash.to_vec(),
            containing_hash: containing_hash.to_vec(),
            block_of_proof: atv.block_of_proof.hash(hasher)?,
            payout_info: atv.transaction.publication_data.payout_info.clone(),
        })
    }
}

impl VbkEncode for AltEndorsement {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        write_single_byte_len_value(w, &self.id)?;
        write_single_byte_len_value(w, &self.endorsed_hash)?;
        write_single_byte_len_value(w, &self.containing_hash)?;
        write_single_byte_len_value(w, &self.block_of_proof)
    }
}

impl VbkDecode for AltEndorsement {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        let id = read_single_byte_len_array::<ATV_ID_SIZE>(r, "alt-endorsement-id")?;
        let endorsed_hash = read_single_byte_len_value(
            r,
            "alt-endorsement-endorsed",
            config.alt_hash_min,
            config.alt_hash_max,
        )?
        .to_vec();
        let containing_hash = read_single_byte_len_value(
            r,
            "alt-endorsement-containing",
            config.alt_hash_min,
            config.alt_hash_max,
        )?
        .to_vec();
        let block_of_proof = read_single_byte_len_array(r, "alt-endorsement-block-of-proof")?;
        Ok(Self {
            id,
            endorsed_hash,
            containing_hash,
            block_of_proof,
            payout_info: Vec::new(),
        })
    }
}

/// Endorsement of a VeriBlock block by a VTB
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VbkEndorsement {
    pub id: Hash,
    pub endorsed_hash: [u8; VBK_BLOCK_HASH_SIZE],
    pub containing_hash: [u8; VBK_BLOCK_HASH_SIZE],
    pub block_of_proof: [u8; BTC_BLOCK_HASH_SIZE],
    pub payout_info: Vec<u8>,
}

impl VbkEndorsement {
    pub fn from_vtb(vtb: &Vtb, hasher: &dyn VbkBlockHasher) -> Result<Self> {
        Ok(Self {
            id: vtb.id(hasher)?,
            endorsed_hash: vtb.transaction.published_block.hash(hasher)?,
            containing_hash: vtb.containing_block.hash(hasher)?,
            block_of_proof: vtb.transaction.block_of_proof.hash(),
            payout_info: Vec::new(),
        })
    }
}

impl VbkEncode for VbkEndorsement {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        write_single_byte_len_value(w, &self.id)?;
        write_single_byte_len_value(w, &self.endorsed_hash)?;
        write_single_byte_len_value(w, &self.containing_hash)?;
        write_single_byte_len_value(w, &self.block_of_proof)
    }
}

impl VbkDecode for VbkEndorsement {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, _config: &CodecConfig) -> Result<Self> {
        Ok(Self {
            id: read_single_byte_len_array(r, "vbk-endorsement-id")?,
            endorsed_hash: read_single_byte_len_array(r, "vbk-endorsement-endorsed")?,
            containing_hash: read_single_byte_len_array(r, "vbk-endorsement-containing")?,
            block_of_proof: read_single_byte_len_array(r, "vbk-endorsement-block-of-proof")?,
            payout_info: Vec::new(),
        })
    }
}

/// Which endorsement layout a stream holds. The wire carries no tag, so
/// the caller supplies it from context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndorsementKind {
    Alt,
    Vbk,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endorsement {
    Alt(AltEndorsement),
    Vbk(VbkEndorsement),
}

impl Endorsement {
    pub fn decode(
        r: &mut ReadStream<'_>,
        kind: EndorsementKind,
        config: &CodecConfig,
    ) -> Result<Self> {
        match kind {
            EndorsementKind::Alt => {
                Ok(Endorsement::Alt(AltEndorsement::from_vbk_encoding(r, config)?))
            }
            EndorsementKind::Vbk => {
                Ok(Endorsement::Vbk(VbkEndorsement::from_vbk_encoding(r, config)?))
            }
        }
    }

    pub fn kind(&self) -> EndorsementKind {
        match self {
            Endorsement::Alt(_) => EndorsementKind::Alt,
            Endorsement::Vbk(_) => EndorsementKind::Vbk,
        }
    }

    pub fn id(&self) -> &Hash {
        match self {
            Endorsement::Alt(e) => &e.id,
            Endorsement::Vbk(e) => &e.id,
        }
    }

    pub fn endorsed_hash(&self) -> &[u8] {
        match self {
            Endorsement::Alt(e) => &e.endorsed_hash,
            Endorsement::Vbk(e) => &e.endorsed_hash,
        }
    }

    pub fn containing_hash(&self) -> &[u8] {
        match self {
            Endorsement::Alt(e) => &e.containing_hash,
            Endorsement::Vbk(e) => &e.containing_hash,
        }
    }

    pub fn block_of_proof(&self) -> &[u8] {
        match self {
            Endorsement::Alt(e) => &e.block_of_proof,
            Endorsement::Vbk(e) => &e.block_of_proof,
        }
    }
}

impl VbkEncode for Endorsement {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        match self {
            Endorsement::Alt(e) => e.to_vbk_encoding(w),
            Endorsement::Vbk(e) => e.to_vbk_encoding(w),
        }
    }
}

/// Endorsement types that can live in a PopState.
pub trait EndorsementRecord: VbkEncode + VbkDecode + Clone {
    fn id(&self) -> &Hash;
}

impl EndorsementRecord for AltEndorsement {
    fn id(&self) -> &Hash {
        &self.id
    }
}

impl EndorsementRecord for VbkEndorsement {
    fn id(&self) -> &Hash {
        &self.id
    }
}

/// Endorsements contained in a block, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopState<E> {
    containing: Vec<E>,
}

impl<E> Default for PopState<E> {
    fn default() -> Self {
        Self {
            containing: Vec::new(),
        }
    }
}

impl<E: EndorsementRecord> PopState<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `endorsement`; an endorsement with the same id is replaced.
    pub fn insert(&mut self, endorsement: E) {
        match self.containing.iter_mut().find(|e| e.id() == endorsement.id()) {
            Some(existing) => *existing = endorsement,
            None => self.containing.push(endorsement),
        }
    }

    pub fn remove(&mut self, id: &Hash) -> Option<E> {
        let pos = self.containing.iter().position(|e| e.id() == id)?;
        Some(self.containing.remove(pos))
    }

    pub fn find(&self, id: &Hash) -> Option<&E> {
        self.containing.iter().find(|e| e.id() == id)
    }

    pub fn endorsements(&self) -> &[E] {
        &self.containing
    }

    pub fn len(&self) -> usize {
        self.containing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containing.is_empty()
    }

    pub fn clear(&mut self) {
        self.containing.clear();
    }
}

impl<E: EndorsementRecord> VbkEncode for PopState<E> {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        check_encode_limit("pop-state", self.containing.len(), MAX_POP_STATE_ENDORSEMENTS)?;
        write_array_of(w, &self.containing, |w, e| e.to_vbk_encoding(w))
    }
}

impl<E: EndorsementRecord> VbkDecode for PopState<E> {
    /// Bounded by the protocol limit, not the payload limits in `config`.
    fn from_vbk_encoding(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        let containing = read_array_of(r, "pop-state", 0, MAX_POP_STATE_ENDORSEMENTS, |r| {
            E::from_vbk_encoding(r, config)
        })?;
        Ok(Self { containing })
    }
}
