//! Persisted block-tree nodes
//!
//! ```text
//! BlockIndex = u32BE height · raw header · u32BE status · addon
//! ```
//!
//! The header goes in its native raw form without the outer length byte.
//! The addon is chain-specific: Bitcoin blocks remember which VeriBlock
//! blocks reference them, VeriBlock and altchain blocks carry their
//! PopState and the ids of payloads they contain.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::block::{AltBlock, BtcBlock, VbkBlock};
use crate::codec::{
    check_encode_limit, read_array_of, read_single_byte_len_array, write_array_of,
    write_single_byte_len_value, VbkDecode, VbkEncode,
};
use crate::config::CodecConfig;
use crate::constants::*;
use crate::endorsement::{AltEndorsement, PopState, VbkEndorsement};
use crate::error::Result;
use crate::hashing::Hash;
use crate::status::BlockStatus;
use crate::stream::{ReadStream, WriteStream};

/// Header types that can be stored in a BlockIndex.
pub trait ChainBlock: Clone + Debug + PartialEq + Eq {
    type Addon: VbkEncode + VbkDecode + Default + Clone + Debug + PartialEq + Eq;

    const NAME: &'static str;

    fn write_header(&self, w: &mut WriteStream) -> Result<()>;

    fn read_header(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self>;
}

impl ChainBlock for BtcBlock {
    type Addon = BtcBlockAddon;
    const NAME: &'static str = "btc";

    fn write_header(&self, w: &mut WriteStream) -> Result<()> {
        self.write_raw(w);
        Ok(())
    }

    fn read_header(r: &mut ReadStream<'_>, _config: &CodecConfig) -> Result<Self> {
        BtcBlock::read_raw(r)
    }
}

impl ChainBlock for VbkBlock {
    type Addon = VbkBlockAddon;
    const NAME: &'static str = "vbk";

    fn write_header(&self, w: &mut WriteStream) -> Result<()> {
        self.write_raw(w)
    }

    fn read_header(r: &mut ReadStream<'_>, _config: &CodecConfig) -> Result<Self> {
        VbkBlock::read_raw(r)
    }
}

impl ChainBlock for AltBlock {
    type Addon = AltBlockAddon;
    const NAME: &'static str = "alt";

    fn write_header(&self, w: &mut WriteStream) -> Result<()> {
        self.write_raw(w)
    }

    fn read_header(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        AltBlock::read_raw(r, config)
    }
}

fn write_ids<const N: usize>(
    w: &mut WriteStream,
    what: &'static str,
    ids: &[[u8; N]],
    max: usize,
) -> Result<()> {
    check_encode_limit(what, ids.len(), max)?;
    write_array_of(w, ids, |w, id| write_single_byte_len_value(w, id))
}

/// Stored id lists are bounded by the same protocol limits the writer uses.
fn read_ids<const N: usize>(
    r: &mut ReadStream<'_>,
    what: &'static str,
    max: usize,
) -> Result<Vec<[u8; N]>> {
    read_array_of(r, what, 0, max, |r| read_single_byte_len_array::<N>(r, what))
}

/// Append the ids not yet present, keeping order.
fn insert_unique<const N: usize>(ids: &mut Vec<[u8; N]>, new: &[[u8; N]]) {
    for id in new {
        if !ids.contains(id) {
            ids.push(*id);
        }
    }
}

fn remove_id<const N: usize>(ids: &mut Vec<[u8; N]>, id: &[u8; N]) -> bool {
    match ids.iter().position(|x| x == id) {
        Some(pos) => {
            ids.remove(pos);
            true
        }
        None => false,
    }
}

/// Heights of VeriBlock blocks whose VTBs reference this Bitcoin block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BtcBlockAddon {
    pub refs: Vec<u32>,
}

impl BtcBlockAddon {
    pub fn add_ref(&mut self, height: u32) {
        self.refs.push(height);
    }

    /// Drops one occurrence of `height`.
    pub fn remove_ref(&mut self, height: u32) -> bool {
        match self.refs.iter().position(|h| *h == height) {
            Some(pos) => {
                self.refs.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn ref_count(&self) -> usize {
        self.refs.len()
    }
}

impl VbkEncode for BtcBlockAddon {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        check_encode_limit("btc-addon-refs", self.refs.len(), MAX_BTCADDON_REFS)?;
        write_array_of(w, &self.refs, |w, height| {
            w.write_be_u32(*height);
            Ok(())
        })
    }
}

impl VbkDecode for BtcBlockAddon {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, _config: &CodecConfig) -> Result<Self> {
        let refs = read_array_of(r, "btc-addon-refs", 0, MAX_BTCADDON_REFS, |r| r.read_be_u32())?;
        Ok(Self { refs })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VbkBlockAddon {
    /// Altchain blocks referencing this block, for fork resolution
    pub ref_count: u32,
    pub pop_state: PopState<VbkEndorsement>,
    pub vtb_ids: Vec<Hash>,
}

impl VbkBlockAddon {
    pub fn add_ref(&mut self) {
        self.ref_count = self.ref_count.saturating_add(1);
    }

    /// False when the count is already zero.
    pub fn remove_ref(&mut self) -> bool {
        match self.ref_count.checked_sub(1) {
            Some(n) => {
                self.ref_count = n;
                true
            }
            None => false,
        }
    }

    pub fn insert_payload_ids(&mut self, ids: &[Hash]) {
        insert_unique(&mut self.vtb_ids, ids);
    }

    pub fn remove_payload_id(&mut self, id: &Hash) -> bool {
        remove_id(&mut self.vtb_ids, id)
    }
}

impl VbkEncode for VbkBlockAddon {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        w.write_be_u32(self.ref_count);
        self.pop_state.to_vbk_encoding(w)?;
        write_ids(w, "vbk-addon-vtb-ids", &self.vtb_ids, MAX_POPDATA_VTB)
    }
}

impl VbkDecode for VbkBlockAddon {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        Ok(Self {
            ref_count: r.read_be_u32()?,
            pop_state: PopState::from_vbk_encoding(r, config)?,
            vtb_ids: read_ids(r, "vbk-addon-vtb-ids", MAX_POPDATA_VTB)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AltBlockAddon {
    pub pop_state: PopState<AltEndorsement>,
    pub atv_ids: Vec<[u8; ATV_ID_SIZE]>,
    pub vtb_ids: Vec<[u8; VTB_ID_SIZE]>,
    pub vbk_ids: Vec<[u8; VBK_ID_SIZE]>,
}

impl AltBlockAddon {
    pub fn has_payloads(&self) -> bool {
        !(self.atv_ids.is_empty() && self.vtb_ids.is_empty() && self.vbk_ids.is_empty())
    }

    pub fn insert_atv_ids(&mut self, ids: &[[u8; ATV_ID_SIZE]]) {
        insert_unique(&mut self.atv_ids, ids);
    }

    pub fn insert_vtb_ids(&mut self, ids: &[[u8; VTB_ID_SIZE]]) {
        insert_unique(&mut self.vtb_ids, ids);
    }

    pub fn insert_vbk_ids(&mut self, ids: &[[u8; VBK_ID_SIZE]]) {
        insert_unique(&mut self.vbk_ids, ids);
    }

    pub fn remove_atv_id(&mut self, id: &[u8; ATV_ID_SIZE]) -> bool {
        remove_id(&mut self.atv_ids, id)
    }

    pub fn remove_vtb_id(&mut self, id: &[u8; VTB_ID_SIZE]) -> bool {
        remove_id(&mut self.vtb_ids, id)
    }

    pub fn remove_vbk_id(&mut self, id: &[u8; VBK_ID_SIZE]) -> bool {
        remove_id(&mut self.vbk_ids, id)
    }

    pub fn clear_payloads(&mut self) {
        self.atv_ids.clear();
        self.vtb_ids.clear();
        self.vbk_ids.clear();
    }
}

impl VbkEncode for AltBlockAddon {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        self.pop_state.to_vbk_encoding(w)?;
        write_ids(w, "alt-addon-atv-ids", &self.atv_ids, MAX_POPDATA_ATV)?;
        write_ids(w, "alt-addon-vtb-ids", &self.vtb_ids, MAX_POPDATA_VTB)?;
        write_ids(w, "alt-addon-vbk-ids", &self.vbk_ids, MAX_POPDATA_VBK)
    }
}

impl VbkDecode for AltBlockAddon {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        Ok(Self {
            pop_state: PopState::from_vbk_encoding(r, config)?,
            atv_ids: read_ids(r, "alt-addon-atv-ids", MAX_POPDATA_ATV)?,
            vtb_ids: read_ids(r, "alt-addon-vtb-ids", MAX_POPDATA_VTB)?,
            vbk_ids: read_ids(r, "alt-addon-vbk-ids", MAX_POPDATA_VBK)?,
        })
    }
}

/// Snapshot of one block-tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockIndex<B: ChainBlock> {
    pub height: u32,
    pub header: B,
    pub status: BlockStatus,
    pub addon: B::Addon,
}

impl<B: ChainBlock> BlockIndex<B> {
    pub fn new(height: u32, header: B) -> Self {
        Self {
            height,
            header,
            status: BlockStatus::default(),
            addon: B::Addon::default(),
        }
    }

    fn read(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        let height = r.read_be_u32()?;
        let header = B::read_header(r, config)?;
        let status = BlockStatus::from_bits(r.read_be_u32()?)?;
        let addon = B::Addon::from_vbk_encoding(r, config)?;
        Ok(Self {
            height,
            header,
            status,
            addon,
        })
    }
}

impl<B: ChainBlock> VbkEncode for BlockIndex<B> {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        w.write_be_u32(self.height);
        self.header.write_header(w)?;
        w.write_be_u32(self.status.bits());
        self.addon.to_vbk_encoding(w)
    }
}

impl<B: ChainBlock> VbkDecode for BlockIndex<B> {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        Self::read(r, config).map_err(|e| {
            debug!(chain = B::NAME, error = %e, "block index decode failed");
            e
        })
    }
}
