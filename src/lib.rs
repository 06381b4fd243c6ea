//! # VBK Codec
//!
//! Binary encoding of Proof-of-Proof entities: block headers of the three
//! chains (Bitcoin, VeriBlock, altchain), VeriBlock transactions, merkle
//! proofs, the ATV/VTB payloads built from them, the PopData bundle an
//! altchain block carries, and the block-index records a node persists.
//!
//! ## Architecture
//!
//! Encoding builds bottom-up, decoding reads top-down:
//! - primitives (`codec`, `stream`): trimmed integers, length-prefixed bytes, arrays
//! - addresses and headers (`address`, `block`)
//! - proofs and transactions (`merkle`, `transaction`)
//! - payloads (`pop`), endorsements and rewards (`endorsement`, `payout`)
//! - persistence records (`status`, `block_index`)
//!
//! ## Design Principles
//!
//! 1. **Bounded reads**: every length prefix is range-checked before use
//! 2. **No partial values**: a decoder returns a complete entity or an error
//! 3. **Explicit chain parameters**: bounds travel in a `CodecConfig`
//! 4. **Canonical output**: `encode(decode(bytes)) == bytes` for minimally
//!    encoded input; a trimmed integer with extra leading zeros decodes but
//!    re-encodes in its shortest form
//!
//! ## Usage
//!
//! ```rust
//! use vbk_codec::VbkCodec;
//!
//! let codec = VbkCodec::new();
//! let bytes = hex::decode(
//!     "201fec8aa4983d69395010e4d18cd8b943749d5b4f575e88a375debdc5ed22531c\
//!      201aaaaaaaaaaaa9395010e4d18cd8b943749d5b4f575e88a375debdc5ed22531c\
//!      000005ba0000009c",
//! )
//! .unwrap();
//! let block = codec.decode_alt_block(&bytes).unwrap();
//! assert_eq!(block.height, 1466);
//! assert_eq!(codec.encode(&block).unwrap(), bytes);
//! ```

pub mod address;
pub mod base59;
pub mod block;
pub mod block_index;
pub mod codec;
pub mod config;
pub mod constants;
pub mod endorsement;
pub mod error;
pub mod hashing;
pub mod merkle;
pub mod payout;
pub mod pop;
pub mod status;
pub mod stream;
pub mod transaction;

// Re-export commonly used types
pub use address::{Address, AddressType};
pub use block::{AltBlock, BtcBlock, VbkBlock};
pub use block_index::{AltBlockAddon, BlockIndex, BtcBlockAddon, ChainBlock, VbkBlockAddon};
pub use codec::{decode_exact, NetworkBytePair, VbkDecode, VbkEncode};
pub use config::CodecConfig;
pub use endorsement::{AltEndorsement, Endorsement, EndorsementKind, PopState, VbkEndorsement};
pub use error::{CodecError, Result};
pub use hashing::{Hash, Sha256dVbkHasher, VbkBlockHasher};
pub use merkle::{MerklePath, VbkMerklePath};
pub use payout::PopPayouts;
pub use pop::{Atv, PopData, Vtb};
pub use status::{BlockStatus, StatusFlag, ValidityLevel};
pub use stream::{ReadStream, WriteStream};
pub use transaction::{BtcTx, Coin, Output, PublicationData, VbkPopTx, VbkTx};

use serde::Serialize;

use crate::constants::{VBK_BLOCK_HASH_SIZE, VBK_ID_SIZE};

/// Codec entry point
///
/// Holds the chain parameters and the VeriBlock header hash every decode
/// and id computation needs, so callers do not thread them through by hand.
///
/// # Examples
///
/// ```
/// use vbk_codec::{CodecConfig, VbkCodec};
///
/// let config = CodecConfig::from_toml_str("alt_hash_min = 32\nalt_hash_max = 32\n").unwrap();
/// let codec = VbkCodec::with_config(config);
/// assert_eq!(codec.config().alt_hash_max, 32);
/// ```
pub struct VbkCodec {
    config: CodecConfig,
    hasher: Box<dyn VbkBlockHasher>,
}

impl Default for VbkCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl VbkCodec {
    /// Protocol-default bounds and the double SHA-256 header hash.
    pub fn new() -> Self {
        Self::with_config(CodecConfig::default())
    }

    pub fn with_config(config: CodecConfig) -> Self {
        Self {
            config,
            hasher: Box::new(Sha256dVbkHasher),
        }
    }

    /// Replace the VeriBlock header hash, e.g. with the chain's
    /// proof-of-work hash.
    pub fn with_hasher(mut self, hasher: Box<dyn VbkBlockHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn hasher(&self) -> &dyn VbkBlockHasher {
        self.hasher.as_ref()
    }

    /// Decode any entity; the whole buffer must be consumed.
    pub fn decode<T: VbkDecode>(&self, bytes: &[u8]) -> Result<T> {
        decode_exact(bytes, &self.config)
    }

    pub fn encode<T: VbkEncode>(&self, entity: &T) -> Result<Vec<u8>> {
        entity.to_vbk_bytes()
    }

    pub fn decode_alt_block(&self, bytes: &[u8]) -> Result<AltBlock> {
        self.decode(bytes)
    }

    pub fn decode_btc_block(&self, bytes: &[u8]) -> Result<BtcBlock> {
        self.decode(bytes)
    }

    pub fn decode_vbk_block(&self, bytes: &[u8]) -> Result<VbkBlock> {
        self.decode(bytes)
    }

    pub fn decode_address(&self, bytes: &[u8]) -> Result<Address> {
        self.decode(bytes)
    }

    pub fn decode_publication_data(&self, bytes: &[u8]) -> Result<PublicationData> {
        self.decode(bytes)
    }

    pub fn decode_atv(&self, bytes: &[u8]) -> Result<Atv> {
        self.decode(bytes)
    }

    pub fn decode_vtb(&self, bytes: &[u8]) -> Result<Vtb> {
        self.decode(bytes)
    }

    pub fn decode_pop_data(&self, bytes: &[u8]) -> Result<PopData> {
        self.decode(bytes)
    }

    pub fn decode_pop_payouts(&self, bytes: &[u8]) -> Result<PopPayouts> {
        self.decode(bytes)
    }

    pub fn decode_block_index<B: ChainBlock>(&self, bytes: &[u8]) -> Result<BlockIndex<B>> {
        self.decode(bytes)
    }

    pub fn vbk_block_hash(&self, block: &VbkBlock) -> Result<[u8; VBK_BLOCK_HASH_SIZE]> {
        block.hash(self.hasher())
    }

    pub fn vbk_block_id(&self, block: &VbkBlock) -> Result<[u8; VBK_ID_SIZE]> {
        block.id(self.hasher())
    }

    pub fn atv_id(&self, atv: &Atv) -> Result<Hash> {
        atv.id()
    }

    pub fn vtb_id(&self, vtb: &Vtb) -> Result<Hash> {
        vtb.id(self.hasher())
    }

    pub fn pop_data_merkle_root(&self, pop_data: &PopData) -> Result<Hash> {
        pop_data.merkle_root(self.hasher())
    }

    pub fn pop_data_has_duplicates(&self, pop_data: &PopData) -> Result<bool> {
        pop_data.has_duplicate_payloads(self.hasher())
    }

    pub fn alt_endorsement(
        &self,
        atv: &Atv,
        containing_hash: &[u8],
        endorsed_hash: &[u8],
    ) -> Result<AltEndorsement> {
        AltEndorsement::from_atv(atv, containing_hash, endorsed_hash, self.hasher())
    }

    pub fn vbk_endorsement(&self, vtb: &Vtb) -> Result<VbkEndorsement> {
        VbkEndorsement::from_vtb(vtb, self.hasher())
    }

    /// JSON rendering for logs and RPC answers.
    pub fn to_json<T: Serialize>(&self, entity: &T) -> Result<String> {
        serde_json::to_string(entity).map_err(|e| CodecError::InvalidEncoding(e.to_string()))
    }
}
