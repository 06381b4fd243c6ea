//! Protocol constants for the VBK wire format

/// SHA-256 digest width
pub const SHA256_HASH_SIZE: usize = 32;

/// Raw Bitcoin header: 80 bytes
pub const BTC_HEADER_SIZE: usize = 80;

/// Raw VeriBlock header (progpow era): 65 bytes
pub const VBK_HEADER_SIZE_PROGPOW: usize = 65;

pub const BTC_BLOCK_HASH_SIZE: usize = 32;
pub const VBK_BLOCK_HASH_SIZE: usize = 24;
pub const VBK_MERKLE_ROOT_HASH_SIZE: usize = 16;
pub const VBK_PREVIOUS_BLOCK_HASH_SIZE: usize = 12;
pub const VBK_PREVIOUS_KEYSTONE_HASH_SIZE: usize = 9;

/// Ids used as correlation keys for payloads
pub const ATV_ID_SIZE: usize = 32;
pub const VTB_ID_SIZE: usize = 32;
pub const VBK_ID_SIZE: usize = 12;

/// Maximum raw Bitcoin transaction: 4,000,000 bytes
pub const BTC_TX_MAX_RAW_SIZE: usize = 4_000_000;

/// Maximum merkle path depth
pub const MAX_LAYER_COUNT_MERKLE: usize = 40;

/// Merkle path "size of size" field, always 4
pub const MERKLE_SIZE_OF_SIZE: i64 = 4;

/// Maximum outputs in a VeriBlock transaction
pub const MAX_OUTPUTS_COUNT: usize = 255;

/// DER signature upper bound
pub const MAX_SIGNATURE_SIZE: usize = 72;

/// X.509 encoded secp256k1 public key upper bound
pub const MAX_PUBLIC_KEY_SIZE: usize = 88;

/// Human-readable address length
pub const ADDRESS_SIZE: usize = 30;

/// Number of decoded address bytes embedded in PoP data
pub const ADDRESS_POP_DATA_SIZE: usize = 15;

/// Publication data field limits
pub const MAX_HEADER_SIZE_PUBLICATION_DATA: usize = 1024;
pub const MAX_CONTEXT_SIZE_PUBLICATION_DATA: usize = 10_000;
pub const MAX_PAYOUT_SIZE_PUBLICATION_DATA: usize = 10_000;

/// Upper bound of an encoded PublicationData:
/// identifier (1 + 8) and three var-len fields (1 + len each)
pub const MAX_PUBLICATIONDATA_SIZE: usize = 1
    + 8
    + 1
    + MAX_HEADER_SIZE_PUBLICATION_DATA
    + 1
    + MAX_CONTEXT_SIZE_PUBLICATION_DATA
    + 1
    + MAX_PAYOUT_SIZE_PUBLICATION_DATA;

/// Upper bound of any var-len payload inside PopData
pub const MAX_POPDATA_SIZE: usize = 5_500_000;

/// Per-section PopData limits
pub const MAX_POPDATA_VBK: usize = 50_000;
pub const MAX_POPDATA_VTB: usize = 50_000;
pub const MAX_POPDATA_ATV: usize = 50_000;

/// Endorsements in one PopState, which holds either ATV or VTB endorsements
pub const MAX_POP_STATE_ENDORSEMENTS: usize = if MAX_POPDATA_ATV > MAX_POPDATA_VTB {
    MAX_POPDATA_ATV
} else {
    MAX_POPDATA_VTB
};

/// Bitcoin context blocks carried by a single VbkPopTx
pub const MAX_BTC_CONTEXT: usize = 15_000;

/// Maximum entries in a PopPayouts list
pub const MAX_PAYOUT: usize = 50_000;

/// Altchain hash bounds
pub const MIN_ALT_HASH_SIZE: usize = 0;
pub const MAX_ALT_HASH_SIZE: usize = 1024;

/// Maximum back-references held by a Bitcoin block index
pub const MAX_BTCADDON_REFS: usize = 65_536;

/// The only ATV/VTB/PopData version this format generation accepts
pub const SUPPORTED_PAYLOAD_VERSION: u32 = 1;

/// Transaction type tags of the network byte pair
pub const VBK_TX_TYPE: u8 = 0x01;
pub const VBK_POP_TX_TYPE: u8 = 0x02;
