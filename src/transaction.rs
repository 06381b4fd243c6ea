//! VeriBlock transactions and their payloads
//!
//! Both transaction kinds travel as
//!
//! ```text
//! varLen(raw body) · singleByteLen(signature) · singleByteLen(public key)
//! ```
//!
//! The raw body is what gets hashed and signed: ECDSA over
//! SHA256(SHA256(raw)) with the secp256k1 key carried in X.509 form.

use secp256k1::{ecdsa::Signature, Message, PublicKey, Secp256k1};
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::block::{BtcBlock, VbkBlock};
use crate::codec::{
    check_encode_limit, read_array_of, read_single_be_value, read_single_byte_len_value,
    read_var_len_value, write_array_of, write_single_be_value, write_single_byte_len_value,
    write_var_len_value, NetworkBytePair, VbkDecode, VbkEncode,
};
use crate::config::CodecConfig;
use crate::constants::*;
use crate::error::Result;
use crate::hashing::{sha256, sha256d, Hash};
use crate::merkle::MerklePath;
use crate::stream::{ReadStream, WriteStream};

/// Uncompressed secp256k1 point length, the tail of the X.509 key
const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;

/// Amount in atomic units
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Coin(pub i64);

impl VbkEncode for Coin {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        write_single_be_value(w, self.0);
        Ok(())
    }
}

impl VbkDecode for Coin {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, _config: &CodecConfig) -> Result<Self> {
        Ok(Coin(read_single_be_value(r, "coin")?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Output {
    pub address: Address,
    pub coin: Coin,
}

impl VbkEncode for Output {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        self.address.to_vbk_encoding(w)?;
        self.coin.to_vbk_encoding(w)
    }
}

impl VbkDecode for Output {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        Ok(Self {
            address: Address::from_vbk_encoding(r, config)?,
            coin: Coin::from_vbk_encoding(r, config)?,
        })
    }
}

/// Altchain payload published through an ATV.
///
/// `identifier` names the altchain; the header is the endorsed altchain
/// block header and the payout info names whoever collects the reward.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicationData {
    pub identifier: i64,
    pub header: Vec<u8>,
    pub payout_info: Vec<u8>,
    pub context_info: Vec<u8>,
}

impl VbkEncode for PublicationData {
    /// `singleBE(id) · varLen(header) · varLen(context) · varLen(payout)`
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        check_encode_limit(
            "publication-header",
            self.header.len(),
            MAX_HEADER_SIZE_PUBLICATION_DATA,
        )?;
        check_encode_limit(
            "publication-context",
            self.context_info.len(),
            MAX_CONTEXT_SIZE_PUBLICATION_DATA,
        )?;
        check_encode_limit(
            "publication-payout",
            self.payout_info.len(),
            MAX_PAYOUT_SIZE_PUBLICATION_DATA,
        )?;
        write_single_be_value(w, self.identifier);
        write_var_len_value(w, &self.header)?;
        write_var_len_value(w, &self.context_info)?;
        write_var_len_value(w, &self.payout_info)
    }
}

impl VbkDecode for PublicationData {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, _config: &CodecConfig) -> Result<Self> {
        let identifier = read_single_be_value(r, "publication-identifier")?;
        let header =
            read_var_len_value(r, "publication-header", 0, MAX_HEADER_SIZE_PUBLICATION_DATA)?
                .to_vec();
        let context_info =
            read_var_len_value(r, "publication-context", 0, MAX_CONTEXT_SIZE_PUBLICATION_DATA)?
                .to_vec();
        let payout_info =
            read_var_len_value(r, "publication-payout", 0, MAX_PAYOUT_SIZE_PUBLICATION_DATA)?
                .to_vec();
        Ok(Self {
            identifier,
            header,
            payout_info,
            context_info,
        })
    }
}

/// Opaque raw Bitcoin transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BtcTx(pub Vec<u8>);

impl BtcTx {
    /// Txid in internal byte order: SHA256(SHA256(raw))
    pub fn hash(&self) -> Hash {
        sha256d(&self.0)
    }
}

impl VbkEncode for BtcTx {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        check_encode_limit("btc-tx", self.0.len(), BTC_TX_MAX_RAW_SIZE)?;
        write_var_len_value(w, &self.0)
    }
}

impl VbkDecode for BtcTx {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, _config: &CodecConfig) -> Result<Self> {
        Ok(BtcTx(read_var_len_value(r, "btc-tx", 0, BTC_TX_MAX_RAW_SIZE)?.to_vec()))
    }
}

fn write_signed(
    w: &mut WriteStream,
    raw: &[u8],
    signature: &[u8],
    public_key: &[u8],
) -> Result<()> {
    check_encode_limit("signature", signature.len(), MAX_SIGNATURE_SIZE)?;
    check_encode_limit("public-key", public_key.len(), MAX_PUBLIC_KEY_SIZE)?;
    write_var_len_value(w, raw)?;
    write_single_byte_len_value(w, signature)?;
    write_single_byte_len_value(w, public_key)
}

/// Split a signed transaction into raw body, signature and public key.
fn read_signed<'a>(r: &mut ReadStream<'a>) -> Result<(&'a [u8], Vec<u8>, Vec<u8>)> {
    let raw = read_var_len_value(r, "tx-raw", 0, MAX_POPDATA_SIZE)?;
    let signature = read_single_byte_len_value(r, "signature", 0, MAX_SIGNATURE_SIZE)?.to_vec();
    let public_key = read_single_byte_len_value(r, "public-key", 0, MAX_PUBLIC_KEY_SIZE)?.to_vec();
    Ok((raw, signature, public_key))
}

/// VerifySignature: 𝔹* × 𝕊 × 𝕂 → {true, false}
///
/// `public_key` is the X.509 encoding; its last 65 bytes are the
/// uncompressed point. High-S signatures are normalized before checking.
pub fn verify_tx_signature(tx_hash: &Hash, signature: &[u8], public_key: &[u8]) -> bool {
    let point = match public_key.len().checked_sub(UNCOMPRESSED_PUBLIC_KEY_SIZE) {
        Some(offset) => &public_key[offset..],
        None => return false,
    };
    let pubkey = match PublicKey::from_slice(point) {
        Ok(pk) => pk,
        Err(_) => return false,
    };
    let mut signature = match Signature::from_der_lax(signature) {
        Ok(sig) => sig,
        Err(_) => return false,
    };
    signature.normalize_s();
    let message = match Message::from_digest_slice(&sha256(tx_hash)) {
        Ok(m) => m,
        Err(_) => return false,
    };
    let secp = Secp256k1::verification_only();
    secp.verify_ecdsa(&message, &signature, &pubkey).is_ok()
}

/// Value transfer transaction carrying altchain publication data
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VbkTx {
    pub network_or_type: NetworkBytePair,
    pub source_address: Address,
    pub source_amount: Coin,
    pub outputs: Vec<Output>,
    pub signature_index: i64,
    pub publication_data: PublicationData,
    pub signature: Vec<u8>,
    pub public_key: Vec<u8>,
}

impl VbkTx {
    pub fn write_raw(&self, w: &mut WriteStream) -> Result<()> {
        check_encode_limit("tx-outputs", self.outputs.len(), MAX_OUTPUTS_COUNT)?;
        self.network_or_type.write(w)?;
        self.source_address.to_vbk_encoding(w)?;
        self.source_amount.to_vbk_encoding(w)?;
        w.write_u8(self.outputs.len() as u8);
        for output in &self.outputs {
            output.to_vbk_encoding(w)?;
        }
        write_single_be_value(w, self.signature_index);
        write_var_len_value(w, &self.publication_data.to_vbk_bytes()?)
    }

    pub fn to_raw(&self) -> Result<Vec<u8>> {
        let mut w = WriteStream::new();
        self.write_raw(&mut w)?;
        Ok(w.into_inner())
    }

    pub fn read_raw(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        let network_or_type = NetworkBytePair::read(r, VBK_TX_TYPE)?;
        let source_address = Address::from_vbk_encoding(r, config)?;
        let source_amount = Coin::from_vbk_encoding(r, config)?;
        let count = r.read_u8()?;
        let mut outputs = Vec::with_capacity(count as usize);
        for _ in 0..count {
            outputs.push(Output::from_vbk_encoding(r, config)?);
        }
        let signature_index = read_single_be_value(r, "signature-index")?;
        let publication_bytes =
            read_var_len_value(r, "publication-data", 0, MAX_PUBLICATIONDATA_SIZE)?;
        let mut inner = ReadStream::new(publication_bytes);
        let publication_data = PublicationData::from_vbk_encoding(&mut inner, config)?;
        inner.finish()?;
        Ok(Self {
            network_or_type,
            source_address,
            source_amount,
            outputs,
            signature_index,
            publication_data,
            signature: Vec::new(),
            public_key: Vec::new(),
        })
    }

    /// SHA256(raw)
    pub fn hash(&self) -> Result<Hash> {
        Ok(sha256(&self.to_raw()?))
    }

    pub fn verify_signature(&self) -> bool {
        match self.hash() {
            Ok(hash) => verify_tx_signature(&hash, &self.signature, &self.public_key),
            Err(_) => false,
        }
    }

    /// The signing key owns the source address.
    pub fn is_signed_by_source(&self) -> bool {
        self.source_address.is_derived_from_public_key(&self.public_key)
    }
}

impl VbkEncode for VbkTx {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        write_signed(w, &self.to_raw()?, &self.signature, &self.public_key)
    }
}

impl VbkDecode for VbkTx {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        let (raw, signature, public_key) = read_signed(r)?;
        let mut inner = ReadStream::new(raw);
        let tx = Self::read_raw(&mut inner, config)?;
        inner.finish()?;
        Ok(Self {
            signature,
            public_key,
            ..tx
        })
    }
}

/// Publication of a VeriBlock block into Bitcoin
///
/// `merkle_path` proves `bitcoin_transaction` inside `block_of_proof`;
/// its subject is recomputed from the transaction on decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VbkPopTx {
    pub network_or_type: NetworkBytePair,
    pub address: Address,
    pub published_block: VbkBlock,
    pub bitcoin_transaction: BtcTx,
    pub merkle_path: MerklePath,
    pub block_of_proof: BtcBlock,
    pub block_of_proof_context: Vec<BtcBlock>,
    pub signature: Vec<u8>,
    pub public_key: Vec<u8>,
}

impl VbkPopTx {
    pub fn write_raw(&self, w: &mut WriteStream) -> Result<()> {
        self.network_or_type.write(w)?;
        self.address.to_vbk_encoding(w)?;
        self.published_block.to_vbk_encoding(w)?;
        self.bitcoin_transaction.to_vbk_encoding(w)?;
        self.merkle_path.to_vbk_encoding(w)?;
        self.block_of_proof.to_vbk_encoding(w)?;
        check_encode_limit("btc-context", self.block_of_proof_context.len(), MAX_BTC_CONTEXT)?;
        write_array_of(w, &self.block_of_proof_context, |w, block| block.to_vbk_encoding(w))
    }

    pub fn to_raw(&self) -> Result<Vec<u8>> {
        let mut w = WriteStream::new();
        self.write_raw(&mut w)?;
        Ok(w.into_inner())
    }

    pub fn read_raw(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        let network_or_type = NetworkBytePair::read(r, VBK_POP_TX_TYPE)?;
        let address = Address::from_vbk_encoding(r, config)?;
        let published_block = VbkBlock::from_vbk_encoding(r, config)?;
        let bitcoin_transaction = BtcTx::from_vbk_encoding(r, config)?;
        let merkle_path = MerklePath::from_vbk_encoding(r, bitcoin_transaction.hash())?;
        let block_of_proof = BtcBlock::from_vbk_encoding(r, config)?;
        let block_of_proof_context =
            read_array_of(r, "btc-context", 0, config.max_btc_context, |r| {
                BtcBlock::from_vbk_encoding(r, config)
            })?;
        Ok(Self {
            network_or_type,
            address,
            published_block,
            bitcoin_transaction,
            merkle_path,
            block_of_proof,
            block_of_proof_context,
            signature: Vec::new(),
            public_key: Vec::new(),
        })
    }

    /// SHA256(raw)
    pub fn hash(&self) -> Result<Hash> {
        Ok(sha256(&self.to_raw()?))
    }

    pub fn verify_signature(&self) -> bool {
        match self.hash() {
            Ok(hash) => verify_tx_signature(&hash, &self.signature, &self.public_key),
            Err(_) => false,
        }
    }

    /// The merkle path connects the Bitcoin transaction to the block of proof.
    pub fn is_merkle_path_valid(&self) -> bool {
        self.merkle_path.subject == self.bitcoin_transaction.hash()
            && self.merkle_path.calculate_merkle_root() == self.block_of_proof.merkle_root
    }
}

impl VbkEncode for VbkPopTx {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        write_signed(w, &self.to_raw()?, &self.signature, &self.public_key)
    }
}

impl VbkDecode for VbkPopTx {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        let (raw, signature, public_key) = read_signed(r)?;
        let mut inner = ReadStream::new(raw);
        let tx = Self::read_raw(&mut inner, config)?;
        inner.finish()?;
        Ok(Self {
            signature,
            public_key,
            ..tx
        })
    }
}
