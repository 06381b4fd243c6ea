//! Hash functions used by ids, checksums and merkle paths

use bitcoin_hashes::{sha256d as double_sha256, Hash as BitcoinHash, HashEngine};
use sha2::{Digest, Sha256};

use crate::constants::VBK_BLOCK_HASH_SIZE;

/// 256-bit hash
pub type Hash = [u8; 32];

pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// SHA256(a ‖ b)
pub fn sha256_pair(a: &[u8], b: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(a);
    hasher.update(b);
    hasher.finalize().into()
}

/// SHA256(SHA256(data))
pub fn sha256d(data: &[u8]) -> Hash {
    double_sha256::Hash::hash(data).into_inner()
}

/// SHA256(SHA256(a ‖ b))
pub fn sha256d_pair(a: &[u8], b: &[u8]) -> Hash {
    let mut engine = double_sha256::Hash::engine();
    engine.input(a);
    engine.input(b);
    double_sha256::Hash::from_engine(engine).into_inner()
}

pub fn reversed<const N: usize>(mut bytes: [u8; N]) -> [u8; N] {
    bytes.reverse();
    bytes
}

/// Hash of a raw VeriBlock header.
///
/// The production chain uses its progressive proof-of-work hash, which is
/// owned by the consensus engine; callers plug it in here.
pub trait VbkBlockHasher: Send + Sync {
    fn hash_header(&self, raw_header: &[u8]) -> [u8; VBK_BLOCK_HASH_SIZE];
}

/// Double SHA-256 truncated to the VeriBlock hash width.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256dVbkHasher;

impl VbkBlockHasher for Sha256dVbkHasher {
    fn hash_header(&self, raw_header: &[u8]) -> [u8; VBK_BLOCK_HASH_SIZE] {
        let full = sha256d(raw_header);
        let mut out = [0u8; VBK_BLOCK_HASH_SIZE];
        out.copy_from_slice(&full[..VBK_BLOCK_HASH_SIZE]);
        out
    }
}
