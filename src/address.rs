//! VeriBlock addresses
//!
//! An address is 30 printable characters:
//!
//! ```text
//! V <24 data chars> <5 checksum chars>             standard (base58)
//! V <m> <n> <22 data chars> <4 checksum chars> 0   multisig (base59)
//! ```
//!
//! The checksum is the leading base58 characters of SHA-256 over the
//! 25-character data portion. On the wire the address travels as its
//! type byte followed by the base58/base59-decoded bytes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::base59;
use crate::codec::{read_single_byte_len_value, write_single_byte_len_value, VbkDecode, VbkEncode};
use crate::config::CodecConfig;
use crate::constants::{ADDRESS_POP_DATA_SIZE, ADDRESS_SIZE};
use crate::error::{CodecError, Result};
use crate::hashing::sha256;
use crate::stream::{ReadStream, WriteStream};

const STARTING_CHAR: u8 = b'V';
const MULTISIG_ENDING_CHAR: u8 = b'0';
const MULTISIG_M_POSITION: usize = 1;
const MULTISIG_N_POSITION: usize = 2;
const MULTISIG_MIN_N: u32 = 2;
const MULTISIG_MAX_N: u32 = 58;
const MULTISIG_MAX_M: u32 = 58;
/// Index of the last data character
const DATA_END: usize = 24;
/// Index of the last multisig checksum character
const MULTISIG_CHECKSUM_END: usize = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressType {
    Standard,
    Multisig,
}

impl AddressType {
    pub fn to_byte(self) -> u8 {
        match self {
            AddressType::Standard => 1,
            AddressType::Multisig => 3,
        }
    }

    pub fn from_byte(byte: u8) -> Result<Self> {
        match byte {
            1 => Ok(AddressType::Standard),
            3 => Ok(AddressType::Multisig),
            other => Err(CodecError::UnknownDiscriminator(format!(
                "address type {other}"
            ))),
        }
    }
}

/// Validated VeriBlock address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    address_type: AddressType,
    text: String,
}

fn invalid(msg: impl Into<String>) -> CodecError {
    CodecError::InvalidAddress(msg.into())
}

fn is_base58(input: &str) -> bool {
    bs58::decode(input).into_vec().is_ok()
}

/// Digit value of a single base58 character.
fn base58_digit(c: u8) -> Option<u32> {
    base59::BASE59_ALPHABET[..58]
        .iter()
        .position(|&a| a == c)
        .map(|p| p as u32)
}

/// Leading base58 characters of SHA-256 over the data portion.
fn calculate_checksum(data: &str, multisig: bool) -> String {
    let encoded = bs58::encode(sha256(data.as_bytes())).into_string();
    let len = if multisig { 4 } else { 5 };
    encoded.chars().take(len).collect()
}

impl Address {
    /// Parse and validate the human-readable form.
    pub fn from_string(input: &str) -> Result<Self> {
        if input.len() != ADDRESS_SIZE {
            return Err(invalid(format!(
                "expected {} characters, got {}",
                ADDRESS_SIZE,
                input.len()
            )));
        }
        if !input.is_ascii() {
            return Err(invalid("non-ascii characters"));
        }
        let bytes = input.as_bytes();
        if bytes[0] != STARTING_CHAR {
            return Err(invalid(format!(
                "must start with '{}'",
                STARTING_CHAR as char
            )));
        }

        let multisig = bytes[ADDRESS_SIZE - 1] == MULTISIG_ENDING_CHAR;
        let data = &input[..=DATA_END];
        let checksum = if multisig {
            &input[DATA_END + 1..=MULTISIG_CHECKSUM_END]
        } else {
            &input[DATA_END + 1..]
        };

        if multisig {
            if !base59::is_base59(input) {
                return Err(invalid("multisig address is not base59"));
            }
            // digits are shifted by one so that '1' reads as m = 1
            let m = base58_digit(bytes[MULTISIG_M_POSITION])
                .ok_or_else(|| invalid("bad multisig m"))?
                + 1;
            let n = base58_digit(bytes[MULTISIG_N_POSITION])
                .ok_or_else(|| invalid("bad multisig n"))?
                + 1;
            if n < MULTISIG_MIN_N {
                return Err(invalid(format!(
                    "multisig n must be at least {MULTISIG_MIN_N}, got {n}"
                )));
            }
            if m > n {
                return Err(invalid("multisig address has more signatures than addresses"));
            }
            if n > MULTISIG_MAX_N || m > MULTISIG_MAX_M {
                return Err(invalid("too many multisig addresses or signatures"));
            }
            if !is_base58(&input[..ADDRESS_SIZE - 1]) {
                return Err(invalid("multisig address body is not base58"));
            }
        } else if !is_base58(input) {
            return Err(invalid("address is not base58"));
        }

        let expected = calculate_checksum(data, multisig);
        if expected != checksum {
            return Err(invalid(format!(
                "checksum mismatch: expected {expected}, got {checksum}"
            )));
        }

        Ok(Self {
            address_type: if multisig {
                AddressType::Multisig
            } else {
                AddressType::Standard
            },
            text: input.to_string(),
        })
    }

    /// Standard address owned by `public_key`:
    /// `"V" ‖ base58(SHA256(key))[0..24] ‖ checksum`
    pub fn from_public_key(public_key: &[u8]) -> Self {
        let key_hash = bs58::encode(sha256(public_key)).into_string();
        let mut data = String::with_capacity(ADDRESS_SIZE);
        data.push(STARTING_CHAR as char);
        data.extend(key_hash.chars().take(DATA_END));
        let checksum = calculate_checksum(&data, false);
        data.push_str(&checksum);
        Self {
            address_type: AddressType::Standard,
            text: data,
        }
    }

    pub fn is_derived_from_public_key(&self, public_key: &[u8]) -> bool {
        *self == Self::from_public_key(public_key)
    }

    pub fn address_type(&self) -> AddressType {
        self.address_type
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Multisig threshold `(m, n)`, `None` for standard addresses.
    pub fn multisig_threshold(&self) -> Option<(u32, u32)> {
        if self.address_type != AddressType::Multisig {
            return None;
        }
        let bytes = self.text.as_bytes();
        let m = base58_digit(bytes[MULTISIG_M_POSITION])? + 1;
        let n = base58_digit(bytes[MULTISIG_N_POSITION])? + 1;
        Some((m, n))
    }

    fn decode_text(&self, text: &str) -> Result<Vec<u8>> {
        match self.address_type {
            AddressType::Standard => bs58::decode(text)
                .into_vec()
                .map_err(|e| invalid(e.to_string())),
            AddressType::Multisig => base59::decode(text),
        }
    }

    /// The first bytes of the decoded address body (without the leading
    /// `'V'`), as embedded in PoP publications.
    pub fn pop_bytes(&self) -> Result<[u8; ADDRESS_POP_DATA_SIZE]> {
        let decoded = self.decode_text(&self.text[1..])?;
        if decoded.len() < ADDRESS_POP_DATA_SIZE {
            return Err(invalid(format!(
                "decoded body has {} bytes, need {}",
                decoded.len(),
                ADDRESS_POP_DATA_SIZE
            )));
        }
        let mut out = [0u8; ADDRESS_POP_DATA_SIZE];
        out.copy_from_slice(&decoded[..ADDRESS_POP_DATA_SIZE]);
        Ok(out)
    }
}

impl VbkEncode for Address {
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        w.write_u8(self.address_type.to_byte());
        let decoded = self.decode_text(&self.text)?;
        write_single_byte_len_value(w, &decoded)
    }
}

impl VbkDecode for Address {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, _config: &CodecConfig) -> Result<Self> {
        let address_type = AddressType::from_byte(r.read_u8()?)?;
        let bytes = read_single_byte_len_value(r, "address-bytes", 0, ADDRESS_SIZE)?;
        let text = match address_type {
            AddressType::Standard => bs58::encode(bytes).into_string(),
            AddressType::Multisig => base59::encode(bytes),
        };
        let address = Address::from_string(&text)?;
        if address.address_type != address_type {
            return Err(invalid(format!(
                "type byte says {:?}, text {} says {:?}",
                address_type, text, address.address_type
            )));
        }
        Ok(address)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Address {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Address::from_string(s)
    }
}

impl TryFrom<String> for Address {
    type Error = CodecError;

    fn try_from(s: String) -> Result<Self> {
        Address::from_string(&s)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> String {
        address.text
    }
}
