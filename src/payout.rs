//! PoP rewards owed per payout destination
//!
//! Payouts are keyed by the altchain payout info, so two endorsements
//! paying the same destination collapse into one entry. Entries are
//! written in ascending payout-info order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::codec::{
    check_encode_limit, read_array_of, read_var_len_value, write_array_of, write_var_len_value,
    VbkDecode, VbkEncode,
};
use crate::config::CodecConfig;
use crate::constants::{MAX_PAYOUT, MAX_PAYOUT_SIZE_PUBLICATION_DATA};
use crate::error::{CodecError, Result};
use crate::stream::{ReadStream, WriteStream};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopPayouts {
    payouts: BTreeMap<Vec<u8>, u64>,
}

impl PopPayouts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` to `payout_info`, saturating on overflow.
    pub fn add(&mut self, payout_info: &[u8], amount: u64) {
        let entry = self.payouts.entry(payout_info.to_vec()).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    pub fn get(&self, payout_info: &[u8]) -> Option<u64> {
        self.payouts.get(payout_info).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], u64)> {
        self.payouts.iter().map(|(k, v)| (k.as_slice(), *v))
    }

    pub fn len(&self) -> usize {
        self.payouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payouts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.payouts.values().fold(0u64, |acc, v| acc.saturating_add(*v))
    }
}

impl VbkEncode for PopPayouts {
    /// `singleBE(count) · (varLen(payoutInfo) · u64BE amount)*`
    fn to_vbk_encoding(&self, w: &mut WriteStream) -> Result<()> {
        check_encode_limit("pop-payouts", self.payouts.len(), MAX_PAYOUT)?;
        let entries: Vec<(&Vec<u8>, &u64)> = self.payouts.iter().collect();
        write_array_of(w, &entries, |w, (info, amount)| {
            check_encode_limit("payout-info", info.len(), MAX_PAYOUT_SIZE_PUBLICATION_DATA)?;
            write_var_len_value(w, info)?;
            w.write_be_u64(**amount);
            Ok(())
        })
    }
}

impl VbkDecode for PopPayouts {
    fn from_vbk_encoding(r: &mut ReadStream<'_>, config: &CodecConfig) -> Result<Self> {
        let entries = read_array_of(r, "pop-payouts", 0, config.max_payouts, |r| {
            let info = read_var_len_value(r, "payout-info", 0, MAX_PAYOUT_SIZE_PUBLICATION_DATA)?;
            let amount = r.read_be_u64()?;
            Ok((info.to_vec(), amount))
        })?;
        // strictly ascending, which also rules out duplicate destinations
        if entries.windows(2).any(|pair| pair[0].0 >= pair[1].0) {
            return Err(CodecError::InvalidEncoding(
                "payout destinations out of order".to_string(),
            ));
        }
        Ok(Self { payouts: entries.into_iter().collect() })
    }
}
