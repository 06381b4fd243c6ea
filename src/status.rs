//! Block validity status
//!
//! One u32 holds two sub-fields: the validity level in the low nibble
//! (levels are ordered, a block at level L has passed every check below L)
//! and independent flags above it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum ValidityLevel {
    Unknown = 0,
    /// Header is valid and connects to the tree
    ValidTree = 1,
    /// Payloads are attached and were checked statelessly
    Connected = 2,
    /// Payloads apply on some chain, possibly not the active one
    CanBeAppliedMaybeWithOtherChain = 3,
    /// Payloads apply on the active chain
    CanBeApplied = 4,
}

impl ValidityLevel {
    pub fn from_u32(level: u32) -> Result<Self> {
        match level {
            0 => Ok(ValidityLevel::Unknown),
            1 => Ok(ValidityLevel::ValidTree),
            2 => Ok(ValidityLevel::Connected),
            3 => Ok(ValidityLevel::CanBeAppliedMaybeWithOtherChain),
            4 => Ok(ValidityLevel::CanBeApplied),
            other => Err(CodecError::UnknownDiscriminator(format!(
                "validity level {other}"
            ))),
        }
    }
}

/// Single status flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusFlag(u32);

impl StatusFlag {
    /// Bootstrap block of its tree
    pub const BOOTSTRAP: StatusFlag = StatusFlag(1 << 4);
    /// Failed stateless or contextual validation
    pub const FAILED_BLOCK: StatusFlag = StatusFlag(1 << 5);
    /// Payloads failed to apply
    pub const FAILED_POP: StatusFlag = StatusFlag(1 << 6);
    /// Descends from a failed block
    pub const FAILED_CHILD: StatusFlag = StatusFlag(1 << 7);
    pub const HAS_PAYLOADS: StatusFlag = StatusFlag(1 << 8);
    /// Payloads are applied to the current state
    pub const APPLIED: StatusFlag = StatusFlag(1 << 9);
    /// Removed from the tree, kept only until the record is pruned
    pub const DELETED: StatusFlag = StatusFlag(1 << 10);

    pub fn bits(self) -> u32 {
        self.0
    }
}

const VALID_MASK: u32 = 0x0f;
const FAILED_MASK: u32 =
    StatusFlag::FAILED_BLOCK.0 | StatusFlag::FAILED_POP.0 | StatusFlag::FAILED_CHILD.0;
const KNOWN_FLAGS: u32 = StatusFlag::BOOTSTRAP.0
    | FAILED_MASK
    | StatusFlag::HAS_PAYLOADS.0
    | StatusFlag::APPLIED.0
    | StatusFlag::DELETED.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BlockStatus(u32);

impl BlockStatus {
    pub fn new(level: ValidityLevel) -> Self {
        BlockStatus(level as u32)
    }

    /// Validate a raw status word: the level must be known and no bit
    /// outside the defined flags may be set.
    pub fn from_bits(bits: u32) -> Result<Self> {
        ValidityLevel::from_u32(bits & VALID_MASK)?;
        let unknown = bits & !(VALID_MASK | KNOWN_FLAGS);
        if unknown != 0 {
            return Err(CodecError::UnknownDiscriminator(format!(
                "status bits {unknown:#x}"
            )));
        }
        Ok(BlockStatus(bits))
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn validity_level(self) -> ValidityLevel {
        // from_bits and the setters only admit known levels
        ValidityLevel::from_u32(self.0 & VALID_MASK).unwrap_or(ValidityLevel::Unknown)
    }

    pub fn has_flag(self, flag: StatusFlag) -> bool {
        self.0 & flag.0 != 0
    }

    pub fn set_flag(&mut self, flag: StatusFlag) {
        self.0 |= flag.0;
    }

    pub fn unset_flag(&mut self, flag: StatusFlag) {
        self.0 &= !flag.0;
    }

    pub fn is_failed(self) -> bool {
        self.0 & FAILED_MASK != 0
    }

    /// Not failed and at least at `up_to`.
    pub fn is_valid(self, up_to: ValidityLevel) -> bool {
        !self.is_failed() && self.validity_level() >= up_to
    }

    /// Raise the level to `up_to`. Refused while FAILED_POP is set; returns
    /// whether the level changed.
    pub fn raise_validity(&mut self, up_to: ValidityLevel) -> bool {
        if self.has_flag(StatusFlag::FAILED_POP) || self.validity_level() >= up_to {
            return false;
        }
        self.0 = (self.0 & !VALID_MASK) | up_to as u32;
        true
    }

    /// Lower the level to `up_to`. Refused while FAILED_POP is set; returns
    /// whether the level changed.
    pub fn lower_validity(&mut self, up_to: ValidityLevel) -> bool {
        if self.has_flag(StatusFlag::FAILED_POP) || self.validity_level() <= up_to {
            return false;
        }
        self.0 = (self.0 & !VALID_MASK) | up_to as u32;
        true
    }
}

impl TryFrom<u32> for BlockStatus {
    type Error = CodecError;

    fn try_from(bits: u32) -> Result<Self> {
        BlockStatus::from_bits(bits)
    }
}

impl From<BlockStatus> for u32 {
    fn from(status: BlockStatus) -> u32 {
        status.0
    }
}

impl fmt::Display for BlockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.validity_level())?;
        let names = [
            (StatusFlag::BOOTSTRAP, "bootstrap"),
            (StatusFlag::FAILED_BLOCK, "failed-block"),
            (StatusFlag::FAILED_POP, "failed-pop"),
            (StatusFlag::FAILED_CHILD, "failed-child"),
            (StatusFlag::HAS_PAYLOADS, "has-payloads"),
            (StatusFlag::APPLIED, "applied"),
            (StatusFlag::DELETED, "deleted"),
        ];
        for (flag, name) in names {
            if self.has_flag(flag) {
                write!(f, "|{name}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits() {
        let status = BlockStatus::from_bits(0x160).unwrap();
        assert_eq!(status.validity_level(), ValidityLevel::Unknown);
        assert!(status.has_flag(StatusFlag::HAS_PAYLOADS));
        assert!(status.has_flag(StatusFlag::FAILED_BLOCK));
        assert!(status.has_flag(StatusFlag::FAILED_POP));
        assert!(status.is_failed());

        assert!(BlockStatus::from_bits(5).is_err());
        assert!(BlockStatus::from_bits(1 << 11).is_err());
        assert!(BlockStatus::from_bits(0x3f4).is_ok());

        let deleted = BlockStatus::from_bits(0x402).unwrap();
        assert!(deleted.has_flag(StatusFlag::DELETED));
        assert!(!deleted.is_failed());
        assert_eq!(deleted.validity_level(), ValidityLevel::Connected);
    }

    #[test]
    fn test_raise_and_lower() {
        let mut status = BlockStatus::new(ValidityLevel::ValidTree);
        assert!(status.raise_validity(ValidityLevel::Connected));
        assert!(!status.raise_validity(ValidityLevel::ValidTree));
        assert!(status.is_valid(ValidityLevel::Connected));
        assert!(!status.is_valid(ValidityLevel::CanBeApplied));

        assert!(status.lower_validity(ValidityLevel::ValidTree));
        assert!(!status.lower_validity(ValidityLevel::Connected));
        assert_eq!(status.validity_level(), ValidityLevel::ValidTree);
    }

    #[test]
    fn test_failed_pop_freezes_level() {
        let mut status = BlockStatus::new(ValidityLevel::Connected);
        status.set_flag(StatusFlag::FAILED_POP);
        assert!(!status.raise_validity(ValidityLevel::CanBeApplied));
        assert!(!status.lower_validity(ValidityLevel::ValidTree));
        assert!(!status.is_valid(ValidityLevel::ValidTree));

        status.unset_flag(StatusFlag::FAILED_POP);
        assert!(status.raise_validity(ValidityLevel::CanBeApplied));
        assert_eq!(status.bits(), 4);
    }

    #[test]
    fn test_failed_block_does_not_freeze_level() {
        let mut status = BlockStatus::new(ValidityLevel::ValidTree);
        status.set_flag(StatusFlag::FAILED_BLOCK);
        assert!(status.raise_validity(ValidityLevel::Connected));
        assert!(!status.is_valid(ValidityLevel::ValidTree));
    }

    #[test]
    fn test_display() {
        let mut status = BlockStatus::new(ValidityLevel::Connected);
        status.set_flag(StatusFlag::HAS_PAYLOADS);
        assert_eq!(status.to_string(), "Connected|has-payloads");
        status.set_flag(StatusFlag::DELETED);
        assert_eq!(status.to_string(), "Connected|has-payloads|deleted");
    }
}
