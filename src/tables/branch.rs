use super::element::{Element, Polarity};
use crate::error::{IndexKind, SajuError, SajuResult};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The twelve earthly branches (지지), in cycle order starting at 子.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Shin,
    Yu,
    Sul,
    Hae,
}

pub const BRANCH_COUNT: usize = 12;

/// Seasonal position of a branch inside its element's trio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum BranchKind {
    /// 寅申巳亥 (생지)
    Generative,
    /// 子午卯酉 (왕지)
    Peak,
    /// 辰戌丑未 (고지)
    Storage,
}

impl Branch {
    pub const ALL: [Branch; BRANCH_COUNT] = [
        Branch::Ja,
        Branch::Chuk,
        Branch::In,
        Branch::Myo,
        Branch::Jin,
        Branch::Sa,
        Branch::O,
        Branch::Mi,
        Branch::Shin,
        Branch::Yu,
        Branch::Sul,
        Branch::Hae,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Strict conversion; codes outside 0..12 are rejected.
    pub fn from_code(code: u8) -> SajuResult<Self> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(SajuError::InvalidIndex {
                kind: IndexKind::Branch,
                value: code as i64,
            })
    }

    /// Offset arithmetic on the cycle; any integer is normalised modulo 12.
    pub fn from_offset(offset: i64) -> Self {
        Self::ALL[offset.rem_euclid(BRANCH_COUNT as i64) as usize]
    }

    pub fn offset(self, delta: i64) -> Self {
        Self::from_offset(self.index() as i64 + delta)
    }

    pub fn from_hanja(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.hanja() == c)
    }

    pub fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => Element::Earth,
            Self::Shin | Self::Yu => Element::Metal,
            Self::Hae | Self::Ja => Element::Water,
        }
    }

    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    pub fn kind(self) -> BranchKind {
        match self.index() % 3 {
            0 => BranchKind::Peak,
            1 => BranchKind::Storage,
            _ => BranchKind::Generative,
        }
    }

    pub fn hanja(self) -> char {
        match self {
            Self::Ja => '子',
            Self::Chuk => '丑',
            Self::In => '寅',
            Self::Myo => '卯',
            Self::Jin => '辰',
            Self::Sa => '巳',
            Self::O => '午',
            Self::Mi => '未',
            Self::Shin => '申',
            Self::Yu => '酉',
            Self::Sul => '戌',
            Self::Hae => '亥',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_the_cycle() {
        for b in [Branch::In, Branch::Shin, Branch::Sa, Branch::Hae] {
            assert_eq!(b.kind(), BranchKind::Generative, "{}", b);
        }
        for b in [Branch::Ja, Branch::O, Branch::Myo, Branch::Yu] {
            assert_eq!(b.kind(), BranchKind::Peak, "{}", b);
        }
        for b in [Branch::Jin, Branch::Sul, Branch::Chuk, Branch::Mi] {
            assert_eq!(b.kind(), BranchKind::Storage, "{}", b);
        }
    }

    #[test]
    fn offsets_wrap() {
        assert_eq!(Branch::from_offset(12), Branch::Ja);
        assert_eq!(Branch::from_offset(-1), Branch::Hae);
        assert_eq!(Branch::Ja.offset(6), Branch::O);
        assert!(Branch::from_code(12).is_err());
    }
}
