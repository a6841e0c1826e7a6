use super::element::{Element, Polarity};
use crate::error::{IndexKind, SajuError, SajuResult};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The ten heavenly stems (천간), in cycle order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

pub const STEM_COUNT: usize = 10;

impl Stem {
    pub const ALL: [Stem; STEM_COUNT] = [
        Stem::Gap,
        Stem::Eul,
        Stem::Byeong,
        Stem::Jeong,
        Stem::Mu,
        Stem::Gi,
        Stem::Gyeong,
        Stem::Sin,
        Stem::Im,
        Stem::Gye,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Strict conversion from a collaborator-supplied code. Stems are never normalised.
    pub fn from_code(code: u8) -> SajuResult<Self> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(SajuError::InvalidIndex {
                kind: IndexKind::Stem,
                value: code as i64,
            })
    }

    pub fn from_hanja(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.hanja() == c)
    }

    pub fn element(self) -> Element {
        Element::ALL[self.index() / 2]
    }

    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Same base element, opposite polarity: 甲↔乙, 丙↔丁, 戊↔己, 庚↔辛, 壬↔癸.
    pub fn counterpart(self) -> Stem {
        Self::ALL[self.index() ^ 1]
    }

    pub fn hanja(self) -> char {
        match self {
            Self::Gap => '甲',
            Self::Eul => '乙',
            Self::Byeong => '丙',
            Self::Jeong => '丁',
            Self::Mu => '戊',
            Self::Gi => '己',
            Self::Gyeong => '庚',
            Self::Sin => '辛',
            Self::Im => '壬',
            Self::Gye => '癸',
        }
    }
}

/// Stem combination (천간합): stems five apart pair up and transform.
/// 甲己→Earth, 乙庚→Metal, 丙辛→Water, 丁壬→Wood, 戊癸→Fire.
pub fn stem_combination(a: Stem, b: Stem) -> Option<Element> {
    let (lo, hi) = if a.index() <= b.index() {
        (a.index(), b.index())
    } else {
        (b.index(), a.index())
    };
    if hi - lo != 5 {
        return None;
    }
    // 甲(0)→Earth(2), 乙(1)→Metal(3), 丙(2)→Water(4), 丁(3)→Wood(0), 戊(4)→Fire(1)
    Some(Element::ALL[(lo + 2) % 5])
}

/// Stem clash (천간충): same polarity, controlling elements, excluding earth.
/// 甲庚, 乙辛, 丙壬, 丁癸.
pub fn is_stem_clash(a: Stem, b: Stem) -> bool {
    let (lo, hi) = if a.index() <= b.index() {
        (a.index(), b.index())
    } else {
        (b.index(), a.index())
    };
    hi - lo == 6 && lo < 4
}
