use crate::error::{IndexKind, SajuError, SajuResult};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The five base elements, in generation-cycle order.
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
#[strum(ascii_case_insensitive)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

pub const ELEMENT_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Element {
    pub const ALL: [Element; ELEMENT_COUNT] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_code(code: u8) -> SajuResult<Self> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(SajuError::InvalidIndex {
                kind: IndexKind::Element,
                value: code as i64,
            })
    }

    /// Wood → Fire → Earth → Metal → Water → Wood.
    pub fn generates(self) -> Element {
        Self::ALL[(self.index() + 1) % ELEMENT_COUNT]
    }

    pub fn generated_by(self) -> Element {
        Self::ALL[(self.index() + ELEMENT_COUNT - 1) % ELEMENT_COUNT]
    }

    /// Wood → Earth → Water → Fire → Metal → Wood.
    pub fn controls(self) -> Element {
        Self::ALL[(self.index() + 2) % ELEMENT_COUNT]
    }

    pub fn controlled_by(self) -> Element {
        Self::ALL[(self.index() + ELEMENT_COUNT - 2) % ELEMENT_COUNT]
    }

    pub fn hanja(self) -> char {
        match self {
            Self::Wood => '木',
            Self::Fire => '火',
            Self::Earth => '土',
            Self::Metal => '金',
            Self::Water => '水',
        }
    }
}

/// Per-element tally indexed by `Element::index()`.
pub type ElementCounts = [u32; ELEMENT_COUNT];
