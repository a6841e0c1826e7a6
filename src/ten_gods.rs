use crate::tables::element::Element;
use crate::tables::Stem;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The five relational groups of the ten gods, seen from the day master.
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
pub enum TenGodGroup {
    /// 비겁: same element
    Companion,
    /// 식상: element the day master generates
    Output,
    /// 재성: element the day master controls
    Wealth,
    /// 관성: element that controls the day master
    Officer,
    /// 인성: element that generates the day master
    Resource,
}

pub const GROUP_COUNT: usize = 5;

impl TenGodGroup {
    pub const ALL: [TenGodGroup; GROUP_COUNT] = [
        TenGodGroup::Companion,
        TenGodGroup::Output,
        TenGodGroup::Wealth,
        TenGodGroup::Officer,
        TenGodGroup::Resource,
    ];

    pub fn of(day_element: Element, other: Element) -> Self {
        if other == day_element {
            Self::Companion
        } else if day_element.generates() == other {
            Self::Output
        } else if day_element.controls() == other {
            Self::Wealth
        } else if other.controls() == day_element {
            Self::Officer
        } else {
            Self::Resource
        }
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum TenGod {
    Companion,
    RobWealth,
    EatingGod,
    HurtingOfficer,
    IndirectWealth,
    DirectWealth,
    SevenKillings,
    DirectOfficer,
    IndirectResource,
    DirectResource,
}

impl TenGod {
    pub fn group(self) -> TenGodGroup {
        match self {
            Self::Companion | Self::RobWealth => TenGodGroup::Companion,
            Self::EatingGod | Self::HurtingOfficer => TenGodGroup::Output,
            Self::IndirectWealth | Self::DirectWealth => TenGodGroup::Wealth,
            Self::SevenKillings | Self::DirectOfficer => TenGodGroup::Officer,
            Self::IndirectResource | Self::DirectResource => TenGodGroup::Resource,
        }
    }
}

pub fn ten_god(day_master: Stem, other: Stem) -> TenGod {
    let same = day_master.polarity() == other.polarity();
    match (TenGodGroup::of(day_master.element(), other.element()), same) {
        (TenGodGroup::Companion, true) => TenGod::Companion,
        (TenGodGroup::Companion, false) => TenGod::RobWealth,
        (TenGodGroup::Output, true) => TenGod::EatingGod,
        (TenGodGroup::Output, false) => TenGod::HurtingOfficer,
        (TenGodGroup::Wealth, true) => TenGod::IndirectWealth,
        (TenGodGroup::Wealth, false) => TenGod::DirectWealth,
        (TenGodGroup::Officer, true) => TenGod::SevenKillings,
        (TenGodGroup::Officer, false) => TenGod::DirectOfficer,
        (TenGodGroup::Resource, true) => TenGod::IndirectResource,
        (TenGodGroup::Resource, false) => TenGod::DirectResource,
    }
}

/// Occurrences of each group in a chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenGodCounts(pub [u32; GROUP_COUNT]);

impl TenGodCounts {
    pub fn add(&mut self, group: TenGodGroup) {
        self.0[group.index()] += 1;
    }

    pub fn get(&self, group: TenGodGroup) -> u32 {
        self.0[group.index()]
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}
