use crate::relations::{self, RelationHit};
use crate::roots::{root_strength, RootStrength};
use crate::tables::element::ElementCounts;
use crate::tables::hidden::{main_stem, HiddenStemEntry};
use crate::tables::{Branch, Stem};
use crate::ten_gods::{ten_god, TenGodCounts};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarPosition {
    pub const ALL: [PillarPosition; 4] = [Self::Year, Self::Month, Self::Day, Self::Hour];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

/// Four already-resolved pillars, year to hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chart {
    pub pillars: [Pillar; 4],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealedStems {
    pub position: PillarPosition,
    pub branch: Branch,
    pub entries: Vec<HiddenStemEntry>,
}

impl Chart {
    pub fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            pillars: [year, month, day, hour],
        }
    }

    pub fn pillar(&self, position: PillarPosition) -> Pillar {
        self.pillars[position as usize]
    }

    pub fn day_master(&self) -> Stem {
        self.pillar(PillarPosition::Day).stem
    }

    pub fn month_branch(&self) -> Branch {
        self.pillar(PillarPosition::Month).branch
    }

    pub fn stems(&self) -> [Stem; 4] {
        self.pillars.map(|p| p.stem)
    }

    pub fn branches(&self) -> [Branch; 4] {
        self.pillars.map(|p| p.branch)
    }

    /// Raw distribution: one count per stem and per branch, 8 in total.
    pub fn element_distribution(&self) -> ElementCounts {
        let mut counts = ElementCounts::default();
        for p in &self.pillars {
            counts[p.stem.element().index()] += 1;
            counts[p.branch.element().index()] += 1;
        }
        counts
    }

    /// Group counts over the three visible non-day stems and the MAIN stem of
    /// every branch.
    pub fn ten_god_counts(&self) -> TenGodCounts {
        let dm = self.day_master();
        let mut counts = TenGodCounts::default();
        for pos in PillarPosition::iter() {
            let p = self.pillar(pos);
            if pos != PillarPosition::Day {
                counts.add(ten_god(dm, p.stem).group());
            }
            counts.add(ten_god(dm, main_stem(p.branch)).group());
        }
        counts
    }

    pub fn day_master_roots(&self) -> [(PillarPosition, RootStrength); 4] {
        let dm = self.day_master();
        PillarPosition::ALL.map(|pos| (pos, root_strength(dm, self.pillar(pos).branch)))
    }

    /// Revealed hidden stems per branch; branches with nothing revealed are skipped.
    pub fn revealed(&self) -> Vec<RevealedStems> {
        let visible = self.stems();
        PillarPosition::ALL
            .iter()
            .filter_map(|&position| {
                let branch = self.pillar(position).branch;
                let entries = relations::tuchul(branch, &visible);
                (!entries.is_empty()).then_some(RevealedStems {
                    position,
                    branch,
                    entries,
                })
            })
            .collect()
    }

    pub fn relations(&self) -> Vec<RelationHit> {
        relations::scan(&self.branches())
    }
}

impl std::fmt::Display for Chart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [y, m, d, h] = self.pillars;
        write!(f, "{} {} {} {}", y, m, d, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::Element;
    use crate::ten_gods::TenGodGroup;

    fn sample() -> Chart {
        // 甲子 丙寅 甲午 丙寅
        Chart::new(
            Pillar::new(Stem::Gap, Branch::Ja),
            Pillar::new(Stem::Byeong, Branch::In),
            Pillar::new(Stem::Gap, Branch::O),
            Pillar::new(Stem::Byeong, Branch::In),
        )
    }

    #[test]
    fn distribution_counts_eight_items() {
        let counts = sample().element_distribution();
        assert_eq!(counts.iter().sum::<u32>(), 8);
        assert_eq!(counts[Element::Wood.index()], 4);
        assert_eq!(counts[Element::Fire.index()], 3);
        assert_eq!(counts[Element::Water.index()], 1);
    }

    #[test]
    fn ten_god_counts_cover_seven_items() {
        let counts = sample().ten_god_counts();
        assert_eq!(counts.total(), 7);
        // 甲 year stem, 寅 twice → companion
        assert_eq!(counts.get(TenGodGroup::Companion), 3);
        // 丙 twice + 午 (丁) → output
        assert_eq!(counts.get(TenGodGroup::Output), 3);
        assert_eq!(counts.get(TenGodGroup::Resource), 1);
    }

    #[test]
    fn revealed_keeps_branch_order() {
        let revealed = sample().revealed();
        let month = revealed
            .iter()
            .find(|r| r.position == PillarPosition::Month)
            .unwrap();
        let stems: Vec<Stem> = month.entries.iter().map(|e| e.stem).collect();
        assert_eq!(stems, vec![Stem::Byeong, Stem::Gap]);
    }

    #[test]
    fn day_master_roots() {
        let roots = sample().day_master_roots();
        assert_eq!(roots[1].1, RootStrength::Strong);
        assert_eq!(roots[0].1, RootStrength::None);
    }
}
