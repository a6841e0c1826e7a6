//! Seasonal-need (조후) recommendations: for a day stem born in a month branch,
//! the stems that regulate temperature and moisture, most important first.

use super::branch::{Branch, BRANCH_COUNT};
use super::stem::{Stem, STEM_COUNT};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClimateNeed {
    pub primary: Stem,
    pub secondary: Vec<Stem>,
}

impl ClimateNeed {
    pub fn all(&self) -> impl Iterator<Item = Stem> + '_ {
        std::iter::once(self.primary).chain(self.secondary.iter().copied())
    }
}

// Rows: day stem 甲..癸. Columns: month branch 子..亥.
static TABLE: [[&str; BRANCH_COUNT]; STEM_COUNT] = [
    // 子     丑      寅      卯        辰      巳      午      未      申      酉      戌         亥
    ["丁庚丙", "丁庚丙", "丙癸", "庚丙丁戊己", "庚丁壬", "癸丁庚", "癸丁庚", "癸丁庚", "庚丁壬", "庚丁丙", "庚甲丁壬癸", "庚丁丙戊"],
    ["丙", "丙", "丙癸", "丙癸", "癸丙戊", "癸", "癸丙", "癸丙", "丙癸己", "癸丙丁", "癸辛", "丙戊"],
    ["壬戊己", "壬甲", "壬庚", "壬己", "壬甲", "壬癸庚", "壬庚", "壬庚", "壬戊", "壬癸", "甲壬", "甲戊庚壬"],
    ["甲庚", "甲庚", "甲庚", "庚甲", "甲庚", "甲庚", "壬庚癸", "甲壬庚", "甲庚丙戊", "甲庚丙戊", "甲庚戊", "甲庚"],
    ["丙甲", "丙甲", "丙甲癸", "丙甲癸", "甲丙癸", "甲丙癸", "壬甲丙", "癸丙甲", "丙癸甲", "丙癸", "甲丙癸", "甲丙"],
    ["丙甲戊", "丙甲戊", "丙庚甲", "甲癸丙", "丙癸甲", "癸丙", "癸丙", "癸丙", "丙癸", "丙癸", "甲丙癸", "丙甲戊"],
    ["丁甲丙", "丙丁甲", "戊甲壬丙丁", "丁甲庚丙", "甲丁壬癸", "壬戊丙丁", "壬癸", "丁甲", "丁甲", "丁甲丙", "甲壬", "丁丙"],
    ["丙戊壬甲", "丙壬戊己", "己壬庚", "壬甲", "壬甲", "壬甲癸", "壬己癸", "壬庚甲", "壬甲戊", "壬甲", "壬甲", "壬丙"],
    ["戊丙", "丙丁甲", "庚丙戊", "戊辛庚", "甲庚", "壬辛庚癸", "癸庚辛", "辛甲", "戊丁", "甲庚", "甲丙", "戊丙庚"],
    ["丙辛", "丙丁", "辛丙", "庚辛", "丙辛甲", "辛", "庚辛壬癸", "庚辛壬癸", "丁", "辛丙", "辛甲壬癸", "庚辛戊丁"],
];

pub fn recommend(day_stem: Stem, month_branch: Branch) -> ClimateNeed {
    let mut stems = TABLE[day_stem.index()][month_branch.index()]
        .chars()
        .filter_map(Stem::from_hanja);
    // Every cell holds at least one stem.
    let primary = stems.next().unwrap_or(day_stem);
    ClimateNeed {
        primary,
        secondary: stems.collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cell_parses_fully() {
        for row in TABLE.iter() {
            for cell in row.iter() {
                assert!(!cell.is_empty());
                assert!(cell.chars().all(|c| Stem::from_hanja(c).is_some()), "{}", cell);
            }
        }
    }

    #[test]
    fn winter_wood_wants_fire() {
        let need = recommend(Stem::Gap, Branch::Ja);
        assert_eq!(need.primary, Stem::Jeong);
        assert_eq!(need.secondary, vec![Stem::Gyeong, Stem::Byeong]);
    }

    #[test]
    fn summer_water_wants_metal_and_water() {
        let need = recommend(Stem::Gye, Branch::O);
        assert_eq!(need.primary, Stem::Gyeong);
        assert_eq!(need.all().count(), 4);
    }
}
