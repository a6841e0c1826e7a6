#![allow(dead_code)]

use saju::chart::{Chart, Pillar};
use saju::scorer::{CandidateName, ChartProfile, FavorableElementSet, NameCharacter, StrengthLevel};
use saju::tables::{Branch, Element, Stem};

/// 甲子 丙寅 甲午 丙寅: a wood day master in a wood month.
pub fn sample_chart() -> Chart {
    Chart::new(
        Pillar::new(Stem::Gap, Branch::Ja),
        Pillar::new(Stem::Byeong, Branch::In),
        Pillar::new(Stem::Gap, Branch::O),
        Pillar::new(Stem::Byeong, Branch::In),
    )
}

/// 庚申 辛酉 甲申 庚午: a wood day master with no root at all.
pub fn rootless_chart() -> Chart {
    Chart::new(
        Pillar::new(Stem::Gyeong, Branch::Shin),
        Pillar::new(Stem::Sin, Branch::Yu),
        Pillar::new(Stem::Gap, Branch::Shin),
        Pillar::new(Stem::Gyeong, Branch::O),
    )
}

pub fn name(label: &str, elements: &[Element]) -> CandidateName {
    let characters = elements
        .iter()
        .enumerate()
        .map(|(i, e)| NameCharacter::new(format!("c{}", i), *e))
        .collect();
    CandidateName::new(label, characters)
}

pub fn favorable_water() -> FavorableElementSet {
    FavorableElementSet {
        yongshin: Some(Element::Water),
        heeshin: Some(Element::Metal),
        gishin: Some(Element::Fire),
        gushin: Some(Element::Wood),
    }
}

pub fn full_profile() -> ChartProfile {
    ChartProfile::builder()
        .favorable(favorable_water())
        .strength(StrengthLevel::Strong)
        .build()
}
