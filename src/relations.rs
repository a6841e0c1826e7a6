//! Relation classifier: pairwise and triple relations between branches, hidden
//! (stem-level) combinations and revealed hidden stems (투출).
//!
//! Every relation is recomputed from the canonical tables and is symmetric in
//! argument order. "No relation" is `false`, `None` or an empty `Vec`.

use crate::tables::element::Element;
use crate::tables::hidden::{entry_with_role, hidden_stems, HiddenRole, HiddenStemEntry};
use crate::tables::stem::{stem_combination, Stem};
use crate::tables::Branch;
use itertools::Itertools;
use serde::Serialize;
use strum_macros::Display;

use Branch::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize)]
pub enum BranchRelation {
    Clash,
    SixCombination,
    TriCombination,
    DirectionalCombination,
    HalfCombination,
    Resentment,
    HiddenCombination,
    Punishment,
    Break,
    Harm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HalfKind {
    GenerativePeak,
    PeakStorage,
    GenerativeStorage,
}

impl HalfKind {
    /// Halves that keep the peak branch are the strong ones.
    pub fn is_strong(self) -> bool {
        !matches!(self, HalfKind::GenerativeStorage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HalfCombination {
    pub kind: HalfKind,
    pub element: Element,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum PunishmentKind {
    /// 寅巳申 (무은지형)
    Ungrateful,
    /// 丑戌未 (지세지형)
    Bullying,
    /// 子卯 (무례지형)
    Rude,
    /// 辰辰, 午午, 酉酉, 亥亥 (자형)
    SelfInflicted,
}

/// A stem-level combination hidden inside two branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HiddenCombination {
    pub first: HiddenStemEntry,
    pub second: HiddenStemEntry,
    pub element: Element,
}

/// One relation found among a set of pillars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationHit {
    pub relation: BranchRelation,
    /// Pillar positions (0 = year .. 3 = hour) of the participating branches.
    pub positions: Vec<usize>,
    pub branches: Vec<Branch>,
    pub element: Option<Element>,
}

impl std::fmt::Display for RelationHit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: String = self.branches.iter().map(|b| b.hanja()).collect();
        match self.element {
            Some(e) => write!(f, "{} {} → {}", self.relation, joined, e),
            None => write!(f, "{} {}", self.relation, joined),
        }
    }
}

// --- FIXED TABLES ---

static SIX_COMBINATIONS: [(Branch, Branch, Element); 6] = [
    (Ja, Chuk, Element::Earth),
    (In, Hae, Element::Wood),
    (Myo, Sul, Element::Fire),
    (Jin, Yu, Element::Metal),
    (Sa, Shin, Element::Water),
    (O, Mi, Element::Fire),
];

/// Seasonal trios: (generative, peak, storage, element).
static SEASONAL_TRIOS: [(Branch, Branch, Branch, Element); 4] = [
    (Shin, Ja, Jin, Element::Water),
    (Hae, Myo, Mi, Element::Wood),
    (In, O, Sul, Element::Fire),
    (Sa, Yu, Chuk, Element::Metal),
];

static DIRECTIONAL_TRIOS: [(Branch, Branch, Branch, Element); 4] = [
    (In, Myo, Jin, Element::Wood),
    (Sa, O, Mi, Element::Fire),
    (Shin, Yu, Sul, Element::Metal),
    (Hae, Ja, Chuk, Element::Water),
];

static RESENTMENT_PAIRS: [(Branch, Branch); 6] = [
    (Ja, Mi),
    (Chuk, O),
    (In, Yu),
    (Myo, Shin),
    (Jin, Hae),
    (Sa, Sul),
];

static BREAK_PAIRS: [(Branch, Branch); 6] = [
    (Ja, Yu),
    (Chuk, Jin),
    (In, Hae),
    (Myo, O),
    (Sa, Shin),
    (Mi, Sul),
];

static HARM_PAIRS: [(Branch, Branch); 6] = [
    (Ja, Mi),
    (Chuk, O),
    (In, Sa),
    (Myo, Jin),
    (Shin, Hae),
    (Yu, Sul),
];

/// Hidden combinations as (branch, role, branch, role). All rows pair MAIN stems
/// except 午申, where 午's MAIN 丁 meets 申's MIDDLE 壬.
static HIDDEN_COMBINATIONS: [(Branch, HiddenRole, Branch, HiddenRole); 6] = [
    (Ja, HiddenRole::Main, Sul, HiddenRole::Main),
    (Chuk, HiddenRole::Main, In, HiddenRole::Main),
    (In, HiddenRole::Main, Mi, HiddenRole::Main),
    (Myo, HiddenRole::Main, Shin, HiddenRole::Main),
    (O, HiddenRole::Main, Hae, HiddenRole::Main),
    (O, HiddenRole::Main, Shin, HiddenRole::Middle),
];

static UNGRATEFUL: [Branch; 3] = [In, Sa, Shin];
static BULLYING: [Branch; 3] = [Chuk, Sul, Mi];
static SELF_PUNISHING: [Branch; 4] = [Jin, O, Yu, Hae];

fn same_pair(a: Branch, b: Branch, pair: (Branch, Branch)) -> bool {
    (a, b) == pair || (b, a) == pair
}

fn sorted3(a: Branch, b: Branch, c: Branch) -> [Branch; 3] {
    let mut v = [a, b, c];
    v.sort();
    v
}

// --- PAIR RELATIONS ---

pub fn is_clash(a: Branch, b: Branch) -> bool {
    b == a.offset(6)
}

pub fn six_combination(a: Branch, b: Branch) -> Option<Element> {
    SIX_COMBINATIONS
        .iter()
        .find(|&&(x, y, _)| same_pair(a, b, (x, y)))
        .map(|&(_, _, e)| e)
}

pub fn is_six_combination(a: Branch, b: Branch) -> bool {
    six_combination(a, b).is_some()
}

pub fn half_combination(a: Branch, b: Branch) -> Option<HalfCombination> {
    if a == b {
        return None;
    }
    for &(generative, peak, storage, element) in SEASONAL_TRIOS.iter() {
        let kind = if same_pair(a, b, (generative, peak)) {
            HalfKind::GenerativePeak
        } else if same_pair(a, b, (peak, storage)) {
            HalfKind::PeakStorage
        } else if same_pair(a, b, (generative, storage)) {
            HalfKind::GenerativeStorage
        } else {
            continue;
        };
        return Some(HalfCombination { kind, element });
    }
    None
}

pub fn is_resentment_pair(a: Branch, b: Branch) -> bool {
    RESENTMENT_PAIRS.iter().any(|&p| same_pair(a, b, p))
}

pub fn is_break(a: Branch, b: Branch) -> bool {
    BREAK_PAIRS.iter().any(|&p| same_pair(a, b, p))
}

pub fn is_harm(a: Branch, b: Branch) -> bool {
    HARM_PAIRS.iter().any(|&p| same_pair(a, b, p))
}

/// Pairwise punishment. Any two members of 寅巳申 or 丑戌未 count, as do 子卯
/// and a self-punishing branch meeting itself.
pub fn punishment(a: Branch, b: Branch) -> Option<PunishmentKind> {
    if a == b {
        return SELF_PUNISHING
            .contains(&a)
            .then_some(PunishmentKind::SelfInflicted);
    }
    if UNGRATEFUL.contains(&a) && UNGRATEFUL.contains(&b) {
        Some(PunishmentKind::Ungrateful)
    } else if BULLYING.contains(&a) && BULLYING.contains(&b) {
        Some(PunishmentKind::Bullying)
    } else if same_pair(a, b, (Ja, Myo)) {
        Some(PunishmentKind::Rude)
    } else {
        None
    }
}

/// Full three-branch punishment (삼형).
pub fn punishment_triple(a: Branch, b: Branch, c: Branch) -> Option<PunishmentKind> {
    let set = sorted3(a, b, c);
    let mut ungrateful = UNGRATEFUL;
    ungrateful.sort();
    let mut bullying = BULLYING;
    bullying.sort();
    if set == ungrateful {
        Some(PunishmentKind::Ungrateful)
    } else if set == bullying {
        Some(PunishmentKind::Bullying)
    } else {
        None
    }
}

pub fn hidden_combination(a: Branch, b: Branch) -> Option<HiddenCombination> {
    for &(x, rx, y, ry) in HIDDEN_COMBINATIONS.iter() {
        let (first_branch, first_role, second_branch, second_role) = if (a, b) == (x, y) {
            (x, rx, y, ry)
        } else if (b, a) == (x, y) {
            (y, ry, x, rx)
        } else {
            continue;
        };
        let first = entry_with_role(first_branch, first_role)?;
        let second = entry_with_role(second_branch, second_role)?;
        let element = stem_combination(first.stem, second.stem)?;
        return Some(HiddenCombination {
            first,
            second,
            element,
        });
    }
    None
}

pub fn is_hidden_combination(a: Branch, b: Branch) -> bool {
    hidden_combination(a, b).is_some()
}

// --- TRIPLE RELATIONS ---

/// Seasonal tri-combination. All three members must be present and distinct.
pub fn tri_combination(a: Branch, b: Branch, c: Branch) -> Option<Element> {
    let set = sorted3(a, b, c);
    SEASONAL_TRIOS
        .iter()
        .find(|&&(g, p, s, _)| sorted3(g, p, s) == set)
        .map(|&(_, _, _, e)| e)
}

pub fn directional_tri_combination(a: Branch, b: Branch, c: Branch) -> Option<Element> {
    let set = sorted3(a, b, c);
    DIRECTIONAL_TRIOS
        .iter()
        .find(|&&(x, y, z, _)| sorted3(x, y, z) == set)
        .map(|&(_, _, _, e)| e)
}

// --- REVEALED STEMS ---

/// Hidden entries of `branch` whose stem is visible in the chart, in stored
/// order (RESIDUAL → MIDDLE → MAIN).
pub fn tuchul(branch: Branch, visible: &[Stem]) -> Vec<HiddenStemEntry> {
    hidden_stems(branch)
        .iter()
        .filter(|e| visible.contains(&e.stem))
        .copied()
        .collect()
}

/// The revealed entry with the highest role (MAIN > MIDDLE > RESIDUAL).
pub fn dominant_revealed(branch: Branch, visible: &[Stem]) -> Option<HiddenStemEntry> {
    tuchul(branch, visible).into_iter().max_by_key(|e| e.role)
}

// --- CHART SCAN ---

/// Every pair relation among `branches`, then every triple relation. Pairs
/// are visited in position order and each pair reports its relations in
/// `BranchRelation` order.
pub fn scan(branches: &[Branch]) -> Vec<RelationHit> {
    let mut hits = Vec::new();

    for ((i, &a), (j, &b)) in branches.iter().enumerate().tuple_combinations() {
        let mut push = |relation: BranchRelation, element: Option<Element>| {
            hits.push(RelationHit {
                relation,
                positions: vec![i, j],
                branches: vec![a, b],
                element,
            });
        };

        if is_clash(a, b) {
            push(BranchRelation::Clash, None);
        }
        if let Some(e) = six_combination(a, b) {
            push(BranchRelation::SixCombination, Some(e));
        }
        if let Some(half) = half_combination(a, b) {
            push(BranchRelation::HalfCombination, Some(half.element));
        }
        if is_resentment_pair(a, b) {
            push(BranchRelation::Resentment, None);
        }
        if let Some(hidden) = hidden_combination(a, b) {
            push(BranchRelation::HiddenCombination, Some(hidden.element));
        }
        if punishment(a, b).is_some() {
            push(BranchRelation::Punishment, None);
        }
        if is_break(a, b) {
            push(BranchRelation::Break, None);
        }
        if is_harm(a, b) {
            push(BranchRelation::Harm, None);
        }
    }

    for ((i, &a), (j, &b), (k, &c)) in branches.iter().enumerate().tuple_combinations() {
        let mut push = |relation: BranchRelation, element: Option<Element>| {
            hits.push(RelationHit {
                relation,
                positions: vec![i, j, k],
                branches: vec![a, b, c],
                element,
            });
        };

        if let Some(e) = tri_combination(a, b, c) {
            push(BranchRelation::TriCombination, Some(e));
        }
        if let Some(e) = directional_tri_combination(a, b, c) {
            push(BranchRelation::DirectionalCombination, Some(e));
        }
        if punishment_triple(a, b, c).is_some() {
            push(BranchRelation::Punishment, None);
        }
    }

    hits
}
