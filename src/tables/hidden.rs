//! Hidden-stem composition (지장간) of every branch.
//!
//! Entries are stored RESIDUAL → MIDDLE → MAIN and each branch's days sum to 30.
//! 午 and 亥 use the 21/9 split; some sources give 20/10 or a 23-day 壬 for 亥.

use super::branch::{Branch, BRANCH_COUNT};
use super::stem::Stem;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Role of a hidden stem inside its branch, ordered weakest first so that
/// `Ord` matches dominance (MAIN > MIDDLE > RESIDUAL).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum HiddenRole {
    Residual,
    Middle,
    Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HiddenStemEntry {
    pub stem: Stem,
    pub role: HiddenRole,
    pub days: u8,
}

pub const BRANCH_DAYS: u32 = 30;

const fn entry(stem: Stem, role: HiddenRole, days: u8) -> HiddenStemEntry {
    HiddenStemEntry { stem, role, days }
}

use HiddenRole::{Main, Middle, Residual};
use Stem::*;

static JA: [HiddenStemEntry; 1] = [entry(Gye, Main, 30)];
static CHUK: [HiddenStemEntry; 3] = [entry(Gye, Residual, 9), entry(Sin, Middle, 3), entry(Gi, Main, 18)];
static IN: [HiddenStemEntry; 3] = [entry(Mu, Residual, 7), entry(Byeong, Middle, 7), entry(Gap, Main, 16)];
static MYO: [HiddenStemEntry; 1] = [entry(Eul, Main, 30)];
static JIN: [HiddenStemEntry; 3] = [entry(Eul, Residual, 9), entry(Gye, Middle, 3), entry(Mu, Main, 18)];
static SA: [HiddenStemEntry; 3] = [entry(Mu, Residual, 7), entry(Gyeong, Middle, 7), entry(Byeong, Main, 16)];
static O: [HiddenStemEntry; 2] = [entry(Gi, Residual, 9), entry(Jeong, Main, 21)];
static MI: [HiddenStemEntry; 3] = [entry(Jeong, Residual, 9), entry(Eul, Middle, 3), entry(Gi, Main, 18)];
static SHIN: [HiddenStemEntry; 3] = [entry(Mu, Residual, 7), entry(Im, Middle, 7), entry(Gyeong, Main, 16)];
static YU: [HiddenStemEntry; 1] = [entry(Sin, Main, 30)];
static SUL: [HiddenStemEntry; 3] = [entry(Sin, Residual, 9), entry(Jeong, Middle, 3), entry(Mu, Main, 18)];
static HAE: [HiddenStemEntry; 2] = [entry(Gap, Residual, 9), entry(Im, Main, 21)];

static TABLE: [&[HiddenStemEntry]; BRANCH_COUNT] = [
    &JA, &CHUK, &IN, &MYO, &JIN, &SA, &O, &MI, &SHIN, &YU, &SUL, &HAE,
];

pub fn hidden_stems(branch: Branch) -> &'static [HiddenStemEntry] {
    TABLE[branch.index()]
}

/// Code-level lookup for callers working with raw cycle offsets.
pub fn hidden_stems_by_code(code: i64) -> &'static [HiddenStemEntry] {
    hidden_stems(Branch::from_offset(code))
}

pub fn entry_with_role(branch: Branch, role: HiddenRole) -> Option<HiddenStemEntry> {
    hidden_stems(branch).iter().copied().find(|e| e.role == role)
}

pub fn main_stem(branch: Branch) -> Stem {
    // Every row ends with its MAIN entry.
    let entries = hidden_stems(branch);
    entries[entries.len() - 1].stem
}

pub fn middle_stem(branch: Branch) -> Option<Stem> {
    entry_with_role(branch, HiddenRole::Middle).map(|e| e.stem)
}

pub fn residual_stem(branch: Branch) -> Option<Stem> {
    entry_with_role(branch, HiddenRole::Residual).map(|e| e.stem)
}
