//! Canonical, immutable lookup tables: elements, stems, branches, hidden-stem
//! compositions and seasonal needs.

pub mod branch;
pub mod climate;
pub mod element;
pub mod hidden;
pub mod stem;

pub use self::branch::{Branch, BranchKind, BRANCH_COUNT};
pub use self::element::{Element, ElementCounts, Polarity, ELEMENT_COUNT};
pub use self::hidden::{
    entry_with_role, hidden_stems, hidden_stems_by_code, main_stem, middle_stem, residual_stem,
    HiddenRole, HiddenStemEntry,
};
pub use self::stem::{Stem, STEM_COUNT};
