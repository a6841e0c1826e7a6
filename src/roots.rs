use crate::tables::hidden::{hidden_stems, main_stem, HiddenRole};
use crate::tables::{Branch, Stem};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// How firmly a visible stem is rooted (통근) in a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum RootStrength {
    None,
    Weak,
    Strong,
}

/// Resolution order:
/// 1. the branch's MAIN stem → `Strong`
/// 2. its MIDDLE or RESIDUAL stem → `Weak`
/// 3. the opposite-polarity stem of the same element anywhere in the branch → `Weak`
/// 4. otherwise `None`
pub fn root_strength(stem: Stem, branch: Branch) -> RootStrength {
    if main_stem(branch) == stem {
        return RootStrength::Strong;
    }

    let entries = hidden_stems(branch);
    if entries
        .iter()
        .any(|e| e.stem == stem && matches!(e.role, HiddenRole::Middle | HiddenRole::Residual))
    {
        return RootStrength::Weak;
    }

    let counterpart = stem.counterpart();
    if entries.iter().any(|e| e.stem == counterpart) {
        return RootStrength::Weak;
    }

    RootStrength::None
}

pub fn has_root(stem: Stem, branch: Branch) -> bool {
    root_strength(stem, branch) != RootStrength::None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_examples() {
        assert_eq!(root_strength(Stem::Gap, Branch::In), RootStrength::Strong);
        assert_eq!(root_strength(Stem::Gap, Branch::Hae), RootStrength::Weak);
        assert_eq!(root_strength(Stem::Gap, Branch::Yu), RootStrength::None);
    }

    #[test]
    fn cross_polarity_root_is_weak() {
        // 乙 has no entry in 寅, but its counterpart 甲 is 寅's MAIN.
        assert_eq!(root_strength(Stem::Eul, Branch::In), RootStrength::Weak);
        // 丙 in 午: only 丁 (its counterpart) and 己 live there.
        assert_eq!(root_strength(Stem::Byeong, Branch::O), RootStrength::Weak);
        assert!(!has_root(Stem::Im, Branch::Myo));
    }
}
