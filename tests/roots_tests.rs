use rstest::rstest;
use saju::roots::{has_root, root_strength, RootStrength};
use saju::tables::{hidden_stems, main_stem, Branch, Stem};

#[rstest]
#[case(Stem::Gap, Branch::In, RootStrength::Strong)]
#[case(Stem::Gap, Branch::Hae, RootStrength::Weak)]
#[case(Stem::Gap, Branch::Yu, RootStrength::None)]
#[case(Stem::Eul, Branch::In, RootStrength::Weak)] // 甲 counterpart is MAIN
#[case(Stem::Byeong, Branch::In, RootStrength::Weak)]
#[case(Stem::Jeong, Branch::O, RootStrength::Strong)]
#[case(Stem::Byeong, Branch::O, RootStrength::Weak)]
#[case(Stem::Im, Branch::Jin, RootStrength::Weak)] // 癸 MIDDLE via counterpart
#[case(Stem::Gye, Branch::Jin, RootStrength::Weak)]
#[case(Stem::Gyeong, Branch::Myo, RootStrength::None)]
fn root_cases(#[case] stem: Stem, #[case] branch: Branch, #[case] expected: RootStrength) {
    assert_eq!(root_strength(stem, branch), expected);
    assert_eq!(has_root(stem, branch), expected != RootStrength::None);
}

#[test]
fn main_stem_is_always_strong() {
    for b in Branch::ALL {
        assert_eq!(root_strength(main_stem(b), b), RootStrength::Strong, "{}", b);
    }
}

#[test]
fn unrelated_stems_have_no_root() {
    for b in Branch::ALL {
        let hidden = hidden_stems(b);
        for s in Stem::ALL {
            let related = hidden
                .iter()
                .any(|e| e.stem == s || e.stem == s.counterpart());
            if !related {
                assert_eq!(root_strength(s, b), RootStrength::None, "{} in {}", s, b);
            } else {
                assert!(has_root(s, b), "{} in {}", s, b);
            }
        }
    }
}

#[test]
fn strength_orders_none_weak_strong() {
    assert!(RootStrength::None < RootStrength::Weak);
    assert!(RootStrength::Weak < RootStrength::Strong);
}
