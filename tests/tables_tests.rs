use rstest::rstest;
use saju::error::{IndexKind, SajuError};
use saju::tables::hidden::BRANCH_DAYS;
use saju::tables::stem::{is_stem_clash, stem_combination};
use saju::tables::{
    hidden_stems, hidden_stems_by_code, main_stem, middle_stem, residual_stem, Branch, BranchKind,
    Element, HiddenRole, Polarity, Stem,
};

#[test]
fn every_branch_holds_thirty_days() {
    for b in Branch::ALL {
        let days: u32 = hidden_stems(b).iter().map(|e| e.days as u32).sum();
        assert_eq!(days, BRANCH_DAYS, "branch {}", b);
    }
}

#[test]
fn roles_are_stored_residual_middle_main() {
    for b in Branch::ALL {
        let roles: Vec<HiddenRole> = hidden_stems(b).iter().map(|e| e.role).collect();
        assert!(roles.windows(2).all(|w| w[0] < w[1]), "branch {}", b);
        assert_eq!(roles.last(), Some(&HiddenRole::Main));
    }
}

#[rstest]
#[case(Branch::Ja, vec![Stem::Gye])]
#[case(Branch::Chuk, vec![Stem::Gye, Stem::Sin, Stem::Gi])]
#[case(Branch::In, vec![Stem::Mu, Stem::Byeong, Stem::Gap])]
#[case(Branch::Myo, vec![Stem::Eul])]
#[case(Branch::Jin, vec![Stem::Eul, Stem::Gye, Stem::Mu])]
#[case(Branch::Sa, vec![Stem::Mu, Stem::Gyeong, Stem::Byeong])]
#[case(Branch::O, vec![Stem::Gi, Stem::Jeong])]
#[case(Branch::Mi, vec![Stem::Jeong, Stem::Eul, Stem::Gi])]
#[case(Branch::Shin, vec![Stem::Mu, Stem::Im, Stem::Gyeong])]
#[case(Branch::Yu, vec![Stem::Sin])]
#[case(Branch::Sul, vec![Stem::Sin, Stem::Jeong, Stem::Mu])]
#[case(Branch::Hae, vec![Stem::Gap, Stem::Im])]
fn hidden_composition(#[case] branch: Branch, #[case] expected: Vec<Stem>) {
    let stems: Vec<Stem> = hidden_stems(branch).iter().map(|e| e.stem).collect();
    assert_eq!(stems, expected);
}

#[rstest]
#[case(Branch::In, Some(Stem::Byeong), Some(Stem::Mu))]
#[case(Branch::Hae, None, Some(Stem::Gap))]
#[case(Branch::Yu, None, None)]
fn role_projections(
    #[case] branch: Branch,
    #[case] middle: Option<Stem>,
    #[case] residual: Option<Stem>,
) {
    assert_eq!(middle_stem(branch), middle);
    assert_eq!(residual_stem(branch), residual);
}

#[test]
fn main_stem_follows_branch_element() {
    for b in Branch::ALL {
        assert_eq!(main_stem(b).element(), b.element(), "branch {}", b);
    }
}

#[rstest]
#[case(12, Branch::Ja)]
#[case(-1, Branch::Hae)]
#[case(25, Branch::Chuk)]
fn lookups_by_code_wrap(#[case] code: i64, #[case] expected: Branch) {
    assert_eq!(Branch::from_offset(code), expected);
    assert_eq!(hidden_stems_by_code(code), hidden_stems(expected));
}

#[test]
fn strict_codes_reject_out_of_range() {
    assert!(matches!(
        Branch::from_code(12),
        Err(SajuError::InvalidIndex { kind: IndexKind::Branch, value: 12 })
    ));
    assert!(matches!(
        Stem::from_code(10),
        Err(SajuError::InvalidIndex { kind: IndexKind::Stem, value: 10 })
    ));
    assert_eq!(Stem::from_code(9).unwrap(), Stem::Gye);
}

#[rstest]
#[case(Stem::Gap, Element::Wood, Polarity::Yang)]
#[case(Stem::Jeong, Element::Fire, Polarity::Yin)]
#[case(Stem::Mu, Element::Earth, Polarity::Yang)]
#[case(Stem::Sin, Element::Metal, Polarity::Yin)]
#[case(Stem::Im, Element::Water, Polarity::Yang)]
fn stem_attributes(#[case] stem: Stem, #[case] element: Element, #[case] polarity: Polarity) {
    assert_eq!(stem.element(), element);
    assert_eq!(stem.polarity(), polarity);
    assert_eq!(stem.counterpart().element(), element);
    assert_ne!(stem.counterpart().polarity(), polarity);
}

#[rstest]
#[case(Branch::Ja, BranchKind::Peak)]
#[case(Branch::Chuk, BranchKind::Storage)]
#[case(Branch::In, BranchKind::Generative)]
#[case(Branch::Hae, BranchKind::Generative)]
fn branch_kinds(#[case] branch: Branch, #[case] kind: BranchKind) {
    assert_eq!(branch.kind(), kind);
}

#[rstest]
#[case(Stem::Gap, Stem::Gi, Some(Element::Earth))]
#[case(Stem::Eul, Stem::Gyeong, Some(Element::Metal))]
#[case(Stem::Byeong, Stem::Sin, Some(Element::Water))]
#[case(Stem::Jeong, Stem::Im, Some(Element::Wood))]
#[case(Stem::Gye, Stem::Mu, Some(Element::Fire))]
#[case(Stem::Gap, Stem::Eul, None)]
fn stem_combinations(#[case] a: Stem, #[case] b: Stem, #[case] expected: Option<Element>) {
    assert_eq!(stem_combination(a, b), expected);
}

#[test]
fn stem_clashes_skip_earth() {
    assert!(is_stem_clash(Stem::Gap, Stem::Gyeong));
    assert!(is_stem_clash(Stem::Jeong, Stem::Gye));
    assert!(!is_stem_clash(Stem::Mu, Stem::Gap));
}
