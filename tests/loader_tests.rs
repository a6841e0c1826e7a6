use saju::error::SajuError;
use saju::scorer::loader::{load_candidates, load_candidates_from_file};
use saju::tables::Element;
use std::fs::File;
use std::io::{Cursor, Write};

#[test]
fn loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("names.csv");
    let mut f = File::create(&path).unwrap();
    writeln!(f, "label,char1,element1,char2,element2,char3,element3").unwrap();
    writeln!(f, "# comment rows are ignored").unwrap();
    writeln!(f, "민준,敏,Water,俊,Fire").unwrap();
    writeln!(f, "서연,瑞,金,娟,土,,").unwrap();
    writeln!(f, "지호,智,4,浩,water,鎬,metal").unwrap();
    drop(f);

    let names = load_candidates_from_file(&path).unwrap();
    assert_eq!(names.len(), 3);
    assert_eq!(names[1].label, "서연");
    assert_eq!(
        names[1].elements().collect::<Vec<_>>(),
        vec![Element::Metal, Element::Earth]
    );
    assert_eq!(names[2].characters.len(), 3);
    assert_eq!(names[2].characters[2].character, "鎬");
}

#[test]
fn unknown_elements_are_skipped() {
    let data = "label,c,e\nok,一,Wood\nbad,二,Plasma\n";
    let names = load_candidates(Cursor::new(data)).unwrap();
    assert_eq!(names.len(), 1);
    assert_eq!(names[0].label, "ok");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_candidates_from_file(dir.path().join("missing.csv")),
        Err(SajuError::Io(_))
    ));
}
