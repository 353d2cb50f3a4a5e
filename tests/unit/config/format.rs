use super::*;

#[test]
fn parses_photo_position_and_box_letters() {
    let f: PageFormat = "tmde".parse().unwrap();
    assert!(f.photo_top);
    assert_eq!(f.boxes, vec!['m', 'd', 'e']);

    let f: PageFormat = "bs".parse().unwrap();
    assert!(!f.photo_top);
    assert_eq!(f.boxes, vec!['s']);
}

#[test]
fn underscore_reserves_a_blank_slot() {
    let f: PageFormat = "t_d".parse().unwrap();
    assert_eq!(f.boxes, vec!['_', 'd']);
}

#[test]
fn rejects_a_missing_photo_position() {
    assert!(matches!(
        "mde".parse::<PageFormat>(),
        Err(PhotocalError::Config(_))
    ));
    assert!(matches!(
        "".parse::<PageFormat>(),
        Err(PhotocalError::Config(_))
    ));
}

#[test]
fn rejects_an_empty_box_list() {
    assert!(matches!(
        "t".parse::<PageFormat>(),
        Err(PhotocalError::EmptyFormat)
    ));
    assert!(matches!(
        PageFormat::new(true, vec![]),
        Err(PhotocalError::EmptyFormat)
    ));
}

#[test]
fn rejects_punctuation_letters() {
    let err = "t-d".parse::<PageFormat>().unwrap_err();
    assert!(err.to_string().contains("'-'"), "{err}");
}

#[test]
fn display_roundtrips() {
    for s in ["tmde", "bs", "t_d", "bmmm"] {
        assert_eq!(s.parse::<PageFormat>().unwrap().to_string(), s);
    }
}
