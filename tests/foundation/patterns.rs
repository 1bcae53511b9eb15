//! Pattern construction and accessor behavior through the public API.

use gridloom_foundation::{Pattern, PatternId, WILDCARD};

#[test]
fn filled_and_from_rows_agree() {
    let filled = Pattern::filled("a", 3, 2, 5).unwrap();
    let rows = Pattern::from_rows("b", &[vec![5, 5, 5], vec![5, 5, 5]]).unwrap();
    assert!(filled.same_cells(&rows));
}

#[test]
fn wildcard_constant_is_negative_one() {
    assert_eq!(WILDCARD, -1);
    let p = Pattern::filled("p", 1, 1, WILDCARD).unwrap();
    assert_eq!(p.get(0, 0), Some(-1));
}

#[test]
fn with_id_replaces_only_the_id() {
    let p = Pattern::filled("old", 2, 2, 1).unwrap();
    let renamed = p.clone().with_id("new");
    assert_eq!(renamed.id(), &PatternId::new("new"));
    assert!(renamed.same_cells(&p));
}

#[test]
fn cell_mutation_preserves_shape() {
    let mut p = Pattern::filled("p", 4, 3, 0).unwrap();
    for y in 0..3 {
        for x in 0..4 {
            assert!(p.set(x, y, 2));
        }
    }
    assert!(p.validate().is_ok());
    assert_eq!(p.cells().len(), 12);
}

#[test]
fn debug_formats_compactly() {
    let p = Pattern::filled("target", 8, 8, 0).unwrap();
    assert_eq!(format!("{p:?}"), "Pattern(target 8x8)");
}
