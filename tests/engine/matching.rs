//! Matcher behavior through the public API.

use gridloom_engine::{Matcher, Position};
use gridloom_foundation::{Pattern, WILDCARD};

#[test]
fn deterministic_tie_break_prefers_smaller_y_then_x() {
    // Two disjoint all-zero 2x2 windows; (2, 0) beats (0, 3).
    let mut target = Pattern::filled("g", 6, 6, 1).unwrap();
    for (x, y) in [(2, 0), (3, 0), (2, 1), (3, 1), (0, 3), (1, 3), (0, 4), (1, 4)] {
        target.set(x, y, 0);
    }
    let template = Pattern::filled("t", 2, 2, WILDCARD).unwrap();
    let zeros = Pattern::filled("z", 2, 2, 0).unwrap();

    // The wildcard template matches everywhere, so the origin wins.
    assert_eq!(Matcher::find(&template, &target, 1), Some(Position::new(0, 0)));
    // The concrete template only matches the two carved windows.
    assert_eq!(Matcher::find(&zeros, &target, 1), Some(Position::new(2, 0)));
}

#[test]
fn repeated_finds_are_identical() {
    let mut target = Pattern::filled("g", 8, 8, 0).unwrap();
    target.set(5, 3, 2);
    let template = Pattern::from_rows("t", &[vec![2]]).unwrap();

    let first = Matcher::find(&template, &target, 1);
    for _ in 0..10 {
        assert_eq!(Matcher::find(&template, &target, 1), first);
    }
}

#[test]
fn wildcards_in_the_target_grid_also_match() {
    // Target wildcards occur when rules run against authored patterns that
    // themselves contain unknowns.
    let target = Pattern::from_rows("g", &[vec![WILDCARD, 4]]).unwrap();
    let template = Pattern::from_rows("t", &[vec![9, 4]]).unwrap();
    assert!(Matcher::is_match(&template, &target, 0, 0));
}

#[test]
fn stride_quantizes_candidate_offsets() {
    let mut target = Pattern::filled("g", 9, 9, 0).unwrap();
    target.set(3, 6, 1);
    let template = Pattern::from_rows("t", &[vec![1]]).unwrap();

    // (3, 6) is on the stride-3 lattice but off the stride-2 lattice.
    assert_eq!(Matcher::find(&template, &target, 3), Some(Position::new(3, 6)));
    assert_eq!(Matcher::find(&template, &target, 2), None);
}

#[test]
fn template_equal_to_target_size_has_one_candidate() {
    let target = Pattern::from_rows("g", &[vec![1, 2], vec![3, 4]]).unwrap();
    let matching = Pattern::from_rows("t", &[vec![1, WILDCARD], vec![WILDCARD, 4]]).unwrap();
    let clashing = Pattern::from_rows("t", &[vec![2, WILDCARD], vec![WILDCARD, 4]]).unwrap();

    assert_eq!(Matcher::find(&matching, &target, 5), Some(Position::new(0, 0)));
    assert_eq!(Matcher::find(&clashing, &target, 5), None);
}
