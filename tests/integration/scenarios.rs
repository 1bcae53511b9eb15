//! End-to-end rewrite scenarios through the `gridloom` facade.

use gridloom::engine::RewriteEngine;
use gridloom::foundation::{Part, Pattern, Rule, RuleId, WILDCARD};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

#[test]
fn blanket_rewrite_covers_the_whole_grid() {
    // One 8x8 all-wildcard template at stride 8: a single application
    // repaints the entire target.
    let mut target = Pattern::filled("canvas", 8, 8, 0).unwrap();
    let template = Pattern::filled("t", 8, 8, WILDCARD).unwrap();
    let outcome = Pattern::filled("o", 8, 8, 1).unwrap();
    let rule = Rule::new("repaint", vec![Part::new("p", vec![template, outcome])]);

    let stats = RewriteEngine::new()
        .with_stride(8)
        .apply(&[rule], &mut target, &mut rng())
        .unwrap();

    assert_eq!(stats.application_count, 1);
    assert!(target.cells().iter().all(|&c| c == 1));
}

#[test]
fn sand_falls_until_it_lands() {
    // Classic falling-sand rule: a grain (1) above empty space (0) swaps
    // down one cell. Run to quiescence and the grain rests on the floor.
    let mut target = Pattern::from_rows(
        "world",
        &[vec![0, 1, 0], vec![0, 0, 0], vec![0, 0, 0]],
    )
    .unwrap();
    let template = Pattern::from_rows("t", &[vec![1], vec![0]]).unwrap();
    let outcome = Pattern::from_rows("o", &[vec![0], vec![1]]).unwrap();
    let fall = Rule::new("fall", vec![Part::new("p", vec![template, outcome])]);

    let stats = RewriteEngine::new()
        .apply(&[fall], &mut target, &mut rng())
        .unwrap();

    assert_eq!(stats.application_count, 2);
    assert_eq!(target.get(1, 0), Some(0));
    assert_eq!(target.get(1, 1), Some(0));
    assert_eq!(target.get(1, 2), Some(1));
}

#[test]
fn guard_gates_a_rewrite_on_distant_context() {
    // The fire rule only spreads while an ember (3) exists somewhere in
    // the grid; removing the ember stops it cold.
    let spread = Rule::new(
        "spread",
        vec![
            Part::new("ember", vec![Pattern::from_rows("et", &[vec![3]]).unwrap()]),
            Part::new(
                "burn",
                vec![
                    Pattern::from_rows("bt", &[vec![1]]).unwrap(),
                    Pattern::from_rows("bo", &[vec![2]]).unwrap(),
                ],
            ),
        ],
    );

    let mut with_ember = Pattern::from_rows("a", &[vec![1, 0, 3]]).unwrap();
    let stats = RewriteEngine::new()
        .apply(std::slice::from_ref(&spread), &mut with_ember, &mut rng())
        .unwrap();
    assert_eq!(stats.application_count, 1);
    assert_eq!(with_ember.get(0, 0), Some(2));

    let mut without_ember = Pattern::from_rows("b", &[vec![1, 0, 0]]).unwrap();
    let stats = RewriteEngine::new()
        .apply(&[spread], &mut without_ember, &mut rng())
        .unwrap();
    assert!(stats.is_quiescent());
    assert_eq!(without_ember.get(0, 0), Some(1));
}

#[test]
fn engine_runs_are_isolated() {
    // Two engines with different configurations over clones of the same
    // grid never observe each other.
    let rules = vec![Rule::new(
        "tick",
        vec![Part::new(
            "p",
            vec![
                Pattern::from_rows("t", &[vec![0]]).unwrap(),
                Pattern::from_rows("o", &[vec![1]]).unwrap(),
            ],
        )],
    )];

    let base = Pattern::filled("grid", 4, 4, 0).unwrap();
    let mut first = base.clone();
    let mut second = base.clone();

    let capped = RewriteEngine::new().with_application_limit(3);
    let uncapped = RewriteEngine::new();

    let a = capped.apply(&rules, &mut first, &mut rng()).unwrap();
    let b = uncapped.apply(&rules, &mut second, &mut rng()).unwrap();

    assert_eq!(a.application_count, 3);
    assert_eq!(a.groups_that_hit_limit, vec![RuleId::new("tick")]);
    assert_eq!(b.application_count, 16);
    assert!(b.groups_that_hit_limit.is_empty());
}

#[test]
fn stats_survive_an_entirely_idle_run() {
    let mut target = Pattern::filled("g", 4, 4, 7).unwrap();
    let rules = vec![Rule::new(
        "nothing",
        vec![Part::new(
            "p",
            vec![
                Pattern::from_rows("t", &[vec![0]]).unwrap(),
                Pattern::from_rows("o", &[vec![1]]).unwrap(),
            ],
        )],
    )];

    let stats = RewriteEngine::new()
        .apply(&rules, &mut target, &mut rng())
        .unwrap();

    assert!(stats.is_quiescent());
    assert_eq!(stats.failed_count, 1);
    assert_eq!(stats.groups_failed_count, 1);
    assert!(target.cells().iter().all(|&c| c == 7));
}
