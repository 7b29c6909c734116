use super::*;

#[test]
fn ghost_is_capped_at_the_limit() {
    let mut grid = vec![Tile::Number(3)];
    render_ghost(&mut grid, 100, 24);
    assert_eq!(grid.len(), 24);
    assert!(grid.iter().all(Tile::is_ghost));

    render_ghost(&mut grid, 5, 24);
    assert_eq!(grid, vec![Tile::Ghost; 5]);
}

#[test]
fn plan_pauses_after_every_shown_number() {
    let delay = Duration::from_millis(70);
    let steps: Vec<_> = RevealPlan::new(&[4, 8], 48, delay).collect();
    assert_eq!(
        steps,
        vec![
            RevealStep::Clear,
            RevealStep::Show(Tile::Number(4)),
            RevealStep::Pause(delay),
            RevealStep::Show(Tile::Number(8)),
            RevealStep::Pause(delay),
        ]
    );
}

#[test]
fn plan_ends_with_overflow_tile_when_cut_off() {
    let numbers: Vec<i64> = (1..=60).collect();
    let plan = RevealPlan::new(&numbers, 48, Duration::from_millis(70));
    assert_eq!((plan.shown(), plan.overflow()), (48, 12));

    let steps: Vec<_> = plan.collect();
    assert_eq!(steps.len(), 1 + 48 * 2 + 1);
    assert_eq!(steps.last(), Some(&RevealStep::Show(Tile::Overflow(12))));
}

#[test]
fn plan_walks_through_its_phases() {
    let mut plan = RevealPlan::new(&[1], 48, Duration::ZERO);
    assert_eq!(plan.phase(), RevealPhase::Idle);
    plan.next();
    assert!(matches!(plan.phase(), RevealPhase::Revealing { index: 0, .. }));
    plan.by_ref().for_each(drop);
    assert_eq!(plan.phase(), RevealPhase::Done);
    assert_eq!(plan.next(), None);
}

#[test]
fn empty_plan_only_clears() {
    let steps: Vec<_> = RevealPlan::new(&[], 48, Duration::ZERO).collect();
    assert_eq!(steps, vec![RevealStep::Clear]);
}

#[tokio::test(start_paused = true)]
async fn reveal_of_sixty_shows_forty_eight_and_a_summary() {
    let numbers: Vec<i64> = (1..=60).collect();
    let mut grid = vec![Tile::Ghost; 12];

    let summary = reveal(&mut grid, &numbers, &DrawSettings::default()).await;

    assert_eq!(summary, RevealSummary { shown: 48, overflow: 12 });
    assert_eq!(grid.len(), 49);
    let expected: Vec<Tile> = numbers[..48].iter().copied().map(Tile::Number).collect();
    assert_eq!(grid[..48], expected[..]);
    assert_eq!(grid[48].to_string(), "+12");
}

#[tokio::test(start_paused = true)]
async fn reveal_waits_the_fixed_delay_per_number() {
    let start = tokio::time::Instant::now();
    let mut grid = Vec::new();

    reveal(&mut grid, &[1, 2, 3], &DrawSettings::default()).await;

    assert_eq!(start.elapsed(), Duration::from_millis(3 * 70));
    assert_eq!(grid, vec![Tile::Number(1), Tile::Number(2), Tile::Number(3)]);
}

#[tokio::test(start_paused = true)]
async fn reveal_without_overflow_adds_no_summary() {
    let numbers: Vec<i64> = (1..=48).collect();
    let mut grid = Vec::new();
    let summary = reveal(&mut grid, &numbers, &DrawSettings::default()).await;
    assert_eq!(summary.overflow, 0);
    assert!(grid.iter().all(|tile| matches!(tile, Tile::Number(_))));
}
