use super::*;

#[test]
fn tiles_follow_clear_and_push_events() {
    let mut state = DrawScreenState::default();
    apply_event(&mut state, UiEvent::PushTile(Tile::Ghost));
    apply_event(&mut state, UiEvent::ClearResults);
    apply_event(&mut state, UiEvent::PushTile(Tile::Number(7)));
    apply_event(&mut state, UiEvent::PushTile(Tile::Overflow(3)));
    assert_eq!(state.tiles, vec![Tile::Number(7), Tile::Overflow(3)]);
}

#[test]
fn error_banner_is_shown_and_cleared() {
    let mut state = DrawScreenState::default();
    apply_event(&mut state, UiEvent::ShowError("min and max must differ".into()));
    assert_eq!(state.error.as_deref(), Some("min and max must differ"));
    apply_event(&mut state, UiEvent::ClearError);
    assert!(state.error.is_none());
}

#[test]
fn finished_draws_release_the_busy_flag() {
    let mut state = DrawScreenState::default();
    state.mark_queued();
    state.mark_queued();
    assert!(state.is_busy());

    apply_event(
        &mut state,
        UiEvent::DrawFinished(DrawFinish::Revealed {
            shown: 48,
            overflow: 12,
        }),
    );
    assert!(state.is_busy());
    assert_eq!(state.status, "Drew 60 number(s), showing 48");

    apply_event(&mut state, UiEvent::DrawFinished(DrawFinish::Cleared));
    assert!(!state.is_busy());
}

#[test]
fn stray_finish_does_not_underflow() {
    let mut state = DrawScreenState::default();
    apply_event(&mut state, UiEvent::DrawFinished(DrawFinish::Rejected));
    assert_eq!(state.in_flight, 0);
}

#[test]
fn rejected_draw_points_at_the_error_banner() {
    let mut state = DrawScreenState::default();
    state.mark_queued();
    apply_event(&mut state, UiEvent::DrawFinished(DrawFinish::Rejected));
    assert_eq!(state.status, "Input rejected; see the error above");
}

#[test]
fn worker_failure_resets_pending_work() {
    let mut state = DrawScreenState::default();
    state.mark_queued();
    apply_event(&mut state, UiEvent::WorkerFailed("runtime failed".into()));
    assert!(!state.is_busy());
    assert_eq!(state.status, "runtime failed");
}
