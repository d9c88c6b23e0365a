//! Surface lifecycle transitions.

use consentry_render::SurfacePhase;

#[test]
fn full_cycle_round_trips() {
    let mut phase = SurfacePhase::default();
    assert!(!phase.is_shown());

    assert!(phase.begin_enter());
    assert!(phase.is_shown());
    assert!(phase.finish_enter());
    assert_eq!(phase, SurfacePhase::Visible);

    assert!(phase.begin_exit());
    assert!(phase.finish_exit());
    assert_eq!(phase, SurfacePhase::Hidden);
}

#[test]
fn double_show_is_a_no_op() {
    let mut phase = SurfacePhase::Hidden;
    assert!(phase.begin_enter());
    assert!(!phase.begin_enter());
    phase.finish_enter();
    assert!(!phase.begin_enter());
}

#[test]
fn exit_can_interrupt_an_entrance() {
    let mut phase = SurfacePhase::Hidden;
    phase.begin_enter();
    assert!(phase.begin_exit());
    assert_eq!(phase, SurfacePhase::Exiting);
}

#[test]
fn stale_completions_are_harmless() {
    // An auto-hide timer firing after a manual dismiss already finished
    // the exit must observe `false` and leave the phase alone.
    let mut phase = SurfacePhase::Hidden;
    assert!(!phase.finish_exit());
    assert!(!phase.finish_enter());
    assert!(!phase.begin_exit());
    assert_eq!(phase, SurfacePhase::Hidden);
}
