// Timing tests for the live demo sequencer
//
// All instants are synthetic offsets from one base instant, so nothing here
// sleeps.

use quinn_deck::demo::{
    default_script, DemoRunState, DemoSequencer, DemoStep, Phase, SequencerEvent, StepTone,
    GRACE_PERIOD,
};
use std::time::{Duration, Instant};

use SequencerEvent::{ArtifactRevealed, StepEntered};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn step(order: usize, dwell_ms: u64) -> DemoStep {
    DemoStep {
        order,
        label: "step",
        dwell: ms(dwell_ms),
        tone: StepTone::Progress,
    }
}

/// Cumulative entry times of the default script, in ms after start
const ENTRY_TIMES: [u64; 7] = [0, 1800, 3200, 4600, 6400, 7600, 9100];

#[test]
fn test_default_script_shape() {
    let script = default_script();
    assert_eq!(script.len(), 7);
    for (i, step) in script.iter().enumerate() {
        assert_eq!(step.order, i);
    }
    assert_eq!(script[3].tone, StepTone::Failure);
    assert_eq!(script[6].tone, StepTone::Success);
    assert_eq!(script[6].dwell, Duration::ZERO);
    assert_eq!(GRACE_PERIOD, ms(400));
}

#[test]
fn test_steps_are_entered_in_order_at_their_deadlines() {
    let t0 = Instant::now();
    let mut demo = DemoSequencer::default();
    assert!(demo.start(t0));
    assert_eq!(demo.phase(), Phase::Running);
    assert_eq!(demo.state().cursor, None);

    for (i, &at) in ENTRY_TIMES.iter().enumerate() {
        // one millisecond early nothing happens
        if at > 0 {
            assert!(demo.tick(t0 + ms(at - 1)).is_empty());
        }
        assert_eq!(demo.tick(t0 + ms(at)), vec![StepEntered(i)]);
        assert_eq!(demo.state().cursor, Some(i));
        assert!(!demo.state().artifact_revealed);
    }
}

#[test]
fn test_artifact_revealed_after_grace_following_last_step() {
    let t0 = Instant::now();
    let mut demo = DemoSequencer::default();
    demo.start(t0);
    demo.tick(t0 + ms(9100));
    assert_eq!(demo.state().cursor, Some(6));

    assert!(demo.tick(t0 + ms(9499)).is_empty());
    assert_eq!(demo.tick(t0 + ms(9500)), vec![ArtifactRevealed]);
    assert_eq!(
        demo.state(),
        DemoRunState {
            active: true,
            cursor: Some(6),
            artifact_revealed: true,
        }
    );
    assert_eq!(demo.phase(), Phase::Finished);
    assert!(!demo.has_pending());
}

#[test]
fn test_late_tick_catches_up_in_order() {
    let t0 = Instant::now();
    let mut demo = DemoSequencer::default();
    demo.start(t0);

    let events = demo.tick(t0 + ms(60_000));
    let mut expected: Vec<_> = (0..7).map(StepEntered).collect();
    expected.push(ArtifactRevealed);
    assert_eq!(events, expected);
}

#[test]
fn test_reset_mid_run_cancels_pending_steps() {
    let t0 = Instant::now();
    let mut demo = DemoSequencer::default();
    demo.start(t0);
    demo.tick(t0 + ms(2000));
    assert_eq!(demo.state().cursor, Some(1));

    demo.reset();
    assert_eq!(demo.state(), DemoRunState::default());
    assert_eq!(demo.phase(), Phase::Idle);
    assert!(!demo.has_pending());
    assert_eq!(demo.next_deadline(), None);

    assert!(demo.tick(t0 + ms(60_000)).is_empty());
    assert_eq!(demo.state(), DemoRunState::default());
}

#[test]
fn test_restart_after_reset_ignores_old_run() {
    let t0 = Instant::now();
    let mut demo = DemoSequencer::default();
    demo.start(t0);
    demo.tick(t0 + ms(2000));
    let old_token = demo.token();

    let t1 = t0 + ms(2000);
    assert!(demo.replay(t1));
    assert!(demo.token() > old_token);
    assert_eq!(demo.tick(t1), vec![StepEntered(0)]);

    // the old run would have entered step 2 at 3200
    assert!(demo.tick(t0 + ms(3300)).is_empty());
    assert_eq!(demo.state().cursor, Some(0));

    assert_eq!(demo.tick(t1 + ms(1800)), vec![StepEntered(1)]);
}

#[test]
fn test_start_while_active_is_ignored() {
    let t0 = Instant::now();
    let mut demo = DemoSequencer::default();
    assert!(demo.start(t0));
    let token = demo.token();
    demo.tick(t0);

    assert!(!demo.start(t0 + ms(500)));
    assert_eq!(demo.token(), token);
    assert_eq!(demo.state().cursor, Some(0));
    // no duplicate continuation was scheduled
    assert_eq!(demo.tick(t0 + ms(1800)), vec![StepEntered(1)]);
}

#[test]
fn test_start_after_finish_requires_reset() {
    let t0 = Instant::now();
    let mut demo = DemoSequencer::default();
    demo.start(t0);
    demo.tick(t0 + ms(10_000));
    assert_eq!(demo.phase(), Phase::Finished);

    assert!(!demo.start(t0 + ms(11_000)));
    assert_eq!(demo.phase(), Phase::Finished);

    assert!(demo.replay(t0 + ms(11_000)));
    assert_eq!(demo.phase(), Phase::Running);
    assert_eq!(demo.state().cursor, None);
    assert!(!demo.state().artifact_revealed);
}

#[test]
fn test_reset_before_any_run() {
    let mut demo = DemoSequencer::default();
    demo.reset();
    assert_eq!(demo.state(), DemoRunState::default());
    assert!(demo.tick(Instant::now()).is_empty());
}

#[test]
fn test_zero_dwell_step_falls_through() {
    let t0 = Instant::now();
    let mut demo = DemoSequencer::with_grace(vec![step(0, 100), step(1, 0), step(2, 100)], ms(50));
    demo.start(t0);

    assert_eq!(demo.tick(t0), vec![StepEntered(0)]);
    assert_eq!(demo.tick(t0 + ms(100)), vec![StepEntered(1), StepEntered(2)]);
    assert!(demo.tick(t0 + ms(249)).is_empty());
    assert_eq!(demo.tick(t0 + ms(250)), vec![ArtifactRevealed]);
}

#[test]
fn test_empty_script_reveals_after_grace() {
    let t0 = Instant::now();
    let mut demo = DemoSequencer::new(Vec::new());
    demo.start(t0);

    assert!(demo.tick(t0 + ms(399)).is_empty());
    assert_eq!(demo.tick(t0 + ms(400)), vec![ArtifactRevealed]);
    assert_eq!(demo.state().cursor, None);
    assert_eq!(demo.phase(), Phase::Finished);
}

#[test]
fn test_scaled_divides_dwells_and_grace() {
    let t0 = Instant::now();
    let mut demo = DemoSequencer::default().scaled(2.0);
    assert_eq!(demo.grace(), ms(200));
    assert_eq!(demo.script()[0].dwell, ms(900));

    demo.start(t0);
    demo.tick(t0);
    assert_eq!(demo.tick(t0 + ms(900)), vec![StepEntered(1)]);
}

#[test]
fn test_scaled_ignores_invalid_speed() {
    for speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let demo = DemoSequencer::default().scaled(speed);
        assert_eq!(demo.grace(), GRACE_PERIOD);
        assert_eq!(demo.script()[0].dwell, ms(1800));
    }
}

#[test]
fn test_scaled_keeps_pacing_when_durations_would_overflow() {
    let demo = DemoSequencer::default().scaled(1e-20);
    assert_eq!(demo.grace(), GRACE_PERIOD);
    let dwells: Vec<Duration> = demo.script().iter().map(|s| s.dwell).collect();
    let expected: Vec<Duration> = default_script().iter().map(|s| s.dwell).collect();
    assert_eq!(dwells, expected);
}

#[test]
fn test_next_deadline_tracks_live_continuation() {
    let t0 = Instant::now();
    let mut demo = DemoSequencer::default();
    assert_eq!(demo.next_deadline(), None);

    demo.start(t0);
    assert_eq!(demo.next_deadline(), Some(t0));
    demo.tick(t0);
    assert_eq!(demo.next_deadline(), Some(t0 + ms(1800)));
    assert!(demo.has_pending());
}
