//! Property tests for the timer engine state machine.

use pomodoro_core::{Event, IntervalDurations, Mode, TimerEngine, TimerState, TimerView};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Start,
    Pause,
    Toggle,
    Reset,
    Tick,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => Just(Op::Start),
        1 => Just(Op::Pause),
        1 => Just(Op::Toggle),
        1 => Just(Op::Reset),
        5 => Just(Op::Tick),
    ]
}

fn durations() -> impl Strategy<Value = IntervalDurations> {
    (1u64..120, 1u64..60).prop_map(|(w, b)| IntervalDurations::new(w, b).unwrap())
}

fn apply(engine: &mut TimerEngine, op: Op) -> Option<Event> {
    match op {
        Op::Start => engine.start(),
        Op::Pause => engine.pause(),
        Op::Toggle => engine.toggle(),
        Op::Reset => engine.reset(),
        Op::Tick => engine.tick(),
    }
}

proptest! {
    #[test]
    fn remaining_stays_within_current_interval(
        d in durations(),
        ops in prop::collection::vec(op(), 0..400),
    ) {
        let mut engine = TimerEngine::new(d);
        for op in ops {
            apply(&mut engine, op);
            prop_assert!(engine.remaining_secs() <= engine.current_duration_secs());
            let progress = engine.progress();
            prop_assert!((0.0..=1.0).contains(&progress));
        }
    }

    #[test]
    fn ticks_never_increase_remaining_within_an_interval(
        d in durations(),
        ticks in 0usize..300,
    ) {
        let mut engine = TimerEngine::new(d);
        engine.start();
        let mut last = engine.remaining_secs();
        for _ in 0..ticks {
            if engine.tick().is_some() {
                // Interval boundary: the engine halted with a fresh duration.
                prop_assert!(!engine.is_running());
                prop_assert_eq!(engine.remaining_secs(), engine.current_duration_secs());
                engine.start();
            } else {
                prop_assert!(engine.remaining_secs() < last);
            }
            last = engine.remaining_secs();
        }
    }

    #[test]
    fn reset_always_restores_initial_state(
        d in durations(),
        ops in prop::collection::vec(op(), 0..200),
    ) {
        let mut engine = TimerEngine::new(d);
        for op in ops {
            apply(&mut engine, op);
        }
        prop_assert!(engine.reset().is_some());
        prop_assert_eq!(engine.state(), TimerState::Idle);
        prop_assert!(engine.is_work_mode());
        prop_assert_eq!(engine.remaining_secs(), d.work_secs());
    }

    #[test]
    fn ticks_after_pause_change_nothing(
        d in durations(),
        before in 0usize..50,
        after in 0usize..200,
    ) {
        let mut engine = TimerEngine::new(d);
        engine.start();
        for _ in 0..before {
            if engine.tick().is_some() {
                engine.start();
            }
        }
        engine.pause();
        let mode = engine.mode();
        let remaining = engine.remaining_secs();
        for _ in 0..after {
            prop_assert!(engine.tick().is_none());
        }
        prop_assert_eq!(engine.mode(), mode);
        prop_assert_eq!(engine.remaining_secs(), remaining);
    }

    #[test]
    fn second_start_is_a_noop(d in durations(), ops in prop::collection::vec(op(), 0..50)) {
        let mut engine = TimerEngine::new(d);
        for op in ops {
            apply(&mut engine, op);
        }
        engine.start();
        let remaining = engine.remaining_secs();
        prop_assert!(engine.start().is_none());
        prop_assert!(engine.is_running());
        prop_assert_eq!(engine.remaining_secs(), remaining);
    }

    #[test]
    fn completion_happens_exactly_at_zero(d in durations()) {
        let mut engine = TimerEngine::new(d);
        engine.start();
        for _ in 1..d.work_secs() {
            prop_assert!(engine.tick().is_none());
        }
        prop_assert_eq!(engine.remaining_secs(), 1);
        let completed = engine.tick();
        let is_interval_completed = matches!(
            completed,
            Some(Event::IntervalCompleted { completed: Mode::Work, next: Mode::Break, .. })
        );
        prop_assert!(is_interval_completed);
        prop_assert_eq!(engine.remaining_secs(), d.break_secs());
    }
}

#[test]
fn work_at_one_second_completes_into_break() {
    let mut engine = TimerEngine::new(IntervalDurations::new(1, 300).unwrap());
    engine.start();
    let event = engine.tick().expect("work interval should complete");
    assert_eq!(
        event.notice().map(|n| n.message.as_str()),
        Some("Time to take a break.")
    );
    assert!(!engine.is_work_mode());
    assert_eq!(engine.remaining_secs(), 300);
    assert!(!engine.is_running());
}

#[test]
fn break_at_one_second_completes_into_work() {
    let mut engine = TimerEngine::new(IntervalDurations::new(1500, 1).unwrap());
    engine.start();
    for _ in 0..1500 {
        engine.tick();
    }
    assert_eq!(engine.mode(), Mode::Break);
    assert_eq!(engine.remaining_secs(), 1);

    engine.start();
    let event = engine.tick().expect("break interval should complete");
    assert_eq!(
        event.notice().map(|n| n.message.as_str()),
        Some("Time to get back to work.")
    );
    assert!(engine.is_work_mode());
    assert_eq!(engine.remaining_secs(), 1500);
    assert!(!engine.is_running());
}

#[test]
fn default_engine_displays_twenty_five_minutes() {
    let engine = TimerEngine::default();
    assert_eq!(engine.remaining_secs(), 1500);
    assert_eq!(TimerView::from_engine(&engine).time_text, "25:00");
    assert_eq!(pomodoro_core::format_mm_ss(65), "01:05");
}
