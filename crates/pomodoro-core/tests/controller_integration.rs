//! Integration tests for the timer controller and its on-disk ledger.

use std::fs;

use pomodoro_core::{CompletionLedger, DateKey, Event, Mode, TimerController};
use tempfile::TempDir;

fn today() -> DateKey {
    DateKey::new(16, 10, 2026).unwrap()
}

fn alert_count(events: &[Event]) -> usize {
    events.iter().filter(|e| e.is_alert()).count()
}

#[test]
fn test_full_work_interval_is_counted_and_persisted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ledger.json");
    let mut ctl = TimerController::with_ledger_path(&path, today(), Vec::new());

    let snap = ctl.snapshot();
    assert_eq!(snap.timer.mode, Mode::Work);
    assert_eq!(snap.timer.remaining_secs, 1500);
    assert!(!snap.timer.running);
    assert_eq!(snap.today_count, 0);

    ctl.toggle_run();
    assert!(ctl.snapshot().timer.running);

    for _ in 0..1500 {
        ctl.on_tick();
    }

    let snap = ctl.snapshot();
    assert_eq!(snap.timer.remaining_secs, 0);
    assert!(!snap.timer.running);
    assert_eq!(snap.today_count, 1);
    assert_eq!(alert_count(ctl.sink()), 1);

    // Alert comes before the snapshot that shows the new count.
    let tail = &ctl.sink()[ctl.sink().len() - 2..];
    assert!(matches!(
        tail[0],
        Event::Alert { finished: Mode::Work, today_count: 1, .. }
    ));
    assert!(matches!(
        tail[1],
        Event::StateSnapshot { remaining_secs: 0, running: false, today_count: 1, .. }
    ));

    let on_disk = CompletionLedger::try_load(&path).unwrap();
    assert_eq!(on_disk.count_for(today()), 1);
}

#[test]
fn test_start_after_completion_is_ignored() {
    let dir = TempDir::new().unwrap();
    let mut ctl =
        TimerController::with_ledger_path(dir.path().join("ledger.json"), today(), Vec::new());
    ctl.toggle_run();
    for _ in 0..1500 {
        ctl.on_tick();
    }

    ctl.toggle_run();
    let snap = ctl.snapshot();
    assert!(!snap.timer.running);
    assert_eq!(snap.timer.remaining_secs, 0);

    // Ticking a finished interval never fires again.
    for _ in 0..10 {
        ctl.on_tick();
    }
    assert_eq!(alert_count(ctl.sink()), 1);
    assert_eq!(ctl.snapshot().today_count, 1);
}

#[test]
fn test_reset_mid_interval_refills() {
    let dir = TempDir::new().unwrap();
    let mut ctl =
        TimerController::with_ledger_path(dir.path().join("ledger.json"), today(), Vec::new());
    ctl.toggle_run();
    for _ in 0..10 {
        ctl.on_tick();
    }
    assert_eq!(ctl.snapshot().timer.remaining_secs, 1490);

    ctl.reset();
    let snap = ctl.snapshot();
    assert_eq!(snap.timer.remaining_secs, 1500);
    assert!(!snap.timer.running);
    assert_eq!(snap.timer.mode, Mode::Work);
}

#[test]
fn test_rest_interval_never_touches_ledger() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ledger.json");
    let mut ctl = TimerController::with_ledger_path(&path, today(), Vec::new());
    ctl.toggle_run();
    for _ in 0..42 {
        ctl.on_tick();
    }

    ctl.switch_mode(Mode::Rest);
    let snap = ctl.snapshot();
    assert_eq!(snap.timer.mode, Mode::Rest);
    assert_eq!(snap.timer.remaining_secs, 300);
    assert!(!snap.timer.running);

    ctl.toggle_run();
    for _ in 0..300 {
        ctl.on_tick();
    }
    assert_eq!(alert_count(ctl.sink()), 1);
    assert_eq!(ctl.snapshot().today_count, 0);
    assert!(!path.exists());
}

#[test]
fn test_corrupt_ledger_starts_fresh() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ledger.json");
    fs::write(&path, "{\"format\": \"pomodoro-ledger\", \"entries\": [tru").unwrap();

    let ctl = TimerController::with_ledger_path(&path, today(), Vec::new());
    assert_eq!(ctl.ledger().len(), 1);
    assert_eq!(ctl.snapshot().today_count, 0);
    assert_eq!(ctl.ledger().count_for(today()), 0);
}

#[test]
fn test_counts_survive_restart_and_other_days_are_kept() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ledger.json");
    let yesterday = DateKey::new(15, 10, 2026).unwrap();

    {
        let mut ctl = TimerController::with_ledger_path(&path, yesterday, Vec::new());
        ctl.toggle_run();
        for _ in 0..1500 {
            ctl.on_tick();
        }
    }

    for expected in 1..=2 {
        let mut ctl = TimerController::with_ledger_path(&path, today(), Vec::new());
        assert_eq!(ctl.snapshot().today_count, expected - 1);
        ctl.toggle_run();
        for _ in 0..1500 {
            ctl.on_tick();
        }
        assert_eq!(ctl.snapshot().today_count, expected);
    }

    let ledger = CompletionLedger::load(&path, today());
    assert_eq!(ledger.count_for(yesterday), 1);
    assert_eq!(ledger.count_for(today()), 2);
}

#[test]
fn test_exactly_one_alert_per_completed_interval() {
    let dir = TempDir::new().unwrap();
    let mut ctl =
        TimerController::with_ledger_path(dir.path().join("ledger.json"), today(), Vec::new());

    let cycle = [Mode::Work, Mode::Rest, Mode::Work, Mode::Rest, Mode::Work];
    for mode in cycle {
        ctl.switch_mode(mode);
        ctl.toggle_run();
        // Pause and resume midway; paused ticks must not count.
        for _ in 0..100 {
            ctl.on_tick();
        }
        ctl.toggle_run();
        for _ in 0..50 {
            ctl.on_tick();
        }
        ctl.toggle_run();
        for _ in 0..mode.duration_secs() {
            ctl.on_tick();
        }
    }

    assert_eq!(alert_count(ctl.sink()), cycle.len());
    assert_eq!(ctl.snapshot().today_count, 3);
    assert_eq!(ctl.ledger().count_for(today()), 3);
}

#[test]
fn test_closure_sink_receives_events() {
    let dir = TempDir::new().unwrap();
    let mut titles = Vec::new();
    {
        let mut ctl = TimerController::with_ledger_path(
            dir.path().join("ledger.json"),
            today(),
            |event: Event| {
                if let Event::StateSnapshot { mode, remaining_secs, running, .. } = event {
                    let snap = pomodoro_core::TimerSnapshot { mode, remaining_secs, running };
                    titles.push(snap.title());
                }
            },
        );
        ctl.toggle_run();
        ctl.on_tick();
    }
    assert_eq!(titles, vec!["25:00 - Pomodoro", "25:00 - Pomodoro", "24:59 - Pomodoro"]);
}
