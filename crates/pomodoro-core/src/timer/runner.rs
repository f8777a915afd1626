//! Background tick driver for a shared [`TimerEngine`].
//!
//! One tokio task ticks the engine once per period while it is running.
//! The task re-checks the running flag after every wait and exits as soon
//! as the engine is idle; `pause` and `reset` also abort it outright, so a
//! quick pause/start never leaves two tasks ticking the same engine.
//!
//! Every state change is published on an unbounded channel for the view.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use super::engine::TimerEngine;
use crate::events::Event;

/// Default tick period: one second.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct TimerRunner {
    engine: Arc<Mutex<TimerEngine>>,
    events: mpsc::UnboundedSender<Event>,
    ticker: Mutex<Option<JoinHandle<()>>>,
    period: Duration,
}

impl TimerRunner {
    /// Wrap `engine` and return the receiving end of its event stream.
    pub fn new(engine: TimerEngine) -> (Self, mpsc::UnboundedReceiver<Event>) {
        Self::with_period(engine, TICK_PERIOD)
    }

    pub fn with_period(
        engine: TimerEngine,
        period: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<Event>) {
        let (events, rx) = mpsc::unbounded_channel();
        let runner = Self {
            engine: Arc::new(Mutex::new(engine)),
            events,
            ticker: Mutex::new(None),
            period,
        };
        (runner, rx)
    }

    /// Run a read-only query against the engine.
    pub fn with_engine<R>(&self, f: impl FnOnce(&TimerEngine) -> R) -> R {
        f(&lock(&self.engine))
    }

    /// True while a tick task is alive.
    pub fn is_ticking(&self) -> bool {
        lock(&self.ticker)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    // ── Commands ─────────────────────────────────────────────────────
    //
    // Must be called from within a tokio runtime.

    pub fn start(&self) -> Option<Event> {
        let event = lock(&self.engine).start()?;
        self.spawn_ticker();
        self.publish(event.clone());
        Some(event)
    }

    pub fn pause(&self) -> Option<Event> {
        let event = lock(&self.engine).pause()?;
        self.stop_ticker();
        self.publish(event.clone());
        Some(event)
    }

    pub fn toggle(&self) -> Option<Event> {
        if self.with_engine(TimerEngine::is_running) {
            self.pause()
        } else {
            self.start()
        }
    }

    pub fn reset(&self) -> Option<Event> {
        let event = lock(&self.engine).reset()?;
        self.stop_ticker();
        self.publish(event.clone());
        Some(event)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn publish(&self, event: Event) {
        if self.events.send(event).is_err() {
            debug!("event receiver dropped");
        }
    }

    fn spawn_ticker(&self) {
        let mut ticker = lock(&self.ticker);
        if let Some(old) = ticker.take() {
            old.abort();
        }
        let engine = Arc::clone(&self.engine);
        let events = self.events.clone();
        *ticker = Some(tokio::spawn(tick_loop(engine, events, self.period)));
    }

    fn stop_ticker(&self) {
        if let Some(handle) = lock(&self.ticker).take() {
            handle.abort();
        }
    }
}

impl Drop for TimerRunner {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

async fn tick_loop(
    engine: Arc<Mutex<TimerEngine>>,
    events: mpsc::UnboundedSender<Event>,
    period: Duration,
) {
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let (completed, snapshot) = {
            let mut engine = lock(&engine);
            if !engine.is_running() {
                debug!("engine idle, tick task exiting");
                return;
            }
            let completed = engine.tick();
            (completed, engine.snapshot())
        };

        let finished = completed.is_some();
        if let Some(event) = completed {
            if events.send(event).is_err() {
                warn!("interval completed with no listener");
            }
        }
        if events.send(snapshot).is_err() {
            debug!("event receiver dropped, tick task exiting");
            return;
        }
        if finished {
            return;
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
