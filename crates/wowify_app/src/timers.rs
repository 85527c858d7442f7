use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use wowify_core::{quotes, Msg};

/// Period of the color-cycling timer.
pub const COLOR_PERIOD: Duration = Duration::from_millis(25);
/// Period of the quote-rotation timer.
pub const QUOTE_PERIOD: Duration = Duration::from_secs(6);

/// Registry of the cosmetic timers tied to an in-flight job.
///
/// `start` inserts a cancellation flag per timer, `stop` trips and removes
/// them all; whichever path leaves the in-flight superstate reaches `stop`,
/// and dropping the set stops whatever is still live.
pub struct TimerSet {
    live: Vec<Arc<AtomicBool>>,
}

impl TimerSet {
    pub fn new() -> Self {
        Self { live: Vec::new() }
    }

    /// Number of timers that have been started and not yet stopped.
    pub fn live_count(&self) -> usize {
        self.live
            .iter()
            .filter(|flag| flag.load(Ordering::Relaxed))
            .count()
    }

    /// Launches the color and quote timers. An already-running pair is
    /// stopped first so ticks never double up.
    pub fn start(&mut self, msg_tx: mpsc::Sender<Msg>) {
        self.stop();
        self.live.push(spawn_ticker(COLOR_PERIOD, msg_tx.clone(), || {
            Msg::ColorTick
        }));
        self.live.push(spawn_ticker(QUOTE_PERIOD, msg_tx, || {
            Msg::QuoteRolled(quotes::random_quote(&mut rand::rng()))
        }));
    }

    /// Trips every live timer; a stopped set stays stopped.
    pub fn stop(&mut self) {
        for flag in self.live.drain(..) {
            flag.store(false, Ordering::Relaxed);
        }
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.stop();
    }
}

fn spawn_ticker(
    period: Duration,
    msg_tx: mpsc::Sender<Msg>,
    make_msg: impl Fn() -> Msg + Send + 'static,
) -> Arc<AtomicBool> {
    let run = Arc::new(AtomicBool::new(true));
    let flag = run.clone();
    thread::spawn(move || {
        while flag.load(Ordering::Relaxed) {
            thread::sleep(period);
            // Re-check after sleeping so a stop during the wait wins.
            if !flag.load(Ordering::Relaxed) {
                break;
            }
            if msg_tx.send(make_msg()).is_err() {
                break;
            }
        }
    });
    run
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn start_registers_both_timers() {
        let (tx, _rx) = mpsc::channel();
        let mut timers = TimerSet::new();
        timers.start(tx);
        assert_eq!(timers.live_count(), 2);
        timers.stop();
    }

    #[test]
    fn stop_is_idempotent() {
        let (tx, _rx) = mpsc::channel();
        let mut timers = TimerSet::new();
        timers.start(tx);

        timers.stop();
        assert_eq!(timers.live_count(), 0);
        timers.stop();
        assert_eq!(timers.live_count(), 0);
    }

    #[test]
    fn restart_never_leaves_extra_timers_behind() {
        let (tx, _rx) = mpsc::channel();
        let mut timers = TimerSet::new();
        timers.start(tx.clone());
        timers.start(tx);
        assert_eq!(timers.live_count(), 2);
        timers.stop();
        assert_eq!(timers.live_count(), 0);
    }

    #[test]
    fn color_timer_ticks_while_live() {
        let (tx, rx) = mpsc::channel();
        let mut timers = TimerSet::new();
        timers.start(tx);

        let msg = rx
            .recv_timeout(Duration::from_millis(500))
            .expect("a tick arrives");
        assert_eq!(msg, Msg::ColorTick);
        timers.stop();
    }

    #[test]
    fn stopped_timers_fall_silent() {
        let (tx, rx) = mpsc::channel();
        let mut timers = TimerSet::new();
        timers.start(tx);
        timers.stop();

        // Drain whatever was in flight when the stop landed, then verify
        // silence.
        std::thread::sleep(Duration::from_millis(100));
        while rx.try_recv().is_ok() {}
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    }
}
