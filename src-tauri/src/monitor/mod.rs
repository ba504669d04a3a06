use crate::haptics::{HapticFeedback, PulseIntensity};
use crate::safe_lock;
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct MonitorConfig {
    pub poll_interval: Duration,
    pub idle_threshold: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval: crate::constants::POLL_INTERVAL,
            idle_threshold: crate::constants::IDLE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleState {
    Active,
    Idle,
}

/// Watches the time since the last recorded mood and nudges the user once it
/// exceeds the idle threshold.
///
/// The clock starts at construction and is only ever advanced by
/// `record_activity`, so a launch with no logging at all goes idle too.
pub struct IdleMonitor {
    config: MonitorConfig,
    running: Arc<AtomicBool>,
    last_activity: Arc<Mutex<Instant>>,
    feedback: Arc<dyn HapticFeedback>,
}

impl IdleMonitor {
    pub fn new(feedback: Arc<dyn HapticFeedback>, config: MonitorConfig) -> Self {
        Self {
            config,
            running: Arc::new(AtomicBool::new(false)),
            last_activity: Arc::new(Mutex::new(Instant::now())),
            feedback,
        }
    }

    pub fn start(&self) -> thread::JoinHandle<()> {
        self.running.store(true, Ordering::SeqCst);

        let running = Arc::clone(&self.running);
        let last_activity = Arc::clone(&self.last_activity);
        let feedback = Arc::clone(&self.feedback);
        let config = self.config;

        thread::spawn(move || {
            while running.load(Ordering::SeqCst) {
                let idle = {
                    let last = safe_lock(&last_activity, "IdleMonitor clock");
                    last.elapsed() > config.idle_threshold
                };

                if idle {
                    // TODO: latch to one nudge per idle episode instead of
                    // one per tick
                    debug!("Idle threshold exceeded, sending nudge");
                    feedback.pulse(PulseIntensity::Heavy);
                }

                thread::sleep(config.poll_interval);
            }
        })
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Mark "now" as the most recent activity, returning the monitor to
    /// Active. Called after every successful append.
    pub fn record_activity(&self) {
        let mut last = safe_lock(&self.last_activity, "IdleMonitor clock");
        *last = Instant::now();
    }

    pub fn state(&self) -> IdleState {
        let last = safe_lock(&self.last_activity, "IdleMonitor clock");
        if last.elapsed() > self.config.idle_threshold {
            IdleState::Idle
        } else {
            IdleState::Active
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    struct CountingFeedback {
        pulses: AtomicUsize,
    }

    impl CountingFeedback {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                pulses: AtomicUsize::new(0),
            })
        }

        fn count(&self) -> usize {
            self.pulses.load(Ordering::SeqCst)
        }
    }

    impl HapticFeedback for CountingFeedback {
        fn pulse(&self, _intensity: PulseIntensity) {
            self.pulses.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn fast_config() -> MonitorConfig {
        MonitorConfig {
            poll_interval: Duration::from_millis(20),
            idle_threshold: Duration::from_millis(80),
        }
    }

    #[test]
    fn test_monitor_starts_and_stops() {
        let feedback = CountingFeedback::new();
        let monitor = IdleMonitor::new(feedback, fast_config());

        assert!(!monitor.is_running());

        let handle = monitor.start();
        assert!(monitor.is_running());

        thread::sleep(Duration::from_millis(50));

        monitor.stop();
        handle.join().unwrap();

        assert!(!monitor.is_running());
    }

    #[test]
    fn test_active_until_threshold_passes() {
        let feedback = CountingFeedback::new();
        let monitor = IdleMonitor::new(feedback, fast_config());

        assert_eq!(monitor.state(), IdleState::Active);
        thread::sleep(Duration::from_millis(150));
        assert_eq!(monitor.state(), IdleState::Idle);
    }

    #[test]
    fn test_record_activity_returns_to_active() {
        let feedback = CountingFeedback::new();
        let monitor = IdleMonitor::new(feedback, fast_config());

        thread::sleep(Duration::from_millis(150));
        assert_eq!(monitor.state(), IdleState::Idle);

        monitor.record_activity();
        assert_eq!(monitor.state(), IdleState::Active);
    }

    #[test]
    fn test_no_nudge_before_threshold() {
        let feedback = CountingFeedback::new();
        let monitor = IdleMonitor::new(
            Arc::clone(&feedback) as Arc<dyn HapticFeedback>,
            MonitorConfig {
                poll_interval: Duration::from_millis(20),
                idle_threshold: Duration::from_secs(60),
            },
        );

        let handle = monitor.start();
        thread::sleep(Duration::from_millis(100));
        monitor.stop();
        handle.join().unwrap();

        assert_eq!(feedback.count(), 0);
    }

    #[test]
    fn test_nudges_repeat_while_idle() {
        let feedback = CountingFeedback::new();
        let monitor =
            IdleMonitor::new(Arc::clone(&feedback) as Arc<dyn HapticFeedback>, fast_config());

        let handle = monitor.start();
        // 80ms threshold with 20ms polls: 300ms is enough for several nudges
        thread::sleep(Duration::from_millis(300));
        monitor.stop();
        handle.join().unwrap();

        assert!(
            feedback.count() >= 2,
            "expected repeated nudges while idle, got {}",
            feedback.count()
        );
    }

    #[test]
    fn test_record_activity_stops_nudges() {
        let feedback = CountingFeedback::new();
        let monitor = IdleMonitor::new(
            Arc::clone(&feedback) as Arc<dyn HapticFeedback>,
            MonitorConfig {
                poll_interval: Duration::from_millis(20),
                idle_threshold: Duration::from_millis(150),
            },
        );

        let handle = monitor.start();
        thread::sleep(Duration::from_millis(250));
        monitor.record_activity();
        // Let a tick that read the clock just before the reset finish
        thread::sleep(Duration::from_millis(30));
        let settled = feedback.count();
        assert!(settled >= 1, "expected nudges before activity, got {}", settled);

        // Well inside the fresh 150ms threshold, so no new nudges
        thread::sleep(Duration::from_millis(60));
        assert_eq!(feedback.count(), settled);

        monitor.stop();
        handle.join().unwrap();
    }
}
