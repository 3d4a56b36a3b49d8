//! Staged "still searching" feedback shown while a request is in flight.

use std::time::{Duration, Instant};

/// Stage messages rotated through while a search is in flight.
pub const DEFAULT_STAGE_MESSAGES: [&str; 6] = [
    "Initiating search...",
    "Scanning scholarship database...",
    "Fetching results...",
    "Analyzing eligibility criteria...",
    "Almost there...",
    "Finalizing results...",
];

/// How long each stage message stays on screen by default.
pub const DEFAULT_STAGE_INTERVAL: Duration = Duration::from_secs(9);

/// Cursor over a fixed sequence of progress messages.
///
/// While a search is loading the cursor advances one stage per interval,
/// clamped at the last message no matter how long the request takes. It only
/// runs between [`start`](Self::start) and [`stop`](Self::stop); stopping on
/// any exit path resets the stage to zero, so a tracker that is not loading
/// never reports a stale stage.
///
/// Stages are derived from elapsed wall-clock time rather than a timer side
/// effect, which keeps the tracker free of anything to tear down and lets
/// tests probe arbitrary instants.
#[derive(Debug, Clone)]
pub struct SearchProgress {
    messages: Vec<String>,
    interval: Duration,
    started_at: Option<Instant>,
}

impl SearchProgress {
    /// Create a tracker over `messages`, advancing every `interval`.
    ///
    /// An empty message list falls back to the defaults so the loading panel
    /// always has something to show.
    #[must_use]
    pub fn new(messages: Vec<String>, interval: Duration) -> Self {
        let messages = if messages.is_empty() {
            DEFAULT_STAGE_MESSAGES.map(String::from).to_vec()
        } else {
            messages
        };
        Self {
            messages,
            interval,
            started_at: None,
        }
    }

    /// Tracker with the default six messages and 9-second cadence.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(Vec::new(), DEFAULT_STAGE_INTERVAL)
    }

    /// Begin tracking a search that started at `now`.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Stop tracking and reset to the first stage.
    pub fn stop(&mut self) {
        self.started_at = None;
    }

    /// Whether a search is currently being tracked.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    /// Current stage index at `now`, clamped to the last message.
    #[must_use]
    pub fn stage(&self, now: Instant) -> usize {
        let Some(started_at) = self.started_at else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(started_at);
        let ticks = if self.interval.is_zero() {
            0
        } else {
            (elapsed.as_millis() / self.interval.as_millis()) as usize
        };
        ticks.min(self.messages.len() - 1)
    }

    /// Message for the current stage at `now`.
    #[must_use]
    pub fn message(&self, now: Instant) -> &str {
        &self.messages[self.stage(now)]
    }

    /// Fraction of the stage sequence completed, `(stage + 1) / len`.
    ///
    /// The loading gauge fills one slice per stage and holds at full width
    /// while the final stage waits on the service.
    #[must_use]
    pub fn ratio(&self, now: Instant) -> f64 {
        (self.stage(now) + 1) as f64 / self.messages.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> SearchProgress {
        SearchProgress::with_defaults()
    }

    #[test]
    fn inactive_tracker_sits_on_the_first_stage() {
        let progress = tracker();
        assert!(!progress.is_active());
        assert_eq!(progress.stage(Instant::now()), 0);
    }

    #[test]
    fn stage_advances_once_per_interval() {
        let mut progress = tracker();
        let start = Instant::now();
        progress.start(start);

        assert_eq!(progress.stage(start), 0);
        assert_eq!(progress.stage(start + Duration::from_secs(8)), 0);
        assert_eq!(progress.stage(start + Duration::from_secs(9)), 1);
        assert_eq!(progress.stage(start + Duration::from_secs(27)), 3);
    }

    #[test]
    fn stage_clamps_at_the_final_message() {
        let mut progress = tracker();
        let start = Instant::now();
        progress.start(start);

        // Ten intervals into a six-message sequence: still the sixth.
        let late = start + Duration::from_secs(90);
        assert_eq!(progress.stage(late), 5);
        assert_eq!(progress.message(late), "Finalizing results...");
        assert!((progress.ratio(late) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn stop_resets_the_stage() {
        let mut progress = tracker();
        let start = Instant::now();
        progress.start(start);
        assert!(progress.is_active());

        progress.stop();
        assert!(!progress.is_active());
        assert_eq!(progress.stage(start + Duration::from_secs(30)), 0);
    }

    #[test]
    fn custom_messages_drive_the_ratio() {
        let mut progress = SearchProgress::new(
            vec!["one".into(), "two".into()],
            Duration::from_secs(1),
        );
        let start = Instant::now();
        progress.start(start);

        assert!((progress.ratio(start) - 0.5).abs() < f64::EPSILON);
        assert_eq!(progress.message(start + Duration::from_secs(5)), "two");
    }

    #[test]
    fn empty_message_list_falls_back_to_defaults() {
        let progress = SearchProgress::new(Vec::new(), Duration::from_secs(9));
        assert_eq!(progress.message(Instant::now()), "Initiating search...");
    }
}
