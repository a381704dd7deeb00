//! Suspicion scoring from heartbeat interval statistics.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use murre_types::TimeSource;
use tracing::debug;

/// Stddev floor in milliseconds, applied when an interval is converted
/// to a deviation. Keeps a near-zero-variance window from sending phi
/// to infinity on the first late packet.
const MIN_STD_DEVIATION_MS: f64 = 3.0;

/// Per-peer phi-accrual failure detector.
///
/// Feed it one [`heartbeat`] per message received from the monitored
/// peer; read [`phi`] or [`is_available`] at any time. The detector
/// learns the peer's cadence from a bounded window of recent heartbeat
/// intervals and scores the current silence against it.
///
/// Mutation is single-writer: `heartbeat` takes `&mut self`, reads take
/// `&self`. A detector shared across threads goes behind a lock, one
/// detector per monitored peer.
///
/// [`heartbeat`]: PhiAccrualDetector::heartbeat
/// [`phi`]: PhiAccrualDetector::phi
/// [`is_available`]: PhiAccrualDetector::is_available
pub struct PhiAccrualDetector {
    threshold: f64,
    jitter_ms: f64,
    last_timestamp_ms: Option<f64>,
    window: HeartbeatWindow,
    time: Arc<dyn TimeSource>,
}

impl PhiAccrualDetector {
    /// Scheduling slack in milliseconds added to the learned mean
    /// interval before scoring.
    pub const DEFAULT_JITTER_MS: f64 = 200.0;

    /// Most recent intervals retained for the cadence statistics.
    pub const MAX_WINDOW_SIZE: usize = 200;

    /// Create a detector that suspects the peer once phi reaches
    /// `threshold`, with the default jitter allowance.
    pub fn new(threshold: f64, time: Arc<dyn TimeSource>) -> Self {
        Self::with_jitter(threshold, Self::DEFAULT_JITTER_MS, time)
    }

    /// Create a detector with an explicit jitter allowance.
    pub fn with_jitter(threshold: f64, jitter_ms: f64, time: Arc<dyn TimeSource>) -> Self {
        Self {
            threshold,
            jitter_ms,
            last_timestamp_ms: None,
            window: HeartbeatWindow::new(Self::MAX_WINDOW_SIZE),
            time,
        }
    }

    /// Record a heartbeat at the current time.
    ///
    /// The interval since the previous heartbeat feeds the cadence
    /// window only while the peer is still judged available; an
    /// interval from a peer already past the threshold is dropped so
    /// one late heartbeat cannot stretch the learned cadence. The first
    /// heartbeat records no interval.
    pub fn heartbeat(&mut self) {
        let now_ms = self.time.unix_time_millis();
        if let Some(last_ms) = self.last_timestamp_ms {
            let interval_ms = now_ms - last_ms;
            if self.available_at(now_ms) {
                self.window.record(interval_ms);
            } else {
                debug!(interval_ms, "discarding interval from suspected peer");
            }
        }
        self.last_timestamp_ms = Some(now_ms);
    }

    /// Current suspicion score.
    ///
    /// `0.0` before the first heartbeat, NaN while the window holds no
    /// intervals yet, and otherwise growing as the silence since the
    /// last heartbeat stretches past the learned cadence.
    pub fn phi(&self) -> f64 {
        self.phi_at(self.time.unix_time_millis())
    }

    /// Whether the peer is currently judged alive.
    ///
    /// A NaN score reads as available: missing data is not evidence of
    /// death.
    pub fn is_available(&self) -> bool {
        self.available_at(self.time.unix_time_millis())
    }

    /// When the last heartbeat arrived, if any.
    pub fn last_heartbeat_ms(&self) -> Option<f64> {
        self.last_timestamp_ms
    }

    fn available_at(&self, now_ms: f64) -> bool {
        let phi = self.phi_at(now_ms);
        phi.is_nan() || phi < self.threshold
    }

    fn phi_at(&self, now_ms: f64) -> f64 {
        let Some(last_ms) = self.last_timestamp_ms else {
            return 0.0;
        };

        let interval_ms = now_ms - last_ms;
        let mean_ms = self.window.mean() + self.jitter_ms;
        let std_deviation_ms = self.window.std_deviation().max(MIN_STD_DEVIATION_MS);

        // Logistic approximation to the normal CDF.
        let y = (interval_ms - mean_ms) / std_deviation_ms;
        let e = (-y * (1.5976 + 0.070566 * y * y)).exp();

        if interval_ms > mean_ms {
            -(e / (1.0 + e)).log10()
        } else {
            -(1.0 - 1.0 / (1.0 + e)).log10()
        }
    }
}

impl fmt::Debug for PhiAccrualDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhiAccrualDetector")
            .field("threshold", &self.threshold)
            .field("jitter_ms", &self.jitter_ms)
            .field("last_timestamp_ms", &self.last_timestamp_ms)
            .field("window_len", &self.window.len())
            .finish_non_exhaustive()
    }
}

/// Bounded window of heartbeat intervals with running sums.
///
/// Mean and variance come O(1) off the running sum and sum of squares;
/// eviction subtracts the departing sample from both.
#[derive(Debug, Clone)]
struct HeartbeatWindow {
    max_size: usize,
    intervals: VecDeque<f64>,
    sum: f64,
    sum_sq: f64,
}

impl HeartbeatWindow {
    fn new(max_size: usize) -> Self {
        Self {
            max_size,
            intervals: VecDeque::with_capacity(max_size),
            sum: 0.0,
            sum_sq: 0.0,
        }
    }

    fn record(&mut self, interval_ms: f64) {
        if self.intervals.len() == self.max_size {
            if let Some(evicted) = self.intervals.pop_front() {
                self.sum -= evicted;
                self.sum_sq -= evicted * evicted;
            }
        }
        self.intervals.push_back(interval_ms);
        self.sum += interval_ms;
        self.sum_sq += interval_ms * interval_ms;
    }

    fn len(&self) -> usize {
        self.intervals.len()
    }

    /// NaN while the window is empty; the detector reads that as
    /// insufficient data.
    fn mean(&self) -> f64 {
        self.sum / self.intervals.len() as f64
    }

    /// Population variance off the running sums. Cancellation can push
    /// the raw value a hair negative, so it clamps at zero.
    fn variance(&self) -> f64 {
        let mean = self.mean();
        (self.sum_sq / self.intervals.len() as f64 - mean * mean).max(0.0)
    }

    fn std_deviation(&self) -> f64 {
        self.variance().sqrt()
    }
}
