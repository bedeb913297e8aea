//! Frame timestamp statistics.
//!
//! The recorder stores timestamps in microseconds; rates are derived from that.

use std::time::Duration;

const MICROS_PER_SECOND: f64 = 1_000_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TimestampStats {
    pub n_frames: usize,
    pub first: u64,
    pub last: u64,
    /// Mean step between consecutive timestamps, `None` below two frames
    pub mean_interval: Option<f64>,
    /// Number of steps where the timestamp decreases
    pub non_monotonic: usize,
}

impl TimestampStats {
    /// Returns `None` for an empty sequence.
    pub fn from_timestamps(timestamps: &[u64]) -> Option<Self> {
        let first = *timestamps.first()?;
        let last = *timestamps.last()?;

        let mut total = 0f64;
        let mut non_monotonic = 0;
        for pair in timestamps.windows(2) {
            if pair[1] < pair[0] {
                non_monotonic += 1;
            }
            total += pair[1] as f64 - pair[0] as f64;
        }
        let steps = timestamps.len() - 1;

        Some(Self {
            n_frames: timestamps.len(),
            first,
            last,
            mean_interval: (steps > 0).then(|| total / steps as f64),
            non_monotonic,
        })
    }

    /// Span between the first and last timestamp, zero if they are out of order.
    pub fn duration(&self) -> Duration {
        Duration::from_micros(self.last.saturating_sub(self.first))
    }

    /// Mean frame rate in Hz.
    pub fn frame_rate(&self) -> Option<f64> {
        self.mean_interval
            .filter(|&interval| interval > 0.0)
            .map(|interval| MICROS_PER_SECOND / interval)
    }

    pub fn is_monotonic(&self) -> bool {
        self.non_monotonic == 0
    }
}
