//! Parsing of ffmpeg's machine-readable progress stream.
//!
//! With `-progress pipe:1`, ffmpeg emits key=value lines on stdout. Two of
//! them encode elapsed media time: `out_time_ms=<microseconds>` (ffmpeg
//! 4.4+) and `out_time=H:MM:SS.ffffff`. [`ProgressTracker`] converts either
//! into a completion percentage against the total duration and throttles
//! emission to integer-percent changes so a terminal renderer is not
//! flooded with updates.

use crate::utils::parse_ffmpeg_time;

/// A single progress emission from a supervised remux run.
///
/// `percent` is the exact fractional completion in [0, 100]; throttling
/// happens on the truncated integer value, not on this number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressUpdate {
    pub percent: f64,
}

/// Incremental state for one supervised run.
///
/// Holds the total duration the percentages are computed against and the
/// last integer percent handed out, used purely to suppress duplicate
/// emissions.
#[derive(Debug)]
pub struct ProgressTracker {
    total_duration_secs: f64,
    last_reported_percent: i64,
}

impl ProgressTracker {
    /// Creates a tracker for a run of the given total duration in seconds.
    ///
    /// A non-positive or non-finite duration puts the tracker in
    /// indeterminate mode: lines still parse, but no percentages are
    /// emitted (there is nothing meaningful to divide by).
    #[must_use]
    pub fn new(total_duration_secs: f64) -> Self {
        Self {
            total_duration_secs,
            // Sentinel so that 0% is emitted immediately.
            last_reported_percent: -1,
        }
    }

    /// Whether this tracker can compute percentages at all.
    #[must_use]
    pub fn is_determinate(&self) -> bool {
        self.total_duration_secs > 0.0 && self.total_duration_secs.is_finite()
    }

    /// Feeds one line of engine output to the tracker.
    ///
    /// Returns `Some(ProgressUpdate)` only when the line carries elapsed
    /// time AND the truncated integer percent differs from the previously
    /// emitted one. Lines matching neither time encoding are not progress
    /// output and yield `None` without error.
    pub fn parse_line(&mut self, line: &str) -> Option<ProgressUpdate> {
        let elapsed_secs = elapsed_seconds(line)?;

        if !self.is_determinate() {
            return None;
        }

        let percent = (elapsed_secs / self.total_duration_secs * 100.0).clamp(0.0, 100.0);
        let truncated = percent as i64;
        if truncated == self.last_reported_percent {
            return None;
        }
        self.last_reported_percent = truncated;
        Some(ProgressUpdate { percent })
    }
}

/// Extracts elapsed media time in seconds from a progress-stream line.
///
/// The microsecond counter takes precedence over the timestamp form; a
/// given line only ever carries one of the two keys, but the ordering here
/// makes the tie-break explicit. Unparsable values (ffmpeg emits
/// `out_time_ms=N/A` before the first frame) fall through to `None`.
fn elapsed_seconds(line: &str) -> Option<f64> {
    let line = line.trim();
    if let Some(raw) = line.strip_prefix("out_time_ms=") {
        return raw.trim().parse::<u64>().ok().map(|us| us as f64 / 1_000_000.0);
    }
    if let Some(raw) = line.strip_prefix("out_time=") {
        return parse_ffmpeg_time(raw.trim());
    }
    None
}
