//! Continuous mappings from data domains to pixel ranges.

use veloplot_records::RaceRecord;
use veloplot_records::time::RaceTime;

use crate::error::Result;
use crate::error::VisError;

const SECOND: i64 = 1_000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;

/// Candidate time tick intervals, in milliseconds.
const TIME_INTERVALS: [i64; 12] = [
    SECOND,
    5 * SECOND,
    15 * SECOND,
    30 * SECOND,
    MINUTE,
    5 * MINUTE,
    15 * MINUTE,
    30 * MINUTE,
    HOUR,
    3 * HOUR,
    6 * HOUR,
    12 * HOUR,
];

/// A linear mapping from `[d0, d1]` onto `[r0, r1]`.
///
/// A degenerate domain (`d0 == d1`) maps every value to the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;

        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }

        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Returns roughly `count` evenly spaced, human friendly values
    /// inside the domain. Steps are 1, 2 or 5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let (start, stop) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };

        if count == 0 || !start.is_finite() || !stop.is_finite() {
            return Vec::new();
        }

        if start == stop {
            return vec![start];
        }

        let step = tick_step(start, stop, count);

        // Negative powers of ten are applied as a division to keep
        // values like 0.1 exact.
        if step >= 1.0 {
            let first = (start / step).ceil() as i64;
            let last = (stop / step).floor() as i64;
            (first..=last).map(|i| i as f64 * step).collect()
        } else {
            let inverse = (1.0 / step).round();
            let first = (start * inverse).ceil() as i64;
            let last = (stop * inverse).floor() as i64;
            (first..=last).map(|i| i as f64 / inverse).collect()
        }
    }
}

fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw_step = (stop - start) / count as f64;
    let power = raw_step.log10().floor();
    let magnitude = 10f64.powf(power);
    let error = raw_step / magnitude;

    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    factor * magnitude
}

/// A linear mapping from a [RaceTime] domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: (RaceTime, RaceTime),
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (RaceTime, RaceTime), range: (f64, f64)) -> Self {
        let linear = LinearScale::new(
            (domain.0.millis() as f64, domain.1.millis() as f64),
            range,
        );

        Self { domain, linear }
    }

    pub fn domain(&self) -> (RaceTime, RaceTime) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.linear.range()
    }

    #[inline]
    pub fn apply(&self, time: RaceTime) -> f64 {
        self.linear.apply(time.millis() as f64)
    }

    /// Returns the multiples of the time interval that best splits the
    /// domain into roughly `count` parts.
    pub fn ticks(&self, count: usize) -> Vec<RaceTime> {
        let (start, stop) = (self.domain.0.millis(), self.domain.1.millis());
        let (start, stop) = if start <= stop { (start, stop) } else { (stop, start) };

        if count == 0 {
            return Vec::new();
        }

        if start == stop {
            return vec![self.domain.0];
        }

        let interval = time_interval(start, stop, count);
        let first = start.div_euclid(interval) + i64::from(start.rem_euclid(interval) != 0);
        let last = stop.div_euclid(interval);

        (first..=last)
            .filter_map(|i| RaceTime::from_millis(i * interval))
            .collect()
    }
}

fn time_interval(start: i64, stop: i64, count: usize) -> i64 {
    let target = (stop - start) as f64 / count as f64;
    let next = TIME_INTERVALS.partition_point(|interval| (*interval as f64) <= target);

    match next {
        0 => (tick_step(start as f64, stop as f64, count) as i64).max(1),
        n if n == TIME_INTERVALS.len() => TIME_INTERVALS[n - 1],
        n => {
            let previous = TIME_INTERVALS[n - 1] as f64;
            let following = TIME_INTERVALS[n] as f64;

            if target / previous < following / target {
                TIME_INTERVALS[n - 1]
            } else {
                TIME_INTERVALS[n]
            }
        }
    }
}

/// The two scales of the chart: year to horizontal position and
/// race time to vertical position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scales {
    pub x: LinearScale,
    pub y: TimeScale,
}

impl Scales {
    /// Derives the scales from the normalized records.
    ///
    /// The year domain is padded by one year on both sides. Larger times map
    /// to larger vertical positions, so slower riders appear lower.
    pub fn from_records(records: &[RaceRecord], width: f64, height: f64) -> Result<Scales> {
        let years = records.iter().map(RaceRecord::year);
        let (Some(min_year), Some(max_year)) = (years.clone().min(), years.max()) else {
            return Err(VisError::EmptyDataset);
        };

        let times = records.iter().map(RaceRecord::time);
        let (Some(min_time), Some(max_time)) = (times.clone().min(), times.max()) else {
            return Err(VisError::EmptyDataset);
        };

        let x = LinearScale::new(
            (f64::from(min_year) - 1.0, f64::from(max_year) + 1.0),
            (0.0, width),
        );
        let y = TimeScale::new((min_time, max_time), (0.0, height));

        Ok(Self { x, y })
    }
}
