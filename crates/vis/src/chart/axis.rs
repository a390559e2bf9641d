use veloplot_records::time::RaceTime;

use crate::scale::LinearScale;
use crate::scale::TimeScale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// An axis line with its ticks, in plot coordinates.
#[derive(Debug, Clone)]
pub struct Axis {
    id: &'static str,
    orientation: Orientation,
    offset: f64,
    extent: (f64, f64),
    ticks: Vec<Tick>,
}

impl Axis {
    /// The year axis, drawn at the bottom of the plot. Only whole years
    /// get a tick, labelled without digit grouping.
    pub fn bottom(scale: &LinearScale, offset: f64, count: usize) -> Axis {
        let ticks = scale
            .ticks(count)
            .into_iter()
            .filter(|value| value.fract() == 0.0)
            .map(|value| Tick {
                position: scale.apply(value),
                label: format!("{}", value as i64),
            })
            .collect();

        Self {
            id: "x-axis",
            orientation: Orientation::Bottom,
            offset,
            extent: scale.range(),
            ticks,
        }
    }

    /// The time axis, drawn at the left of the plot, labelled as `MM:SS`.
    pub fn left(scale: &TimeScale, count: usize) -> Axis {
        let ticks = scale
            .ticks(count)
            .iter()
            .map(|time: &RaceTime| Tick {
                position: scale.apply(*time),
                label: time.minutes_seconds(),
            })
            .collect();

        Self {
            id: "y-axis",
            orientation: Orientation::Left,
            offset: 0.0,
            extent: scale.range(),
            ticks,
        }
    }

    pub fn id(&self) -> &str {
        self.id
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Distance of the axis line from the plot origin, across the axis.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn extent(&self) -> (f64, f64) {
        self.extent
    }

    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }
}
