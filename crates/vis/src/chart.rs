mod axis;
mod legend;
mod marker;

pub use crate::chart::axis::Axis;
pub use crate::chart::axis::Orientation;
pub use crate::chart::axis::Tick;
pub use crate::chart::legend::Legend;
pub use crate::chart::legend::LegendEntry;
pub use crate::chart::marker::Marker;

use veloplot_records::RaceRecord;

use crate::config::Margin;
use crate::config::PlotConfig;
use crate::error::Result;
use crate::scale::Scales;

/// A position in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Self { x, y }
    }
}

/// Everything the scatter plot is made of, positioned and styled,
/// ready to be rendered.
#[derive(Debug, Clone)]
pub struct Chart {
    width: f64,
    height: f64,
    margin: Margin,
    scales: Scales,
    x_axis: Axis,
    y_axis: Axis,
    markers: Vec<Marker>,
    legend: Legend,
}

impl Chart {
    /// Lays the records out on the plot area.
    ///
    /// Fails with [`VisError::EmptyDataset`] when there are no records.
    ///
    /// [`VisError::EmptyDataset`]: crate::error::VisError::EmptyDataset
    pub fn build(records: &[RaceRecord], config: &PlotConfig) -> Result<Chart> {
        let scales = Scales::from_records(records, config.width, config.height)?;

        let x_axis = Axis::bottom(&scales.x, config.height, config.tick_count);
        let y_axis = Axis::left(&scales.y, config.tick_count);

        let mut markers = Vec::with_capacity(records.len());
        for record in records {
            markers.push(Marker::new(record, &scales, config));
        }

        let legend = Legend::new(config);

        Ok(Self {
            width: config.outer_width(),
            height: config.outer_height(),
            margin: config.margin,
            scales,
            x_axis,
            y_axis,
            markers,
            legend,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn margin(&self) -> &Margin {
        &self.margin
    }

    pub fn scales(&self) -> &Scales {
        &self.scales
    }

    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }
}
