use veloplot_records::Category;
use veloplot_records::RaceRecord;
use veloplot_records::time::RaceTime;

use crate::chart::Point;
use crate::config::PlotConfig;
use crate::scale::Scales;
use crate::tooltip::TooltipContent;

/// A single point of the scatter plot, describing one race record.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    center: Point,
    radius: f64,
    color: String,
    category: Category,
    year: i32,
    time: RaceTime,
    tooltip: TooltipContent,
}

impl Marker {
    pub fn new(record: &RaceRecord, scales: &Scales, config: &PlotConfig) -> Marker {
        let category = record.category();
        let center = Point::new(
            scales.x.apply(f64::from(record.year())),
            scales.y.apply(record.time()),
        );

        Self {
            center,
            radius: config.marker_radius,
            color: config.palette.color(category).to_owned(),
            category,
            year: record.year(),
            time: record.time(),
            tooltip: TooltipContent::for_record(record),
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn time(&self) -> RaceTime {
        self.time
    }

    pub fn tooltip(&self) -> &TooltipContent {
        &self.tooltip
    }
}
