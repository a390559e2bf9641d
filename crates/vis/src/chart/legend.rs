use veloplot_records::Category;

use crate::chart::Point;
use crate::config::PlotConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub category: Category,
    pub label: &'static str,
    pub color: String,
}

/// The legend box listing both categories, placed near the
/// top-right corner of the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    title: String,
    origin: Point,
    width: f64,
    row_height: f64,
    swatch_size: f64,
    entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn new(config: &PlotConfig) -> Legend {
        let legend = &config.legend;
        let origin = Point::new(
            config.width - legend.width,
            config.height - legend.height - legend.lift,
        );

        let entries = Category::ALL
            .into_iter()
            .map(|category| LegendEntry {
                category,
                label: category.label(),
                color: config.palette.color(category).to_owned(),
            })
            .collect();

        Self {
            title: legend.title.clone(),
            origin,
            width: legend.width,
            row_height: legend.row_height,
            swatch_size: legend.swatch_size,
            entries,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    pub fn swatch_size(&self) -> f64 {
        self.swatch_size
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }
}
