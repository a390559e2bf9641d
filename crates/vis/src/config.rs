//! Fixed geometry and styling of the scatter plot page.

use serde::Serialize;
use veloplot_records::Category;

/// All settings needed to lay out and render the page.
///
/// The values are built once before rendering and passed by reference
/// to every stage.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub title: String,
    pub subtitle: Option<String>,
    /// Width of the plot area, without margins.
    pub width: f64,
    /// Height of the plot area, without margins.
    pub height: f64,
    pub margin: Margin,
    pub marker_radius: f64,
    /// The approximate number of ticks on each axis.
    pub tick_count: usize,
    pub legend: LegendConfig,
    pub palette: Palette,
    pub tooltip: TooltipConfig,
}

impl PlotConfig {
    pub fn outer_width(&self) -> f64 {
        self.width + self.margin.left + self.margin.right
    }

    pub fn outer_height(&self) -> f64 {
        self.height + self.margin.top + self.margin.bottom
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: String::from("Doping in Professional Bicycle Racing"),
            subtitle: Some(String::from("35 Fastest times up Alpe d'Huez")),
            width: 800.0,
            height: 400.0,
            margin: Margin::default(),
            marker_radius: 6.5,
            tick_count: 10,
            legend: LegendConfig::default(),
            palette: Palette::default(),
            tooltip: TooltipConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 40.0,
            bottom: 50.0,
            left: 60.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LegendConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    /// Extra distance the legend box is lifted from the bottom of the plot.
    pub lift: f64,
    pub row_height: f64,
    pub swatch_size: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            title: String::from("Legend"),
            width: 200.0,
            height: 100.0,
            lift: 275.0,
            row_height: 20.0,
            swatch_size: 10.0,
        }
    }
}

/// Marker and legend colors, one per [Category].
#[derive(Debug, Clone)]
pub struct Palette {
    pub allegation: String,
    pub no_allegation: String,
}

impl Palette {
    pub fn color(&self, category: Category) -> &str {
        match category {
            Category::Allegation => &self.allegation,
            Category::NoAllegation => &self.no_allegation,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            allegation: String::from("#4285f4"),
            no_allegation: String::from("#ffa500"),
        }
    }
}

/// How the page script must show and hide the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TooltipConfig {
    pub offset_x: f64,
    pub offset_y: f64,
    pub duration_ms: u32,
    pub opacity: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            offset_x: 15.0,
            offset_y: -30.0,
            duration_ms: 200,
            opacity: 0.9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_dimensions() {
        let config = PlotConfig::default();

        assert_eq!(900.0, config.outer_width());
        assert_eq!(470.0, config.outer_height());
    }

    #[test]
    fn categories_have_distinct_colors() {
        let palette = Palette::default();

        assert_ne!(
            palette.color(Category::Allegation),
            palette.color(Category::NoAllegation)
        );
    }
}
