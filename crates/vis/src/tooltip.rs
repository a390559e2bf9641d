//! The hover tooltip: its content, placement and visibility.
//!
//! The page holds a single tooltip element. The page script applies the same
//! transitions as [Tooltip] when the pointer enters or leaves a marker, with
//! the settings and initial state of the [Tooltip] the page was rendered from.

use veloplot_records::RaceRecord;

use crate::chart::Marker;
use crate::chart::Point;
use crate::config::TooltipConfig;
use crate::html;

/// The HTML shown in the tooltip for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipContent(String);

impl TooltipContent {
    pub fn for_record(record: &RaceRecord) -> TooltipContent {
        let mut content = format!(
            "{name}: {nationality}<br/>Year: {year}, Time: {time}",
            name = html::escape(record.name()),
            nationality = html::escape(record.nationality()),
            year = record.year(),
            time = record.time().minutes_seconds(),
        );

        let allegation = record.doping_allegation();
        if !allegation.is_empty() {
            content.push_str("<br/><br/>");
            content.push_str(&html::escape(allegation));
        }

        Self(content)
    }

    pub fn as_html(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TooltipState {
    Hidden,
    Visible {
        content: TooltipContent,
        year: i32,
        position: Point,
    },
}

#[derive(Debug, Clone)]
pub struct Tooltip {
    config: TooltipConfig,
    state: TooltipState,
}

impl Tooltip {
    pub fn new(config: TooltipConfig) -> Tooltip {
        Self {
            config,
            state: TooltipState::Hidden,
        }
    }

    /// Shows the tooltip for `marker` next to the pointer. Any previous
    /// content and position are overwritten.
    pub fn enter(&mut self, marker: &Marker, pointer: Point) {
        self.state = TooltipState::Visible {
            content: marker.tooltip().clone(),
            year: marker.year(),
            position: Point::new(
                pointer.x + self.config.offset_x,
                pointer.y + self.config.offset_y,
            ),
        };
    }

    pub fn leave(&mut self) {
        self.state = TooltipState::Hidden;
    }

    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, TooltipState::Visible { .. })
    }

    /// The opacity the tooltip fades to.
    pub fn opacity(&self) -> f64 {
        match self.state {
            TooltipState::Hidden => 0.0,
            TooltipState::Visible { .. } => self.config.opacity,
        }
    }

    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::chart::Chart;
    use crate::chart::tests::record;
    use crate::config::PlotConfig;

    fn chart() -> Chart {
        let records = [
            record("A", 2015, "36:15", ""),
            record("B", 2004, "37:36", "Alleged <drug> use"),
        ];

        Chart::build(&records, &PlotConfig::default()).unwrap()
    }

    #[test]
    fn content_without_allegation() {
        let content = TooltipContent::for_record(&record("A", 2015, "36:15", ""));

        assert_eq!("A: USA<br/>Year: 2015, Time: 36:15", content.as_html());
    }

    #[test]
    fn content_with_allegation_is_escaped() {
        let content = TooltipContent::for_record(&record("B", 2004, "37:36", "Alleged <drug> use"));

        assert_eq!(
            "B: USA<br/>Year: 2004, Time: 37:36<br/><br/>Alleged &lt;drug&gt; use",
            content.as_html()
        );
    }

    #[test]
    fn starts_hidden() {
        let tooltip = Tooltip::new(TooltipConfig::default());

        assert_eq!(&TooltipState::Hidden, tooltip.state());
        assert_eq!(0.0, tooltip.opacity());
    }

    #[test]
    fn visible_only_while_over_a_marker() {
        let chart = chart();
        let mut tooltip = Tooltip::new(TooltipConfig::default());
        let marker = &chart.markers()[0];

        tooltip.enter(marker, Point::new(100.0, 200.0));
        assert!(tooltip.is_visible());
        assert_eq!(0.9, tooltip.opacity());

        tooltip.leave();
        assert!(!tooltip.is_visible());
        assert_eq!(0.0, tooltip.opacity());
    }

    #[test]
    fn position_is_offset_from_the_pointer() {
        let chart = chart();
        let mut tooltip = Tooltip::new(TooltipConfig::default());

        tooltip.enter(&chart.markers()[0], Point::new(100.0, 200.0));

        let TooltipState::Visible { position, year, .. } = tooltip.state() else {
            panic!("tooltip should be visible");
        };
        assert_eq!(Point::new(115.0, 170.0), *position);
        assert_eq!(2015, *year);
    }

    #[test]
    fn repeated_enters_are_idempotent() {
        let chart = chart();
        let marker = &chart.markers()[1];
        let mut tooltip = Tooltip::new(TooltipConfig::default());

        tooltip.enter(marker, Point::new(10.0, 10.0));
        let once = tooltip.state().clone();
        tooltip.enter(marker, Point::new(10.0, 10.0));

        assert_eq!(&once, tooltip.state());
    }

    #[test]
    fn entering_another_marker_overwrites_the_content() {
        let chart = chart();
        let mut tooltip = Tooltip::new(TooltipConfig::default());

        tooltip.enter(&chart.markers()[0], Point::new(10.0, 10.0));
        tooltip.enter(&chart.markers()[1], Point::new(50.0, 60.0));

        let TooltipState::Visible {
            content, position, ..
        } = tooltip.state()
        else {
            panic!("tooltip should be visible");
        };
        assert_eq!(chart.markers()[1].tooltip(), content);
        assert_eq!(Point::new(65.0, 30.0), *position);
    }
}
