use crate::chart::Axis;
use crate::chart::Chart;
use crate::chart::Legend;
use crate::chart::Marker;
use crate::chart::Orientation;
use crate::html::Px;
use crate::html::escape;
use crate::render::OutputStream;
use crate::render::Render;
use crate::render::error::RenderError;
use crate::tooltip::Tooltip;
use crate::tooltip::TooltipState;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

// Keeps one pixel wide lines on the pixel grid.
const CRISP_OFFSET: f64 = 0.5;

impl Render for Chart {
    fn render<O>(&self, output: &mut O) -> Result<(), RenderError>
    where
        O: OutputStream,
    {
        let margin = self.margin();

        output.write(&format!(
            r#"<svg width="{width}" height="{height}">"#,
            width = Px(self.width()),
            height = Px(self.height()),
        ))?;
        output.write(&format!(
            r#"<g transform="translate({left}, {top})">"#,
            left = Px(margin.left),
            top = Px(margin.top),
        ))?;

        self.x_axis().render(output)?;
        self.y_axis().render(output)?;

        for marker in self.markers() {
            marker.render(output)?;
        }

        self.legend().render(output)?;

        output.write("</g>")?;
        output.write("</svg>")
    }
}

impl Render for Axis {
    fn render<O>(&self, output: &mut O) -> Result<(), RenderError>
    where
        O: OutputStream,
    {
        let (start, end) = self.extent();
        let (start, end) = (start + CRISP_OFFSET, end + CRISP_OFFSET);
        let id = self.id();

        let (transform, anchor, domain) = match self.orientation() {
            Orientation::Bottom => (
                format!("translate(0, {})", Px(self.offset())),
                "middle",
                format!(
                    "M{start},{size}V{crisp}H{end}V{size}",
                    start = Px(start),
                    end = Px(end),
                    size = Px(TICK_SIZE),
                    crisp = Px(CRISP_OFFSET),
                ),
            ),
            Orientation::Left => (
                format!("translate({}, 0)", Px(self.offset())),
                "end",
                format!(
                    "M{size},{start}H{crisp}V{end}H{size}",
                    start = Px(start),
                    end = Px(end),
                    size = Px(-TICK_SIZE),
                    crisp = Px(CRISP_OFFSET),
                ),
            ),
        };

        output.write(&format!(
            r#"<g id="{id}" transform="{transform}" fill="none" font-size="10" font-family="sans-serif" text-anchor="{anchor}">"#
        ))?;
        output.write(&format!(
            r#"<path class="domain" stroke="currentColor" d="{domain}"></path>"#
        ))?;

        let spacing = TICK_SIZE + TICK_PADDING;

        for tick in self.ticks() {
            let position = Px(tick.position + CRISP_OFFSET);
            let label = escape(&tick.label);

            let tick = match self.orientation() {
                Orientation::Bottom => format!(
                    r#"<g class="tick" transform="translate({position}, 0)"><line stroke="currentColor" y2="{size}"></line><text fill="currentColor" y="{spacing}" dy="0.71em">{label}</text></g>"#,
                    size = Px(TICK_SIZE),
                    spacing = Px(spacing),
                ),
                Orientation::Left => format!(
                    r#"<g class="tick" transform="translate(0, {position})"><line stroke="currentColor" x2="{size}"></line><text fill="currentColor" x="{spacing}" dy="0.32em">{label}</text></g>"#,
                    size = Px(-TICK_SIZE),
                    spacing = Px(-spacing),
                ),
            };

            output.write(&tick)?;
        }

        output.write("</g>")
    }
}

impl Render for Marker {
    fn render<O>(&self, output: &mut O) -> Result<(), RenderError>
    where
        O: OutputStream,
    {
        let center = self.center();

        output.write(&format!(
            r#"<circle class="dot" cx="{cx}" cy="{cy}" r="{r}" data-xvalue="{year}" data-yvalue="{time}" data-tooltip="{tooltip}" style="fill: {color}"></circle>"#,
            cx = Px(center.x),
            cy = Px(center.y),
            r = Px(self.radius()),
            year = self.year(),
            time = self.time().to_iso_string(),
            tooltip = escape(self.tooltip().as_html()),
            color = escape(self.color()),
        ))
    }
}

impl Render for Legend {
    fn render<O>(&self, output: &mut O) -> Result<(), RenderError>
    where
        O: OutputStream,
    {
        let origin = self.origin();

        output.write(&format!(
            r#"<g id="legend" transform="translate({x}, {y})">"#,
            x = Px(origin.x),
            y = Px(origin.y),
        ))?;
        output.write(&format!(
            r#"<text x="{x}" y="-10" style="text-anchor: middle">{title}</text>"#,
            x = Px(self.width() / 2.0),
            title = escape(self.title()),
        ))?;

        let swatch = Px(self.swatch_size());

        for (i, entry) in self.entries().iter().enumerate() {
            output.write(&format!(
                r#"<g class="legend-item" transform="translate(0, {y})"><rect x="5" y="5" width="{swatch}" height="{swatch}" style="fill: {color}"></rect><text x="20" y="5" dy="0.7em">{label}</text></g>"#,
                y = Px(i as f64 * self.row_height()),
                color = escape(&entry.color),
                label = escape(entry.label),
            ))?;
        }

        output.write("</g>")
    }
}

impl Render for Tooltip {
    fn render<O>(&self, output: &mut O) -> Result<(), RenderError>
    where
        O: OutputStream,
    {
        match self.state() {
            TooltipState::Hidden => output.write(&format!(
                r#"<div class="tooltip" id="tooltip" style="opacity: {opacity}"></div>"#,
                opacity = self.opacity(),
            )),
            TooltipState::Visible {
                content,
                year,
                position,
            } => output.write(&format!(
                r#"<div class="tooltip" id="tooltip" data-year="{year}" style="opacity: {opacity}; left: {x}px; top: {y}px">{content}</div>"#,
                opacity = self.opacity(),
                x = Px(position.x),
                y = Px(position.y),
                content = content.as_html(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use chrono::Utc;

    use crate::chart::Chart;
    use crate::chart::Point;
    use crate::chart::tests::record;
    use crate::config::PlotConfig;
    use crate::config::TooltipConfig;
    use crate::render::Render;
    use crate::render::error::RenderError;
    use crate::tooltip::Tooltip;

    fn attribute<'a>(element: &'a str, name: &str) -> &'a str {
        let pattern = format!(r#" {name}=""#);
        let start = element.find(&pattern).unwrap() + pattern.len();
        let end = start + element[start..].find('"').unwrap();
        &element[start..end]
    }

    fn circles(svg: &str) -> Vec<&str> {
        svg.split("<circle").skip(1).collect()
    }

    #[test]
    fn render_chart_structure() -> Result<(), RenderError> {
        let records = [record("A", 2015, "36:15", ""), record("B", 2004, "37:36", "x")];
        let chart = Chart::build(&records, &PlotConfig::default()).unwrap();

        let mut svg = String::new();
        chart.render(&mut svg)?;

        assert!(svg.starts_with(r#"<svg width="900" height="470"><g transform="translate(60, 20)">"#));
        assert!(svg.contains(r#"<g id="x-axis" transform="translate(0, 400)""#));
        assert!(svg.contains(r#"<g id="y-axis" transform="translate(0, 0)""#));
        assert!(svg.contains(r#"<g id="legend" transform="translate(600, 25)">"#));
        assert!(svg.contains(">Legend</text>"));
        assert!(svg.contains(">Riders with doping allegations</text>"));
        assert!(svg.contains(">No doping allegations</text>"));
        assert_eq!(2, circles(&svg).len());
        assert!(svg.ends_with("</g></svg>"));

        Ok(())
    }

    #[test]
    fn marker_attributes_parse_back_to_the_record() -> Result<(), RenderError> {
        let records = [
            record("A", 2015, "36:15", ""),
            record("B", 1995, "36:50", "x"),
            record("C", 2006, "39:23", ""),
        ];
        let chart = Chart::build(&records, &PlotConfig::default()).unwrap();

        let mut svg = String::new();
        chart.render(&mut svg)?;

        for (circle, record) in circles(&svg).into_iter().zip(&records) {
            let year: i32 = attribute(circle, "data-xvalue").parse().unwrap();
            let time = DateTime::parse_from_rfc3339(attribute(circle, "data-yvalue"))
                .unwrap()
                .with_timezone(&Utc);

            assert_eq!(record.year(), year);
            assert_eq!(record.time().timestamp(), time);
        }

        Ok(())
    }

    #[test]
    fn marker_color_and_tooltip() -> Result<(), RenderError> {
        let config = PlotConfig::default();
        let records = [record("A", 2015, "36:15", "")];
        let chart = Chart::build(&records, &config).unwrap();

        let mut svg = String::new();
        chart.render(&mut svg)?;
        let circle = circles(&svg)[0];

        assert_eq!("fill: #ffa500", attribute(circle, "style"));
        assert_eq!(
            "A: USA&lt;br/&gt;Year: 2015, Time: 36:15",
            attribute(circle, "data-tooltip")
        );
        assert_eq!("6.5", attribute(circle, "r"));

        Ok(())
    }

    #[test]
    fn rendering_is_deterministic() -> Result<(), RenderError> {
        let records = [record("A", 2015, "36:15", ""), record("B", 2004, "37:36", "x")];
        let config = PlotConfig::default();

        let mut first = String::new();
        Chart::build(&records, &config).unwrap().render(&mut first)?;
        let mut second = String::new();
        Chart::build(&records, &config).unwrap().render(&mut second)?;

        assert_eq!(first, second);

        Ok(())
    }

    #[test]
    fn render_hidden_tooltip() -> Result<(), RenderError> {
        let tooltip = Tooltip::new(TooltipConfig::default());

        let mut html = String::new();
        tooltip.render(&mut html)?;

        assert_eq!(
            r#"<div class="tooltip" id="tooltip" style="opacity: 0"></div>"#,
            html
        );

        Ok(())
    }

    #[test]
    fn render_visible_tooltip() -> Result<(), RenderError> {
        let records = [record("A", 2015, "36:15", "")];
        let chart = Chart::build(&records, &PlotConfig::default()).unwrap();
        let mut tooltip = Tooltip::new(TooltipConfig::default());
        tooltip.enter(&chart.markers()[0], Point::new(100.0, 200.0));

        let mut html = String::new();
        tooltip.render(&mut html)?;

        assert_eq!(
            r#"<div class="tooltip" id="tooltip" data-year="2015" style="opacity: 0.9; left: 115px; top: 170px">A: USA<br/>Year: 2015, Time: 36:15</div>"#,
            html
        );

        Ok(())
    }
}
