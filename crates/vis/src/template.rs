use std::path::Path;

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::config::PlotConfig;
use crate::error::Result;
use crate::render::OutputStream;
use crate::render::Render;
use crate::render::error::RenderError;
use crate::render::output::OutputFile;
use crate::tooltip::Tooltip;

const INDEX_TEMPLATE_NAME: &str = "index";
const INDEX_TEMPLATE: &str = include_str!("./template/index.html.tt");
const STYLE: &str = include_str!("./template/style.css");
const SCRIPT: &str = include_str!("./template/tooltip.js");

pub(crate) struct TemplateEngine<'a> {
    index_file_path: &'a Path,
}

impl<'a> TemplateEngine<'a> {
    pub fn new(index_file_path: &'a Path) -> TemplateEngine<'a> {
        Self { index_file_path }
    }

    pub fn render(&self, context: &Context) -> Result<()> {
        let text = render_page(context)?;

        let mut file = OutputFile::create(self.index_file_path)?;
        file.write(&text)?;
        file.finish()?;

        Ok(())
    }
}

pub(crate) fn render_page(context: &Context) -> Result<String> {
    let mut template = TinyTemplate::new();
    template.add_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;

    let text = template.render(INDEX_TEMPLATE_NAME, context)?;
    Ok(text)
}

#[derive(Serialize)]
pub(crate) struct Context<'a> {
    title: &'a str,
    subtitle: Option<&'a str>,
    style: &'static str,
    chart: String,
    tooltip: String,
    tooltip_settings: String,
    script: &'static str,
}

impl<'a> Context<'a> {
    /// The page script is driven by the settings of `tooltip`, and the
    /// tooltip element starts out in the current state of `tooltip`.
    pub fn new(
        config: &'a PlotConfig,
        chart: String,
        tooltip: &Tooltip,
    ) -> std::result::Result<Context<'a>, RenderError> {
        let tooltip_settings = serde_json::to_string(tooltip.config())?;

        let mut element = String::new();
        tooltip.render(&mut element)?;

        Ok(Self {
            title: &config.title,
            subtitle: config.subtitle.as_deref(),
            style: STYLE,
            chart,
            tooltip: element,
            tooltip_settings,
            script: SCRIPT,
        })
    }
}
