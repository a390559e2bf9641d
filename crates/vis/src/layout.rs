mod iter;

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use log::debug;
use log::info;
use log::warn;
use veloplot_records::RaceRecord;
use veloplot_records::error::RecordError;

use crate::chart::Chart;
use crate::config::PlotConfig;
use crate::error::Result;
use crate::layout::iter::ErrorHandlingIter;
use crate::render::Render;
use crate::template::Context;
use crate::template::TemplateEngine;
use crate::template::render_page;
use crate::tooltip::Tooltip;

/// The data visualization directory is structured as follows:
///
/// ./vis/index.html
///
/// The __index__ file is a standalone page holding the scatter plot,
/// its legend, the tooltip element and the script that drives it.
pub struct VisLayout {
    root_path: PathBuf,
    index_file_path: PathBuf,
}

impl VisLayout {
    const MAIN_DIR_NAME: &str = "vis";
    const INDEX_FILE_NAME: &str = "index.html";

    /// Describes the visualization directory under `path`. Nothing is
    /// created until a report is generated.
    pub fn new(path: &Path) -> VisLayout {
        let root_path = path.join(Self::MAIN_DIR_NAME);
        let index_file_path = root_path.join(Self::INDEX_FILE_NAME);

        Self {
            root_path,
            index_file_path,
        }
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn index_file_path(&self) -> &Path {
        &self.index_file_path
    }

    /// Renders the records into the index page. Records that failed
    /// normalization are skipped with a warning.
    ///
    /// The visualization directory is created, if missing, only once the
    /// chart could be built.
    pub fn generate_report<I>(&self, records: I, config: &PlotConfig) -> Result<()>
    where
        I: IntoIterator<Item = std::result::Result<RaceRecord, RecordError>>,
    {
        let page = PageBuilder::new(config).build(records)?;
        let context = page.context()?;

        fs::create_dir_all(&self.root_path)?;

        let template = TemplateEngine::new(&self.index_file_path);
        template.render(&context)?;

        info!(
            "wrote {markers} markers to `{path}`",
            markers = page.chart.markers().len(),
            path = self.index_file_path.display()
        );

        Ok(())
    }
}

/// Renders the records into the page markup without touching the file system.
pub fn render_page_to_string<I>(records: I, config: &PlotConfig) -> Result<String>
where
    I: IntoIterator<Item = std::result::Result<RaceRecord, RecordError>>,
{
    let page = PageBuilder::new(config).build(records)?;
    render_page(&page.context()?)
}

struct PageBuilder<'a> {
    config: &'a PlotConfig,
}

impl<'a> PageBuilder<'a> {
    fn new(config: &'a PlotConfig) -> Self {
        Self { config }
    }

    fn build<I>(self, records: I) -> Result<Page<'a>>
    where
        I: IntoIterator<Item = std::result::Result<RaceRecord, RecordError>>,
    {
        let mut records = ErrorHandlingIter::new(records.into_iter());
        let valid: Vec<RaceRecord> = records.by_ref().collect();

        if records.skipped() > 0 {
            warn!(
                "{skipped} race records were skipped, {valid} remain",
                skipped = records.skipped(),
                valid = valid.len()
            );
        }

        let chart = Chart::build(&valid, self.config)?;
        debug!(
            "x domain: {:?}, y domain: {:?}",
            chart.scales().x.domain(),
            chart.scales().y.domain()
        );

        Ok(Page {
            config: self.config,
            chart,
            tooltip: Tooltip::new(self.config.tooltip),
        })
    }
}

struct Page<'a> {
    config: &'a PlotConfig,
    chart: Chart,
    tooltip: Tooltip,
}

impl<'a> Page<'a> {
    fn context(&self) -> Result<Context<'a>> {
        let mut chart = String::new();
        self.chart.render(&mut chart)?;

        Ok(Context::new(self.config, chart, &self.tooltip)?)
    }
}
