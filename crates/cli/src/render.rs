use std::time::Duration;

use log::info;
use log::warn;
use veloplot_records::Dataset;
use veloplot_vis::config::PlotConfig;
use veloplot_vis::layout::VisLayout;

use crate::cli::PathExt;
use crate::cli::RenderArgs;
use crate::error::CliError;
use crate::fetch::Source;

pub(crate) fn render(args: RenderArgs) -> Result<(), CliError> {
    let output_path = args.output_path.or_current_dir()?;
    let source = match args.file {
        Some(path) => Source::File(path),
        None => Source::Url(args.url),
    };

    println!(
        "veloplot reads the race records from: {source} and generates a scatter plot in: `{}`",
        output_path.display()
    );

    let mut config = PlotConfig::default();
    if let Some(title) = args.title {
        config.title = title;
    }

    let records = source.load(Duration::from_secs(args.timeout))?;
    let dataset = Dataset::new(records);
    if dataset.is_empty() {
        warn!("{source} holds no race records");
    }

    let vis = VisLayout::new(&output_path);
    vis.generate_report(dataset, &config)?;

    info!("the scatter plot is ready: `{}`", vis.index_file_path().display());
    Ok(())
}
