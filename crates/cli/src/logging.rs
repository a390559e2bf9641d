use std::io;

use fern::Dispatch;
use log::LevelFilter;
use log::SetLoggerError;

pub(crate) fn setup_logging(level: LevelFilter) -> Result<(), SetLoggerError> {
    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
}
