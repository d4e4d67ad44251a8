//! Module provides initialization of global application logger

use std::io;

use chrono::{Local, SecondsFormat};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::runtime::ConfigErrors;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("cannot create log file: {0}")]
    File(#[from] io::Error),

    #[error("wrong logger configuration: {0}")]
    Config(#[from] ConfigErrors),

    #[error("logger has already been initialized: {0}")]
    Set(#[from] log::SetLoggerError),
}

/// Initializes the global logger for an application.
///
/// Messages are written both to the console and to a new file in `logs` directory.
///
/// # Errors
/// An error is returned if logger has already been initialized.
///
pub fn init(level: LevelFilter) -> Result<Handle, LoggerError> {
    let pattern = "{d:<35} [thread \"{T}\" id {({I}]):<6} {l:<5} {t} >> {m}{n}";
    let encoder = Box::new(PatternEncoder::new(pattern));

    let stdout = ConsoleAppender::builder().encoder(encoder.clone()).build();
    let file_name = format!(
        "logs/logfile_{}.log",
        Local::now()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
            .replace(':', "-"),
    );
    let file = FileAppender::builder().encoder(encoder).build(file_name)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .appender(Appender::builder().build("file", Box::new(file)))
        .build(Root::builder().appenders(["stdout", "file"]).build(level))?;
    Ok(log4rs::init_config(config)?)
}
