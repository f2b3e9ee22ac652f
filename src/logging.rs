//! Logging.
use std::io::{Error as IOError, Write};
use std::path::PathBuf;

use flexi_logger::{DeferredNow, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Record};

/// Options for logging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogOptions {
    /// Number of times verbose output was requested (0 = warnings only).
    pub verbosity: u64,
    /// Write log records to this file instead of stderr.
    pub log_file_path: Option<PathBuf>,
}

impl LogOptions {
    /// Level used unless RUST_LOG provides a full log specification.
    pub fn level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Configure logging.
/// The returned handle must be kept alive for as long as records should be written.
pub fn configure_logging(options: &LogOptions) -> Result<LoggerHandle, FlexiLoggerError> {
    let mut logger = Logger::try_with_env_or_str(options.level())?.format(log_format);

    if let Some(log_file_path) = &options.log_file_path {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file_path)?.suppress_timestamp())
            .o_append(true);
    } else {
        logger = logger.log_to_stderr();
    }

    logger.start()
}

/// Format log records.
pub fn log_format(
    writer: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), IOError> {
    write!(
        writer,
        "{} {} [{}] {}",
        now.now().format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        &record.args()
    )
}
