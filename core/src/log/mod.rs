//! Logging bootstrap for hosts embedding the pager.
//!
//! Installs a `tracing` subscriber with a stderr sink and, when a directory is configured, a
//! rolling file sink. `log` records from the host's other dependencies are bridged into the
//! same subscriber. Call [`init`] once at startup; later calls return the first handle.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use super::Result;

const FILTER_ENV_VARS: [&str; 2] = ["IMAGE_PAGER_LOG", "RUST_LOG"];

static LOG_HANDLE: OnceLock<LogHandle> = OnceLock::new();

pub use tracing_subscriber::filter::LevelFilter as LogLevel;

/// Rolling file sink settings.
#[derive(Debug, Clone)]
pub struct FileSink {
    pub directory: PathBuf,
    pub file_prefix: String,
    pub level: LevelFilter,
    pub daily: bool,
}

impl Default for FileSink {
    fn default() -> Self {
        Self {
            directory: default_log_directory(),
            file_prefix: "pager".to_string(),
            level: LevelFilter::DEBUG,
            daily: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub console_level: LevelFilter,
    /// `None` keeps logging on stderr only.
    pub file: Option<FileSink>,
    /// Directive such as `pager_core=debug`; falls back to the environment.
    pub env_filter: Option<String>,
    /// Forward records from the `log` facade into `tracing`.
    pub capture_log: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            console_level: if cfg!(debug_assertions) {
                LevelFilter::DEBUG
            } else {
                LevelFilter::WARN
            },
            file: None,
            env_filter: None,
            capture_log: true,
        }
    }
}

impl LogConfig {
    pub fn with_file_sink(mut self, directory: impl Into<PathBuf>) -> Self {
        self.file = Some(FileSink { directory: directory.into(), ..FileSink::default() });
        self
    }
}

/// Keeps the background file writer alive for the lifetime of the process.
#[derive(Debug)]
pub struct LogHandle {
    _guard: Option<WorkerGuard>,
    directory: Option<PathBuf>,
}

impl LogHandle {
    /// Directory of the rolling file sink, if one was installed.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }
}

/// Install the global subscriber. The first call wins; later calls ignore `config`.
pub fn init(config: LogConfig) -> Result<&'static LogHandle> {
    if let Some(handle) = LOG_HANDLE.get() {
        return Ok(handle);
    }

    let handle = setup(config)?;
    let _ = LOG_HANDLE.set(handle);
    LOG_HANDLE.get().ok_or_else(|| anyhow!("log handle missing after initialisation"))
}

fn setup(config: LogConfig) -> Result<LogHandle> {
    if config.capture_log {
        let _ = tracing_log::LogTracer::builder().with_max_level(log::LevelFilter::Trace).init();
    }

    let directive = config
        .env_filter
        .or_else(|| FILTER_ENV_VARS.iter().find_map(|var| std::env::var(var).ok()))
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| "info".to_string());
    let env_filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("parsing log filter directive {directive:?}"))?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(config.console_level);

    let (file_layer, guard, directory) = match config.file {
        Some(sink) => {
            fs::create_dir_all(&sink.directory).with_context(|| {
                format!("creating log directory at {}", sink.directory.display())
            })?;
            let rotation = if sink.daily { Rotation::DAILY } else { Rotation::NEVER };
            let appender = tracing_appender::rolling::Builder::new()
                .rotation(rotation)
                .filename_prefix(&sink.file_prefix)
                .filename_suffix("log")
                .build(&sink.directory)
                .context("creating rolling log appender")?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_line_number(true)
                .with_filter(sink.level);
            (Some(layer), Some(guard), Some(sink.directory))
        }
        None => (None, None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|err| anyhow!(err))?;

    Ok(LogHandle { _guard: guard, directory })
}

fn default_log_directory() -> PathBuf {
    directories::ProjectDirs::from("com", "ImagePager", "image-pager")
        .map(|dirs| dirs.data_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("image-pager-logs"))
}
