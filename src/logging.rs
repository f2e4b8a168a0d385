//! Tracing initialization for applications embedding pathops.
//!
//! Behavior:
//! - Log level is driven by LogLevel (no RUST_LOG override here).
//! - JSON/compact formatting is selected via the `json` flag.
//! - If `log_file` is provided and passes safety checks, a non-blocking file layer is added.
//!
//! File logging is refused if any ancestor of the file path is a symlink; the
//! reason is logged as a warning once the stderr layer is up.

use anyhow::Result;
use chrono::Local;
use std::fmt as stdfmt;
use std::path::Path;
use tracing::warn;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, LogLevel, path_has_symlink_ancestor};
use crate::platform::open_log_file_secure_append;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tsfmt::format::Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%d/%m/%y %H:%M:%S"))
    }
}

#[inline]
pub(crate) fn to_level_filter(lvl: &LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::INFO,
        LogLevel::Info => LevelFilter::DEBUG,
        LogLevel::Debug => LevelFilter::TRACE,
    }
}

fn fmt_layer<W>(json: bool, writer: W) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let base = tsfmt::layer()
        .with_timer(LocalHumanTime)
        .with_level(true)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(writer);
    if json {
        base.json().boxed()
    } else {
        base.compact().boxed()
    }
}

/// Open a non-blocking writer for `path`, or explain why not.
fn open_non_blocking_writer(path: &Path) -> std::result::Result<(NonBlocking, WorkerGuard), String> {
    match path_has_symlink_ancestor(path) {
        Ok(true) => {
            return Err(format!(
                "ancestor of {} is a symlink; file logging disabled",
                path.display()
            ));
        }
        Err(e) => {
            return Err(format!(
                "cannot check {} for symlinked ancestors: {e}; file logging disabled",
                path.display()
            ));
        }
        Ok(false) => {}
    }

    open_log_file_secure_append(path)
        .map(tracing_appender::non_blocking)
        .map_err(|e| format!("cannot open log file {}: {e}; file logging disabled", path.display()))
}

/// Initialize tracing. Returns the WorkerGuard of the file appender, if one
/// was created; it must be held until shutdown to flush logs.
/// Fails if a global subscriber is already installed.
pub fn init_tracing(lvl: &LogLevel, log_file: Option<&Path>, json: bool) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::default().add_directive(to_level_filter(lvl).into());

    let mut layers: Vec<BoxedLayer> = vec![fmt_layer(json, std::io::stderr)];
    let mut guard = None;
    let mut refused = None;

    if let Some(path) = log_file {
        match open_non_blocking_writer(path) {
            Ok((writer, g)) => {
                layers.push(fmt_layer(json, writer));
                guard = Some(g);
            }
            Err(reason) => refused = Some(reason),
        }
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()?;

    if let Some(reason) = refused {
        warn!("{reason}");
    }
    Ok(guard)
}

/// [`init_tracing`] driven by a loaded [`Config`].
pub fn init_tracing_from_config(cfg: &Config) -> Result<Option<WorkerGuard>> {
    init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json_logs)
}
