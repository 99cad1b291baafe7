// Copyright 2025 Crrow
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    env,
    io::IsTerminal,
    sync::{Arc, Mutex, Once},
};

use bon::Builder;
use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Deserializer, Serialize, de};
use smart_default::SmartDefault;
use snafu::{OptionExt, ResultExt, Snafu};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Layer, Registry, filter, layer::SubscriberExt};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Invalid log level filter {level:?}"))]
    InvalidLevel {
        level:  String,
        source: filter::ParseError,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },

    #[snafu(display("Failed to create log appender in {dir}"))]
    FileAppender {
        dir:    String,
        source: tracing_appender::rolling::InitError,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },

    #[snafu(display("Failed to install the global subscriber"))]
    SetGlobalSubscriber {
        source: tracing::subscriber::SetGlobalDefaultError,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },

    #[snafu(display("Failed to bridge `log` records into tracing"))]
    LogBridge {
        source: tracing_log::log::SetLoggerError,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },

    #[snafu(display("Logging has not been initialized"))]
    NotInitialized {
        #[snafu(implicit)]
        loc: snafu::Location,
    },

    #[snafu(display("Failed to reload the log filter"))]
    Reload {
        source: tracing_subscriber::reload::Error,
        #[snafu(implicit)]
        loc:    snafu::Location,
    },
}

/// Deserializes a string, using `Default::default()` when it is empty.
///
/// Lets configuration files write `log_format = ""` to mean "default".
pub fn empty_string_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        Ok(T::default())
    } else {
        T::deserialize(de::value::StrDeserializer::new(&s)).map_err(|e: de::value::Error| {
            de::Error::custom(format!("invalid value, expect empty string, err: {e}"))
        })
    }
}

/// Default directory for log files when file logging is enabled.
pub const DEFAULT_LOGGING_DIR: &str = "logs";

/// Handle for changing the level filter after initialization.
///
/// Only set once [`init_global_logging`] succeeded.
pub static RELOAD_HANDLE: OnceCell<tracing_subscriber::reload::Handle<filter::Targets, Registry>> =
    OnceCell::new();

/// Configuration options for the logging system.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, SmartDefault, Builder)]
#[serde(default)]
pub struct LoggingOptions {
    /// Directory for rotated log files. Empty disables file logging.
    #[default = ""]
    #[builder(default, into)]
    pub dir: String,

    /// Level filter such as `"info"` or `"info,reel_player=debug"`. Falls
    /// back to `RUST_LOG`, then to `info`.
    #[builder(into)]
    pub level: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_default")]
    #[builder(default)]
    pub log_format: LogFormat,

    /// Rotated files kept per log (default: 720, a month of hourly files)
    #[default = 720]
    #[builder(default = 720)]
    pub max_log_files: usize,

    /// Also write to stdout
    #[default = true]
    #[builder(default = true)]
    pub append_stdout: bool,
}

/// Output format for log lines.
#[derive(
    Clone, Debug, Copy, PartialEq, Eq, Serialize, Deserialize, Default, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// One JSON object per line, for log pipelines.
    Json,

    /// Human-readable lines.
    #[default]
    Text,
}

/// Initializes logging for tests. Safe to call from every test.
///
/// Honors `UNITTEST_LOG_DIR` (default `/tmp/__unittest_logs`) and
/// `UNITTEST_LOG_LEVEL` (default `debug`).
pub fn init_default_ut_logging() {
    static START: Once = Once::new();

    START.call_once(|| {
        let dir =
            env::var("UNITTEST_LOG_DIR").unwrap_or_else(|_| "/tmp/__unittest_logs".to_string());
        let level = env::var("UNITTEST_LOG_LEVEL").unwrap_or_else(|_| "debug".to_string());
        let opts = LoggingOptions::builder()
            .dir(dir.clone())
            .level(level)
            .append_stdout(false)
            .build();

        match init_global_logging("unittest", &opts) {
            Ok(guards) => {
                if let Ok(mut slot) = GLOBAL_UT_LOG_GUARD.lock() {
                    *slot = Some(guards);
                }
                tracing::info!("logs dir = {}", dir);
            }
            Err(err) => eprintln!("unit test logging disabled: {err}"),
        }
    });
}

/// Keeps the unit test writer guards alive for the whole test binary.
static GLOBAL_UT_LOG_GUARD: Lazy<Arc<Mutex<Option<Vec<WorkerGuard>>>>> =
    Lazy::new(|| Arc::new(Mutex::new(None)));

const DEFAULT_LOG_TARGETS: &str = "info";

fn parse_targets(level: &str) -> Result<filter::Targets> {
    level
        .parse::<filter::Targets>()
        .context(InvalidLevelSnafu { level })
}

/// Installs the global subscriber.
///
/// Layers, depending on `opts`:
/// - stdout, if `append_stdout`
/// - hourly rotated `<app_name>.*` files in `dir`
/// - hourly rotated `<app_name>-err.*` files in `dir`, errors only
///
/// Only the first call installs anything; later calls return no guards.
pub fn init_global_logging(app_name: &str, opts: &LoggingOptions) -> Result<Vec<WorkerGuard>> {
    static START: Once = Once::new();
    let mut result = Ok(Vec::new());

    START.call_once(|| {
        result = install(app_name, opts);
    });

    result
}

fn rolling_writer(
    prefix: &str,
    opts: &LoggingOptions,
    guards: &mut Vec<WorkerGuard>,
) -> Result<tracing_appender::non_blocking::NonBlocking> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::HOURLY)
        .filename_prefix(prefix)
        .max_log_files(opts.max_log_files)
        .build(&opts.dir)
        .context(FileAppenderSnafu { dir: &opts.dir })?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    guards.push(guard);
    Ok(writer)
}

fn install(app_name: &str, opts: &LoggingOptions) -> Result<Vec<WorkerGuard>> {
    let mut guards = vec![];

    let level = opts
        .level
        .clone()
        .or_else(|| env::var(EnvFilter::DEFAULT_ENV).ok())
        .unwrap_or_else(|| DEFAULT_LOG_TARGETS.to_string());
    let targets = parse_targets(&level)?;

    LogTracer::init().context(LogBridgeSnafu)?;

    let stdout_logging_layer = if opts.append_stdout {
        let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);

        let layer = tracing_subscriber::fmt::Layer::new()
            .with_writer(writer)
            .with_ansi(std::io::stdout().is_terminal());
        Some(match opts.log_format {
            LogFormat::Json => layer.json().with_current_span(true).boxed(),
            LogFormat::Text => layer.boxed(),
        })
    } else {
        None
    };

    let (file_logging_layer, err_file_logging_layer) = if opts.dir.is_empty() {
        (None, None)
    } else {
        let writer = rolling_writer(app_name, opts, &mut guards)?;
        let layer = tracing_subscriber::fmt::Layer::new()
            .with_writer(writer)
            .with_ansi(false);
        let file = match opts.log_format {
            LogFormat::Json => layer.json().with_current_span(true).boxed(),
            LogFormat::Text => layer.boxed(),
        };

        let err_writer = rolling_writer(&format!("{app_name}-err"), opts, &mut guards)?;
        let layer = tracing_subscriber::fmt::Layer::new()
            .with_writer(err_writer)
            .with_ansi(false);
        let err_file = match opts.log_format {
            LogFormat::Json => layer
                .json()
                .with_filter(filter::LevelFilter::ERROR)
                .boxed(),
            LogFormat::Text => layer.with_filter(filter::LevelFilter::ERROR).boxed(),
        };
        (Some(file), Some(err_file))
    };

    let (dyn_filter, reload_handle) = tracing_subscriber::reload::Layer::new(targets);

    let subscriber = Registry::default()
        .with(dyn_filter)
        .with(stdout_logging_layer)
        .with(file_logging_layer)
        .with(err_file_logging_layer);

    tracing::subscriber::set_global_default(subscriber).context(SetGlobalSubscriberSnafu)?;
    // Cannot already be set: installation runs once.
    let _ = RELOAD_HANDLE.set(reload_handle);

    Ok(guards)
}

/// Replaces the active level filter, e.g. to turn on `debug` at runtime.
pub fn reload_level(level: &str) -> Result<()> {
    let targets = parse_targets(level)?;
    RELOAD_HANDLE
        .get()
        .context(NotInitializedSnafu)?
        .reload(targets)
        .context(ReloadSnafu)
}
