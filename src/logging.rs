//! Plain-text logger for the `log` facade.
//!
//! The library itself only emits through `log::debug!`/`log::warn!`; binaries
//! decide where that goes. [`PlainLogger`] writes one line per record to any
//! `Write` sink (stderr by default):
//!
//! ```text
//! 2026-10-18 09:14:02 WARN     chat request failed: transport error: refused  chat.rs:88
//! ```
//!
//! With the `tracing` feature, [`PlainTracingLayer`] formats `tracing` events
//! the same way, honoring the wrapped logger's level.

use std::io::Write;
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::{OffsetDateTime, format_description::OwnedFormatItem};

use crate::sync::lock_recover;

/// Line-oriented logger with optional timestamp, level and source location.
///
/// # Thread Safety
///
/// The sink and the last printed timestamp are each behind a mutex with
/// poison recovery, so the logger satisfies `Log`'s `Sync` bound.
pub struct PlainLogger {
    sink: Mutex<Box<dyn Write + Send>>,
    level: LevelFilter,
    show_time: bool,
    omit_repeated_times: bool,
    show_level: bool,
    show_path: bool,
    time_format: OwnedFormatItem,
    last_time: Mutex<Option<String>>,
}

impl Default for PlainLogger {
    fn default() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }
}

impl PlainLogger {
    /// Create a logger writing to `sink`.
    #[must_use]
    pub fn new(sink: Box<dyn Write + Send>) -> Self {
        let time_format = time::format_description::parse_owned::<2>(
            "[year]-[month]-[day] [hour]:[minute]:[second]",
        )
        .unwrap_or_else(|_| OwnedFormatItem::Literal(Vec::<u8>::new().into_boxed_slice()));
        Self {
            sink: Mutex::new(sink),
            level: LevelFilter::Info,
            show_time: true,
            omit_repeated_times: true,
            show_level: true,
            show_path: true,
            time_format,
            last_time: Mutex::new(None),
        }
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Blank out a timestamp identical to the previous line's.
    #[must_use]
    pub fn omit_repeated_times(mut self, omit: bool) -> Self {
        self.omit_repeated_times = omit;
        self
    }

    #[must_use]
    pub fn show_level(mut self, show: bool) -> Self {
        self.show_level = show;
        self
    }

    #[must_use]
    pub fn show_path(mut self, show: bool) -> Self {
        self.show_path = show;
        self
    }

    /// Override the time format. An unparsable format keeps the current one.
    #[must_use]
    pub fn time_format(mut self, format: &str) -> Self {
        if let Ok(parsed) = time::format_description::parse_owned::<2>(format) {
            self.time_format = parsed;
        }
        self
    }

    /// Install as the global logger.
    ///
    /// # Errors
    ///
    /// Returns [`SetLoggerError`] if a global logger is already installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    fn format_time(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(&self.time_format)
            .unwrap_or_else(|_| now.to_string())
    }

    fn format_record(&self, record: &Record<'_>) -> String {
        let mut line = String::new();

        if self.show_time {
            let time_str = self.format_time();
            let display = if self.omit_repeated_times {
                let mut last = lock_recover(&self.last_time);
                if last.as_ref() == Some(&time_str) {
                    " ".repeat(time_str.len())
                } else {
                    *last = Some(time_str.clone());
                    time_str
                }
            } else {
                time_str
            };
            line.push_str(&display);
            line.push(' ');
        }

        if self.show_level {
            line.push_str(&format!("{:<8} ", record.level().as_str()));
        }

        line.push_str(&record.args().to_string());

        if self.show_path
            && let Some(path) = record.file()
        {
            line.push_str("  ");
            line.push_str(path);
            if let Some(line_no) = record.line() {
                line.push(':');
                line.push_str(&line_no.to_string());
            }
        }

        line
    }

    fn write_line(&self, line: &str) {
        let mut sink = lock_recover(&self.sink);
        // Nowhere to report a failed log write.
        let _ = writeln!(sink, "{line}");
    }
}

impl Log for PlainLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_record(record);
        self.write_line(&line);
    }

    fn flush(&self) {
        let _ = lock_recover(&self.sink).flush();
    }
}

#[cfg(feature = "tracing")]
mod tracing_integration {
    use super::PlainLogger;
    use log::Level;
    use std::fmt::Debug;

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level as TracingLevel, Subscriber};
    use tracing_subscriber::util::TryInitError;
    use tracing_subscriber::{Layer, layer::Context};

    /// Tracing layer that formats events with a [`PlainLogger`].
    ///
    /// Events below the logger's level are dropped.
    pub struct PlainTracingLayer {
        logger: PlainLogger,
    }

    impl PlainTracingLayer {
        #[must_use]
        pub fn new(logger: PlainLogger) -> Self {
            Self { logger }
        }

        fn accepts(&self, level: Level, target: &str) -> bool {
            let metadata = log::Metadata::builder().level(level).target(target).build();
            self.logger.enabled(&metadata)
        }

        /// Install as the global tracing subscriber.
        ///
        /// `log` records from this crate are bridged into the subscriber, so
        /// they come out through the same layer.
        ///
        /// # Errors
        ///
        /// Returns [`TryInitError`] if a global subscriber or a `log` logger
        /// is already installed.
        pub fn init(self) -> Result<(), TryInitError> {
            use tracing_subscriber::prelude::*;

            tracing_subscriber::registry().with(self).try_init()
        }
    }

    #[derive(Default)]
    struct EventVisitor {
        message: Option<String>,
        fields: Vec<(String, String)>,
    }

    impl Visit for EventVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
            let rendered = format!("{value:?}");
            let rendered = strip_quotes(&rendered).to_string();
            if field.name() == "message" {
                self.message = Some(rendered);
            } else {
                self.fields.push((field.name().to_string(), rendered));
            }
        }
    }

    impl<S> Layer<S> for PlainTracingLayer
    where
        S: Subscriber,
    {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let metadata = event.metadata();
            let level = map_tracing_level(*metadata.level());
            if !self.accepts(level, metadata.target()) {
                return;
            }

            let mut visitor = EventVisitor::default();
            event.record(&mut visitor);

            let mut message = visitor.message.unwrap_or_default();
            for (key, value) in &visitor.fields {
                if !message.is_empty() {
                    message.push(' ');
                }
                message.push_str(&format!("{key}={value}"));
            }

            let message_ref = message.as_str();
            let args = format_args!("{message_ref}");
            let record = log::Record::builder()
                .args(args)
                .level(level)
                .target(metadata.target())
                .file(metadata.file())
                .line(metadata.line())
                .module_path(metadata.module_path())
                .build();

            let line = self.logger.format_record(&record);
            self.logger.write_line(&line);
        }
    }

    fn map_tracing_level(level: TracingLevel) -> Level {
        match level {
            TracingLevel::TRACE => Level::Trace,
            TracingLevel::DEBUG => Level::Debug,
            TracingLevel::INFO => Level::Info,
            TracingLevel::WARN => Level::Warn,
            TracingLevel::ERROR => Level::Error,
        }
    }

    fn strip_quotes(value: &str) -> &str {
        if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
            &value[1..value.len() - 1]
        } else {
            value
        }
    }

}

#[cfg(feature = "tracing")]
pub use tracing_integration::PlainTracingLayer;
