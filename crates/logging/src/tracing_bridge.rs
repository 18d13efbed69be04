//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the console logger.
//!
//! [`ConsoleLayer`] is a `tracing-subscriber` layer that renders every
//! `tracing` event as a console record, so libraries instrumented with the
//! standard `tracing` macros share the logger's colors, threshold and location
//! setting.
//!
//! # Usage
//!
//! ```rust,ignore
//! logging::init_tracing();
//! logging::set_include_location(true);
//!
//! tracing::warn!(attempt = 3, "retrying");
//! // ESC[33m[WARN] retrying attempt=3 at src/main.rs:5
//! ```

use std::fmt::{self, Write as _};
use std::io::{Stdout, Write};

use logging_sink::Severity;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::global::global;
use crate::logger::Logger;

/// A tracing layer that forwards events to a [`Logger`].
///
/// Filtering is left to the logger's minimum level and is evaluated per
/// event, so lowering the threshold at runtime takes effect immediately.
pub struct ConsoleLayer<W: 'static> {
    logger: &'static Logger<W>,
}

impl ConsoleLayer<Stdout> {
    /// Creates a layer writing through the process-wide logger.
    #[must_use]
    pub fn global() -> Self {
        Self::new(global())
    }
}

impl<W: 'static> ConsoleLayer<W> {
    /// Creates a layer writing through `logger`.
    #[must_use]
    pub const fn new(logger: &'static Logger<W>) -> Self {
        Self { logger }
    }

    /// Map a tracing level to a console severity.
    const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::TRACE => Severity::Trace,
            Level::DEBUG => Severity::Debug,
            Level::INFO => Severity::Info,
            Level::WARN => Severity::Warn,
            Level::ERROR => Severity::Error,
        }
    }
}

impl<S, W> Layer<S> for ConsoleLayer<W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: Write + Send + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = Self::severity_for(metadata.level());
        if !self.logger.enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.logger.log(
            severity,
            &visitor.finish(),
            metadata.file().unwrap_or("<unknown>"),
            metadata.line().unwrap_or(0),
        );
    }
}

/// Collects the `message` field and renders the remaining fields as `key=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(mut self) -> String {
        if self.message.is_empty() {
            return self.fields.trim_start().to_owned();
        }
        self.message.push_str(&self.fields);
        self.message
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.record_debug(field, &value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }
}

/// Installs [`ConsoleLayer::global`] as the global tracing subscriber.
///
/// # Panics
///
/// Panics if a global subscriber has already been set. Use
/// [`try_init_tracing`] to handle that case.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(ConsoleLayer::global())
        .init();
}

/// Installs [`ConsoleLayer::global`] unless a global subscriber already exists.
pub fn try_init_tracing() -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(ConsoleLayer::global())
        .try_init()
}

/// Installs the console layer behind an additional filter layer.
///
/// # Example
///
/// ```rust,ignore
/// use tracing_subscriber::EnvFilter;
///
/// logging::init_tracing_with_filter(EnvFilter::new("my_app=debug"));
/// ```
pub fn init_tracing_with_filter<F>(filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(ConsoleLayer::global())
        .init();
}
