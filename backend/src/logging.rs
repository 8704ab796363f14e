use std::fmt::Write as _;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{layer::Context, EnvFilter, Layer, Registry};

const DEFAULT_FILTER: &str = "warn,spin_backend=info,spin_shared=info";

/// Collects the event message plus any structured fields as `key=value`.
#[derive(Default)]
struct SpinEventVisitor {
    message: String,
    fields: String,
}

impl SpinEventVisitor {
    fn push_field(&mut self, name: &str, value: std::fmt::Arguments<'_>) {
        // `log` records bridged from the engine carry their origin in `log.*` fields
        if name.starts_with("log.") {
            return;
        }
        let _ = write!(self.fields, " {}={}", name, value);
    }
}

impl Visit for SpinEventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field.name(), format_args!("{}", value));
        }
    }
}

struct WheelLogLayer;

impl<S: Subscriber> Layer<S> for WheelLogLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = SpinEventVisitor::default();
        event.record(&mut visitor);
        if visitor.message.is_empty() && visitor.fields.is_empty() {
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        let marker = match *metadata.level() {
            Level::ERROR => "❌ Error:",
            Level::WARN => "⚠️ Warning:",
            Level::INFO => "🎡",
            Level::DEBUG => "🔄",
            Level::TRACE => return,
        };
        let line = format!(
            "[{}] {} {} - {}{}",
            timestamp,
            marker,
            metadata.target(),
            visitor.message,
            visitor.fields
        );
        if *metadata.level() <= Level::WARN {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

/// Installs the global subscriber; `log` records from the engine are bridged in.
pub fn setup() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    Registry::default()
        .with(env_filter)
        .with(WheelLogLayer)
        .try_init()
        .expect("Failed to set subscriber");
}
