//! Logging setup for the `handrank` binary.
//!
//! The engine only emits `tracing` events; this module installs the fmt
//! subscriber that prints them, and a capture layer for tests.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::Level;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Structured log entry for testing and analysis
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

/// Test subscriber that captures log entries for verification
#[derive(Debug, Clone, Default)]
pub struct TestLogSubscriber {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn into_layer<S>(self) -> TestLayer<S>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        TestLayer {
            subscriber: self,
            _phantom: PhantomData,
        }
    }
}

pub struct TestLayer<S> {
    subscriber: TestLogSubscriber,
    _phantom: PhantomData<S>,
}

impl<S> Layer<S> for TestLayer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let entry = LogEntry {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
        };

        self.subscriber
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let value_str = format!("{:?}", value);
        if field.name() == "message" {
            self.message = Some(value_str);
        } else {
            self.fields.push((field.name().to_string(), value_str));
        }
    }
}

/// Installs the stderr fmt subscriber. `RUST_LOG` overrides the default `warn` filter.
///
/// Calling it twice is harmless; the second install is ignored.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;
    use handrank_engine::cards::parse_hand_str;
    use handrank_engine::compare::rank_all;
    use handrank_engine::hand::evaluate;
    use tracing::{info, warn};
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn test_log_subscriber_captures_entries() {
        let subscriber = TestLogSubscriber::new();
        let layer = subscriber.clone().into_layer::<Registry>();
        let registry = Registry::default().with(layer);

        tracing::subscriber::with_default(registry, || {
            info!("test info message");
            warn!(line = 3, "skipped line");
        });

        let entries = subscriber.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, Level::INFO);
        assert!(entries[0].message.contains("test info message"));
        assert_eq!(entries[1].level, Level::WARN);
        assert!(entries[1].fields.iter().any(|(k, v)| k == "line" && v == "3"));

        subscriber.clear();
        assert!(subscriber.entries().is_empty());
    }

    #[test]
    fn test_engine_emits_evaluation_events() {
        let subscriber = TestLogSubscriber::new();
        let layer = subscriber.clone().into_layer::<Registry>();
        let registry = Registry::default().with(layer);

        tracing::subscriber::with_default(registry, || {
            let hand = parse_hand_str("KS AS JS 10S QS 2D").unwrap();
            evaluate(&hand);
        });

        let entries = subscriber.entries();
        let evaluated = entries
            .iter()
            .find(|e| e.message.contains("evaluated hand"))
            .expect("evaluate logs its result");
        assert_eq!(evaluated.level, Level::DEBUG);
        assert!(evaluated.target.starts_with("handrank_engine"));
        assert!(
            evaluated
                .fields
                .iter()
                .any(|(k, v)| k == "category" && v == "Royal Flush")
        );
        assert!(evaluated.fields.iter().any(|(k, v)| k == "cards" && v == "6"));
        assert!(
            entries
                .iter()
                .any(|e| e.level == Level::TRACE && e.message.contains("detectors finished"))
        );
    }

    #[test]
    fn test_ranking_logs_hand_count() {
        let subscriber = TestLogSubscriber::new();
        let layer = subscriber.clone().into_layer::<Registry>();
        let registry = Registry::default().with(layer);

        tracing::subscriber::with_default(registry, || {
            let hands = vec![
                parse_hand_str("2C 3D 5H 7S 9C").unwrap(),
                parse_hand_str("2H 3S 5D 7C 9D").unwrap(),
            ];
            rank_all(hands);
        });

        assert!(
            subscriber
                .entries()
                .iter()
                .any(|e| e.message.contains("ranked hands")
                    && e.fields.iter().any(|(k, v)| k == "hands" && v == "2"))
        );
    }
}
