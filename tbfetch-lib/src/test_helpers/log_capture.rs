use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Messages of every event emitted while the guard returned by [`capture_messages`] lives.
#[derive(Clone, Default)]
pub struct CapturedMessages(Arc<Mutex<Vec<String>>>);

impl CapturedMessages {
    pub fn contains(&self, needle: &str) -> bool {
        self.0
            .lock()
            .unwrap()
            .iter()
            .any(|message| message.contains(needle))
    }

    pub fn all(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

struct MessageVisitor(Option<String>);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

struct CaptureLayer(CapturedMessages);

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(None);
        event.record(&mut visitor);
        if let Some(message) = visitor.0 {
            self.0.0.lock().unwrap().push(message);
        }
    }
}

/// Installs a thread-local subscriber recording event messages.
///
/// Works with `#[tokio::test]`, whose runtime polls everything on the test thread.
pub fn capture_messages() -> (CapturedMessages, DefaultGuard) {
    let messages = CapturedMessages::default();
    let subscriber = tracing_subscriber::registry().with(CaptureLayer(messages.clone()));
    let guard = tracing::subscriber::set_default(subscriber);
    // Callsites first hit by a parallel test under the no-op dispatcher would stay disabled
    tracing::callsite::rebuild_interest_cache();
    (messages, guard)
}
