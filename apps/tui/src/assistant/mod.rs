// Bootstrap for the third-party chat assistant. The assistant is an opaque
// external service: the only observable contract is "may not be reachable
// yet", so startup polls for availability and initializes the widget handle
// exactly once on first detection.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{sleep, timeout};

/// Fixed configuration handed to the widget on initialization.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub host: String,
    pub bot_id: String,
    pub show_conversations: bool,
    pub persist_history: bool,
}

pub const DEFAULT_HOST: &str = "https://cdn.botpress.cloud/webchat/v2.3";
pub const DEFAULT_BOT_ID: &str = "20250412130516-MUM0XSHW";

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            bot_id: DEFAULT_BOT_ID.to_string(),
            show_conversations: false,
            persist_history: false,
        }
    }
}

/// Observable bootstrap state, published on a watch channel so the UI can
/// render it and tests can simulate an assistant that never arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetStatus {
    Waiting,
    Ready,
    Unavailable,
}

/// Capped polling schedule. The poller stops on first detection or after
/// `max_attempts` failed checks, whichever comes first.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            max_attempts: 50,
        }
    }
}

/// One availability check against the external assistant.
pub trait WidgetProbe {
    async fn check(&mut self) -> bool;
}

/// Production probe: the assistant counts as loaded once its host accepts a
/// TCP connection.
#[derive(Debug, Clone)]
pub struct EndpointProbe {
    authority: String,
}

impl EndpointProbe {
    pub fn for_host(host: &str) -> Self {
        Self {
            authority: authority_of(host),
        }
    }
}

impl WidgetProbe for EndpointProbe {
    async fn check(&mut self) -> bool {
        let connect = tokio::net::TcpStream::connect(self.authority.as_str());
        matches!(timeout(Duration::from_millis(250), connect).await, Ok(Ok(_)))
    }
}

/// `host:port` authority for a widget host URL. Hosts without an explicit
/// port probe the HTTPS port.
fn authority_of(host: &str) -> String {
    let stripped = host
        .strip_prefix("https://")
        .or_else(|| host.strip_prefix("http://"))
        .unwrap_or(host);
    let name = stripped.split('/').next().unwrap_or(stripped);
    if name.contains(':') {
        name.to_string()
    } else {
        format!("{name}:443")
    }
}

/// Handle to the initialized widget. Construction is private: the only way
/// to obtain one is through [`bootstrap`], which guarantees single
/// initialization.
#[derive(Debug)]
pub struct ChatWidget {
    config: WidgetConfig,
    delivered: Vec<String>,
}

impl ChatWidget {
    fn init(config: WidgetConfig) -> Self {
        Self {
            config,
            delivered: Vec::new(),
        }
    }

    pub const fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Hand a user message to the assistant. Fire-and-record: the widget
    /// defines no reply contract, so delivery is the whole operation.
    pub fn deliver(&mut self, text: &str) {
        self.delivered.push(text.to_string());
    }

    pub fn delivered(&self) -> &[String] {
        &self.delivered
    }
}

/// Poll until the assistant becomes available, then initialize the widget
/// exactly once. Never blocks rendering; the caller spawns this and reads
/// `status` from the draw loop.
pub async fn bootstrap<P: WidgetProbe>(
    mut probe: P,
    config: WidgetConfig,
    policy: PollPolicy,
    status: watch::Sender<WidgetStatus>,
) -> Option<ChatWidget> {
    for _ in 0..policy.max_attempts {
        if probe.check().await {
            let widget = ChatWidget::init(config);
            let _ = status.send(WidgetStatus::Ready);
            return Some(widget);
        }
        sleep(policy.interval).await;
    }

    let _ = status.send(WidgetStatus::Unavailable);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    struct ScriptedProbe {
        ready_after: u32,
        calls: Arc<AtomicU32>,
    }

    impl WidgetProbe for ScriptedProbe {
        async fn check(&mut self) -> bool {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            call > self.ready_after
        }
    }

    #[tokio::test(start_paused = true)]
    async fn initializes_once_on_first_detection() {
        let calls = Arc::new(AtomicU32::new(0));
        let probe = ScriptedProbe {
            ready_after: 2,
            calls: Arc::clone(&calls),
        };
        let (tx, rx) = watch::channel(WidgetStatus::Waiting);

        let widget = bootstrap(probe, WidgetConfig::default(), PollPolicy::default(), tx).await;

        let widget = widget.expect("widget should initialize");
        assert_eq!(*rx.borrow(), WidgetStatus::Ready);
        assert_eq!(widget.config().bot_id, DEFAULT_BOT_ID);
        assert!(!widget.config().show_conversations);
        assert!(!widget.config().persist_history);
        // Polling stops at the detection attempt.
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_the_attempt_cap() {
        let calls = Arc::new(AtomicU32::new(0));
        let probe = ScriptedProbe {
            ready_after: u32::MAX,
            calls: Arc::clone(&calls),
        };
        let policy = PollPolicy {
            interval: Duration::from_millis(100),
            max_attempts: 5,
        };
        let (tx, rx) = watch::channel(WidgetStatus::Waiting);

        let widget = bootstrap(probe, WidgetConfig::default(), policy, tx).await;

        assert!(widget.is_none());
        assert_eq!(*rx.borrow(), WidgetStatus::Unavailable);
        assert_eq!(calls.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn delivery_is_recorded_in_order() {
        let probe = ScriptedProbe {
            ready_after: 0,
            calls: Arc::new(AtomicU32::new(0)),
        };
        let (tx, _rx) = watch::channel(WidgetStatus::Waiting);
        let mut widget = bootstrap(probe, WidgetConfig::default(), PollPolicy::default(), tx)
            .await
            .expect("widget should initialize");

        widget.deliver("hello");
        widget.deliver("which product is greenest?");
        assert_eq!(widget.delivered(), ["hello", "which product is greenest?"]);
    }

    #[test]
    fn authority_strips_scheme_and_path() {
        assert_eq!(
            authority_of("https://cdn.botpress.cloud/webchat/v2.3"),
            "cdn.botpress.cloud:443"
        );
        assert_eq!(authority_of("localhost:9090"), "localhost:9090");
        assert_eq!(authority_of("example.com"), "example.com:443");
    }
}
