use std::future::Future;

use portfolio_models::contact::ContactMessage;

/// Best-effort forwarding of stored contact messages to an external sink.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactRelayService: Send + Sync + 'static {
    /// Forward the given message.
    ///
    /// Failures are logged and reported in the returned outcome, never as an
    /// error.
    fn relay(&self, message: &ContactMessage) -> impl Future<Output = ContactRelayOutcome> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRelayOutcome {
    /// The message has been appended to the external sink.
    Relayed,
    /// The relay is not configured.
    Skipped,
    /// The external sink could not be reached or rejected the message.
    Failed,
}

#[cfg(feature = "mock")]
impl MockContactRelayService {
    pub fn with_relay(mut self, message: ContactMessage, result: ContactRelayOutcome) -> Self {
        self.expect_relay()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
