use tokio::sync::broadcast;

/// Fan-out hub for user-facing error messages.
///
/// The data layer publishes a short human-readable message whenever an
/// operation fails; the UI decides how to surface it (toast, banner) and
/// whether to disable affected controls. Messages sent while nobody is
/// subscribed are dropped.
#[derive(Clone)]
pub struct MessageHub {
    tx: broadcast::Sender<String>,
}

impl Default for MessageHub {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self { tx }
    }

    /// Publish an error message to all current subscribers.
    pub fn show_error(&self, message: impl Into<String>) {
        let _ = self.tx.send(message.into());
    }

    /// Subscribe to error messages.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::TryRecvError;

    #[tokio::test]
    async fn fans_out_to_all_subscribers() {
        let hub = MessageHub::new();
        let mut rx1 = hub.subscribe();
        let mut rx2 = hub.subscribe();

        hub.show_error("Couldn't load courses");

        assert_eq!(rx1.recv().await.unwrap(), "Couldn't load courses");
        assert_eq!(rx2.recv().await.unwrap(), "Couldn't load courses");
    }

    #[tokio::test]
    async fn no_messages_before_any_error() {
        let hub = MessageHub::new();
        let mut rx = hub.subscribe();
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn send_without_subscribers_does_not_panic() {
        let hub = MessageHub::new();
        hub.show_error("nobody is listening");
    }
}
