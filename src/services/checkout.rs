use {
    crate::config::CheckoutConfig,
    crate::domain::charge::{ChargeResult, PixStatus},
    crate::domain::error::ChargeError,
    crate::domain::id::TransactionId,
    crate::domain::provider::PixProvider,
    crate::services::session::{PollingSession, SessionState},
    crate::services::watcher::{self, PaymentEvent, WatcherHandle},
    std::sync::{Arc, Mutex, MutexGuard},
    tokio::sync::mpsc,
};

/// Owns one checkout cycle end to end: the charge creation call, the
/// polling watcher, and the session state the two share.
pub struct CheckoutController {
    provider: Arc<dyn PixProvider>,
    config: CheckoutConfig,
    session: Arc<Mutex<PollingSession>>,
    watcher: Option<WatcherHandle>,
    events_tx: mpsc::UnboundedSender<PaymentEvent>,
    events_rx: Option<mpsc::UnboundedReceiver<PaymentEvent>>,
}

impl CheckoutController {
    pub fn new(provider: Arc<dyn PixProvider>, config: CheckoutConfig) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            provider,
            config,
            session: Arc::new(Mutex::new(PollingSession::new())),
            watcher: None,
            events_tx,
            events_rx: Some(events_rx),
        }
    }

    /// Take the confirmation event receiver. Each confirmed payment is
    /// delivered at most once.
    pub fn events(&mut self) -> Option<mpsc::UnboundedReceiver<PaymentEvent>> {
        self.events_rx.take()
    }

    pub fn state(&self) -> SessionState {
        self.lock_session().state()
    }

    pub fn transaction_id(&self) -> Option<TransactionId> {
        self.lock_session().transaction_id().cloned()
    }

    pub fn last_status(&self) -> Option<PixStatus> {
        self.lock_session().last_status().cloned()
    }

    /// Create a charge and start watching for its settlement. A second call
    /// while creation is in flight is rejected; a call while a previous
    /// charge is still awaiting payment abandons that charge and starts a
    /// fresh cycle.
    pub async fn generate_charge(&mut self) -> Result<ChargeResult, ChargeError> {
        self.dispose_watcher();
        self.lock_session().begin_creating()?;

        match self.provider.create_charge().await {
            Ok(result) => {
                self.lock_session()
                    .charge_created(result.transaction_id.clone());
                self.watcher = Some(watcher::spawn_watcher(
                    Arc::clone(&self.provider),
                    Arc::clone(&self.session),
                    result.transaction_id.clone(),
                    self.config.poll_interval,
                    self.events_tx.clone(),
                ));
                Ok(result)
            }
            Err(e) => {
                self.lock_session().creation_failed();
                Err(e)
            }
        }
    }

    /// One-shot status passthrough, independent of the polling loop.
    pub async fn check_status(&self, id: &TransactionId) -> Result<PixStatus, ChargeError> {
        self.provider.fetch_status(id).await
    }

    /// Abandon the current cycle and return to Idle.
    pub fn reset(&mut self) {
        self.dispose_watcher();
        self.lock_session().reset();
    }

    /// Stop polling without touching session state. Idempotent.
    pub fn dispose(&mut self) {
        self.dispose_watcher();
    }

    fn dispose_watcher(&mut self) {
        if let Some(handle) = self.watcher.take() {
            handle.cancel();
        }
    }

    fn lock_session(&self) -> MutexGuard<'_, PollingSession> {
        self.session.lock().expect("session lock poisoned")
    }
}

impl Drop for CheckoutController {
    fn drop(&mut self) {
        self.dispose_watcher();
    }
}
