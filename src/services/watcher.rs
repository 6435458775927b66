use {
    crate::domain::id::TransactionId,
    crate::domain::provider::PixProvider,
    crate::services::session::{PollingSession, StatusOutcome},
    std::{
        sync::{
            Arc, Mutex,
            atomic::{AtomicBool, Ordering},
        },
        time::Duration,
    },
    tokio::sync::{mpsc, watch},
};

/// Emitted on the controller's event channel when settlement is observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentEvent {
    Confirmed { transaction_id: TransactionId },
}

/// Cancel-once handle to a running watcher task. `cancel` is idempotent,
/// and dropping the handle cancels too, so the task cannot outlive its
/// owner on any exit path.
pub struct WatcherHandle {
    shutdown: watch::Sender<bool>,
    cancelled: AtomicBool,
}

impl WatcherHandle {
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            let _ = self.shutdown.send(true);
        }
    }
}

impl Drop for WatcherHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Spawn the polling loop for a charge already awaiting payment.
pub fn spawn_watcher(
    provider: Arc<dyn PixProvider>,
    session: Arc<Mutex<PollingSession>>,
    transaction_id: TransactionId,
    interval: Duration,
    events: mpsc::UnboundedSender<PaymentEvent>,
) -> WatcherHandle {
    let (tx, rx) = watch::channel(false);
    tokio::spawn(run_watcher(
        provider,
        session,
        transaction_id,
        interval,
        rx,
        events,
    ));
    WatcherHandle {
        shutdown: tx,
        cancelled: AtomicBool::new(false),
    }
}

/// Poll the provider until the charge settles or the watcher is cancelled.
/// Checks run one at a time, so a slow check delays the next tick instead
/// of overlapping it. Transient check failures are logged and retried on
/// the next tick; nothing is surfaced to the caller.
pub async fn run_watcher(
    provider: Arc<dyn PixProvider>,
    session: Arc<Mutex<PollingSession>>,
    transaction_id: TransactionId,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
    events: mpsc::UnboundedSender<PaymentEvent>,
) {
    tracing::debug!(transaction_id = %transaction_id, "payment watcher started");

    loop {
        tokio::select! {
            _ = shutdown.changed() => {
                tracing::debug!(transaction_id = %transaction_id, "payment watcher cancelled");
                return;
            }
            _ = tokio::time::sleep(interval) => {}
        }

        match provider.fetch_status(&transaction_id).await {
            Ok(status) => {
                let outcome = {
                    let mut session = session.lock().expect("session lock poisoned");
                    // the session may have moved on to another charge while
                    // this check was in flight
                    if session.transaction_id() != Some(&transaction_id) {
                        return;
                    }
                    session.observe_status(status.clone())
                };

                match outcome {
                    StatusOutcome::ConfirmedNow => {
                        tracing::info!(transaction_id = %transaction_id, "payment confirmed");
                        let _ = events.send(PaymentEvent::Confirmed {
                            transaction_id: transaction_id.clone(),
                        });
                        return;
                    }
                    StatusOutcome::AlreadyConfirmed => return,
                    StatusOutcome::StillWaiting => {
                        tracing::debug!(
                            transaction_id = %transaction_id,
                            status = %status,
                            "payment not settled yet"
                        );
                    }
                }
            }
            Err(e) => {
                tracing::warn!(
                    transaction_id = %transaction_id,
                    error = %e,
                    "status check failed, will retry"
                );
            }
        }
    }
}
