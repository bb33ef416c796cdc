use crate::api_client::Client;
use crate::sync::SyncEngine;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Read side of the online/offline state. Handed to whoever needs to ask
/// "are we online right now" without owning the monitor.
#[derive(Debug, Clone)]
pub struct Connectivity {
    rx: watch::Receiver<bool>,
}

impl Connectivity {
    /// A state that never changes. One-shot commands probe once and use
    /// this; tests use it to force either side.
    pub fn fixed(online: bool) -> Self {
        let (_, rx) = watch::channel(online);
        Self { rx }
    }

    pub fn is_online(&self) -> bool {
        *self.rx.borrow()
    }
}

/// Watches the remote store's health endpoint and keeps the binary
/// online/offline state current. A reconnect kicks the sync engine; going
/// offline only updates state and lets any in-flight sync fail on its own.
pub struct ConnectivityMonitor {
    client: Client,
    interval: Duration,
    tx: watch::Sender<bool>,
}

impl ConnectivityMonitor {
    /// Probes once so the state starts from the actual network status.
    pub async fn start(client: Client, interval: Duration) -> (Self, Connectivity) {
        let online = Self::probe(&client).await;
        debug!("initial connectivity: {}", if online { "online" } else { "offline" });
        let (tx, rx) = watch::channel(online);
        (
            Self {
                client,
                interval,
                tx,
            },
            Connectivity { rx },
        )
    }

    /// Online means the health check answered within the request timeout.
    pub async fn probe(client: &Client) -> bool {
        client.health_check().await.is_ok()
    }

    pub fn is_online(&self) -> bool {
        *self.tx.borrow()
    }

    /// Re-probes on the configured interval until the caller drops the
    /// future. Sync failures after a reconnect are logged and left for the
    /// next transition.
    pub async fn run(self, engine: &SyncEngine) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let online = Self::probe(&self.client).await;
            let was_online = *self.tx.borrow();
            if online == was_online {
                continue;
            }

            self.tx.send_replace(online);
            if online {
                info!("connection restored");
                match engine.trigger().await {
                    Ok(outcome) => debug!("sync after reconnect: {outcome:?}"),
                    Err(err) => warn!("sync after reconnect failed: {err}"),
                }
            } else {
                info!("connection lost");
            }
        }
    }
}
