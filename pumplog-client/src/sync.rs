use crate::api_client::Client;
use crate::connectivity::Connectivity;
use crate::domain::Entry;
use crate::store::LocalStore;
use eyre::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;
use uuid::Uuid;

/// What a trigger did, so callers can report it without the engine printing
/// anything itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Transmitted this many entries and confirmed them locally.
    Synced(usize),
    /// Nothing was pending.
    UpToDate,
    /// Currently offline; nothing attempted.
    Offline,
    /// Another batch is in flight; this trigger was dropped.
    InFlight,
}

/// Drives transmission of unsynced entries to the remote store.
///
/// 1. Gather the pending set at one point in time.
/// 2. Transmit it as a single batch.
/// 3. On success, flip `synced` for exactly that batch. Entries appended
///    while the batch was in flight wait for the next trigger.
///
/// On failure nothing is marked and the batch stays eligible; there is no
/// retry loop here, the next trigger (reconnect or save) re-attempts.
///
/// Delivery is at-least-once: a crash between transmit-success and the
/// local confirm means the batch goes out again next time, and the remote
/// dedupes it on the entry id.
pub struct SyncEngine {
    store: LocalStore,
    client: Client,
    connectivity: Connectivity,
    syncing: AtomicBool,
}

impl SyncEngine {
    pub fn new(store: LocalStore, client: Client, connectivity: Connectivity) -> Self {
        Self {
            store,
            client,
            connectivity,
            syncing: AtomicBool::new(false),
        }
    }

    /// At most one batch in flight: overlapping triggers are dropped, not
    /// queued. There is no parallelism to guard against, only interleaved
    /// completions, so a flag is all the mutual exclusion this needs.
    pub async fn trigger(&self) -> Result<SyncOutcome> {
        if !self.connectivity.is_online() {
            return Ok(SyncOutcome::Offline);
        }
        if self
            .syncing
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Ok(SyncOutcome::InFlight);
        }

        let res = self.sync_batch().await;
        self.syncing.store(false, Ordering::SeqCst);
        res
    }

    async fn sync_batch(&self) -> Result<SyncOutcome> {
        let batch = self.store.unsynced();
        if batch.is_empty() {
            return Ok(SyncOutcome::UpToDate);
        }

        debug!("uploading {} entries", batch.len());
        let records = batch.iter().map(Entry::to_remote).collect::<Vec<_>>();
        self.client.post_entries(&records).await?;

        let ids = batch.iter().map(|x| x.id).collect::<Vec<Uuid>>();
        self.store.mark_synced(&ids)?;

        Ok(SyncOutcome::Synced(batch.len()))
    }
}
