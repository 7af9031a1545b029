// libs/layout-cell/src/services/observer.rs
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use shared_config::AppConfig;

use crate::models::{ConsolidationReport, ElementNode, MutationRecord, ObserverError};
use crate::services::consolidator::HeaderConsolidator;

const MUTATION_BUFFER: usize = 64;

/// Background task that keeps a live document free of duplicate headers.
///
/// One pass runs after `initial_delay`; after that a pass runs whenever a mutation
/// adds a node that is, or contains, a header candidate. The task ends when every
/// mutation sender is gone, or immediately when the observer is dropped.
pub struct HeaderObserver {
    mutations: mpsc::Sender<MutationRecord>,
    reports: watch::Receiver<Option<ConsolidationReport>>,
    task: Option<JoinHandle<usize>>,
}

impl HeaderObserver {
    pub fn spawn(
        consolidator: HeaderConsolidator,
        document: Arc<RwLock<ElementNode>>,
        initial_delay: Duration,
    ) -> Self {
        let (mutations, rx) = mpsc::channel(MUTATION_BUFFER);
        let (report_tx, reports) = watch::channel(None);

        let task = tokio::spawn(observe(consolidator, document, initial_delay, rx, report_tx));

        Self {
            mutations,
            reports,
            task: Some(task),
        }
    }

    pub fn from_config(
        consolidator: HeaderConsolidator,
        document: Arc<RwLock<ElementNode>>,
        config: &AppConfig,
    ) -> Self {
        let delay = Duration::from_millis(config.header_consolidation_delay_ms);
        Self::spawn(consolidator, document, delay)
    }

    pub fn mutations(&self) -> mpsc::Sender<MutationRecord> {
        self.mutations.clone()
    }

    pub async fn record(&self, record: MutationRecord) -> Result<(), ObserverError> {
        self.mutations
            .send(record)
            .await
            .map_err(|_| ObserverError::Stopped)
    }

    /// Latest consolidation report; changes after every pass.
    pub fn reports(&self) -> watch::Receiver<Option<ConsolidationReport>> {
        self.reports.clone()
    }

    pub fn abort(&self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }

    /// Closes this observer's sender and waits for the task, returning the number
    /// of passes it ran. Waits as long as cloned senders are still alive.
    pub async fn shutdown(mut self) -> Result<usize, ObserverError> {
        let task = self.task.take().ok_or(ObserverError::Stopped)?;
        drop(self);
        task.await.map_err(|_| ObserverError::Stopped)
    }
}

impl Drop for HeaderObserver {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn observe(
    consolidator: HeaderConsolidator,
    document: Arc<RwLock<ElementNode>>,
    initial_delay: Duration,
    mut mutations: mpsc::Receiver<MutationRecord>,
    reports: watch::Sender<Option<ConsolidationReport>>,
) -> usize {
    let mut passes = 0;
    let initial = tokio::time::sleep(initial_delay);
    tokio::pin!(initial);
    let mut initial_pending = true;

    debug!("Header observer started, initial pass in {:?}", initial_delay);

    loop {
        tokio::select! {
            _ = &mut initial, if initial_pending => {
                initial_pending = false;
                run_pass(&consolidator, &document, &reports).await;
                passes += 1;
            }
            record = mutations.recv() => {
                let Some(record) = record else { break };
                if apply_mutation(&consolidator, &document, record).await {
                    debug!("DOM changes detected, reconsolidating headers");
                    run_pass(&consolidator, &document, &reports).await;
                    passes += 1;
                }
            }
        }
    }

    debug!("Header observer stopped after {} pass(es)", passes);
    passes
}

/// Appends the added nodes and reports whether any of them warrants a new pass.
async fn apply_mutation(
    consolidator: &HeaderConsolidator,
    document: &RwLock<ElementNode>,
    record: MutationRecord,
) -> bool {
    let mut doc = document.write().await;
    let Some(parent) = doc.node_at_mut(&record.parent) else {
        warn!("Ignoring mutation under missing parent {:?}", record.parent);
        return false;
    };

    let relevant = record
        .added
        .iter()
        .any(|node| consolidator.selectors().matches_within(node));
    parent.children.extend(record.added);
    relevant
}

async fn run_pass(
    consolidator: &HeaderConsolidator,
    document: &RwLock<ElementNode>,
    reports: &watch::Sender<Option<ConsolidationReport>>,
) {
    let report = {
        let mut doc = document.write().await;
        consolidator.consolidate(&mut doc)
    };
    reports.send_replace(Some(report));
}
