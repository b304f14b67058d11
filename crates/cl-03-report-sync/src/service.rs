//! Report synchronization service.
//!
//! Owns the per-report sync tasks that mirror the external platform into
//! the petition store:
//!
//! - content sync runs once at start and creates the petition if absent;
//! - signature sync is event-driven off the shared bus and reconciles the
//!   ledger against the full signer list on every toggle;
//! - stats sync runs every 5 seconds and on report refresh;
//! - feed sync (updates + milestone achievements) runs every 10 seconds
//!   and on report refresh.
//!
//! All pushes are idempotent on the store side, so overlapping passes only
//! cost repeated writes, never duplicated state. Each field family has
//! last-writer-wins semantics across tasks.

use crate::domain::{SignerBook, SyncError};
use crate::ports::{DirectoryError, ReportSource, SignerContact, SignerDirectory};
use chrono::Utc;
use cl_01_petition_store::domain::milestones::evaluate_all;
use cl_01_petition_store::PetitionApi;
use shared_bus::{EventFilter, EventPublisher, EventTopic, InMemoryEventBus, PlatformEvent};
use shared_types::entities::{Requester, Signature, StatsPatch};
use shared_types::{EMAIL_PENDING, LEGAL_ID_PENDING};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Sync cadence configuration.
#[derive(Debug, Clone, Copy)]
pub struct SyncConfig {
    /// Interval between stats pushes.
    pub stats_interval: Duration,
    /// Interval between update/achievement pushes.
    pub feed_interval: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            stats_interval: Duration::from_secs(5),
            feed_interval: Duration::from_secs(10),
        }
    }
}

/// Handle over the running sync tasks of one report.
///
/// Dropping the handle without calling [`stop`](Self::stop) leaves the
/// tasks running until the runtime shuts down.
#[derive(Debug)]
pub struct SyncHandle {
    shutdown: watch::Sender<bool>,
    tasks: Vec<JoinHandle<()>>,
}

impl SyncHandle {
    /// Signal all tasks to stop and wait for them to finish.
    ///
    /// An in-flight directory lookup is not interrupted; its result is
    /// discarded when the task observes the signal at the next await.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        for task in self.tasks {
            let _ = task.await;
        }
    }
}

/// Drives the sync tasks for individual reports.
pub struct ReportSyncService<S, D, A> {
    source: Arc<S>,
    directory: Arc<D>,
    store: Arc<A>,
    bus: Arc<InMemoryEventBus>,
    config: SyncConfig,
}

impl<S, D, A> ReportSyncService<S, D, A>
where
    S: ReportSource + 'static,
    D: SignerDirectory + 'static,
    A: PetitionApi + 'static,
{
    pub fn new(
        source: Arc<S>,
        directory: Arc<D>,
        store: Arc<A>,
        bus: Arc<InMemoryEventBus>,
        config: SyncConfig,
    ) -> Self {
        Self {
            source,
            directory,
            store,
            bus,
            config,
        }
    }

    /// Start syncing one report.
    ///
    /// Runs the content sync inline (the petition must exist before any
    /// task pushes into it), then spawns the signature, stats and feed
    /// tasks. Fails only when the report source has no such report or the
    /// store rejects the creation.
    pub async fn start(&self, report_id: &str) -> Result<SyncHandle, SyncError> {
        let report = self
            .source
            .fetch_report(report_id)
            .await
            .ok_or_else(|| SyncError::ReportUnavailable {
                report_id: report_id.to_string(),
            })?;

        if self.store.get_petition(report_id)?.is_none() {
            let contact = resolve_or_pending(self.directory.as_ref(), &report.author.id).await;
            let requester = Requester {
                user_id: report.author.id.clone(),
                name: report.author.name.clone(),
                legal_id: contact.legal_id,
                email: contact.email,
                is_anonymous: report.author.is_anonymous,
            };
            self.store.create_petition(&report, requester)?;
            info!(report_id, "petition created from report snapshot");
        } else {
            debug!(report_id, "petition already exists, content sync skipped");
        }

        let (shutdown, _) = watch::channel(false);
        let tasks = vec![
            self.spawn_signature_task(report_id, shutdown.subscribe()),
            self.spawn_stats_task(report_id, shutdown.subscribe()),
            self.spawn_feed_task(report_id, shutdown.subscribe()),
        ];

        info!(report_id, "report sync started");
        Ok(SyncHandle { shutdown, tasks })
    }

    fn spawn_signature_task(
        &self,
        report_id: &str,
        mut shutdown: watch::Receiver<bool>,
    ) -> JoinHandle<()> {
        let source = Arc::clone(&self.source);
        let directory = Arc::clone(&self.directory);
        let store = Arc::clone(&self.store);
        let bus = Arc::clone(&self.bus);
        let mut subscription = self.bus.subscribe(
            EventFilter::topics(vec![EventTopic::Signatures]).with_report(report_id),
        );
        let report_id = report_id.to_string();

        tokio::spawn(async move {
            let mut book = SignerBook::new();

            // Initial reconcile repairs anything missed before the
            // subscription existed; toggles are level-triggered after that.
            reconcile_signatures(&*source, &*directory, &*store, &bus, &mut book, &report_id)
                .await;

            loop {
                tokio::select! {
                    _ = shutdown.changed() => break,
                    event = subscription.recv() => {
                        if event.is_none() {
                            break;
                        }
                        reconcile_signatures(
                            &*source, &*directory, &*store, &bus, &mut book, &report_id,
                        )
                        .await;
                    }
                }
            }
            debug!(report_id, "signature sync task stopped");
        })
    }

    fn spawn_stats_task(
        &self,
        report_id: &str,
        mut shutdown: watch::Receiver<bool>,
    ) -> JoinHandle<()> {
        let source = Arc::clone(&self.source);
        let store = Arc::clone(&self.store);
        let bus = Arc::clone(&self.bus);
        let mut subscription = self
            .bus
            .subscribe(EventFilter::topics(vec![EventTopic::Reports]).with_report(report_id));
        let report_id = report_id.to_string();
        let period = self.config.stats_interval;

        tokio::spawn(async move {
            let mut tick = tokio::time::interval(period);
            tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = shutdown.changed() => break,
                    _ = tick.tick() => {
                        push_stats(&*source, &*store, &bus, &report_id).await;
                    }
                    event = subscription.recv() => {
                        if event.is_none() {
                            break;
                        }
                        push_stats(&*source, &*store, &bus, &report_id).await;
                    }
                }
            }
            debug!(report_id, "stats sync task stopped");
        })
    }

    fn spawn_feed_task(
        &self,
        report_id: &str,
        mut shutdown: watch::Receiver<bool>,
    ) -> JoinHandle<()> {
        let source = Arc::clone(&self.source);
        let store = Arc::clone(&self.store);
        let bus = Arc::clone(&self.bus);
        let mut subscription = self
            .bus
            .subscribe(EventFilter::topics(vec![EventTopic::Reports]).with_report(report_id));
        let report_id = report_id.to_string();
        let period = self.config.feed_interval;

        tokio::spawn(async move {
            let mut tick = tokio::time::interval(period);
            tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = shutdown.changed() => break,
                    _ = tick.tick() => {
                        push_feed(&*source, &*store, &bus, &report_id).await;
                    }
                    event = subscription.recv() => {
                        if event.is_none() {
                            break;
                        }
                        push_feed(&*source, &*store, &bus, &report_id).await;
                    }
                }
            }
            debug!(report_id, "feed sync task stopped");
        })
    }
}

/// Resolve contact data, degrading to the pending sentinels on any
/// directory failure.
async fn resolve_or_pending<D: SignerDirectory>(directory: &D, user_id: &str) -> SignerContact {
    match directory.resolve(user_id).await {
        Ok(contact) => contact,
        Err(DirectoryError::NotFound { .. }) => {
            debug!(user_id, "no directory entry, using pending sentinels");
            SignerContact {
                legal_id: LEGAL_ID_PENDING.to_string(),
                email: EMAIL_PENDING.to_string(),
            }
        }
        Err(err) => {
            warn!(user_id, error = %err, "directory lookup failed, using pending sentinels");
            SignerContact {
                legal_id: LEGAL_ID_PENDING.to_string(),
                email: EMAIL_PENDING.to_string(),
            }
        }
    }
}

/// Bring the ledger in line with the current signer list.
async fn reconcile_signatures<S, D, A>(
    source: &S,
    directory: &D,
    store: &A,
    bus: &InMemoryEventBus,
    book: &mut SignerBook,
    report_id: &str,
) where
    S: ReportSource,
    D: SignerDirectory,
    A: PetitionApi,
{
    let current = source.current_signers(report_id).await;

    for entry in &current {
        if book.contains(&entry.user_id) {
            continue;
        }
        let contact = resolve_or_pending(directory, &entry.user_id).await;
        let signature = Signature {
            id: Uuid::new_v4().to_string(),
            user_id: entry.user_id.clone(),
            name: entry.user_name.clone(),
            legal_id: contact.legal_id.clone(),
            email: contact.email,
            signed_at: entry.signed_at,
        };
        match store.add_signature(report_id, signature) {
            Ok(()) => book.record(entry.user_id.clone(), contact.legal_id),
            Err(err) => report_failure(bus, report_id, "signature-sync", &err).await,
        }
    }

    let current_ids: Vec<String> = current.iter().map(|s| s.user_id.clone()).collect();
    for (user_id, legal_id) in book.retire_absent(&current_ids) {
        debug!(report_id, user_id = user_id.as_str(), "signer departed, removing signature");
        if let Err(err) = store.remove_signature(report_id, &legal_id) {
            report_failure(bus, report_id, "signature-sync", &err).await;
        }
    }
}

/// Push the report's engagement counters into the store.
///
/// `total_signatures` is never part of the patch: the ledger owns it, and
/// the report's "supports" number lands in `total_supports` instead.
async fn push_stats<S, A>(source: &S, store: &A, bus: &InMemoryEventBus, report_id: &str)
where
    S: ReportSource,
    A: PetitionApi,
{
    let Some(report) = source.fetch_report(report_id).await else {
        debug!(report_id, "report gone from source, stats push skipped");
        return;
    };

    let patch = StatsPatch {
        total_supports: Some(report.supports),
        total_views: Some(report.views),
        total_comments: Some(report.comments),
        total_shares: Some(report.shares),
    };
    if let Err(err) = store.update_stats(report_id, patch) {
        report_failure(bus, report_id, "stats-sync", &err).await;
    }
}

/// Push the report's update feed and re-evaluate milestone achievements.
async fn push_feed<S, A>(source: &S, store: &A, bus: &InMemoryEventBus, report_id: &str)
where
    S: ReportSource,
    A: PetitionApi,
{
    let Some(report) = source.fetch_report(report_id).await else {
        debug!(report_id, "report gone from source, feed push skipped");
        return;
    };

    for update in report.updates {
        if let Err(err) = store.add_update(report_id, update) {
            report_failure(bus, report_id, "feed-sync", &err).await;
            return;
        }
    }

    let count = match store.get_petition(report_id) {
        Ok(Some(petition)) => petition.signature_count(),
        Ok(None) => return,
        Err(err) => {
            report_failure(bus, report_id, "feed-sync", &err).await;
            return;
        }
    };

    for achievement in evaluate_all(count, Utc::now()) {
        if let Err(err) = store.add_achievement(report_id, achievement) {
            report_failure(bus, report_id, "feed-sync", &err).await;
            return;
        }
    }
}

async fn report_failure(
    bus: &InMemoryEventBus,
    report_id: &str,
    component: &str,
    err: &shared_types::PetitionError,
) {
    warn!(report_id, component, error = %err, "sync pass failed");
    bus.publish(PlatformEvent::SyncFailed {
        report_id: report_id.to_string(),
        component: component.to_string(),
        error: err.to_string(),
    })
    .await;
}
