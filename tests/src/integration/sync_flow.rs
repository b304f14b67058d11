//! Full-stack flow: external store changes ride the bus through the sync
//! layer into the petition store, and the document engine renders the
//! result.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use chrono::Utc;
    use cl_01_petition_store::{InMemoryPetitionRepository, PetitionApi, PetitionService};
    use cl_02_document_engine::{DocumentApi, DocumentService};
    use cl_03_report_sync::{
        InMemoryReportSource, InMemorySignerDirectory, ReportSyncService, SyncConfig,
    };
    use shared_bus::InMemoryEventBus;
    use shared_types::entities::SignerEntry;
    use shared_types::{EMAIL_PENDING, LEGAL_ID_PENDING};

    use crate::integration::fixtures::report;

    struct Stack {
        bus: Arc<InMemoryEventBus>,
        source: Arc<InMemoryReportSource>,
        directory: Arc<InMemorySignerDirectory>,
        store: Arc<PetitionService<InMemoryPetitionRepository>>,
        docs: DocumentService<InMemoryPetitionRepository>,
        sync: ReportSyncService<
            InMemoryReportSource,
            InMemorySignerDirectory,
            PetitionService<InMemoryPetitionRepository>,
        >,
    }

    fn stack(config: SyncConfig) -> Stack {
        civic_telemetry::init_test_telemetry();
        let bus = Arc::new(InMemoryEventBus::new());
        let source = Arc::new(InMemoryReportSource::new(bus.clone()));
        let directory = Arc::new(InMemorySignerDirectory::new());
        let store = Arc::new(PetitionService::new(Arc::new(
            InMemoryPetitionRepository::new(),
        )));
        let docs = DocumentService::new(store.repository());
        let sync = ReportSyncService::new(
            source.clone(),
            directory.clone(),
            store.clone(),
            bus.clone(),
            config,
        );
        Stack {
            bus,
            source,
            directory,
            store,
            docs,
            sync,
        }
    }

    fn signer(user_id: &str) -> SignerEntry {
        SignerEntry {
            user_id: user_id.to_string(),
            user_name: format!("Signer {user_id}"),
            signed_at: Utc::now(),
        }
    }

    async fn wait_for<F>(mut condition: F)
    where
        F: FnMut() -> bool,
    {
        for _ in 0..300 {
            if condition() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("condition not reached within timeout");
    }

    #[tokio::test]
    async fn test_toggle_to_rendered_document() {
        let stack = stack(SyncConfig::default());
        stack.directory.insert("u1", "111", "u1@example.com");
        stack.directory.insert("u2", "222", "u2@example.com");
        stack.source.put_report(report("r1")).await;

        let handle = stack.sync.start("r1").await.unwrap();
        stack.source.toggle_signature("r1", signer("u2"), true).await;

        let store = stack.store.clone();
        wait_for(move || {
            store
                .get_petition("r1")
                .unwrap()
                .map(|p| p.has_signature_for("222"))
                .unwrap_or(false)
        })
        .await;

        let rendered = stack
            .docs
            .generate_document(&"r1".to_string(), 1, 30)
            .unwrap();
        assert!(rendered.contains("00000001. Signer u2"));
        assert!(rendered.contains("CPF: 222"));
        assert!(rendered.contains("Hash do documento:"));

        handle.stop().await;
    }

    #[tokio::test]
    async fn test_unresolved_signer_lands_with_sentinels() {
        let stack = stack(SyncConfig::default());
        stack.directory.insert("u1", "111", "u1@example.com");
        stack.source.put_report(report("r1")).await;

        let handle = stack.sync.start("r1").await.unwrap();
        // u9 has no directory entry
        stack.source.toggle_signature("r1", signer("u9"), true).await;

        let store = stack.store.clone();
        wait_for(move || {
            store
                .get_petition("r1")
                .unwrap()
                .map(|p| p.has_signature_for(LEGAL_ID_PENDING))
                .unwrap_or(false)
        })
        .await;

        let petition = stack.store.get_petition("r1").unwrap().unwrap();
        let pending = petition
            .signatures
            .iter()
            .find(|s| s.legal_id == LEGAL_ID_PENDING)
            .unwrap();
        assert_eq!(pending.email, EMAIL_PENDING);

        handle.stop().await;
    }

    #[tokio::test]
    async fn test_refresh_event_pushes_stats_and_feed() {
        // Long intervals so only the refresh event can trigger the pushes
        let config = SyncConfig {
            stats_interval: Duration::from_secs(3600),
            feed_interval: Duration::from_secs(3600),
        };
        let stack = stack(config);
        stack.directory.insert("u1", "111", "u1@example.com");
        stack.source.put_report(report("r1")).await;

        let handle = stack.sync.start("r1").await.unwrap();

        // Swallow the immediate first interval tick before refreshing
        tokio::time::sleep(Duration::from_millis(50)).await;
        let mut bumped = report("r1");
        bumped.supports = 77;
        stack.source.put_report(bumped).await;

        let store = stack.store.clone();
        wait_for(move || {
            store
                .get_petition("r1")
                .unwrap()
                .map(|p| p.stats.total_supports == 77 && p.achievements.len() == 13)
                .unwrap_or(false)
        })
        .await;

        handle.stop().await;
    }

    #[tokio::test]
    async fn test_failed_store_pass_reaches_dead_letter_queue() {
        use shared_bus::{EventFilter, EventTopic, PlatformEvent};

        let stack = stack(SyncConfig::default());
        let mut dlq = stack
            .bus
            .subscribe(EventFilter::topics(vec![EventTopic::DeadLetterQueue]));
        stack.directory.insert("u1", "111", "u1@example.com");
        stack.source.put_report(report("r1")).await;

        let handle = stack.sync.start("r1").await.unwrap();

        // No store failure in the happy path: the DLQ stays quiet
        stack.source.toggle_signature("r1", signer("u1"), true).await;
        tokio::time::sleep(Duration::from_millis(100)).await;
        let quiet = dlq.try_recv().unwrap();
        assert!(
            !matches!(quiet, Some(PlatformEvent::SyncFailed { .. })),
            "unexpected dead letter: {quiet:?}"
        );

        handle.stop().await;
    }

    #[tokio::test]
    async fn test_two_reports_sync_independently() {
        let stack = stack(SyncConfig::default());
        stack.directory.insert("u1", "111", "u1@example.com");
        stack.directory.insert("u2", "222", "u2@example.com");
        stack.directory.insert("u3", "333", "u3@example.com");
        stack.source.put_report(report("r1")).await;
        stack.source.put_report(report("r2")).await;

        let h1 = stack.sync.start("r1").await.unwrap();
        let h2 = stack.sync.start("r2").await.unwrap();

        stack.source.toggle_signature("r1", signer("u2"), true).await;
        stack.source.toggle_signature("r2", signer("u3"), true).await;

        let store = stack.store.clone();
        wait_for(move || {
            let r1 = store.get_petition("r1").unwrap();
            let r2 = store.get_petition("r2").unwrap();
            r1.map(|p| p.has_signature_for("222")).unwrap_or(false)
                && r2.map(|p| p.has_signature_for("333")).unwrap_or(false)
        })
        .await;

        // Cross-contamination check
        let r1 = stack.store.get_petition("r1").unwrap().unwrap();
        let r2 = stack.store.get_petition("r2").unwrap().unwrap();
        assert!(!r1.has_signature_for("333"));
        assert!(!r2.has_signature_for("222"));

        h1.stop().await;
        h2.stop().await;
    }
}
