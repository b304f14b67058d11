//! Ledger, stats and access-gate invariants exercised through the public
//! petition API.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cl_01_petition_store::{
        InMemoryPetitionRepository, PetitionApi, PetitionRepository, PetitionService,
        SIGNATURE_THRESHOLD,
    };
    use shared_types::entities::StatsPatch;

    use crate::integration::fixtures::{report, requester, signature};

    fn service() -> PetitionService<InMemoryPetitionRepository> {
        civic_telemetry::init_test_telemetry();
        PetitionService::new(Arc::new(InMemoryPetitionRepository::new()))
    }

    #[test]
    fn test_duplicate_legal_id_adds_exactly_one_signature() {
        let service = service();
        service
            .create_petition(&report("r1"), requester("u1", "111", false))
            .unwrap();

        // Same legal id, every other field distinct
        service.add_signature("r1", signature("u2", "222")).unwrap();
        service.add_signature("r1", signature("u3", "222")).unwrap();

        let petition = service.get_petition("r1").unwrap().unwrap();
        assert_eq!(petition.signatures.len(), 1);
        assert_eq!(petition.signatures[0].user_id, "u2");
    }

    #[test]
    fn test_stats_counter_tracks_ledger_length() {
        let service = service();
        service
            .create_petition(&report("r1"), requester("u1", "111", false))
            .unwrap();

        service.add_signature("r1", signature("u2", "222")).unwrap();
        service.add_signature("r1", signature("u3", "333")).unwrap();
        let petition = service.get_petition("r1").unwrap().unwrap();
        assert_eq!(petition.stats.total_signatures, 2);
        assert_eq!(petition.stats.total_signatures, petition.signature_count());

        service.remove_signature("r1", "222").unwrap();
        let petition = service.get_petition("r1").unwrap().unwrap();
        assert_eq!(petition.stats.total_signatures, 1);
        assert_eq!(petition.stats.total_signatures, petition.signature_count());
    }

    #[test]
    fn test_external_stats_push_cannot_touch_signature_counter() {
        let service = service();
        service
            .create_petition(&report("r1"), requester("u1", "111", false))
            .unwrap();
        service.add_signature("r1", signature("u2", "222")).unwrap();

        service
            .update_stats(
                "r1",
                StatsPatch {
                    total_supports: Some(9_000),
                    total_views: Some(100),
                    total_comments: None,
                    total_shares: None,
                },
            )
            .unwrap();

        let petition = service.get_petition("r1").unwrap().unwrap();
        assert_eq!(petition.stats.total_signatures, 1);
        assert_eq!(petition.stats.total_supports, 9_000);
        assert_eq!(petition.stats.total_views, 100);
    }

    #[test]
    fn test_view_gate_threshold_boundary() {
        let service = service();
        service
            .create_petition(&report("r1"), requester("u1", "111", false))
            .unwrap();

        for i in 0..SIGNATURE_THRESHOLD - 1 {
            service
                .add_signature("r1", signature(&format!("s{i}"), &format!("cpf-{i}")))
                .unwrap();
        }
        assert!(!service.can_view_petition("r1", "stranger", false).unwrap());
        assert!(!service.has_reached_signature_threshold("r1").unwrap());

        // The thousandth signature unlocks viewing for signers only
        service.add_signature("r1", signature("s999", "cpf-999")).unwrap();
        assert!(service.has_reached_signature_threshold("r1").unwrap());
        assert!(service.can_view_petition("r1", "s999", false).unwrap());
        assert!(!service.can_view_petition("r1", "stranger", false).unwrap());
    }

    #[test]
    fn test_download_gate_ignores_signing_and_threshold() {
        let service = service();
        service
            .create_petition(&report("r1"), requester("u1", "111", false))
            .unwrap();

        // Seed a 50k-signature ledger through the repository; appending
        // one by one over the API would re-clone the growing aggregate
        // fifty thousand times.
        let mut petition = service.get_petition("r1").unwrap().unwrap();
        petition.signatures = (0..50_000u64)
            .map(|i| signature(&format!("s{i}"), &format!("cpf-{i}")))
            .collect();
        petition.stats.total_signatures = petition.signature_count();
        service.repository().upsert(petition).unwrap();

        // s42 signed a 50k petition but is not on the allow-list
        assert!(service.can_view_petition("r1", "s42", false).unwrap());
        assert!(!service.can_download_petition("r1", "s42", false).unwrap());
        assert!(service.can_download_petition("r1", "s42", true).unwrap());
    }

    #[test]
    fn test_anonymous_petition_gated_to_admins() {
        let service = service();
        service
            .create_petition(&report("r1"), requester("u1", "111", true))
            .unwrap();

        assert!(!service.can_view_petition("r1", "randomUser", false).unwrap());
        assert!(service.can_view_petition("r1", "randomUser", true).unwrap());
        assert!(!service.can_view_petition("r1", "u1", false).unwrap());
    }

    #[test]
    fn test_named_requester_is_on_both_allow_lists() {
        let service = service();
        service
            .create_petition(&report("r1"), requester("u1", "111", false))
            .unwrap();

        assert!(service.can_view_petition("r1", "u1", false).unwrap());
        assert!(service.can_download_petition("r1", "u1", false).unwrap());
    }

    #[test]
    fn test_gates_answer_false_for_unknown_petition() {
        let service = service();
        assert!(!service.can_view_petition("ghost", "u1", true).unwrap());
        assert!(!service.can_download_petition("ghost", "u1", true).unwrap());
        assert!(!service.has_reached_signature_threshold("ghost").unwrap());
    }
}
