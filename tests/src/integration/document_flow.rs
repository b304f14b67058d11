//! Pagination, hashing and rendered-document flows through the document
//! engine backed by a live petition store.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use cl_01_petition_store::{InMemoryPetitionRepository, PetitionApi, PetitionService};
    use cl_02_document_engine::domain::{document_hash, page_slice, total_pages};
    use cl_02_document_engine::{DocumentApi, DocumentService};
    use shared_types::PetitionError;

    use crate::integration::fixtures::{report, requester, signature};

    fn stack() -> (
        PetitionService<InMemoryPetitionRepository>,
        DocumentService<InMemoryPetitionRepository>,
    ) {
        civic_telemetry::init_test_telemetry();
        let store = PetitionService::new(Arc::new(InMemoryPetitionRepository::new()));
        let docs = DocumentService::new(store.repository());
        (store, docs)
    }

    #[test]
    fn test_pagination_covers_ledger_exactly_once() {
        let (store, _) = stack();
        store
            .create_petition(&report("r1"), requester("u1", "111", false))
            .unwrap();
        for i in 0..23 {
            store
                .add_signature("r1", signature(&format!("s{i}"), &format!("cpf-{i}")))
                .unwrap();
        }
        let petition = store.get_petition("r1").unwrap().unwrap();

        for per_page in [1, 5, 7, 23, 30] {
            let pages = total_pages(petition.signatures.len(), per_page);
            let mut seen: Vec<String> = Vec::new();
            for page in 1..=pages {
                seen.extend(
                    page_slice(&petition.signatures, page, per_page)
                        .iter()
                        .map(|s| s.legal_id.clone()),
                );
            }

            // Complete, disjoint and order-preserving
            assert_eq!(seen.len(), 23, "per_page={per_page}");
            assert_eq!(seen.iter().collect::<HashSet<_>>().len(), 23);
            let expected: Vec<String> = petition
                .signatures
                .iter()
                .map(|s| s.legal_id.clone())
                .collect();
            assert_eq!(seen, expected);
        }
    }

    #[test]
    fn test_hash_ignores_signature_insertion_order() {
        let (store_a, _) = stack();
        let (store_b, _) = stack();
        for store in [&store_a, &store_b] {
            store
                .create_petition(&report("r1"), requester("u1", "111", false))
                .unwrap();
        }

        store_a.add_signature("r1", signature("u2", "222")).unwrap();
        store_a.add_signature("r1", signature("u3", "333")).unwrap();
        store_b.add_signature("r1", signature("u3", "333")).unwrap();
        store_b.add_signature("r1", signature("u2", "222")).unwrap();

        // Align the volatile fields the hash covers
        let mut a = store_a.get_petition("r1").unwrap().unwrap();
        let b = store_b.get_petition("r1").unwrap().unwrap();
        a.updated_at = b.updated_at;

        assert_eq!(document_hash(&a).unwrap(), document_hash(&b).unwrap());
    }

    #[test]
    fn test_hash_reacts_to_legal_id_change() {
        let (store, _) = stack();
        store
            .create_petition(&report("r1"), requester("u1", "111", false))
            .unwrap();
        store.add_signature("r1", signature("u2", "222")).unwrap();

        let original = store.get_petition("r1").unwrap().unwrap();
        let mut tampered = original.clone();
        tampered.signatures[0].legal_id = "999".to_string();

        assert_ne!(
            document_hash(&original).unwrap(),
            document_hash(&tampered).unwrap()
        );
    }

    #[test]
    fn test_end_to_end_single_signature_page() {
        let (store, docs) = stack();
        store
            .create_petition(&report("r1"), requester("u1", "111", false))
            .unwrap();
        store.add_signature("r1", signature("u2", "222")).unwrap();
        store.add_signature("r1", signature("u3", "333")).unwrap();

        assert_eq!(docs.total_pages("r1", 1).unwrap(), 2);

        let page1 = docs.generate_document(&"r1".to_string(), 1, 1).unwrap();
        assert!(page1.contains("00000001. Signer u2"));
        assert!(!page1.contains("00000002."));
        assert!(page1.contains("Página 1 de 2"));

        // Requester section shows the named author, not anonymized
        assert!(page1.contains("Nome: User u1"));
        assert!(page1.contains("CPF: 111"));
        assert!(!page1.contains("ANÔNIMO"));

        let page2 = docs.generate_document(&"r1".to_string(), 2, 1).unwrap();
        assert!(page2.contains("00000002. Signer u3"));
        assert!(!page2.contains("00000001."));
    }

    #[test]
    fn test_generate_document_requires_existing_petition() {
        let (_, docs) = stack();
        assert!(matches!(
            docs.generate_document(&"ghost".to_string(), 1, 30),
            Err(PetitionError::PetitionNotFound { .. })
        ));
        assert_eq!(docs.total_pages("ghost", 30).unwrap(), 0);
    }

    #[test]
    fn test_generated_hash_round_trips_through_store() {
        let (store, docs) = stack();
        store
            .create_petition(&report("r1"), requester("u1", "111", false))
            .unwrap();
        store.add_signature("r1", signature("u2", "222")).unwrap();

        let rendered = docs.generate_document(&"r1".to_string(), 1, 30).unwrap();
        let stored = store
            .get_petition("r1")
            .unwrap()
            .unwrap()
            .document_hash
            .expect("hash stored");

        assert!(rendered.contains(&format!("Hash do documento: {stored}")));
    }
}
