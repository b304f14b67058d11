//! Cross-component integration flows.

pub mod document_flow;
pub mod ledger_properties;
pub mod sync_flow;

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::Utc;
    use shared_types::entities::{
        ReportAuthor, ReportLocation, ReportSnapshot, Requester, Signature,
    };

    pub fn report(id: &str) -> ReportSnapshot {
        ReportSnapshot {
            id: id.to_string(),
            title: "Córrego assoreado".to_string(),
            content: "Risco de alagamento na comunidade".to_string(),
            category: "meio-ambiente".to_string(),
            location: ReportLocation {
                city: "Recife".to_string(),
                state: "PE".to_string(),
            },
            tags: vec!["enchente".to_string()],
            created_at: Utc::now(),
            author: ReportAuthor {
                id: "u1".to_string(),
                name: "Ana Lima".to_string(),
                is_anonymous: false,
            },
            supports: 0,
            views: 0,
            comments: 0,
            shares: 0,
            media: vec![],
            evidence_files: vec![],
            updates: vec![],
        }
    }

    pub fn requester(user_id: &str, legal_id: &str, anonymous: bool) -> Requester {
        Requester {
            user_id: user_id.to_string(),
            name: format!("User {user_id}"),
            legal_id: legal_id.to_string(),
            email: format!("{user_id}@example.com"),
            is_anonymous: anonymous,
        }
    }

    pub fn signature(user_id: &str, legal_id: &str) -> Signature {
        Signature {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: format!("Signer {user_id}"),
            legal_id: legal_id.to_string(),
            email: format!("{user_id}@example.com"),
            signed_at: Utc::now(),
        }
    }
}
