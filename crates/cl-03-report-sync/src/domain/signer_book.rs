use std::collections::HashMap;

/// Bookkeeping of which ledger entry belongs to which signer.
///
/// The signature-toggle store identifies signers by `user_id`, but the
/// ledger removes by `legal_id`. The book remembers the mapping so that a
/// toggled-off signer can be retired from the ledger without another
/// directory round-trip.
#[derive(Debug, Default)]
pub struct SignerBook {
    entries: HashMap<String, String>,
}

impl SignerBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `user_id` signed under `legal_id`.
    pub fn record(&mut self, user_id: impl Into<String>, legal_id: impl Into<String>) {
        self.entries.insert(user_id.into(), legal_id.into());
    }

    /// Whether the book has an entry for this user.
    #[must_use]
    pub fn contains(&self, user_id: &str) -> bool {
        self.entries.contains_key(user_id)
    }

    /// Drain every recorded signer that is absent from `current`, returning
    /// their `(user_id, legal_id)` pairs for ledger removal.
    pub fn retire_absent(&mut self, current: &[String]) -> Vec<(String, String)> {
        let departed: Vec<String> = self
            .entries
            .keys()
            .filter(|user_id| !current.iter().any(|c| c == *user_id))
            .cloned()
            .collect();

        departed
            .into_iter()
            .filter_map(|user_id| {
                self.entries
                    .remove(&user_id)
                    .map(|legal_id| (user_id, legal_id))
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
