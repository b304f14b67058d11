//! # Document Hash
//!
//! Tamper-evidence checksum stamped on generated documents.
//!
//! The hash is a pure function of the canonical form: petition id, report
//! id, the sorted legal ids of all signers, the stats block, and the last
//! mutation timestamp. Signature insertion order does not affect it.
//!
//! This is a display checksum, not a security primitive: it lets a reader
//! detect that two renderings describe different ledgers, nothing more.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use shared_types::{Petition, PetitionError, PetitionStats};

/// Number of digest bytes kept for display.
const DISPLAY_BYTES: usize = 8;

/// Canonical form serialized for hashing. Field order is fixed by this
/// struct definition; changing it changes every hash.
#[derive(Serialize)]
struct CanonicalDocument<'a> {
    petition_id: &'a str,
    report_id: &'a str,
    signer_legal_ids: Vec<&'a str>,
    stats: &'a PetitionStats,
    updated_at: DateTime<Utc>,
}

/// Compute the document hash for a petition.
///
/// Returns an uppercase hexadecimal string (16 chars: the first
/// [`DISPLAY_BYTES`] bytes of a SHA-256 over the canonical JSON form).
pub fn document_hash(petition: &Petition) -> Result<String, PetitionError> {
    let mut signer_legal_ids: Vec<&str> = petition
        .signatures
        .iter()
        .map(|s| s.legal_id.as_str())
        .collect();
    signer_legal_ids.sort_unstable();

    let canonical = CanonicalDocument {
        petition_id: &petition.id,
        report_id: &petition.id,
        signer_legal_ids,
        stats: &petition.stats,
        updated_at: petition.updated_at,
    };

    let json = serde_json::to_string(&canonical)
        .map_err(|e| PetitionError::Serialization(e.to_string()))?;

    let digest = Sha256::digest(json.as_bytes());
    Ok(hex::encode_upper(&digest[..DISPLAY_BYTES]))
}
