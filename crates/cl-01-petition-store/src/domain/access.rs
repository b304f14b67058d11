//! # Access Gate
//!
//! View/download permission rules for rendered petition documents.
//!
//! The rules model a whistleblower-protection pattern: a low-traction
//! petition is visible only to its requester and administrators. Once the
//! petition crosses [`SIGNATURE_THRESHOLD`] signatures, any signer can read
//! the full ledger document as a transparency mechanism. Download remains
//! restricted to the static allow-list regardless of signing.
//!
//! Denial is a `false` return, never an error.

use shared_types::entities::{Petition, PetitionPermissions, Requester, ADMIN_ROLE};

/// Signature count at which signing unlocks document viewing.
pub const SIGNATURE_THRESHOLD: u64 = 1000;

/// Decide whether a viewer may see the rendered document.
///
/// Administrators always pass. Below the threshold only the static
/// `can_view` allow-list passes; at or above it, signers pass too.
#[must_use]
pub fn can_view(petition: &Petition, viewer_id: &str, is_admin: bool) -> bool {
    if is_admin {
        return true;
    }

    let allow_listed = petition
        .permissions
        .can_view
        .iter()
        .any(|id| id == viewer_id);

    if petition.stats.total_signatures >= SIGNATURE_THRESHOLD {
        allow_listed || petition.has_signed(viewer_id)
    } else {
        allow_listed
    }
}

/// Decide whether a viewer may download the rendered document.
///
/// Strictly the static `can_download` allow-list plus administrators.
/// Signing never unlocks download; the asymmetry with [`can_view`] is
/// deliberate.
#[must_use]
pub fn can_download(petition: &Petition, viewer_id: &str, is_admin: bool) -> bool {
    if is_admin {
        return true;
    }

    petition
        .permissions
        .can_download
        .iter()
        .any(|id| id == viewer_id)
}

/// Whether the petition has crossed the view-unlock threshold.
#[must_use]
pub fn reached_threshold(petition: &Petition) -> bool {
    petition.stats.total_signatures >= SIGNATURE_THRESHOLD
}

/// Build the initial allow-lists for a new petition.
///
/// An anonymous requester yields lists holding only the admin role
/// sentinel, which no viewer id ever matches; the petition is then
/// reachable only through the `is_admin` path. This is fixed at creation
/// and never revisited.
#[must_use]
pub fn initial_permissions(requester: &Requester) -> PetitionPermissions {
    if requester.is_anonymous {
        PetitionPermissions {
            can_view: vec![ADMIN_ROLE.to_string()],
            can_download: vec![ADMIN_ROLE.to_string()],
        }
    } else {
        PetitionPermissions {
            can_view: vec![requester.user_id.clone()],
            can_download: vec![requester.user_id.clone()],
        }
    }
}
