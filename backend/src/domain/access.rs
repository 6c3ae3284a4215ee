//! Garden permissions derived from ownership and sharing.
//!
//! Plant, note and recommendation operations inherit the permission of the
//! garden they belong to, so this is the only place access is decided.

use std::collections::BTreeSet;

use serde::Serialize;
use utoipa::ToSchema;

use super::{Error, UserId};

/// Permission flags for one (user, garden) pair.
///
/// ## Invariants
/// - `can_edit_users` and `can_delete` imply `can_view`.
/// - `can_edit` equals `can_view`; shared users may change garden fields and
///   plants but never the sharing set.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use garden_journal::domain::{GardenAccess, UserId};
///
/// let owner = UserId::random();
/// let friend = UserId::random();
/// let shared = BTreeSet::from([friend]);
///
/// assert!(GardenAccess::resolve(&owner, &shared, &friend).can_view);
/// assert!(!GardenAccess::resolve(&owner, &shared, &friend).can_edit_users);
/// assert!(!GardenAccess::resolve(&owner, &shared, &UserId::random()).can_view);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GardenAccess {
    pub can_view: bool,
    pub can_edit: bool,
    pub can_edit_users: bool,
    pub can_delete: bool,
}

impl GardenAccess {
    /// Derive the permissions of `user`.
    pub fn resolve(owner: &UserId, shared: &BTreeSet<UserId>, user: &UserId) -> Self {
        let is_owner = owner == user;
        let can_view = is_owner || shared.contains(user);
        Self {
            can_view,
            can_edit: can_view,
            can_edit_users: is_owner,
            can_delete: is_owner,
        }
    }

    /// Fail with [`Error::forbidden`] unless the garden is visible.
    pub fn require_view(self) -> Result<Self, Error> {
        if self.can_view {
            Ok(self)
        } else {
            Err(Error::forbidden("garden is not accessible"))
        }
    }

    /// Fail with [`Error::forbidden`] unless garden content may change.
    pub fn require_edit(self) -> Result<Self, Error> {
        if self.can_edit {
            Ok(self)
        } else {
            Err(Error::forbidden("garden is not editable"))
        }
    }

    /// Fail with [`Error::forbidden`] unless the garden may be deleted.
    pub fn require_delete(self) -> Result<Self, Error> {
        if self.can_delete {
            Ok(self)
        } else {
            Err(Error::forbidden("only the owner may delete a garden"))
        }
    }
}
