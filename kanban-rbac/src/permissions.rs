//! # Permission Sets
//!
//! Collections of catalog permissions, as granted to a board role or
//! aggregated for a user.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::catalog::{Permission, PermissionCategory};

/// A set of permissions that can be granted to roles or users.
///
/// # Example
///
/// ```
/// use kanban_rbac::{Permission, PermissionSet};
///
/// let mut set = PermissionSet::new();
/// set.add(Permission::BoardsView);
/// set.add(Permission::CardsCreate);
///
/// assert!(set.has(Permission::BoardsView));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    permissions: HashSet<Permission>,
}

impl PermissionSet {
    /// Create a new empty permission set.
    pub fn new() -> Self {
        Self {
            permissions: HashSet::new(),
        }
    }

    /// Add a permission to the set.
    pub fn add(&mut self, permission: Permission) {
        self.permissions.insert(permission);
    }

    /// Add multiple permissions to the set.
    pub fn add_all<I>(&mut self, permissions: I)
    where
        I: IntoIterator<Item = Permission>,
    {
        self.permissions.extend(permissions);
    }

    /// Builder-style variant of [`PermissionSet::add_all`].
    pub fn with<I>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = Permission>,
    {
        self.add_all(permissions);
        self
    }

    /// Remove a permission from the set.
    ///
    /// # Returns
    ///
    /// `true` if the permission was present, `false` otherwise
    pub fn remove(&mut self, permission: Permission) -> bool {
        self.permissions.remove(&permission)
    }

    /// Check if the set contains a permission.
    pub fn has(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Iterate over the permissions in the set (unordered).
    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.permissions.iter().copied()
    }

    /// Permissions of one category held by this set.
    pub fn in_category(&self, category: PermissionCategory) -> impl Iterator<Item = Permission> + '_ {
        self.iter().filter(move |p| p.category() == category)
    }

    /// Merge another permission set into this one.
    pub fn merge(&mut self, other: &PermissionSet) {
        self.permissions.extend(other.permissions.iter().copied());
    }

    /// Create from a list of permission identifiers.
    ///
    /// Identifiers outside the catalog are dropped rather than failing the
    /// whole set, so a stale claim can never widen access.
    ///
    /// # Example
    ///
    /// ```
    /// use kanban_rbac::PermissionSet;
    ///
    /// let set = PermissionSet::from_strings(["boards.view", "cards.create", "cards.fly"]);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn from_strings<I, S>(perms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        perms
            .into_iter()
            .filter_map(|s| Permission::parse(s.as_ref()))
            .collect()
    }

    /// Identifiers of every permission in the set, sorted.
    pub fn to_strings(&self) -> Vec<String> {
        let mut out: Vec<String> = self.iter().map(String::from).collect();
        out.sort();
        out
    }

    /// Get the count of permissions.
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Check if every permission in this set is also in `other`.
    pub fn is_subset(&self, other: &PermissionSet) -> bool {
        self.permissions.is_subset(&other.permissions)
    }

    /// Check if this set contains all permissions from another set.
    pub fn contains_all(&self, other: &PermissionSet) -> bool {
        other.is_subset(self)
    }

    /// Check if this set contains any permission from another set.
    pub fn contains_any(&self, other: &PermissionSet) -> bool {
        !self.permissions.is_disjoint(&other.permissions)
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        Self {
            permissions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Permission> for PermissionSet {
    fn extend<T: IntoIterator<Item = Permission>>(&mut self, iter: T) {
        self.permissions.extend(iter);
    }
}
