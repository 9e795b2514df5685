//! # Authorization Registry
//!
//! The immutable bundle of catalog, cumulative board-tier permission sets and
//! role hierarchy. Build it once at startup, wrap it in an `Arc`, and hand it
//! to the resolution service and gate. Nothing mutates it afterwards, so it is
//! shared across threads without locking.

use crate::catalog::Permission;
use crate::hierarchy::RoleHierarchy;
use crate::permissions::PermissionSet;
use crate::roles::BoardRole;

/// Permissions each board tier adds on top of the tier below it.
fn tier_additions(role: BoardRole) -> &'static [Permission] {
    match role {
        BoardRole::Viewer => &[
            Permission::BoardsView,
            Permission::ColumnsView,
            Permission::CardsView,
        ],
        BoardRole::Member => &[
            Permission::CardsCreate,
            Permission::CardsEdit,
            Permission::CardsMove,
            Permission::CardsAssign,
            Permission::CardsComment,
        ],
        BoardRole::Admin => &[
            Permission::BoardsEdit,
            Permission::BoardsManageMembers,
            Permission::ColumnsCreate,
            Permission::ColumnsEdit,
            Permission::ColumnsDelete,
            Permission::ColumnsReorder,
            Permission::CardsDelete,
        ],
        BoardRole::Owner => &[
            Permission::BoardsDelete,
            Permission::BoardsManageSettings,
            Permission::BoardsTransferOwnership,
        ],
    }
}

/// Process-wide authorization tables.
///
/// # Example
///
/// ```
/// use kanban_rbac::{AuthzRegistry, Permission};
///
/// let registry = AuthzRegistry::standard();
/// assert!(registry.permissions_for("Admin").has(Permission::CardsCreate));
/// assert!(!registry.permissions_for("admin").has(Permission::BoardsDelete));
/// assert!(registry.permissions_for("janitor").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct AuthzRegistry {
    /// Indexed by `BoardRole::rank() - 1`.
    tiers: [PermissionSet; 4],
    hierarchy: RoleHierarchy,
}

impl Default for AuthzRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl AuthzRegistry {
    /// Registry with the built-in system-role table.
    pub fn standard() -> Self {
        Self::with_hierarchy(RoleHierarchy::standard())
    }

    /// Registry using a custom role hierarchy.
    pub fn with_hierarchy(hierarchy: RoleHierarchy) -> Self {
        let mut cumulative = PermissionSet::new();
        let tiers = BoardRole::all().map(|role| {
            cumulative.add_all(tier_additions(role).iter().copied());
            cumulative.clone()
        });

        Self { tiers, hierarchy }
    }

    /// Every permission in the catalog, as a set.
    ///
    /// Used to seed a role with full access without hand-maintained lists.
    pub fn list_all(&self) -> PermissionSet {
        Permission::all().iter().copied().collect()
    }

    /// Cumulative permission set for a board role name (case-insensitive).
    ///
    /// Unknown roles get an empty set.
    pub fn permissions_for(&self, board_role: &str) -> PermissionSet {
        BoardRole::parse(board_role)
            .map(|role| self.tier(role).clone())
            .unwrap_or_default()
    }

    /// Cumulative permission set for a board role.
    pub fn tier(&self, role: BoardRole) -> &PermissionSet {
        &self.tiers[role.rank() as usize - 1]
    }

    /// The role hierarchy.
    pub fn hierarchy(&self) -> &RoleHierarchy {
        &self.hierarchy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PermissionCategory;

    #[test]
    fn test_tiers_are_strictly_cumulative() {
        let registry = AuthzRegistry::standard();
        for role in BoardRole::all() {
            if let Some(lower) = role.below() {
                let lower_set = registry.tier(lower);
                let upper_set = registry.tier(role);
                assert!(lower_set.is_subset(upper_set), "{lower} not within {role}");
                assert!(upper_set.len() > lower_set.len(), "{role} adds nothing over {lower}");
            }
        }
    }

    #[test]
    fn test_subset_for_every_permission() {
        let registry = AuthzRegistry::standard();
        for perm in Permission::all() {
            for (i, lower) in BoardRole::all().iter().enumerate() {
                for upper in &BoardRole::all()[i..] {
                    if registry.tier(*lower).has(*perm) {
                        assert!(registry.tier(*upper).has(*perm));
                    }
                }
            }
        }
    }

    #[test]
    fn test_permissions_for_case_insensitive() {
        let registry = AuthzRegistry::standard();
        assert_eq!(registry.permissions_for("OWNER"), registry.permissions_for("owner"));
        assert_eq!(registry.permissions_for("Member"), *registry.tier(BoardRole::Member));
    }

    #[test]
    fn test_unknown_role_is_empty() {
        let registry = AuthzRegistry::standard();
        assert!(registry.permissions_for("").is_empty());
        assert!(registry.permissions_for("superuser").is_empty());
    }

    #[test]
    fn test_admin_versus_owner_tier() {
        let registry = AuthzRegistry::standard();
        let admin = registry.permissions_for("admin");
        assert!(admin.has(Permission::CardsCreate));
        assert!(admin.has(Permission::BoardsManageMembers));
        assert!(!admin.has(Permission::BoardsDelete));
        assert!(registry.permissions_for("owner").has(Permission::BoardsDelete));
    }

    #[test]
    fn test_board_tiers_exclude_system_permissions() {
        let registry = AuthzRegistry::standard();
        let owner = registry.tier(BoardRole::Owner);
        assert_eq!(owner.in_category(PermissionCategory::Admin).count(), 0);
        assert!(owner.iter().all(|p| p.category().is_board_scoped()));
        assert!(!owner.has(Permission::BoardsCreate));
    }

    #[test]
    fn test_list_all_covers_catalog() {
        let registry = AuthzRegistry::standard();
        let all = registry.list_all();
        assert_eq!(all.len(), Permission::all().len());
        assert!(registry.tier(BoardRole::Owner).is_subset(&all));
    }
}
