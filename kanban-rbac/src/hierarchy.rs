//! # Role Hierarchy
//!
//! Rank tables for system and board roles plus the pure decision helpers the
//! membership-management layer calls before committing a role change.
//!
//! Everything here is deterministic and performs no I/O. Unrecognized role
//! names rank as `0` and are never allowed to act or be assigned.

use std::collections::HashMap;

use crate::decision::Decision;
use crate::roles::{BoardRole, SystemRole};

/// Rank tables for both role hierarchies.
///
/// System role names are matched exactly; board role names are matched
/// case-insensitively.
///
/// # Example
///
/// ```
/// use kanban_rbac::RoleHierarchy;
///
/// let hierarchy = RoleHierarchy::standard();
/// assert!(hierarchy.is_system_higher_than("SuperAdmin", "Admin"));
/// assert_eq!(hierarchy.board_rank("Owner"), 4);
/// assert_eq!(hierarchy.board_rank("janitor"), 0);
///
/// let decision = hierarchy.can_assign_system_role("Admin", "SuperAdmin");
/// assert!(!decision.granted);
/// ```
#[derive(Debug, Clone)]
pub struct RoleHierarchy {
    system_ranks: HashMap<String, u32>,
}

impl Default for RoleHierarchy {
    fn default() -> Self {
        Self::standard()
    }
}

impl RoleHierarchy {
    /// Hierarchy with the built-in system roles (User < Admin < SuperAdmin).
    pub fn standard() -> Self {
        SystemRole::all()
            .into_iter()
            .fold(Self::builder(), |b, role| b.system_role(role.as_str(), role.rank()))
            .build()
    }

    /// Start an empty hierarchy for a custom system-role table.
    pub fn builder() -> RoleHierarchyBuilder {
        RoleHierarchyBuilder::default()
    }

    // ------------------------------------------------------------------
    // System roles
    // ------------------------------------------------------------------

    /// Rank of a system role, `0` if unrecognized.
    pub fn system_rank(&self, role: &str) -> u32 {
        self.system_ranks.get(role).copied().unwrap_or(0)
    }

    /// Whether `role` is a provisioned system role.
    pub fn is_valid_system_role(&self, role: &str) -> bool {
        self.system_rank(role) > 0
    }

    /// Whether `a` strictly outranks `b`.
    pub fn is_system_higher_than(&self, a: &str, b: &str) -> bool {
        self.system_rank(a) > self.system_rank(b)
    }

    /// Whether `a` ranks at least as high as `b`.
    pub fn is_system_higher_or_equal(&self, a: &str, b: &str) -> bool {
        self.system_rank(a) >= self.system_rank(b)
    }

    /// Provisioned system role names, highest rank first.
    pub fn system_roles(&self) -> Vec<&str> {
        let mut roles: Vec<(&str, u32)> = self
            .system_ranks
            .iter()
            .map(|(name, rank)| (name.as_str(), *rank))
            .collect();
        roles.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        roles.into_iter().map(|(name, _)| name).collect()
    }

    // ------------------------------------------------------------------
    // Board roles
    // ------------------------------------------------------------------

    /// Rank of a board role, `0` if unrecognized.
    pub fn board_rank(&self, role: &str) -> u32 {
        BoardRole::parse(role).map(|r| r.rank()).unwrap_or(0)
    }

    /// Whether `role` names a board role.
    pub fn is_valid_board_role(&self, role: &str) -> bool {
        self.board_rank(role) > 0
    }

    /// Whether `a` strictly outranks `b`.
    pub fn is_board_higher_than(&self, a: &str, b: &str) -> bool {
        self.board_rank(a) > self.board_rank(b)
    }

    /// Whether `a` ranks at least as high as `b`.
    pub fn is_board_higher_or_equal(&self, a: &str, b: &str) -> bool {
        self.board_rank(a) >= self.board_rank(b)
    }

    // ------------------------------------------------------------------
    // Role management gates
    // ------------------------------------------------------------------

    /// Whether an actor holding `current` may grant `target` to someone.
    ///
    /// Both roles must be provisioned and `current` must strictly outrank
    /// `target`.
    pub fn can_assign_system_role(&self, current: &str, target: &str) -> Decision {
        if !self.is_valid_system_role(current) {
            return Decision::deny(format!("Invalid current role '{current}'"));
        }
        if !self.is_valid_system_role(target) {
            return Decision::deny(format!("Invalid target role '{target}'"));
        }
        if !self.is_system_higher_than(current, target) {
            return Decision::deny(format!(
                "Role '{current}' cannot assign '{target}': target must rank below the assigner"
            ));
        }
        Decision::ok()
    }

    /// Whether an actor with board role `current` may move a member from
    /// `target_current` to `target_new`.
    ///
    /// Ownership never changes hands through this path; use an ownership
    /// transfer instead.
    pub fn can_change_board_member_role(
        &self,
        current: &str,
        target_current: &str,
        target_new: &str,
    ) -> Decision {
        for role in [current, target_current, target_new] {
            if !self.is_valid_board_role(role) {
                return Decision::deny(format!("Invalid board role '{role}'"));
            }
        }

        let owner = Some(BoardRole::Owner);
        if BoardRole::parse(current) == owner && BoardRole::parse(target_current) == owner {
            return Decision::deny("Owner cannot change their own role; transfer ownership instead");
        }
        if !self.is_board_higher_than(current, target_current) {
            return Decision::deny(format!(
                "Cannot change the role of a member with role '{target_current}' from role '{current}'"
            ));
        }
        if BoardRole::parse(target_new) == owner {
            return Decision::deny("Cannot assign the owner role; transfer ownership instead");
        }
        if !self.is_board_higher_than(current, target_new) {
            return Decision::deny(format!(
                "Role '{current}' cannot assign '{target_new}': new role must rank below the assigner"
            ));
        }
        Decision::ok()
    }

    /// Whether an actor with board role `current` may remove a member with
    /// role `target`. Self-removal is leaving the board.
    pub fn can_remove_board_member(&self, current: &str, target: &str, is_self_removal: bool) -> Decision {
        let is_owner = BoardRole::parse(current) == Some(BoardRole::Owner);

        if is_self_removal {
            if is_owner {
                return Decision::deny("Owner cannot leave the board; transfer ownership first");
            }
            return Decision::ok();
        }

        for role in [current, target] {
            if !self.is_valid_board_role(role) {
                return Decision::deny(format!("Invalid board role '{role}'"));
            }
        }
        if !self.is_board_higher_than(current, target) {
            return Decision::deny(format!(
                "Cannot remove a member with role '{target}' from role '{current}'"
            ));
        }
        Decision::ok()
    }
}

/// Builder for a [`RoleHierarchy`] with a custom system-role table.
///
/// Ranks must be positive; a role registered with rank `0` is indistinguishable
/// from an unknown role.
#[derive(Debug, Default)]
pub struct RoleHierarchyBuilder {
    system_ranks: HashMap<String, u32>,
}

impl RoleHierarchyBuilder {
    /// Register (or re-rank) a system role.
    pub fn system_role(mut self, name: impl Into<String>, rank: u32) -> Self {
        self.system_ranks.insert(name.into(), rank);
        self
    }

    /// Finish the hierarchy.
    pub fn build(self) -> RoleHierarchy {
        RoleHierarchy {
            system_ranks: self.system_ranks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD_ROLES: [&str; 4] = ["viewer", "member", "admin", "owner"];

    #[test]
    fn test_system_ranks() {
        let h = RoleHierarchy::standard();
        assert!(h.system_rank("SuperAdmin") > h.system_rank("Admin"));
        assert!(h.system_rank("Admin") > h.system_rank("User"));
        assert_eq!(h.system_rank("Nobody"), 0);
        assert_eq!(h.system_rank("admin"), 0);
        assert!(h.is_valid_system_role("User"));
        assert!(!h.is_valid_system_role(""));
        assert_eq!(h.system_roles(), vec!["SuperAdmin", "Admin", "User"]);
    }

    #[test]
    fn test_board_ranks_case_insensitive() {
        let h = RoleHierarchy::standard();
        assert_eq!(h.board_rank("OWNER"), h.board_rank("owner"));
        assert!(h.is_board_higher_than("Admin", "member"));
        assert!(h.is_board_higher_or_equal("viewer", "VIEWER"));
        assert!(!h.is_board_higher_than("viewer", "viewer"));
        assert_eq!(h.board_rank("guest"), 0);
        assert!(!h.is_valid_board_role("guest"));
    }

    #[test]
    fn test_comparisons_against_unknown() {
        let h = RoleHierarchy::standard();
        assert!(h.is_board_higher_than("viewer", "ghost"));
        assert!(!h.is_board_higher_than("ghost", "viewer"));
        assert!(h.is_system_higher_or_equal("ghost", "phantom"));
    }

    #[test]
    fn test_can_assign_system_role() {
        let h = RoleHierarchy::standard();
        assert!(!h.can_assign_system_role("Admin", "SuperAdmin").granted);
        assert!(!h.can_assign_system_role("Admin", "Admin").granted);

        let ok = h.can_assign_system_role("SuperAdmin", "Admin");
        assert!(ok.granted);
        assert_eq!(ok.reason(), "OK");

        assert!(h.can_assign_system_role("Admin", "User").granted);
        assert!(!h.can_assign_system_role("SuperAdmin", "Root").granted);
        assert!(!h.can_assign_system_role("Root", "User").granted);
    }

    #[test]
    fn test_can_change_board_member_role_exhaustive() {
        let h = RoleHierarchy::standard();
        for current in BOARD_ROLES {
            for target_current in BOARD_ROLES {
                for target_new in BOARD_ROLES {
                    let decision = h.can_change_board_member_role(current, target_current, target_new);
                    let expected = target_new != "owner"
                        && h.board_rank(current) > h.board_rank(target_current)
                        && h.board_rank(current) > h.board_rank(target_new);
                    assert_eq!(
                        decision.granted, expected,
                        "{current} changing {target_current} -> {target_new}: {}",
                        decision.reason()
                    );
                    assert!(!decision.reason().is_empty());
                }
            }
        }
    }

    #[test]
    fn test_owner_cannot_change_own_role() {
        let h = RoleHierarchy::standard();
        for target_new in BOARD_ROLES {
            let decision = h.can_change_board_member_role("owner", "owner", target_new);
            assert!(!decision.granted);
        }
        assert!(h
            .can_change_board_member_role("Owner", "OWNER", "admin")
            .reason()
            .contains("transfer ownership"));
    }

    #[test]
    fn test_change_role_rejects_invalid_roles() {
        let h = RoleHierarchy::standard();
        assert!(!h.can_change_board_member_role("owner", "member", "superuser").granted);
        assert!(!h.can_change_board_member_role("owner", "stranger", "viewer").granted);
        assert!(!h.can_change_board_member_role("root", "viewer", "viewer").granted);
        assert!(h.can_change_board_member_role("owner", "member", "admin").granted);
        assert!(h.can_change_board_member_role("admin", "viewer", "member").granted);
    }

    #[test]
    fn test_can_remove_board_member() {
        let h = RoleHierarchy::standard();
        assert!(!h.can_remove_board_member("owner", "owner", true).granted);
        for role in ["viewer", "member", "admin"] {
            assert!(h.can_remove_board_member(role, role, true).granted);
        }

        for current in BOARD_ROLES {
            for target in BOARD_ROLES {
                let decision = h.can_remove_board_member(current, target, false);
                assert_eq!(decision.granted, h.board_rank(current) > h.board_rank(target));
            }
        }
        assert!(!h.can_remove_board_member("nobody", "ghost", false).granted);
    }

    #[test]
    fn test_remove_rejects_unknown_target_role() {
        let h = RoleHierarchy::standard();
        for current in BOARD_ROLES {
            let decision = h.can_remove_board_member(current, "ghost", false);
            assert_eq!(decision, Decision::deny("Invalid board role 'ghost'"));
        }
        assert!(!h.can_remove_board_member("owner", "", false).granted);
    }

    #[test]
    fn test_custom_system_table() {
        let h = RoleHierarchy::builder()
            .system_role("Operator", 10)
            .system_role("Auditor", 5)
            .build();
        assert!(h.can_assign_system_role("Operator", "Auditor").granted);
        assert!(!h.is_valid_system_role("SuperAdmin"));
    }
}
