//! # Permission Catalog
//!
//! The fixed set of permission identifiers known to the platform, grouped by
//! the resource category they act on. Identifiers take the form
//! `<resource>.<action>` and are stable across releases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resource category a permission belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PermissionCategory {
    /// Board-level operations (view, edit, membership, settings).
    Boards,
    /// Column operations within a board.
    Columns,
    /// Card operations within a board.
    Cards,
    /// Account-wide administration, granted only through system roles.
    Admin,
}

impl PermissionCategory {
    /// Get the string prefix used by permissions in this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionCategory::Boards => "boards",
            PermissionCategory::Columns => "columns",
            PermissionCategory::Cards => "cards",
            PermissionCategory::Admin => "admin",
        }
    }

    /// Get all categories.
    pub fn all() -> [Self; 4] {
        [
            PermissionCategory::Boards,
            PermissionCategory::Columns,
            PermissionCategory::Cards,
            PermissionCategory::Admin,
        ]
    }

    /// Whether permissions in this category can be granted by a board role.
    ///
    /// Admin permissions only ever come from system roles or direct claims.
    pub fn is_board_scoped(&self) -> bool {
        !matches!(self, PermissionCategory::Admin)
    }
}

/// A single permission from the catalog.
///
/// # Example
///
/// ```
/// use kanban_rbac::catalog::{Permission, PermissionCategory};
///
/// let perm = Permission::CardsCreate;
/// assert_eq!(perm.as_str(), "cards.create");
/// assert_eq!(perm.category(), PermissionCategory::Cards);
/// assert_eq!(Permission::parse("cards.create"), Some(Permission::CardsCreate));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub enum Permission {
    // Boards
    /// View a board and its metadata.
    BoardsView,
    /// Create new boards.
    BoardsCreate,
    /// Rename a board or edit its description.
    BoardsEdit,
    /// Delete a board and everything on it.
    BoardsDelete,
    /// Invite, remove, and change the role of board members.
    BoardsManageMembers,
    /// Change board settings such as visibility.
    BoardsManageSettings,
    /// Hand board ownership to another member.
    BoardsTransferOwnership,

    // Columns
    /// View columns.
    ColumnsView,
    /// Add columns.
    ColumnsCreate,
    /// Rename or edit columns.
    ColumnsEdit,
    /// Delete columns.
    ColumnsDelete,
    /// Reorder columns on a board.
    ColumnsReorder,

    // Cards
    /// View cards.
    CardsView,
    /// Create cards.
    CardsCreate,
    /// Edit card content.
    CardsEdit,
    /// Delete cards.
    CardsDelete,
    /// Move cards between columns.
    CardsMove,
    /// Assign members to cards.
    CardsAssign,
    /// Comment on cards.
    CardsComment,

    // Admin
    /// Manage user accounts.
    AdminManageUsers,
    /// Assign and revoke system roles.
    AdminManageRoles,
    /// View every board regardless of membership.
    AdminViewAllBoards,
    /// Manage every board regardless of membership.
    AdminManageAllBoards,
    /// Read the audit log.
    AdminViewAuditLog,
    /// Change system-wide settings.
    AdminManageSystem,
}

const CATALOG: [Permission; 25] = [
    Permission::BoardsView,
    Permission::BoardsCreate,
    Permission::BoardsEdit,
    Permission::BoardsDelete,
    Permission::BoardsManageMembers,
    Permission::BoardsManageSettings,
    Permission::BoardsTransferOwnership,
    Permission::ColumnsView,
    Permission::ColumnsCreate,
    Permission::ColumnsEdit,
    Permission::ColumnsDelete,
    Permission::ColumnsReorder,
    Permission::CardsView,
    Permission::CardsCreate,
    Permission::CardsEdit,
    Permission::CardsDelete,
    Permission::CardsMove,
    Permission::CardsAssign,
    Permission::CardsComment,
    Permission::AdminManageUsers,
    Permission::AdminManageRoles,
    Permission::AdminViewAllBoards,
    Permission::AdminManageAllBoards,
    Permission::AdminViewAuditLog,
    Permission::AdminManageSystem,
];

impl Permission {
    /// Get the permission identifier (e.g. `"boards.view"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::BoardsView => "boards.view",
            Permission::BoardsCreate => "boards.create",
            Permission::BoardsEdit => "boards.edit",
            Permission::BoardsDelete => "boards.delete",
            Permission::BoardsManageMembers => "boards.manage_members",
            Permission::BoardsManageSettings => "boards.manage_settings",
            Permission::BoardsTransferOwnership => "boards.transfer_ownership",
            Permission::ColumnsView => "columns.view",
            Permission::ColumnsCreate => "columns.create",
            Permission::ColumnsEdit => "columns.edit",
            Permission::ColumnsDelete => "columns.delete",
            Permission::ColumnsReorder => "columns.reorder",
            Permission::CardsView => "cards.view",
            Permission::CardsCreate => "cards.create",
            Permission::CardsEdit => "cards.edit",
            Permission::CardsDelete => "cards.delete",
            Permission::CardsMove => "cards.move",
            Permission::CardsAssign => "cards.assign",
            Permission::CardsComment => "cards.comment",
            Permission::AdminManageUsers => "admin.manage_users",
            Permission::AdminManageRoles => "admin.manage_roles",
            Permission::AdminViewAllBoards => "admin.view_all_boards",
            Permission::AdminManageAllBoards => "admin.manage_all_boards",
            Permission::AdminViewAuditLog => "admin.view_audit_log",
            Permission::AdminManageSystem => "admin.manage_system",
        }
    }

    /// Parse a permission identifier.
    ///
    /// Identifiers are matched exactly; anything outside the catalog yields
    /// `None` so callers fail closed on claims they do not understand.
    pub fn parse(s: &str) -> Option<Self> {
        CATALOG.iter().copied().find(|p| p.as_str() == s)
    }

    /// Get the category this permission belongs to.
    pub fn category(&self) -> PermissionCategory {
        match self {
            Permission::BoardsView
            | Permission::BoardsCreate
            | Permission::BoardsEdit
            | Permission::BoardsDelete
            | Permission::BoardsManageMembers
            | Permission::BoardsManageSettings
            | Permission::BoardsTransferOwnership => PermissionCategory::Boards,
            Permission::ColumnsView
            | Permission::ColumnsCreate
            | Permission::ColumnsEdit
            | Permission::ColumnsDelete
            | Permission::ColumnsReorder => PermissionCategory::Columns,
            Permission::CardsView
            | Permission::CardsCreate
            | Permission::CardsEdit
            | Permission::CardsDelete
            | Permission::CardsMove
            | Permission::CardsAssign
            | Permission::CardsComment => PermissionCategory::Cards,
            Permission::AdminManageUsers
            | Permission::AdminManageRoles
            | Permission::AdminViewAllBoards
            | Permission::AdminManageAllBoards
            | Permission::AdminViewAuditLog
            | Permission::AdminManageSystem => PermissionCategory::Admin,
        }
    }

    /// Every permission in the catalog.
    pub fn all() -> &'static [Permission] {
        &CATALOG
    }

    /// Every permission in one category.
    pub fn in_category(category: PermissionCategory) -> impl Iterator<Item = Permission> {
        CATALOG.iter().copied().filter(move |p| p.category() == category)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.as_str().to_string()
    }
}

impl TryFrom<String> for Permission {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Permission::parse(&value).ok_or_else(|| format!("unknown permission: {value}"))
    }
}
