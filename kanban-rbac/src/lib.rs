//! # Kanban RBAC
//!
//! Permission catalog, role hierarchies and board-tier permission sets for
//! the kanban authorization engine.
//!
//! ## Overview
//!
//! The kanban-rbac crate handles:
//! - **Catalog**: Every permission identifier, grouped by resource category
//! - **Roles**: Account-wide system roles and per-board roles
//! - **Permission Sets**: Cumulative board-tier sets (viewer ⊂ member ⊂ admin ⊂ owner)
//! - **Hierarchy**: Rank comparison and role-management gates
//! - **Registry**: The immutable bundle injected into the resolution service
//!
//! ## Architecture
//!
//! ```text
//! Permission = "<resource>.<action>"
//!
//! Examples:
//!   "boards.view"          - View a board
//!   "cards.create"         - Create cards on a board
//!   "admin.manage_roles"   - Assign system roles (system-level only)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use kanban_rbac::{AuthzRegistry, Permission};
//!
//! let registry = AuthzRegistry::standard();
//!
//! // Board roles are cumulative
//! let member = registry.permissions_for("member");
//! assert!(member.has(Permission::CardsCreate));
//! assert!(!member.has(Permission::ColumnsDelete));
//!
//! // Role management gates
//! let hierarchy = registry.hierarchy();
//! assert!(hierarchy.can_change_board_member_role("admin", "viewer", "member").granted);
//! assert!(!hierarchy.can_remove_board_member("owner", "owner", true).granted);
//! ```
//!
//! ## Integration with kanban-authz
//!
//! System-role permission claims are provisioned externally; this crate only
//! ranks system roles. The resolution service in `kanban-authz` combines both.

pub mod catalog;
pub mod decision;
pub mod hierarchy;
pub mod permissions;
pub mod registry;
pub mod roles;

// Re-export main types for convenience
pub use catalog::{Permission, PermissionCategory};
pub use decision::Decision;
pub use hierarchy::{RoleHierarchy, RoleHierarchyBuilder};
pub use permissions::PermissionSet;
pub use registry::AuthzRegistry;
pub use roles::{BoardRole, SystemRole};
