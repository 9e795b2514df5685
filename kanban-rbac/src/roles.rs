//! Role definitions
//!
//! This module defines the two independent role hierarchies: account-wide
//! system roles and per-board roles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in account-wide role.
///
/// The hierarchy is: User < Admin < SuperAdmin. Deployments may provision a
/// different table through [`crate::RoleHierarchy::builder`]; these are the
/// defaults. The permissions a system role grants are assigned externally
/// when the role is provisioned.
///
/// # Examples
///
/// ```
/// use kanban_rbac::SystemRole;
///
/// assert!(SystemRole::SuperAdmin > SystemRole::Admin);
/// assert_eq!(SystemRole::parse("Admin"), Some(SystemRole::Admin));
/// assert_eq!(SystemRole::parse("admin"), None);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SystemRole {
    /// Regular account
    User = 1,

    /// Platform administrator
    Admin = 2,

    /// Unrestricted operator
    SuperAdmin = 3,
}

impl SystemRole {
    /// Rank within the system hierarchy.
    pub fn rank(&self) -> u32 {
        *self as u32
    }

    /// Parse a system role name. Names are matched exactly.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "User" => Some(Self::User),
            "Admin" => Some(Self::Admin),
            "SuperAdmin" => Some(Self::SuperAdmin),
            _ => None,
        }
    }

    /// Get the role name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
            Self::SuperAdmin => "SuperAdmin",
        }
    }

    /// All built-in system roles, lowest rank first.
    pub fn all() -> [Self; 3] {
        [Self::User, Self::Admin, Self::SuperAdmin]
    }
}

impl fmt::Display for SystemRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User role within a board.
///
/// Roles are cumulative, each tier holding every permission of the tiers
/// below it. The hierarchy is: Viewer < Member < Admin < Owner
///
/// # Permission Model
///
/// - **Viewer**: Read-only access to the board
/// - **Member**: Can work with cards
/// - **Admin**: Can manage columns and members
/// - **Owner**: Full board control including deletion and ownership transfer
///
/// Owner is never assigned through a membership change; it follows from
/// `Board::owner_id`.
///
/// # Examples
///
/// ```
/// use kanban_rbac::BoardRole;
///
/// assert_eq!(BoardRole::parse("ADMIN"), Some(BoardRole::Admin));
/// assert!(BoardRole::Owner > BoardRole::Admin);
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BoardRole {
    /// Read-only access
    #[default]
    Viewer = 1,

    /// Can create and edit cards
    Member = 2,

    /// Can manage columns and members
    Admin = 3,

    /// Board owner
    Owner = 4,
}

impl BoardRole {
    /// Rank within the board hierarchy.
    pub fn rank(&self) -> u32 {
        *self as u32
    }

    /// Parse role from string representation (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use kanban_rbac::BoardRole;
    ///
    /// assert_eq!(BoardRole::parse("member"), Some(BoardRole::Member));
    /// assert_eq!(BoardRole::parse("Viewer"), Some(BoardRole::Viewer));
    /// assert_eq!(BoardRole::parse("editor"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "viewer" => Some(Self::Viewer),
            "member" => Some(Self::Member),
            "admin" => Some(Self::Admin),
            "owner" => Some(Self::Owner),
            _ => None,
        }
    }

    /// Get string representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Member => "member",
            Self::Admin => "admin",
            Self::Owner => "owner",
        }
    }

    /// The tier directly below this one, if any.
    pub fn below(&self) -> Option<Self> {
        match self {
            Self::Viewer => None,
            Self::Member => Some(Self::Viewer),
            Self::Admin => Some(Self::Member),
            Self::Owner => Some(Self::Admin),
        }
    }

    /// All board roles, lowest rank first.
    pub fn all() -> [Self; 4] {
        [Self::Viewer, Self::Member, Self::Admin, Self::Owner]
    }
}

impl fmt::Display for BoardRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
