//! Board domain models
//!
//! This module provides the Board entity. A board has exactly one owner and a
//! visibility level that decides whether non-members may view it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A kanban board.
///
/// Ownership is recorded here, not as a membership row: the owner holds every
/// board permission whether or not a [`crate::BoardMember`] exists for them.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use kanban_board::{Board, BoardVisibility};
///
/// let owner_id = Uuid::now_v7();
/// let board = Board::new("Roadmap", owner_id);
/// assert!(board.is_owned_by(owner_id));
/// assert_eq!(board.visibility, BoardVisibility::Private);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    /// Unique identifier for the board
    pub id: Uuid,

    /// Human-readable name
    pub name: String,

    /// The single owner of the board
    pub owner_id: Uuid,

    /// Who may view the board without a membership
    pub visibility: BoardVisibility,

    /// When the board was created
    pub created_at: DateTime<Utc>,

    /// When the board settings were last changed
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// Creates a new private board.
    ///
    /// # Arguments
    ///
    /// * `name` - Board name
    /// * `owner_id` - User who owns the board
    pub fn new(name: impl Into<String>, owner_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            owner_id,
            visibility: BoardVisibility::Private,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the board visibility.
    pub fn with_visibility(mut self, visibility: BoardVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Check whether `user_id` owns this board.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }

    /// Check whether the board is publicly viewable.
    pub fn is_public(&self) -> bool {
        self.visibility == BoardVisibility::Public
    }

    /// Change the board visibility, bumping `updated_at`.
    pub fn set_visibility(&mut self, visibility: BoardVisibility) {
        self.visibility = visibility;
        self.updated_at = Utc::now();
    }

    /// Hand ownership to another user, bumping `updated_at`.
    ///
    /// Whether the change is allowed is decided by the authorization layer.
    pub fn transfer_ownership(&mut self, new_owner_id: Uuid) {
        self.owner_id = new_owner_id;
        self.updated_at = Utc::now();
    }
}

/// Board visibility levels.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BoardVisibility {
    /// Anyone may view the board
    Public,

    /// Only the owner and members may see the board
    #[default]
    Private,
}

impl BoardVisibility {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_creation() {
        let owner_id = Uuid::now_v7();
        let board = Board::new("Sprint 12", owner_id);

        assert_eq!(board.name, "Sprint 12");
        assert_eq!(board.owner_id, owner_id);
        assert!(!board.is_public());
        assert_eq!(board.created_at, board.updated_at);
    }

    #[test]
    fn test_board_ownership() {
        let owner_id = Uuid::now_v7();
        let mut board = Board::new("Ops", owner_id);
        let other = Uuid::now_v7();

        assert!(board.is_owned_by(owner_id));
        assert!(!board.is_owned_by(other));

        board.transfer_ownership(other);
        assert!(board.is_owned_by(other));
        assert!(!board.is_owned_by(owner_id));
    }

    #[test]
    fn test_board_visibility() {
        let mut board = Board::new("Public roadmap", Uuid::now_v7()).with_visibility(BoardVisibility::Public);
        assert!(board.is_public());

        board.set_visibility(BoardVisibility::Private);
        assert!(!board.is_public());
        assert!(board.updated_at >= board.created_at);
    }

    #[test]
    fn test_visibility_parse() {
        assert_eq!(BoardVisibility::parse("PUBLIC"), Some(BoardVisibility::Public));
        assert_eq!(BoardVisibility::parse("private"), Some(BoardVisibility::Private));
        assert_eq!(BoardVisibility::parse("unlisted"), None);
        assert_eq!(BoardVisibility::Public.as_str(), "public");
        assert_eq!(BoardVisibility::default(), BoardVisibility::Private);
    }
}
